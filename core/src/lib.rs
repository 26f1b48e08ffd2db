// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expansion of iCalendar (RFC 5545) recurrence rules into occurrences,
//! and the recurrence sets built from them.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

mod config;
pub mod expand;
mod occurrence;
mod recurrence_set;

pub use crate::config::{Config, ConfigHorizon};
pub use crate::expand::{
    Occurrences, RecurrenceStrategy, expand, expand_with, occurrences, select_strategy,
};
pub use crate::occurrence::Occurrence;
pub use crate::recurrence_set::RecurrenceSet;
