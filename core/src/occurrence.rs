// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};

use recurcal_ical::DateTimePoint;

/// One instance of a recurrence.
///
/// The index counts from the anchor: the anchor itself is index `0` and the
/// first value the engine produces after it is index `1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    index: usize,
    point: DateTimePoint,
}

impl Occurrence {
    /// Creates an occurrence.
    #[must_use]
    pub fn new(index: usize, point: DateTimePoint) -> Self {
        Self { index, point }
    }

    /// Position relative to the anchor.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The date or date-time of this instance.
    #[must_use]
    pub fn point(&self) -> &DateTimePoint {
        &self.point
    }

    /// Consumes the occurrence, returning its date or date-time.
    #[must_use]
    pub fn into_point(self) -> DateTimePoint {
        self.point
    }

    /// Canonical text of the date or date-time, used for de-duplication.
    #[must_use]
    pub fn key(&self) -> String {
        self.point.key()
    }
}

impl Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.index, self.point)
    }
}
