// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The recurrence examples of RFC 5545, section 3.8.5.3, anchored in
//! New York. Each list starts with DTSTART.

mod common;

use recurcal_core::{RecurrenceSet, occurrences};

use crate::common::{far_horizon, first, floating, instances, keys, ny, rule};

#[test]
fn daily_for_ten_occurrences() {
    let got = instances("19970902T090000", "FREQ=DAILY;COUNT=10");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970903T090000", "19970904T090000",
            "19970905T090000", "19970906T090000", "19970907T090000",
            "19970908T090000", "19970909T090000", "19970910T090000",
            "19970911T090000",
        ]
    );
}

#[test]
fn every_ten_days_five_occurrences() {
    let got = instances("19970902T090000", "FREQ=DAILY;INTERVAL=10;COUNT=5");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970912T090000", "19970922T090000",
            "19971002T090000", "19971012T090000",
        ]
    );
}

#[test]
fn every_other_day_forever() {
    let got = first("19970902T090000", "FREQ=DAILY;INTERVAL=2", 6);
    assert_eq!(
        got,
        [
            "19970902T090000", "19970904T090000", "19970906T090000",
            "19970908T090000", "19970910T090000", "19970912T090000",
        ]
    );
}

#[test]
fn weekly_for_ten_occurrences() {
    let got = instances("19970902T090000", "FREQ=WEEKLY;COUNT=10");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970909T090000", "19970916T090000",
            "19970923T090000", "19970930T090000", "19971007T090000",
            "19971014T090000", "19971021T090000", "19971028T090000",
            "19971104T090000",
        ]
    );
}

#[test]
fn weekly_until_december_24() {
    let got = instances("19970902T090000", "FREQ=WEEKLY;UNTIL=19971224T000000Z");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970909T090000", "19970916T090000",
            "19970923T090000", "19970930T090000", "19971007T090000",
            "19971014T090000", "19971021T090000", "19971028T090000",
            "19971104T090000", "19971111T090000", "19971118T090000",
            "19971125T090000", "19971202T090000", "19971209T090000",
            "19971216T090000", "19971223T090000",
        ]
    );
}

#[test]
fn every_other_week_forever() {
    let got = first("19970902T090000", "FREQ=WEEKLY;INTERVAL=2;WKST=SU", 6);
    assert_eq!(
        got,
        [
            "19970902T090000", "19970916T090000", "19970930T090000",
            "19971014T090000", "19971028T090000", "19971111T090000",
        ]
    );
}

#[test]
fn every_other_week_on_monday_wednesday_friday() {
    let got = instances(
        "19970901T090000",
        "FREQ=WEEKLY;INTERVAL=2;UNTIL=19971224T000000Z;WKST=SU;BYDAY=MO,WE,FR",
    );
    assert_eq!(
        got,
        [
            "19970901T090000", "19970903T090000", "19970905T090000",
            "19970915T090000", "19970917T090000", "19970919T090000",
            "19970929T090000", "19971001T090000", "19971003T090000",
            "19971013T090000", "19971015T090000", "19971017T090000",
            "19971027T090000", "19971029T090000", "19971031T090000",
            "19971110T090000", "19971112T090000", "19971114T090000",
            "19971124T090000", "19971126T090000", "19971128T090000",
            "19971208T090000", "19971210T090000", "19971212T090000",
            "19971222T090000",
        ]
    );
}

#[test]
fn every_other_week_on_tuesday_and_thursday() {
    let got = instances("19970902T090000", "FREQ=WEEKLY;INTERVAL=2;COUNT=8;WKST=SU;BYDAY=TU,TH");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970904T090000", "19970916T090000",
            "19970918T090000", "19970930T090000", "19971002T090000",
            "19971014T090000", "19971016T090000",
        ]
    );
}

#[test]
fn monthly_on_the_first_friday() {
    let got = instances("19970905T090000", "FREQ=MONTHLY;COUNT=10;BYDAY=1FR");
    assert_eq!(
        got,
        [
            "19970905T090000", "19971003T090000", "19971107T090000",
            "19971205T090000", "19980102T090000", "19980206T090000",
            "19980306T090000", "19980403T090000", "19980501T090000",
            "19980605T090000",
        ]
    );
}

#[test]
fn monthly_on_the_first_friday_until_december_24() {
    let got = instances("19970905T090000", "FREQ=MONTHLY;UNTIL=19971224T000000Z;BYDAY=1FR");
    assert_eq!(
        got,
        [
            "19970905T090000", "19971003T090000", "19971107T090000",
            "19971205T090000",
        ]
    );
}

#[test]
fn every_other_month_on_first_and_last_sunday() {
    let got = instances("19970907T090000", "FREQ=MONTHLY;INTERVAL=2;COUNT=10;BYDAY=1SU,-1SU");
    assert_eq!(
        got,
        [
            "19970907T090000", "19970928T090000", "19971102T090000",
            "19971130T090000", "19980104T090000", "19980125T090000",
            "19980301T090000", "19980329T090000", "19980503T090000",
            "19980531T090000",
        ]
    );
}

#[test]
fn monthly_on_the_second_to_last_monday() {
    let got = instances("19970922T090000", "FREQ=MONTHLY;COUNT=6;BYDAY=-2MO");
    assert_eq!(
        got,
        [
            "19970922T090000", "19971020T090000", "19971117T090000",
            "19971222T090000", "19980119T090000", "19980216T090000",
        ]
    );
}

#[test]
fn monthly_on_the_third_to_last_day() {
    let got = first("19970928T090000", "FREQ=MONTHLY;BYMONTHDAY=-3", 6);
    assert_eq!(
        got,
        [
            "19970928T090000", "19971029T090000", "19971128T090000",
            "19971229T090000", "19980129T090000", "19980226T090000",
        ]
    );
}

#[test]
fn monthly_on_the_2nd_and_15th() {
    let got = instances("19970902T090000", "FREQ=MONTHLY;COUNT=10;BYMONTHDAY=2,15");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970915T090000", "19971002T090000",
            "19971015T090000", "19971102T090000", "19971115T090000",
            "19971202T090000", "19971215T090000", "19980102T090000",
            "19980115T090000",
        ]
    );
}

#[test]
fn monthly_on_the_first_and_last_day() {
    let got = instances("19970930T090000", "FREQ=MONTHLY;COUNT=10;BYMONTHDAY=1,-1");
    assert_eq!(
        got,
        [
            "19970930T090000", "19971001T090000", "19971031T090000",
            "19971101T090000", "19971130T090000", "19971201T090000",
            "19971231T090000", "19980101T090000", "19980131T090000",
            "19980201T090000",
        ]
    );
}

#[test]
fn every_18_months_on_the_10th_to_15th() {
    let got = instances(
        "19970910T090000",
        "FREQ=MONTHLY;INTERVAL=18;COUNT=10;BYMONTHDAY=10,11,12,13,14,15",
    );
    assert_eq!(
        got,
        [
            "19970910T090000", "19970911T090000", "19970912T090000",
            "19970913T090000", "19970914T090000", "19970915T090000",
            "19990310T090000", "19990311T090000", "19990312T090000",
            "19990313T090000",
        ]
    );
}

#[test]
fn every_tuesday_every_other_month() {
    let got = first("19970902T090000", "FREQ=MONTHLY;INTERVAL=2;BYDAY=TU", 18);
    assert_eq!(
        got,
        [
            "19970902T090000", "19970909T090000", "19970916T090000",
            "19970923T090000", "19970930T090000", "19971104T090000",
            "19971111T090000", "19971118T090000", "19971125T090000",
            "19980106T090000", "19980113T090000", "19980120T090000",
            "19980127T090000", "19980303T090000", "19980310T090000",
            "19980317T090000", "19980324T090000", "19980331T090000",
        ]
    );
}

#[test]
fn yearly_in_june_and_july() {
    let got = instances("19970610T090000", "FREQ=YEARLY;COUNT=10;BYMONTH=6,7");
    assert_eq!(
        got,
        [
            "19970610T090000", "19970710T090000", "19980610T090000",
            "19980710T090000", "19990610T090000", "19990710T090000",
            "20000610T090000", "20000710T090000", "20010610T090000",
            "20010710T090000",
        ]
    );
}

#[test]
fn every_other_year_in_january_february_march() {
    let got = instances("19970310T090000", "FREQ=YEARLY;INTERVAL=2;COUNT=10;BYMONTH=1,2,3");
    assert_eq!(
        got,
        [
            "19970310T090000", "19990110T090000", "19990210T090000",
            "19990310T090000", "20010110T090000", "20010210T090000",
            "20010310T090000", "20030110T090000", "20030210T090000",
            "20030310T090000",
        ]
    );
}

#[test]
fn every_third_year_on_days_1_100_200() {
    let got = instances(
        "19970101T090000",
        "FREQ=YEARLY;INTERVAL=3;COUNT=10;BYYEARDAY=1,100,200",
    );
    assert_eq!(
        got,
        [
            "19970101T090000", "19970410T090000", "19970719T090000",
            "20000101T090000", "20000409T090000", "20000718T090000",
            "20030101T090000", "20030410T090000", "20030719T090000",
            "20060101T090000",
        ]
    );
}

#[test]
fn every_20th_monday_of_the_year() {
    let got = first("19970519T090000", "FREQ=YEARLY;BYDAY=20MO", 3);
    assert_eq!(
        got,
        [
            "19970519T090000", "19980518T090000", "19990517T090000",
        ]
    );
}

#[test]
fn monday_of_week_number_20() {
    let got = first("19970512T090000", "FREQ=YEARLY;BYWEEKNO=20;BYDAY=MO", 3);
    assert_eq!(
        got,
        [
            "19970512T090000", "19980511T090000", "19990517T090000",
        ]
    );
}

#[test]
fn every_thursday_in_march() {
    let got = first("19970313T090000", "FREQ=YEARLY;BYMONTH=3;BYDAY=TH", 11);
    assert_eq!(
        got,
        [
            "19970313T090000", "19970320T090000", "19970327T090000",
            "19980305T090000", "19980312T090000", "19980319T090000",
            "19980326T090000", "19990304T090000", "19990311T090000",
            "19990318T090000", "19990325T090000",
        ]
    );
}

#[test]
fn every_thursday_in_summer() {
    let got = first("19970605T090000", "FREQ=YEARLY;BYDAY=TH;BYMONTH=6,7,8", 16);
    assert_eq!(
        got,
        [
            "19970605T090000", "19970612T090000", "19970619T090000",
            "19970626T090000", "19970703T090000", "19970710T090000",
            "19970717T090000", "19970724T090000", "19970731T090000",
            "19970807T090000", "19970814T090000", "19970821T090000",
            "19970828T090000", "19980604T090000", "19980611T090000",
            "19980618T090000",
        ]
    );
}

#[test]
fn first_saturday_after_the_first_sunday() {
    let got = first("19970913T090000", "FREQ=MONTHLY;BYDAY=SA;BYMONTHDAY=7,8,9,10,11,12,13", 10);
    assert_eq!(
        got,
        [
            "19970913T090000", "19971011T090000", "19971108T090000",
            "19971213T090000", "19980110T090000", "19980207T090000",
            "19980307T090000", "19980411T090000", "19980509T090000",
            "19980613T090000",
        ]
    );
}

#[test]
fn us_presidential_election_day() {
    let got = first(
        "19961105T090000",
        "FREQ=YEARLY;INTERVAL=4;BYMONTH=11;BYDAY=TU;BYMONTHDAY=2,3,4,5,6,7,8",
        3,
    );
    assert_eq!(
        got,
        [
            "19961105T090000", "20001107T090000", "20041102T090000",
        ]
    );
}

#[test]
fn third_tuesday_wednesday_or_thursday() {
    let got = instances("19970904T090000", "FREQ=MONTHLY;COUNT=3;BYDAY=TU,WE,TH;BYSETPOS=3");
    assert_eq!(
        got,
        [
            "19970904T090000", "19971007T090000", "19971106T090000",
        ]
    );
}

#[test]
fn second_to_last_weekday_of_the_month() {
    let got = first("19970929T090000", "FREQ=MONTHLY;BYDAY=MO,TU,WE,TH,FR;BYSETPOS=-2", 7);
    assert_eq!(
        got,
        [
            "19970929T090000", "19971030T090000", "19971127T090000",
            "19971230T090000", "19980129T090000", "19980226T090000",
            "19980330T090000",
        ]
    );
}

#[test]
fn every_15_minutes_six_times() {
    let got = instances("19970902T090000", "FREQ=MINUTELY;INTERVAL=15;COUNT=6");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970902T091500", "19970902T093000",
            "19970902T094500", "19970902T100000", "19970902T101500",
        ]
    );
}

#[test]
fn every_hour_and_a_half_four_times() {
    let got = instances("19970902T090000", "FREQ=MINUTELY;INTERVAL=90;COUNT=4");
    assert_eq!(
        got,
        [
            "19970902T090000", "19970902T103000", "19970902T120000",
            "19970902T133000",
        ]
    );
}

#[test]
fn week_start_monday() {
    let got = instances("19970805T090000", "FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=MO");
    assert_eq!(
        got,
        [
            "19970805T090000", "19970810T090000", "19970819T090000",
            "19970824T090000",
        ]
    );
}

#[test]
fn week_start_sunday() {
    let got = instances("19970805T090000", "FREQ=WEEKLY;INTERVAL=2;COUNT=4;BYDAY=TU,SU;WKST=SU");
    assert_eq!(
        got,
        [
            "19970805T090000", "19970817T090000", "19970819T090000",
            "19970831T090000",
        ]
    );
}

#[test]
fn invalid_dates_are_skipped() {
    let got = instances("20070115T090000", "FREQ=MONTHLY;BYMONTHDAY=15,30;COUNT=5");
    assert_eq!(
        got,
        [
            "20070115T090000", "20070130T090000", "20070215T090000",
            "20070315T090000", "20070330T090000",
        ]
    );
}
#[test]
fn daily_until_december_24() {
    let got = instances("19970902T090000", "FREQ=DAILY;UNTIL=19971224T000000Z");
    assert_eq!(got.len(), 113);
    assert_eq!(got.first().map(String::as_str), Some("19970902T090000"));
    assert_eq!(got.last().map(String::as_str), Some("19971223T090000"));
}

#[test]
fn every_day_in_january_for_three_years() {
    let yearly = instances(
        "19980101T090000",
        "FREQ=YEARLY;UNTIL=20000131T140000Z;BYMONTH=1;BYDAY=SU,MO,TU,WE,TH,FR,SA",
    );
    let daily = instances(
        "19980101T090000",
        "FREQ=DAILY;UNTIL=20000131T140000Z;BYMONTH=1",
    );
    assert_eq!(yearly.len(), 93);
    assert_eq!(yearly, daily);
    assert_eq!(yearly.get(30).map(String::as_str), Some("19980131T090000"));
    assert_eq!(yearly.get(31).map(String::as_str), Some("19990101T090000"));
    assert_eq!(yearly.last().map(String::as_str), Some("20000131T090000"));
}

#[test]
fn every_twenty_minutes_from_nine_to_five() {
    let daily = first(
        "19970902T090000",
        "FREQ=DAILY;BYHOUR=9,10,11,12,13,14,15,16;BYMINUTE=0,20,40",
        26,
    );
    let minutely = first(
        "19970902T090000",
        "FREQ=MINUTELY;INTERVAL=20;BYHOUR=9,10,11,12,13,14,15,16",
        26,
    );
    assert_eq!(daily, minutely);
    assert_eq!(daily.get(23).map(String::as_str), Some("19970902T164000"));
    assert_eq!(daily.get(24).map(String::as_str), Some("19970903T090000"));
    assert_eq!(daily.get(25).map(String::as_str), Some("19970903T092000"));
}

#[test]
fn every_three_hours_until_five_pm() {
    let anchor = floating("19970902T090000");
    let set = RecurrenceSet::new(anchor)
        .with_rule(rule("FREQ=HOURLY;INTERVAL=3;UNTIL=19970902T170000"));
    assert_eq!(
        keys(&set.instances(&far_horizon())),
        ["19970902T090000", "19970902T120000", "19970902T150000"]
    );
}

#[test]
fn every_friday_the_13th() {
    let anchor = ny("19970902T090000");
    let set = RecurrenceSet::new(anchor.clone())
        .with_rule(rule("FREQ=MONTHLY;BYDAY=FR;BYMONTHDAY=13"))
        .with_exdates([anchor]);
    let got = set.instances(&ny("20011231T000000"));
    assert_eq!(
        keys(&got),
        [
            "19980213T090000", "19980313T090000", "19981113T090000",
            "19990813T090000", "20001013T090000", "20010413T090000",
            "20010713T090000",
        ]
    );
    assert_eq!(got.first().map(|i| i.index()), Some(1));
}

#[test]
fn lazy_expansion_of_an_unbounded_rule_stops_on_demand() {
    let anchor = ny("19970902T090000");
    let mut iter = occurrences(&rule("FREQ=DAILY"), &anchor, &far_horizon());
    let third = iter.nth(2).map(|o| o.key());
    assert_eq!(third.as_deref(), Some("19970905T090000"));
}
