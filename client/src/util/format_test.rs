use time::macros::datetime;

use super::*;

#[test]
fn short_format_is_month_day_year() {
    assert_eq!(format_date(datetime!(2025-03-05 14:07:09), DateFormat::Short), "3/5/2025");
}

#[test]
fn long_format_spells_month() {
    assert_eq!(format_date(datetime!(2025-03-05 14:07:09), DateFormat::Long), "March 5, 2025");
}

#[test]
fn datetime_format_uses_twelve_hour_clock() {
    assert_eq!(
        format_date(datetime!(2025-03-05 14:07:09), DateFormat::DateTime),
        "3/5/2025, 2:07:09 PM"
    );
    assert_eq!(
        format_date(datetime!(2025-12-31 00:00:05), DateFormat::DateTime),
        "12/31/2025, 12:00:05 AM"
    );
    assert_eq!(
        format_date(datetime!(2025-12-31 12:30:00), DateFormat::DateTime),
        "12/31/2025, 12:30:00 PM"
    );
}

#[test]
fn unknown_format_name_falls_back_to_iso_like() {
    assert_eq!(
        format_date_named(datetime!(2025-03-05 14:07:09), "iso"),
        "2025-03-05 14:07:09"
    );
    assert_eq!(format_date_named(datetime!(2025-03-05 14:07:09), "long"), "March 5, 2025");
}

#[test]
fn parse_date_accepts_common_layouts() {
    assert_eq!(parse_date("2025-03-05"), Some(datetime!(2025-03-05 0:00)));
    assert_eq!(parse_date("2025-03-05T14:07:09"), Some(datetime!(2025-03-05 14:07:09)));
    assert_eq!(parse_date(" 2025-03-05 14:07:09 "), Some(datetime!(2025-03-05 14:07:09)));
    assert_eq!(parse_date("yesterday"), None);
}

#[test]
fn format_number_rounds_to_decimals() {
    assert_eq!(format_number(12.3456, 2), "12.35");
    assert_eq!(format_number(2.0, 0), "2");
    assert_eq!(format_number(1.5, 3), "1.500");
}

#[test]
fn format_percentage_scales_ratio() {
    assert_eq!(format_percentage(0.256, 1), "25.6%");
    assert_eq!(format_percentage(1.0, 0), "100%");
}
