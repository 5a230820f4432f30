use cellfmt::date_serial::{date_to_serial, datetime_to_serial, serial_to_date, serial_to_datetime};
use cellfmt::{render, DateSystem, RenderOptions, TypeTag};
use chrono::NaiveDate;

#[test]
fn test_serial_to_date_known_date() {
    let (y, m, d) = serial_to_date(46031.0, DateSystem::Date1900).unwrap();
    assert_eq!((y, m, d), (2026, 1, 9));
}

#[test]
fn test_date_to_serial() {
    let serial = date_to_serial(2026, 1, 9, DateSystem::Date1900).unwrap();
    assert!((serial - 46031.0).abs() < 0.0001);
    assert_eq!(date_to_serial(2026, 2, 30, DateSystem::Date1900), None);
}

#[test]
fn test_datetime_roundtrip() {
    let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
        .and_then(|d| d.and_hms_opt(18, 30, 15))
        .unwrap();
    let serial = datetime_to_serial(dt, DateSystem::Date1900).unwrap();
    assert_eq!(serial_to_datetime(serial, DateSystem::Date1900), Some(dt));
}

#[test]
fn test_1904_system_shifts_serials() {
    let opts = RenderOptions::default().with_date_system(DateSystem::Date1904);
    // 1462 days separate the two epochs
    assert_eq!(
        render(46031.0 - 1462.0, TypeTag::Date, "yyyy-mm-dd", &opts).unwrap(),
        "2026-01-09"
    );
}
