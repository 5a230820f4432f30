use cellfmt::{render_default, TypeTag, Value};
use chrono::NaiveDate;

#[test]
fn test_value_from_numbers() {
    assert_eq!(Value::from(42.0), Value::Number(42.0));
    assert_eq!(Value::from(42_i32), Value::Number(42.0));
    assert_eq!(Value::from(42_i64), Value::Number(42.0));
}

#[test]
fn test_value_from_date() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
    let value = Value::from(day);
    assert_eq!(value, Value::Date(day));
    assert_eq!(value.type_name(), "date");
    assert_eq!(
        render_default(value, TypeTag::Date, "yyyy-mm-dd hh:mm:ss").unwrap(),
        "2024-03-05 00:00:00"
    );
}

#[test]
fn test_type_tag_from_reader_codes() {
    assert_eq!("n".parse::<TypeTag>(), Ok(TypeTag::Numeric));
    assert_eq!("d".parse::<TypeTag>(), Ok(TypeTag::Date));
    assert!("s".parse::<TypeTag>().is_err());
}
