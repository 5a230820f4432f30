//! Property tests for the renderer.

use cellfmt::{
    currency_symbol, format_fixed_decimal, render, render_default, RenderOptions, TypeTag,
};
use chrono::NaiveDate;
use proptest::prelude::*;

fn decimal_code(digits: usize) -> String {
    if digits == 0 {
        "0".to_string()
    } else {
        format!("0.{}", "0".repeat(digits))
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_fixed_decimal_digit_count(value in -1.0e9..1.0e9f64, digits in 1usize..7) {
        let text = render_default(value, TypeTag::Numeric, &decimal_code(digits)).unwrap();
        let (_, fraction) = text.split_once('.').expect("decimal point");
        prop_assert_eq!(fraction.len(), digits);
        prop_assert!(fraction.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn prop_percentage_is_scaled_fixed_decimal(value in -1.0e6..1.0e6f64, digits in 0usize..5) {
        let opts = RenderOptions::default();
        let percent_code = format!("{}%", decimal_code(digits));
        let percent = render(value, TypeTag::Numeric, &percent_code, &opts).unwrap();
        let fixed = format_fixed_decimal(value * 100.0, &decimal_code(digits), &opts);
        prop_assert_eq!(percent, format!("{}%", fixed));
    }

    #[test]
    fn prop_fixed_denominator_error_bound(
        value in -1.0e6..1.0e6f64,
        (code, denom) in prop::sample::select(vec![
            ("#\\ ?/2", 2.0),
            ("#\\ ?/4", 4.0),
            ("#\\ ?/8", 8.0),
            ("#\\ ??/16", 16.0),
            ("#\\ ?/10", 10.0),
            ("#\\ ??/100", 100.0),
        ]),
    ) {
        let text = render_default(value, TypeTag::Numeric, code).unwrap();
        let (whole, fraction) = text.split_once(' ').unwrap();
        let (num, den) = fraction.split_once('/').unwrap();
        let whole: f64 = whole.parse().unwrap();
        let num: f64 = num.parse().unwrap();
        let den: f64 = den.parse().unwrap();
        prop_assert_eq!(den, denom);
        prop_assert!((whole + num / den - value).abs() <= 0.5 / denom + 1e-6);
    }

    #[test]
    fn prop_currency_symbol_between_quotes(symbol in "[A-Za-z$€¥£ ]{0,4}", value in -1.0e6..1.0e6f64) {
        let code = format!("\"{}\"#,##0.00", symbol);
        prop_assert_eq!(currency_symbol(&code), symbol.as_str());
        let text = render_default(value, TypeTag::Numeric, &code).unwrap();
        prop_assert!(text.starts_with(symbol.as_str()));
    }

    #[test]
    fn prop_datetime_render_is_idempotent(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        secs in 0u32..86_400,
    ) {
        let dt = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(secs / 3600, (secs / 60) % 60, secs % 60))
            .unwrap();
        let code = "[$-409]dddd mmmm d, yyyy h:mm:ss AM/PM";
        let first = render_default(dt, TypeTag::Date, code).unwrap();
        let second = render_default(dt, TypeTag::Date, code).unwrap();
        prop_assert_eq!(first, second);
    }
}

#[test]
fn test_codes_without_quotes_have_no_symbol() {
    assert_eq!(currency_symbol("#,##0.00"), "");
}
