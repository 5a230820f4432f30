//! Value rendering engine

mod date;
mod fraction;
mod number;

pub use date::format_datetime;
pub use fraction::{format_fraction, FractionMode, FractionSpec, FRACTION_TABLE};
pub use number::{
    currency_symbol, format_currency, format_fixed_decimal, format_percentage, format_scientific,
    percent_digits,
};

use chrono::{NaiveDateTime, NaiveTime};

use crate::classify::{classify, Category};
use crate::date_serial::serial_to_datetime;
use crate::error::{Degradation, RenderError};
use crate::options::RenderOptions;
use crate::value::{TypeTag, Value};

/// The outcome of a render call.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// The display text.
    pub text: String,
    /// The strategy the format code was classified as.
    pub category: Category,
    /// Set when the format code was only partly understood.
    pub degradation: Option<Degradation>,
}

/// Classify the format code and run the matching renderer.
pub fn render_value(
    value: Value,
    tag: TypeTag,
    format_code: &str,
    opts: &RenderOptions,
) -> Result<Rendered, RenderError> {
    let category = classify(tag, format_code);

    let (text, degradation) = match tag {
        TypeTag::Date => {
            let dt = resolve_timestamp(value, opts)?;
            format_datetime(dt, format_code, opts)
        }
        TypeTag::Numeric => {
            let n = match value {
                Value::Number(n) => n,
                other => {
                    return Err(RenderError::TypeMismatch {
                        expected: "number",
                        got: other.type_name(),
                    })
                }
            };
            if !n.is_finite() {
                return Err(RenderError::NonFiniteNumber { value: n });
            }
            render_number(n, category, format_code, opts)
        }
    };

    Ok(Rendered {
        text,
        category,
        degradation,
    })
}

fn render_number(
    value: f64,
    category: Category,
    format_code: &str,
    opts: &RenderOptions,
) -> (String, Option<Degradation>) {
    match category {
        Category::Currency => (format_currency(value, format_code, opts), None),
        Category::Percentage => (format_percentage(value, format_code, opts), None),
        Category::Fraction => match FractionSpec::from_format(format_code) {
            Some(spec) => format_fraction(value, spec),
            None => (
                passthrough(value),
                Some(Degradation::MalformedFormat {
                    format: format_code.to_string(),
                    reason: "unrecognized fraction denominator",
                }),
            ),
        },
        Category::Scientific => (format_scientific(value, format_code, opts), None),
        Category::FixedDecimal => (format_fixed_decimal(value, format_code, opts), None),
        Category::General | Category::DateTime => (passthrough(value), None),
    }
}

/// Turn a date-tagged value into a timestamp; numbers are serial dates.
fn resolve_timestamp(value: Value, opts: &RenderOptions) -> Result<NaiveDateTime, RenderError> {
    match value {
        Value::DateTime(dt) => Ok(dt),
        Value::Date(d) => Ok(d.and_time(NaiveTime::MIN)),
        Value::Number(serial) => serial_to_datetime(serial, opts.date_system)
            .ok_or(RenderError::InvalidSerialDate { serial }),
    }
}

/// The raw value as text, for codes with no recognized signature.
pub fn passthrough(value: f64) -> String {
    value.to_string()
}

/// Count the `0` placeholders directly after the first `.` of a format code.
///
/// Stops at the first other character; returns 0 when there is no `.`.
pub fn count_fraction_digits(format_code: &str) -> usize {
    match format_code.find('.') {
        Some(dot) => format_code[dot + 1..]
            .chars()
            .take_while(|&c| c == '0')
            .count(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_fraction_digits() {
        assert_eq!(count_fraction_digits("0.00"), 2);
        assert_eq!(count_fraction_digits("#,##0.000_);(#,##0.000)"), 3);
        assert_eq!(count_fraction_digits("0.0#"), 1);
        assert_eq!(count_fraction_digits("0"), 0);
        assert_eq!(count_fraction_digits("0."), 0);
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(passthrough(42.0), "42");
        assert_eq!(passthrough(42.5), "42.5");
        assert_eq!(passthrough(-0.1), "-0.1");
    }

    #[test]
    fn test_numeric_tag_rejects_timestamp() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let err = render_value(date.into(), TypeTag::Numeric, "0.00", &RenderOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::TypeMismatch {
                expected: "number",
                got: "date"
            }
        );
    }

    #[test]
    fn test_malformed_fraction_passes_through() {
        let rendered =
            render_value(Value::Number(1.25), TypeTag::Numeric, "# ?/x", &RenderOptions::default())
                .unwrap();
        assert_eq!(rendered.text, "1.25");
        assert_eq!(rendered.category, Category::Fraction);
        assert!(rendered.degradation.is_some());
    }
}
