//! Date and time rendering

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::date_serial::datetime_to_serial;
use crate::error::Degradation;
use crate::options::{PaddingStyle, RenderOptions};
use crate::parser::tokenize;
use crate::parser::tokens::{
    DateToken, DayStyle, ElapsedUnit, HourStyle, MeridiemStyle, MonthStyle, Width, YearStyle,
};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Render a timestamp with a date/time format code.
///
/// Unknown characters are copied through. A code without a single date or
/// time token renders the timestamp as `YYYY-MM-DD hh:mm:ss` and reports the
/// code as malformed.
pub fn format_datetime(
    dt: NaiveDateTime,
    format_code: &str,
    opts: &RenderOptions,
) -> (String, Option<Degradation>) {
    let tokens = tokenize(format_code);

    if tokens.iter().all(DateToken::is_literal) {
        return (
            dt.to_string(),
            Some(Degradation::MalformedFormat {
                format: format_code.to_string(),
                reason: "no date or time tokens",
            }),
        );
    }

    let has_meridiem = tokens
        .iter()
        .any(|t| matches!(t, DateToken::Meridiem(_)));

    let mut result = String::new();
    for token in &tokens {
        match token {
            DateToken::Literal(s) => result.push_str(s),
            DateToken::Meridiem(style) => result.push_str(&format_meridiem(*style, dt.hour(), opts)),
            DateToken::Elapsed(unit, width) => {
                result.push_str(&format_elapsed(*unit, *width, dt, opts))
            }
            _ => result.push_str(&format_date_part(token, dt, has_meridiem, opts)),
        }
    }

    (result, None)
}

/// Format a single date/time component.
fn format_date_part(
    token: &DateToken,
    dt: NaiveDateTime,
    has_meridiem: bool,
    opts: &RenderOptions,
) -> String {
    let locale = &opts.locale;
    let padding = opts.padding;

    match *token {
        DateToken::Year(YearStyle::Short) => format!("{:02}", dt.year().rem_euclid(100)),
        DateToken::Year(YearStyle::Full) => format!("{:04}", dt.year()),

        DateToken::Month(MonthStyle::Number(width)) => number(dt.month(), width, padding),
        DateToken::Month(MonthStyle::Abbr) => locale.month_name(dt.month(), false).to_string(),
        DateToken::Month(MonthStyle::Full) => locale.month_name(dt.month(), true).to_string(),
        DateToken::Month(MonthStyle::Letter) => locale
            .month_name(dt.month(), true)
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default(),

        DateToken::Day(DayStyle::Number(width)) => number(dt.day(), width, padding),
        DateToken::Day(DayStyle::WeekdayAbbr) => locale
            .day_name(dt.weekday().num_days_from_sunday(), false)
            .to_string(),
        DateToken::Day(DayStyle::WeekdayFull) => locale
            .day_name(dt.weekday().num_days_from_sunday(), true)
            .to_string(),

        DateToken::Hour(HourStyle::TwentyFour) => format!("{:02}", dt.hour()),
        DateToken::Hour(HourStyle::Clock(width)) => {
            let hour = if has_meridiem {
                to_12_hour(dt.hour())
            } else {
                dt.hour()
            };
            number(hour, width, padding)
        }

        DateToken::Minute(width) => number(dt.minute(), width, padding),
        DateToken::Second(width) => number(dt.second(), width, padding),

        DateToken::Literal(_) | DateToken::Meridiem(_) | DateToken::Elapsed(..) => String::new(),
    }
}

/// A numeric component. Doubled letters are zero-padded; single letters are
/// bare under either non-padding marker.
fn number(n: u32, width: Width, padding: PaddingStyle) -> String {
    match (width, padding) {
        (Width::Padded, _) => format!("{:02}", n),
        (Width::Natural, PaddingStyle::Hyphen | PaddingStyle::Hash) => n.to_string(),
    }
}

/// `[h]`, `[m]` or `[s]`: the total count of the unit since the epoch of the
/// date system, so a serial of 1.5 shows `[h]` as 36.
fn format_elapsed(
    unit: ElapsedUnit,
    width: Width,
    dt: NaiveDateTime,
    opts: &RenderOptions,
) -> String {
    let total = elapsed_seconds(dt, opts);
    let n = match unit {
        ElapsedUnit::Hours => total / 3600,
        ElapsedUnit::Minutes => total / 60,
        ElapsedUnit::Seconds => total,
    };
    match width {
        Width::Padded => format!("{:02}", n),
        Width::Natural => n.to_string(),
    }
}

/// Whole seconds since the epoch. Timestamps before the epoch count from
/// their own midnight.
fn elapsed_seconds(dt: NaiveDateTime, opts: &RenderOptions) -> i64 {
    match datetime_to_serial(dt, opts.date_system) {
        Some(serial) => (serial * SECONDS_PER_DAY).round() as i64,
        None => i64::from(dt.num_seconds_from_midnight()),
    }
}

/// Convert 24-hour time to 12-hour format.
/// 0 -> 12, 1-12 -> 1-12, 13-23 -> 1-11
fn to_12_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        1..=12 => hour,
        _ => hour - 12,
    }
}

fn format_meridiem(style: MeridiemStyle, hour: u32, opts: &RenderOptions) -> String {
    let is_pm = hour >= 12;

    match style {
        MeridiemStyle::Full if is_pm => opts.locale.pm_string.to_string(),
        MeridiemStyle::Full => opts.locale.am_string.to_string(),
        MeridiemStyle::Short { lower } => {
            let letter = if is_pm { 'P' } else { 'A' };
            if lower {
                letter.to_ascii_lowercase().to_string()
            } else {
                letter.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    #[test]
    fn test_to_12_hour() {
        assert_eq!(to_12_hour(0), 12);
        assert_eq!(to_12_hour(1), 1);
        assert_eq!(to_12_hour(12), 12);
        assert_eq!(to_12_hour(13), 1);
        assert_eq!(to_12_hour(23), 11);
    }

    #[test]
    fn test_number_padding() {
        assert_eq!(number(5, Width::Natural, PaddingStyle::Hyphen), "5");
        assert_eq!(number(5, Width::Natural, PaddingStyle::Hash), "5");
        assert_eq!(number(5, Width::Padded, PaddingStyle::Hash), "05");
        assert_eq!(number(5, Width::Padded, PaddingStyle::Hyphen), "05");
        assert_eq!(number(15, Width::Natural, PaddingStyle::Hyphen), "15");
    }

    #[test]
    fn test_hour_clock_follows_meridiem() {
        let opts = RenderOptions::default();
        let dt = at(2024, 3, 5, 15, 7, 0);
        assert_eq!(format_datetime(dt, "h:mm", &opts).0, "15:07");
        assert_eq!(format_datetime(dt, "h:mm AM/PM", &opts).0, "3:07 PM");
        assert_eq!(format_datetime(dt, "H:mm", &opts).0, "15:07");
    }

    #[test]
    fn test_elapsed_hours_do_not_wrap() {
        let opts = RenderOptions::default();
        // Serial 1.5 in the 1900 system
        let dt = at(1900, 1, 1, 12, 0, 0);
        assert_eq!(format_datetime(dt, "[h]:mm:ss", &opts).0, "36:00:00");
        assert_eq!(format_datetime(dt, "[mm]", &opts).0, "2160");
        assert_eq!(format_datetime(at(1900, 1, 1, 0, 1, 30), "[s]", &opts).0, "86490");
    }

    #[test]
    fn test_literal_only_code_is_malformed() {
        let opts = RenderOptions::default();
        let dt = at(2024, 3, 5, 0, 0, 0);
        let (text, degradation) = format_datetime(dt, "General", &opts);
        assert_eq!(text, "2024-03-05 00:00:00");
        assert!(matches!(
            degradation,
            Some(Degradation::MalformedFormat { .. })
        ));
    }
}
