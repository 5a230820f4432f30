//! Number rendering (currency, percentages, scientific notation, fixed decimals)

use crate::formatter::count_fraction_digits;
use crate::options::RenderOptions;

/// 2^53: above this every f64 is already an integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Render `value` with exactly `digits` fractional digits.
///
/// Rounds half away from zero at the last kept digit, so `0.125` at two
/// digits gives `0.13`. The rounding happens on the binary value, which
/// means `1.005` (stored as `1.00499…`) gives `1.00`.
pub(crate) fn fixed_point(
    value: f64,
    digits: usize,
    thousands: Option<char>,
    decimal_separator: char,
) -> String {
    let magnitude = value.abs();
    let scaled = magnitude * 10_f64.powi(digits.min(i32::MAX as usize) as i32);

    // All digits of round(|value| * 10^digits), no separators
    let raw = if scaled < MAX_EXACT_INTEGER {
        format!("{:.0}", scaled.round())
    } else {
        format!("{:.*}", digits, magnitude).replace('.', "")
    };
    let raw = format!("{:0>width$}", raw, width = digits + 1);

    let (integer_digits, fraction_digits) = raw.split_at(raw.len() - digits);
    let negative = value < 0.0 && raw.bytes().any(|b| b != b'0');

    let mut result = String::with_capacity(raw.len() + raw.len() / 3 + 2);
    if negative {
        result.push('-');
    }
    match thousands {
        Some(sep) => result.push_str(&group_thousands(integer_digits, sep)),
        None => result.push_str(integer_digits),
    }
    if digits > 0 {
        result.push(decimal_separator);
        result.push_str(fraction_digits);
    }
    result
}

/// Insert a separator between every group of three integer digits.
fn group_thousands(digits: &str, sep: char) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result
}

/// The text between the first two double quotes of a format code.
///
/// Returns an empty string when the code has no quote. An unterminated quote
/// runs to the end of the code.
pub fn currency_symbol(format_code: &str) -> &str {
    let Some(open) = format_code.find('"') else {
        return "";
    };
    let rest = &format_code[open + 1..];
    match rest.find('"') {
        Some(close) => &rest[..close],
        None => rest,
    }
}

/// Number of `0` placeholders between the last `.` and the last `%`.
pub fn percent_digits(format_code: &str) -> usize {
    let Some(percent) = format_code.rfind('%') else {
        return 0;
    };
    let head = &format_code[..percent];
    match head.rfind('.') {
        Some(dot) => head[dot + 1..].chars().filter(|&c| c == '0').count(),
        None => 0,
    }
}

/// `"$"#,##0.00` → `$1,234.50`
pub fn format_currency(value: f64, format_code: &str, opts: &RenderOptions) -> String {
    let digits = count_fraction_digits(format_code);
    let number = fixed_point(
        value,
        digits,
        Some(opts.locale.thousands_separator),
        opts.locale.decimal_separator,
    );
    format!("{}{}", currency_symbol(format_code), number)
}

/// `0.0%` → `12.5%`
pub fn format_percentage(value: f64, format_code: &str, opts: &RenderOptions) -> String {
    let digits = percent_digits(format_code);
    let mut result = fixed_point(value * 100.0, digits, None, opts.locale.decimal_separator);
    result.push('%');
    result
}

/// `0.000` → `3.142`
pub fn format_fixed_decimal(value: f64, format_code: &str, opts: &RenderOptions) -> String {
    let digits = count_fraction_digits(format_code);
    fixed_point(value, digits, None, opts.locale.decimal_separator)
}

/// `0.00E+00` → `1.23E+04`
pub fn format_scientific(value: f64, format_code: &str, opts: &RenderOptions) -> String {
    let digits = count_fraction_digits(format_code);
    let decimal = opts.locale.decimal_separator;

    if value == 0.0 {
        return format!("{}E+00", fixed_point(0.0, digits, None, decimal));
    }

    let mut exponent = value.abs().log10().floor() as i32;
    // log10 can land one off near powers of ten
    let magnitude = scale_by_power_of_ten(value.abs(), exponent);
    if magnitude >= 10.0 {
        exponent += 1;
    } else if magnitude < 1.0 {
        exponent -= 1;
    }

    let mut mantissa = fixed_point(scale_by_power_of_ten(value, exponent), digits, None, decimal);
    if mantissa.trim_start_matches('-').starts_with("10") {
        // 9.995 → 10.00 at two digits
        exponent += 1;
        mantissa = fixed_point(scale_by_power_of_ten(value, exponent), digits, None, decimal);
    }

    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}E{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

/// `value / 10^exponent`, split in two steps for subnormal ranges.
fn scale_by_power_of_ten(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value / 10_f64.powi(exponent)
    } else if exponent > -300 {
        value * 10_f64.powi(-exponent)
    } else {
        let half = -exponent / 2;
        value * 10_f64.powi(half) * 10_f64.powi(-exponent - half)
    }
}
