//! cellfmt - render spreadsheet cell values the way Excel displays them
//!
//! Given a raw value, a coarse type tag and an Excel format code, produce the
//! text a spreadsheet would show for the cell. Numeric codes are classified
//! into currency, percentage, fraction, scientific or fixed-decimal
//! rendering; date codes are tokenized and evaluated against a timestamp.
//!
//! ```
//! use cellfmt::{render_default, TypeTag};
//!
//! assert_eq!(render_default(0.125, TypeTag::Numeric, "0.00").unwrap(), "0.13");
//! assert_eq!(render_default(1234.5, TypeTag::Numeric, "\"$\"#,##0.00").unwrap(), "$1,234.50");
//! ```

pub mod classify;
pub mod date_serial;
pub mod error;
pub mod options;
pub mod parser;
pub mod value;

mod builtin_formats;
mod formatter;
mod locale;

pub use builtin_formats::{format_code_from_id, is_builtin_format_id, type_tag_for_id};
pub use classify::{classify, Category, Signature, SIGNATURES};
pub use error::{Degradation, RenderError};
pub use formatter::{
    count_fraction_digits, currency_symbol, format_currency, format_datetime,
    format_fixed_decimal, format_fraction, format_percentage, format_scientific, passthrough,
    percent_digits, FractionMode, FractionSpec, Rendered, FRACTION_TABLE,
};
pub use locale::Locale;
pub use options::{DateSystem, PaddingStyle, RenderOptions};
pub use value::{TypeTag, Value};

/// Render a cell value with a format code.
///
/// Malformed codes never fail: unrecognized parts pass through. Errors are
/// only returned for values that cannot be rendered at all.
pub fn render(
    value: impl Into<Value>,
    tag: TypeTag,
    format_code: &str,
    opts: &RenderOptions,
) -> Result<String, RenderError> {
    render_report(value, tag, format_code, opts).map(|rendered| rendered.text)
}

/// Render with default options (en-US, 1900 date system, hyphen padding).
pub fn render_default(
    value: impl Into<Value>,
    tag: TypeTag,
    format_code: &str,
) -> Result<String, RenderError> {
    render(value, tag, format_code, &RenderOptions::default())
}

/// Render and also report the category and any degradation.
pub fn render_report(
    value: impl Into<Value>,
    tag: TypeTag,
    format_code: &str,
    opts: &RenderOptions,
) -> Result<Rendered, RenderError> {
    formatter::render_value(value.into(), tag, format_code, opts)
}

/// Render using a built-in format ID instead of a format code.
///
/// Returns `None` if the ID has no implied format code.
pub fn render_with_id(
    value: impl Into<Value>,
    tag: TypeTag,
    id: u32,
    opts: &RenderOptions,
) -> Option<Result<String, RenderError>> {
    format_code_from_id(id).map(|code| render(value, tag, code, opts))
}
