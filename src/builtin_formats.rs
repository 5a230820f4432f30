//! Built-in number format IDs and their format codes.
//!
//! Spreadsheet files store a `numFmtId` per cell; for IDs 0-49 the format
//! code itself is implied rather than written out. Readers that only hand
//! over the ID can turn it into a code (and a type tag) here.

use crate::value::TypeTag;

/// Get the format code string for a built-in format ID.
///
/// Returns `None` for IDs with no implied code (custom formats start at 164).
///
/// # Examples
/// ```
/// use cellfmt::format_code_from_id;
///
/// assert_eq!(format_code_from_id(0), Some("General"));
/// assert_eq!(format_code_from_id(4), Some("#,##0.00"));
/// assert_eq!(format_code_from_id(14), Some("m/d/yy"));
/// assert_eq!(format_code_from_id(164), None);
/// ```
pub fn format_code_from_id(id: u32) -> Option<&'static str> {
    match id {
        0 => Some("General"),
        1 => Some("0"),
        2 => Some("0.00"),
        3 => Some("#,##0"),
        4 => Some("#,##0.00"),
        9 => Some("0%"),
        10 => Some("0.00%"),
        11 => Some("0.00E+00"),
        12 => Some("# ?/?"),
        13 => Some("# ??/??"),
        14 => Some("m/d/yy"),
        15 => Some("d-mmm-yy"),
        16 => Some("d-mmm"),
        17 => Some("mmm-yy"),
        18 => Some("h:mm AM/PM"),
        19 => Some("h:mm:ss AM/PM"),
        20 => Some("h:mm"),
        21 => Some("h:mm:ss"),
        22 => Some("m/d/yy h:mm"),
        37 => Some("#,##0 ;(#,##0)"),
        38 => Some("#,##0 ;[Red](#,##0)"),
        39 => Some("#,##0.00;(#,##0.00)"),
        40 => Some("#,##0.00;[Red](#,##0.00)"),
        45 => Some("mm:ss"),
        46 => Some("[h]:mm:ss"),
        47 => Some("mmss.0"),
        48 => Some("##0.0E+0"),
        49 => Some("@"),
        _ => None,
    }
}

/// Check if a format ID is a built-in format.
pub fn is_builtin_format_id(id: u32) -> bool {
    format_code_from_id(id).is_some()
}

/// The type tag implied by a built-in format ID.
///
/// Date and time formats (14-22, 45-47) are [`TypeTag::Date`]; every other
/// built-in ID is [`TypeTag::Numeric`].
pub fn type_tag_for_id(id: u32) -> Option<TypeTag> {
    match id {
        14..=22 | 45..=47 => Some(TypeTag::Date),
        _ if is_builtin_format_id(id) => Some(TypeTag::Numeric),
        _ => None,
    }
}
