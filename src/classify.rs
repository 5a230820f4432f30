//! Format code classification.
//!
//! A format code is routed to exactly one renderer. Numeric cells are matched
//! against [`SIGNATURES`] top to bottom and the first hit wins; several
//! signatures can appear in one code (`#,##0.00` also contains `0.0`), so the
//! order of the table is part of the behavior.

use crate::value::TypeTag;

/// The rendering strategy selected for a format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Thousands-separated number with an optional quoted symbol
    Currency,
    /// Value times 100 followed by `%`
    Percentage,
    /// Mixed fraction `whole num/den`
    Fraction,
    /// Exponential notation
    Scientific,
    /// Fixed number of decimal places
    FixedDecimal,
    /// Date and time tokens
    DateTime,
    /// No signature matched; the raw value passes through
    General,
}

/// A substring that identifies a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub pattern: &'static str,
    pub category: Category,
}

impl Signature {
    const fn new(pattern: &'static str, category: Category) -> Self {
        Signature { pattern, category }
    }

    /// Returns true if the format code carries this signature.
    pub fn matches(&self, format_code: &str) -> bool {
        format_code.contains(self.pattern)
    }
}

/// Numeric signatures in priority order.
pub const SIGNATURES: [Signature; 5] = [
    Signature::new(",#", Category::Currency),
    Signature::new("0%", Category::Percentage),
    Signature::new("?/", Category::Fraction),
    Signature::new("E+0", Category::Scientific),
    Signature::new("0.0", Category::FixedDecimal),
];

/// Pick the rendering strategy for a format code.
pub fn classify(tag: TypeTag, format_code: &str) -> Category {
    match tag {
        TypeTag::Date => Category::DateTime,
        TypeTag::Numeric => SIGNATURES
            .iter()
            .find(|sig| sig.matches(format_code))
            .map_or(Category::General, |sig| sig.category),
    }
}
