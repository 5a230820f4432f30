//! Value types that can be rendered.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

/// The coarse data type a spreadsheet reader reports for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// A number (`n`)
    Numeric,
    /// A date or time (`d`)
    Date,
}

impl FromStr for TypeTag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "n" => Ok(TypeTag::Numeric),
            "d" => Ok(TypeTag::Date),
            _ => Err(()),
        }
    }
}

/// A raw cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A numeric value (an Excel serial date when tagged as a date)
    Number(f64),
    /// A calendar timestamp
    DateTime(NaiveDateTime),
    /// A calendar date at midnight
    Date(NaiveDate),
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(dt: NaiveDateTime) -> Self {
        Value::DateTime(dt)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl Value {
    /// Returns a type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::DateTime(_) => "datetime",
            Value::Date(_) => "date",
        }
    }
}
