//! Token types for the date/time format tokenizer.

/// Padding of a numeric date component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Single letter (`m`, `d`, `h`, `s`): padding follows the padding style
    Natural,
    /// Doubled letter (`mm`, `dd`, `hh`, `ss`): always two digits
    Padded,
}

impl Width {
    pub(crate) fn from_run(len: usize) -> Self {
        if len >= 2 {
            Width::Padded
        } else {
            Width::Natural
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearStyle {
    /// `yy`
    Short,
    /// `yyyy`
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// `m` / `mm`
    Number(Width),
    /// `mmm`
    Abbr,
    /// `mmmm`
    Full,
    /// `mmmmm`
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStyle {
    /// `d` / `dd`
    Number(Width),
    /// `ddd`
    WeekdayAbbr,
    /// `dddd`
    WeekdayFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourStyle {
    /// `h` / `hh`: 12-hour when the format has a meridiem, else 24-hour
    Clock(Width),
    /// `H`: 24-hour, two digits
    TwentyFour,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeridiemStyle {
    /// `AM/PM`: the locale strings
    Full,
    /// `A/P` or `a/p`
    Short { lower: bool },
}

/// The unit of a bracketed elapsed-time token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedUnit {
    /// `[h]` / `[hh]`: total hours
    Hours,
    /// `[m]` / `[mm]`: total minutes
    Minutes,
    /// `[s]` / `[ss]`: total seconds
    Seconds,
}

/// A token in a date/time format code.
#[derive(Debug, Clone, PartialEq)]
pub enum DateToken {
    Literal(String),
    Year(YearStyle),
    Month(MonthStyle),
    Day(DayStyle),
    Hour(HourStyle),
    Minute(Width),
    Second(Width),
    Meridiem(MeridiemStyle),
    /// Time elapsed since the epoch of the date system, not wrapped at the
    /// next larger unit
    Elapsed(ElapsedUnit, Width),
}

impl DateToken {
    /// Returns true for text copied to the output unchanged.
    pub fn is_literal(&self) -> bool {
        matches!(self, DateToken::Literal(_))
    }
}
