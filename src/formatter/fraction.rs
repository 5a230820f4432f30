//! Fraction rendering

use crate::error::Degradation;

/// How the denominator of a fraction is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionMode {
    /// `?/?`: best approximation with a denominator up to the limit
    Approximate,
    /// `?/8`: the denominator is the limit itself
    Fixed,
}

/// Denominator limit and mode for a fraction format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FractionSpec {
    pub limit: u32,
    pub mode: FractionMode,
}

/// Built-in fraction formats and their denominator limits.
pub const FRACTION_TABLE: [(&str, u32); 9] = [
    ("# ?/?", 10),
    ("# ??/??", 100),
    ("#\\ ???/???", 1000),
    ("#\\ ?/2", 2),
    ("#\\ ?/4", 4),
    ("#\\ ?/8", 8),
    ("#\\ ??/16", 16),
    ("#\\ ?/10", 10),
    ("#\\ ??/100", 100),
];

impl FractionSpec {
    /// Look up the spec for a fraction format code.
    ///
    /// Codes outside [`FRACTION_TABLE`] are read from the denominator pattern
    /// after the `/`: a run of n `?` approximates up to 10^n, a literal number
    /// fixes the denominator. Anything else yields `None`.
    pub fn from_format(format_code: &str) -> Option<Self> {
        if let Some(&(_, limit)) = FRACTION_TABLE.iter().find(|(code, _)| *code == format_code) {
            let mode = if format_code.contains("?/?") {
                FractionMode::Approximate
            } else {
                FractionMode::Fixed
            };
            return Some(FractionSpec { limit, mode });
        }
        Self::from_denominator_pattern(format_code)
    }

    fn from_denominator_pattern(format_code: &str) -> Option<Self> {
        let start = format_code.find("?/")? + 2;
        let pattern: String = format_code[start..]
            .chars()
            .take_while(|c| *c == '?' || c.is_ascii_digit())
            .collect();

        if !pattern.is_empty() && pattern.chars().all(|c| c == '?') {
            let limit = 10_u32.checked_pow(pattern.len() as u32)?;
            Some(FractionSpec {
                limit,
                mode: FractionMode::Approximate,
            })
        } else if !pattern.is_empty() && pattern.chars().all(|c| c.is_ascii_digit()) {
            let limit: u32 = pattern.parse().ok()?;
            (limit > 0).then_some(FractionSpec {
                limit,
                mode: FractionMode::Fixed,
            })
        } else {
            None
        }
    }
}

/// Render `value` as `"{whole} {numerator}/{denominator}"`.
///
/// `whole` is `floor(value)`, so negative values count down: `-1.25` is
/// `-2 3/4`. A zero numerator is kept (`3 0/8`).
pub fn format_fraction(value: f64, spec: FractionSpec) -> (String, Option<Degradation>) {
    // + 0.0 turns -0.0 into 0.0
    let whole = value.floor() + 0.0;
    let frac = value - whole;

    let (numerator, denominator, degradation) = match spec.mode {
        FractionMode::Approximate if spec.limit > 1 => {
            let (n, d) = best_rational(frac, spec.limit as u64);
            (n, d, None)
        }
        FractionMode::Approximate => (
            fixed_numerator(frac, spec.limit as u64),
            spec.limit as u64,
            Some(Degradation::FractionOverflow { limit: spec.limit }),
        ),
        FractionMode::Fixed => (
            fixed_numerator(frac, spec.limit as u64),
            spec.limit as u64,
            None,
        ),
    };

    (
        format!("{:.0} {}/{}", whole, numerator, denominator),
        degradation,
    )
}

/// Numerator for a fixed denominator: remainders below one half round down,
/// everything else rounds up.
fn fixed_numerator(frac: f64, denominator: u64) -> u64 {
    let scaled = frac * denominator as f64;
    let floor = scaled.floor();
    if scaled - floor < 0.5 {
        floor as u64
    } else {
        scaled.ceil() as u64
    }
}

/// Closest fraction to `x` (in `[0, 1)`) with a denominator of at most `max_denom`.
///
/// Walks the continued fraction convergents of `x` until the next one would
/// exceed the limit, then compares the last convergent against the largest
/// admissible semiconvergent. Convergents are always in lowest terms. On a
/// tie the convergent wins.
fn best_rational(x: f64, max_denom: u64) -> (u64, u64) {
    let (mut p0, mut q0, mut p1, mut q1) = (0_u64, 1_u64, 1_u64, 0_u64);
    let mut rest = x;

    loop {
        let a = rest.floor();
        if a > max_denom as f64 {
            break;
        }
        let a = a as u64;
        let q2 = q0 + a * q1;
        if q2 > max_denom {
            break;
        }
        (p0, q0, p1, q1) = (p1, q1, p0 + a * p1, q2);

        let remainder = rest - rest.floor();
        if remainder < 1e-9 {
            return (p1, q1);
        }
        rest = 1.0 / remainder;
    }

    let k = (max_denom - q0) / q1;
    let (sp, sq) = (p0 + k * p1, q0 + k * q1);
    let convergent_error = (p1 as f64 / q1 as f64 - x).abs();
    let semiconvergent_error = (sp as f64 / sq as f64 - x).abs();
    if convergent_error <= semiconvergent_error {
        (p1, q1)
    } else {
        (sp, sq)
    }
}
