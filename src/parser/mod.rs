//! Tokenizer for date/time format codes.

pub mod lexer;
pub mod tokens;

use lexer::Lexer;
use tokens::{DateToken, ElapsedUnit, MonthStyle};

/// Split a date/time format code into typed tokens in a single pass.
///
/// Adjacent literals are merged. Numeric `m`/`mm` runs that follow an hour or
/// precede a second are minutes (`h mm`, `mm:ss`), on top of the `:mm` rule
/// the lexer applies.
pub fn tokenize(format_code: &str) -> Vec<DateToken> {
    let mut lexer = Lexer::new(format_code);
    let mut tokens: Vec<DateToken> = Vec::new();

    while let Some(token) = lexer.next_token() {
        if let DateToken::Literal(text) = &token {
            if let Some(DateToken::Literal(prev)) = tokens.last_mut() {
                prev.push_str(text);
                continue;
            }
        }
        tokens.push(token);
    }

    resolve_minutes(&mut tokens);
    tokens
}

/// Turn month numbers next to hours or seconds into minutes.
fn resolve_minutes(tokens: &mut [DateToken]) {
    let mut seen_hour = false;

    for i in 0..tokens.len() {
        let minute_width = match &tokens[i] {
            DateToken::Literal(_) | DateToken::Meridiem(_) => continue,
            DateToken::Hour(_) | DateToken::Elapsed(ElapsedUnit::Hours, _) => {
                seen_hour = true;
                continue;
            }
            DateToken::Month(MonthStyle::Number(width))
                if seen_hour || next_component_is_second(&tokens[i + 1..]) =>
            {
                Some(*width)
            }
            _ => None,
        };

        if let Some(width) = minute_width {
            tokens[i] = DateToken::Minute(width);
        }
        seen_hour = false;
    }
}

fn next_component_is_second(rest: &[DateToken]) -> bool {
    matches!(
        rest.iter().find(|t| !t.is_literal()),
        Some(DateToken::Second(_) | DateToken::Elapsed(ElapsedUnit::Seconds, _))
    )
}
