//! Lexer for date/time format codes.
//!
//! Reads a format code left to right and emits one token per run of date
//! letters. Special cases:
//! - Quoted strings ("text") and escaped characters (\-) become literals
//! - Elapsed-time tags ([h], [mm], [ss]) become elapsed tokens
//! - Other bracketed tags ([$-409], [Red]) are dropped
//! - The `;@` text section marker is dropped
//! - `m` runs directly after `:` are minutes, not months
//! - AM/PM and A/P are detected as single tokens

use crate::parser::tokens::{
    DateToken, DayStyle, ElapsedUnit, HourStyle, MeridiemStyle, MonthStyle, Width, YearStyle,
};

/// A lexer for date/time format code strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token, or `None` at the end of input.
    pub fn next_token(&mut self) -> Option<DateToken> {
        loop {
            let start = self.position;
            let ch = self.current_char()?;

            if ch == 'A' || ch == 'a' {
                if let Some(token) = self.try_match_am_pm() {
                    return Some(token);
                }
            }

            let token = match ch {
                '"' => DateToken::Literal(self.lex_quoted_string()),
                '\\' => DateToken::Literal(self.lex_escaped_char()),
                '[' => match self.bracket_content() {
                    Some(content) => {
                        self.position += content.len() + 2;
                        match try_parse_elapsed(content) {
                            Some(token) => token,
                            None => continue,
                        }
                    }
                    None => {
                        self.advance();
                        DateToken::Literal("[".to_string())
                    }
                },
                ';' if self.remaining().starts_with(";@") => {
                    self.position += 2;
                    continue;
                }
                'y' | 'Y' => {
                    let count = self.count_run(|c| c == 'y' || c == 'Y');
                    if count >= 3 {
                        DateToken::Year(YearStyle::Full)
                    } else {
                        DateToken::Year(YearStyle::Short)
                    }
                }
                'm' | 'M' => {
                    let after_colon = self.input[..start].ends_with(':');
                    let count = self.count_run(|c| c == 'm' || c == 'M');
                    match count {
                        1 | 2 if after_colon => DateToken::Minute(Width::from_run(count)),
                        1 | 2 => DateToken::Month(MonthStyle::Number(Width::from_run(count))),
                        3 => DateToken::Month(MonthStyle::Abbr),
                        4 => DateToken::Month(MonthStyle::Full),
                        _ => DateToken::Month(MonthStyle::Letter),
                    }
                }
                'd' | 'D' => {
                    let count = self.count_run(|c| c == 'd' || c == 'D');
                    match count {
                        1 | 2 => DateToken::Day(DayStyle::Number(Width::from_run(count))),
                        3 => DateToken::Day(DayStyle::WeekdayAbbr),
                        _ => DateToken::Day(DayStyle::WeekdayFull),
                    }
                }
                'h' => {
                    let count = self.count_run(|c| c == 'h');
                    DateToken::Hour(HourStyle::Clock(Width::from_run(count)))
                }
                'H' => {
                    self.count_run(|c| c == 'H');
                    DateToken::Hour(HourStyle::TwentyFour)
                }
                's' | 'S' => {
                    let count = self.count_run(|c| c == 's' || c == 'S');
                    DateToken::Second(Width::from_run(count))
                }

                // Everything else is a literal
                _ => {
                    self.advance();
                    DateToken::Literal(ch.to_string())
                }
            };

            return Some(token);
        }
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Returns the remaining input as a string slice.
    fn remaining(&self) -> &str {
        &self.input[self.position..]
    }

    /// Advances past the current character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Consumes a run of characters matching `pred` and returns its length.
    fn count_run(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(ch) = self.current_char() {
            if !pred(ch) {
                break;
            }
            self.position += ch.len_utf8();
            count += 1;
        }
        count
    }

    /// Tries to match `AM/PM` or `A/P` in any case.
    fn try_match_am_pm(&mut self) -> Option<DateToken> {
        let rest = self.remaining();
        if rest.get(..5).is_some_and(|s| s.eq_ignore_ascii_case("AM/PM")) {
            self.position += 5;
            return Some(DateToken::Meridiem(MeridiemStyle::Full));
        }
        if rest.get(..3).is_some_and(|s| s.eq_ignore_ascii_case("A/P")) {
            let lower = rest.starts_with('a');
            self.position += 3;
            return Some(DateToken::Meridiem(MeridiemStyle::Short { lower }));
        }
        None
    }

    /// Lexes `"text"`. An unterminated quote runs to the end of input.
    fn lex_quoted_string(&mut self) -> String {
        self.advance();
        let rest = self.remaining();
        match rest.find('"') {
            Some(end) => {
                let text = rest[..end].to_string();
                self.position += end + 1;
                text
            }
            None => {
                let text = rest.to_string();
                self.position = self.input.len();
                text
            }
        }
    }

    /// Lexes `\x` as the literal `x`. A trailing backslash is dropped.
    fn lex_escaped_char(&mut self) -> String {
        self.advance();
        match self.current_char() {
            Some(ch) => {
                self.advance();
                ch.to_string()
            }
            None => String::new(),
        }
    }

    /// The text between `[` and its closing `]`, or `None` if unterminated.
    fn bracket_content(&self) -> Option<&'a str> {
        let input = self.input;
        let rest = &input[self.position + 1..];
        rest.find(']').map(|end| &rest[..end])
    }
}

/// Try to read bracket content as an elapsed-time tag.
fn try_parse_elapsed(content: &str) -> Option<DateToken> {
    let unit = match content.to_ascii_lowercase().as_str() {
        "h" | "hh" => ElapsedUnit::Hours,
        "m" | "mm" => ElapsedUnit::Minutes,
        "s" | "ss" => ElapsedUnit::Seconds,
        _ => return None,
    };
    Some(DateToken::Elapsed(unit, Width::from_run(content.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<DateToken> {
        let mut lexer = Lexer::new(input);
        std::iter::from_fn(|| lexer.next_token()).collect()
    }

    #[test]
    fn test_month_runs() {
        assert_eq!(
            lex_all("mmm"),
            vec![DateToken::Month(MonthStyle::Abbr)]
        );
        assert_eq!(
            lex_all("mmmmm"),
            vec![DateToken::Month(MonthStyle::Letter)]
        );
    }

    #[test]
    fn test_colon_makes_minute() {
        assert_eq!(
            lex_all("h:mm"),
            vec![
                DateToken::Hour(HourStyle::Clock(Width::Natural)),
                DateToken::Literal(":".to_string()),
                DateToken::Minute(Width::Padded),
            ]
        );
    }

    #[test]
    fn test_locale_tag_and_text_marker_dropped() {
        assert_eq!(
            lex_all("[$-409]d;@"),
            vec![DateToken::Day(DayStyle::Number(Width::Natural))]
        );
    }

    #[test]
    fn test_quoted_letters_stay_literal() {
        assert_eq!(
            lex_all("\"day\""),
            vec![DateToken::Literal("day".to_string())]
        );
        assert_eq!(lex_all("\\d"), vec![DateToken::Literal("d".to_string())]);
    }

    #[test]
    fn test_am_pm_variants() {
        assert_eq!(
            lex_all("am/pm"),
            vec![DateToken::Meridiem(MeridiemStyle::Full)]
        );
        assert_eq!(
            lex_all("a/p"),
            vec![DateToken::Meridiem(MeridiemStyle::Short { lower: true })]
        );
    }

    #[test]
    fn test_elapsed_tags() {
        assert_eq!(
            lex_all("[h]:mm:ss"),
            vec![
                DateToken::Elapsed(ElapsedUnit::Hours, Width::Natural),
                DateToken::Literal(":".to_string()),
                DateToken::Minute(Width::Padded),
                DateToken::Literal(":".to_string()),
                DateToken::Second(Width::Padded),
            ]
        );
        assert_eq!(
            lex_all("[MM]"),
            vec![DateToken::Elapsed(ElapsedUnit::Minutes, Width::Padded)]
        );
        assert_eq!(lex_all("[Red]"), vec![]);
    }

    #[test]
    fn test_unterminated_bracket_is_literal() {
        assert_eq!(
            lex_all("[y"),
            vec![
                DateToken::Literal("[".to_string()),
                DateToken::Year(YearStyle::Short),
            ]
        );
    }
}
