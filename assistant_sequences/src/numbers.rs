//! Lazy extraction of numeric tokens from free text.

use std::sync::OnceLock;

use regex::{Match, Matches, Regex};

/// Candidate numerals: digits with an optional fractional part.
///
/// ASCII digits only, so every match is a valid `f64` literal.
static NUMERAL_PATTERN: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn numeral_pattern() -> &'static Regex {
    NUMERAL_PATTERN.get_or_init(|| {
        Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("Static regex pattern is guaranteed to be valid")
    })
}

/// Iterator over the numeric tokens of a text, in left-to-right order.
///
/// A token counts only when a delimiter (whitespace, or an information
/// separator U+001C..=U+001F) sits directly on both sides of it.
/// Numerals touching the start or end of the text, or adjacent to
/// punctuation, are skipped.
#[derive(Debug)]
pub struct NumericTokens<'t> {
    text: &'t str,
    matches: Matches<'static, 't>,
}

/// Scan `text` lazily for whitespace-delimited numbers.
#[must_use]
pub fn extract_numbers(text: &str) -> NumericTokens<'_> {
    NumericTokens {
        text,
        matches: numeral_pattern().find_iter(text),
    }
}

/// Unicode whitespace plus the information separators U+001C..=U+001F.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whether a delimiter sits directly before and after the match.
fn is_delimited(text: &str, m: &Match<'_>) -> bool {
    let before = text[..m.start()].chars().next_back();
    let after = text[m.end()..].chars().next();
    before.is_some_and(is_delimiter) && after.is_some_and(is_delimiter)
}

impl Iterator for NumericTokens<'_> {
    type Item = f64;

    #[expect(
        clippy::expect_used,
        reason = "The numeral pattern only matches valid float literals"
    )]
    fn next(&mut self) -> Option<f64> {
        // A rejected candidate is maximal, so no shorter numeral starting
        // inside it can be delimited either.
        let text = self.text;
        let m = self.matches.find(|m| is_delimited(text, m))?;
        Some(
            m.as_str()
                .parse()
                .expect("Matched numerals always parse as f64"),
        )
    }
}

/// Total of every value `extractor` yields for `text`; `0.0` when none.
#[must_use]
pub fn sum_numeric_stream<'t, F, I>(text: &'t str, extractor: F) -> f64
where
    F: FnOnce(&'t str) -> I,
    I: Iterator<Item = f64>,
{
    // `Sum for f64` starts from -0.0, which would print as "-0.00".
    extractor(text).fold(0.0, |total, value| total + value)
}
