// Pattern compilation for digit-run and currency-amount matching
// Patterns are rebuilt whenever the minimum run length changes

use regex::Regex;
use serde::Serialize;

/// Currency glyphs recognized in front of an amount
pub const CURRENCY_SYMBOLS: &[&str] = &["$", "💵", "€", "💶", "£", "💷", "¥", "💴"];

/// Default minimum number of digits read individually
pub const DEFAULT_MIN_RUN_LENGTH: u32 = 2;

/// Smallest minimum run length that keeps the pattern meaningful
pub const MIN_ALLOWED_RUN_LENGTH: u32 = 2;

/// Errors that can occur while compiling patterns
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PatternError {
    /// The regex engine rejected the generated pattern
    #[error("Failed to compile pattern: {0}")]
    Compile(String),
}

/// Smallest digit-run length eligible for expansion, never below 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct MinimumRunLength(u32);

impl MinimumRunLength {
    /// Build from a raw configuration value, clamping anything below 2
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(MIN_ALLOWED_RUN_LENGTH as i64, u32::MAX as i64);
        Self(clamped as u32)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for MinimumRunLength {
    fn default() -> Self {
        Self(DEFAULT_MIN_RUN_LENGTH)
    }
}

/// Immutable snapshot of compiled patterns for one minimum run length
///
/// Reconfiguration builds a fresh snapshot and swaps it in whole, so a
/// filter call only ever sees one consistent set.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    min_run_length: MinimumRunLength,
    any_digit: Regex,
    digit_run: Regex,
    currency_amount: Regex,
}

impl CompiledPatterns {
    pub fn compile(min_run_length: MinimumRunLength) -> Result<Self, PatternError> {
        let any_digit = build(r"\d")?;
        let digit_run = build(&digit_run_pattern(min_run_length))?;
        let currency_amount = build(&currency_amount_pattern())?;

        crate::debug!(
            "Compiled digit patterns for minimum run length {}",
            min_run_length.get()
        );

        Ok(Self {
            min_run_length,
            any_digit,
            digit_run,
            currency_amount,
        })
    }

    pub fn min_run_length(&self) -> MinimumRunLength {
        self.min_run_length
    }

    /// Matches a single digit character anywhere
    pub fn any_digit(&self) -> &Regex {
        &self.any_digit
    }

    /// Matches maximal digit runs of at least the minimum length
    pub fn digit_run(&self) -> &Regex {
        &self.digit_run
    }

    /// Matches `[symbol]? [whitespace]* digits([.,]digits)*`
    ///
    /// Capture groups: `symbol`, `space`, `amount`.
    pub fn currency_amount(&self) -> &Regex {
        &self.currency_amount
    }
}

impl Default for CompiledPatterns {
    fn default() -> Self {
        // The default length always produces a pattern well inside regex limits
        Self::compile(MinimumRunLength::default())
            .expect("default digit patterns must compile")
    }
}

fn build(pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|e| PatternError::Compile(e.to_string()))
}

fn digit_run_pattern(min_run_length: MinimumRunLength) -> String {
    format!(r"\d{{{},}}", min_run_length.get())
}

fn currency_amount_pattern() -> String {
    let symbols: String = CURRENCY_SYMBOLS
        .iter()
        .map(|symbol| regex::escape(symbol))
        .collect();
    format!(
        r"(?P<symbol>[{}])?(?P<space>\s*)(?P<amount>\d+(?:[.,]\d+)*)",
        symbols
    )
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod tests;
