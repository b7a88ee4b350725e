// Pattern matcher - locates digit runs and currency amounts inside a text fragment

use std::ops::Range;

use super::patterns::CompiledPatterns;

/// A currency-amount expression found in text
///
/// `symbol` is empty when the amount has no leading currency glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyMatch<'t> {
    /// Byte span of the whole match
    pub span: Range<usize>,
    pub symbol: &'t str,
    pub space: &'t str,
    /// Digits with any grouping/decimal separators
    pub amount: &'t str,
}

impl CurrencyMatch<'_> {
    pub fn has_symbol(&self) -> bool {
        !self.symbol.is_empty()
    }
}

/// A maximal digit run at least as long as the configured minimum
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitRun<'t> {
    pub span: Range<usize>,
    pub digits: &'t str,
}

/// Quick rejection: most spoken fragments carry no digit at all
pub fn contains_digit(text: &str, patterns: &CompiledPatterns) -> bool {
    patterns.any_digit().is_match(text)
}

/// The leftmost currency-amount expression, with or without a symbol
pub fn find_first_currency_amount<'t>(
    text: &'t str,
    patterns: &CompiledPatterns,
) -> Option<CurrencyMatch<'t>> {
    patterns
        .currency_amount()
        .captures(text)
        .and_then(|caps| currency_match(&caps))
}

fn currency_match<'t>(caps: &regex::Captures<'t>) -> Option<CurrencyMatch<'t>> {
    let whole = caps.get(0)?;
    let amount = caps.name("amount")?;
    Some(CurrencyMatch {
        span: whole.range(),
        symbol: caps.name("symbol").map_or("", |m| m.as_str()),
        space: caps.name("space").map_or("", |m| m.as_str()),
        amount: amount.as_str(),
    })
}

/// Find digit runs eligible for expansion
///
/// The pattern is greedy and scans leftmost-first, so every reported run
/// already extends to its full contiguous digit boundary.
pub fn find_digit_runs<'t>(text: &'t str, patterns: &CompiledPatterns) -> Vec<DigitRun<'t>> {
    patterns
        .digit_run()
        .find_iter(text)
        .map(|m| DigitRun {
            span: m.range(),
            digits: m.as_str(),
        })
        .collect()
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
