// Segmenter/rewriter - turns matched regions into their digit-by-digit form
//
// Two rules run in fixed order on every fragment that contains a digit:
// 1. the first currency amount moves its leading symbol behind the number
// 2. digit runs at or above the minimum length are split into single digits

use std::borrow::Cow;

use super::matcher::{contains_digit, find_digit_runs, find_first_currency_amount};
use super::patterns::CompiledPatterns;

/// Separator placed between expanded digits
pub const DIGIT_SEPARATOR: &str = "  ";

/// Rewrite one text fragment
///
/// Fragments without any digit are returned borrowed and untouched.
pub fn process_text<'t>(text: &'t str, patterns: &CompiledPatterns) -> Cow<'t, str> {
    if !contains_digit(text, patterns) {
        return Cow::Borrowed(text);
    }

    match reorder_currency(text, patterns) {
        Cow::Borrowed(unchanged) => expand_digit_runs(unchanged, patterns),
        Cow::Owned(reordered) => {
            Cow::Owned(expand_digit_runs(&reordered, patterns).into_owned())
        }
    }
}

/// Move the leading symbol of the first currency amount behind its number
///
/// `"$ 1,234.56"` becomes `"1,234.56$"`; the whitespace between symbol and
/// amount is dropped. Only the first currency-amount match of the fragment
/// is considered, and nothing is rewritten when that match has no symbol or
/// its symbol directly follows a digit.
pub fn reorder_currency<'t>(text: &'t str, patterns: &CompiledPatterns) -> Cow<'t, str> {
    let Some(m) = find_first_currency_amount(text, patterns) else {
        return Cow::Borrowed(text);
    };
    if !m.has_symbol() || ends_with_digit(&text[..m.span.start], patterns) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    result.push_str(&text[..m.span.start]);
    result.push_str(m.amount);
    result.push_str(m.symbol);
    result.push_str(&text[m.span.end..]);

    Cow::Owned(result)
}

fn ends_with_digit(text: &str, patterns: &CompiledPatterns) -> bool {
    text.chars()
        .next_back()
        .is_some_and(|ch| patterns.any_digit().is_match(ch.encode_utf8(&mut [0; 4])))
}

/// Split every qualifying digit run into single digits
///
/// Everything outside the runs, including separators and trailing
/// currency symbols, is copied through literally.
pub fn expand_digit_runs<'t>(text: &'t str, patterns: &CompiledPatterns) -> Cow<'t, str> {
    let runs = find_digit_runs(text, patterns);
    if runs.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() * 3);
    let mut last_end = 0;

    for run in &runs {
        result.push_str(&text[last_end..run.span.start]);
        result.push_str(&spell_digits(run.digits));
        last_end = run.span.end;
    }
    result.push_str(&text[last_end..]);

    Cow::Owned(result)
}

/// Join the characters of a digit run with the digit separator
pub fn spell_digits(digits: &str) -> String {
    let mut spelled = String::with_capacity(digits.len() * 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 {
            spelled.push_str(DIGIT_SEPARATOR);
        }
        spelled.push(ch);
    }
    spelled
}

#[cfg(test)]
#[path = "rewriter_test.rs"]
mod tests;
