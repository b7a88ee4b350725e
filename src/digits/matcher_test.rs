use super::*;
use crate::digits::patterns::MinimumRunLength;

fn patterns_with_min(min: i64) -> CompiledPatterns {
    CompiledPatterns::compile(MinimumRunLength::new(min)).unwrap()
}

#[test]
fn test_contains_digit_fast_path() {
    let patterns = CompiledPatterns::default();

    assert!(!contains_digit("", &patterns));
    assert!(!contains_digit("hello, world.", &patterns));
    assert!(contains_digit("room 5", &patterns));
}

#[test]
fn test_currency_match_with_symbol_and_space() {
    let patterns = CompiledPatterns::default();
    let m = find_first_currency_amount("total $ 1,234.56 due", &patterns).unwrap();

    assert_eq!(m.span, 6..16);
    assert_eq!(m.symbol, "$");
    assert_eq!(m.space, " ");
    assert_eq!(m.amount, "1,234.56");
    assert!(m.has_symbol());
}

#[test]
fn test_plain_amount_matches_without_symbol() {
    let patterns = CompiledPatterns::default();
    let m = find_first_currency_amount("1,234,567.89", &patterns).unwrap();

    assert!(!m.has_symbol());
    assert_eq!(m.amount, "1,234,567.89");
}

#[test]
fn test_first_currency_match_is_leftmost() {
    let patterns = CompiledPatterns::default();

    let m = find_first_currency_amount("€5 and £ 10.50", &patterns).unwrap();
    assert_eq!(m.symbol, "€");
    assert_eq!(m.amount, "5");

    // The bare digit wins over the symbol that follows it
    let m = find_first_currency_amount("5$100", &patterns).unwrap();
    assert_eq!(m.span, 0..1);
    assert!(!m.has_symbol());
}

#[test]
fn test_no_currency_match_without_digits() {
    let patterns = CompiledPatterns::default();
    assert!(find_first_currency_amount("$ and €", &patterns).is_none());
}

#[test]
fn test_trailing_separator_is_not_part_of_amount() {
    let patterns = CompiledPatterns::default();
    let m = find_first_currency_amount("$12.", &patterns).unwrap();

    assert_eq!(m.amount, "12");
}

#[test]
fn test_digit_runs_are_maximal() {
    let patterns = patterns_with_min(3);
    let runs = find_digit_runs("12 3456 78901", &patterns);

    let digits: Vec<&str> = runs.iter().map(|r| r.digits).collect();
    assert_eq!(digits, vec!["3456", "78901"]);
    assert_eq!(runs[0].span, 3..7);
}

#[test]
fn test_separators_break_digit_runs() {
    let patterns = CompiledPatterns::default();
    let runs = find_digit_runs("1,234.56", &patterns);

    let digits: Vec<&str> = runs.iter().map(|r| r.digits).collect();
    assert_eq!(digits, vec!["234", "56"]);
}
