//! Behavioral tests for the palindrome span finder

use charspan_core::{
    is_palindrome, longest_palindrome_span, longest_palindromic_substring, reverse_chars, Span,
};

#[test]
fn test_reference_cases() {
    assert_eq!(longest_palindromic_substring("babad"), "bab");
    assert_eq!(longest_palindromic_substring("cbbd"), "bb");
    assert_eq!(longest_palindromic_substring(""), "");
    assert_eq!(longest_palindromic_substring("a"), "a");
}

#[test]
fn test_whole_input_palindromes() {
    for input in ["aa", "aba", "abba", "racecar", "madam", "tattarrattat"] {
        assert_eq!(longest_palindromic_substring(input), input);
    }
}

#[test]
fn test_embedded_palindromes() {
    assert_eq!(longest_palindromic_substring("bananas"), "anana");
    assert_eq!(longest_palindromic_substring("abc12321def"), "12321");
    assert_eq!(longest_palindromic_substring("abacabad"), "abacaba");
    assert_eq!(longest_palindromic_substring("forgeeksskeegfor"), "geeksskeeg");
    assert_eq!(
        longest_palindromic_substring(
            "civilwartestingwhetherthatnaptionoranynartionsoconceivedandsodedicatedcanlongendure"
        ),
        "ranynar"
    );
}

#[test]
fn test_digits_and_punctuation_are_opaque_tokens() {
    assert_eq!(longest_palindromic_substring("12321"), "12321");
    assert_eq!(longest_palindromic_substring("a1b2c2b1a"), "a1b2c2b1a");
    assert_eq!(longest_palindromic_substring("ab!?!cd"), "!?!");
}

#[test]
fn test_no_palindrome_longer_than_one() {
    // First-found tie-break: the leftmost single character wins.
    assert_eq!(longest_palindromic_substring("abcdef"), "a");
    assert_eq!(longest_palindromic_substring("ac"), "a");
}

#[test]
fn test_tie_break_prefers_smallest_start() {
    // Two maximal palindromes of length 3; the earlier one is reported.
    assert_eq!(longest_palindromic_substring("babad"), "bab");
    assert_eq!(longest_palindromic_substring("xxabcyy"), "xx");
}

#[test]
fn test_all_identical_characters_worst_case() {
    let input = "a".repeat(1_000);
    assert_eq!(longest_palindromic_substring(&input), input);
}

#[test]
fn test_long_mixed_input_finds_planted_palindrome() {
    let mut input = "ab".repeat(50);
    input.push_str("racecar");
    input.push_str(&"cd".repeat(50));
    assert_eq!(longest_palindromic_substring(&input), "racecar");
}

#[test]
fn test_span_matches_substring() {
    let input = "abcccba";
    let chars: Vec<char> = input.chars().collect();
    let span = longest_palindrome_span(&chars);
    assert_eq!(span, Span::new(0, 7));
    assert_eq!(longest_palindromic_substring(input), input);
}

#[test]
fn test_result_is_borrowed_from_input() {
    let input = "noon and midnight";
    let result = longest_palindromic_substring(input);
    assert_eq!(result, "noon");
    // Pointer identity: the slice aliases the input, not a copy.
    assert_eq!(result.as_ptr(), input.as_ptr());
}

#[test]
fn test_whole_string_palindrome_check() {
    assert!(!is_palindrome(""));
    assert!(is_palindrome("a"));
    assert!(is_palindrome(" "));
    assert!(is_palindrome("noon"));
    assert!(!is_palindrome("Noon")); // strictly case-sensitive
    assert!(!is_palindrome("ab"));
}

#[test]
fn test_reversal() {
    assert_eq!(reverse_chars(""), "");
    assert_eq!(reverse_chars("a"), "a");
    assert_eq!(reverse_chars("abc"), "cba");
    assert_eq!(reverse_chars("日本語"), "語本日");
}
