// src/core/sanitize.rs

pub fn normalize_nbsp(s: &str) -> String {
    s.replace('\u{a0}', " ")
}

/// Non-empty and ASCII digits only: municipality codes, ballot numbers.
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn has_alpha(s: &str) -> bool {
    s.chars().any(char::is_alphabetic)
}
