use super::helpers::letter_count;

/// Returns true when the token starts with a lowercase letter.
pub fn starts_lowercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_lowercase)
}

/// Returns true when the token holds at least `MIN` letters.
pub fn has_min_letters<const MIN: usize>(token: &str) -> bool {
    letter_count(token) >= MIN
}

/// Returns true for stray initials and abbreviations ("J.", "S").
pub fn is_initial(token: &str) -> bool {
    !has_min_letters::<2>(token)
}
