/// Number of alphabetic characters in `token`.
pub fn letter_count(token: &str) -> usize {
    token.chars().filter(|c| c.is_alphabetic()).count()
}

/// Join whitespace-separated tokens with single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase only the first character of `text` ("smith jones" -> "Smith jones").
pub fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whitespace-delimited tokens of `text` with their byte offsets.
pub fn token_spans(text: &str) -> Vec<(usize, &str)> {
    regex!(r"\S+").find_iter(text).map(|m| (m.start(), m.as_str())).collect()
}
