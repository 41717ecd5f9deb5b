// Used by both the lexer and the LET statement.

/// A Grin identifier starts with a letter or underscore and continues
/// with letters, digits, or underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if is_identifier_start(ch) => chars.all(is_identifier_continue),
        _ => false,
    }
}

pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

pub fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_tmp9"));
        assert!(is_identifier("Count2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier("\"s\""));
    }
}
