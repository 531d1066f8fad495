//! Phone number normalization.

/// Strip formatting characters from a user-submitted phone number.
///
/// Removes `-`, `.`, `(`, `)`, and spaces; everything else passes through
/// unchanged, including a leading `+`. No validation is performed.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | '.' | '(' | ')' | ' '))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_characters() {
        assert_eq!(normalize("(555) 123-4567"), "5551234567");
        assert_eq!(normalize("555.123.4567"), "5551234567");
        assert_eq!(normalize("555 123 4567"), "5551234567");
    }

    #[test]
    fn preserves_other_characters_in_order() {
        assert_eq!(normalize("+1 (212) 555-0100"), "+12125550100");
        assert_eq!(normalize("abc#123"), "abc#123");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("()-. "), "");
    }
}
