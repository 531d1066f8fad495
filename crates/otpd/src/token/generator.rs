//! Random token generation.

use rand::Rng;
use std::fmt::Write;

/// Generate a random uppercase-hex token of exactly `length` characters.
///
/// Draws `ceil(length / 2)` bytes from the thread-local CSPRNG and
/// hex-encodes them, so one trailing character may be truncated when
/// `length` is odd. The token is a security credential; `rand::rng()` is
/// cryptographically secure.
pub fn generate_token(length: usize) -> String {
    let mut bytes = vec![0u8; length.div_ceil(2)];
    rand::rng().fill(bytes.as_mut_slice());

    let mut token = String::with_capacity(bytes.len() * 2);
    for byte in &bytes {
        // Writing to a String cannot fail
        let _ = write!(token, "{byte:02X}");
    }
    token.truncate(length);
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_length_and_alphabet() {
        for length in 1..=32 {
            let token = generate_token(length);
            assert_eq!(token.len(), length);
            assert!(
                token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()),
                "unexpected character in token {token:?}"
            );
        }
    }

    #[test]
    fn odd_length_truncates_extra_nibble() {
        let token = generate_token(5);
        assert_eq!(token.len(), 5);
    }

    #[test]
    fn consecutive_tokens_differ() {
        // Not a uniqueness guarantee, just a sanity check on the RNG wiring
        let a = generate_token(16);
        let b = generate_token(16);
        assert_ne!(a, b);
    }
}
