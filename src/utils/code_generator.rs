//! Short code generation.
//!
//! Codes are [`CODE_LENGTH`] characters drawn uniformly from [`CODE_ALPHABET`].
//! Generation does not guarantee uniqueness; the store rejects duplicates and
//! the shortening service retries with a fresh code.

use rand::Rng;

/// Characters a short code may contain.
pub const CODE_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Number of characters in a short code.
pub const CODE_LENGTH: usize = 4;

/// Source of candidate short codes.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Returns a fresh candidate code.
    fn generate(&self) -> String;
}

/// Generator backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random short code.
///
/// Each character is picked independently from the 36-character alphabet,
/// giving 36^4 = 1,679,616 possible codes.
///
/// # Examples
///
/// ```
/// use trunc8::utils::code_generator::{generate_code, CODE_LENGTH};
///
/// let code = generate_code();
/// assert_eq!(code.len(), CODE_LENGTH);
/// assert!(code.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
