//! ISBN-10 validation
//!
//! An ISBN-10 is ten characters: nine decimal digits followed by a check
//! character that is either a digit or an uppercase 'X' (value 10). The
//! identifier is valid when the weighted sum over all ten positions
//! (weights 10 down to 1) is divisible by 11.
//!
//! # Examples
//!
//! ```
//! use isbncheck::isbn::check_isbn;
//!
//! assert_eq!(check_isbn("0140449116"), Ok(true));
//! assert_eq!(check_isbn("0140449117"), Ok(false));
//! assert!(check_isbn("123456789").is_err());
//! ```

use thiserror::Error;

/// Length of an ISBN-10 identifier, in characters
pub const ISBN10_LEN: usize = 10;

/// Errors for structurally malformed candidates
///
/// A malformed candidate is always one of these, never a checksum
/// failure: a well-formed candidate whose checksum does not hold is
/// `Ok(false)`, not an error. Callers can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Candidate is not exactly 10 characters
    #[error("expected 10 characters, got {len}")]
    InvalidLength {
        /// Byte length of the candidate
        len: usize,
    },

    /// Character outside the allowed alphabet for its position
    #[error("invalid character {ch:?} at position {index}")]
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Zero-based position of the character
        index: usize,
    },
}

/// Check a candidate ISBN-10 string
///
/// Positions 0-8 must be ASCII digits. The check character at position 9
/// may also be an uppercase 'X', contributing the value 10; lowercase
/// 'x' is rejected. Returns `Ok(true)` when the candidate is well-formed
/// and its weighted checksum is divisible by 11, `Ok(false)` when it is
/// well-formed but the checksum fails, and an error at the first
/// offending position when it is malformed.
pub fn check_isbn(isbn: &str) -> Result<bool, ValidationError> {
    // Input is treated as single-byte ASCII; any multi-byte character
    // either changes the byte length or fails the digit check below.
    if isbn.len() != ISBN10_LEN {
        return Err(ValidationError::InvalidLength { len: isbn.len() });
    }

    let mut total: u32 = 0;
    let mut weight: u32 = 10;

    for (index, ch) in isbn.chars().enumerate() {
        let value = if ch == 'X' && index == ISBN10_LEN - 1 {
            10
        } else {
            ch.to_digit(10)
                .ok_or(ValidationError::InvalidCharacter { ch, index })?
        };

        total += value * weight;
        weight -= 1;
    }

    Ok(total % 11 == 0)
}
