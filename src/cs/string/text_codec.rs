//! Reversible mapping between short strings and a single integer.
//!
//! Each character code `c_i` (which must fit in one byte) is masked with
//! [`MASK`] and used as the base-256 digit at position `i`:
//!
//! ```text
//!   encode(s) = Σ (MASK ^ c_i) * 256^i
//! ```
//!
//! The mask keeps trailing NUL characters from collapsing into nothing. It is
//! not a security measure.
//!
//! A string whose last character is U+00AA encodes that character as a leading
//! zero digit, so it is lost on decode. For the same reason `encode("")` is 0
//! and `decode(0)` is `"\u{AA}"`.

use num_bigint_dig::BigUint;
use num_traits::Zero;

use crate::error::{Error, Result};

/// Per-byte mask applied before positional encoding.
pub const MASK: u8 = 0xAA;

/// Encodes `s` as an integer, least significant digit first.
///
/// Fails with [`Error::EncodingOverflow`] on the first character above U+00FF.
pub fn encode(s: &str) -> Result<BigUint> {
    let digits = s
        .chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character))
                .map(|code| code ^ MASK)
                .map_err(|_| Error::EncodingOverflow {
                    character,
                    position,
                })
        })
        .collect::<Result<Vec<u8>>>()?;

    Ok(BigUint::from_bytes_le(&digits))
}

/// Decodes an integer produced by [`encode`] back into a string.
///
/// Digits are taken least significant first and appended, so character order
/// is preserved. At least one character is always produced.
pub fn decode(n: &BigUint) -> String {
    let digits = if n.is_zero() {
        vec![0]
    } else {
        n.to_bytes_le()
    };

    digits.into_iter().map(|digit| char::from(digit ^ MASK)).collect()
}
