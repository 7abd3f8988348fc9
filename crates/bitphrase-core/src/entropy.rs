//! Validated entropy bit strings.
//!
//! [`Entropy`] wraps a bit string that has already passed length and
//! character validation, so downstream code (byte packing, checksum
//! derivation) can assume well-formed input.

use crate::error::CodecError;

/// Entropy sizes permitted by BIP-39, in bits.
pub const VALID_BIT_LENGTHS: [usize; 5] = [128, 160, 192, 224, 256];

/// A validated entropy bit string.
///
/// Invariants held by construction: the length is one of
/// [`VALID_BIT_LENGTHS`] and every character is `'0'` or `'1'`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entropy {
    bits: String,
}

impl Entropy {
    /// Validate a raw bit string and wrap it.
    ///
    /// Characters are checked before length so the error pinpoints the first
    /// offending character even when the length is also wrong.
    pub fn from_bits(bits: &str) -> Result<Self, CodecError> {
        if let Some((index, found)) = bits.chars().enumerate().find(|(_, c)| *c != '0' && *c != '1')
        {
            return Err(CodecError::InvalidCharacter { index, found });
        }
        if !VALID_BIT_LENGTHS.contains(&bits.len()) {
            return Err(CodecError::InvalidLength(bits.len()));
        }
        Ok(Self {
            bits: bits.to_string(),
        })
    }

    /// Number of entropy bits.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// The raw bit string.
    pub fn as_bits(&self) -> &str {
        &self.bits
    }

    /// Pack the bits into `bit_len / 8` big-endian bytes.
    ///
    /// Fixed width: leading zero bits become zero bytes, never truncated.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .as_bytes()
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &c| (acc << 1) | (c - b'0')))
            .collect()
    }

    /// Flip every bit, preserving length.
    pub fn invert(&self) -> Entropy {
        let flipped = self
            .bits
            .chars()
            .map(|c| if c == '0' { '1' } else { '0' })
            .collect();
        // Length and alphabet are unchanged, so the invariants still hold.
        Self { bits: flipped }
    }
}

impl std::fmt::Display for Entropy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.bits)
    }
}
