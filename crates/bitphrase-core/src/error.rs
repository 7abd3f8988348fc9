//! Codec error types.
//!
//! Every precondition violation fails fast with a specific kind; the codec
//! never truncates, pads, or returns a partial mnemonic.

/// Error raised when entropy or wordlist preconditions are violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Entropy bit count is not one of 128, 160, 192, 224, or 256.
    InvalidLength(usize),
    /// Entropy contains a character other than '0' or '1'.
    InvalidCharacter { index: usize, found: char },
    /// Wordlist does not contain exactly 2048 entries.
    WordlistSize(usize),
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength(n) => {
                write!(f, "invalid entropy length: {n} bits (expected 128, 160, 192, 224, or 256)")
            }
            Self::InvalidCharacter { index, found } => {
                write!(f, "invalid character {found:?} at position {index} (expected '0' or '1')")
            }
            Self::WordlistSize(n) => {
                write!(f, "wordlist has {n} entries (expected exactly 2048)")
            }
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        let msg = CodecError::InvalidLength(127).to_string();
        assert!(msg.contains("127"));

        let msg = CodecError::InvalidCharacter { index: 4, found: '2' }.to_string();
        assert!(msg.contains("'2'"));
        assert!(msg.contains('4'));

        let msg = CodecError::WordlistSize(2047).to_string();
        assert!(msg.contains("2047"));
    }
}
