//! The entropy-to-mnemonic codec.
//!
//! **ALL** bit manipulation lives here — checksum derivation, bit
//! concatenation, and 11-bit group indexing. The steps are mandated by
//! BIP-39 and must match bit for bit: pack the entropy into big-endian
//! bytes, hash with SHA-256, append the first `bit_len / 32` digest bits
//! (MSB-first) to the entropy bits, then read consecutive 11-bit big-endian
//! groups as wordlist indices.
//!
//! ```text
//! Entropy bits → bytes → SHA-256 → (entropy ‖ checksum) → 11-bit groups → words
//! ```
//!
//! The total bit count is a multiple of 11 by construction for every valid
//! entropy size, so no padding is ever required — and none is ever applied.

use sha2::{Digest, Sha256};

use crate::entropy::Entropy;
use crate::wordlist::Wordlist;

/// Bits consumed per mnemonic word.
pub const WORD_BITS: usize = 11;

/// A mnemonic phrase: an ordered sequence of wordlist words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic {
    words: Vec<String>,
}

impl Mnemonic {
    /// The words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words (12, 15, 18, 21, or 24).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The space-joined phrase.
    pub fn phrase(&self) -> String {
        self.words.join(" ")
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.phrase())
    }
}

/// Derive the checksum bits for `entropy`: the first `bit_len / 32` bits of
/// the SHA-256 digest of its byte representation, MSB-first.
pub fn checksum_bits(entropy: &Entropy) -> Vec<bool> {
    let digest = Sha256::digest(entropy.to_bytes());
    let checksum_len = entropy.bit_len() / 32;
    (0..checksum_len)
        .map(|i| (digest[i / 8] >> (7 - i % 8)) & 1 == 1)
        .collect()
}

/// Encode entropy as a mnemonic phrase against `wordlist`.
///
/// Pure and deterministic: identical inputs always produce the identical
/// word sequence. The returned phrase has exactly
/// `(bit_len + bit_len / 32) / 11` words, each drawn from `wordlist`.
pub fn encode(entropy: &Entropy, wordlist: &Wordlist) -> Mnemonic {
    let mut bits: Vec<bool> = Vec::with_capacity(entropy.bit_len() + entropy.bit_len() / 32);
    for &byte in &entropy.to_bytes() {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits.extend(checksum_bits(entropy));

    let words: Vec<String> = bits
        .chunks(WORD_BITS)
        .map(|group| {
            group
                .iter()
                .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit))
        })
        .map(|index| wordlist.word(index).to_string())
        .collect();

    log::debug!(
        "encoded {} entropy bits into {} words",
        entropy.bit_len(),
        words.len()
    );
    Mnemonic { words }
}
