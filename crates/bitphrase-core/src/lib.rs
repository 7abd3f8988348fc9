//! # bitphrase-core
//!
//! **Raw bits in, recovery phrase out.**
//!
//! `bitphrase-core` is a pure BIP-39 entropy-to-mnemonic codec: it packs a
//! validated bit string into bytes, derives a SHA-256 checksum, and maps
//! 11-bit groups onto the standard 2048-word English list.
//!
//! ## Quick Start
//!
//! ```
//! use bitphrase_core::{Entropy, Wordlist, encode};
//!
//! let entropy = Entropy::from_bits(&"0".repeat(128)).unwrap();
//! let mnemonic = encode(&entropy, Wordlist::english());
//!
//! assert_eq!(mnemonic.len(), 12);
//! assert!(mnemonic.phrase().starts_with("abandon abandon abandon"));
//! ```
//!
//! ## Architecture
//!
//! Entropy bits → bytes → SHA-256 checksum → (entropy ‖ checksum) → 11-bit groups → words
//!
//! The codec is deterministic and holds no mutable state; it is safe to call
//! from any number of threads without synchronization. Everything with a side
//! effect (terminal input, record logging, custom wordlist files) lives in the
//! CLI crate — this crate only needs the filesystem if you load a wordlist
//! from a path instead of using the embedded English list.

pub mod codec;
pub mod entropy;
pub mod error;
pub mod wordlist;

pub use codec::{Mnemonic, checksum_bits, encode};
pub use entropy::{Entropy, VALID_BIT_LENGTHS};
pub use error::CodecError;
pub use wordlist::{WORDLIST_SIZE, Wordlist};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
