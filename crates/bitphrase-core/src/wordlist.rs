//! BIP-39 wordlist loading.
//!
//! The canonical English wordlist (2048 words) is embedded at compile time
//! via `include_str!` and parsed once behind a `OnceLock`. Custom lists can
//! be loaded from newline-delimited UTF-8 files; the size check runs before
//! the list can ever be indexed.

use std::io;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::CodecError;

/// Number of words in a BIP-39 wordlist.
pub const WORDLIST_SIZE: usize = 2048;

const ENGLISH_RAW: &str = include_str!("wordlists/english.txt");

static ENGLISH_LOCK: OnceLock<Wordlist> = OnceLock::new();

/// An ordered, immutable list of exactly [`WORDLIST_SIZE`] words.
///
/// Index 0..2047 defines the mapping from 11-bit groups to words. The list is
/// read-only after construction, so a `Wordlist` is safe to share across
/// threads.
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
}

impl Wordlist {
    /// The canonical BIP-39 English wordlist, parsed lazily on first access
    /// and cached for the lifetime of the process.
    pub fn english() -> &'static Wordlist {
        ENGLISH_LOCK.get_or_init(|| {
            Wordlist::from_words(ENGLISH_RAW.lines().map(str::to_string).collect())
                .expect("embedded English wordlist must contain exactly 2048 words")
        })
    }

    /// Build a wordlist from an owned vector, rejecting any count other than
    /// exactly [`WORDLIST_SIZE`].
    pub fn from_words(words: Vec<String>) -> Result<Self, CodecError> {
        if words.len() != WORDLIST_SIZE {
            return Err(CodecError::WordlistSize(words.len()));
        }
        Ok(Self { words })
    }

    /// Load a wordlist from a newline-delimited UTF-8 file.
    ///
    /// Per-line whitespace is trimmed; blank lines are skipped. A size
    /// mismatch surfaces as [`io::ErrorKind::InvalidData`].
    pub fn from_path(path: &Path) -> io::Result<Wordlist> {
        let contents = std::fs::read_to_string(path)?;
        let words: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        log::debug!("loaded {} words from {}", words.len(), path.display());
        Self::from_words(words).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Word at `index`. Callers are expected to stay within 0..2047; the
    /// codec guarantees this by construction of its 11-bit groups.
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Position of `word` in the list, if present.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn english_has_2048_entries() {
        assert_eq!(Wordlist::english().len(), WORDLIST_SIZE);
    }

    #[test]
    fn english_is_sorted_and_unique() {
        let list = Wordlist::english();
        for i in 1..list.len() {
            assert!(
                list.word(i - 1) < list.word(i),
                "entries {} and {} out of order: {} >= {}",
                i - 1,
                i,
                list.word(i - 1),
                list.word(i)
            );
        }
    }

    #[test]
    fn english_prefixes_unique_at_four_chars() {
        // BIP-39 guarantees the first four letters identify a word uniquely.
        let list = Wordlist::english();
        let mut prefixes: Vec<&str> = (0..list.len())
            .map(|i| {
                let w = list.word(i);
                &w[..w.len().min(4)]
            })
            .collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), WORDLIST_SIZE);
    }

    #[test]
    fn english_known_anchors() {
        let list = Wordlist::english();
        assert_eq!(list.word(0), "abandon");
        assert_eq!(list.word(3), "about");
        assert_eq!(list.word(2047), "zoo");
        assert_eq!(list.index_of("zoo"), Some(2047));
        assert_eq!(list.index_of("notaword"), None);
    }

    #[test]
    fn from_words_rejects_wrong_sizes() {
        let short: Vec<String> = (0..2047).map(|i| format!("w{i}")).collect();
        assert_eq!(
            Wordlist::from_words(short).unwrap_err(),
            CodecError::WordlistSize(2047)
        );

        let long: Vec<String> = (0..2049).map(|i| format!("w{i}")).collect();
        assert_eq!(
            Wordlist::from_words(long).unwrap_err(),
            CodecError::WordlistSize(2049)
        );
    }

    #[test]
    fn from_path_trims_and_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..WORDLIST_SIZE {
            writeln!(file, "  word{i}\t").unwrap();
        }
        file.flush().unwrap();

        let list = Wordlist::from_path(file.path()).unwrap();
        assert_eq!(list.len(), WORDLIST_SIZE);
        assert_eq!(list.word(0), "word0");
        assert_eq!(list.word(2047), "word2047");
    }

    #[test]
    fn from_path_rejects_short_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..100 {
            writeln!(file, "word{i}").unwrap();
        }
        file.flush().unwrap();

        let err = Wordlist::from_path(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        assert!(Wordlist::from_path(Path::new("/nonexistent/wordlist.txt")).is_err());
    }
}
