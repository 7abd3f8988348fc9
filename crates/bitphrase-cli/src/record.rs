//! Timestamped record log.
//!
//! Appends one JSON line per encoded phrase to a caller-chosen file. The
//! output path is explicit configuration; nothing here reads globals.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use bitphrase_core::{Entropy, Mnemonic};

/// One logged encode result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    /// Seconds since the UNIX epoch at write time.
    pub timestamp: u64,
    /// Entropy size in bits.
    pub bits: usize,
    /// The entropy bit string.
    pub entropy: String,
    /// The space-joined mnemonic phrase.
    pub mnemonic: String,
}

/// Append-only writer for [`Record`]s.
pub struct RecordWriter {
    path: PathBuf,
}

impl RecordWriter {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record as a JSON line, creating the file if needed.
    pub fn append(&self, entropy: &Entropy, mnemonic: &Mnemonic) -> io::Result<()> {
        let record = Record {
            timestamp: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
            bits: entropy.bit_len(),
            entropy: entropy.to_string(),
            mnemonic: mnemonic.phrase(),
        };

        let line = serde_json::to_string(&record)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        log::debug!("appended record to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitphrase_core::{Wordlist, encode};

    #[test]
    fn appends_parseable_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("records.jsonl");
        let writer = RecordWriter::new(&path);

        let entropy = Entropy::from_bits(&"0".repeat(128)).unwrap();
        let mnemonic = encode(&entropy, Wordlist::english());

        writer.append(&entropy, &mnemonic).unwrap();
        writer.append(&entropy.invert(), &encode(&entropy.invert(), Wordlist::english())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Record = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.bits, 128);
        assert_eq!(first.entropy, "0".repeat(128));
        assert!(first.mnemonic.starts_with("abandon"));

        let second: Record = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.entropy, "1".repeat(128));
        assert!(second.mnemonic.starts_with("zoo"));
    }

    #[test]
    fn creates_the_file_on_first_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.jsonl");
        assert!(!path.exists());

        let entropy = Entropy::from_bits(&"1".repeat(128)).unwrap();
        let mnemonic = encode(&entropy, Wordlist::english());
        RecordWriter::new(&path).append(&entropy, &mnemonic).unwrap();

        assert!(path.exists());
    }
}
