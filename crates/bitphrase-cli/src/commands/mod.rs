pub mod collect;
pub mod encode;
pub mod flip;
pub mod generate;

use std::path::Path;

use bitphrase_core::{Entropy, Mnemonic, Wordlist};

use crate::record::RecordWriter;

/// Resolve the wordlist: a custom file when a path is given, otherwise the
/// embedded English list.
pub fn load_wordlist(path: Option<&str>) -> Wordlist {
    match path {
        Some(p) => match Wordlist::from_path(Path::new(p)) {
            Ok(list) => list,
            Err(e) => {
                eprintln!("error: cannot load wordlist {p}: {e}");
                std::process::exit(1);
            }
        },
        None => Wordlist::english().clone(),
    }
}

/// Parse a size argument that clap has already restricted to the five valid
/// values.
pub fn parse_bit_len(bits: &str) -> usize {
    bits.parse().expect("value_parser restricts to valid sizes")
}

/// Append a record of the result when a log path was given.
pub fn maybe_log(log_path: Option<&str>, entropy: &Entropy, mnemonic: &Mnemonic) {
    let Some(path) = log_path else { return };
    let writer = RecordWriter::new(Path::new(path));
    if let Err(e) = writer.append(entropy, mnemonic) {
        eprintln!("warning: could not write record to {path}: {e}");
    }
}
