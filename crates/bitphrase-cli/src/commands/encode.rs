use std::io::BufRead;

use bitphrase_core::{Entropy, encode};

pub fn run(bits: Option<&str>, wordlist_path: Option<&str>, log_path: Option<&str>, invert: bool) {
    let input = match bits {
        Some(b) => b.to_string(),
        None => read_stdin_line(),
    };

    let entropy = match Entropy::from_bits(input.trim()) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let list = super::load_wordlist(wordlist_path);
    let mnemonic = encode(&entropy, &list);
    println!("{mnemonic}");
    super::maybe_log(log_path, &entropy, &mnemonic);

    if invert {
        let flipped = entropy.invert();
        let flipped_mnemonic = encode(&flipped, &list);
        println!("inverted: {flipped_mnemonic}");
        super::maybe_log(log_path, &flipped, &flipped_mnemonic);
    }
}

fn read_stdin_line() -> String {
    let mut line = String::new();
    if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
        eprintln!("error: cannot read stdin: {e}");
        std::process::exit(1);
    }
    line
}
