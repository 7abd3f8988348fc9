use bitphrase_core::{Entropy, encode};

pub fn run(bits: &str, wordlist_path: Option<&str>, log_path: Option<&str>) {
    let bit_len = super::parse_bit_len(bits);

    let mut bytes = vec![0u8; bit_len / 8];
    if let Err(e) = getrandom::fill(&mut bytes) {
        eprintln!("error: OS entropy unavailable: {e}");
        std::process::exit(1);
    }

    let bit_string: String = bytes.iter().map(|b| format!("{b:08b}")).collect();
    let entropy = Entropy::from_bits(&bit_string).expect("generated bits are always valid");

    let list = super::load_wordlist(wordlist_path);
    let mnemonic = encode(&entropy, &list);

    println!("entropy:  {entropy}");
    println!("mnemonic: {mnemonic}");
    super::maybe_log(log_path, &entropy, &mnemonic);
}
