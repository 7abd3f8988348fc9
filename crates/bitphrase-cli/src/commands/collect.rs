use bitphrase_core::{Entropy, encode};

use crate::tui::app::App;

pub fn run(bits: &str, wordlist_path: Option<&str>, log_path: Option<&str>) {
    let target = super::parse_bit_len(bits);

    // Load the wordlist up front so a bad --wordlist path fails before the
    // user spends time entering bits.
    let list = super::load_wordlist(wordlist_path);

    let mut app = App::new(target);
    let collected = match app.run() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: terminal failure: {e}");
            std::process::exit(1);
        }
    };

    let Some(bit_string) = collected else {
        eprintln!("cancelled");
        return;
    };

    let entropy = Entropy::from_bits(&bit_string).expect("collector only emits complete bit strings");
    let mnemonic = encode(&entropy, &list);

    println!("entropy:  {entropy}");
    println!("mnemonic: {mnemonic}");
    super::maybe_log(log_path, &entropy, &mnemonic);
}
