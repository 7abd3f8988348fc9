use bitphrase_core::Entropy;

pub fn run(bits: &str) {
    match Entropy::from_bits(bits.trim()) {
        Ok(entropy) => println!("{}", entropy.invert()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
