//! CLI for bitphrase — raw bits in, recovery phrase out.

mod commands;
mod record;
mod tui;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bitphrase")]
#[command(about = "bitphrase — turn raw entropy bits into BIP-39 mnemonic phrases")]
#[command(version = bitphrase_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a bit string (128/160/192/224/256 bits) as a mnemonic phrase.
    /// Reads one line from stdin when BITS is omitted.
    Encode {
        /// The entropy bit string ('0'/'1' characters only)
        bits: Option<String>,

        /// Path to a custom 2048-word wordlist (default: embedded English)
        #[arg(long)]
        wordlist: Option<String>,

        /// Append a timestamped record of the result to this file
        #[arg(long)]
        log: Option<String>,

        /// Also print the mnemonic of the bit-flipped entropy for comparison
        #[arg(long)]
        invert: bool,
    },

    /// Draw entropy from the operating system and encode it.
    Generate {
        /// Entropy size in bits
        #[arg(long, default_value = "128", value_parser = ["128", "160", "192", "224", "256"])]
        bits: String,

        /// Path to a custom 2048-word wordlist (default: embedded English)
        #[arg(long)]
        wordlist: Option<String>,

        /// Append a timestamped record of the result to this file
        #[arg(long)]
        log: Option<String>,
    },

    /// Flip every bit of a bit string (0 <-> 1).
    Flip {
        /// The entropy bit string to invert
        bits: String,
    },

    /// Enter entropy bit by bit in an interactive terminal UI, then encode.
    Collect {
        /// Entropy size in bits
        #[arg(long, default_value = "128", value_parser = ["128", "160", "192", "224", "256"])]
        bits: String,

        /// Path to a custom 2048-word wordlist (default: embedded English)
        #[arg(long)]
        wordlist: Option<String>,

        /// Append a timestamped record of the result to this file
        #[arg(long)]
        log: Option<String>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            bits,
            wordlist,
            log,
            invert,
        } => commands::encode::run(bits.as_deref(), wordlist.as_deref(), log.as_deref(), invert),
        Commands::Generate {
            bits,
            wordlist,
            log,
        } => commands::generate::run(&bits, wordlist.as_deref(), log.as_deref()),
        Commands::Flip { bits } => commands::flip::run(&bits),
        Commands::Collect {
            bits,
            wordlist,
            log,
        } => commands::collect::run(&bits, wordlist.as_deref(), log.as_deref()),
    }
}
