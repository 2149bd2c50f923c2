//! crypto_compare - RSA vs EC-ElGamal comparator
//!
//! This application contrasts textbook RSA with elliptic-curve ElGamal
//! on deliberately tiny parameters. The key material is didactic only
//! and must never be treated as secure.

mod cli;
mod crypto;
mod types;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
