//! Command-line interface

use std::time::Instant;

use clap::Parser;
use num_bigint::BigUint;
use num_traits::One;
use rand::Rng;

use crate::crypto::{CryptoError, EcElGamal, Point, Rsa};
use crate::types::{CurveParameters, RsaParameters};

#[derive(Parser)]
#[command(name = "crypto_compare")]
#[command(version = "0.1.0")]
#[command(about = "Compare textbook RSA and elliptic-curve ElGamal", long_about = "Compare textbook RSA and elliptic-curve ElGamal encryption\non deliberately tiny demonstration parameters.\n\nThe key material is fixed and far too small for real use.")]
pub struct Cli {
    /// RSA message to encrypt and decrypt (integer below n = 3233)
    #[arg(long)]
    pub rsa: Option<String>,

    /// RSA text message, encrypted character by character
    #[arg(long)]
    pub rsa_text: Option<String>,

    /// ElGamal message point as "x,y" (must lie on the curve)
    #[arg(long)]
    pub point: Option<String>,

    /// ElGamal text message, hashed onto the curve before encryption
    #[arg(long)]
    pub ec_text: Option<String>,

    /// Ephemeral ElGamal scalar (chosen at random when omitted)
    #[arg(long)]
    pub k: Option<String>,

    /// Time both cryptosystems over repeated encrypt/decrypt rounds
    #[arg(long)]
    pub compare: bool,

    /// Iterations per timing round
    #[arg(long, default_value_t = 1000)]
    pub iterations: u32,

    /// Print the demonstration key material
    #[arg(long)]
    pub params: bool,
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rsa = Rsa::demo();
    let ecc = EcElGamal::demo();
    let mut ran = false;

    if cli.params {
        print_params(&rsa, &ecc);
        ran = true;
    }

    if let Some(message) = &cli.rsa {
        let m = parse_biguint(message)?;
        println!("{}", "=".repeat(60));
        println!("RSA message: {}", m);
        let c = rsa.encrypt(&m)?;
        let d = rsa.decrypt(&c)?;
        println!("Encrypted:   {}", c);
        println!("Decrypted:   {}", d);
        println!("{}", "=".repeat(60));
        ran = true;
    }

    if let Some(text) = &cli.rsa_text {
        println!("{}", "=".repeat(60));
        println!("RSA text: {}", text);
        let symbols: Vec<String> = text.chars().map(|ch| format!("{}({})", ch, ch as u32)).collect();
        println!("Symbols:  {}", symbols.join(" "));
        let encrypted = rsa.encrypt_text(text)?;
        let joined: Vec<String> = encrypted.iter().map(|c| c.to_string()).collect();
        println!("Encrypted: {}", joined.join(","));
        let decrypted = rsa.decrypt_text(&encrypted)?;
        println!("Decrypted: {}", decrypted);
        println!("{}", "=".repeat(60));
        ran = true;
    }

    if let Some(coords) = &cli.point {
        let message = parse_point(coords)?;
        let k = ephemeral_scalar(&cli, &ecc)?;
        println!("{}", "=".repeat(60));
        println!("ElGamal message point: {}", message);
        println!("Ephemeral scalar k:    {}", k);
        let (c1, c2) = ecc.encrypt(&message, &k)?;
        println!("C1: {}", c1);
        println!("C2: {}", c2);
        let decrypted = ecc.decrypt(&c1, &c2)?;
        println!("Decrypted: {}", decrypted);
        println!("{}", "=".repeat(60));
        ran = true;
    }

    if let Some(text) = &cli.ec_text {
        let k = ephemeral_scalar(&cli, &ecc)?;
        println!("{}", "=".repeat(60));
        println!("ElGamal text: {}", text);
        let encoded = ecc.encode_text(text)?;
        println!("Encoded point: {}", encoded);
        println!("Ephemeral scalar k: {}", k);
        let (c1, c2) = ecc.encrypt(&encoded, &k)?;
        println!("C1: {}", c1);
        println!("C2: {}", c2);
        let recovered = ecc.decrypt_text(&c1, &c2)?;
        println!("Recovered point: {} (the hash encoding is one-way)", recovered);
        println!("{}", "=".repeat(60));
        ran = true;
    }

    if cli.compare {
        compare_performance(&rsa, &ecc, cli.iterations)?;
        ran = true;
    }

    if !ran {
        anyhow::bail!("nothing to do; pass --rsa, --rsa-text, --point, --ec-text, --compare or --params (see --help)");
    }

    Ok(())
}

/// Time both cryptosystems sequentially over full encrypt/decrypt rounds
fn compare_performance(rsa: &Rsa, ecc: &EcElGamal, iterations: u32) -> anyhow::Result<()> {
    if iterations == 0 {
        anyhow::bail!("--iterations must be positive");
    }

    let m = BigUint::from(42u32);
    let message = Point::new(BigUint::from(10u32), BigUint::from(21u32));
    let k = BigUint::from(3u32);

    let start = Instant::now();
    for _ in 0..iterations {
        let c = rsa.encrypt(&m)?;
        rsa.decrypt(&c)?;
    }
    let rsa_avg = start.elapsed() / iterations;

    let start = Instant::now();
    for _ in 0..iterations {
        let (c1, c2) = ecc.encrypt(&message, &k)?;
        ecc.decrypt(&c1, &c2)?;
    }
    let ecc_avg = start.elapsed() / iterations;

    println!("{}", "=".repeat(60));
    println!("Timing over {} encrypt/decrypt rounds each:", iterations);
    println!("  RSA:        {:?} per operation", rsa_avg);
    println!("  EC-ElGamal: {:?} per operation", ecc_avg);
    let rsa_secs = rsa_avg.as_secs_f64();
    if rsa_secs > 0.0 {
        println!(
            "  EC-ElGamal takes {:.1}x the RSA time",
            ecc_avg.as_secs_f64() / rsa_secs
        );
    }
    println!("{}", "=".repeat(60));

    Ok(())
}

fn print_params(rsa: &Rsa, ecc: &EcElGamal) {
    let rsa_params = RsaParameters::demo();
    let curve = CurveParameters::demo();

    println!("{}", "=".repeat(60));
    println!("RSA: p = {}, q = {}", rsa_params.p, rsa_params.q);
    println!("     n = {}, e = {}, d = {}", rsa.modulus(), rsa.public_exponent(), rsa.private_exponent());
    println!("EC-ElGamal: y^2 = x^3 + {}x + {} over F_{}", curve.a, curve.b, curve.p);
    println!("     G  = {}", ecc.base_point());
    println!("     QA = {}", ecc.public_point());
    println!("{}", "=".repeat(60));
}

/// Take k from the command line, or draw one below the field modulus
fn ephemeral_scalar(cli: &Cli, ecc: &EcElGamal) -> Result<BigUint, CryptoError> {
    match &cli.k {
        Some(k) => parse_biguint(k),
        None => {
            let mut rng = rand::thread_rng();
            let bound = ecc.curve().modulus().to_u64_digits()[0];
            Ok(BigUint::from(rng.gen::<u64>() % bound) + BigUint::one())
        }
    }
}

/// Parse a decimal non-negative integer
fn parse_biguint(s: &str) -> Result<BigUint, CryptoError> {
    BigUint::parse_bytes(s.trim().as_bytes(), 10)
        .ok_or_else(|| CryptoError::MalformedInput(format!("not a non-negative integer: {:?}", s)))
}

/// Parse an "x,y" coordinate pair
fn parse_point(s: &str) -> Result<Point, CryptoError> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| CryptoError::MalformedInput(format!("expected \"x,y\", got {:?}", s)))?;
    Ok(Point::new(parse_biguint(x)?, parse_biguint(y)?))
}
