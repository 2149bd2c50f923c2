//! Common types and demonstration constants

use num_bigint::BigUint;

/// Private scalar for the demonstration ElGamal key pair
pub const DEMO_SECRET: u32 = 7;

/// RSA construction parameters
///
/// Both `p` and `q` must be primes of at least 2 and `e` must be
/// coprime to (p-1)(q-1); primality itself is not verified. The
/// modulus p*q bounds the largest encryptable value, so it must exceed
/// every character code point fed to text encryption.
#[derive(Clone, Debug)]
pub struct RsaParameters {
    pub p: BigUint,
    pub q: BigUint,
    pub e: BigUint,
}

impl RsaParameters {
    /// Demonstration key: p = 61, q = 53, e = 17 (n = 3233)
    pub fn demo() -> Self {
        Self {
            p: BigUint::from(61u32),
            q: BigUint::from(53u32),
            e: BigUint::from(17u32),
        }
    }
}

/// Short Weierstrass curve parameters with a base point
///
/// `p` must be an odd prime (not verified) and (gx, gy) must satisfy
/// y^2 = x^3 + ax + b mod p, which construction does verify.
#[derive(Clone, Debug)]
pub struct CurveParameters {
    pub p: BigUint,
    pub a: BigUint,
    pub b: BigUint,
    pub gx: BigUint,
    pub gy: BigUint,
}

impl CurveParameters {
    /// Demonstration curve y^2 = x^3 + 2x + 3 over F_97 with G = (3, 6)
    pub fn demo() -> Self {
        Self {
            p: BigUint::from(97u32),
            a: BigUint::from(2u32),
            b: BigUint::from(3u32),
            gx: BigUint::from(3u32),
            gy: BigUint::from(6u32),
        }
    }
}
