//! Cryptographic operations module

pub mod curve;
pub mod elgamal;
pub mod rsa;

pub use curve::{Curve, Point};
pub use elgamal::EcElGamal;
pub use rsa::Rsa;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

/// Errors reported by the arithmetic kernel and the cryptosystems
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(&'static str),

    #[error("no modular inverse exists for the given operands")]
    NoInverseExists,

    #[error("message {0} is too large for modulus {1}")]
    MessageTooLarge(BigUint, BigUint),

    #[error("text does not hash to a representable curve point")]
    UnencodableText,

    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Calculate base^exponent mod modulus by binary square-and-multiply
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint, CryptoError> {
    if modulus.is_zero() {
        return Err(CryptoError::InvalidArgument("modulus must be at least 1"));
    }

    let mut result = BigUint::one() % modulus;
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.is_odd() {
            result = result * &base % modulus;
        }
        base = &base * &base % modulus;
        exponent >>= 1;
    }

    Ok(result)
}

/// Calculate modular multiplicative inverse using the extended Euclidean algorithm
///
/// Returns a value in [0, m). Fails with `NoInverseExists` when the
/// operands are not coprime; the gcd is tracked in the same pass.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint, CryptoError> {
    use num_bigint::BigInt;

    if m.is_zero() {
        return Err(CryptoError::InvalidArgument("modulus must be at least 1"));
    }
    if m.is_one() {
        return Ok(BigUint::zero());
    }

    let m_int = BigInt::from(m.clone());
    let mut r0 = BigInt::from(a % m);
    let mut r1 = m_int.clone();
    let mut x0 = BigInt::one();
    let mut x1 = BigInt::zero();

    while !r1.is_zero() {
        let q = &r0 / &r1;
        let r2 = &r0 - &q * &r1;
        r0 = std::mem::replace(&mut r1, r2);
        let x2 = &x0 - &q * &x1;
        x0 = std::mem::replace(&mut x1, x2);
    }

    if r0 != BigInt::one() {
        return Err(CryptoError::NoInverseExists);
    }

    // Convert the Bezout coefficient to a positive value in range [0, m)
    let result = ((x0 % &m_int) + &m_int) % &m_int;
    Ok(result.to_biguint().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod_pow_known_values() {
        let result = mod_pow(
            &BigUint::from(42u32),
            &BigUint::from(17u32),
            &BigUint::from(3233u32),
        )
        .unwrap();
        assert_eq!(result, BigUint::from(2557u32));
    }

    #[test]
    fn test_mod_pow_zero_exponent() {
        let result = mod_pow(
            &BigUint::from(5u32),
            &BigUint::zero(),
            &BigUint::from(7u32),
        )
        .unwrap();
        assert_eq!(result, BigUint::one());
    }

    #[test]
    fn test_mod_pow_modulus_one() {
        let result = mod_pow(
            &BigUint::from(5u32),
            &BigUint::from(3u32),
            &BigUint::one(),
        )
        .unwrap();
        assert_eq!(result, BigUint::zero());
    }

    #[test]
    fn test_mod_pow_zero_modulus() {
        let result = mod_pow(
            &BigUint::from(5u32),
            &BigUint::from(3u32),
            &BigUint::zero(),
        );
        assert!(matches!(result, Err(CryptoError::InvalidArgument(_))));
    }

    #[test]
    fn test_mod_inverse_known_values() {
        let result = mod_inverse(&BigUint::from(17u32), &BigUint::from(3120u32)).unwrap();
        assert_eq!(result, BigUint::from(2753u32));

        let result = mod_inverse(&BigUint::from(3u32), &BigUint::from(7u32)).unwrap();
        assert_eq!(result, BigUint::from(5u32));
    }

    #[test]
    fn test_mod_inverse_modulus_one() {
        let result = mod_inverse(&BigUint::from(12u32), &BigUint::one()).unwrap();
        assert_eq!(result, BigUint::zero());
    }

    #[test]
    fn test_mod_inverse_not_coprime() {
        let result = mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32));
        assert!(matches!(result, Err(CryptoError::NoInverseExists)));
    }

    #[test]
    fn test_mod_inverse_round_trip() {
        let m = BigUint::from(97u32);
        for a in 1u32..97 {
            let a = BigUint::from(a);
            let inv = mod_inverse(&a, &m).unwrap();
            assert_eq!((a * inv) % &m, BigUint::one());
        }
    }
}
