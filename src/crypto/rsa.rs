//! Textbook RSA over small fixed primes

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

use super::{mod_inverse, mod_pow, CryptoError};
use crate::types::RsaParameters;

/// RSA cryptosystem with key material derived once at construction
#[derive(Clone, Debug)]
pub struct Rsa {
    n: BigUint,
    e: BigUint,
    d: BigUint,
}

impl Rsa {
    /// Derive the key material from two primes and a public exponent
    pub fn new(params: &RsaParameters) -> Result<Self, CryptoError> {
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        if params.p < two || params.q < two {
            return Err(CryptoError::InvalidKeyMaterial("primes must be at least 2"));
        }

        let n = &params.p * &params.q;
        let phi = (&params.p - &one) * (&params.q - &one);

        if params.e.gcd(&phi) != one {
            return Err(CryptoError::InvalidKeyMaterial(
                "public exponent must be coprime to (p-1)(q-1)",
            ));
        }
        let d = mod_inverse(&params.e, &phi)?;

        Ok(Self {
            n,
            e: params.e.clone(),
            d,
        })
    }

    /// Demonstration key pair (n = 3233, e = 17, d = 2753)
    pub fn demo() -> Self {
        Self::new(&RsaParameters::demo()).expect("demonstration parameters are valid")
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn public_exponent(&self) -> &BigUint {
        &self.e
    }

    pub fn private_exponent(&self) -> &BigUint {
        &self.d
    }

    /// Encrypt an integer message; the plaintext must be below the modulus
    pub fn encrypt(&self, m: &BigUint) -> Result<BigUint, CryptoError> {
        if m >= &self.n {
            return Err(CryptoError::MessageTooLarge(m.clone(), self.n.clone()));
        }
        mod_pow(m, &self.e, &self.n)
    }

    pub fn decrypt(&self, c: &BigUint) -> Result<BigUint, CryptoError> {
        mod_pow(c, &self.d, &self.n)
    }

    /// Encrypt text character by character, preserving order
    ///
    /// Every code point must be below the modulus; with the
    /// demonstration key (n = 3233) anything up to U+0CA0 fits, so
    /// plain ASCII always works.
    pub fn encrypt_text(&self, text: &str) -> Result<Vec<BigUint>, CryptoError> {
        text.chars()
            .map(|ch| self.encrypt(&BigUint::from(ch as u32)))
            .collect()
    }

    /// Decrypt a ciphertext sequence back to text
    pub fn decrypt_text(&self, ciphertexts: &[BigUint]) -> Result<String, CryptoError> {
        let mut out = String::with_capacity(ciphertexts.len());
        for c in ciphertexts {
            let m = self.decrypt(c)?;
            let ch = m
                .to_u32()
                .and_then(char::from_u32)
                .ok_or(CryptoError::InvalidArgument(
                    "ciphertext does not decrypt to a character code point",
                ))?;
            out.push(ch);
        }
        Ok(out)
    }
}
