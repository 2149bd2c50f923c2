//! Elliptic-curve ElGamal over a short Weierstrass curve

use num_bigint::BigUint;
use num_traits::{One, Zero};
use sha2::{Digest, Sha256};

use super::curve::{Curve, Point};
use super::CryptoError;
use crate::types::{CurveParameters, DEMO_SECRET};

/// EC-ElGamal cryptosystem with key material derived once at construction
#[derive(Clone, Debug)]
pub struct EcElGamal {
    curve: Curve,
    base: Point,
    secret: BigUint,
    public: Point,
}

impl EcElGamal {
    /// Derive the key pair from curve parameters and a private scalar
    pub fn new(params: &CurveParameters, secret: BigUint) -> Result<Self, CryptoError> {
        if params.p < BigUint::from(2u32) {
            return Err(CryptoError::InvalidKeyMaterial(
                "field modulus must be at least 2",
            ));
        }
        if secret.is_zero() {
            return Err(CryptoError::InvalidKeyMaterial(
                "private scalar must be positive",
            ));
        }

        let curve = Curve::new(params.p.clone(), params.a.clone(), params.b.clone());
        let base = Point::new(params.gx.clone(), params.gy.clone());
        if !curve.is_on_curve(&base) {
            return Err(CryptoError::InvalidKeyMaterial(
                "base point is not on the curve",
            ));
        }

        let public = curve.scalar_mul(&secret, &base)?;

        Ok(Self {
            curve,
            base,
            secret,
            public,
        })
    }

    /// Demonstration key pair on the F_97 curve with dA = 7
    pub fn demo() -> Self {
        Self::new(&CurveParameters::demo(), BigUint::from(DEMO_SECRET))
            .expect("demonstration parameters are valid")
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn base_point(&self) -> &Point {
        &self.base
    }

    pub fn public_point(&self) -> &Point {
        &self.public
    }

    /// Encrypt a curve point under an ephemeral scalar k
    ///
    /// Returns (C1, C2) = (k*G, M + k*QA). A fresh k should be chosen
    /// for every message.
    pub fn encrypt(&self, message: &Point, k: &BigUint) -> Result<(Point, Point), CryptoError> {
        if k.is_zero() {
            return Err(CryptoError::InvalidArgument(
                "ephemeral scalar must be positive",
            ));
        }
        if !self.curve.is_on_curve(message) {
            return Err(CryptoError::InvalidArgument(
                "message point is not on the curve",
            ));
        }

        let c1 = self.curve.scalar_mul(k, &self.base)?;
        let mask = self.curve.scalar_mul(k, &self.public)?;
        let c2 = self.curve.add(message, &mask)?;

        Ok((c1, c2))
    }

    /// Recover the message point: M = C2 - dA*C1
    pub fn decrypt(&self, c1: &Point, c2: &Point) -> Result<Point, CryptoError> {
        let shared = self.curve.scalar_mul(&self.secret, c1)?;
        self.curve.add(c2, &self.curve.negate(&shared))
    }

    /// Encrypt text by first hashing it onto the curve
    pub fn encrypt_text(&self, text: &str, k: &BigUint) -> Result<(Point, Point), CryptoError> {
        let message = self.encode_text(text)?;
        self.encrypt(&message, k)
    }

    /// Decrypt a text ciphertext back to its curve point
    ///
    /// The hash encoding is one-way, so the original text cannot be
    /// recovered; callers get the encoded point instead.
    pub fn decrypt_text(&self, c1: &Point, c2: &Point) -> Result<Point, CryptoError> {
        self.decrypt(c1, c2)
    }

    /// Map text onto the curve deterministically
    ///
    /// The SHA-256 digest of the text, reduced mod p, gives a candidate
    /// x; the smallest y with y^2 = x^3 + ax + b completes the point.
    /// Roughly half of all x values have no square root, in which case
    /// the text is reported as unencodable.
    pub fn encode_text(&self, text: &str) -> Result<Point, CryptoError> {
        let digest = Sha256::digest(text.as_bytes());
        let p = self.curve.modulus();
        let x = BigUint::from_bytes_be(digest.as_slice()) % p;
        let target = self.curve.equation_rhs(&x);

        let mut y = BigUint::zero();
        while &y < p {
            if &y * &y % p == target {
                return Ok(Point::new(x, y));
            }
            y += BigUint::one();
        }

        Err(CryptoError::UnencodableText)
    }
}
