//! Elliptic curve point operations

use std::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::{mod_inverse, CryptoError};

/// Affine point on a short Weierstrass curve, or the group identity
///
/// The identity is a distinct variant rather than a sentinel pair,
/// since (0, 0) can be a legitimate affine point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Point {
    Finite { x: BigUint, y: BigUint },
    Infinity,
}

impl Point {
    /// Create a finite point from affine coordinates
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Point::Finite { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Finite { x, y } => write!(f, "({}, {})", x, y),
            Point::Infinity => write!(f, "Infinity"),
        }
    }
}

/// Short Weierstrass curve y^2 = x^3 + ax + b over the prime field F_p
#[derive(Clone, Debug)]
pub struct Curve {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

impl Curve {
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Self {
        Self { p, a, b }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Point addition; the identity is absorbed on either side
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point, CryptoError> {
        let (x1, y1) = match lhs {
            Point::Infinity => return Ok(rhs.clone()),
            Point::Finite { x, y } => (x, y),
        };
        let (x2, y2) = match rhs {
            Point::Infinity => return Ok(lhs.clone()),
            Point::Finite { x, y } => (x, y),
        };

        if lhs == rhs {
            return self.double(lhs);
        }
        if x1 == x2 {
            // Vertical chord through two distinct points
            return Ok(Point::Infinity);
        }

        let p = &self.p;

        // Chord slope: s = (y2 - y1) / (x2 - x1) mod p
        let numerator = self.sub_mod(y2, y1);
        let denominator = self.sub_mod(x2, x1);
        let s = numerator * mod_inverse(&denominator, p)? % p;

        // x3 = s^2 - x1 - x2 mod p
        let x3 = self.sub_mod(&(&s * &s), &((x1 + x2) % p));

        // y3 = s * (x1 - x3) - y1 mod p
        let y3 = self.sub_mod(&(s * self.sub_mod(x1, &x3)), y1);

        Ok(Point::Finite { x: x3, y: y3 })
    }

    /// Point doubling
    pub fn double(&self, point: &Point) -> Result<Point, CryptoError> {
        let (x, y) = match point {
            Point::Infinity => return Ok(Point::Infinity),
            Point::Finite { x, y } => (x, y),
        };

        if y.is_zero() {
            // Vertical tangent
            return Ok(Point::Infinity);
        }

        let p = &self.p;

        // Tangent slope: s = (3*x^2 + a) / (2*y) mod p
        let numerator = (BigUint::from(3u32) * x * x + &self.a) % p;
        let denominator = BigUint::from(2u32) * y % p;
        let s = numerator * mod_inverse(&denominator, p)? % p;

        // x3 = s^2 - 2*x mod p
        let x3 = self.sub_mod(&(&s * &s), &(BigUint::from(2u32) * x));

        // y3 = s * (x - x3) - y mod p
        let y3 = self.sub_mod(&(s * self.sub_mod(x, &x3)), y);

        Ok(Point::Finite { x: x3, y: y3 })
    }

    /// Scalar multiplication using the double-and-add algorithm
    pub fn scalar_mul(&self, scalar: &BigUint, point: &Point) -> Result<Point, CryptoError> {
        let mut result = Point::Infinity;
        let mut addend = point.clone();
        let mut k = scalar.clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = self.add(&result, &addend)?;
            }
            addend = self.double(&addend)?;
            k >>= 1;
        }

        Ok(result)
    }

    /// Additive inverse: (x, p - y); the identity negates to itself
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Infinity => Point::Infinity,
            Point::Finite { x, y } => {
                let y = y % &self.p;
                let neg = if y.is_zero() { y } else { &self.p - y };
                Point::Finite { x: x.clone(), y: neg }
            }
        }
    }

    /// Check whether the point satisfies the curve equation
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Finite { x, y } => y * y % &self.p == self.equation_rhs(x),
            Point::Infinity => true,
        }
    }

    /// Right-hand side of the curve equation: x^3 + ax + b mod p
    pub fn equation_rhs(&self, x: &BigUint) -> BigUint {
        (x * x % &self.p * x + &self.a * x + &self.b) % &self.p
    }

    /// Subtraction mod p that keeps intermediate values non-negative
    fn sub_mod(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        let lhs = lhs % &self.p;
        let rhs = rhs % &self.p;
        if lhs >= rhs {
            lhs - rhs
        } else {
            &self.p + lhs - rhs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // y^2 = x^3 + 2x + 3 over F_97, base point G = (3, 6) of order 5
    fn demo_curve() -> Curve {
        Curve::new(BigUint::from(97u32), BigUint::from(2u32), BigUint::from(3u32))
    }

    fn pt(x: u32, y: u32) -> Point {
        Point::new(BigUint::from(x), BigUint::from(y))
    }

    #[test]
    fn test_base_point_on_curve() {
        let curve = demo_curve();
        assert!(curve.is_on_curve(&pt(3, 6)));
        assert!(curve.is_on_curve(&Point::Infinity));
        assert!(!curve.is_on_curve(&pt(10, 20)));
    }

    #[test]
    fn test_add_identity() {
        let curve = demo_curve();
        let g = pt(3, 6);
        assert_eq!(curve.add(&g, &Point::Infinity).unwrap(), g);
        assert_eq!(curve.add(&Point::Infinity, &g).unwrap(), g);
        assert_eq!(
            curve.add(&Point::Infinity, &Point::Infinity).unwrap(),
            Point::Infinity
        );
    }

    #[test]
    fn test_add_vertical_chord() {
        let curve = demo_curve();
        // (3, 91) = -G
        let result = curve.add(&pt(3, 6), &pt(3, 91)).unwrap();
        assert_eq!(result, Point::Infinity);
    }

    #[test]
    fn test_double() {
        let curve = demo_curve();
        assert_eq!(curve.double(&pt(3, 6)).unwrap(), pt(80, 10));
        assert_eq!(curve.double(&Point::Infinity).unwrap(), Point::Infinity);

        // Vertical tangent
        let zero_y = Point::new(BigUint::from(5u32), BigUint::zero());
        assert_eq!(curve.double(&zero_y).unwrap(), Point::Infinity);
    }

    #[test]
    fn test_scalar_mul_edge_scalars() {
        let curve = demo_curve();
        let g = pt(3, 6);
        assert!(curve.scalar_mul(&BigUint::zero(), &g).unwrap().is_infinity());
        assert_eq!(curve.scalar_mul(&BigUint::from(1u32), &g).unwrap(), g);
    }

    #[test]
    fn test_scalar_mul_group_order() {
        let curve = demo_curve();
        let g = pt(3, 6);
        // G has order 5, so 5G = Infinity and 7G wraps to 2G
        assert_eq!(
            curve.scalar_mul(&BigUint::from(5u32), &g).unwrap(),
            Point::Infinity
        );
        assert_eq!(
            curve.scalar_mul(&BigUint::from(7u32), &g).unwrap(),
            pt(80, 10)
        );
    }

    #[test]
    fn test_scalar_mul_matches_repeated_addition() {
        let curve = demo_curve();
        let p = pt(1, 43);
        let mut naive = Point::Infinity;
        for _ in 0..5 {
            naive = curve.add(&naive, &p).unwrap();
        }
        assert_eq!(naive, pt(53, 73));
        assert_eq!(curve.scalar_mul(&BigUint::from(5u32), &p).unwrap(), naive);
    }

    #[test]
    fn test_finite_results_stay_on_curve() {
        let curve = demo_curve();
        let g = pt(3, 6);
        for k in 1u32..12 {
            let result = curve.scalar_mul(&BigUint::from(k), &g).unwrap();
            assert!(curve.is_on_curve(&result), "k = {}", k);
        }
    }

    #[test]
    fn test_negate() {
        let curve = demo_curve();
        assert_eq!(curve.negate(&pt(3, 6)), pt(3, 91));
        assert_eq!(curve.negate(&Point::Infinity), Point::Infinity);

        let zero_y = Point::new(BigUint::from(5u32), BigUint::zero());
        assert_eq!(curve.negate(&zero_y), zero_y);
    }

    #[test]
    fn test_add_then_subtract_round_trip() {
        let curve = demo_curve();
        let p = pt(1, 43);
        let q = pt(12, 3);
        let sum = curve.add(&p, &q).unwrap();
        let back = curve.add(&sum, &curve.negate(&q)).unwrap();
        assert_eq!(back, p);
    }
}
