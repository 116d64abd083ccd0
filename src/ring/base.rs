//! Coefficient rings.
//!
//! Ring elements carry coefficients from a [`BaseRing`]. Two are provided:
//! [`Integers`] (the default) and [`PrimeField`], the prime field GF(p).
//! Untyped numbers enter through [`Scalar`] and are coerced into the
//! coefficient ring, or rejected with [`Error::Uncoercible`].

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::utils::{is_prime, mod_pow};

/// An untyped numeric scalar, as a user would write it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scalar {
    /// An integer.
    Integer(i64),
    /// A fraction `numerator / denominator`.
    Rational(i64, i64),
    /// A floating-point number.
    Real(f64),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Rational(n, d) => write!(f, "{n}/{d}"),
            Self::Real(x) => write!(f, "{x}"),
        }
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<(i64, i64)> for Scalar {
    fn from((n, d): (i64, i64)) -> Self {
        Self::Rational(n, d)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Self::Real(x)
    }
}

/// A commutative ring of coefficients.
///
/// Implementations are small handles; elements are plain values and all
/// arithmetic goes through the ring.
pub trait BaseRing: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// The element type.
    type Element: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Additive identity.
    fn zero(&self) -> Self::Element;

    /// Multiplicative identity.
    fn one(&self) -> Self::Element;

    /// Whether `x` is zero.
    fn is_zero(&self, x: &Self::Element) -> bool {
        *x == self.zero()
    }

    /// Whether `x` is one.
    fn is_one(&self, x: &Self::Element) -> bool {
        *x == self.one()
    }

    /// `a + b`.
    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// `-a`.
    fn neg(&self, a: &Self::Element) -> Self::Element;

    /// `a * b`.
    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The image of an integer.
    fn from_integer(&self, n: i64) -> Self::Element;

    /// Coerce an untyped scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Uncoercible`] if `scalar` has no image in this ring.
    fn coerce(&self, scalar: &Scalar) -> Result<Self::Element>;

    /// `a - b`.
    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        self.add(a, &self.neg(b))
    }
}

/// The integers, with arbitrary-precision elements.
///
/// Coefficients of Burnside ring elements grow quickly under products and
/// powers, so they are never bounded by a machine word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Integers;

impl BaseRing for Integers {
    type Element = BigInt;

    fn zero(&self) -> BigInt {
        BigInt::zero()
    }

    fn one(&self) -> BigInt {
        BigInt::one()
    }

    fn is_zero(&self, x: &BigInt) -> bool {
        x.is_zero()
    }

    fn is_one(&self, x: &BigInt) -> bool {
        x.is_one()
    }

    fn add(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a + b
    }

    fn neg(&self, a: &BigInt) -> BigInt {
        -a
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        a * b
    }

    fn from_integer(&self, n: i64) -> BigInt {
        BigInt::from(n)
    }

    /// Integers coerce as themselves and fractions only when the
    /// denominator divides the numerator. Reals never coerce.
    fn coerce(&self, scalar: &Scalar) -> Result<BigInt> {
        match *scalar {
            Scalar::Integer(n) => Ok(self.from_integer(n)),
            Scalar::Rational(n, d) if n.checked_rem(d) == Some(0) => n
                .checked_div(d)
                .map(|q| self.from_integer(q))
                .ok_or_else(|| Error::uncoercible(scalar, self)),
            _ => Err(Error::uncoercible(scalar, self)),
        }
    }
}

impl fmt::Display for Integers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer Ring")
    }
}

/// The prime field GF(p), with elements stored as residues in `0..p`.
///
/// # Example
///
/// ```
/// use burnside::ring::{BaseRing, PrimeField, Scalar};
///
/// let gf7 = PrimeField::new(7).unwrap();
/// assert_eq!(gf7.add(&3, &5), 1);
/// assert_eq!(gf7.coerce(&Scalar::Rational(1, 2)).unwrap(), 4);
/// assert!(PrimeField::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimeField {
    p: u32,
}

impl PrimeField {
    /// The field with `p` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotPrime`] if `p` is not prime.
    pub fn new(p: u32) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrime(p));
        }
        Ok(Self { p })
    }

    /// The characteristic `p`.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.p
    }

    /// The residue of `value` modulo `p`.
    #[must_use]
    pub fn element(&self, value: i64) -> u32 {
        // rem_euclid of a value modulo a u32 fits in u32.
        value.rem_euclid(i64::from(self.p)) as u32
    }

    /// Multiplicative inverse by Fermat's little theorem, `None` for zero.
    #[must_use]
    pub fn checked_inv(&self, a: u32) -> Option<u32> {
        if a % self.p == 0 {
            return None;
        }
        let p = u64::from(self.p);
        Some(mod_pow(u64::from(a), p - 2, p) as u32)
    }
}

impl BaseRing for PrimeField {
    type Element = u32;

    fn zero(&self) -> u32 {
        0
    }

    fn one(&self) -> u32 {
        1 % self.p
    }

    fn add(&self, a: &u32, b: &u32) -> u32 {
        ((u64::from(*a) + u64::from(*b)) % u64::from(self.p)) as u32
    }

    fn neg(&self, a: &u32) -> u32 {
        if *a == 0 {
            0
        } else {
            self.p - a
        }
    }

    fn mul(&self, a: &u32, b: &u32) -> u32 {
        ((u64::from(*a) * u64::from(*b)) % u64::from(self.p)) as u32
    }

    fn from_integer(&self, n: i64) -> u32 {
        self.element(n)
    }

    /// Fractions coerce when the denominator is a unit mod `p`.
    fn coerce(&self, scalar: &Scalar) -> Result<u32> {
        match *scalar {
            Scalar::Integer(n) => Ok(self.from_integer(n)),
            Scalar::Rational(n, d) => self
                .checked_inv(self.element(d))
                .map(|inv| self.mul(&self.element(n), &inv))
                .ok_or_else(|| Error::uncoercible(scalar, self)),
            Scalar::Real(_) => Err(Error::uncoercible(scalar, self)),
        }
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Finite Field of size {}", self.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        let zz = Integers;
        assert_eq!(zz.coerce(&Scalar::Integer(-3)).unwrap(), BigInt::from(-3));
        assert_eq!(zz.coerce(&Scalar::Rational(6, 3)).unwrap(), BigInt::from(2));
        assert_eq!(
            zz.coerce(&Scalar::Rational(1, 2)),
            Err(Error::Uncoercible {
                scalar: "1/2".into(),
                ring: "Integer Ring".into()
            })
        );
        assert!(zz.coerce(&Scalar::Real(2.5)).is_err());
        assert!(zz.coerce(&Scalar::Rational(1, 0)).is_err());
        assert!(zz.coerce(&Scalar::Rational(i64::MIN, -1)).is_err());
    }

    #[test]
    fn test_integers_do_not_overflow() {
        let zz = Integers;
        let big = zz.from_integer(i64::MAX);
        let square = zz.mul(&big, &big);
        assert_eq!(square.to_string(), "85070591730234615847396907784232501249");
        let min = zz.from_integer(i64::MIN);
        assert_eq!(zz.neg(&min).to_string(), "9223372036854775808");
        assert!(zz.is_zero(&zz.sub(&square, &square)));
    }

    #[test]
    fn test_prime_field_rejects_composites() {
        assert_eq!(PrimeField::new(9), Err(Error::NotPrime(9)));
        assert_eq!(PrimeField::new(1), Err(Error::NotPrime(1)));
        assert!(PrimeField::new(2).is_ok());
    }

    #[test]
    fn test_field_axioms() {
        let gf5 = PrimeField::new(5).unwrap();
        for a in 0..5 {
            for b in 0..5 {
                assert_eq!(gf5.add(&a, &b), gf5.add(&b, &a));
                assert_eq!(gf5.mul(&a, &b), gf5.mul(&b, &a));
                assert_eq!(gf5.sub(&gf5.add(&a, &b), &b), a);
            }
            assert_eq!(gf5.add(&a, &gf5.neg(&a)), 0);
            if let Some(inv) = gf5.checked_inv(a) {
                assert_eq!(gf5.mul(&a, &inv), 1);
            } else {
                assert_eq!(a, 0);
            }
        }
    }

    #[test]
    fn test_prime_field_coercion() {
        let gf3 = PrimeField::new(3).unwrap();
        assert_eq!(gf3.coerce(&Scalar::Integer(-1)).unwrap(), 2);
        assert_eq!(gf3.coerce(&Scalar::Rational(1, 2)).unwrap(), 2);
        assert!(gf3.coerce(&Scalar::Rational(1, 3)).is_err());
        assert!(gf3.coerce(&Scalar::Real(1.0)).is_err());
        assert_eq!(gf3.to_string(), "Finite Field of size 3");
    }

    #[test]
    fn test_scalar_conversions() {
        assert_eq!(Scalar::from(3), Scalar::Integer(3));
        assert_eq!(Scalar::from((1, 2)), Scalar::Rational(1, 2));
        assert_eq!(Scalar::from(0.5).to_string(), "0.5");
    }
}
