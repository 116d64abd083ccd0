//! Tensor products of ring elements.

use std::fmt;
use std::ops::{Add, Mul};

use super::base::BaseRing;
use super::terms::Terms;
use super::{ClassRing, Coeff};
use crate::classes::ConjugacyClass;
use crate::error::{Error, Result};

type Pair = (ConjugacyClass, ConjugacyClass);

/// An element of `A ⊗ B` for two class rings over the same base ring.
///
/// Basis elements are pairs of classes and print as `B[a] # B[b]`.
/// Multiplication is componentwise: `(a # b) * (c # d) = (a*c) # (b*d)`.
#[derive(Clone)]
pub struct TensorElement<P: ClassRing, Q: ClassRing<Base = P::Base>> {
    left: P,
    right: Q,
    terms: Terms<Coeff<P>, Pair>,
}

impl<P: ClassRing, Q: ClassRing<Base = P::Base>> TensorElement<P, Q> {
    pub(crate) fn from_terms(left: P, right: Q, terms: Terms<Coeff<P>, Pair>) -> Self {
        Self { left, right, terms }
    }

    /// The left factor ring.
    #[must_use]
    pub fn left_ring(&self) -> &P {
        &self.left
    }

    /// The right factor ring.
    #[must_use]
    pub fn right_ring(&self) -> &Q {
        &self.right
    }

    /// The coefficient of `a # b`.
    #[must_use]
    pub fn coefficient(&self, a: &ConjugacyClass, b: &ConjugacyClass) -> Coeff<P> {
        self.terms
            .get(&(a.clone(), b.clone()))
            .cloned()
            .unwrap_or_else(|| self.left.base_ring().zero())
    }

    /// Number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether this is the zero element.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    fn check_parents(&self, other: &Self) -> Result<()> {
        if self.left == other.left && self.right == other.right {
            return Ok(());
        }
        Err(Error::RingMismatch {
            left: format!("{} # {}", self.left, self.right),
            right: format!("{} # {}", other.left, other.right),
        })
    }

    /// `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RingMismatch`] if the factor rings differ.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_parents(other)?;
        let mut terms = self.terms.clone();
        terms.add_all(self.left.base_ring(), &other.terms);
        Ok(Self::from_terms(self.left.clone(), self.right.clone(), terms))
    }

    /// `self * other`, componentwise on pure tensors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RingMismatch`] if the factor rings differ.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_parents(other)?;
        let base = self.left.base_ring();
        let mut terms = Terms::new();
        for ((a, b), x) in self.terms.iter() {
            for ((c, d), y) in other.terms.iter() {
                let product = self
                    .left
                    .product_on_basis(a, c)
                    .tensor(&self.right.product_on_basis(b, d));
                terms.add_all(base, &product.terms.scaled(base, &base.mul(x, y)));
            }
        }
        Ok(Self::from_terms(self.left.clone(), self.right.clone(), terms))
    }
}

impl<P: ClassRing, Q: ClassRing<Base = P::Base>> PartialEq for TensorElement<P, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right && self.terms == other.terms
    }
}

impl<P: ClassRing, Q: ClassRing<Base = P::Base>> fmt::Display for TensorElement<P, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lp, rp) = (self.left.prefix(), self.right.prefix());
        let rendered = self.terms.render(
            self.left.base_ring(),
            |(a, b)| (a.sort_key(), b.sort_key()),
            |(a, b)| format!("{lp}[{a}] # {rp}[{b}]"),
        );
        f.write_str(&rendered)
    }
}

impl<P: ClassRing, Q: ClassRing<Base = P::Base>> fmt::Debug for TensorElement<P, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<P: ClassRing, Q: ClassRing<Base = P::Base>> Add for TensorElement<P, Q> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the factor rings differ.
    fn add(self, rhs: Self) -> Self {
        match self.try_add(&rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<P: ClassRing, Q: ClassRing<Base = P::Base>> Mul for TensorElement<P, Q> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the factor rings differ.
    fn mul(self, rhs: Self) -> Self {
        match self.try_mul(&rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}
