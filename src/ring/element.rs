//! Elements of rings with a basis of conjugacy classes.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::base::{BaseRing, Scalar};
use super::tensor::TensorElement;
use super::terms::Terms;
use super::{ClassRing, Coeff};
use crate::classes::ConjugacyClass;
use crate::error::{Error, Result};

/// A finite linear combination of basis elements of a [`ClassRing`].
///
/// Elements are immutable values; arithmetic returns new elements. The
/// operators `+`, `-` and `*` panic when the operands belong to different
/// rings; use [`try_add`](Self::try_add), [`try_sub`](Self::try_sub) and
/// [`try_mul`](Self::try_mul) to get an error instead.
#[derive(Clone)]
pub struct RingElement<P: ClassRing> {
    parent: P,
    terms: Terms<Coeff<P>>,
}

impl<P: ClassRing> RingElement<P> {
    pub(crate) fn from_terms(parent: P, terms: Terms<Coeff<P>>) -> Self {
        Self { parent, terms }
    }

    pub(crate) fn zero(parent: P) -> Self {
        Self::from_terms(parent, Terms::new())
    }

    pub(crate) fn term(parent: P, class: ConjugacyClass, coeff: Coeff<P>) -> Self {
        let mut terms = Terms::new();
        terms.add_term(parent.base_ring(), class, coeff);
        Self::from_terms(parent, terms)
    }

    /// The ring this element belongs to.
    #[must_use]
    pub fn parent(&self) -> &P {
        &self.parent
    }

    /// The coefficient of `class`; zero if it is not in the support.
    #[must_use]
    pub fn coefficient(&self, class: &ConjugacyClass) -> Coeff<P> {
        self.terms
            .get(class)
            .cloned()
            .unwrap_or_else(|| self.parent.base_ring().zero())
    }

    /// The classes with non-zero coefficient, sorted by grade and order.
    #[must_use]
    pub fn support(&self) -> Vec<ConjugacyClass> {
        self.terms
            .sorted_by(ConjugacyClass::sort_key)
            .into_iter()
            .map(|(class, _)| class.clone())
            .collect()
    }

    /// `(class, coefficient)` pairs, sorted like [`support`](Self::support).
    #[must_use]
    pub fn terms(&self) -> Vec<(ConjugacyClass, Coeff<P>)> {
        self.terms
            .sorted_by(ConjugacyClass::sort_key)
            .into_iter()
            .map(|(class, coeff)| (class.clone(), coeff.clone()))
            .collect()
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

    fn check_parent(&self, other: &Self) -> Result<()> {
        if self.parent == other.parent {
            Ok(())
        } else {
            Err(Error::RingMismatch {
                left: self.parent.to_string(),
                right: other.parent.to_string(),
            })
        }
    }

    /// `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RingMismatch`] if the elements live in different
    /// rings.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_parent(other)?;
        let mut terms = self.terms.clone();
        terms.add_all(self.parent.base_ring(), &other.terms);
        Ok(Self::from_terms(self.parent.clone(), terms))
    }

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RingMismatch`] if the elements live in different
    /// rings.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.try_add(&other.negate())
    }

    /// `self * other`, extended bilinearly from
    /// [`ClassRing::product_on_basis`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::RingMismatch`] if the elements live in different
    /// rings.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_parent(other)?;
        let base = self.parent.base_ring();
        let mut terms = Terms::new();
        for (h, a) in self.terms.iter() {
            for (k, b) in other.terms.iter() {
                let product = self.parent.product_on_basis(h, k);
                terms.add_all(base, &product.terms.scaled(base, &base.mul(a, b)));
            }
        }
        Ok(Self::from_terms(self.parent.clone(), terms))
    }

    /// `-self`.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::from_terms(
            self.parent.clone(),
            self.terms.negated(self.parent.base_ring()),
        )
    }

    /// Multiply by a coefficient of the base ring.
    #[must_use]
    pub fn scale(&self, factor: &Coeff<P>) -> Self {
        Self::from_terms(
            self.parent.clone(),
            self.terms.scaled(self.parent.base_ring(), factor),
        )
    }

    /// Multiply by an untyped scalar.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Uncoercible`] if the scalar has no image in the base
    /// ring.
    pub fn scale_by(&self, scalar: impl Into<Scalar>) -> Result<Self> {
        let factor = self.parent.base_ring().coerce(&scalar.into())?;
        Ok(self.scale(&factor))
    }

    /// `self` raised to the power `exp`; `self^0` is the ring's one.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        let mut result = self.parent.one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul_same_ring(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.mul_same_ring(&base);
            }
        }
        result
    }

    fn mul_same_ring(&self, other: &Self) -> Self {
        match self.try_mul(other) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }

    /// The pure tensor `self # other`, possibly across different rings with
    /// the same base ring.
    #[must_use]
    pub fn tensor<Q>(&self, other: &RingElement<Q>) -> TensorElement<P, Q>
    where
        Q: ClassRing<Base = P::Base>,
    {
        let base = self.parent.base_ring();
        let mut terms = Terms::new();
        for (h, a) in self.terms.iter() {
            for (k, b) in other.terms.iter() {
                terms.add_term(base, (h.clone(), k.clone()), base.mul(a, b));
            }
        }
        TensorElement::from_terms(self.parent.clone(), other.parent.clone(), terms)
    }
}

impl<P: ClassRing> PartialEq for RingElement<P> {
    fn eq(&self, other: &Self) -> bool {
        self.parent == other.parent && self.terms == other.terms
    }
}

impl<P: ClassRing> fmt::Display for RingElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.parent.prefix();
        let rendered = self.terms.render(
            self.parent.base_ring(),
            ConjugacyClass::sort_key,
            |class| format!("{prefix}[{class}]"),
        );
        f.write_str(&rendered)
    }
}

impl<P: ClassRing> fmt::Debug for RingElement<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! impl_binary_op {
    ($op:ident, $method:ident, $checked:ident) => {
        impl<P: ClassRing> $op<&RingElement<P>> for &RingElement<P> {
            type Output = RingElement<P>;

            fn $method(self, rhs: &RingElement<P>) -> RingElement<P> {
                match self.$checked(rhs) {
                    Ok(value) => value,
                    Err(err) => panic!("{err}"),
                }
            }
        }

        impl<P: ClassRing> $op for RingElement<P> {
            type Output = RingElement<P>;

            fn $method(self, rhs: RingElement<P>) -> RingElement<P> {
                $op::$method(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, try_add);
impl_binary_op!(Sub, sub, try_sub);
impl_binary_op!(Mul, mul, try_mul);

impl<P: ClassRing> Neg for RingElement<P> {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl<P: ClassRing> Neg for &RingElement<P> {
    type Output = RingElement<P>;

    fn neg(self) -> RingElement<P> {
        self.negate()
    }
}
