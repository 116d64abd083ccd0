//! Burnside rings and the molecular decomposition ring of species.
//!
//! Both rings are free modules over a coefficient ring with a basis indexed
//! by conjugacy classes of subgroups, and differ only in how two basis
//! elements multiply. The [`ClassRing`] trait captures that shape; elements
//! of either ring are [`RingElement`]s.
//!
//! ```
//! use burnside::perm::{Permutation, PermutationGroup};
//! use burnside::ring::{BurnsideRing, ClassRing};
//!
//! let ring = BurnsideRing::new(PermutationGroup::symmetric(3));
//! let c2 = ring
//!     .basis_element(&PermutationGroup::from_generators(vec![
//!         Permutation::cycle(&[1, 2]).unwrap(),
//!     ]))
//!     .unwrap();
//! let c3 = ring.basis_element(&PermutationGroup::cyclic(3)).unwrap();
//! let trivial = ring.basis_element(&PermutationGroup::trivial(3)).unwrap();
//! assert_eq!(&c2 * &c3, trivial);
//! assert_eq!(&c2 * &ring.one(), c2);
//! ```

mod base;
mod burnside;
mod element;
mod species;
mod tensor;
mod terms;

pub use base::{BaseRing, Integers, PrimeField, Scalar};
pub use burnside::{BurnsideElement, BurnsideRing};
pub use element::RingElement;
pub use species::{PolynomialMolecularDecomposition, SpeciesElement};
pub use tensor::TensorElement;

use std::fmt;

use crate::classes::ConjugacyClass;
use crate::error::Result;

/// Coefficient type of a class ring.
pub type Coeff<P> = <<P as ClassRing>::Base as BaseRing>::Element;

/// A ring that is free over its base ring with a basis of conjugacy classes.
///
/// Implementors provide the product of two basis elements; everything else
/// (bilinear extension, units, scalars) is derived.
pub trait ClassRing: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// The coefficient ring.
    type Base: BaseRing;

    /// The coefficient ring.
    fn base_ring(&self) -> &Self::Base;

    /// Display prefix for basis elements, e.g. `B` in `B[((1,2),)]`.
    fn prefix(&self) -> &str;

    /// The class whose basis element is the multiplicative identity.
    fn one_basis(&self) -> ConjugacyClass;

    /// The product of the basis elements of `h` and `k`.
    fn product_on_basis(&self, h: &ConjugacyClass, k: &ConjugacyClass) -> RingElement<Self>;

    /// The zero element.
    fn zero(&self) -> RingElement<Self> {
        RingElement::zero(self.clone())
    }

    /// The multiplicative identity.
    fn one(&self) -> RingElement<Self> {
        self.monomial(self.one_basis())
    }

    /// `1 * [class]`.
    fn monomial(&self, class: ConjugacyClass) -> RingElement<Self> {
        self.term(class, self.base_ring().one())
    }

    /// `coeff * [class]`.
    fn term(&self, class: ConjugacyClass, coeff: Coeff<Self>) -> RingElement<Self> {
        RingElement::term(self.clone(), class, coeff)
    }

    /// A scalar multiple of the identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Uncoercible`](crate::Error::Uncoercible) if the
    /// scalar has no image in the base ring.
    fn from_scalar(&self, scalar: impl Into<Scalar>) -> Result<RingElement<Self>> {
        let coeff = self.base_ring().coerce(&scalar.into())?;
        Ok(self.term(self.one_basis(), coeff))
    }
}
