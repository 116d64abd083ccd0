//! The molecular decomposition ring of polynomial species.

use std::fmt;
use std::rc::Rc;

use log::debug;

use super::base::{BaseRing, Integers};
use super::element::RingElement;
use super::ClassRing;
use crate::classes::{AllSymmetricClasses, ConjugacyClass};
use crate::error::Result;
use crate::perm::PermutationGroup;

/// An element of the molecular decomposition ring.
pub type SpeciesElement<R = Integers> = RingElement<PolynomialMolecularDecomposition<R>>;

struct RingData<R> {
    classes: AllSymmetricClasses,
    base: R,
    prefix: String,
}

/// The ring of polynomial species, with molecular species as basis.
///
/// Basis elements are graded conjugacy classes `(n, H)` of subgroups
/// `H ≤ S_n`. The product of `(n, H)` and `(m, K)` is the class of
/// `H × K` acting on `1..=n` and `n+1..=n+m`, of grade `n + m`. The unit
/// is the class of `S_0`.
///
/// ```
/// use burnside::perm::PermutationGroup;
/// use burnside::ring::{ClassRing, PolynomialMolecularDecomposition};
///
/// let pmd = PolynomialMolecularDecomposition::new();
/// let x = pmd.basis_element(&PermutationGroup::symmetric(1)).unwrap();
/// let x2 = &x * &x;
/// assert_eq!(x2, pmd.basis_element(&PermutationGroup::trivial(2)).unwrap());
/// assert_eq!(pmd.degree_on_basis(&x2.support()[0]), 2);
/// ```
pub struct PolynomialMolecularDecomposition<R: BaseRing = Integers> {
    inner: Rc<RingData<R>>,
}

impl<R: BaseRing> Clone for PolynomialMolecularDecomposition<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl PolynomialMolecularDecomposition<Integers> {
    /// The ring over the integers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_ring(Integers)
    }
}

impl Default for PolynomialMolecularDecomposition<Integers> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BaseRing> PolynomialMolecularDecomposition<R> {
    /// The ring with coefficients in `base`.
    #[must_use]
    pub fn with_base_ring(base: R) -> Self {
        Self::from_parts(AllSymmetricClasses::new(), base, "PMD")
    }

    pub(crate) fn from_parts(classes: AllSymmetricClasses, base: R, prefix: &str) -> Self {
        Self {
            inner: Rc::new(RingData {
                classes,
                base,
                prefix: prefix.to_string(),
            }),
        }
    }

    /// The graded index set of the basis.
    #[must_use]
    pub fn indices(&self) -> &AllSymmetricClasses {
        &self.inner.classes
    }

    /// The molecular species of `h`, read as a subgroup of
    /// `S_{h.degree()}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`](crate::Error::NotASubgroup) if a
    /// generator of `h` moves a point beyond its degree.
    pub fn basis_element(&self, h: &PermutationGroup) -> Result<SpeciesElement<R>> {
        Ok(self.monomial(self.inner.classes.class_of(h)?))
    }

    /// The grade of a basis class, i.e. the size of the underlying sets.
    #[must_use]
    pub fn degree_on_basis(&self, class: &ConjugacyClass) -> usize {
        class
            .grade()
            .unwrap_or_else(|| class.representative().degree())
    }

    /// The grade shared by every term of `x`, or `None` if `x` is zero or
    /// not homogeneous.
    #[must_use]
    pub fn homogeneous_degree(&self, x: &SpeciesElement<R>) -> Option<usize> {
        let mut grades = x.support().into_iter().map(|c| self.degree_on_basis(&c));
        let first = grades.next()?;
        grades.all(|g| g == first).then_some(first)
    }

    /// The basis elements of grade `n`.
    #[must_use]
    pub fn basis_of_degree(&self, n: usize) -> Vec<SpeciesElement<R>> {
        self.inner
            .classes
            .iter_degree(n)
            .map(|c| self.monomial(c))
            .collect()
    }

    /// Set the display name of `h`'s molecular species.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`](crate::Error::NotASubgroup) for
    /// invalid subgroups and [`Error::InvalidName`](crate::Error::InvalidName)
    /// for blank names.
    pub fn set_name(&self, h: &PermutationGroup, name: &str) -> Result<()> {
        self.inner.classes.set_name(h, name)
    }
}

impl<R: BaseRing> ClassRing for PolynomialMolecularDecomposition<R> {
    type Base = R;

    fn base_ring(&self) -> &R {
        &self.inner.base
    }

    fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    fn one_basis(&self) -> ConjugacyClass {
        self.inner.classes.normalize(&PermutationGroup::symmetric(0))
    }

    fn product_on_basis(&self, g1: &ConjugacyClass, g2: &ConjugacyClass) -> SpeciesElement<R> {
        let (n, m) = (self.degree_on_basis(g1), self.degree_on_basis(g2));
        if n == 0 && m == 0 {
            return self.one();
        }
        let product = g1.representative().juxtapose(g2.representative());
        let class = self.inner.classes.normalize(&product);
        debug!("species product of grades {n} and {m} is {class}");
        self.monomial(class)
    }
}

impl<R: BaseRing> PartialEq for PolynomialMolecularDecomposition<R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.base == other.inner.base && self.inner.prefix == other.inner.prefix)
    }
}

impl<R: BaseRing> fmt::Display for PolynomialMolecularDecomposition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polynomial molecular decomposition over {}", self.inner.base)
    }
}

impl<R: BaseRing> fmt::Debug for PolynomialMolecularDecomposition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolynomialMolecularDecomposition")
            .field("base", &self.inner.base)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perm::Permutation;

    fn transposition_group(degree: usize) -> PermutationGroup {
        PermutationGroup::new(degree, vec![Permutation::cycle(&[1, 2]).unwrap()]).unwrap()
    }

    #[test]
    fn test_one_is_degree_zero() {
        let pmd = PolynomialMolecularDecomposition::new();
        let one = pmd.one();
        assert_eq!(pmd.homogeneous_degree(&one), Some(0));
        let e2 = pmd.basis_element(&PermutationGroup::symmetric(2)).unwrap();
        assert_eq!(&one * &e2, e2);
        assert_eq!(&e2 * &one, e2);
        assert_eq!(&one * &one, one);
    }

    #[test]
    fn test_grading_is_additive() {
        let pmd = PolynomialMolecularDecomposition::new();
        let e2 = pmd.basis_element(&PermutationGroup::symmetric(2)).unwrap();
        let c3 = pmd.basis_element(&PermutationGroup::cyclic(3)).unwrap();
        let product = &e2 * &c3;
        assert_eq!(pmd.homogeneous_degree(&product), Some(5));
        assert_eq!(product.support()[0].order(), 6);
    }

    #[test]
    fn test_juxtaposition() {
        let pmd = PolynomialMolecularDecomposition::new();
        let x = pmd.basis_element(&PermutationGroup::symmetric(1)).unwrap();
        let e2 = pmd.basis_element(&PermutationGroup::symmetric(2)).unwrap();
        let expected = pmd.basis_element(&transposition_group(3)).unwrap();
        assert_eq!(&e2 * &x, expected);
        // X * E2 juxtaposes to <(2,3)>, which is conjugate in S3.
        assert_eq!(&x * &e2, expected);
    }

    #[test]
    fn test_degree_distinguishes_species() {
        let pmd = PolynomialMolecularDecomposition::new();
        let x = pmd.basis_element(&PermutationGroup::symmetric(1)).unwrap();
        let one = pmd.one();
        assert_ne!(x, one);
        let sum = &x + &one;
        assert_eq!(sum.len(), 2);
        assert_eq!(pmd.homogeneous_degree(&sum), None);
    }

    #[test]
    fn test_basis_of_degree() {
        let pmd = PolynomialMolecularDecomposition::new();
        assert_eq!(pmd.basis_of_degree(3).len(), 4);
        assert_eq!(pmd.basis_of_degree(0), vec![pmd.one()]);
    }

    #[test]
    fn test_display() {
        let pmd = PolynomialMolecularDecomposition::new();
        let x = pmd.basis_element(&PermutationGroup::symmetric(1)).unwrap();
        assert_eq!(x.to_string(), "PMD[(1, ((),))]");
        pmd.set_name(&PermutationGroup::symmetric(1), "X").unwrap();
        assert_eq!(x.scale(&pmd.base_ring().from_integer(3)).to_string(), "3*PMD[(1, X)]");
        assert_eq!(pmd.to_string(), "Polynomial molecular decomposition over Integer Ring");
    }
}
