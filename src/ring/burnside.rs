//! The Burnside ring of a finite permutation group.

use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use log::debug;
use ndarray::Array2;

use super::base::{BaseRing, Integers};
use super::element::RingElement;
use super::terms::Terms;
use super::ClassRing;
use crate::classes::{ConjugacyClass, ConjugacyClasses};
use crate::error::{Error, Result};
use crate::perm::{Permutation, PermutationGroup};

/// An element of a Burnside ring.
pub type BurnsideElement<R = Integers> = RingElement<BurnsideRing<R>>;

struct RingData<R> {
    classes: ConjugacyClasses,
    base: R,
    prefix: String,
    marks: OnceCell<Array2<u64>>,
}

/// The Burnside ring `B(G)` of a finite permutation group `G`.
///
/// As a module, `B(G)` is free with basis `[H]` for `H` running over the
/// conjugacy classes of subgroups of `G`; `[H]` stands for the transitive
/// `G`-set `G/H`. Addition is disjoint union and multiplication is the
/// cartesian product of `G`-sets, decomposed into orbits.
///
/// The handle is reference-counted, so cloning is cheap. The class of `G`
/// itself is named `"1"`.
///
/// # Example
///
/// ```
/// use burnside::perm::PermutationGroup;
/// use burnside::ring::{BurnsideRing, ClassRing};
/// use burnside::utils::k_subsets;
///
/// let ring = BurnsideRing::new(PermutationGroup::symmetric(4));
///
/// // S4 acting on the 2-subsets of {1, 2, 3, 4} is transitive.
/// let pairs = k_subsets(4, 2);
/// let b = ring
///     .construct_from_action(
///         |g, s: &Vec<usize>| {
///             let mut image: Vec<usize> = s.iter().map(|&i| g.apply(i)).collect();
///             image.sort_unstable();
///             image
///         },
///         &pairs,
///     )
///     .unwrap();
/// assert_eq!(b.len(), 1);
/// assert_eq!(b.support()[0].order(), 4);
/// ```
pub struct BurnsideRing<R: BaseRing = Integers> {
    inner: Rc<RingData<R>>,
}

impl<R: BaseRing> Clone for BurnsideRing<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl BurnsideRing<Integers> {
    /// The Burnside ring of `group` over the integers.
    #[must_use]
    pub fn new(group: PermutationGroup) -> Self {
        Self::with_base_ring(group, Integers)
    }
}

impl<R: BaseRing> BurnsideRing<R> {
    /// The Burnside ring of `group` with coefficients in `base`.
    #[must_use]
    pub fn with_base_ring(group: PermutationGroup, base: R) -> Self {
        Self::from_parts(ConjugacyClasses::new(group), base, "B", "1")
    }

    pub(crate) fn from_parts(
        classes: ConjugacyClasses,
        base: R,
        prefix: &str,
        identity_name: &str,
    ) -> Self {
        classes.name_ambient(identity_name);
        Self {
            inner: Rc::new(RingData {
                classes,
                base,
                prefix: prefix.to_string(),
                marks: OnceCell::new(),
            }),
        }
    }

    /// The ambient group `G`.
    #[must_use]
    pub fn group(&self) -> &PermutationGroup {
        self.inner.classes.group()
    }

    /// The index set of the basis.
    #[must_use]
    pub fn indices(&self) -> &ConjugacyClasses {
        &self.inner.classes
    }

    /// The basis element `[H]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] if `h` is not a subgroup of `G`.
    pub fn basis_element(&self, h: &PermutationGroup) -> Result<BurnsideElement<R>> {
        self.inner
            .classes
            .class_of(h)
            .map(|class| self.monomial(class))
            .map_err(|err| match err {
                Error::NotASubgroup { subgroup, ambient, .. } => Error::NotASubgroup {
                    subgroup,
                    target: self.to_string(),
                    ambient,
                },
                other => other,
            })
    }

    /// All basis elements, in the backend's class order.
    #[must_use]
    pub fn basis(&self) -> Vec<BurnsideElement<R>> {
        self.inner.classes.iter().map(|c| self.monomial(c)).collect()
    }

    /// The decomposition of the `G`-set `domain` into transitive pieces.
    ///
    /// `action(g, x)` must be a left action of `G` that maps `domain` into
    /// itself. Each orbit contributes `[Stab(x)]` for one of its points `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if `domain` has repeated points or
    /// the action leaves the domain.
    pub fn construct_from_action<T, F>(&self, action: F, domain: &[T]) -> Result<BurnsideElement<R>>
    where
        T: Clone + Eq + Hash,
        F: Fn(&Permutation, &T) -> T,
    {
        let reps = self.orbit_representatives(&action, domain)?;
        let mut terms = Terms::new();
        for &i in &reps {
            let point = &domain[i];
            let stabilizer: Vec<Permutation> = self
                .group()
                .elements()
                .iter()
                .filter(|g| action(g, point) == *point)
                .cloned()
                .collect();
            self.add_stabilizer(&mut terms, stabilizer);
        }
        debug!(
            "{} points in {} orbits decompose into {} terms",
            domain.len(),
            reps.len(),
            terms.len()
        );
        Ok(RingElement::from_terms(self.clone(), terms))
    }

    /// [`construct_from_action`](Self::construct_from_action) with the
    /// stabilizer scans spread over a rayon pool sized by
    /// [`ParallelConfig`](crate::parallel::ParallelConfig).
    ///
    /// # Errors
    ///
    /// As the sequential version, plus [`Error::InvalidParams`] if the
    /// thread pool cannot be built.
    #[cfg(feature = "parallel")]
    pub fn par_construct_from_action<T, F>(
        &self,
        action: F,
        domain: &[T],
    ) -> Result<BurnsideElement<R>>
    where
        T: Clone + Eq + Hash + Sync,
        F: Fn(&Permutation, &T) -> T + Sync,
    {
        let reps = self.orbit_representatives(&action, domain)?;
        let mut terms = Terms::new();
        for &i in &reps {
            let point = &domain[i];
            let stabilizer =
                crate::parallel::par_stabilizer(self.group().elements(), |g| {
                    action(g, point) == *point
                })?;
            self.add_stabilizer(&mut terms, stabilizer);
        }
        Ok(RingElement::from_terms(self.clone(), terms))
    }

    /// Indices into `domain` of one point per orbit.
    fn orbit_representatives<T, F>(&self, action: &F, domain: &[T]) -> Result<Vec<usize>>
    where
        T: Clone + Eq + Hash,
        F: Fn(&Permutation, &T) -> T,
    {
        let mut index: HashMap<&T, usize> = HashMap::with_capacity(domain.len());
        for (i, x) in domain.iter().enumerate() {
            if index.insert(x, i).is_some() {
                return Err(Error::invalid_params("domain contains a repeated point"));
            }
        }

        let mut gens = Vec::with_capacity(self.group().gens().len());
        for g in self.group().gens() {
            let images = domain
                .iter()
                .map(|x| {
                    index.get(&action(g, x)).copied().ok_or_else(|| {
                        Error::invalid_params("action maps a point outside the domain")
                    })
                })
                .collect::<Result<Vec<usize>>>()?;
            gens.push(Permutation::from_zero_based(images));
        }
        let image = PermutationGroup::new(domain.len(), gens)?;

        Ok(self
            .inner
            .classes
            .backend()
            .orbits(&image)
            .into_iter()
            .map(|orbit| orbit[0] - 1)
            .collect())
    }

    fn add_stabilizer(&self, terms: &mut Terms<R::Element>, elements: Vec<Permutation>) {
        let stabilizer =
            PermutationGroup::from_elements(self.group().degree(), elements.clone(), elements);
        let class = self.inner.classes.normalize(&stabilizer);
        terms.add_term(&self.inner.base, class, self.inner.base.one());
    }

    /// The table of marks.
    ///
    /// Rows and columns follow the basis order. Entry `(i, j)` is the number
    /// of points of `G/H_i` fixed by `H_j`. Computed once per ring.
    #[must_use]
    pub fn table_of_marks(&self) -> Array2<u64> {
        self.inner
            .marks
            .get_or_init(|| {
                let classes = self.inner.classes.classes();
                let group = self.group();
                Array2::from_shape_fn((classes.len(), classes.len()), |(i, j)| {
                    let (h, k) = (classes[i].representative(), classes[j].representative());
                    let into = group
                        .elements()
                        .iter()
                        .filter(|g| k.gens().iter().all(|x| h.contains(&x.conjugate_by(g))))
                        .count();
                    (into / h.order()) as u64
                })
            })
            .clone()
    }

    /// Products of all pairs of basis elements, in basis order.
    #[must_use]
    pub fn multiplication_table(&self) -> Array2<BurnsideElement<R>> {
        let classes = self.inner.classes.classes();
        Array2::from_shape_fn((classes.len(), classes.len()), |(i, j)| {
            self.product_on_basis(&classes[i], &classes[j])
        })
    }
}

impl<R: BaseRing> ClassRing for BurnsideRing<R> {
    type Base = R;

    fn base_ring(&self) -> &R {
        &self.inner.base
    }

    fn prefix(&self) -> &str {
        &self.inner.prefix
    }

    fn one_basis(&self) -> ConjugacyClass {
        self.inner.classes.normalize(self.group())
    }

    /// `[H] * [K] = sum of [H ∩ gKg⁻¹]` over double coset representatives
    /// `g` of `H\G/K`.
    fn product_on_basis(&self, h: &ConjugacyClass, k: &ConjugacyClass) -> BurnsideElement<R> {
        let backend = self.inner.classes.backend();
        let (hr, kr) = (h.representative(), k.representative());
        let base = &self.inner.base;
        let mut terms = Terms::new();
        for g in backend.double_coset_representatives(self.group(), hr, kr) {
            let meet = backend.intersection(hr, &backend.conjugate_subgroup(kr, &g));
            terms.add_term(base, self.inner.classes.normalize(&meet), base.one());
        }
        debug!("[{h}] * [{k}] has {} terms", terms.len());
        RingElement::from_terms(self.clone(), terms)
    }
}

impl<R: BaseRing> PartialEq for BurnsideRing<R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.base == other.inner.base
                && self.inner.prefix == other.inner.prefix
                && self.group() == other.group())
    }
}

impl<R: BaseRing> fmt::Display for BurnsideRing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Burnside ring of {}", self.group())
    }
}

impl<R: BaseRing> fmt::Debug for BurnsideRing<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BurnsideRing")
            .field("group", self.group())
            .field("base", &self.inner.base)
            .field("prefix", &self.inner.prefix)
            .finish()
    }
}
