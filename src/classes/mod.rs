//! Conjugacy classes of subgroups.
//!
//! The basis of a Burnside ring is indexed by conjugacy classes of subgroups
//! of the ambient group. This module provides:
//!
//! - [`ConjugacyClass`]: one class, held as a canonical representative;
//! - [`SubgroupStore`]: the cache mapping subgroups to canonical classes;
//! - [`ConjugacyClasses`]: the finite index set for one group `G`, with a
//!   graded variant for `S_n`;
//! - [`AllSymmetricClasses`]: the infinite graded index set over all
//!   symmetric groups.
//!
//! ```
//! use burnside::classes::ConjugacyClasses;
//! use burnside::perm::PermutationGroup;
//!
//! let classes = ConjugacyClasses::new(PermutationGroup::symmetric(4));
//! assert_eq!(classes.cardinality(), 11);
//! ```

mod class;
mod store;
mod symmetric;

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

pub use class::ConjugacyClass;
pub use store::SubgroupStore;
pub use symmetric::AllSymmetricClasses;

use log::debug;

use crate::error::{Error, Result};
use crate::perm::{GroupBackend, NaiveBackend, PermutationGroup};

/// The set of conjugacy classes of subgroups of a finite group `G`.
///
/// Owns its [`SubgroupStore`], so every class produced here is canonical
/// with respect to this index set. The full list of classes is enumerated
/// once, on first use, and reused afterwards.
pub struct ConjugacyClasses {
    group: PermutationGroup,
    backend: Rc<dyn GroupBackend>,
    graded: bool,
    store: RefCell<SubgroupStore>,
    enumerated: OnceCell<Vec<ConjugacyClass>>,
}

impl ConjugacyClasses {
    /// Classes of subgroups of `group`, computed with [`NaiveBackend`].
    #[must_use]
    pub fn new(group: PermutationGroup) -> Self {
        Self::with_backend(group, Rc::new(NaiveBackend))
    }

    /// Classes of subgroups of `group`, computed with `backend`.
    #[must_use]
    pub fn with_backend(group: PermutationGroup, backend: Rc<dyn GroupBackend>) -> Self {
        Self::build(group, false, backend)
    }

    /// Graded classes of subgroups of `S_n`: every class carries grade `n`.
    #[must_use]
    pub fn symmetric(n: usize) -> Self {
        Self::symmetric_with_backend(n, Rc::new(NaiveBackend))
    }

    /// Graded classes of subgroups of `S_n` computed with `backend`.
    #[must_use]
    pub fn symmetric_with_backend(n: usize, backend: Rc<dyn GroupBackend>) -> Self {
        Self::build(PermutationGroup::symmetric(n), true, backend)
    }

    fn build(group: PermutationGroup, graded: bool, backend: Rc<dyn GroupBackend>) -> Self {
        let store = SubgroupStore::new(group.clone(), graded, Rc::clone(&backend));
        Self {
            group,
            backend,
            graded,
            store: RefCell::new(store),
            enumerated: OnceCell::new(),
        }
    }

    /// The ambient group `G`.
    #[must_use]
    pub fn group(&self) -> &PermutationGroup {
        &self.group
    }

    /// The group backend used for conjugacy computations.
    #[must_use]
    pub fn backend(&self) -> &Rc<dyn GroupBackend> {
        &self.backend
    }

    /// Whether classes carry a grade.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.graded
    }

    /// Whether `h` is a subgroup of `G`.
    #[must_use]
    pub fn contains(&self, h: &PermutationGroup) -> bool {
        h.is_subgroup_of(&self.group)
    }

    /// The class of the subgroup `h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] if `h` is not a subgroup of `G`.
    pub fn class_of(&self, h: &PermutationGroup) -> Result<ConjugacyClass> {
        if !self.contains(h) {
            return Err(Error::not_a_subgroup(h, self, &self.group));
        }
        Ok(self.normalize(h))
    }

    /// Canonical class of a subgroup already known to lie in `G`.
    pub(crate) fn normalize(&self, h: &PermutationGroup) -> ConjugacyClass {
        self.store.borrow_mut().normalize(h)
    }

    /// Every class, normalized through this index set's store, in the
    /// backend's enumeration order.
    #[must_use]
    pub fn classes(&self) -> &[ConjugacyClass] {
        self.enumerated.get_or_init(|| {
            let classes: Vec<ConjugacyClass> = self
                .backend
                .conjugacy_classes_of_subgroups(&self.group)
                .iter()
                .map(|h| self.normalize(h))
                .collect();
            debug!(
                "enumerated {} classes of subgroups of {}",
                classes.len(),
                self.group
            );
            classes
        })
    }

    /// Iterate over [`classes`](Self::classes).
    pub fn iter(&self) -> impl Iterator<Item = ConjugacyClass> + '_ {
        self.classes().iter().cloned()
    }

    /// Number of conjugacy classes of subgroups.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.classes().len()
    }

    /// The name of `h`'s class, if one was set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] if `h` is not a subgroup of `G`.
    pub fn get_name(&self, h: &PermutationGroup) -> Result<Option<String>> {
        Ok(self.class_of(h)?.name())
    }

    /// Name `h`'s class. The name is visible through every clone of the
    /// class and used when printing ring elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] if `h` is not a subgroup of `G`, or
    /// [`Error::InvalidName`] if `name` is blank.
    pub fn set_name(&self, h: &PermutationGroup, name: &str) -> Result<()> {
        self.class_of(h)?;
        self.store.borrow_mut().set_name(h, name)
    }

    /// Name the class of `G` itself. The name must already be validated.
    pub(crate) fn name_ambient(&self, name: &str) {
        self.store.borrow_mut().assign_name(&self.group, name);
    }

    /// Remove the name of `h`'s class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] if `h` is not a subgroup of `G`.
    pub fn unset_name(&self, h: &PermutationGroup) -> Result<()> {
        self.class_of(h)?;
        self.store.borrow_mut().unset_name(h);
        Ok(())
    }

    /// The Hasse diagram of the subconjugacy order: pairs `(a, b)` with
    /// `a < b` and nothing strictly between them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotImplemented`] if the backend cannot answer
    /// contained-conjugate queries.
    pub fn cover_relations(&self) -> Result<Vec<(ConjugacyClass, ConjugacyClass)>> {
        let classes = self.classes();
        let n = classes.len();
        let mut below = vec![vec![false; n]; n];
        for (i, a) in classes.iter().enumerate() {
            for (j, b) in classes.iter().enumerate() {
                below[i][j] = i != j && a.is_subconjugate_to(b)?;
            }
        }

        let mut covers = Vec::new();
        for i in 0..n {
            for j in 0..n {
                if below[i][j] && !(0..n).any(|k| below[i][k] && below[k][j]) {
                    covers.push((classes[i].clone(), classes[j].clone()));
                }
            }
        }
        Ok(covers)
    }

    /// `(order, number of cached classes)` per order, ascending.
    #[must_use]
    pub fn bucket_sizes(&self) -> Vec<(usize, usize)> {
        self.store.borrow().bucket_sizes()
    }
}

impl PartialEq for ConjugacyClasses {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group
    }
}

impl Eq for ConjugacyClasses {}

impl Hash for ConjugacyClasses {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group.hash(state);
    }
}

impl fmt::Display for ConjugacyClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conjugacy classes of subgroups of {}", self.group)
    }
}

impl fmt::Debug for ConjugacyClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConjugacyClasses")
            .field("group", &self.group)
            .field("backend", &self.backend.name())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::hash_map::DefaultHasher;

    use super::*;
    use crate::perm::Permutation;

    /// Delegates to [`NaiveBackend`], counting subgroup enumerations.
    #[derive(Debug, Default)]
    struct CountingBackend {
        enumerations: Cell<usize>,
    }

    impl GroupBackend for CountingBackend {
        fn name(&self) -> &'static str {
            "counting"
        }
        fn is_conjugate(&self, g: &PermutationGroup, a: &PermutationGroup, b: &PermutationGroup) -> bool {
            NaiveBackend.is_conjugate(g, a, b)
        }
        fn conjugacy_classes_of_subgroups(&self, g: &PermutationGroup) -> Vec<PermutationGroup> {
            self.enumerations.set(self.enumerations.get() + 1);
            NaiveBackend.conjugacy_classes_of_subgroups(g)
        }
        fn double_coset_representatives(
            &self,
            g: &PermutationGroup,
            h: &PermutationGroup,
            k: &PermutationGroup,
        ) -> Vec<Permutation> {
            NaiveBackend.double_coset_representatives(g, h, k)
        }
        fn conjugate_subgroup(&self, k: &PermutationGroup, g: &Permutation) -> PermutationGroup {
            NaiveBackend.conjugate_subgroup(k, g)
        }
        fn intersection(&self, a: &PermutationGroup, b: &PermutationGroup) -> PermutationGroup {
            NaiveBackend.intersection(a, b)
        }
        fn orbits(&self, g: &PermutationGroup) -> Vec<Vec<usize>> {
            NaiveBackend.orbits(g)
        }
        fn minimal_generators(&self, h: &PermutationGroup) -> Vec<Permutation> {
            NaiveBackend.minimal_generators(h)
        }
        fn contained_conjugate(
            &self,
            g: &PermutationGroup,
            small: &PermutationGroup,
            big: &PermutationGroup,
        ) -> Result<bool> {
            NaiveBackend.contained_conjugate(g, small, big)
        }
    }

    fn hash_of(classes: &ConjugacyClasses) -> u64 {
        let mut hasher = DefaultHasher::new();
        classes.hash(&mut hasher);
        hasher.finish()
    }

    fn perm(cycles: &[&[usize]]) -> Permutation {
        Permutation::from_cycles(cycles).unwrap()
    }

    #[test]
    fn test_s4_classes() {
        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(4));
        let mut orders: Vec<usize> = classes.iter().map(|c| c.order()).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![1, 2, 2, 3, 4, 4, 4, 6, 8, 12, 24]);
        assert_eq!(
            classes.bucket_sizes(),
            vec![(1, 1), (2, 2), (3, 1), (4, 3), (6, 1), (8, 1), (12, 1), (24, 1)]
        );
    }

    #[test]
    fn test_iteration_is_canonical() {
        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        let first: Vec<ConjugacyClass> = classes.iter().collect();
        let second: Vec<ConjugacyClass> = classes.iter().collect();
        assert_eq!(first, second);
        assert_eq!(classes.bucket_sizes().iter().map(|b| b.1).sum::<usize>(), 4);
    }

    #[test]
    fn test_enumeration_runs_once() {
        let backend = Rc::new(CountingBackend::default());
        let classes = ConjugacyClasses::with_backend(
            PermutationGroup::symmetric(4),
            Rc::clone(&backend) as Rc<dyn GroupBackend>,
        );
        let first: Vec<ConjugacyClass> = classes.iter().collect();
        assert_eq!(classes.cardinality(), 11);
        let second: Vec<ConjugacyClass> = classes.iter().collect();
        assert_eq!(first, second);
        assert!(first.iter().zip(&second).all(|(a, b)| a.id() == b.id()));
        classes.cover_relations().unwrap();
        assert_eq!(backend.enumerations.get(), 1);
    }

    #[test]
    fn test_index_sets_hash_by_group() {
        let left = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        let right = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        let other = ConjugacyClasses::new(PermutationGroup::symmetric(4));
        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
        assert_ne!(left, other);

        let mut seen = std::collections::HashSet::new();
        seen.insert(left);
        assert!(!seen.insert(right));
        assert!(seen.insert(other));
    }

    #[test]
    fn test_class_of() {
        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        let a = classes
            .class_of(&PermutationGroup::from_generators(vec![perm(&[&[1, 2]])]))
            .unwrap();
        let b = classes
            .class_of(&PermutationGroup::from_generators(vec![perm(&[&[1, 3]])]))
            .unwrap();
        assert_eq!(a, b);
        assert_eq!(a.order(), 2);
        assert_eq!(a.grade(), None);
        assert_eq!(a.ambient_group(), classes.group());

        let too_big = PermutationGroup::from_generators(vec![perm(&[&[1, 2, 3, 4]])]);
        assert!(matches!(
            classes.class_of(&too_big),
            Err(Error::NotASubgroup { .. })
        ));
    }

    #[test]
    fn test_equality_across_stores() {
        let left = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        let right = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        let a = left
            .class_of(&PermutationGroup::from_generators(vec![perm(&[&[1, 2]])]))
            .unwrap();
        let b = right
            .class_of(&PermutationGroup::from_generators(vec![perm(&[&[2, 3]])]))
            .unwrap();
        let c = right.class_of(&PermutationGroup::cyclic(3)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(left == right);
    }

    #[test]
    fn test_names() {
        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        let c2 = PermutationGroup::from_generators(vec![perm(&[&[1, 2]])]);
        let class = classes.class_of(&c2).unwrap();
        assert_eq!(class.to_string(), "((1,2),)");

        classes.set_name(&c2, "C2").unwrap();
        assert_eq!(class.to_string(), "C2");
        assert_eq!(classes.get_name(&c2).unwrap(), Some("C2".to_string()));

        assert!(matches!(
            classes.set_name(&c2, ""),
            Err(Error::InvalidName(_))
        ));

        classes.unset_name(&c2).unwrap();
        assert_eq!(classes.get_name(&c2).unwrap(), None);
    }

    #[test]
    fn test_graded_classes() {
        let classes = ConjugacyClasses::symmetric(3);
        let all: Vec<ConjugacyClass> = classes.iter().collect();
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|c| c.grade() == Some(3)));
        assert!(classes.is_graded());

        let trivial = classes.class_of(&PermutationGroup::trivial(3)).unwrap();
        assert_eq!(trivial.to_string(), "(3, ((),))");
    }

    #[test]
    fn test_subconjugacy() {
        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(4));
        let c2 = classes
            .class_of(&PermutationGroup::from_generators(vec![perm(&[&[1, 2]])]))
            .unwrap();
        let v4 = classes
            .class_of(&PermutationGroup::from_generators(vec![
                perm(&[&[1, 2], &[3, 4]]),
                perm(&[&[1, 3], &[2, 4]]),
            ]))
            .unwrap();
        let a4 = classes.class_of(&PermutationGroup::alternating(4)).unwrap();
        assert!(v4.is_subconjugate_to(&a4).unwrap());
        assert!(!c2.is_subconjugate_to(&a4).unwrap());
        assert!(!c2.is_subconjugate_to(&v4).unwrap());
    }

    #[test]
    fn test_cover_relations() {
        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        // 1 < C2, 1 < C3, C2 < S3, C3 < S3.
        assert_eq!(classes.cover_relations().unwrap().len(), 4);

        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(4));
        assert_eq!(classes.cover_relations().unwrap().len(), 17);
    }

    #[test]
    fn test_display() {
        let classes = ConjugacyClasses::new(PermutationGroup::symmetric(3));
        assert_eq!(
            classes.to_string(),
            "Conjugacy classes of subgroups of Symmetric group of order 3! as a permutation group"
        );
    }
}
