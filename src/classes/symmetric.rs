//! Conjugacy classes of subgroups of all symmetric groups at once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use log::debug;

use super::{ConjugacyClass, ConjugacyClasses, SubgroupStore};
use crate::error::{Error, Result};
use crate::perm::{GroupBackend, NaiveBackend, PermutationGroup};

/// The disjoint union over `n >= 0` of the conjugacy classes of subgroups of
/// `S_n`, graded by `n`.
///
/// A subgroup of degree `n` is read as a subgroup of `S_n`, so `S_0`, `S_1`
/// and the trivial subgroup of `S_2` are three different classes.
/// Iteration is infinite: all classes of degree 0, then degree 1, and so on.
/// Each degree is enumerated once and remembered.
pub struct AllSymmetricClasses {
    backend: Rc<dyn GroupBackend>,
    store: RefCell<SubgroupStore>,
    by_degree: RefCell<HashMap<usize, Rc<[ConjugacyClass]>>>,
}

impl AllSymmetricClasses {
    /// The index set computed with [`NaiveBackend`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(Rc::new(NaiveBackend))
    }

    /// The index set computed with `backend`.
    #[must_use]
    pub fn with_backend(backend: Rc<dyn GroupBackend>) -> Self {
        let store = SubgroupStore::all_symmetric(Rc::clone(&backend));
        Self {
            backend,
            store: RefCell::new(store),
            by_degree: RefCell::new(HashMap::new()),
        }
    }

    /// The group backend used for conjugacy computations.
    #[must_use]
    pub fn backend(&self) -> &Rc<dyn GroupBackend> {
        &self.backend
    }

    /// Whether `h` is a subgroup of `S_{h.degree()}`.
    #[must_use]
    pub fn contains(&self, h: &PermutationGroup) -> bool {
        h.gens().iter().all(|g| g.largest_moved_point() <= h.degree())
    }

    /// The graded class of `h`, read as a subgroup of `S_{h.degree()}`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] if a generator of `h` moves a point
    /// beyond its degree.
    pub fn class_of(&self, h: &PermutationGroup) -> Result<ConjugacyClass> {
        if !self.contains(h) {
            return Err(Error::not_a_subgroup(
                h,
                self,
                PermutationGroup::symmetric(h.degree()),
            ));
        }
        Ok(self.normalize(h))
    }

    pub(crate) fn normalize(&self, h: &PermutationGroup) -> ConjugacyClass {
        self.store.borrow_mut().normalize(h)
    }

    /// The classes of grade `n`, normalized through this index set.
    #[must_use]
    pub fn classes_of_degree(&self, n: usize) -> Rc<[ConjugacyClass]> {
        if let Some(classes) = self.by_degree.borrow().get(&n) {
            return Rc::clone(classes);
        }
        let group = self.store.borrow_mut().ambient_for(n);
        let classes: Rc<[ConjugacyClass]> = self
            .backend
            .conjugacy_classes_of_subgroups(&group)
            .iter()
            .map(|h| self.normalize(h))
            .collect();
        debug!("enumerated {} classes of grade {n}", classes.len());
        self.by_degree.borrow_mut().insert(n, Rc::clone(&classes));
        classes
    }

    /// Iterate over [`classes_of_degree`](Self::classes_of_degree).
    pub fn iter_degree(&self, n: usize) -> impl Iterator<Item = ConjugacyClass> {
        let classes = self.classes_of_degree(n);
        (0..classes.len()).map(move |i| classes[i].clone())
    }

    /// Every class, grade by grade. Never ends.
    pub fn iter(&self) -> impl Iterator<Item = ConjugacyClass> + '_ {
        (0..).flat_map(move |n| self.iter_degree(n))
    }

    /// The classes of subgroups of `S_n` as a finite graded index set.
    #[must_use]
    pub fn subset(&self, n: usize) -> ConjugacyClasses {
        ConjugacyClasses::symmetric_with_backend(n, Rc::clone(&self.backend))
    }

    /// The name of `h`'s class, if one was set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] if `h` is not a subgroup of its
    /// symmetric group.
    pub fn get_name(&self, h: &PermutationGroup) -> Result<Option<String>> {
        Ok(self.class_of(h)?.name())
    }

    /// Name `h`'s class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] for invalid subgroups and
    /// [`Error::InvalidName`] if `name` is blank.
    pub fn set_name(&self, h: &PermutationGroup, name: &str) -> Result<()> {
        self.class_of(h)?;
        self.store.borrow_mut().set_name(h, name)
    }

    /// Remove the name of `h`'s class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotASubgroup`] for invalid subgroups.
    pub fn unset_name(&self, h: &PermutationGroup) -> Result<()> {
        self.class_of(h)?;
        self.store.borrow_mut().unset_name(h);
        Ok(())
    }

    /// `(order, number of cached classes)` per order, summed over grades.
    #[must_use]
    pub fn bucket_sizes(&self) -> Vec<(usize, usize)> {
        self.store.borrow().bucket_sizes()
    }
}

impl Default for AllSymmetricClasses {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AllSymmetricClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conjugacy classes of subgroups of symmetric groups")
    }
}

impl fmt::Debug for AllSymmetricClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AllSymmetricClasses")
            .field("backend", &self.backend.name())
            .finish_non_exhaustive()
    }
}
