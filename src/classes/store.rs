//! The conjugacy-class cache.
//!
//! [`SubgroupStore`] maps subgroups to canonical [`ConjugacyClass`] values.
//! Conjugacy tests are expensive, so representatives are bucketed by a cheap
//! invariant (grade and order) and a new subgroup is only tested against the
//! representatives in its own bucket.

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use log::{debug, trace};

use super::class::{ConjugacyClass, NameRegistry};
use crate::error::{Error, Result};
use crate::perm::{GroupBackend, PermutationGroup};

/// Where the ambient group of a subgroup comes from.
#[derive(Debug)]
enum Ambient {
    /// One ambient group for every subgroup.
    Fixed(PermutationGroup),
    /// `S_n` for a subgroup of degree `n`, memoized per degree.
    Symmetric(HashMap<usize, PermutationGroup>),
}

/// Cache of canonical conjugacy class representatives plus a name registry.
///
/// Invariants:
/// - every class ever returned sits in exactly one bucket, keyed by its
///   invariant;
/// - no two representatives in a bucket are conjugate;
/// - the cache never shrinks.
///
/// The store does not check that its input is a subgroup of the ambient
/// group; the index sets in this module do that before delegating here.
pub struct SubgroupStore {
    buckets: BTreeMap<(usize, usize), Vec<ConjugacyClass>>,
    names: NameRegistry,
    backend: Rc<dyn GroupBackend>,
    ambient: Ambient,
    graded: bool,
    next_id: usize,
}

impl SubgroupStore {
    /// A store for subgroups of `group`. Graded stores tag every class with
    /// the degree of `group`.
    #[must_use]
    pub fn new(group: PermutationGroup, graded: bool, backend: Rc<dyn GroupBackend>) -> Self {
        Self::with_ambient(Ambient::Fixed(group), graded, backend)
    }

    /// A graded store for subgroups of symmetric groups of every degree.
    #[must_use]
    pub fn all_symmetric(backend: Rc<dyn GroupBackend>) -> Self {
        Self::with_ambient(Ambient::Symmetric(HashMap::new()), true, backend)
    }

    fn with_ambient(ambient: Ambient, graded: bool, backend: Rc<dyn GroupBackend>) -> Self {
        Self {
            buckets: BTreeMap::new(),
            names: NameRegistry::default(),
            backend,
            ambient,
            graded,
            next_id: 0,
        }
    }

    /// The ambient group used for subgroups of the given degree.
    pub(crate) fn ambient_for(&mut self, degree: usize) -> PermutationGroup {
        match &mut self.ambient {
            Ambient::Fixed(group) => group.clone(),
            Ambient::Symmetric(cache) => cache
                .entry(degree)
                .or_insert_with(|| PermutationGroup::symmetric(degree))
                .clone(),
        }
    }

    fn invariant(&self, rep: &PermutationGroup) -> (usize, usize) {
        let grade = if self.graded { rep.degree() } else { 0 };
        (grade, rep.order())
    }

    /// The canonical class of `h`.
    ///
    /// Scans the bucket of `h`'s invariant in insertion order and returns the
    /// first representative conjugate to `h`. If there is none, `h` (with a
    /// minimized generating set) becomes a new representative.
    pub fn normalize(&mut self, h: &PermutationGroup) -> ConjugacyClass {
        let ambient = self.ambient_for(h.degree());
        let gens = self.backend.minimal_generators(h);
        let rep = h.regenerated(ambient.degree(), gens);
        let key = self.invariant(&rep);

        if let Some(bucket) = self.buckets.get(&key) {
            if let Some(hit) = bucket
                .iter()
                .find(|c| self.backend.is_conjugate(&ambient, c.representative(), &rep))
            {
                trace!("cache hit for {} in bucket {:?}", rep.gens_string(), key);
                return hit.clone();
            }
        }

        let class = ConjugacyClass::new(
            self.next_id,
            rep,
            ambient,
            self.graded,
            Rc::clone(&self.names),
            Rc::clone(&self.backend),
        );
        self.next_id += 1;
        let bucket = self.buckets.entry(key).or_default();
        bucket.push(class.clone());
        debug!(
            "new conjugacy class {} with invariant {:?} ({} in bucket)",
            class,
            key,
            bucket.len()
        );
        class
    }

    /// The name of `h`'s class, if one was set.
    pub fn get_name(&mut self, h: &PermutationGroup) -> Option<String> {
        self.normalize(h).name()
    }

    /// Name `h`'s class.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if `name` is empty or only whitespace.
    pub fn set_name(&mut self, h: &PermutationGroup, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::InvalidName(name.to_string()));
        }
        self.assign_name(h, name);
        Ok(())
    }

    /// Name `h`'s class without validating the name.
    pub(crate) fn assign_name(&mut self, h: &PermutationGroup, name: &str) {
        let class = self.normalize(h);
        self.names.borrow_mut().insert(class.id(), name.to_string());
    }

    /// Remove the name of `h`'s class, if any.
    pub fn unset_name(&mut self, h: &PermutationGroup) {
        let class = self.normalize(h);
        self.names.borrow_mut().remove(&class.id());
    }

    /// `(order, number of representatives)` for every bucket, ascending.
    /// Graded stores merge buckets of equal order across grades.
    #[must_use]
    pub fn bucket_sizes(&self) -> Vec<(usize, usize)> {
        let mut sizes: BTreeMap<usize, usize> = BTreeMap::new();
        for ((_, order), bucket) in &self.buckets {
            *sizes.entry(*order).or_default() += bucket.len();
        }
        sizes.into_iter().collect()
    }

    /// Every cached representative, bucket by bucket.
    pub fn classes(&self) -> impl Iterator<Item = &ConjugacyClass> {
        self.buckets.values().flatten()
    }

    /// Number of cached classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether nothing has been normalized yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl std::fmt::Debug for SubgroupStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubgroupStore")
            .field("graded", &self.graded)
            .field("buckets", &self.bucket_sizes())
            .finish_non_exhaustive()
    }
}
