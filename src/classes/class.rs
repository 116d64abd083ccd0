//! The conjugacy class value type.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::Result;
use crate::perm::{GroupBackend, PermutationGroup};

/// Display names keyed by class id, shared between a store and the classes
/// it hands out.
pub(crate) type NameRegistry = Rc<RefCell<HashMap<usize, String>>>;

struct ClassData {
    /// Position in the owning store; unique per store.
    id: usize,
    representative: PermutationGroup,
    /// `G`, or `S_n` for graded classes.
    ambient: PermutationGroup,
    graded: bool,
    names: NameRegistry,
    backend: Rc<dyn GroupBackend>,
}

/// A conjugacy class of subgroups of a group `G`.
///
/// Values are only created by a [`SubgroupStore`](super::SubgroupStore), so
/// every `ConjugacyClass` is the canonical representative of its class in the
/// store that produced it. Cloning is cheap.
///
/// Equality means "conjugate in `G`". Classes from the same store compare by
/// identity, since a store never holds two conjugate representatives; classes
/// from different stores fall back to an explicit conjugacy test. Hashing
/// uses the order of the representative (and the grade for graded classes),
/// which is invariant under conjugation.
#[derive(Clone)]
pub struct ConjugacyClass {
    inner: Rc<ClassData>,
}

impl ConjugacyClass {
    pub(crate) fn new(
        id: usize,
        representative: PermutationGroup,
        ambient: PermutationGroup,
        graded: bool,
        names: NameRegistry,
        backend: Rc<dyn GroupBackend>,
    ) -> Self {
        Self {
            inner: Rc::new(ClassData {
                id,
                representative,
                ambient,
                graded,
                names,
                backend,
            }),
        }
    }

    /// The representative subgroup, presented by a small generating set.
    #[must_use]
    pub fn representative(&self) -> &PermutationGroup {
        &self.inner.representative
    }

    /// The ambient group `G`. For graded classes this is
    /// `SymmetricGroup(grade)`.
    #[must_use]
    pub fn ambient_group(&self) -> &PermutationGroup {
        &self.inner.ambient
    }

    /// Order of the subgroups in this class.
    #[must_use]
    pub fn order(&self) -> usize {
        self.inner.representative.order()
    }

    /// The grade `n` for classes of subgroups of `S_n` in a graded index
    /// set; `None` otherwise.
    #[must_use]
    pub fn grade(&self) -> Option<usize> {
        self.inner
            .graded
            .then(|| self.inner.representative.degree())
    }

    /// Whether this class comes from a graded index set.
    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.inner.graded
    }

    /// The display name assigned to this class, if any.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        self.inner.names.borrow().get(&self.inner.id).cloned()
    }

    /// The partial order on conjugacy classes: `true` iff some conjugate of
    /// this class's representative is contained in `other`'s representative.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotImplemented`](crate::Error::NotImplemented) if the
    /// backend does not support contained-conjugate queries.
    pub fn is_subconjugate_to(&self, other: &Self) -> Result<bool> {
        if self.grade() != other.grade() {
            return Ok(false);
        }
        self.inner.backend.contained_conjugate(
            &self.inner.ambient,
            &self.inner.representative,
            &other.inner.representative,
        )
    }

    pub(crate) fn id(&self) -> usize {
        self.inner.id
    }

    /// Deterministic ordering key used when printing linear combinations.
    pub(crate) fn sort_key(&self) -> (usize, usize, usize) {
        (self.grade().unwrap_or(0), self.order(), self.inner.id)
    }

    fn same_store(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner.names, &other.inner.names)
    }
}

impl PartialEq for ConjugacyClass {
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        if self.inner.graded != other.inner.graded
            || self.grade() != other.grade()
            || self.order() != other.order()
        {
            return false;
        }
        if self.same_store(other) {
            return self.inner.id == other.inner.id;
        }
        self.inner.ambient == other.inner.ambient
            && self.inner.backend.is_conjugate(
                &self.inner.ambient,
                &self.inner.representative,
                &other.inner.representative,
            )
    }
}

impl Eq for ConjugacyClass {}

impl Hash for ConjugacyClass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grade().hash(state);
        self.order().hash(state);
    }
}

impl fmt::Display for ConjugacyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self
            .name()
            .unwrap_or_else(|| self.inner.representative.gens_string());
        match self.grade() {
            Some(n) => write!(f, "({n}, {label})"),
            None => write!(f, "{label}"),
        }
    }
}

impl fmt::Debug for ConjugacyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConjugacyClass({self})")
    }
}
