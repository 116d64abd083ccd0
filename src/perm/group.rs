//! Permutation groups given by generators.
//!
//! A [`PermutationGroup`] is a subgroup of the symmetric group on
//! `{1, ..., degree}`. Elements are enumerated lazily on first use and cached
//! behind an `Arc`, so cloning a group is cheap and the enumeration happens at
//! most once per group value.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Permutation;
use crate::error::{Error, Result};
use crate::utils::factorial;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupKind {
    Symmetric,
    Alternating,
    Cyclic,
    Generic,
}

struct GroupData {
    degree: usize,
    gens: Vec<Permutation>,
    kind: GroupKind,
    /// Sorted element list.
    elements: OnceLock<Vec<Permutation>>,
}

/// A finite permutation group of a fixed degree.
///
/// # Example
///
/// ```
/// use burnside::perm::{Permutation, PermutationGroup};
///
/// let s4 = PermutationGroup::symmetric(4);
/// assert_eq!(s4.order(), 24);
///
/// let v4 = PermutationGroup::new(
///     4,
///     vec![
///         Permutation::from_cycles(&[&[1, 2], &[3, 4]]).unwrap(),
///         Permutation::from_cycles(&[&[1, 3], &[2, 4]]).unwrap(),
///     ],
/// )
/// .unwrap();
/// assert_eq!(v4.order(), 4);
/// assert!(v4.is_subgroup_of(&s4));
/// ```
#[derive(Clone)]
pub struct PermutationGroup {
    inner: Arc<GroupData>,
}

/// Plain description of a group: its degree and generators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupDescription {
    /// Degree of the ambient symmetric group.
    pub degree: usize,
    /// Generators of the group.
    pub generators: Vec<Permutation>,
}

impl PermutationGroup {
    /// Create a group of the given degree from generators.
    ///
    /// Identity generators are dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator moves a point beyond `degree`.
    pub fn new(degree: usize, gens: Vec<Permutation>) -> Result<Self> {
        if let Some(bad) = gens.iter().find(|g| g.largest_moved_point() > degree) {
            return Err(Error::PointOutOfRange {
                point: bad.largest_moved_point(),
                degree,
            });
        }
        Ok(Self::from_parts(degree, gens, GroupKind::Generic))
    }

    /// Create a group from generators, with degree equal to the largest
    /// moved point.
    #[must_use]
    pub fn from_generators(gens: Vec<Permutation>) -> Self {
        let degree = gens
            .iter()
            .map(Permutation::largest_moved_point)
            .max()
            .unwrap_or(0);
        Self::from_parts(degree, gens, GroupKind::Generic)
    }

    /// The symmetric group `S_n`.
    #[must_use]
    pub fn symmetric(n: usize) -> Self {
        let mut gens = Vec::new();
        if n >= 3 {
            gens.push(Permutation::from_zero_based(
                (1..n).chain(std::iter::once(0)).collect(),
            ));
        }
        if n >= 2 {
            gens.push(Permutation::from_zero_based(vec![1, 0]));
        }
        Self::from_parts(n, gens, GroupKind::Symmetric)
    }

    /// The alternating group `A_n`.
    #[must_use]
    pub fn alternating(n: usize) -> Self {
        // 3-cycles (1,2,k) generate A_n.
        let gens = (3..=n)
            .map(|k| {
                let mut images: Vec<usize> = (0..k).collect();
                images[0] = 1;
                images[1] = k - 1;
                images[k - 1] = 0;
                Permutation::from_zero_based(images)
            })
            .collect();
        Self::from_parts(n, gens, GroupKind::Alternating)
    }

    /// The cyclic group generated by `(1, 2, ..., n)`.
    #[must_use]
    pub fn cyclic(n: usize) -> Self {
        let gens = if n >= 2 {
            vec![Permutation::from_zero_based(
                (1..n).chain(std::iter::once(0)).collect(),
            )]
        } else {
            Vec::new()
        };
        Self::from_parts(n, gens, GroupKind::Cyclic)
    }

    /// The trivial group of the given degree.
    #[must_use]
    pub fn trivial(degree: usize) -> Self {
        Self::from_parts(degree, Vec::new(), GroupKind::Generic)
    }

    fn from_parts(degree: usize, mut gens: Vec<Permutation>, kind: GroupKind) -> Self {
        gens.retain(|g| !g.is_identity());
        let mut seen = BTreeSet::new();
        gens.retain(|g| seen.insert(g.clone()));
        Self {
            inner: Arc::new(GroupData {
                degree,
                gens,
                kind,
                elements: OnceLock::new(),
            }),
        }
    }

    /// A group whose element list is already known. The list must be the
    /// closure of `gens`.
    pub(crate) fn from_elements(
        degree: usize,
        gens: Vec<Permutation>,
        mut elements: Vec<Permutation>,
    ) -> Self {
        elements.sort();
        let group = Self::from_parts(degree, gens, GroupKind::Generic);
        let _ = group.inner.elements.set(elements);
        group
    }

    /// The same group presented by other generators of the same degree.
    /// Keeps the cached element list when there is one.
    pub(crate) fn regenerated(&self, degree: usize, gens: Vec<Permutation>) -> Self {
        match self.inner.elements.get() {
            Some(elements) if degree >= self.degree() => {
                Self::from_elements(degree, gens, elements.clone())
            }
            _ => Self::from_parts(degree, gens, GroupKind::Generic),
        }
    }

    /// The degree `n` of the ambient symmetric group `S_n`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.inner.degree
    }

    /// The generators.
    #[must_use]
    pub fn gens(&self) -> &[Permutation] {
        &self.inner.gens
    }

    /// Whether this is the trivial group.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.inner.gens.is_empty()
    }

    /// Number of elements, or `None` if it does not fit in `usize`.
    #[must_use]
    pub fn checked_order(&self) -> Option<usize> {
        let n = self.degree() as u64;
        let order = match self.inner.kind {
            GroupKind::Symmetric => factorial(n)?,
            GroupKind::Alternating if n >= 2 => factorial(n)? / 2,
            GroupKind::Alternating => 1,
            GroupKind::Cyclic => return Some(self.degree().max(1)),
            GroupKind::Generic => return Some(self.elements().len()),
        };
        usize::try_from(order).ok()
    }

    /// Number of elements, saturating at `usize::MAX` for symmetric and
    /// alternating groups too large to count (degree above 20 on 64-bit
    /// targets).
    #[must_use]
    pub fn order(&self) -> usize {
        self.checked_order().unwrap_or(usize::MAX)
    }

    /// All elements, sorted.
    #[must_use]
    pub fn elements(&self) -> &[Permutation] {
        self.inner.elements.get_or_init(|| {
            let mut elements: Vec<Permutation> = closure(&self.inner.gens).into_iter().collect();
            elements.sort();
            elements
        })
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, p: &Permutation) -> bool {
        if p.largest_moved_point() > self.degree() {
            return false;
        }
        match self.inner.kind {
            GroupKind::Symmetric => true,
            GroupKind::Alternating => p.sign() == 1,
            GroupKind::Cyclic | GroupKind::Generic => self.elements().binary_search(p).is_ok(),
        }
    }

    /// Whether every element of `self` lies in `other`.
    #[must_use]
    pub fn is_subgroup_of(&self, other: &Self) -> bool {
        self.gens().iter().all(|g| other.contains(g))
    }

    /// The subgroup of `self` generated by `gens`.
    ///
    /// # Errors
    ///
    /// Returns an error if some generator is not an element of `self`.
    pub fn subgroup(&self, gens: Vec<Permutation>) -> Result<Self> {
        if let Some(bad) = gens.iter().find(|g| !self.contains(g)) {
            return Err(Error::not_a_subgroup(
                format!("<{bad}>"),
                "subgroup",
                self,
            ));
        }
        Ok(Self::from_parts(self.degree(), gens, GroupKind::Generic))
    }

    /// The direct product `self × other` acting on `1..=n` and
    /// `n+1..=n+m`, where `n` and `m` are the two degrees.
    #[must_use]
    pub fn juxtapose(&self, other: &Self) -> Self {
        let n = self.degree();
        let gens = self
            .gens()
            .iter()
            .cloned()
            .chain(other.gens().iter().map(|g| g.shifted(n)))
            .collect();
        Self::from_parts(n + other.degree(), gens, GroupKind::Generic)
    }

    /// Degree and generators as plain data.
    #[must_use]
    pub fn description(&self) -> GroupDescription {
        GroupDescription {
            degree: self.degree(),
            generators: self.gens().to_vec(),
        }
    }

    /// Generators in cycle notation, Sage style: `((1,2), (3,4))`.
    #[must_use]
    pub fn gens_string(&self) -> String {
        match self.gens() {
            [] => "((),)".to_string(),
            [g] => format!("({g},)"),
            gens => {
                let parts: Vec<String> = gens.iter().map(ToString::to_string).collect();
                format!("({})", parts.join(", "))
            }
        }
    }
}

impl TryFrom<GroupDescription> for PermutationGroup {
    type Error = Error;

    fn try_from(desc: GroupDescription) -> Result<Self> {
        Self::new(desc.degree, desc.generators)
    }
}

/// The set of all products of `gens`, i.e. the group they generate.
pub(crate) fn closure(gens: &[Permutation]) -> BTreeSet<Permutation> {
    let mut elements = BTreeSet::new();
    let mut queue = VecDeque::new();
    elements.insert(Permutation::identity());
    queue.push_back(Permutation::identity());

    while let Some(x) = queue.pop_front() {
        for s in gens {
            let y = s * &x;
            if !elements.contains(&y) {
                elements.insert(y.clone());
                queue.push_back(y);
            }
        }
    }
    elements
}

impl PartialEq for PermutationGroup {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        let order = self.checked_order();
        self.degree() == other.degree()
            && order == other.checked_order()
            && self.is_subgroup_of(other)
            && (order.is_some() || other.is_subgroup_of(self))
    }
}

impl Eq for PermutationGroup {}

impl Hash for PermutationGroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.degree().hash(state);
        self.order().hash(state);
    }
}

impl fmt::Debug for PermutationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermutationGroup")
            .field("degree", &self.degree())
            .field("gens", &self.gens_string())
            .finish()
    }
}

impl fmt::Display for PermutationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            GroupKind::Symmetric => write!(
                f,
                "Symmetric group of order {}! as a permutation group",
                self.degree()
            ),
            GroupKind::Alternating => write!(
                f,
                "Alternating group of order {}!/2 as a permutation group",
                self.degree()
            ),
            GroupKind::Cyclic => write!(
                f,
                "Cyclic group of order {} as a permutation group",
                self.degree().max(1)
            ),
            GroupKind::Generic => write!(
                f,
                "Permutation group of degree {} with generators {}",
                self.degree(),
                self.gens_string()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(cycles: &[&[usize]]) -> Permutation {
        Permutation::from_cycles(cycles).unwrap()
    }

    #[test]
    fn test_named_group_orders() {
        for n in 0..=5 {
            let s = PermutationGroup::symmetric(n);
            assert_eq!(s.order(), s.elements().len(), "S_{n}");
            let a = PermutationGroup::alternating(n);
            assert_eq!(a.order(), a.elements().len(), "A_{n}");
            let c = PermutationGroup::cyclic(n);
            assert_eq!(c.order(), c.elements().len(), "C_{n}");
        }
        assert_eq!(PermutationGroup::symmetric(4).order(), 24);
        assert_eq!(PermutationGroup::alternating(4).order(), 12);
        assert_eq!(PermutationGroup::symmetric(0).order(), 1);
    }

    #[test]
    fn test_orders_too_large_to_count() {
        let s21 = PermutationGroup::symmetric(21);
        let a21 = PermutationGroup::alternating(21);
        assert_eq!(s21.checked_order(), None);
        assert_eq!(s21.order(), usize::MAX);
        assert_eq!(a21.checked_order(), None);
        assert_ne!(s21, a21);
        assert_ne!(a21, s21);
        assert_eq!(s21, PermutationGroup::symmetric(21));
        assert_eq!(PermutationGroup::cyclic(21).checked_order(), Some(21));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        let err = PermutationGroup::new(2, vec![perm(&[&[1, 3]])]).unwrap_err();
        assert_eq!(
            err,
            Error::PointOutOfRange {
                point: 3,
                degree: 2
            }
        );
    }

    #[test]
    fn test_membership() {
        let a4 = PermutationGroup::alternating(4);
        assert!(a4.contains(&perm(&[&[1, 2, 3]])));
        assert!(!a4.contains(&perm(&[&[1, 2]])));
        assert!(!a4.contains(&perm(&[&[1, 5, 2]])));

        let h = PermutationGroup::from_generators(vec![perm(&[&[1, 2], &[3, 4]])]);
        assert_eq!(h.elements().len(), 2);
        assert!(h.contains(&Permutation::identity()));
    }

    #[test]
    fn test_subgroup_ignores_degree() {
        let s3 = PermutationGroup::symmetric(3);
        let h = PermutationGroup::from_generators(vec![perm(&[&[1, 2]])]);
        assert_eq!(h.degree(), 2);
        assert!(h.is_subgroup_of(&s3));
        assert!(!s3.is_subgroup_of(&h));

        let z4 = PermutationGroup::cyclic(4);
        assert!(!z4.is_subgroup_of(&s3));
    }

    #[test]
    fn test_subgroup_constructor() {
        let s4 = PermutationGroup::symmetric(4);
        let h = s4.subgroup(vec![perm(&[&[1, 2, 3, 4]])]).unwrap();
        assert_eq!(h.degree(), 4);
        assert_eq!(h.order(), 4);

        let s3 = PermutationGroup::symmetric(3);
        assert!(s3.subgroup(vec![perm(&[&[1, 4]])]).is_err());
    }

    #[test]
    fn test_equality_is_by_elements() {
        let s3 = PermutationGroup::symmetric(3);
        let other = PermutationGroup::new(3, vec![perm(&[&[1, 2]]), perm(&[&[2, 3]])]).unwrap();
        assert_eq!(s3, other);
        assert_ne!(s3, PermutationGroup::symmetric(4));
    }

    #[test]
    fn test_juxtapose() {
        let s2 = PermutationGroup::symmetric(2);
        let c3 = PermutationGroup::cyclic(3);
        let product = s2.juxtapose(&c3);
        assert_eq!(product.degree(), 5);
        assert_eq!(product.order(), 6);
        assert!(product.contains(&perm(&[&[1, 2], &[3, 4, 5]])));
        assert!(!product.contains(&perm(&[&[2, 3]])));
        assert_eq!(PermutationGroup::symmetric(0).juxtapose(&s2).degree(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PermutationGroup::symmetric(4).to_string(),
            "Symmetric group of order 4! as a permutation group"
        );
        assert_eq!(PermutationGroup::trivial(3).gens_string(), "((),)");
        let h = PermutationGroup::from_generators(vec![perm(&[&[3, 4]]), perm(&[&[1, 2], &[3, 4]])]);
        assert_eq!(h.gens_string(), "((3,4), (1,2)(3,4))");
    }

    #[test]
    fn test_description_round_trip() {
        let s4 = PermutationGroup::symmetric(4);
        let desc = s4.description();
        let back = PermutationGroup::try_from(desc).unwrap();
        assert_eq!(back, s4);
    }
}
