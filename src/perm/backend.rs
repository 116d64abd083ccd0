//! The group-theory backend consumed by the Burnside ring layer.
//!
//! Everything the ring needs from group theory goes through the
//! [`GroupBackend`] trait, so a faster library can be plugged in without
//! touching the cache or the ring. [`NaiveBackend`] answers every query by
//! brute force over enumerated element lists; it is exact and deterministic
//! and comfortably handles groups with a few hundred elements.

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::fmt;

use super::group::closure;
use super::{Permutation, PermutationGroup};
use crate::error::{Error, Result};

/// Group-theoretic primitives required by the conjugacy-class cache and the
/// Burnside ring.
///
/// Implementations must be deterministic: the enumeration order of
/// [`conjugacy_classes_of_subgroups`](Self::conjugacy_classes_of_subgroups)
/// and [`double_coset_representatives`](Self::double_coset_representatives)
/// fixes the iteration order of index sets and products.
pub trait GroupBackend: fmt::Debug {
    /// Name of this backend, used in error messages.
    fn name(&self) -> &'static str;

    /// Whether `h1` and `h2` are conjugate inside `group`.
    fn is_conjugate(
        &self,
        group: &PermutationGroup,
        h1: &PermutationGroup,
        h2: &PermutationGroup,
    ) -> bool;

    /// One representative subgroup per conjugacy class of subgroups of
    /// `group`, in a fixed order.
    fn conjugacy_classes_of_subgroups(&self, group: &PermutationGroup) -> Vec<PermutationGroup>;

    /// One element from each double coset `h g k` of `group`.
    fn double_coset_representatives(
        &self,
        group: &PermutationGroup,
        h: &PermutationGroup,
        k: &PermutationGroup,
    ) -> Vec<Permutation>;

    /// The conjugate subgroup `g k g⁻¹`.
    fn conjugate_subgroup(&self, k: &PermutationGroup, g: &Permutation) -> PermutationGroup;

    /// The intersection of two subgroups of a common group.
    fn intersection(&self, h1: &PermutationGroup, h2: &PermutationGroup) -> PermutationGroup;

    /// Orbits of `group` on `{1, ..., degree}`. Each orbit starts with its
    /// smallest point; orbits are ordered by that point.
    fn orbits(&self, group: &PermutationGroup) -> Vec<Vec<usize>>;

    /// A small generating set of `subgroup`.
    fn minimal_generators(&self, subgroup: &PermutationGroup) -> Vec<Permutation>;

    /// Whether some conjugate of `small` by an element of `group` is
    /// contained in `big`.
    ///
    /// # Errors
    ///
    /// The default implementation reports [`Error::NotImplemented`]; backends
    /// that can answer override it.
    fn contained_conjugate(
        &self,
        group: &PermutationGroup,
        small: &PermutationGroup,
        big: &PermutationGroup,
    ) -> Result<bool> {
        let _ = (group, small, big);
        Err(Error::NotImplemented {
            feature: "contained conjugate search",
            provider: self.name().to_string(),
        })
    }
}

/// Brute-force reference backend.
///
/// # Example
///
/// ```
/// use burnside::perm::{GroupBackend, NaiveBackend, PermutationGroup};
///
/// let s4 = PermutationGroup::symmetric(4);
/// let classes = NaiveBackend.conjugacy_classes_of_subgroups(&s4);
/// let orders: Vec<usize> = classes.iter().map(|h| h.order()).collect();
/// assert_eq!(orders, vec![1, 2, 2, 3, 4, 4, 4, 6, 8, 12, 24]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveBackend;

impl NaiveBackend {
    /// Whether `g small g⁻¹ ⊆ big`.
    fn conjugates_into(g: &Permutation, small: &PermutationGroup, big: &PermutationGroup) -> bool {
        small.gens().iter().all(|h| big.contains(&h.conjugate_by(g)))
    }

    /// All subgroups of `group` as sorted element lists, each with a
    /// generating set.
    fn all_subgroups(group: &PermutationGroup) -> Vec<(Vec<Permutation>, Vec<Permutation>)> {
        let mut seen: HashSet<Vec<Permutation>> = HashSet::new();
        let mut cyclic = Vec::new();
        for g in group.elements() {
            let elements: Vec<Permutation> = closure(std::slice::from_ref(g)).into_iter().collect();
            if seen.insert(elements.clone()) {
                let gens = if g.is_identity() { Vec::new() } else { vec![g.clone()] };
                cyclic.push((elements, gens));
            }
        }

        // Every subgroup is a join of cyclic subgroups.
        let mut subgroups = cyclic.clone();
        let mut frontier = cyclic.clone();
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for (elements, gens) in &frontier {
                for (_, cyclic_gens) in &cyclic {
                    let Some(c) = cyclic_gens.first() else {
                        continue;
                    };
                    if elements.binary_search(c).is_ok() {
                        continue;
                    }
                    let mut joined_gens = gens.clone();
                    joined_gens.push(c.clone());
                    let joined: Vec<Permutation> = closure(&joined_gens).into_iter().collect();
                    if seen.insert(joined.clone()) {
                        next.push((joined, joined_gens));
                    }
                }
            }
            subgroups.extend(next.iter().cloned());
            frontier = next;
        }

        subgroups.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
        subgroups
    }
}

impl GroupBackend for NaiveBackend {
    fn name(&self) -> &'static str {
        "naive backend"
    }

    fn is_conjugate(
        &self,
        group: &PermutationGroup,
        h1: &PermutationGroup,
        h2: &PermutationGroup,
    ) -> bool {
        if h1.order() != h2.order() {
            return false;
        }
        group
            .elements()
            .iter()
            .any(|g| Self::conjugates_into(g, h1, h2))
    }

    fn conjugacy_classes_of_subgroups(&self, group: &PermutationGroup) -> Vec<PermutationGroup> {
        let mut reps: Vec<PermutationGroup> = Vec::new();
        for (elements, gens) in Self::all_subgroups(group) {
            let h = PermutationGroup::from_elements(group.degree(), gens, elements);
            let known = reps
                .iter()
                .any(|r| r.order() == h.order() && self.is_conjugate(group, r, &h));
            if !known {
                reps.push(h);
            }
        }
        reps
    }

    fn double_coset_representatives(
        &self,
        group: &PermutationGroup,
        h: &PermutationGroup,
        k: &PermutationGroup,
    ) -> Vec<Permutation> {
        let mut covered: HashSet<Permutation> = HashSet::new();
        let mut reps = Vec::new();
        for g in group.elements() {
            if covered.contains(g) {
                continue;
            }
            reps.push(g.clone());
            for x in h.elements() {
                let xg = x * g;
                for y in k.elements() {
                    covered.insert(&xg * y);
                }
            }
        }
        reps
    }

    fn conjugate_subgroup(&self, k: &PermutationGroup, g: &Permutation) -> PermutationGroup {
        let degree = k.degree().max(g.largest_moved_point());
        let gens: Vec<Permutation> = k.gens().iter().map(|x| x.conjugate_by(g)).collect();
        let elements: Vec<Permutation> = k.elements().iter().map(|x| x.conjugate_by(g)).collect();
        PermutationGroup::from_elements(degree, gens, elements)
    }

    fn intersection(&self, h1: &PermutationGroup, h2: &PermutationGroup) -> PermutationGroup {
        let degree = h1.degree().max(h2.degree());
        let elements: Vec<Permutation> = h1
            .elements()
            .iter()
            .filter(|x| h2.contains(x))
            .cloned()
            .collect();

        // Greedy generating set: add any element not yet generated.
        let mut gens = Vec::new();
        let mut generated: BTreeSet<Permutation> = closure(&gens);
        for x in &elements {
            if !generated.contains(x) {
                gens.push(x.clone());
                generated = closure(&gens);
            }
        }
        PermutationGroup::from_elements(degree, gens, elements)
    }

    fn orbits(&self, group: &PermutationGroup) -> Vec<Vec<usize>> {
        let n = group.degree();
        let mut seen = vec![false; n + 1];
        let mut orbits = Vec::new();
        for start in 1..=n {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let mut orbit = vec![start];
            let mut queue = VecDeque::from([start]);
            while let Some(x) = queue.pop_front() {
                for g in group.gens() {
                    let y = g.apply(x);
                    if !seen[y] {
                        seen[y] = true;
                        orbit.push(y);
                        queue.push_back(y);
                    }
                }
            }
            orbits.push(orbit);
        }
        orbits
    }

    fn minimal_generators(&self, subgroup: &PermutationGroup) -> Vec<Permutation> {
        if subgroup.is_trivial() {
            return Vec::new();
        }
        if subgroup.gens().len() == 1 {
            return subgroup.gens().to_vec();
        }

        // Greedy: repeatedly add the element that enlarges the generated
        // subgroup the most; ties go to the smallest element.
        let target = subgroup.order();
        let mut gens: Vec<Permutation> = Vec::new();
        let mut generated = closure(&gens);
        while generated.len() < target {
            let mut best: Option<(usize, &Permutation, BTreeSet<Permutation>)> = None;
            for x in subgroup.elements() {
                if generated.contains(x) {
                    continue;
                }
                let mut candidate = gens.clone();
                candidate.push(x.clone());
                let span = closure(&candidate);
                if best.as_ref().map_or(true, |(size, _, _)| span.len() > *size) {
                    let full = span.len() == target;
                    best = Some((span.len(), x, span));
                    if full {
                        break;
                    }
                }
            }
            let Some((_, x, span)) = best else {
                break;
            };
            gens.push(x.clone());
            generated = span;
        }

        if gens.len() < subgroup.gens().len() {
            gens
        } else {
            subgroup.gens().to_vec()
        }
    }

    fn contained_conjugate(
        &self,
        group: &PermutationGroup,
        small: &PermutationGroup,
        big: &PermutationGroup,
    ) -> Result<bool> {
        let (s, b) = (small.order(), big.order());
        if s > b || b % s != 0 {
            return Ok(false);
        }
        Ok(group
            .elements()
            .iter()
            .any(|g| Self::conjugates_into(g, small, big)))
    }
}
