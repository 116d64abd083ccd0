//! Finite linear combinations with non-zero coefficients.

use std::fmt::Display;
use std::hash::Hash;

use indexmap::IndexMap;

use super::base::BaseRing;
use crate::classes::ConjugacyClass;

/// A map from basis keys to non-zero coefficients.
///
/// For class keys, lookups use conjugacy-class equality, so classes coming
/// from different stores over the same group merge correctly.
#[derive(Debug, Clone)]
pub(crate) struct Terms<E, K = ConjugacyClass> {
    map: IndexMap<K, E>,
}

impl<E: Clone + PartialEq, K: Clone + Eq + Hash> Terms<E, K> {
    pub(crate) fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Add `coeff * key`, dropping the entry if it cancels.
    pub(crate) fn add_term<R: BaseRing<Element = E>>(&mut self, ring: &R, key: K, coeff: E) {
        if ring.is_zero(&coeff) {
            return;
        }
        let sum = match self.map.get(&key) {
            Some(existing) => ring.add(existing, &coeff),
            None => coeff,
        };
        if ring.is_zero(&sum) {
            self.map.shift_remove(&key);
        } else {
            self.map.insert(key, sum);
        }
    }

    pub(crate) fn add_all<R: BaseRing<Element = E>>(&mut self, ring: &R, other: &Self) {
        for (key, coeff) in &other.map {
            self.add_term(ring, key.clone(), coeff.clone());
        }
    }

    /// Every coefficient multiplied by `factor`; zero terms are dropped.
    pub(crate) fn scaled<R: BaseRing<Element = E>>(&self, ring: &R, factor: &E) -> Self {
        let mut out = Self::new();
        for (key, coeff) in &self.map {
            out.add_term(ring, key.clone(), ring.mul(coeff, factor));
        }
        out
    }

    pub(crate) fn negated<R: BaseRing<Element = E>>(&self, ring: &R) -> Self {
        Self {
            map: self
                .map
                .iter()
                .map(|(key, coeff)| (key.clone(), ring.neg(coeff)))
                .collect(),
        }
    }

    pub(crate) fn get(&self, key: &K) -> Option<&E> {
        self.map.get(key)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&K, &E)> {
        self.map.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Terms sorted by `sort_key`.
    pub(crate) fn sorted_by<S: Ord>(&self, sort_key: impl Fn(&K) -> S) -> Vec<(&K, &E)> {
        let mut terms: Vec<_> = self.map.iter().collect();
        terms.sort_by_key(|(key, _)| sort_key(key));
        terms
    }

    /// Render as `a + 2*b - c`, or `0` when empty. Unit coefficients are
    /// omitted.
    pub(crate) fn render<R, S>(
        &self,
        ring: &R,
        sort_key: impl Fn(&K) -> S,
        label: impl Fn(&K) -> String,
    ) -> String
    where
        R: BaseRing<Element = E>,
        E: Display,
        S: Ord,
    {
        let mut out = String::new();
        for (i, (key, coeff)) in self.sorted_by(sort_key).into_iter().enumerate() {
            let negative = coeff.to_string().starts_with('-');
            let magnitude = if negative { ring.neg(coeff) } else { coeff.clone() };
            match (i, negative) {
                (0, true) => out.push('-'),
                (0, false) => {}
                (_, true) => out.push_str(" - "),
                (_, false) => out.push_str(" + "),
            }
            if !ring.is_one(&magnitude) {
                out.push_str(&magnitude.to_string());
                out.push('*');
            }
            out.push_str(&label(key));
        }
        if out.is_empty() {
            out.push('0');
        }
        out
    }
}

impl<E: Clone + PartialEq, K: Clone + Eq + Hash> PartialEq for Terms<E, K> {
    fn eq(&self, other: &Self) -> bool {
        self.map.len() == other.map.len()
            && self
                .map
                .iter()
                .all(|(key, coeff)| other.map.get(key) == Some(coeff))
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::ring::Integers;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_cancellation_drops_terms() {
        let mut terms: Terms<BigInt, &str> = Terms::new();
        terms.add_term(&Integers, "a", int(2));
        terms.add_term(&Integers, "b", int(1));
        terms.add_term(&Integers, "a", int(-2));
        assert_eq!(terms.len(), 1);
        assert_eq!(terms.get(&"a"), None);
        terms.add_term(&Integers, "c", int(0));
        assert_eq!(terms.len(), 1);
    }

    #[test]
    fn test_render() {
        let mut terms: Terms<BigInt, &str> = Terms::new();
        assert_eq!(terms.render(&Integers, |k| *k, |k| format!("B[{k}]")), "0");
        terms.add_term(&Integers, "b", int(-3));
        terms.add_term(&Integers, "a", int(1));
        terms.add_term(&Integers, "c", int(-1));
        assert_eq!(
            terms.render(&Integers, |k| *k, |k| format!("B[{k}]")),
            "B[a] - 3*B[b] - B[c]"
        );
        let negated = terms.negated(&Integers);
        assert_eq!(
            negated.render(&Integers, |k| *k, |k| format!("B[{k}]")),
            "-B[a] + 3*B[b] + B[c]"
        );
    }

    #[test]
    fn test_render_large_negative_coefficient() {
        let mut terms: Terms<BigInt, &str> = Terms::new();
        terms.add_term(&Integers, "a", int(i64::MIN));
        terms.add_term(&Integers, "a", int(-1));
        assert_eq!(
            terms.render(&Integers, |k| *k, |k| format!("B[{k}]")),
            "-9223372036854775809*B[a]"
        );
    }
}
