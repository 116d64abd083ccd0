//! Permutations of `{1, 2, ...}` in cycle notation.
//!
//! A [`Permutation`] is stored by its image list with trailing fixed points
//! dropped, so `(1,2)` compares equal no matter which symmetric group it is
//! considered in. Products compose as functions: `(p * q)(x) = p(q(x))`.

use std::fmt;
use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::lcm;

/// A finitary permutation of the positive integers.
///
/// # Example
///
/// ```
/// use burnside::perm::Permutation;
///
/// let p = Permutation::cycle(&[1, 2, 3]).unwrap();
/// assert_eq!(p.apply(1), 2);
/// assert_eq!(p.apply(3), 1);
/// assert_eq!(p.apply(9), 9);
/// assert_eq!(p.order(), 3);
/// assert_eq!(p.to_string(), "(1,2,3)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct Permutation {
    /// `images[i]` is the 0-based image of the 0-based point `i`.
    images: Vec<usize>,
}

impl Permutation {
    /// The identity permutation.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build a permutation from its 1-based image list: `images[i - 1]` is
    /// the image of `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is not a bijection of `{1, ..., len}`.
    pub fn from_images(images: &[usize]) -> Result<Self> {
        let n = images.len();
        let mut seen = vec![false; n];
        let mut zero_based = Vec::with_capacity(n);
        for &image in images {
            if image == 0 || image > n {
                return Err(Error::PointOutOfRange {
                    point: image,
                    degree: n,
                });
            }
            if seen[image - 1] {
                return Err(Error::invalid_params(format!(
                    "image list {images:?} is not a bijection"
                )));
            }
            seen[image - 1] = true;
            zero_based.push(image - 1);
        }
        Ok(Self::from_zero_based(zero_based))
    }

    /// Build a permutation from a single cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if the cycle contains 0 or repeats a point.
    pub fn cycle(points: &[usize]) -> Result<Self> {
        Self::from_cycles(&[points])
    }

    /// Build a permutation from disjoint cycles.
    ///
    /// ```
    /// use burnside::perm::Permutation;
    ///
    /// let p = Permutation::from_cycles(&[&[1, 2], &[3, 4]]).unwrap();
    /// assert_eq!(p.to_string(), "(1,2)(3,4)");
    /// assert!(Permutation::from_cycles(&[&[1, 2], &[2, 3]]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if any cycle contains 0 or a point appears twice.
    pub fn from_cycles(cycles: &[&[usize]]) -> Result<Self> {
        let degree = cycles
            .iter()
            .flat_map(|c| c.iter().copied())
            .max()
            .unwrap_or(0);
        let mut images: Vec<usize> = (0..degree).collect();
        let mut used = vec![false; degree];

        for cycle in cycles {
            for &point in *cycle {
                if point == 0 {
                    return Err(Error::InvalidCycle {
                        cycle: cycle.to_vec(),
                        message: "points are numbered from 1".into(),
                    });
                }
                if used[point - 1] {
                    return Err(Error::InvalidCycle {
                        cycle: cycle.to_vec(),
                        message: format!("point {point} appears more than once"),
                    });
                }
                used[point - 1] = true;
            }
            for (i, &point) in cycle.iter().enumerate() {
                let next = cycle[(i + 1) % cycle.len()];
                images[point - 1] = next - 1;
            }
        }

        Ok(Self::from_zero_based(images))
    }

    pub(crate) fn from_zero_based(mut images: Vec<usize>) -> Self {
        while let Some(&last) = images.last() {
            if last + 1 == images.len() {
                images.pop();
            } else {
                break;
            }
        }
        Self { images }
    }

    /// Image of the 1-based point `point`. Points beyond the support are
    /// fixed.
    #[must_use]
    pub fn apply(&self, point: usize) -> usize {
        match point.checked_sub(1).and_then(|i| self.images.get(i)) {
            Some(&image) => image + 1,
            None => point,
        }
    }

    /// The largest point moved by this permutation, 0 for the identity.
    #[must_use]
    pub fn largest_moved_point(&self) -> usize {
        self.images.len()
    }

    /// Whether this is the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.images.is_empty()
    }

    /// The inverse permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.images.len()];
        for (i, &j) in self.images.iter().enumerate() {
            inv[j] = i;
        }
        Self { images: inv }
    }

    /// Function composition `self ∘ other`: apply `other` first.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let n = self.images.len().max(other.images.len());
        let images = (0..n)
            .map(|i| {
                let j = other.images.get(i).copied().unwrap_or(i);
                self.images.get(j).copied().unwrap_or(j)
            })
            .collect();
        Self::from_zero_based(images)
    }

    /// The conjugate `g ∘ self ∘ g⁻¹`.
    #[must_use]
    pub fn conjugate_by(&self, g: &Self) -> Self {
        g.compose(self).compose(&g.inverse())
    }

    /// The same permutation acting on `offset + 1, offset + 2, ...` instead
    /// of `1, 2, ...`; points up to `offset` are fixed.
    #[must_use]
    pub fn shifted(&self, offset: usize) -> Self {
        if self.is_identity() {
            return Self::identity();
        }
        let images = (0..offset)
            .chain(self.images.iter().map(|&j| j + offset))
            .collect();
        Self { images }
    }

    /// Nontrivial cycles, each starting at its smallest point, ordered by
    /// that point.
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<usize>> {
        let mut seen = vec![false; self.images.len()];
        let mut cycles = Vec::new();
        for start in 0..self.images.len() {
            if seen[start] || self.images[start] == start {
                continue;
            }
            let mut cycle = Vec::new();
            let mut i = start;
            while !seen[i] {
                seen[i] = true;
                cycle.push(i + 1);
                i = self.images[i];
            }
            cycles.push(cycle);
        }
        cycles
    }

    /// Multiplicative order: the lcm of the cycle lengths.
    #[must_use]
    pub fn order(&self) -> usize {
        self.cycles().iter().map(Vec::len).fold(1, lcm)
    }

    /// Sign of the permutation, `1` for even and `-1` for odd.
    #[must_use]
    pub fn sign(&self) -> i8 {
        let transpositions: usize = self.cycles().iter().map(|c| c.len() - 1).sum();
        if transpositions % 2 == 0 {
            1
        } else {
            -1
        }
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = Error;

    /// Parse a 1-based image list, as produced by the `Vec` conversion.
    fn try_from(images: Vec<usize>) -> Result<Self> {
        Self::from_images(&images)
    }
}

impl From<Permutation> for Vec<usize> {
    /// The 1-based image list up to the largest moved point.
    fn from(p: Permutation) -> Self {
        p.images.into_iter().map(|j| j + 1).collect()
    }
}

impl Mul for &Permutation {
    type Output = Permutation;

    fn mul(self, rhs: Self) -> Permutation {
        self.compose(rhs)
    }
}

impl Mul for Permutation {
    type Output = Permutation;

    fn mul(self, rhs: Self) -> Permutation {
        self.compose(&rhs)
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cycles = self.cycles();
        if cycles.is_empty() {
            return write!(f, "()");
        }
        for cycle in cycles {
            let points: Vec<String> = cycle.iter().map(ToString::to_string).collect();
            write!(f, "({})", points.join(","))?;
        }
        Ok(())
    }
}
