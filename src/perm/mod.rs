//! Permutations, permutation groups and the group-theory backend.
//!
//! ## Overview
//!
//! - [`Permutation`]: a finitary permutation in cycle notation
//! - [`PermutationGroup`]: a subgroup of `S_n` given by generators
//! - [`GroupBackend`]: the group-theoretic queries the ring layer relies on
//! - [`NaiveBackend`]: a brute-force implementation of [`GroupBackend`]
//!
//! ## Example
//!
//! ```
//! use burnside::perm::{GroupBackend, NaiveBackend, Permutation, PermutationGroup};
//!
//! let s3 = PermutationGroup::symmetric(3);
//! let h1 = PermutationGroup::from_generators(vec![Permutation::cycle(&[1, 2]).unwrap()]);
//! let h2 = PermutationGroup::from_generators(vec![Permutation::cycle(&[2, 3]).unwrap()]);
//!
//! assert!(NaiveBackend.is_conjugate(&s3, &h1, &h2));
//! ```

mod backend;
mod group;
mod permutation;

pub use backend::{GroupBackend, NaiveBackend};
pub use group::{GroupDescription, PermutationGroup};
pub use permutation::Permutation;
