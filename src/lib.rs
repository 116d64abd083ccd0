//! # Burnside
//!
//! Burnside rings of finite permutation groups, and the ring of polynomial
//! species decomposed into molecular species.
//!
//! ## Overview
//!
//! For a finite group `G`, the Burnside ring `B(G)` is the Grothendieck
//! ring of finite `G`-sets: addition is disjoint union and multiplication is
//! the cartesian product with the diagonal action. Every `G`-set splits into
//! orbits and every orbit is isomorphic to `G/H` for a subgroup `H` that is
//! determined up to conjugacy, so `B(G)` is free with one basis element
//! `[H]` per conjugacy class of subgroups.
//!
//! This library provides:
//! - Permutations and permutation groups with a brute-force reference
//!   backend for the group-theoretic primitives
//! - A conjugacy-class cache that turns subgroups into canonical basis keys
//! - Burnside rings with products via double cosets, decomposition of group
//!   actions, tables of marks and tensor products
//! - The graded molecular decomposition ring of polynomial species
//!
//! ## Quick Start
//!
//! ```rust
//! use burnside::prelude::*;
//!
//! let ring = BurnsideRing::new(PermutationGroup::symmetric(3));
//!
//! // S3 acting on {1, 2, 3}: one orbit, stabilizer conjugate to <(2,3)>.
//! let x = ring
//!     .construct_from_action(|g, p: &usize| g.apply(*p), &[1, 2, 3])
//!     .unwrap();
//! let c2 = PermutationGroup::from_generators(vec![Permutation::cycle(&[1, 2]).unwrap()]);
//! assert_eq!(x, ring.basis_element(&c2).unwrap());
//!
//! // X × X splits into the diagonal and the off-diagonal pairs.
//! let trivial = ring.basis_element(&PermutationGroup::trivial(3)).unwrap();
//! assert_eq!(&x * &x, &x + &trivial);
//! ```
//!
//! ## Conventions
//!
//! - Points are `1..=n`; permutations compose as functions, so
//!   `(p * q)(x) = p(q(x))`.
//! - Display follows cycle notation: `B[((1,2),)] + 2*B[1]`.
//!
//! ## Features
//!
//! - `serde`: Serialize permutations, group descriptions and scalars
//! - `parallel`: Scan stabilizers in parallel using rayon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod classes;
pub mod error;
pub mod parallel;
pub mod perm;
pub mod ring;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::RingBuilder;
    pub use crate::classes::{AllSymmetricClasses, ConjugacyClass, ConjugacyClasses};
    pub use crate::error::{Error, Result};
    pub use crate::parallel::ParallelConfig;
    pub use crate::perm::{GroupBackend, NaiveBackend, Permutation, PermutationGroup};
    pub use crate::ring::{
        BaseRing, BurnsideElement, BurnsideRing, ClassRing, Integers,
        PolynomialMolecularDecomposition, PrimeField, Scalar, SpeciesElement,
    };
    pub use crate::utils::{binomial, factorial, is_prime, k_subsets};
}

// Re-export commonly used items at crate root
pub use builder::RingBuilder;
pub use error::{Error, Result};
pub use ring::{BurnsideRing, ClassRing, PolynomialMolecularDecomposition};
