//! Builder for Burnside rings and the species ring.
//!
//! [`BurnsideRing::new`] covers the common case. The builder is for
//! everything else: a different group backend, another display prefix, or
//! another name for the identity class.
//!
//! # Example
//!
//! ```
//! use burnside::perm::PermutationGroup;
//! use burnside::ring::ClassRing;
//! use burnside::RingBuilder;
//!
//! let ring = RingBuilder::new()
//!     .group(PermutationGroup::symmetric(3))
//!     .prefix("A")
//!     .identity_name("G")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(ring.one().to_string(), "A[G]");
//! assert_eq!(ring.basis().len(), 4);
//! ```

use std::rc::Rc;

use crate::classes::{AllSymmetricClasses, ConjugacyClasses};
use crate::error::{Error, Result};
use crate::perm::{GroupBackend, NaiveBackend, PermutationGroup};
use crate::ring::{BaseRing, BurnsideRing, Integers, PolynomialMolecularDecomposition};

/// Builder for [`BurnsideRing`] and [`PolynomialMolecularDecomposition`].
#[derive(Debug, Clone, Default)]
pub struct RingBuilder {
    group: Option<PermutationGroup>,
    backend: Option<Rc<dyn GroupBackend>>,
    prefix: Option<String>,
    identity_name: Option<String>,
}

impl RingBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambient group. Required for Burnside rings.
    #[must_use]
    pub fn group(mut self, group: PermutationGroup) -> Self {
        self.group = Some(group);
        self
    }

    /// Use `S_n` as the ambient group.
    #[must_use]
    pub fn symmetric(self, n: usize) -> Self {
        self.group(PermutationGroup::symmetric(n))
    }

    /// Set the group backend. Defaults to [`NaiveBackend`].
    #[must_use]
    pub fn backend(mut self, backend: Rc<dyn GroupBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the display prefix of basis elements. Defaults to `B` for
    /// Burnside rings and `PMD` for the species ring.
    #[must_use]
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    /// Set the display name of the class of the whole group. Defaults to
    /// `1`.
    #[must_use]
    pub fn identity_name(mut self, name: &str) -> Self {
        self.identity_name = Some(name.to_string());
        self
    }

    /// Build the Burnside ring over the integers.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no group was given
    /// - the prefix is empty or contains whitespace or brackets
    /// - the identity name is blank
    pub fn build(self) -> Result<BurnsideRing> {
        self.build_with_base_ring(Integers)
    }

    /// Build the Burnside ring with coefficients in `base`.
    ///
    /// # Errors
    ///
    /// As [`build`](Self::build).
    pub fn build_with_base_ring<R: BaseRing>(self, base: R) -> Result<BurnsideRing<R>> {
        let group = self
            .group
            .clone()
            .ok_or_else(|| Error::invalid_params("group must be specified"))?;
        let prefix = self.validated_prefix("B")?;
        let identity_name = self.identity_name.unwrap_or_else(|| "1".to_string());
        if identity_name.trim().is_empty() {
            return Err(Error::InvalidName(identity_name));
        }

        let backend = self.backend.unwrap_or_else(|| Rc::new(NaiveBackend));
        let classes = ConjugacyClasses::with_backend(group, backend);
        Ok(BurnsideRing::from_parts(
            classes,
            base,
            &prefix,
            &identity_name,
        ))
    }

    /// Build the species ring over the integers.
    ///
    /// # Errors
    ///
    /// Returns an error if a group or identity name was given (the species
    /// ring ranges over all symmetric groups), or the prefix is invalid.
    pub fn build_species(self) -> Result<PolynomialMolecularDecomposition> {
        self.build_species_with_base_ring(Integers)
    }

    /// Build the species ring with coefficients in `base`.
    ///
    /// # Errors
    ///
    /// As [`build_species`](Self::build_species).
    pub fn build_species_with_base_ring<R: BaseRing>(
        self,
        base: R,
    ) -> Result<PolynomialMolecularDecomposition<R>> {
        if self.group.is_some() {
            return Err(Error::invalid_params(
                "the species ring is not built over a single group",
            ));
        }
        if self.identity_name.is_some() {
            return Err(Error::invalid_params(
                "the species ring has no identity class to rename",
            ));
        }
        let prefix = self.validated_prefix("PMD")?;
        let backend = self.backend.unwrap_or_else(|| Rc::new(NaiveBackend));
        Ok(PolynomialMolecularDecomposition::from_parts(
            AllSymmetricClasses::with_backend(backend),
            base,
            &prefix,
        ))
    }

    fn validated_prefix(&self, default: &str) -> Result<String> {
        let prefix = self.prefix.as_deref().unwrap_or(default);
        if prefix.is_empty()
            || prefix
                .chars()
                .any(|c| c.is_whitespace() || c == '[' || c == ']')
        {
            return Err(Error::invalid_params(format!(
                "prefix {prefix:?} must be non-empty without whitespace or brackets"
            )));
        }
        Ok(prefix.to_string())
    }
}
