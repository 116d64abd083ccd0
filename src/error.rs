//! Error types for the burnside library.
//!
//! All fallible operations return [`Result`], whose error type is the single
//! [`Error`] enum below. Variants are grouped by the layer that raises them.

use thiserror::Error;

/// The main error type for the burnside library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Permutation Errors ============
    /// A permutation moves a point outside the degree of its group.
    #[error("point {point} is out of range for degree {degree}")]
    PointOutOfRange {
        /// The offending point.
        point: usize,
        /// The degree of the group.
        degree: usize,
    },

    /// A cycle is malformed (point 0, or a point repeated across cycles).
    #[error("invalid cycle {cycle:?}: {message}")]
    InvalidCycle {
        /// The cycle as given.
        cycle: Vec<usize>,
        /// What is wrong with it.
        message: String,
    },

    // ============ Subgroup Errors ============
    /// The value is not a subgroup of the relevant ambient group.
    #[error("unable to convert {subgroup} into {target}: not a subgroup of {ambient}")]
    NotASubgroup {
        /// Display form of the rejected group.
        subgroup: String,
        /// Display form of the index set or ring that rejected it.
        target: String,
        /// Display form of the ambient group.
        ambient: String,
    },

    /// A display name is not usable text.
    #[error("name must be a non-empty string, got {0:?}")]
    InvalidName(String),

    // ============ Ring Errors ============
    /// A scalar has no image in the coefficient ring.
    #[error("cannot coerce {scalar} into {ring}")]
    Uncoercible {
        /// Display form of the scalar.
        scalar: String,
        /// Display form of the coefficient ring.
        ring: String,
    },

    /// Two elements from different rings were combined.
    #[error("elements belong to different rings: {left} and {right}")]
    RingMismatch {
        /// The ring of the left operand.
        left: String,
        /// The ring of the right operand.
        right: String,
    },

    /// The requested coefficient field order is not prime.
    #[error("order {0} is not prime")]
    NotPrime(u32),

    // ============ Backend Errors ============
    /// The backend does not provide the requested computation.
    #[error("{feature} is not implemented by {provider}")]
    NotImplemented {
        /// The missing capability.
        feature: &'static str,
        /// Name of the backend.
        provider: String,
    },

    // ============ Parameter Validation Errors ============
    /// Invalid parameters for a constructor, builder or action.
    #[error("invalid parameters: {message}")]
    InvalidParams {
        /// Description of what is invalid.
        message: String,
    },
}

/// A specialized `Result` type for burnside operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidParams` error.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams {
            message: message.into(),
        }
    }

    /// Create a new `NotASubgroup` error from display forms.
    #[must_use]
    pub fn not_a_subgroup(
        subgroup: impl ToString,
        target: impl ToString,
        ambient: impl ToString,
    ) -> Self {
        Self::NotASubgroup {
            subgroup: subgroup.to_string(),
            target: target.to_string(),
            ambient: ambient.to_string(),
        }
    }

    /// Create a new `Uncoercible` error from display forms.
    #[must_use]
    pub fn uncoercible(scalar: impl ToString, ring: impl ToString) -> Self {
        Self::Uncoercible {
            scalar: scalar.to_string(),
            ring: ring.to_string(),
        }
    }
}
