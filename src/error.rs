//! Typed errors for proof-builder.
//!
//! Typed builds have no runtime errors: every misuse is rejected by the
//! compiler. These errors belong to the runtime-checked builder, where the
//! pending list is only known while the program runs.

use thiserror::Error;

/// Error from a runtime-checked build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Finalize attempted while required fields are still missing.
    #[error("cannot finalize an incomplete build of {target}: missing required field(s) {}", .missing.join(", "))]
    Incomplete {
        target: &'static str,
        missing: Vec<&'static str>,
    },

    /// The same field was registered as required twice.
    #[error("field '{field}' of {target} is already in the required-field list")]
    DuplicateRequirement {
        target: &'static str,
        field: &'static str,
    },
}

/// Result type alias using proof-builder's [`BuildError`].
pub type BuildResult<T> = std::result::Result<T, BuildError>;
