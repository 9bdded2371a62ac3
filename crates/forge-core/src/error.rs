//! Typed domain errors
//!
//! Filesystem failures stay as `anyhow` errors with path context; these are the
//! failures that come from validating user input or document shape.

use thiserror::Error;

/// Domain errors raised by the scaffolder and the version bumper
#[derive(Error, Debug)]
pub enum Error {
    /// Version string is not exactly `major.minor.patch`
    #[error("Invalid version format: {0}")]
    InvalidVersion(String),

    /// Incrementing a version component would overflow
    #[error("Cannot bump {1} version of {0}: component would overflow")]
    VersionOverflow(String, &'static str),

    /// Manifest parsed as JSON but is not an object
    #[error("Manifest {0} is not a JSON object")]
    ManifestNotObject(String),

    /// The user aborted an interactive prompt
    #[error("Operation cancelled")]
    Cancelled,

    /// A required prompt answer was empty
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
}
