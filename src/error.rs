//! Error taxonomy for the narration pipeline.
//!
//! The numbering core performs no recovery of its own: anything it cannot
//! classify is surfaced to the caller, because a silently misread heading
//! corrupts every outline number after it. Export-side failures (synthesis,
//! filesystem) pass through untouched.

use thiserror::Error;

/// Result type alias using our [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the narration pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// A paragraph style claims to be a heading but its depth suffix is not
    /// a positive integer.
    #[error("style {style:?} looks like a heading but has no usable depth")]
    MalformedHeadingStyle {
        /// The offending style name, verbatim.
        style: String,
    },

    /// The document grammar or query could not be set up, or parsing
    /// produced no tree.
    #[error("document parse error: {0}")]
    Parse(String),

    /// The speech engine template was empty or had unbalanced quoting.
    #[error("unusable speech engine template: {0:?}")]
    EngineTemplate(String),

    /// The speech engine ran but reported failure.
    #[error("speech engine {command:?} failed with {status}")]
    Engine {
        /// The program that was invoked.
        command: String,
        /// Its exit status.
        status: std::process::ExitStatus,
    },

    /// Filesystem or pipe error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Track manifest serialization error.
    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
