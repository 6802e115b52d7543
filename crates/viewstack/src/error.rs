//! Error types for rendering.
//!
//! Everything the engine can fail with is one enum, [`ViewError`].
//! Failures raised inside a template body (including nested render
//! calls) are wrapped as [`ViewError::TemplateExecution`] naming the
//! template, with the original failure reachable through
//! [`source()`](std::error::Error::source).

use std::path::PathBuf;

use thiserror::Error;

/// What a template body fails with.
///
/// Engine errors convert via `?`, and so does any error type an
/// application raises from its own body code.
pub type BodyError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Return type of a template body.
pub type BodyResult = std::result::Result<(), BodyError>;

/// Errors produced by the rendering engine.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The resolved template path is not an existing file.
    #[error("template \"{name}\" not found: file {} does not exist", .path.display())]
    TemplateNotFound {
        /// The dotted template name as requested.
        name: String,
        /// The path the name resolved to.
        path: PathBuf,
    },

    /// The template file exists but no body is registered for it.
    #[error("template \"{0}\" has no registered body")]
    TemplateNotBound(String),

    /// `start` was called with the reserved implicit-section name.
    #[error("the section name \"content\" is reserved")]
    ReservedSectionName,

    /// `start` was called for a name that already has content, without
    /// the rewrite variant.
    #[error("section \"{0}\" already exists")]
    DuplicateSection(String),

    /// A template body failed while executing.
    #[error("error rendering template \"{template}\": {source}")]
    TemplateExecution {
        /// Name of the template whose body failed.
        template: String,
        /// The underlying failure, preserved for inspection.
        #[source]
        source: BodyError,
    },

    /// A template name repeated within one extends chain.
    #[error("cyclic extends chain: {}", .chain.join(" -> "))]
    CyclicExtends {
        /// The chain as walked, ending with the repeated name.
        chain: Vec<String>,
    },

    /// Render data did not serialize to an object.
    #[error("data serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ViewError {
    fn from(err: serde_json::Error) -> Self {
        ViewError::Serialization(err.to_string())
    }
}

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, ViewError>;
