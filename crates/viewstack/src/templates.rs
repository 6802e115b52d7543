//! Template bodies and the set that holds them.
//!
//! A template has two halves: a file on disk that anchors its name in
//! the template tree, and an executable body registered here. The file
//! gates rendering (a missing file is [`TemplateNotFound`]); the body
//! produces the output. Keeping the halves separate means the template
//! layout stays visible on disk while the render logic is plain code.
//!
//! [`TemplateNotFound`]: crate::ViewError::TemplateNotFound
//!
//! # Example
//!
//! ```rust
//! use viewstack::{Scope, TemplateSet};
//!
//! let mut set = TemplateSet::new();
//! set.add("greeting", |scope: &mut Scope| {
//!     scope.write("Hello, ");
//!     scope.show("name");
//!     scope.write("!");
//!     Ok(())
//! });
//! assert!(set.contains("greeting"));
//! ```

use std::collections::HashMap;

use crate::error::BodyResult;
use crate::scope::Scope;

/// Executable unit behind a template name.
///
/// Blanket-implemented for closures, so most callers never name this
/// trait. A body receives the current [`Scope`] and writes its output
/// through it; returning an error aborts the render with the cause
/// preserved.
pub trait TemplateBody: Send + Sync {
    /// Runs the body against the current rendering scope.
    fn execute(&self, scope: &mut Scope<'_>) -> BodyResult;
}

impl<F> TemplateBody for F
where
    F: Fn(&mut Scope<'_>) -> BodyResult + Send + Sync,
{
    fn execute(&self, scope: &mut Scope<'_>) -> BodyResult {
        self(scope)
    }
}

/// Registry mapping template names to their bodies.
///
/// Adding a body under an existing name replaces it.
#[derive(Default)]
pub struct TemplateSet {
    bodies: HashMap<String, Box<dyn TemplateBody>>,
}

impl TemplateSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `body` under `name`.
    pub fn add<B>(&mut self, name: impl Into<String>, body: B)
    where
        B: TemplateBody + 'static,
    {
        self.bodies.insert(name.into(), Box::new(body));
    }

    /// Looks up the body registered under `name`.
    pub fn get(&self, name: &str) -> Option<&dyn TemplateBody> {
        self.bodies.get(name).map(|body| body.as_ref())
    }

    /// Returns true if a body is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    /// Returns an iterator over registered template names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.keys().map(String::as_str)
    }

    /// Number of registered bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if no bodies are registered.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
