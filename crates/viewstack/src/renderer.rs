//! The rendering engine.
//!
//! [`Renderer`] owns the two immutable halves of a site: the
//! configuration saying where template files live, and the
//! [`TemplateSet`] of executable bodies. Rendering itself takes
//! `&self`; every call builds a fresh [`RenderContext`] and threads it
//! through the extends chain, so one engine can serve many calls (and
//! many threads) without any cross-talk.
//!
//! # Rendering one template
//!
//! For each template in a chain the engine:
//!
//! 1. refuses names already seen in this chain (cyclic extends)
//! 2. merges the call's data into the context (non-empty merges only)
//! 3. opens an output capture and runs the body
//! 4. on success, discards captures from unmatched `start` calls and
//!    closes its own capture; on failure, discards everything it
//!    opened and propagates the error
//! 5. if the body declared a parent, parks the output on the content
//!    stack and renders the parent through the same steps
//!
//! The result of the outermost template in the chain is the result of
//! the call.
//!
//! # Example
//!
//! ```rust,ignore
//! use viewstack::{Renderer, Scope};
//!
//! let mut renderer = Renderer::new("./templates");
//! renderer.add_template("home", |scope: &mut Scope| {
//!     scope.write("<h1>");
//!     scope.show("title");
//!     scope.write("</h1>");
//!     Ok(())
//! });
//!
//! let html = renderer.render_with("home", serde_json::json!({ "title": "Hi" }))?;
//! ```

use std::path::PathBuf;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ViewConfig;
use crate::context::RenderContext;
use crate::error::{Result, ViewError};
use crate::resolve::template_path;
use crate::scope::Scope;
use crate::templates::{TemplateBody, TemplateSet};

/// The template rendering engine.
pub struct Renderer {
    config: Box<dyn ViewConfig + Send + Sync>,
    templates: TemplateSet,
}

impl Renderer {
    /// Creates an engine serving templates from a fixed directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root.into())
    }

    /// Creates an engine with custom configuration.
    pub fn with_config<C>(config: C) -> Self
    where
        C: ViewConfig + Send + Sync + 'static,
    {
        Self {
            config: Box::new(config),
            templates: TemplateSet::new(),
        }
    }

    /// Registers a template body. See [`TemplateSet::add`].
    pub fn add_template<B>(&mut self, name: impl Into<String>, body: B)
    where
        B: TemplateBody + 'static,
    {
        self.templates.add(name, body);
    }

    /// The registered template bodies.
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Number of registered template bodies.
    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    /// Renders `name` without data.
    ///
    /// # Errors
    ///
    /// See [`render_with`](Self::render_with).
    pub fn render(&self, name: &str) -> Result<String> {
        self.render_with(name, ())
    }

    /// Renders `name` with `data` available to the whole chain.
    ///
    /// `data` must serialize to an object (or to null, which counts as
    /// no data). Each key becomes readable through
    /// [`Scope::get`](crate::Scope::get) in this template, its
    /// ancestors, and anything it renders.
    ///
    /// # Errors
    ///
    /// [`ViewError::TemplateNotFound`] when the resolved file is
    /// missing, [`ViewError::TemplateNotBound`] when no body is
    /// registered, [`ViewError::TemplateExecution`] when a body fails,
    /// [`ViewError::CyclicExtends`] on a circular chain, and
    /// [`ViewError::Serialization`] when `data` has the wrong shape.
    #[tracing::instrument(skip(self, data))]
    pub fn render_with<D: Serialize>(&self, name: &str, data: D) -> Result<String> {
        let data = to_data_map(data)?;
        let mut ctx = RenderContext::new();
        let mut chain = Vec::new();
        self.render_node(&mut ctx, &mut chain, name, data)
    }

    /// Full render of `name` inside an already-running call. Shares
    /// the context but starts its own extends chain.
    pub(crate) fn render_nested(
        &self,
        ctx: &mut RenderContext,
        name: &str,
        data: Map<String, Value>,
    ) -> Result<String> {
        let mut chain = Vec::new();
        self.render_node(ctx, &mut chain, name, data)
    }

    /// Renders one template of a chain and, if it extends a parent,
    /// the rest of the chain after it.
    fn render_node(
        &self,
        ctx: &mut RenderContext,
        chain: &mut Vec<String>,
        name: &str,
        data: Map<String, Value>,
    ) -> Result<String> {
        if chain.iter().any(|seen| seen == name) {
            let mut cycle = chain.clone();
            cycle.push(name.to_string());
            return Err(ViewError::CyclicExtends { chain: cycle });
        }
        chain.push(name.to_string());

        ctx.merge_data(data);

        let capture_baseline = ctx.captures.depth();
        let section_mark = ctx.sections.open_depth();
        ctx.captures.open();

        let parent = match self.execute_body(ctx, name) {
            Ok(parent) => {
                // Unmatched start() calls leave captures behind; their
                // content is dropped, never stored or emitted.
                while ctx.captures.depth() > capture_baseline + 1 {
                    ctx.captures.discard();
                }
                ctx.sections.truncate_open(section_mark);
                parent
            }
            Err(err) => {
                while ctx.captures.depth() > capture_baseline {
                    ctx.captures.discard();
                }
                ctx.sections.truncate_open(section_mark);
                return Err(err);
            }
        };

        let own_output = ctx.captures.close().unwrap_or_default();

        match parent {
            Some(parent_name) => {
                tracing::trace!(template = name, parent = %parent_name, "extends");
                ctx.content_stack.push(own_output);
                self.render_node(ctx, chain, &parent_name, Map::new())
            }
            None => Ok(own_output),
        }
    }

    /// Resolves `name`, checks the template file, and runs the body.
    /// Returns the parent name the body registered, if any.
    #[tracing::instrument(level = "trace", skip(self, ctx))]
    fn execute_body(&self, ctx: &mut RenderContext, name: &str) -> Result<Option<String>> {
        let path = template_path(&self.config.template_root(), name);
        if !path.is_file() {
            return Err(ViewError::TemplateNotFound {
                name: name.to_string(),
                path,
            });
        }
        let body = self
            .templates
            .get(name)
            .ok_or_else(|| ViewError::TemplateNotBound(name.to_string()))?;

        let mut scope = Scope::new(self, ctx);
        match body.execute(&mut scope) {
            Ok(()) => Ok(scope.take_pending_extend()),
            Err(source) => Err(ViewError::TemplateExecution {
                template: name.to_string(),
                source,
            }),
        }
    }
}

/// Converts render data into the context's map form.
pub(crate) fn to_data_map<D: Serialize>(data: D) -> Result<Map<String, Value>> {
    match serde_json::to_value(data)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(ViewError::Serialization(format!(
            "template data must be an object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
