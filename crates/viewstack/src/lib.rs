//! viewstack: a minimal server-side view engine with template
//! inheritance.
//!
//! Templates are named units of render logic. Each one is anchored by
//! a file on disk (dotted names map into directories, so `"blog.post"`
//! is `blog/post.view` under the configured root) and executed as a
//! registered body: a function that receives a [`Scope`] and writes
//! output through it. A template may declare that it extends a parent,
//! and may capture named sections of its output for an ancestor to
//! place; that is the whole layout system.
//!
//! # Quick start
//!
//! ```rust
//! use std::fs;
//! use viewstack::{Renderer, Scope, template_path};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! fs::write(template_path(dir.path(), "hello"), "greeting page")?;
//!
//! let mut renderer = Renderer::new(dir.path());
//! renderer.add_template("hello", |scope: &mut Scope| {
//!     scope.write("Hello, ");
//!     scope.show("name");
//!     scope.write("!");
//!     Ok(())
//! });
//!
//! let page = renderer.render_with("hello", serde_json::json!({ "name": "World" }))?;
//! assert_eq!(page, "Hello, World!");
//! # Ok(())
//! # }
//! ```
//!
//! # Inheritance
//!
//! A child calls [`Scope::extend`]; after its body finishes, the
//! parent is rendered with the child's output parked for it. Inside
//! the parent, [`Scope::content`] takes that output, and
//! [`Scope::section`] reads any named section the child captured with
//! [`Scope::start`]/[`Scope::end`]:
//!
//! ```rust,ignore
//! renderer.add_template("layout", |scope: &mut Scope| {
//!     scope.write("<html><head>");
//!     if let Some(head) = scope.section("head") {
//!         scope.write(&head);
//!     }
//!     scope.write("</head><body>");
//!     if let Some(body) = scope.content() {
//!         scope.write(&body);
//!     }
//!     scope.write("</body></html>");
//!     Ok(())
//! });
//!
//! renderer.add_template("page", |scope: &mut Scope| {
//!     scope.extend("layout");
//!     scope.start("head")?;
//!     scope.write("<title>My page</title>");
//!     scope.end();
//!     scope.write("Welcome!");
//!     Ok(())
//! });
//! ```
//!
//! Chains may be any depth; sections are visible to every ancestor.
//! The name `content` is reserved for the implicit parked output.
//!
//! # Safe by default
//!
//! [`Scope::get`] and [`Scope::show`] HTML-escape string values on the
//! way out; [`Scope::get_raw`] and [`Scope::show_raw`] opt out for
//! trusted fragments. Non-string values pass through untouched.
//!
//! # Errors
//!
//! Everything fails through [`ViewError`]. Failures inside a body are
//! wrapped as [`ViewError::TemplateExecution`] naming the template,
//! with the original cause preserved behind
//! [`source()`](std::error::Error::source).

mod capture;
pub mod config;
mod context;
pub mod error;
pub mod escape;
pub mod prelude;
pub mod renderer;
pub mod resolve;
pub mod scope;
pub mod section;
pub mod templates;

pub use config::ViewConfig;
pub use error::{BodyError, BodyResult, Result, ViewError};
pub use escape::{escape_html, unescape_html};
pub use renderer::Renderer;
pub use resolve::{template_path, TEMPLATE_EXTENSION};
pub use scope::Scope;
pub use section::CONTENT_SECTION;
pub use templates::{TemplateBody, TemplateSet};
