//! One-stop imports for applications.
//!
//! ```rust,ignore
//! use viewstack::prelude::*;
//! ```

pub use crate::config::ViewConfig;
pub use crate::error::{BodyError, BodyResult, Result, ViewError};
pub use crate::escape::{escape_html, unescape_html};
pub use crate::renderer::Renderer;
pub use crate::resolve::{template_path, TEMPLATE_EXTENSION};
pub use crate::scope::Scope;
pub use crate::section::CONTENT_SECTION;
pub use crate::templates::{TemplateBody, TemplateSet};
