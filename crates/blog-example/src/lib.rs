//! A small blog site rendered with viewstack.
//!
//! Everything interesting lives in [`pages`]: the template bodies, the
//! renderer assembly, and the page entry points. The `templates/`
//! directory next to this crate holds the `.view` files that anchor
//! the template tree on disk.

pub mod pages;

pub use pages::{build_renderer, render_home, render_post, sample_posts, Post};
