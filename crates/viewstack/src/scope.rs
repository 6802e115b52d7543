//! The capability surface template bodies see.
//!
//! A body never touches the engine directly. It receives a [`Scope`]
//! borrowing the renderer and the per-call state, and everything a
//! template can do goes through it:
//!
//! - read data: [`get`](Scope::get), [`get_raw`](Scope::get_raw), or
//!   the writing shorthands [`show`](Scope::show) and
//!   [`show_raw`](Scope::show_raw)
//! - produce output: [`write`](Scope::write), or `write!` via the
//!   [`std::fmt::Write`] implementation
//! - capture sections: [`start`](Scope::start),
//!   [`start_rewrite`](Scope::start_rewrite), [`end`](Scope::end)
//! - read sections back: [`section`](Scope::section),
//!   [`content`](Scope::content)
//! - declare a parent: [`extend`](Scope::extend)
//! - pull in other templates: [`render`](Scope::render),
//!   [`render_with`](Scope::render_with), [`include`](Scope::include)
//!
//! # Example
//!
//! ```rust,ignore
//! renderer.add_template("blog.post", |scope: &mut Scope| {
//!     scope.extend("layout");
//!     scope.start("head")?;
//!     scope.write("<meta name=\"robots\" content=\"index\">");
//!     scope.end();
//!     scope.write("<h1>");
//!     scope.show("title");
//!     scope.write("</h1>");
//!     Ok(())
//! });
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::context::RenderContext;
use crate::error::Result;
use crate::escape::{escape_html, unescape_html};
use crate::renderer::{to_data_map, Renderer};
use crate::section::CONTENT_SECTION;

/// Rendering capabilities handed to one template body.
///
/// The scope lives exactly as long as the body runs. State registered
/// on it (the pending parent, the count of sections this body opened)
/// is per invocation, so a nested render can never disturb its
/// caller's registrations.
pub struct Scope<'v> {
    renderer: &'v Renderer,
    ctx: &'v mut RenderContext,
    /// Parent registered by this body; read by the engine after the
    /// body returns. Last call wins.
    pending_extend: Option<String>,
    /// Sections this body opened and has not yet ended.
    open_sections: usize,
}

impl<'v> Scope<'v> {
    pub(crate) fn new(renderer: &'v Renderer, ctx: &'v mut RenderContext) -> Self {
        Self {
            renderer,
            ctx,
            pending_extend: None,
            open_sections: 0,
        }
    }

    pub(crate) fn take_pending_extend(self) -> Option<String> {
        self.pending_extend
    }

    // =========================================================================
    // Data access
    // =========================================================================

    /// Looks up `name` in the render data.
    ///
    /// String values come back HTML-escaped; everything else (numbers,
    /// booleans, arrays, objects) is returned untouched. A missing key
    /// yields [`Value::Null`].
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name, false)
    }

    /// Like [`get`](Self::get), but string values come back with HTML
    /// entities decoded. The opt-out for trusted markup.
    pub fn get_raw(&self, name: &str) -> Value {
        self.lookup(name, true)
    }

    fn lookup(&self, name: &str, raw: bool) -> Value {
        match self.ctx.data.get(name) {
            Some(Value::String(text)) if raw => Value::String(unescape_html(text)),
            Some(Value::String(text)) => Value::String(escape_html(text)),
            Some(other) => other.clone(),
            None => Value::Null,
        }
    }

    /// Writes the value under `name` into the current capture,
    /// HTML-escaped.
    ///
    /// Strings are written as-is (no JSON quoting), other scalars in
    /// their JSON form, and a missing key writes nothing.
    pub fn show(&mut self, name: &str) {
        let value = self.get(name);
        self.write_value(&value);
    }

    /// Like [`show`](Self::show), but without escaping.
    pub fn show_raw(&mut self, name: &str) {
        let value = self.get_raw(name);
        self.write_value(&value);
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => {}
            Value::String(text) => self.ctx.captures.write(text),
            other => self.ctx.captures.write(&other.to_string()),
        }
    }

    // =========================================================================
    // Sections
    // =========================================================================

    /// Begins capturing the section `name`.
    ///
    /// Everything written until the matching [`end`](Self::end) is
    /// stored under `name` instead of the template's own output.
    ///
    /// # Errors
    ///
    /// [`ReservedSectionName`] for the implicit `content` name, and
    /// [`DuplicateSection`] if `name` was already captured in this
    /// chain.
    ///
    /// [`ReservedSectionName`]: crate::ViewError::ReservedSectionName
    /// [`DuplicateSection`]: crate::ViewError::DuplicateSection
    pub fn start(&mut self, name: &str) -> Result<()> {
        self.begin_section(name, false)
    }

    /// Begins capturing `name`, replacing existing content at `end`.
    ///
    /// # Errors
    ///
    /// [`ReservedSectionName`](crate::ViewError::ReservedSectionName)
    /// for the implicit `content` name; duplicates are permitted.
    pub fn start_rewrite(&mut self, name: &str) -> Result<()> {
        self.begin_section(name, true)
    }

    fn begin_section(&mut self, name: &str, rewrite: bool) -> Result<()> {
        self.ctx.sections.begin(name, rewrite)?;
        self.ctx.captures.open();
        self.open_sections += 1;
        Ok(())
    }

    /// Ends the most recently started section, storing its capture.
    ///
    /// Without a matching [`start`](Self::start) in this body the call
    /// does nothing. In particular it never closes a capture it did
    /// not open.
    pub fn end(&mut self) {
        if self.open_sections == 0 {
            return;
        }
        self.open_sections -= 1;
        let captured = self.ctx.captures.close().unwrap_or_default();
        self.ctx.sections.finish(captured);
    }

    /// Returns the stored content of section `name`, or `None`.
    ///
    /// Missing sections are not an error; layouts read them and render
    /// nothing (or a default) when absent. Asking for the reserved
    /// `content` name behaves like [`content`](Self::content).
    pub fn section(&mut self, name: &str) -> Option<String> {
        if name == CONTENT_SECTION {
            return self.content();
        }
        self.ctx.sections.get(name).map(str::to_string)
    }

    /// Takes the most recent child output.
    ///
    /// When a template extends a parent, the child's whole output is
    /// parked for the parent to place. Each call consumes one entry;
    /// `None` when nothing is parked.
    pub fn content(&mut self) -> Option<String> {
        self.ctx.content_stack.pop()
    }

    // =========================================================================
    // Inheritance and nested renders
    // =========================================================================

    /// Declares that this template's output belongs inside `parent`.
    ///
    /// The parent is rendered after this body finishes, with this
    /// template's output available to it via
    /// [`content`](Self::content). Calling `extend` again replaces the
    /// earlier registration.
    pub fn extend(&mut self, parent: impl Into<String>) {
        self.pending_extend = Some(parent.into());
    }

    /// Renders another template and returns its output.
    ///
    /// The nested template shares this call's data and sections but
    /// starts its own extends chain, so partials may themselves extend
    /// wrappers.
    ///
    /// # Errors
    ///
    /// Any [`ViewError`](crate::ViewError) the nested render produces.
    pub fn render(&mut self, name: &str) -> Result<String> {
        self.renderer.render_nested(self.ctx, name, Map::new())
    }

    /// Renders another template with additional data merged in.
    ///
    /// The merge is permanent for the rest of this call, matching the
    /// top-level merge behavior.
    pub fn render_with<D: Serialize>(&mut self, name: &str, data: D) -> Result<String> {
        let data = to_data_map(data)?;
        self.renderer.render_nested(self.ctx, name, data)
    }

    /// Renders another template and writes its output right here.
    pub fn include(&mut self, name: &str) -> Result<()> {
        let rendered = self.render(name)?;
        self.write(&rendered);
        Ok(())
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Writes literal text into the current capture.
    pub fn write(&mut self, text: &str) {
        self.ctx.captures.write(text);
    }
}

impl fmt::Write for Scope<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.ctx.captures.write(s);
        Ok(())
    }
}
