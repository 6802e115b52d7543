//! Named section storage for one rendering chain.
//!
//! A template marks a region of its output with `start(name)` and
//! `end()`; the captured text is stored here under that name, where
//! any ancestor in the extends chain can read it back. The registry is
//! shared by the whole chain, so a section defined three levels down
//! is visible to the outermost layout.
//!
//! Names are registered once per chain. A second `start` for the same
//! name fails unless the rewrite variant is used, in which case the
//! later `end` replaces the stored content.

use std::collections::HashMap;

use crate::error::{Result, ViewError};

/// Name of the implicit section that carries a child template's whole
/// output to its parent. Explicit sections cannot use it.
pub const CONTENT_SECTION: &str = "content";

/// Section content keyed by name, plus the LIFO of names whose capture
/// is still open.
#[derive(Debug, Default)]
pub(crate) struct SectionRegistry {
    sections: HashMap<String, String>,
    open: Vec<String>,
}

impl SectionRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Registers `name` as the next section to capture.
    ///
    /// The duplicate check happens here; the overwrite itself happens
    /// at [`finish`](Self::finish). The reserved name is rejected with
    /// or without rewrite.
    pub(crate) fn begin(&mut self, name: &str, rewrite: bool) -> Result<()> {
        if name == CONTENT_SECTION {
            return Err(ViewError::ReservedSectionName);
        }
        if !rewrite && self.sections.contains_key(name) {
            return Err(ViewError::DuplicateSection(name.to_string()));
        }
        self.open.push(name.to_string());
        Ok(())
    }

    /// Stores `content` under the most recently begun name, replacing
    /// any previous value. Without an open name the content is dropped.
    pub(crate) fn finish(&mut self, content: String) {
        if let Some(name) = self.open.pop() {
            self.sections.insert(name, content);
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Number of names whose capture is still open.
    pub(crate) fn open_depth(&self) -> usize {
        self.open.len()
    }

    /// Forgets open names above `depth`. Called when a template body
    /// returns with unmatched `start` calls, so a dangling name can
    /// never swallow an ancestor's `end`.
    pub(crate) fn truncate_open(&mut self, depth: usize) {
        self.open.truncate(depth);
    }
}
