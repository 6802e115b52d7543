//! Per-call rendering state.

use serde_json::{Map, Value};

use crate::capture::CaptureStack;
use crate::section::SectionRegistry;

/// Mutable state for one top-level render call.
///
/// A fresh context is created when rendering starts and threaded by
/// mutable reference through the whole extends chain and every nested
/// render, then discarded. That lifetime is what keeps consecutive
/// renders on one engine free of leftover data, sections, or captures.
#[derive(Debug, Default)]
pub(crate) struct RenderContext {
    /// Accumulated template data. Merged into, never replaced.
    pub(crate) data: Map<String, Value>,
    /// Completed template outputs awaiting pickup by a parent.
    pub(crate) content_stack: Vec<String>,
    /// Open output captures.
    pub(crate) captures: CaptureStack,
    /// Named sections captured so far in this chain.
    pub(crate) sections: SectionRegistry,
}

impl RenderContext {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Merges `data` into the context, later keys overwriting earlier
    /// ones. An empty merge is a no-op and never clears existing keys.
    pub(crate) fn merge_data(&mut self, data: Map<String, Value>) {
        if !data.is_empty() {
            self.data.extend(data);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn merge_accumulates_keys() {
        let mut ctx = RenderContext::new();
        ctx.merge_data(map(json!({ "a": 1 })));
        ctx.merge_data(map(json!({ "b": 2 })));

        assert_eq!(ctx.data.get("a"), Some(&json!(1)));
        assert_eq!(ctx.data.get("b"), Some(&json!(2)));
    }

    #[test]
    fn merge_overwrites_same_key() {
        let mut ctx = RenderContext::new();
        ctx.merge_data(map(json!({ "title": "old" })));
        ctx.merge_data(map(json!({ "title": "new" })));

        assert_eq!(ctx.data.get("title"), Some(&json!("new")));
    }

    #[test]
    fn empty_merge_keeps_existing_keys() {
        let mut ctx = RenderContext::new();
        ctx.merge_data(map(json!({ "title": "kept" })));
        ctx.merge_data(Map::new());

        assert_eq!(ctx.data.get("title"), Some(&json!("kept")));
    }
}
