//! Nested output captures.
//!
//! Every render call and every `start`/`end` section pair buffers its
//! output instead of streaming it, so a template's text can be handed
//! around as a string. Captures nest: opening one redirects all writes
//! to it until it is closed, at which point the previous capture
//! becomes the write target again.

/// LIFO stack of open output buffers.
///
/// Writes always land in the top buffer. The engine records the depth
/// before running a template body and restores it afterwards, so an
/// unbalanced body cannot leak captures into its caller.
#[derive(Debug, Default)]
pub(crate) struct CaptureStack {
    buffers: Vec<String>,
}

impl CaptureStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Opens a fresh capture on top of the stack.
    pub(crate) fn open(&mut self) {
        self.buffers.push(String::new());
    }

    /// Closes the top capture and returns its content, or `None` if
    /// nothing is open.
    pub(crate) fn close(&mut self) -> Option<String> {
        self.buffers.pop()
    }

    /// Closes the top capture and drops its content.
    pub(crate) fn discard(&mut self) {
        self.buffers.pop();
    }

    /// Appends text to the top capture. Dropped if nothing is open.
    pub(crate) fn write(&mut self, text: &str) {
        if let Some(top) = self.buffers.last_mut() {
            top.push_str(text);
        }
    }

    /// Number of open captures.
    pub(crate) fn depth(&self) -> usize {
        self.buffers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_go_to_top_capture() {
        let mut stack = CaptureStack::new();
        stack.open();
        stack.write("outer ");
        stack.open();
        stack.write("inner");

        assert_eq!(stack.close(), Some("inner".to_string()));
        stack.write("resumed");
        assert_eq!(stack.close(), Some("outer resumed".to_string()));
    }

    #[test]
    fn test_close_without_open() {
        let mut stack = CaptureStack::new();
        assert_eq!(stack.close(), None);
    }

    #[test]
    fn test_write_without_open_is_dropped() {
        let mut stack = CaptureStack::new();
        stack.write("nowhere to go");
        assert_eq!(stack.depth(), 0);

        stack.open();
        assert_eq!(stack.close(), Some(String::new()));
    }

    #[test]
    fn test_discard_drops_content() {
        let mut stack = CaptureStack::new();
        stack.open();
        stack.write("kept");
        stack.open();
        stack.write("thrown away");
        stack.discard();

        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.close(), Some("kept".to_string()));
    }

    #[test]
    fn test_depth_tracks_open_captures() {
        let mut stack = CaptureStack::new();
        assert_eq!(stack.depth(), 0);
        stack.open();
        stack.open();
        assert_eq!(stack.depth(), 2);
        stack.discard();
        assert_eq!(stack.depth(), 1);
    }
}
