//! Property-based tests for HTML escaping using proptest.

use proptest::prelude::*;
use viewstack::{escape_html, unescape_html};

proptest! {
    /// Unescaping undoes escaping for every string.
    #[test]
    fn roundtrip_returns_original(s in any::<String>()) {
        prop_assert_eq!(unescape_html(&escape_html(&s)), s);
    }

    /// Escaped output carries no markup-significant characters.
    #[test]
    fn escaped_output_has_no_specials(s in any::<String>()) {
        let escaped = escape_html(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    /// Text without special characters passes through both ways.
    #[test]
    fn plain_text_is_untouched(s in "[a-zA-Z0-9 .,!?-]*") {
        prop_assert_eq!(escape_html(&s), s.clone());
        prop_assert_eq!(unescape_html(&s), s);
    }

    /// Each unescape removes exactly one level of encoding.
    #[test]
    fn double_encode_needs_double_decode(s in any::<String>()) {
        let twice = escape_html(&escape_html(&s));
        prop_assert_eq!(unescape_html(&unescape_html(&twice)), s);
    }

    /// Escaping never loses characters.
    #[test]
    fn escaping_never_shrinks(s in any::<String>()) {
        prop_assert!(escape_html(&s).len() >= s.len());
    }
}

// ============================================================================
// Additional edge case tests
// ============================================================================

#[test]
fn empty_string_roundtrips() {
    assert_eq!(escape_html(""), "");
    assert_eq!(unescape_html(""), "");
}

#[test]
fn already_encoded_input_survives_a_roundtrip() {
    // "&amp;" is ordinary text to the encoder; one decode returns it.
    let input = "&amp; &lt; &gt;";
    assert_eq!(escape_html(input), "&amp;amp; &amp;lt; &amp;gt;");
    assert_eq!(unescape_html(&escape_html(input)), input);
}

#[test]
fn both_apostrophe_entities_decode() {
    assert_eq!(unescape_html("&#039;&#39;"), "''");
    // Encoding always emits the long form.
    assert_eq!(escape_html("'"), "&#039;");
}
