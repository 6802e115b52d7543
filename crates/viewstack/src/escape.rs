//! HTML escaping for template values.
//!
//! Values read out of the render data are escaped by default so that
//! untrusted text cannot inject markup. The encoder covers exactly the
//! five HTML-special characters:
//!
//! | Character | Entity |
//! |-----------|----------|
//! | `&` | `&amp;` |
//! | `<` | `&lt;` |
//! | `>` | `&gt;` |
//! | `"` | `&quot;` |
//! | `'` | `&#039;` |
//!
//! [`unescape_html`] reverses the encoding (accepting both `&#039;` and
//! the shorter `&#39;` for the apostrophe) and is the basis of the
//! raw-access opt-out. Both functions are single-pass, so decoding
//! never cascades: `&amp;lt;` decodes to `&lt;`, not to `<`.

/// Entity sequences recognized by [`unescape_html`], checked in order
/// at each `&`.
const ENTITIES: &[(&str, char)] = &[
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&quot;", '"'),
    ("&#039;", '\''),
    ("&#39;", '\''),
];

/// Encodes HTML-special characters as entities.
///
/// # Example
///
/// ```rust
/// use viewstack::escape_html;
///
/// assert_eq!(
///     escape_html("<b>\"Fish & Chips\"</b>"),
///     "&lt;b&gt;&quot;Fish &amp; Chips&quot;&lt;/b&gt;"
/// );
/// ```
pub fn escape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#039;"),
            _ => output.push(c),
        }
    }
    output
}

/// Decodes the entities produced by [`escape_html`] back to literal
/// characters.
///
/// Unrecognized entities and lone ampersands pass through unchanged.
/// One call undoes one level of encoding:
/// `unescape_html(&escape_html(s)) == s` for every `s`.
pub fn unescape_html(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        output.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES
            .iter()
            .find(|(entity, _)| rest.starts_with(entity))
        {
            Some((entity, ch)) => {
                output.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                output.push('&');
                rest = &rest[1..];
            }
        }
    }
    output.push_str(rest);
    output
}
