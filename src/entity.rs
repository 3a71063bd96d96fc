use std::borrow::Cow;

/// Convert the characters `&`, `<`, `>`, `"` and `'` into HTML entities.
///
/// The input is scanned in a single pass, so entities introduced by the
/// conversion are never escaped again within one call. Escaping is *not*
/// idempotent across calls: escaping `&lt;` again yields `&amp;lt;`. Wrap
/// text that is already escaped in [`Safe`](crate::Safe) to keep
/// [`Tags::render`](crate::Tags::render) from escaping it a second time.
///
/// Returns the input unchanged, without allocating, if there is nothing to
/// escape.
///
/// ```rust
/// use tagwrap::escape;
///
/// assert_eq!(
///     escape(r#"<b>"fish" & 'chips'</b>"#),
///     "&lt;b&gt;&quot;fish&quot; &amp; &#x27;chips&#x27;&lt;/b&gt;"
/// );
/// ```
pub fn escape(text: &str) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in text.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            // hex form so the output also works inside single-quoted
            // attribute values in XHTML contexts that lack &apos;
            '\'' => {
                entity_seen = true;
                result.push_str("&#x27;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        Cow::Borrowed(text)
    } else {
        result.into()
    }
}
