use std::borrow::Cow;
use std::fmt;

use crate::entity::escape;

/// A string that is already escaped, or otherwise trusted, and must not be
/// escaped again.
///
/// Every value [`Tags::render`](crate::Tags::render) returns is `Safe`, so
/// render results nest inside other renders without double-escaping. Use
/// [`Safe::new`] to mark your own trusted markup.
///
/// Marking a value `Safe` exempts it from entity escaping and from the
/// per-value XSS filter, but not from the whole-markup filter pass that
/// safe mode applies after composition. See
/// [`Tags::render`](crate::Tags::render).
///
/// ```rust
/// use tagwrap::{Attributes, Safe, Tags};
///
/// let mut tags = Tags::new();
/// let div = tags.add_tag("div");
/// let trusted = Safe::new("<em>already safe</em>");
/// let rendered = tags.render(div, &[trusted.into()], &Attributes::new())?;
/// assert_eq!(rendered.as_str(), "<div><em>already safe</em></div>");
/// # Ok::<(), tagwrap::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Safe(String);

impl Safe {
    /// Mark `text` as pre-escaped.
    pub fn new(text: impl Into<String>) -> Self {
        Safe(text.into())
    }

    /// The markup content, verbatim.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// An entity-escaped view of the content, for display and debugging.
    ///
    /// The `Safe` value itself is unaffected.
    ///
    /// ```rust
    /// use tagwrap::Safe;
    ///
    /// let safe = Safe::new("<b>x</b>");
    /// assert_eq!(safe.escaped(), "&lt;b&gt;x&lt;/b&gt;");
    /// assert_eq!(safe.as_str(), "<b>x</b>");
    /// ```
    pub fn escaped(&self) -> Cow<'_, str> {
        escape(&self.0)
    }
}

impl fmt::Display for Safe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Safe {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Safe> for String {
    fn from(safe: Safe) -> String {
        safe.0
    }
}

// Serializes as the plain content string. Deserialize is deliberately not
// implemented; it would mark arbitrary input as safe.
#[cfg(feature = "serde")]
impl serde::Serialize for Safe {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// A child or attribute value for [`Tags::render`](crate::Tags::render).
///
/// Plain text is run through the XSS filter and entity-escaped; [`Safe`]
/// markup is used verbatim. `&str`, `String` and [`Safe`] all convert with
/// `into()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text, treated as data.
    Text(String),
    /// Pre-escaped markup, treated as markup.
    Safe(Safe),
}

impl From<&str> for Content {
    fn from(text: &str) -> Content {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Content {
        Content::Text(text)
    }
}

impl From<Safe> for Content {
    fn from(safe: Safe) -> Content {
        Content::Safe(safe)
    }
}

impl From<&Safe> for Content {
    fn from(safe: &Safe) -> Content {
        Content::Safe(safe.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let safe = Safe::new("<b>&amp;</b>");
        assert_eq!(safe.to_string(), "<b>&amp;</b>");
    }

    #[test]
    fn test_escaped_view() {
        let safe = Safe::new("a & b");
        assert_eq!(safe.escaped(), "a &amp; b");
        assert_eq!(safe.as_str(), "a & b");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_as_content_string() {
        let safe = Safe::new("<b>x</b>");
        assert_eq!(serde_json::to_string(&safe).unwrap(), r#""<b>x</b>""#);
    }

    #[test]
    fn test_content_conversions() {
        assert_eq!(Content::from("x"), Content::Text("x".to_string()));
        assert_eq!(
            Content::from(Safe::new("x")),
            Content::Safe(Safe::new("x"))
        );
    }
}
