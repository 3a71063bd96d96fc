use indexmap::IndexMap;

use crate::safe::Content;

/// Attributes for a single render: name to value, serialized in insertion
/// order.
///
/// Keys may be any string. Two conveniences mirror the keyword-argument
/// conventions of dynamic-language tag builders:
///
/// - a single leading underscore is stripped and suppresses any further
///   substitution: `_class` becomes `class`, `_data_x` becomes `data_x`;
/// - otherwise underscores become dashes: `data_foo` becomes `data-foo`.
///
/// Keys without either marker, including keys that already contain dashes,
/// pass through unchanged.
///
/// ```rust
/// use tagwrap::{Attributes, Tags};
///
/// let mut tags = Tags::new();
/// let p = tags.add_tag("p");
/// let mut attributes = Attributes::new();
/// attributes.insert("_class".to_string(), "big".into());
/// attributes.insert("data_foo".to_string(), "1".into());
/// let rendered = tags.render(p, &["x".into()], &attributes)?;
/// assert_eq!(rendered.as_str(), r#"<p class="big" data-foo="1">x</p>"#);
/// # Ok::<(), tagwrap::Error>(())
/// ```
pub type Attributes = IndexMap<String, Content>;

/// Normalize an attribute key; see [`Attributes`].
pub(crate) fn normalize_key(key: &str) -> String {
    if let Some(stripped) = key.strip_prefix('_') {
        stripped.to_string()
    } else if key.contains('_') {
        key.replace('_', "-")
    } else {
        key.to_string()
    }
}

/// Characters that close or break out of a name position inside a tag.
const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', '"', '\'', '=', '/', '&'];

/// A name can be used as a tag or attribute name if it is non-empty and
/// free of whitespace, control characters and delimiters.
pub(crate) fn valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || FORBIDDEN_NAME_CHARS.contains(&c)
        })
}
