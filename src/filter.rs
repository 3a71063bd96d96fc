use std::borrow::Cow;

use ahash::HashSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::entity::escape;
use crate::policy::{Replacement, TagPolicy};

/// Tag names that can execute or smuggle script content. Matched
/// case-insensitively, opening and closing forms alike, whenever no
/// whitelist is configured.
const DANGEROUS_TAGS: &[&str] = &[
    "applet", "base", "embed", "frame", "frameset", "iframe", "link", "meta",
    "object", "script", "style",
];

/// Attributes whose value is a URI and can therefore carry a
/// `javascript:` scheme.
const URI_ATTRIBUTES: &[&str] = &[
    "href",
    "src",
    "action",
    "formaction",
    "background",
    "xlink:href",
];

static DANGEROUS_TAG_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| DANGEROUS_TAGS.iter().copied().collect());

/// One opening or closing tag, with quoted, single-quoted or bare
/// attribute values and an optional ending slash. Group 1 is the tag name,
/// group 2 the attribute text.
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)</?([a-z][\w-]*)((?:\s+[\w:-]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^'">\s]+))?)*\s*)/?>"#,
    )
    .unwrap()
});

/// An `on*` event-handler assignment inside a tag's attribute text.
static EVENT_HANDLER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\son[\w:-]*\s*=").unwrap());

/// One `name=value` attribute; group 1 is the name, group 2 the raw,
/// possibly quoted, value.
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([\w:-]+)\s*=\s*("[^"]*"|'[^']*'|[^'">\s]+)"#).unwrap());

/// A value starting with a `javascript:` scheme, tolerating the whitespace
/// and control characters commonly interleaved to dodge naive checks.
static JAVASCRIPT_URI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^[\s\x00-\x1f]*j[\s\x00-\x1f]*a[\s\x00-\x1f]*v[\s\x00-\x1f]*a[\s\x00-\x1f]*s[\s\x00-\x1f]*c[\s\x00-\x1f]*r[\s\x00-\x1f]*i[\s\x00-\x1f]*p[\s\x00-\x1f]*t[\s\x00-\x1f]*:",
    )
    .unwrap()
});

fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

fn is_dangerous(name: &str, attribute_text: &str, policy: &TagPolicy) -> bool {
    let name = name.to_ascii_lowercase();
    if policy.whitelist.is_empty() {
        if DANGEROUS_TAG_SET.contains(name.as_str()) {
            return true;
        }
    } else if !policy.whitelist.contains(name.as_str()) {
        return true;
    }
    if EVENT_HANDLER.is_match(attribute_text) {
        return true;
    }
    for capture in ATTRIBUTE.captures_iter(attribute_text) {
        let attribute_name = capture[1].to_ascii_lowercase();
        if !URI_ATTRIBUTES.contains(&attribute_name.as_str()) {
            continue;
        }
        if JAVASCRIPT_URI.is_match(unquote(&capture[2])) {
            return true;
        }
    }
    false
}

/// Neutralize dangerous tags in `markup` according to `policy`.
///
/// A tag is dangerous when its name is on the built-in dangerous-tag list
/// (or, with a [whitelist](TagPolicy::whitelist), not on the whitelist),
/// when it carries an `on*` event-handler attribute, or when a URI
/// attribute such as `href` or `src` starts with a `javascript:` scheme.
/// Each dangerous tag is replaced as a whole, from `<` to `>`, per
/// [`TagPolicy::replacement`]; text between tags is never touched. With
/// [`TagPolicy::safe_mode`] off the input is returned unchanged.
///
/// The filter is pattern-based, not a parser, and stays deliberately
/// simple: it can reject more than strictly necessary and markup mangled
/// beyond what the patterns recognize can get through. Escape-everything
/// remains the default posture; this filter only guards markup that was
/// explicitly marked [`Safe`](crate::Safe) or assembled by rendering.
///
/// ```rust
/// use tagwrap::{filter, TagPolicy};
///
/// let policy = TagPolicy::new("div");
/// let markup = r#"<span>Hold cursor over this: <b onmouseover="alert('pwned!')">Hover me!</b></span>"#;
/// assert_eq!(
///     filter(markup, &policy),
///     "<span>Hold cursor over this: (removed)Hover me!</b></span>"
/// );
/// ```
pub fn filter<'a>(markup: &'a str, policy: &TagPolicy) -> Cow<'a, str> {
    filter_with_rejects(markup, policy).0
}

/// Like [`filter`], additionally returning the rejected constructs in the
/// order they were found, duplicates included.
///
/// ```rust
/// use tagwrap::{filter_with_rejects, TagPolicy};
///
/// let policy = TagPolicy::new("div");
/// let (filtered, rejected) = filter_with_rejects("<script>alert(1)</script>", &policy);
/// assert_eq!(filtered, "(removed)alert(1)(removed)");
/// assert_eq!(rejected, vec!["<script>", "</script>"]);
/// ```
pub fn filter_with_rejects<'a>(
    markup: &'a str,
    policy: &TagPolicy,
) -> (Cow<'a, str>, Vec<String>) {
    if !policy.safe_mode {
        return (Cow::Borrowed(markup), Vec::new());
    }
    let mut rejected = Vec::new();
    let mut result = String::new();
    let mut last = 0;
    for capture in TAG.captures_iter(markup) {
        let matched = capture.get(0).unwrap();
        let attribute_text = capture.get(2).map_or("", |m| m.as_str());
        if !is_dangerous(&capture[1], attribute_text, policy) {
            continue;
        }
        result.push_str(&markup[last..matched.start()]);
        match &policy.replacement {
            Replacement::Literal(replacement) => result.push_str(replacement),
            Replacement::Entities => result.push_str(&escape(matched.as_str())),
        }
        rejected.push(matched.as_str().to_string());
        last = matched.end();
    }
    if rejected.is_empty() {
        (Cow::Borrowed(markup), rejected)
    } else {
        result.push_str(&markup[last..]);
        (Cow::Owned(result), rejected)
    }
}

pub(crate) fn log_rejects(tagname: &str, rejected: &[String]) {
    if !rejected.is_empty() {
        tracing::warn!(tag = tagname, ?rejected, "rejected unsafe markup");
    }
}
