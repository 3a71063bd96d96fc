use ahash::{HashSet, HashSetExt};

/// What the XSS filter substitutes for a dangerous construct.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// Replace the whole matched construct with a fixed string. The
    /// default uses `(removed)`.
    Literal(String),
    /// Entity-escape the matched construct in place, so it stays visible
    /// as inert text.
    ///
    /// This is what [`Safe`](crate::Safe) children and the composed render
    /// output get. A *plain* child is escaped again after filtering, so a
    /// dangerous construct in plain text ends up double-escaped: it
    /// displays as the literal text `&lt;script&gt;`, not as `<script>`.
    Entities,
}

impl Default for Replacement {
    fn default() -> Replacement {
        Replacement::Literal("(removed)".to_string())
    }
}

/// Per-tag rendering and filtering configuration.
///
/// Every tag id in a [`Tags`](crate::Tags) registry owns one policy,
/// obtained through [`Tags::policy`](crate::Tags::policy) and
/// [`Tags::policy_mut`](crate::Tags::policy_mut). All fields are public;
/// changes apply to every subsequent render of that id.
///
/// ```rust
/// use tagwrap::{Attributes, Tags};
///
/// let mut tags = Tags::new();
/// let br = tags.add_tag("br");
/// tags.policy_mut(br).ending_slash = true;
/// assert_eq!(tags.render(br, &[], &Attributes::new())?.as_str(), "<br />");
/// # Ok::<(), tagwrap::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagPolicy {
    /// The text emitted between `<` and `>`. Defaults to the identifier
    /// the tag was registered under; override it to emit names the
    /// identifier cannot carry, such as `my-widget`.
    pub tagname: String,
    /// Whether an element without children ends in `" />"` instead of
    /// `">"`. Off by default.
    pub ending_slash: bool,
    /// Whether the XSS filter runs. On by default; turning it off renders
    /// exactly what was given, escaped but unfiltered.
    pub safe_mode: bool,
    /// What dangerous constructs are replaced with.
    pub replacement: Replacement,
    /// When non-empty, only tags named here survive filtering and every
    /// other tag is treated as dangerous, replacing the built-in
    /// dangerous-tag list. Entries are expected in lowercase; matching
    /// lowercases the candidate name.
    pub whitelist: HashSet<String>,
    /// Report rejected constructs through `tracing` at WARN level. Off by
    /// default. Never changes the rendered output.
    pub log_rejects: bool,
}

impl TagPolicy {
    /// The default policy for `tagname`: filtering on, `(removed)`
    /// replacement, no whitelist, no ending slash.
    pub fn new(tagname: impl Into<String>) -> TagPolicy {
        TagPolicy {
            tagname: tagname.into(),
            ending_slash: false,
            safe_mode: true,
            replacement: Replacement::default(),
            whitelist: HashSet::new(),
            log_rejects: false,
        }
    }
}
