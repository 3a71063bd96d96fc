use ahash::{HashMap, HashMapExt};

use crate::policy::TagPolicy;

/// Id uniquely identifying a registered tag.
///
/// Obtained from [`Tags::add_tag`]. Cheap to copy, and stable for the
/// lifetime of the registry that produced it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TagId(u32);

/// Interns tag identifiers and stores the policy belonging to each id.
#[derive(Debug, Clone)]
struct TagLookup {
    by_identifier: HashMap<String, TagId>,
    policies: Vec<TagPolicy>,
}

impl TagLookup {
    fn new() -> TagLookup {
        TagLookup {
            by_identifier: HashMap::new(),
            policies: Vec::new(),
        }
    }

    fn get_id(&self, identifier: &str) -> Option<TagId> {
        self.by_identifier.get(identifier).copied()
    }

    fn get_id_mut(&mut self, identifier: &str) -> TagId {
        if let Some(id) = self.by_identifier.get(identifier) {
            return *id;
        }
        let id = TagId(self.policies.len() as u32);
        self.by_identifier.insert(identifier.to_string(), id);
        self.policies.push(TagPolicy::new(identifier));
        id
    }

    fn policy(&self, id: TagId) -> &TagPolicy {
        &self.policies[id.0 as usize]
    }

    fn policy_mut(&mut self, id: TagId) -> &mut TagPolicy {
        &mut self.policies[id.0 as usize]
    }
}

/// The tag registry. The entry point to this crate.
///
/// `Tags` interns tag identifiers as cheap [`TagId`]s and keeps one
/// [`TagPolicy`] per id; rendering happens through
/// [`Tags::render`](crate::Tags::render) on this struct. Policies are
/// registry-lifetime configuration: mutating one changes every subsequent
/// render of its id.
///
/// Changing a policy needs `&mut Tags` while rendering takes `&Tags`, so
/// configuration and rendering cannot race. To share a registry across
/// threads, wrap it in a lock or clone it per thread.
///
/// ```rust
/// use tagwrap::{Attributes, Tags};
///
/// let mut tags = Tags::new();
/// let strong = tags.add_tag("strong");
/// let rendered = tags.render(strong, &["SO STRONG!".into()], &Attributes::new())?;
/// assert_eq!(rendered.as_str(), "<strong>SO STRONG!</strong>");
/// # Ok::<(), tagwrap::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tags {
    lookup: TagLookup,
}

impl Tags {
    /// Create an empty registry.
    pub fn new() -> Tags {
        Tags {
            lookup: TagLookup::new(),
        }
    }

    /// Get or create the id for `identifier`.
    ///
    /// Any string is accepted and nothing is canonicalized: case is
    /// preserved, and `"SPAN"` and `"span"` are distinct registrations.
    /// The identifier becomes the default [`TagPolicy::tagname`] verbatim.
    /// A new id starts with the default policy; an existing id keeps
    /// whatever policy changes it has accumulated.
    ///
    /// ```rust
    /// use tagwrap::Tags;
    ///
    /// let mut tags = Tags::new();
    /// assert_eq!(tags.add_tag("a"), tags.add_tag("a"));
    /// assert_ne!(tags.add_tag("a"), tags.add_tag("A"));
    /// ```
    pub fn add_tag(&mut self, identifier: &str) -> TagId {
        self.lookup.get_id_mut(identifier)
    }

    /// Look up the id for `identifier` without creating it.
    pub fn tag(&self, identifier: &str) -> Option<TagId> {
        self.lookup.get_id(identifier)
    }

    /// The policy for `tag`.
    pub fn policy(&self, tag: TagId) -> &TagPolicy {
        self.lookup.policy(tag)
    }

    /// Mutable access to the policy for `tag`.
    ///
    /// ```rust
    /// use tagwrap::{Attributes, Replacement, Safe, Tags};
    ///
    /// let mut tags = Tags::new();
    /// let div = tags.add_tag("div");
    /// tags.policy_mut(div).replacement = Replacement::Literal("[gone]".to_string());
    /// let child = Safe::new("<script>x</script>");
    /// let rendered = tags.render(div, &[child.into()], &Attributes::new())?;
    /// assert_eq!(rendered.as_str(), "<div>[gone]x[gone]</div>");
    /// # Ok::<(), tagwrap::Error>(())
    /// ```
    pub fn policy_mut(&mut self, tag: TagId) -> &mut TagPolicy {
        self.lookup.policy_mut(tag)
    }
}

impl Default for Tags {
    fn default() -> Tags {
        Tags::new()
    }
}
