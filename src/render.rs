use std::borrow::Cow;

use crate::attribute::{normalize_key, valid_name, Attributes};
use crate::entity::escape;
use crate::error::Error;
use crate::filter::{filter, filter_with_rejects, log_rejects};
use crate::policy::TagPolicy;
use crate::safe::{Content, Safe};
use crate::tags::{TagId, Tags};

/// ## Rendering
impl Tags {
    /// Render `tag` with `children` and `attributes` into markup.
    ///
    /// Plain ([`Content::Text`]) children and attribute values are run
    /// through the XSS filter and then entity-escaped; [`Content::Safe`]
    /// values go in verbatim. Attributes are serialized in map order with
    /// keys normalized per [`Attributes`], children in sequence order. An
    /// element with no children closes per [`TagPolicy::ending_slash`].
    ///
    /// When [`TagPolicy::safe_mode`] is on, the composed markup then gets
    /// one whole-markup filter pass. That pass is what catches dangerous
    /// constructs that only exist after composition, a `javascript:` value
    /// becoming dangerous once it sits inside `src="..."` for instance,
    /// and it applies to [`Safe`] children too. It also means the tag
    /// being rendered is itself subject to filtering: rendering a `script`
    /// tag under a default policy neutralizes it.
    ///
    /// The result is `Safe`, so renders nest without double-escaping.
    ///
    /// ```rust
    /// use tagwrap::{Attributes, Tags};
    ///
    /// let mut tags = Tags::new();
    /// let a = tags.add_tag("a");
    /// let mut attributes = Attributes::new();
    /// attributes.insert("href".to_string(), "http://x/".into());
    /// let rendered = tags.render(a, &["text".into()], &attributes)?;
    /// assert_eq!(rendered.as_str(), r#"<a href="http://x/">text</a>"#);
    /// # Ok::<(), tagwrap::Error>(())
    /// ```
    pub fn render(
        &self,
        tag: TagId,
        children: &[Content],
        attributes: &Attributes,
    ) -> Result<Safe, Error> {
        let policy = self.policy(tag);
        if !valid_name(&policy.tagname) {
            return Err(Error::InvalidTagName(policy.tagname.clone()));
        }
        let mut markup = String::new();
        markup.push('<');
        markup.push_str(&policy.tagname);
        for (key, value) in attributes {
            let key = normalize_key(key);
            if !valid_name(&key) {
                return Err(Error::InvalidAttribute(key));
            }
            markup.push(' ');
            markup.push_str(&key);
            markup.push_str("=\"");
            markup.push_str(&processed(value, policy));
            markup.push('"');
        }
        if children.is_empty() {
            if policy.ending_slash {
                markup.push_str(" />");
            } else {
                markup.push('>');
            }
        } else {
            markup.push('>');
            for child in children {
                markup.push_str(&processed(child, policy));
            }
            markup.push_str("</");
            markup.push_str(&policy.tagname);
            markup.push('>');
        }
        if policy.safe_mode {
            let (filtered, rejected) = filter_with_rejects(&markup, policy);
            if policy.log_rejects {
                log_rejects(&policy.tagname, &rejected);
            }
            if let Cow::Owned(filtered) = filtered {
                markup = filtered;
            }
        }
        Ok(Safe::new(markup))
    }

    /// Resolve `identifier` and render it in one call.
    ///
    /// Equivalent to [`Tags::add_tag`] followed by [`Tags::render`], using
    /// whatever policy the identifier's id has.
    ///
    /// ```rust
    /// use tagwrap::{Attributes, Tags};
    ///
    /// let mut tags = Tags::new();
    /// let rendered = tags.wrap("em", &["it".into()], &Attributes::new())?;
    /// assert_eq!(rendered.as_str(), "<em>it</em>");
    /// # Ok::<(), tagwrap::Error>(())
    /// ```
    pub fn wrap(
        &mut self,
        identifier: &str,
        children: &[Content],
        attributes: &Attributes,
    ) -> Result<Safe, Error> {
        let tag = self.add_tag(identifier);
        self.render(tag, children, attributes)
    }
}

/// Filter and escape a plain value; pass `Safe` content through verbatim.
fn processed<'a>(content: &'a Content, policy: &TagPolicy) -> Cow<'a, str> {
    match content {
        Content::Safe(safe) => Cow::Borrowed(safe.as_str()),
        Content::Text(text) => match filter(text, policy) {
            Cow::Borrowed(unchanged) => escape(unchanged),
            Cow::Owned(filtered) => Cow::Owned(escape(&filtered).into_owned()),
        },
    }
}
