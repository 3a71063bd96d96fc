#![forbid(unsafe_code)]

//! tagwrap wraps strings in HTML tags, escaping unsafe characters and
//! filtering script-capable constructs along the way.
//!
//! Register a tag with [`Tags::add_tag`], then render it with children and
//! attributes:
//!
//! ```rust
//! use tagwrap::{Attributes, Tags};
//!
//! let mut tags = Tags::new();
//! let strong = tags.add_tag("strong");
//! let rendered = tags.render(strong, &["SO STRONG!".into()], &Attributes::new())?;
//! assert_eq!(rendered.as_str(), "<strong>SO STRONG!</strong>");
//! # Ok::<(), tagwrap::Error>(())
//! ```
//!
//! Any identifier works, so custom and namespaced tags need no special
//! support:
//!
//! ```rust
//! use tagwrap::{Attributes, Tags};
//!
//! let mut tags = Tags::new();
//! let rendered = tags.wrap("foobar", &["Custom tag".into()], &Attributes::new())?;
//! assert_eq!(rendered.as_str(), "<foobar>Custom tag</foobar>");
//! # Ok::<(), tagwrap::Error>(())
//! ```
//!
//! # Safety model
//!
//! Rendering treats plain input as data: it is run through [`filter`] and
//! then [`escape`]d, so markup metacharacters always come out as entities.
//! A value wrapped in [`Safe`] is treated as markup instead and goes in
//! verbatim; every render result is itself [`Safe`], which is what lets
//! renders nest without double-escaping:
//!
//! ```rust
//! use tagwrap::{Attributes, Tags};
//!
//! let mut tags = Tags::new();
//! let td = tags.add_tag("td");
//! let tr = tags.add_tag("tr");
//! let cell = tags.render(td, &["100".into()], &Attributes::new())?;
//! let row = tags.render(tr, &[cell.into()], &Attributes::new())?;
//! assert_eq!(row.as_str(), "<tr><td>100</td></tr>");
//! # Ok::<(), tagwrap::Error>(())
//! ```
//!
//! With [`TagPolicy::safe_mode`] on (the default) the composed markup gets
//! a final filter pass, so `Safe` input is still checked for dangerous
//! tags, `on*` event handlers and `javascript:` URIs. What a rejected
//! construct turns into is the policy's [`Replacement`]; a
//! [whitelist](TagPolicy::whitelist) can restrict the allowed tags to a
//! fixed set instead of the built-in dangerous-tag list.
//!
//! # Limitations
//!
//! The filter is a set of patterns, not an HTML parser. It can reject
//! more than strictly necessary, and deliberately mangled markup can slip
//! past it; it is a second line of defense behind escape-by-default, not
//! a sanitizer for wholesale untrusted documents.

mod attribute;
mod entity;
mod error;
mod filter;
mod policy;
#[cfg(feature = "proptest")]
pub mod proptest;
mod render;
mod safe;
mod tags;

pub use attribute::Attributes;
pub use entity::escape;
pub use error::Error;
pub use filter::{filter, filter_with_rejects};
pub use policy::{Replacement, TagPolicy};
pub use safe::{Content, Safe};
pub use tags::{TagId, Tags};
