//! Proptest support for tagwrap
//!
//! Proptests allow you to test for *properties* of your code that must hold
//! for arbitrary data. tagwrap helps you write a proptest by letting you
//! generate arbitrary, frequently hostile, markup and filter policies.
//!
//! This can be enabled by adding the `proptest` feature to your
//! `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tagwrap = { version = "0.5", features = ["proptest"] }
//! ```
//!
//! See the [`proptest`](https://docs.rs/proptest/latest/proptest/)
//! documentation for more information.

use proptest::prelude::*;

use crate::policy::{Replacement, TagPolicy};

const TAG_NAMES: &[&str] = &[
    "a", "b", "div", "span", "script", "SCRIPT", "iframe", "style", "my-widget", "IMG",
];
const ATTRIBUTE_NAMES: &[&str] = &["href", "src", "id", "class", "onclick", "onmouseover"];
const ATTRIBUTE_VALUES: &[&str] = &[
    "http://example.com/",
    "/relative",
    "javascript:alert(1)",
    "JaVaScRiPt:alert(1)",
    "java\tscript:alert(1)",
    "plain words",
];

/// Arbitrary text content, printable ASCII including markup
/// metacharacters.
pub fn arb_text() -> impl Strategy<Value = String> {
    "[ -~]{0,40}"
}

/// Arbitrary single tag: opening with one attribute, or closing.
pub fn arb_tag() -> impl Strategy<Value = String> {
    (
        prop::sample::select(TAG_NAMES),
        prop::sample::select(ATTRIBUTE_NAMES),
        prop::sample::select(ATTRIBUTE_VALUES),
        prop::bool::ANY,
    )
        .prop_map(|(name, attribute, value, closing)| {
            if closing {
                format!("</{}>", name)
            } else {
                format!("<{} {}=\"{}\">", name, attribute, value)
            }
        })
}

/// Arbitrary markup: text and tags interleaved.
pub fn arb_markup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![arb_text(), arb_tag()], 0..8)
        .prop_map(|pieces| pieces.concat())
}

/// Arbitrary policy, varying safe mode, ending slash, replacement and
/// whitelist.
pub fn arb_policy() -> impl Strategy<Value = TagPolicy> {
    (
        prop::bool::ANY,
        prop::bool::ANY,
        prop_oneof![
            Just(Replacement::Entities),
            "[ -~]{0,10}".prop_map(Replacement::Literal),
        ],
        prop::collection::vec(
            prop::sample::select(TAG_NAMES).prop_map(str::to_ascii_lowercase),
            0..4,
        ),
    )
        .prop_map(|(safe_mode, ending_slash, replacement, whitelist)| {
            let mut policy = TagPolicy::new("div");
            policy.safe_mode = safe_mode;
            policy.ending_slash = ending_slash;
            policy.replacement = replacement;
            policy.whitelist = whitelist.into_iter().collect();
            policy
        })
}
