use thiserror::Error;

/// Errors that can occur while rendering a tag.
///
/// Escaping and filtering are total and never fail; rendering only fails
/// when a tag or attribute name is structurally unusable.
#[derive(Debug, Error)]
pub enum Error {
    /// An attribute key is empty or contains characters that cannot appear
    /// in an attribute name: whitespace, control characters, or any of
    /// `< > " ' = / &`. The key is reported after normalization.
    #[error("invalid attribute name: {0:?}")]
    InvalidAttribute(String),
    /// The tag name configured in the policy is empty or contains
    /// characters that cannot appear in a tag name.
    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),
}
