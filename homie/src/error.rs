use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The supplied ID cannot be used as a topic path segment. IDs must
    /// be non-empty, contain only ASCII letters, digits or hyphens, and
    /// neither start nor end with a hyphen.
    #[error("invalid identifier '{0}'")]
    InvalidId(String),
}
