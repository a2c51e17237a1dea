//! Errors returned by tree operations.
//!
//! Only malformed input is an error. A key that simply isn't in the tree is reported through
//! `bool`/`Option` return values instead.

/// Errors that can occur when operating on a [`Tree`][crate::Tree] or
/// [`ScapegoatTree`][crate::ScapegoatTree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The key can't be placed in a total order, e.g. `f64::NAN`, or two keys couldn't be
    /// compared with each other.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, Error>;
