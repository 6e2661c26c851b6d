//! Core type definitions for Everything.
//!
//! This crate defines the small, schema-agnostic types every other crate
//! in the workspace agrees on:
//! - [`Kind`]: the wire discriminant carried by every envelope (`t1`, `t3`, `Listing`, ...)
//! - [`Fullname`]: the platform's `<prefix>_<id>` identifier
//!
//! Entity schemas, envelopes and merging live in `everything-model`.

mod fullname;
mod kind;

pub use fullname::Fullname;
pub use kind::Kind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing kinds and identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown kind tag: {0}")]
    UnknownKind(String),

    #[error("kind {0} has no fullname prefix")]
    NoFullnamePrefix(Kind),

    #[error("invalid fullname: {0}")]
    InvalidFullname(String),
}
