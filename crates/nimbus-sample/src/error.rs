//! # Cloud Errors
//!
//! Failures reported by the sample resource constructors. The builder hands these back
//! to the caller exactly as the constructor produced them.

use crate::stack::Urn;

/// Errors raised while recording a resource in a [`Stack`](crate::stack::Stack).
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    #[error("invalid resource name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },
    #[error("resource {0} is already registered")]
    DuplicateUrn(Urn),
    #[error("unknown dependency {0}")]
    UnknownDependency(Urn),
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },
    #[error("failed to record resource inputs: {0}")]
    Serialization(#[from] serde_json::Error),
}
