// src/error.rs

//! Error types for the Gusteau cookbook service
//!
//! Every failure is a deterministic input-validation failure: detected
//! synchronously at the point of violation, surfaced with the offending
//! name, never retried. A rejected operation leaves the cookbook
//! unchanged.

use thiserror::Error;

/// Errors produced by the cookbook, the validation rules and the
/// summary resolver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or missing fields in an entry payload.
    #[error("{0}")]
    InvalidInput(String),

    /// Entry name collision at insertion.
    #[error("Entry name must be unique: '{0}' already exists")]
    DuplicateName(String),

    /// Negative cook time on an ingredient.
    #[error("Invalid cookTime for '{name}': {cook_time} (must be >= 0)")]
    InvalidCookTime { name: String, cook_time: i64 },

    /// Repeated item name within one recipe's requirement list.
    #[error("Recipe '{recipe}' requires item '{item}' more than once")]
    DuplicateRequiredItem { recipe: String, item: String },

    /// Requested name absent from the cookbook.
    #[error("Recipe not found: '{0}'")]
    NotFound(String),

    /// Summary requested for an ingredient name.
    #[error("'{0}' is an ingredient, not a recipe")]
    WrongType(String),

    /// A required item (direct or transitive) does not exist.
    #[error("Missing required item: {0}")]
    MissingReference(String),

    /// A recipe transitively requires itself.
    #[error("Recipe '{0}' transitively requires itself")]
    CyclicReference(String),
}

/// Result type for cookbook operations
pub type Result<T> = std::result::Result<T, Error>;
