// src/lib.rs

//! Gusteau Cookbook Service
//!
//! Small HTTP service managing a cookbook of named entries, each either
//! an ingredient (leaf, fixed cook time) or a recipe (composite,
//! referencing sub-entries by name and quantity). The core is the
//! summary resolver: recursive bill-of-materials expansion of a recipe
//! into total cook time and flattened base-ingredient quantities.
//!
//! # Architecture
//!
//! - Sum-typed entries: the ingredient/recipe closure is an enum, matched
//!   exhaustively at every consumption site
//! - Owned store: the cookbook is injected into the server state, not
//!   ambient global state; entries are write-once per name
//! - Recursive resolution: depth-first descent with multiplicative
//!   quantity scaling; missing references and cycles abort wholesale

pub mod cookbook;
mod error;
pub mod name;
pub mod resolver;
pub mod server;

pub use cookbook::{Cookbook, Entry, RequiredItem};
pub use error::{Error, Result};
pub use resolver::{IngredientTotal, Resolver, Summary};
pub use server::{ServerConfig, ServerState, run_server};
