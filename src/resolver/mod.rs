// src/resolver/mod.rs

//! Recipe summary resolution
//!
//! Expands a root recipe through arbitrarily nested sub-recipes into a
//! total cook time and a flat multiset of base ingredients, with
//! quantities scaled multiplicatively along each path.

mod engine;
mod summary;

pub use engine::Resolver;
pub use summary::{IngredientTotal, Summary};
