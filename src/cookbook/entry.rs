// src/cookbook/entry.rs

//! Cookbook entry model
//!
//! An entry is either an ingredient (leaf, fixed per-unit cook time) or a
//! recipe (composite, referencing other entries by name and quantity).
//! The two-variant closure is a tagged union so every consumption site
//! matches exhaustively; the serde tag is the wire-level `"type"` field.

use serde::{Deserialize, Serialize};

/// A requirement edge from a recipe to another entry.
///
/// `name` is a weak reference resolved by cookbook lookup at summary time;
/// `quantity` is the multiplier applied when expanding through this edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItem {
    pub name: String,
    pub quantity: u64,
}

/// A named cookbook entry.
///
/// Cook time stays signed so a negative payload deserializes cleanly and
/// is rejected with `InvalidCookTime` instead of a serde type error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Entry {
    #[serde(rename_all = "camelCase")]
    Ingredient { name: String, cook_time: i64 },
    #[serde(rename_all = "camelCase")]
    Recipe {
        name: String,
        #[serde(default)]
        required_items: Vec<RequiredItem>,
    },
}

impl Entry {
    /// The unique, case-sensitive cookbook key.
    pub fn name(&self) -> &str {
        match self {
            Entry::Ingredient { name, .. } => name,
            Entry::Recipe { name, .. } => name,
        }
    }

    /// Wire-level type tag for this variant.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Entry::Ingredient { .. } => "ingredient",
            Entry::Recipe { .. } => "recipe",
        }
    }
}
