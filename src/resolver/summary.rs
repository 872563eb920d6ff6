// src/resolver/summary.rs

//! Summary result types

use serde::{Deserialize, Serialize};

/// One base ingredient in a flattened summary, with its quantity summed
/// across every path that reaches it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientTotal {
    pub name: String,
    pub quantity: u64,
}

/// Flattened resolution of one recipe.
///
/// `ingredients` lists each distinct base ingredient exactly once. The
/// order is not contractual; the engine emits it name-sorted so repeated
/// resolutions of the same store are byte-identical on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub cook_time: u64,
    pub ingredients: Vec<IngredientTotal>,
}
