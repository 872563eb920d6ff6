// src/resolver/engine.rs

//! Summary resolver implementation
//!
//! Depth-first recursive descent over the cookbook. For each requirement
//! edge the quantity acts as a multiplier: sub-recipe cook times and
//! ingredient counts are scaled by it before being merged into the
//! parent's totals. Any missing reference anywhere in the transitive
//! closure aborts the whole resolution; there is no partial summary.

use std::collections::BTreeMap;

use tracing::debug;

use crate::cookbook::{Cookbook, Entry, RequiredItem};
use crate::error::{Error, Result};

use super::summary::{IngredientTotal, Summary};

/// Accumulated expansion of one recipe subtree: total cook time plus a
/// count per base-ingredient name.
type Expansion = (u64, BTreeMap<String, u64>);

/// Summary resolver over a cookbook snapshot.
///
/// Resolution is a pure, synchronous function of the borrowed store: for
/// a fixed store state, identical root names yield identical summaries.
pub struct Resolver<'a> {
    cookbook: &'a Cookbook,
}

impl<'a> Resolver<'a> {
    /// Create a resolver borrowing the given cookbook
    pub fn new(cookbook: &'a Cookbook) -> Self {
        Self { cookbook }
    }

    /// Resolve `root_name` into a flattened summary.
    ///
    /// Fails with:
    /// - `NotFound` if the name is absent from the cookbook
    /// - `WrongType` if it names an ingredient
    /// - `MissingReference` if any direct or transitive requirement is
    ///   absent, naming the first missing item encountered
    /// - `CyclicReference` if a recipe transitively requires itself
    pub fn summarize(&self, root_name: &str) -> Result<Summary> {
        let entry = self
            .cookbook
            .lookup(root_name)
            .ok_or_else(|| Error::NotFound(root_name.to_string()))?;

        let Entry::Recipe {
            name,
            required_items,
        } = entry
        else {
            return Err(Error::WrongType(root_name.to_string()));
        };

        let mut path = Vec::new();
        let (cook_time, counts) = self.expand(name, required_items, &mut path)?;

        debug!(
            "Resolved '{}': cook time {}, {} distinct ingredients",
            name,
            cook_time,
            counts.len()
        );

        Ok(Summary {
            name: name.clone(),
            cook_time,
            ingredients: counts
                .into_iter()
                .map(|(name, quantity)| IngredientTotal { name, quantity })
                .collect(),
        })
    }

    /// Expand one recipe's requirement list.
    ///
    /// `path` holds the chain of in-progress recipe names; re-entering
    /// one of them means the stored graph has a cycle and recursing would
    /// never terminate.
    fn expand(
        &self,
        recipe_name: &str,
        required_items: &[RequiredItem],
        path: &mut Vec<String>,
    ) -> Result<Expansion> {
        path.push(recipe_name.to_string());

        let mut total_cook_time: u64 = 0;
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();

        for item in required_items {
            match self.cookbook.lookup(&item.name) {
                None => return Err(Error::MissingReference(item.name.clone())),
                Some(Entry::Ingredient { cook_time, .. }) => {
                    // cook_time is >= 0 by the insertion invariant
                    total_cook_time += *cook_time as u64 * item.quantity;
                    *counts.entry(item.name.clone()).or_insert(0) += item.quantity;
                }
                Some(Entry::Recipe {
                    name,
                    required_items: sub_items,
                }) => {
                    if path.iter().any(|seen| seen == name) {
                        return Err(Error::CyclicReference(name.clone()));
                    }
                    let (sub_cook_time, sub_counts) = self.expand(name, sub_items, path)?;
                    total_cook_time += sub_cook_time * item.quantity;
                    for (sub_name, sub_quantity) in sub_counts {
                        *counts.entry(sub_name).or_insert(0) += sub_quantity * item.quantity;
                    }
                }
            }
        }

        path.pop();
        Ok((total_cook_time, counts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, cook_time: i64) -> Entry {
        Entry::Ingredient {
            name: name.to_string(),
            cook_time,
        }
    }

    fn recipe(name: &str, items: &[(&str, u64)]) -> Entry {
        Entry::Recipe {
            name: name.to_string(),
            required_items: items
                .iter()
                .map(|(n, q)| RequiredItem {
                    name: n.to_string(),
                    quantity: *q,
                })
                .collect(),
        }
    }

    fn totals(summary: &Summary) -> Vec<(&str, u64)> {
        summary
            .ingredients
            .iter()
            .map(|i| (i.name.as_str(), i.quantity))
            .collect()
    }

    #[test]
    fn test_empty_recipe_has_zero_cook_time() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(recipe("Air Soup", &[])).unwrap();

        let summary = Resolver::new(&cookbook).summarize("Air Soup").unwrap();
        assert_eq!(summary.name, "Air Soup");
        assert_eq!(summary.cook_time, 0);
        assert!(summary.ingredients.is_empty());
    }

    #[test]
    fn test_flat_recipe_weighted_by_quantity() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(ingredient("A", 5)).unwrap();
        cookbook.insert(ingredient("B", 3)).unwrap();
        cookbook
            .insert(recipe("Plate", &[("A", 2), ("B", 1)]))
            .unwrap();

        let summary = Resolver::new(&cookbook).summarize("Plate").unwrap();
        assert_eq!(summary.cook_time, 13);
        assert_eq!(totals(&summary), vec![("A", 2), ("B", 1)]);
    }

    #[test]
    fn test_nested_recipe_scales_multiplicatively() {
        // R1 -> 3 x R2, R2 -> 2 x C (cook time 2)
        let mut cookbook = Cookbook::new();
        cookbook.insert(ingredient("C", 2)).unwrap();
        cookbook.insert(recipe("R2", &[("C", 2)])).unwrap();
        cookbook.insert(recipe("R1", &[("R2", 3)])).unwrap();

        let summary = Resolver::new(&cookbook).summarize("R1").unwrap();
        assert_eq!(summary.cook_time, 12);
        assert_eq!(totals(&summary), vec![("C", 6)]);
    }

    #[test]
    fn test_diamond_counts_sum_across_paths() {
        // R -> R2 and R3; both require one D
        let mut cookbook = Cookbook::new();
        cookbook.insert(ingredient("D", 1)).unwrap();
        cookbook.insert(recipe("R2", &[("D", 1)])).unwrap();
        cookbook.insert(recipe("R3", &[("D", 1)])).unwrap();
        cookbook
            .insert(recipe("R", &[("R2", 1), ("R3", 1)]))
            .unwrap();

        let summary = Resolver::new(&cookbook).summarize("R").unwrap();
        assert_eq!(totals(&summary), vec![("D", 2)]);
    }

    #[test]
    fn test_shared_ingredient_merges_direct_and_nested() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(ingredient("Egg", 6)).unwrap();
        cookbook.insert(recipe("Batter", &[("Egg", 2)])).unwrap();
        cookbook
            .insert(recipe("Cake", &[("Batter", 2), ("Egg", 1)]))
            .unwrap();

        let summary = Resolver::new(&cookbook).summarize("Cake").unwrap();
        // 2 batters of 2 eggs each, plus one egg on top
        assert_eq!(totals(&summary), vec![("Egg", 5)]);
        assert_eq!(summary.cook_time, 30);
    }

    #[test]
    fn test_unknown_name_is_not_found() {
        let cookbook = Cookbook::new();
        let err = Resolver::new(&cookbook).summarize("Ghost").unwrap_err();
        assert_eq!(err, Error::NotFound("Ghost".to_string()));
    }

    #[test]
    fn test_ingredient_name_is_wrong_type() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(ingredient("Beef", 5)).unwrap();
        let err = Resolver::new(&cookbook).summarize("Beef").unwrap_err();
        assert_eq!(err, Error::WrongType("Beef".to_string()));
    }

    #[test]
    fn test_missing_reference_names_the_missing_item() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(recipe("Stew", &[("Unicorn", 1)])).unwrap();
        let err = Resolver::new(&cookbook).summarize("Stew").unwrap_err();
        assert_eq!(err, Error::MissingReference("Unicorn".to_string()));
    }

    #[test]
    fn test_missing_transitive_reference_is_detected() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(recipe("Inner", &[("Unicorn", 1)])).unwrap();
        cookbook.insert(recipe("Outer", &[("Inner", 2)])).unwrap();
        let err = Resolver::new(&cookbook).summarize("Outer").unwrap_err();
        assert_eq!(err, Error::MissingReference("Unicorn".to_string()));
    }

    #[test]
    fn test_self_cycle_is_rejected() {
        let mut cookbook = Cookbook::new();
        cookbook
            .insert(recipe("Ouroboros", &[("Ouroboros", 1)]))
            .unwrap();
        let err = Resolver::new(&cookbook).summarize("Ouroboros").unwrap_err();
        assert_eq!(err, Error::CyclicReference("Ouroboros".to_string()));
    }

    #[test]
    fn test_mutual_cycle_is_rejected() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(recipe("Ping", &[("Pong", 1)])).unwrap();
        cookbook.insert(recipe("Pong", &[("Ping", 1)])).unwrap();
        let err = Resolver::new(&cookbook).summarize("Ping").unwrap_err();
        assert_eq!(err, Error::CyclicReference("Ping".to_string()));
    }

    #[test]
    fn test_repeated_subtree_is_not_a_cycle() {
        // The same sub-recipe appearing on two sibling paths is a diamond,
        // not a cycle.
        let mut cookbook = Cookbook::new();
        cookbook.insert(ingredient("Flour", 1)).unwrap();
        cookbook.insert(recipe("Dough", &[("Flour", 2)])).unwrap();
        cookbook
            .insert(recipe("Pie", &[("Dough", 1), ("Lid", 1)]))
            .unwrap();
        cookbook.insert(recipe("Lid", &[("Dough", 1)])).unwrap();

        let summary = Resolver::new(&cookbook).summarize("Pie").unwrap();
        assert_eq!(totals(&summary), vec![("Flour", 4)]);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut cookbook = Cookbook::new();
        cookbook.insert(ingredient("Salt", 1)).unwrap();
        cookbook.insert(ingredient("Pepper", 1)).unwrap();
        cookbook
            .insert(recipe("Mix", &[("Salt", 3), ("Pepper", 4)]))
            .unwrap();

        let resolver = Resolver::new(&cookbook);
        let first = resolver.summarize("Mix").unwrap();
        let second = resolver.summarize("Mix").unwrap();
        assert_eq!(first, second);
    }
}
