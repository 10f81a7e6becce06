use std::collections::BTreeMap;

use crate::catalog::DishCatalog;
use crate::models::{SelectedDish, ShoppingItem};
use crate::planner::aggregation::resolve_selection;
use crate::planner::calculations::round_to;
use crate::planner::constants::SHOPPING_UNIT;

/// Consolidated ingredient demand, in grams, keyed by exact ingredient name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: BTreeMap<String, f64>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount_g` grams of an ingredient.
    pub fn add(&mut self, name: &str, amount_g: f64) {
        match self.items.get_mut(name) {
            Some(total) => *total += amount_g,
            None => {
                self.items.insert(name.to_string(), amount_g);
            }
        }
    }

    /// Total grams of an ingredient, if it is on the list.
    pub fn amount_of(&self, name: &str) -> Option<f64> {
        self.items.get(name).copied()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries sorted case-insensitively for display.
    pub fn sorted_for_display(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self.iter().collect();
        entries.sort_by(|a, b| {
            a.0.to_lowercase()
                .cmp(&b.0.to_lowercase())
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    /// Total grams over all entries.
    pub fn total_weight(&self) -> f64 {
        self.items.values().sum()
    }

    /// Response form: every amount rounded, unit fixed to grams.
    pub fn to_items(&self, decimals: i32) -> BTreeMap<String, ShoppingItem> {
        self.items
            .iter()
            .map(|(name, amount)| {
                (
                    name.clone(),
                    ShoppingItem {
                        amount: round_to(*amount, decimals),
                        unit: SHOPPING_UNIT.to_string(),
                    },
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Consolidate the ingredient demand of a selection into one shopping list.
///
/// Each ingredient line contributes `amount * portions`. Missing dishes are
/// skipped and portions are coerced exactly as in aggregation.
pub fn consolidate_shopping_list<C>(selection: &[SelectedDish], catalog: &C) -> ShoppingList
where
    C: DishCatalog + ?Sized,
{
    let mut list = ShoppingList::new();
    for (dish, portions) in resolve_selection(selection, catalog) {
        for line in &dish.ingredients {
            list.add(&line.name, line.amount * portions as f64);
        }
    }
    list
}
