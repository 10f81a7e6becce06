use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{NutritionTotals, SelectedDish};

/// Planning request: the selected dishes with their portions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuRequest {
    #[serde(default)]
    pub dishes: Vec<SelectedDish>,
}

/// A resolved dish in a planning response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedDishSummary {
    pub id: u32,
    pub name: String,
    pub portions: u32,
}

/// One shopping-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub amount: f64,
    pub unit: String,
}

/// Planning response. Recomputed on every run, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuResult {
    pub total_nutrition: NutritionTotals,
    pub dishes: Vec<SelectedDishSummary>,
    pub ingredients: BTreeMap<String, ShoppingItem>,
}
