use serde::{Deserialize, Serialize};

use crate::models::{Nutrition, NutritionTotals};

/// One ingredient line of a dish: `amount` grams of the ingredient `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishIngredientLine {
    pub name: String,
    pub amount: f64,
}

impl DishIngredientLine {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Merge lines that reference the same ingredient by summing their amounts.
///
/// The first occurrence of a name keeps its position.
pub fn merge_lines(lines: Vec<DishIngredientLine>) -> Vec<DishIngredientLine> {
    let mut merged: Vec<DishIngredientLine> = Vec::with_capacity(lines.len());
    for line in lines {
        match merged.iter_mut().find(|l| l.name == line.name) {
            Some(existing) => existing.amount += line.amount,
            None => merged.push(line),
        }
    }
    merged
}

/// User-supplied dish definition, before derived totals are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub ingredients: Vec<DishIngredientLine>,
}

/// A catalog dish with its cached nutrition totals.
///
/// The derived fields are computed once when the dish is created or updated
/// and are not recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: u32,
    pub name: String,
    pub ingredients: Vec<DishIngredientLine>,

    #[serde(default)]
    pub weight_g: f64,

    #[serde(default)]
    pub energy_kcal: f64,

    #[serde(default)]
    pub protein_g: f64,

    #[serde(default)]
    pub fat_g: f64,

    #[serde(default)]
    pub carbohydrates_g: f64,
}

impl Dish {
    /// Build a dish from its lines and the resolved nutrition of each line.
    ///
    /// `resolve` returns the per-100g nutrition of an ingredient, or `None`
    /// when the ingredient is unknown; unknown lines contribute nothing to
    /// nutrition but still count towards the weight.
    pub fn with_derived<F>(id: u32, name: String, lines: Vec<DishIngredientLine>, resolve: F) -> Self
    where
        F: Fn(&str) -> Option<Nutrition>,
    {
        let ingredients = merge_lines(lines);

        let mut weight_g = 0.0;
        let mut total = Nutrition::default();
        for line in &ingredients {
            weight_g += line.amount;
            if let Some(per_100g) = resolve(&line.name) {
                let part = per_100g.for_amount(line.amount);
                total.calories += part.calories;
                total.proteins += part.proteins;
                total.fats += part.fats;
                total.carbohydrates += part.carbohydrates;
            }
        }

        Self {
            id,
            name,
            ingredients,
            weight_g,
            energy_kcal: total.calories,
            protein_g: total.proteins,
            fat_g: total.fats,
            carbohydrates_g: total.carbohydrates,
        }
    }

    /// Nutrition of a single portion.
    pub fn totals(&self) -> NutritionTotals {
        NutritionTotals {
            protein: self.protein_g,
            fat: self.fat_g,
            carbohydrates: self.carbohydrates_g,
            calories: self.energy_kcal,
        }
    }

    pub fn has_ingredient(&self, name: &str) -> bool {
        self.ingredients.iter().any(|l| l.name == name)
    }
}
