use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::catalog::{DishCatalog, IngredientCatalog};
use crate::error::{PlannerError, Result};
use crate::models::{Dish, DishDraft, Ingredient, Nutrition};

/// Condition reported when a dish is created or updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// A dish line references an ingredient that is not in the catalog; the
    /// line contributes no nutrition.
    MissingIngredientNutrition { dish: String, ingredient: String },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogWarning::MissingIngredientNutrition { dish, ingredient } => write!(
                f,
                "'{}' uses unknown ingredient '{}'; it adds no nutrition",
                dish, ingredient
            ),
        }
    }
}

/// In-memory dish and ingredient catalog.
pub struct CatalogManager {
    /// Ingredients keyed by exact name.
    ingredients: HashMap<String, Ingredient>,
    dishes: BTreeMap<u32, Dish>,
}

impl CatalogManager {
    /// Create a catalog from loaded records. Later records win on key clashes.
    pub fn new(ingredients: Vec<Ingredient>, dishes: Vec<Dish>) -> Self {
        let ingredients = ingredients
            .into_iter()
            .map(|i| (i.name.clone(), i))
            .collect();
        let dishes = dishes.into_iter().map(|d| (d.id, d)).collect();
        Self {
            ingredients,
            dishes,
        }
    }

    pub fn get_dish_by_name(&self, name: &str) -> Option<&Dish> {
        self.dishes.values().find(|d| d.name == name)
    }

    /// Dishes ordered by id.
    pub fn dishes(&self) -> Vec<&Dish> {
        self.dishes.values().collect()
    }

    /// Ingredients ordered by name.
    pub fn ingredients(&self) -> Vec<&Ingredient> {
        let mut all: Vec<&Ingredient> = self.ingredients.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Add a new ingredient and return its id.
    pub fn add_ingredient(&mut self, name: &str, nutrition: Nutrition) -> Result<u32> {
        let name = name.trim();
        if self.ingredients.contains_key(name) {
            return Err(PlannerError::DuplicateIngredient(name.to_string()));
        }

        let id = next_id(self.ingredients.values().map(|i| i.id).max(), "ingredient")?;
        let ingredient = Ingredient::new(id, name, nutrition);
        if !ingredient.is_valid() {
            return Err(PlannerError::InvalidInput(format!(
                "Ingredient '{}' needs a name and non-negative nutrition",
                name
            )));
        }

        self.ingredients.insert(ingredient.name.clone(), ingredient);
        Ok(id)
    }

    /// Insert or replace an ingredient by name, keeping the id of a replaced one.
    ///
    /// Cached dish totals are left untouched.
    pub fn upsert_ingredient(&mut self, name: &str, nutrition: Nutrition) -> Result<u32> {
        match self.ingredients.get_mut(name.trim()) {
            Some(existing) => {
                if !nutrition.is_valid() {
                    return Err(PlannerError::InvalidInput(format!(
                        "Ingredient '{}' needs non-negative nutrition",
                        existing.name
                    )));
                }
                existing.nutrition = nutrition;
                Ok(existing.id)
            }
            None => self.add_ingredient(name, nutrition),
        }
    }

    /// Remove an ingredient. Dishes referencing it keep their cached totals.
    pub fn remove_ingredient(&mut self, name: &str) -> Result<Ingredient> {
        let name = name.trim();
        self.ingredients
            .remove(name)
            .ok_or_else(|| PlannerError::IngredientNotFound(name.to_string()))
    }

    /// Create a dish and compute its derived totals.
    pub fn create_dish(&mut self, draft: DishDraft) -> Result<(u32, Vec<CatalogWarning>)> {
        let name = validate_draft(&draft)?;
        if self.get_dish_by_name(&name).is_some() {
            return Err(PlannerError::DuplicateDish(name));
        }

        let id = next_id(self.dishes.keys().next_back().copied(), "dish")?;
        let (dish, warnings) = self.build_dish(id, name, draft);
        tracing::info!("Created dish '{}' (id {})", dish.name, id);
        self.dishes.insert(id, dish);
        Ok((id, warnings))
    }

    /// Replace a dish's name and lines and recompute its derived totals.
    pub fn update_dish(&mut self, id: u32, draft: DishDraft) -> Result<Vec<CatalogWarning>> {
        if !self.dishes.contains_key(&id) {
            return Err(PlannerError::DishNotFound(id));
        }
        let name = validate_draft(&draft)?;
        if self
            .dishes
            .values()
            .any(|d| d.id != id && d.name == name)
        {
            return Err(PlannerError::DuplicateDish(name));
        }

        let (dish, warnings) = self.build_dish(id, name, draft);
        tracing::info!("Updated dish '{}' (id {})", dish.name, id);
        self.dishes.insert(id, dish);
        Ok(warnings)
    }

    pub fn delete_dish(&mut self, id: u32) -> Result<Dish> {
        self.dishes.remove(&id).ok_or(PlannerError::DishNotFound(id))
    }

    fn build_dish(&self, id: u32, name: String, draft: DishDraft) -> (Dish, Vec<CatalogWarning>) {
        let dish = Dish::with_derived(id, name, draft.ingredients, |ingredient| {
            self.get_ingredient(ingredient).map(|i| i.nutrition)
        });

        let warnings: Vec<CatalogWarning> = dish
            .ingredients
            .iter()
            .filter(|line| self.get_ingredient(&line.name).is_none())
            .map(|line| CatalogWarning::MissingIngredientNutrition {
                dish: dish.name.clone(),
                ingredient: line.name.clone(),
            })
            .collect();

        for warning in &warnings {
            tracing::warn!("{}", warning);
        }

        (dish, warnings)
    }

    /// Dishes with a line referencing an ingredient missing from the catalog.
    pub fn stale_dishes(&self) -> Vec<CatalogWarning> {
        self.dishes
            .values()
            .flat_map(|dish| {
                dish.ingredients
                    .iter()
                    .filter(|line| !self.ingredients.contains_key(&line.name))
                    .map(|line| CatalogWarning::MissingIngredientNutrition {
                        dish: dish.name.clone(),
                        ingredient: line.name.clone(),
                    })
            })
            .collect()
    }

    /// Owned ingredient records for saving, ordered by name.
    pub fn to_ingredients(&self) -> Vec<Ingredient> {
        self.ingredients().into_iter().cloned().collect()
    }

    /// Owned dish records for saving, ordered by id.
    pub fn to_dishes(&self) -> Vec<Dish> {
        self.dishes.values().cloned().collect()
    }

    pub fn dish_count(&self) -> usize {
        self.dishes.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }
}

impl DishCatalog for CatalogManager {
    fn get_dish(&self, id: u32) -> Option<&Dish> {
        self.dishes.get(&id)
    }
}

impl IngredientCatalog for CatalogManager {
    fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.get(name)
    }
}

/// Id following the largest one in use.
fn next_id(max: Option<u32>, kind: &str) -> Result<u32> {
    max.unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| PlannerError::InvalidInput(format!("No {} ids left", kind)))
}

/// Check a draft and return its trimmed name.
fn validate_draft(draft: &DishDraft) -> Result<String> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(PlannerError::InvalidInput("Dish name is empty".to_string()));
    }

    if draft.ingredients.is_empty() {
        return Err(PlannerError::InvalidInput(
            "Dish must have at least one ingredient".to_string(),
        ));
    }

    if let Some(line) = draft
        .ingredients
        .iter()
        .find(|l| !(l.amount.is_finite() && l.amount > 0.0))
    {
        return Err(PlannerError::InvalidInput(format!(
            "Amount of '{}' must be greater than 0",
            line.name
        )));
    }

    Ok(name.to_string())
}
