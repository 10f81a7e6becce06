use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{Dish, Goals, Ingredient, IngredientRecord};

/// Load ingredients from a JSON file.
///
/// Deduplicates by exact name (last occurrence wins).
pub fn load_ingredients<P: AsRef<Path>>(path: P) -> Result<Vec<Ingredient>> {
    let content = fs::read_to_string(path)?;
    let ingredients: Vec<Ingredient> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, Ingredient> = HashMap::new();
    for ingredient in ingredients {
        seen.insert(ingredient.name.clone(), ingredient);
    }

    let mut deduped: Vec<Ingredient> = seen.into_values().collect();
    deduped.sort_by_key(|i| i.id);
    Ok(deduped)
}

/// Save ingredients to a JSON file.
pub fn save_ingredients<P: AsRef<Path>>(path: P, ingredients: &[Ingredient]) -> Result<()> {
    write_json(path.as_ref(), ingredients)
}

/// Load dishes from a JSON file.
///
/// Deduplicates by id (last occurrence wins) and returns them ordered by id.
pub fn load_dishes<P: AsRef<Path>>(path: P) -> Result<Vec<Dish>> {
    let content = fs::read_to_string(path)?;
    let dishes: Vec<Dish> = serde_json::from_str(&content)?;

    let mut seen: HashMap<u32, Dish> = HashMap::new();
    for dish in dishes {
        seen.insert(dish.id, dish);
    }

    let mut deduped: Vec<Dish> = seen.into_values().collect();
    deduped.sort_by_key(|d| d.id);
    Ok(deduped)
}

/// Save dishes, including their cached totals, to a JSON file.
pub fn save_dishes<P: AsRef<Path>>(path: P, dishes: &[Dish]) -> Result<()> {
    write_json(path.as_ref(), dishes)
}

pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Goals> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_goals<P: AsRef<Path>>(path: P, goals: &Goals) -> Result<()> {
    write_json(path.as_ref(), goals)
}

/// Read ingredient rows from a CSV file with a header row.
///
/// Expected columns: `name, protein_g, fat_g, carbohydrates_g`, optionally
/// `calories`. Rows with a blank name are skipped.
pub fn import_ingredients_csv<P: AsRef<Path>>(path: P) -> Result<Vec<IngredientRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: IngredientRecord = row?;
        if record.name.trim().is_empty() {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

fn write_json<T: serde::Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    tracing::info!("Saved {}", path.display());
    Ok(())
}
