use std::path::{Path, PathBuf};

use crate::catalog::{load_dishes, load_goals, load_ingredients, CatalogManager};
use crate::error::Result;
use crate::models::Goals;

pub const INGREDIENTS_FILE: &str = "ingredients.json";
pub const DISHES_FILE: &str = "dishes.json";
pub const GOALS_FILE: &str = "goals.json";

/// Locations of the data files inside the data directory.
#[derive(Debug, Clone)]
pub struct PlannerPaths {
    pub ingredients: PathBuf,
    pub dishes: PathBuf,
    pub goals: PathBuf,
}

impl PlannerPaths {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        let dir = data_dir.as_ref();
        Self {
            ingredients: dir.join(INGREDIENTS_FILE),
            dishes: dir.join(DISHES_FILE),
            goals: dir.join(GOALS_FILE),
        }
    }

    /// Load the catalog. Missing files count as empty.
    pub fn load_catalog(&self) -> Result<CatalogManager> {
        let ingredients = if self.ingredients.exists() {
            load_ingredients(&self.ingredients)?
        } else {
            Vec::new()
        };
        let dishes = if self.dishes.exists() {
            load_dishes(&self.dishes)?
        } else {
            Vec::new()
        };

        tracing::info!(
            "Loaded {} ingredients and {} dishes",
            ingredients.len(),
            dishes.len()
        );
        Ok(CatalogManager::new(ingredients, dishes))
    }

    /// Load goals, or unset goals when the file does not exist.
    pub fn load_goals(&self) -> Result<Goals> {
        if self.goals.exists() {
            load_goals(&self.goals)
        } else {
            Ok(Goals::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempdir().unwrap();
        let paths = PlannerPaths::new(dir.path());

        let catalog = paths.load_catalog().unwrap();
        assert_eq!(catalog.dish_count(), 0);
        assert_eq!(catalog.ingredient_count(), 0);
        assert!(paths.load_goals().unwrap().is_empty());
    }

    #[test]
    fn test_paths_join_data_dir() {
        let paths = PlannerPaths::new("data");
        assert_eq!(paths.dishes, Path::new("data").join("dishes.json"));
    }
}
