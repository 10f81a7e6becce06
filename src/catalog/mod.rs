mod manager;
mod persistence;

pub use manager::{CatalogManager, CatalogWarning};
pub use persistence::{
    import_ingredients_csv, load_dishes, load_goals, load_ingredients, save_dishes, save_goals,
    save_ingredients,
};

use crate::models::{Dish, Ingredient};

/// Read-only dish lookup used by planning.
pub trait DishCatalog {
    fn get_dish(&self, id: u32) -> Option<&Dish>;
}

/// Read-only ingredient lookup used when dishes are created or edited.
pub trait IngredientCatalog {
    fn get_ingredient(&self, name: &str) -> Option<&Ingredient>;
}

impl DishCatalog for [Dish] {
    fn get_dish(&self, id: u32) -> Option<&Dish> {
        self.iter().find(|d| d.id == id)
    }
}

impl DishCatalog for Vec<Dish> {
    fn get_dish(&self, id: u32) -> Option<&Dish> {
        self.as_slice().get_dish(id)
    }
}

impl IngredientCatalog for [Ingredient] {
    fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.iter().find(|i| i.name == name)
    }
}

impl IngredientCatalog for Vec<Ingredient> {
    fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.as_slice().get_ingredient(name)
    }
}
