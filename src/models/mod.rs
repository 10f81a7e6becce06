pub mod dish;
pub mod goals;
pub mod ingredient;
pub mod menu;
pub mod nutrition;
pub mod selection;

pub use dish::{Dish, DishDraft, DishIngredientLine};
pub use goals::Goals;
pub use ingredient::{Ingredient, IngredientRecord};
pub use menu::{MenuRequest, MenuResult, SelectedDishSummary, ShoppingItem};
pub use nutrition::{Nutrient, Nutrition, NutritionTotals};
pub use selection::{SelectedDish, Selection};
