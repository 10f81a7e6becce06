pub mod aggregation;
pub mod calculations;
pub mod constants;
pub mod goals;
pub mod menu;
pub mod shopping;

pub use aggregation::{
    aggregate_distribution, aggregate_selection, dish_contribution, dish_distribution,
    resolve_selection,
};
pub use calculations::{
    calories_from_macros, display_percentage, goal_percentage, macro_calorie_distribution,
    round_to, MacroDistribution,
};
pub use constants::*;
pub use goals::{compare_to_goals, GoalComparison, NutrientProgress, Severity};
pub use menu::process_menu;
pub use shopping::{consolidate_shopping_list, ShoppingList};
