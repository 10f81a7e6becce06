pub mod prompts;
pub mod render;

pub use prompts::{
    fuzzy_matches, prompt_dish, prompt_goal, prompt_goals, prompt_plan_action, prompt_portions,
    prompt_yes_no, PlanAction,
};
pub use render::{
    display_dish_table, display_goal_progress, display_ingredients, display_selection,
    display_shopping_list, distribution_label, progress_bar, sort_dishes,
};
