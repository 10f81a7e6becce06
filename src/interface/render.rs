use crate::catalog::DishCatalog;
use crate::cli::DishSortKey;
use crate::models::{Dish, Ingredient, Selection};
use crate::planner::{
    dish_distribution, GoalComparison, MacroDistribution, NutrientProgress, ShoppingList,
};

/// Width of a full progress bar, in characters.
const BAR_WIDTH: usize = 20;

/// Sort dishes by a table column. Ties fall back to name, then id.
pub fn sort_dishes(dishes: &mut [&Dish], key: DishSortKey, descending: bool) {
    dishes.sort_by(|a, b| {
        let primary = match key {
            DishSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            DishSortKey::Weight => a.weight_g.total_cmp(&b.weight_g),
            DishSortKey::Calories => a.energy_kcal.total_cmp(&b.energy_kcal),
            DishSortKey::Protein => a.protein_g.total_cmp(&b.protein_g),
            DishSortKey::Fat => a.fat_g.total_cmp(&b.fat_g),
            DishSortKey::Carbohydrates => a.carbohydrates_g.total_cmp(&b.carbohydrates_g),
        };
        let primary = if descending { primary.reverse() } else { primary };
        primary
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Text progress bar filled to `display_percent`.
pub fn progress_bar(display_percent: f64) -> String {
    let filled = ((display_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Short `P/F/C` distribution label.
pub fn distribution_label(dist: &MacroDistribution) -> String {
    format!(
        "P {:.0}% / F {:.0}% / C {:.0}%",
        dist.protein, dist.fat, dist.carbohydrates
    )
}

fn progress_line(p: &NutrientProgress) -> String {
    if !p.has_goal() {
        return format!(
            "{:<14} {:>8.1} {:<4} (no goal)",
            p.nutrient.label(),
            p.current,
            p.nutrient.unit()
        );
    }
    format!(
        "{:<14} {:>8.1} / {:<8.0} {:<4} {} {:>4.0}% ({})",
        p.nutrient.label(),
        p.current,
        p.goal,
        p.nutrient.unit(),
        progress_bar(p.display_percent),
        p.percent,
        p.severity.color()
    )
}

/// Display progress of every nutrient towards its goal.
pub fn display_goal_progress(comparison: &GoalComparison, distribution: &MacroDistribution) {
    println!();
    println!("=== Nutrition ===");
    println!();
    for progress in &comparison.nutrients {
        println!("{}", progress_line(progress));
    }
    println!();
    println!("Calorie distribution: {}", distribution_label(distribution));
    println!();
}

/// Display the current selection.
pub fn display_selection<C: DishCatalog + ?Sized>(selection: &Selection, catalog: &C) {
    if selection.is_empty() {
        println!("No dishes selected.");
        return;
    }

    println!();
    println!("=== Selected dishes ({}) ===", selection.len());
    for entry in selection.entries() {
        match catalog.get_dish(entry.id) {
            Some(dish) => println!("  {} x{}", dish.name, entry.portions()),
            None => println!("  #{} (no longer in catalog)", entry.id),
        }
    }
}

/// Display the shopping list, sorted alphabetically.
pub fn display_shopping_list(list: &ShoppingList) {
    if list.is_empty() {
        println!("Shopping list: (empty)");
        return;
    }

    println!();
    println!("=== Shopping list ({} items) ===", list.len());
    println!();

    let entries = list.sorted_for_display();
    let max_name_len = entries
        .iter()
        .map(|(n, _)| n.chars().count())
        .max()
        .unwrap_or(10);

    for (name, amount) in entries {
        println!(
            "  {:<width$}  {:>8.1} {}",
            name,
            amount,
            crate::planner::SHOPPING_UNIT,
            width = max_name_len
        );
    }

    println!();
    println!("Total weight: {:.1} {}", list.total_weight(), crate::planner::SHOPPING_UNIT);
    println!();
}

/// Display a table of dishes with nutrition and calorie distribution.
pub fn display_dish_table(dishes: &[&Dish]) {
    if dishes.is_empty() {
        println!("Dishes: (none)");
        return;
    }

    println!();
    println!("=== Dishes ({} items) ===", dishes.len());
    println!();

    let max_name_len = dishes
        .iter()
        .map(|d| d.name.chars().count())
        .max()
        .unwrap_or(10);

    println!(
        "{:>4}  {:<width$}  {:>8}  {:>8}  {:>7}  {:>7}  {:>7}  Distribution",
        "Id",
        "Name",
        "Weight",
        "kcal",
        "Prot",
        "Fat",
        "Carb",
        width = max_name_len
    );

    for dish in dishes {
        println!(
            "{:>4}  {:<width$}  {:>8.1}  {:>8.1}  {:>7.1}  {:>7.1}  {:>7.1}  {}",
            dish.id,
            dish.name,
            dish.weight_g,
            dish.energy_kcal,
            dish.protein_g,
            dish.fat_g,
            dish.carbohydrates_g,
            distribution_label(&dish_distribution(dish)),
            width = max_name_len
        );
    }

    println!();
}

/// Display ingredients with their nutrition per 100 g.
pub fn display_ingredients(ingredients: &[&Ingredient]) {
    if ingredients.is_empty() {
        println!("Ingredients: (none)");
        return;
    }

    println!();
    println!("=== Ingredients ({} items, per 100 g) ===", ingredients.len());
    println!();

    for ingredient in ingredients {
        let n = &ingredient.nutrition;
        println!(
            "  {} - {} kcal, P:{} F:{} C:{}",
            ingredient.name, n.calories, n.proteins, n.fats, n.carbohydrates
        );
    }

    println!();
}
