use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{Dish, Goals, Nutrient, Selection};

/// Minimum similarity for a fuzzy dish-name match.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Action chosen in the planning menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanAction {
    ToggleDish,
    ChangePortions,
    StartOver,
    Done,
}

/// Prompt for a non-negative goal value.
pub fn prompt_goal(nutrient: Nutrient, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!(
            "{} goal ({}, 0 = no goal)",
            nutrient.label(),
            nutrient.unit()
        ))
        .default(format!("{}", current))
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput(
            "Goals must be non-negative".to_string(),
        ));
    }

    Ok(value)
}

/// Prompt for all four goals, defaulting to the current ones.
pub fn prompt_goals(current: &Goals) -> Result<Goals> {
    let mut goals = *current;
    for nutrient in Nutrient::ALL {
        goals.set(nutrient, prompt_goal(nutrient, current.get(nutrient))?);
    }
    Ok(goals)
}

/// Rank dishes by name similarity to `query`, best first.
pub fn fuzzy_matches<'a>(dishes: &[&'a Dish], query: &str) -> Vec<&'a Dish> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(&Dish, f64)> = dishes
        .iter()
        .map(|d| (*d, jaro_winkler(&d.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(d, _)| d).collect()
}

/// Prompt for a dish by name with fuzzy matching. `None` when nothing was picked.
pub fn prompt_dish(dishes: &[&Dish]) -> Result<Option<u32>> {
    let input: String = Input::new()
        .with_prompt("Dish name (or press Enter to cancel)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    if let Some(dish) = dishes.iter().find(|d| d.name == input) {
        return Ok(Some(dish.id));
    }

    let candidates = fuzzy_matches(dishes, input);

    if candidates.is_empty() {
        println!("No matching dish found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let dish = candidates[0];
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", dish.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(dish.id));
    }

    let options: Vec<&Dish> = candidates.into_iter().take(5).collect();
    let mut labels: Vec<String> = options.iter().map(|d| d.name.clone()).collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).map(|d| d.id))
}

/// Prompt for a portion count. Values below one become one.
pub fn prompt_portions(dish_name: &str, current: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("Portions of '{}'", dish_name))
        .default(current.to_string())
        .interact_text()?;

    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    Ok(value.clamp(1, u32::MAX as i64) as u32)
}

/// Prompt for the next planning action.
pub fn prompt_plan_action(selection: &Selection) -> Result<PlanAction> {
    let mut actions = vec![(PlanAction::ToggleDish, "Select / deselect a dish")];
    if !selection.is_empty() {
        actions.push((PlanAction::ChangePortions, "Change portions"));
        actions.push((PlanAction::StartOver, "Start over"));
    }
    actions.push((PlanAction::Done, "Done"));

    let labels: Vec<&str> = actions.iter().map(|(_, label)| *label).collect();
    let choice = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions.get(choice).map(|(a, _)| *a).unwrap_or(PlanAction::Done))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
