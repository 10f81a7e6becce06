use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use menu_planner_rs::catalog::{
    import_ingredients_csv, save_dishes, save_goals, save_ingredients, CatalogManager,
    DishCatalog, IngredientCatalog,
};
use menu_planner_rs::cli::{parse_ingredient_lines, Cli, Command, DishSortKey};
use menu_planner_rs::config::PlannerPaths;
use menu_planner_rs::error::{PlannerError, Result};
use menu_planner_rs::interface::{
    display_dish_table, display_goal_progress, display_ingredients, display_selection,
    display_shopping_list, prompt_dish, prompt_goals, prompt_plan_action, prompt_portions,
    prompt_yes_no, sort_dishes, PlanAction,
};
use menu_planner_rs::models::{Dish, DishDraft, Goals, MenuRequest, Nutrition, Selection};
use menu_planner_rs::planner::{
    aggregate_distribution, aggregate_selection, compare_to_goals, consolidate_shopping_list,
    process_menu,
};

fn main() {
    // Logs go to stderr so JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("menu_planner_rs=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = PlannerPaths::new(&cli.data_dir);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&paths),
        Command::Menu { request } => cmd_menu(&paths, &request),
        Command::Goals {
            protein,
            fat,
            carbohydrates,
            calories,
        } => cmd_goals(&paths, [protein, fat, carbohydrates, calories]),
        Command::Dishes { sort, desc } => cmd_dishes(&paths, sort, desc),
        Command::Ingredients => cmd_ingredients(&paths),
        Command::AddDish { name, ingredients } => cmd_add_dish(&paths, name, &ingredients),
        Command::EditDish {
            id,
            name,
            ingredients,
        } => cmd_edit_dish(&paths, id, name, &ingredients),
        Command::DeleteDish { id } => cmd_delete_dish(&paths, id),
        Command::AddIngredient {
            name,
            protein,
            fat,
            carbohydrates,
            calories,
            update,
        } => {
            let mut nutrition = Nutrition::from_macros(protein, fat, carbohydrates);
            if let Some(calories) = calories {
                nutrition.calories = calories;
            }
            cmd_add_ingredient(&paths, &name, nutrition, update)
        }
        Command::DeleteIngredient { name } => cmd_delete_ingredient(&paths, &name),
        Command::ImportIngredients { csv, overwrite } => {
            cmd_import_ingredients(&paths, &csv, overwrite)
        }
    }
}

/// Interactive planning session.
fn cmd_plan(paths: &PlannerPaths) -> Result<()> {
    let catalog = paths.load_catalog()?;
    if catalog.dish_count() == 0 {
        println!("No dishes in the catalog. Use 'add-dish' first.");
        return Ok(());
    }

    let mut goals = paths.load_goals()?;
    if goals.is_empty() || prompt_yes_no("Change nutrition goals?", false)? {
        goals = prompt_goals(&goals)?;
        save_goals(&paths.goals, &goals)?;
        println!("Goals saved.");
    }

    let dishes = catalog.dishes();
    let mut selection = Selection::new();

    loop {
        show_plan(&catalog, &selection, &goals);

        match prompt_plan_action(&selection)? {
            PlanAction::ToggleDish => {
                if let Some(id) = prompt_dish(&dishes)? {
                    selection.toggle(id);
                }
            }
            PlanAction::ChangePortions => {
                if let Some(id) = prompt_dish(&dishes)? {
                    match (catalog.get_dish(id), selection.portions_of(id)) {
                        (Some(dish), Some(current)) => {
                            let portions = prompt_portions(&dish.name, current)?;
                            selection.set_portions(id, portions);
                        }
                        _ => println!("That dish is not selected."),
                    }
                }
            }
            PlanAction::StartOver => selection.clear(),
            PlanAction::Done => break,
        }
    }

    let shopping = consolidate_shopping_list(selection.entries(), &catalog);
    display_shopping_list(&shopping);
    Ok(())
}

fn show_plan(catalog: &CatalogManager, selection: &Selection, goals: &Goals) {
    display_selection(selection, catalog);
    let totals = aggregate_selection(selection.entries(), catalog);
    display_goal_progress(
        &compare_to_goals(&totals, goals),
        &aggregate_distribution(&totals),
    );
}

/// Process a planning request file and print the response as JSON.
fn cmd_menu(paths: &PlannerPaths, request_path: &str) -> Result<()> {
    let content = std::fs::read_to_string(Path::new(request_path))?;
    let request: MenuRequest = serde_json::from_str(&content)?;

    let catalog = paths.load_catalog()?;
    let result = process_menu(&request, &catalog);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Show goals, or update the given ones.
fn cmd_goals(paths: &PlannerPaths, updates: [Option<f64>; 4]) -> Result<()> {
    let goals = paths.load_goals()?;

    if updates.iter().all(Option::is_none) {
        println!("{}", serde_json::to_string_pretty(&goals)?);
        return Ok(());
    }

    let [protein, fat, carbohydrates, calories] = updates;
    let updated = Goals {
        protein: protein.unwrap_or(goals.protein),
        fat: fat.unwrap_or(goals.fat),
        carbohydrates: carbohydrates.unwrap_or(goals.carbohydrates),
        calories: calories.unwrap_or(goals.calories),
    };
    if !updated.is_valid() {
        return Err(PlannerError::InvalidInput(
            "Goals must be non-negative".to_string(),
        ));
    }

    save_goals(&paths.goals, &updated)?;
    println!("Goals saved.");
    Ok(())
}

fn cmd_dishes(paths: &PlannerPaths, sort: DishSortKey, desc: bool) -> Result<()> {
    let catalog = paths.load_catalog()?;
    let mut dishes = catalog.dishes();
    sort_dishes(&mut dishes, sort, desc);
    display_dish_table(&dishes);

    for warning in catalog.stale_dishes() {
        eprintln!("Warning: {}", warning);
    }
    Ok(())
}

fn cmd_ingredients(paths: &PlannerPaths) -> Result<()> {
    let catalog = paths.load_catalog()?;
    display_ingredients(&catalog.ingredients());
    Ok(())
}

fn cmd_add_dish(paths: &PlannerPaths, name: String, raw_lines: &[String]) -> Result<()> {
    let lines = parse_ingredient_lines(raw_lines)?;

    let mut catalog = paths.load_catalog()?;
    let (id, warnings) = catalog.create_dish(DishDraft {
        name,
        ingredients: lines,
    })?;

    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    save_dishes(&paths.dishes, &catalog.to_dishes())?;
    if let Some(dish) = catalog.get_dish(id) {
        print_dish_summary("Added", dish);
    }
    Ok(())
}

fn cmd_edit_dish(
    paths: &PlannerPaths,
    id: u32,
    name: Option<String>,
    raw_lines: &[String],
) -> Result<()> {
    let lines = parse_ingredient_lines(raw_lines)?;

    let mut catalog = paths.load_catalog()?;
    let name = match name {
        Some(name) => name,
        None => catalog
            .get_dish(id)
            .map(|d| d.name.clone())
            .ok_or(PlannerError::DishNotFound(id))?,
    };

    let warnings = catalog.update_dish(
        id,
        DishDraft {
            name,
            ingredients: lines,
        },
    )?;

    for warning in &warnings {
        eprintln!("Warning: {}", warning);
    }

    save_dishes(&paths.dishes, &catalog.to_dishes())?;
    if let Some(dish) = catalog.get_dish(id) {
        print_dish_summary("Updated", dish);
    }
    Ok(())
}

fn cmd_delete_dish(paths: &PlannerPaths, id: u32) -> Result<()> {
    let mut catalog = paths.load_catalog()?;
    let dish = catalog.delete_dish(id)?;
    save_dishes(&paths.dishes, &catalog.to_dishes())?;
    println!("Deleted '{}' (id {}).", dish.name, dish.id);
    Ok(())
}

fn cmd_add_ingredient(
    paths: &PlannerPaths,
    name: &str,
    nutrition: Nutrition,
    update: bool,
) -> Result<()> {
    let mut catalog = paths.load_catalog()?;
    let id = if update {
        catalog.upsert_ingredient(name, nutrition)?
    } else {
        catalog.add_ingredient(name, nutrition)?
    };
    save_ingredients(&paths.ingredients, &catalog.to_ingredients())?;
    println!(
        "Saved '{}' (id {}): {} kcal, P:{} F:{} C:{} per 100 g",
        name.trim(),
        id,
        nutrition.calories,
        nutrition.proteins,
        nutrition.fats,
        nutrition.carbohydrates
    );
    Ok(())
}

fn cmd_delete_ingredient(paths: &PlannerPaths, name: &str) -> Result<()> {
    let mut catalog = paths.load_catalog()?;
    let removed = catalog.remove_ingredient(name)?;
    save_ingredients(&paths.ingredients, &catalog.to_ingredients())?;
    println!("Deleted ingredient '{}'.", removed.name);

    for warning in catalog.stale_dishes() {
        eprintln!("Warning: {}", warning);
    }
    Ok(())
}

fn print_dish_summary(action: &str, dish: &Dish) {
    println!(
        "{} '{}' (id {}): {:.1} g, {:.1} kcal, P {:.1} / F {:.1} / C {:.1}",
        action,
        dish.name,
        dish.id,
        dish.weight_g,
        dish.energy_kcal,
        dish.protein_g,
        dish.fat_g,
        dish.carbohydrates_g
    );
}

fn cmd_import_ingredients(paths: &PlannerPaths, csv_path: &str, overwrite: bool) -> Result<()> {
    let records = import_ingredients_csv(csv_path)?;
    let mut catalog = paths.load_catalog()?;

    let mut imported = 0;
    let mut skipped = 0;
    for record in &records {
        if !overwrite && catalog.get_ingredient(record.name.trim()).is_some() {
            skipped += 1;
            continue;
        }
        catalog.upsert_ingredient(&record.name, record.nutrition())?;
        imported += 1;
    }

    save_ingredients(&paths.ingredients, &catalog.to_ingredients())?;
    println!("Imported {} ingredients, skipped {} existing.", imported, skipped);
    Ok(())
}
