use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{PlannerError, Result};
use crate::models::DishIngredientLine;

/// MenuPlanner — plan dishes against nutrition goals and build a shopping list.
#[derive(Parser, Debug)]
#[command(name = "menu_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding ingredients.json, dishes.json and goals.json.
    #[arg(short, long, default_value = "data", global = true)]
    pub data_dir: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively select dishes and portions, then show progress and a shopping list.
    Plan,

    /// Process a planning request file ({"dishes": [{"id", "portions"}]}) and print JSON.
    Menu {
        /// Path to the request JSON.
        #[arg(short, long)]
        request: String,
    },

    /// Show goals, or set the ones given. 0 clears a goal.
    Goals {
        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        #[arg(long)]
        carbohydrates: Option<f64>,

        #[arg(long)]
        calories: Option<f64>,
    },

    /// List dishes with their nutrition and calorie distribution.
    Dishes {
        /// Column to sort by.
        #[arg(long, value_enum, default_value_t = DishSortKey::Name)]
        sort: DishSortKey,

        /// Sort descending.
        #[arg(long)]
        desc: bool,
    },

    /// List ingredients.
    Ingredients,

    /// Add a dish from NAME=GRAMS ingredient lines.
    AddDish {
        #[arg(long)]
        name: String,

        /// Ingredient line, e.g. --ingredient "Яйцо=100". Repeatable.
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,
    },

    /// Replace a dish's ingredient lines (and optionally its name).
    EditDish {
        #[arg(long)]
        id: u32,

        /// New dish name. Keeps the current one when omitted.
        #[arg(long)]
        name: Option<String>,

        /// Ingredient line, e.g. --ingredient "Яйцо=100". Repeatable.
        #[arg(short, long = "ingredient", required = true)]
        ingredients: Vec<String>,
    },

    /// Delete a dish.
    DeleteDish {
        #[arg(long)]
        id: u32,
    },

    /// Add an ingredient with nutrition per 100 g.
    AddIngredient {
        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        #[arg(long, default_value_t = 0.0)]
        carbohydrates: f64,

        /// Declared kcal per 100 g. Derived from the macros when omitted.
        #[arg(long)]
        calories: Option<f64>,

        /// Replace the nutrition of an existing ingredient instead of failing.
        #[arg(long)]
        update: bool,
    },

    /// Delete an ingredient. Dishes using it keep their stored totals.
    DeleteIngredient {
        #[arg(long)]
        name: String,
    },

    /// Import ingredients from CSV (name,protein_g,fat_g,carbohydrates_g[,calories]).
    ImportIngredients {
        /// Path to the CSV file.
        csv: String,

        /// Replace nutrition of ingredients that already exist.
        #[arg(long)]
        overwrite: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}

/// Dish table sort column.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishSortKey {
    Name,
    Weight,
    Calories,
    Protein,
    Fat,
    Carbohydrates,
}

/// Parse a `NAME=GRAMS` ingredient line.
pub fn parse_ingredient_line(raw: &str) -> Option<(String, f64)> {
    let (name, amount) = raw.rsplit_once('=')?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let amount: f64 = amount.trim().parse().ok()?;
    Some((name.to_string(), amount))
}

/// Parse repeated `NAME=GRAMS` arguments into dish lines.
pub fn parse_ingredient_lines(raw_lines: &[String]) -> Result<Vec<DishIngredientLine>> {
    raw_lines
        .iter()
        .map(|raw| {
            parse_ingredient_line(raw)
                .map(|(name, amount)| DishIngredientLine::new(name, amount))
                .ok_or_else(|| {
                    PlannerError::InvalidInput(format!("Expected NAME=GRAMS, got '{}'", raw))
                })
        })
        .collect()
}
