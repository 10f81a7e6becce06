use assert_float_eq::*;
use proptest::prelude::*;

use menu_planner_rs::catalog::CatalogManager;
use menu_planner_rs::models::{
    DishDraft, DishIngredientLine, Goals, Ingredient, MenuRequest, Nutrient, Nutrition,
    NutritionTotals, SelectedDish,
};
use menu_planner_rs::planner::{
    aggregate_selection, compare_to_goals, consolidate_shopping_list, process_menu,
};

fn ingredient(id: u32, name: &str, kcal: f64, p: f64, f: f64, c: f64) -> Ingredient {
    Ingredient::new(
        id,
        name,
        Nutrition {
            calories: kcal,
            proteins: p,
            fats: f,
            carbohydrates: c,
        },
    )
}

fn draft(name: &str, lines: &[(&str, f64)]) -> DishDraft {
    DishDraft {
        name: name.to_string(),
        ingredients: lines
            .iter()
            .map(|(n, a)| DishIngredientLine::new(*n, *a))
            .collect(),
    }
}

/// Catalog with Омлет (1), Плов (2), Рисовая каша (3).
fn sample_catalog() -> CatalogManager {
    let mut catalog = CatalogManager::new(
        vec![
            ingredient(1, "Яйцо", 155.0, 13.0, 11.0, 1.0),
            ingredient(2, "Молоко", 60.0, 3.0, 3.0, 5.0),
            ingredient(3, "Рис", 344.0, 7.0, 1.0, 78.0),
            ingredient(4, "Говядина", 187.0, 19.0, 12.0, 0.0),
        ],
        vec![],
    );
    catalog
        .create_dish(draft("Омлет", &[("Яйцо", 100.0), ("Молоко", 50.0)]))
        .unwrap();
    catalog
        .create_dish(draft("Плов", &[("Рис", 80.0), ("Говядина", 100.0)]))
        .unwrap();
    catalog
        .create_dish(draft("Рисовая каша", &[("Рис", 120.0), ("Молоко", 200.0)]))
        .unwrap();
    catalog
}

#[test]
fn scenario_a_omelette_two_portions() {
    let catalog = sample_catalog();
    let selection = [SelectedDish::new(1, 2)];

    let totals = aggregate_selection(&selection, &catalog);
    assert_float_absolute_eq!(totals.protein, 29.0, 1e-9);

    let list = consolidate_shopping_list(&selection, &catalog);
    assert_eq!(list.len(), 2);
    assert_float_absolute_eq!(list.amount_of("Яйцо").unwrap(), 200.0, 1e-9);
    assert_float_absolute_eq!(list.amount_of("Молоко").unwrap(), 100.0, 1e-9);
}

#[test]
fn scenario_b_zero_goal_and_zero_current() {
    let goals = Goals {
        protein: 0.0,
        fat: 50.0,
        carbohydrates: 200.0,
        calories: 2000.0,
    };
    let current = NutritionTotals {
        protein: 29.0,
        fat: 0.0,
        carbohydrates: 0.0,
        calories: 0.0,
    };

    let cmp = compare_to_goals(&current, &goals);
    assert_eq!(cmp.get(Nutrient::Protein).unwrap().percent, 0.0);
    assert_eq!(cmp.get(Nutrient::Fat).unwrap().percent, 0.0);
    assert_eq!(cmp.get(Nutrient::Calories).unwrap().percent, 0.0);
}

#[test]
fn scenario_c_stale_dish_id_skipped() {
    let catalog = sample_catalog();
    let selection = [
        SelectedDish::new(1, 1),
        SelectedDish::new(2, 1),
        SelectedDish::new(999, 1),
    ];

    let totals = aggregate_selection(&selection, &catalog);
    let expected = aggregate_selection(&selection[..2], &catalog);
    assert_eq!(totals, expected);
    assert!(totals.calories > 0.0);

    let result = process_menu(
        &MenuRequest {
            dishes: selection.to_vec(),
        },
        &catalog,
    );
    assert_eq!(result.dishes.len(), 2);
}

#[test]
fn scenario_d_shared_ingredient_across_dishes() {
    let catalog = sample_catalog();
    let selection = [SelectedDish::new(2, 1), SelectedDish::new(3, 3)];

    let list = consolidate_shopping_list(&selection, &catalog);
    assert_float_absolute_eq!(list.amount_of("Рис").unwrap(), 440.0, 1e-9);

    let result = process_menu(
        &MenuRequest {
            dishes: selection.to_vec(),
        },
        &catalog,
    );
    assert_eq!(result.ingredients["Рис"].amount, 440.0);
    assert_eq!(result.ingredients["Рис"].unit, "г");
    assert_eq!(result.ingredients["Молоко"].amount, 600.0);
}

#[test]
fn test_cached_totals_match_ingredient_lines() {
    let catalog = sample_catalog();
    let dish = catalog.get_dish_by_name("Плов").unwrap();
    // 80g rice + 100g beef
    assert_float_absolute_eq!(dish.energy_kcal, 344.0 * 0.8 + 187.0, 1e-9);
    assert_float_absolute_eq!(dish.protein_g, 7.0 * 0.8 + 19.0, 1e-9);
    assert_float_absolute_eq!(dish.weight_g, 180.0, 1e-9);
}

fn selection_strategy() -> impl Strategy<Value = Vec<(u32, u32)>> {
    proptest::collection::vec((1u32..=4, 1u32..=5), 0..8)
}

fn to_selection(pairs: &[(u32, u32)]) -> Vec<SelectedDish> {
    pairs.iter().map(|(id, p)| SelectedDish::new(*id, *p)).collect()
}

proptest! {
    #[test]
    fn prop_shopping_list_order_independent(
        (pairs, shuffled) in selection_strategy()
            .prop_flat_map(|pairs| (Just(pairs.clone()), Just(pairs).prop_shuffle()))
    ) {
        let catalog = sample_catalog();
        let original = to_selection(&pairs);
        let permuted = to_selection(&shuffled);

        let a = consolidate_shopping_list(&original, &catalog);
        let b = consolidate_shopping_list(&permuted, &catalog);
        let c = consolidate_shopping_list(&original, &catalog);

        let bits = |l: &menu_planner_rs::planner::ShoppingList| -> Vec<(String, u64)> {
            l.iter().map(|(n, a)| (n.to_string(), a.to_bits())).collect()
        };
        prop_assert_eq!(bits(&a), bits(&b));
        prop_assert_eq!(bits(&a), bits(&c));

        let totals_a = aggregate_selection(&original, &catalog);
        let totals_b = aggregate_selection(&permuted, &catalog);
        prop_assert_eq!(totals_a, totals_b);
    }

    #[test]
    fn prop_aggregation_is_additive(pairs in selection_strategy(), split in 0usize..8) {
        let catalog = sample_catalog();
        let full = to_selection(&pairs);
        let split = split.min(full.len());
        let (left, right) = full.split_at(split);

        let whole = aggregate_selection(&full, &catalog);
        let parts = aggregate_selection(left, &catalog).add(&aggregate_selection(right, &catalog));

        for nutrient in Nutrient::ALL {
            prop_assert!((whole.get(nutrient) - parts.get(nutrient)).abs() < 1e-6);
        }
    }
}
