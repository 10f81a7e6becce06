use crate::catalog::DishCatalog;
use crate::models::{Dish, NutritionTotals, SelectedDish};
use crate::planner::calculations::{macro_calorie_distribution, MacroDistribution};

/// Resolve selected dishes against the catalog.
///
/// Entries whose dish id is unknown are skipped. The result is ordered by dish
/// id (then portions) so folds over it do not depend on the input order.
pub fn resolve_selection<'a, C>(selection: &[SelectedDish], catalog: &'a C) -> Vec<(&'a Dish, u32)>
where
    C: DishCatalog + ?Sized,
{
    let mut resolved: Vec<(&Dish, u32)> = selection
        .iter()
        .filter_map(|entry| match catalog.get_dish(entry.id) {
            Some(dish) => Some((dish, entry.portions())),
            None => {
                tracing::debug!("Skipping selected dish {}: not in catalog", entry.id);
                None
            }
        })
        .collect();

    resolved.sort_by_key(|(dish, portions)| (dish.id, *portions));
    resolved
}

/// Nutrition of `portions` servings of a dish.
#[inline]
pub fn dish_contribution(dish: &Dish, portions: u32) -> NutritionTotals {
    dish.totals().scaled(portions as f64)
}

/// Aggregate nutrition of a selection.
///
/// Stale dish ids contribute nothing; portions are coerced to at least one.
pub fn aggregate_selection<C>(selection: &[SelectedDish], catalog: &C) -> NutritionTotals
where
    C: DishCatalog + ?Sized,
{
    resolve_selection(selection, catalog)
        .into_iter()
        .fold(NutritionTotals::default(), |acc, (dish, portions)| {
            acc.add(&dish_contribution(dish, portions))
        })
}

/// Macro calorie distribution of a single dish.
pub fn dish_distribution(dish: &Dish) -> MacroDistribution {
    macro_calorie_distribution(dish.protein_g, dish.fat_g, dish.carbohydrates_g)
}

/// Macro calorie distribution of aggregated totals.
pub fn aggregate_distribution(totals: &NutritionTotals) -> MacroDistribution {
    macro_calorie_distribution(totals.protein, totals.fat, totals.carbohydrates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DishIngredientLine;

    fn dish(id: u32, protein: f64, fat: f64, carbs: f64, kcal: f64) -> Dish {
        Dish {
            id,
            name: format!("Dish {}", id),
            ingredients: vec![DishIngredientLine::new("X", 100.0)],
            weight_g: 100.0,
            energy_kcal: kcal,
            protein_g: protein,
            fat_g: fat,
            carbohydrates_g: carbs,
        }
    }

    fn catalog() -> Vec<Dish> {
        vec![
            dish(1, 10.0, 5.0, 20.0, 165.0),
            dish(2, 20.0, 10.0, 0.0, 170.0),
            dish(3, 0.0, 0.0, 50.0, 200.0),
        ]
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let totals = aggregate_selection(&[], &catalog());
        assert_eq!(totals, NutritionTotals::default());
    }

    #[test]
    fn test_portions_multiply() {
        let totals = aggregate_selection(&[SelectedDish::new(1, 3)], &catalog());
        assert!((totals.protein - 30.0).abs() < 1e-9);
        assert!((totals.calories - 495.0).abs() < 1e-9);
    }

    #[test]
    fn test_non_positive_portions_count_as_one() {
        let selection = [SelectedDish {
            id: 2,
            raw_portions: 0.0,
        }];
        let totals = aggregate_selection(&selection, &catalog());
        assert!((totals.fat - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_stale_id_skipped() {
        let selection = [SelectedDish::new(1, 1), SelectedDish::new(999, 4)];
        let totals = aggregate_selection(&selection, &catalog());
        assert!((totals.protein - 10.0).abs() < 1e-9);
        assert_eq!(resolve_selection(&selection, &catalog()).len(), 1);
    }

    #[test]
    fn test_resolve_is_order_independent() {
        let cat = catalog();
        let a = resolve_selection(&[SelectedDish::new(3, 1), SelectedDish::new(1, 2)], &cat);
        let b = resolve_selection(&[SelectedDish::new(1, 2), SelectedDish::new(3, 1)], &cat);
        let ids_a: Vec<u32> = a.iter().map(|(d, _)| d.id).collect();
        let ids_b: Vec<u32> = b.iter().map(|(d, _)| d.id).collect();
        assert_eq!(ids_a, vec![1, 3]);
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_dish_distribution() {
        let d = dish_distribution(&dish(3, 0.0, 0.0, 50.0, 200.0));
        assert!((d.carbohydrates - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_distribution_sums_to_100() {
        let totals = aggregate_selection(
            &[SelectedDish::new(1, 1), SelectedDish::new(2, 2)],
            &catalog(),
        );
        let d = aggregate_distribution(&totals);
        assert!((d.sum() - 100.0).abs() < 1e-6);
    }
}
