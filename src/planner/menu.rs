use crate::catalog::DishCatalog;
use crate::models::{MenuRequest, MenuResult, SelectedDishSummary};
use crate::planner::aggregation::aggregate_selection;
use crate::planner::constants::RESPONSE_DECIMALS;
use crate::planner::shopping::consolidate_shopping_list;

/// Run one planning request against the catalog.
///
/// Dishes are listed in request order; unknown ids are left out of every part
/// of the response. Totals and amounts are rounded for the response only.
pub fn process_menu<C>(request: &MenuRequest, catalog: &C) -> MenuResult
where
    C: DishCatalog + ?Sized,
{
    if request.dishes.is_empty() {
        return MenuResult::default();
    }

    let dishes = request
        .dishes
        .iter()
        .filter_map(|selected| {
            catalog.get_dish(selected.id).map(|dish| SelectedDishSummary {
                id: dish.id,
                name: dish.name.clone(),
                portions: selected.portions(),
            })
        })
        .collect();

    let totals = aggregate_selection(&request.dishes, catalog);
    let shopping = consolidate_shopping_list(&request.dishes, catalog);

    MenuResult {
        total_nutrition: totals.rounded(RESPONSE_DECIMALS),
        dishes,
        ingredients: shopping.to_items(RESPONSE_DECIMALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dish, DishIngredientLine, SelectedDish};

    fn catalog() -> Vec<Dish> {
        vec![Dish {
            id: 5,
            name: "Каша".to_string(),
            ingredients: vec![
                DishIngredientLine::new("Овсянка", 60.0),
                DishIngredientLine::new("Молоко", 200.0),
            ],
            weight_g: 260.0,
            energy_kcal: 345.333,
            protein_g: 13.0,
            fat_g: 9.6,
            carbohydrates_g: 50.0,
        }]
    }

    #[test]
    fn test_empty_request() {
        let result = process_menu(&MenuRequest::default(), &catalog());
        assert_eq!(result, MenuResult::default());
    }

    #[test]
    fn test_response_shape() {
        let request = MenuRequest {
            dishes: vec![SelectedDish::new(5, 2), SelectedDish::new(6, 1)],
        };
        let result = process_menu(&request, &catalog());

        assert_eq!(result.dishes.len(), 1);
        assert_eq!(result.dishes[0].name, "Каша");
        assert_eq!(result.dishes[0].portions, 2);
        assert_eq!(result.total_nutrition.calories, 690.67);
        assert_eq!(result.ingredients["Молоко"].amount, 400.0);
        assert_eq!(result.ingredients["Овсянка"].unit, "г");
    }

    #[test]
    fn test_response_json_keys() {
        let request: MenuRequest =
            serde_json::from_str(r#"{"dishes": [{"id": 5, "portions": 1}]}"#).unwrap();
        let json = serde_json::to_value(process_menu(&request, &catalog())).unwrap();
        assert!(json["total_nutrition"]["protein"].is_number());
        assert_eq!(json["dishes"][0]["id"], 5);
        assert_eq!(json["ingredients"]["Молоко"]["unit"], "г");
    }
}
