use serde::{Deserialize, Serialize};

use crate::models::Nutrition;

/// A catalog ingredient. `name` is the join key used by dish lines and the
/// shopping list; it is case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u32,
    pub name: String,
    /// Nutrition per 100 grams.
    pub nutrition: Nutrition,
}

impl Ingredient {
    pub fn new(id: u32, name: impl Into<String>, nutrition: Nutrition) -> Self {
        Self {
            id,
            name: name.into(),
            nutrition,
        }
    }

    /// Nutrition contained in `amount_g` grams of this ingredient.
    pub fn nutrition_for(&self, amount_g: f64) -> Nutrition {
        self.nutrition.for_amount(amount_g)
    }

    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.nutrition.is_valid()
    }
}

/// One row of an ingredient CSV import.
///
/// Empty macro cells count as zero. When `calories` is absent it is derived
/// from the macros.
#[derive(Debug, Clone, Deserialize)]
pub struct IngredientRecord {
    pub name: String,

    #[serde(default, deserialize_with = "empty_as_zero")]
    pub protein_g: f64,

    #[serde(default, deserialize_with = "empty_as_zero")]
    pub fat_g: f64,

    #[serde(default, deserialize_with = "empty_as_zero")]
    pub carbohydrates_g: f64,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub calories: Option<f64>,
}

impl IngredientRecord {
    pub fn nutrition(&self) -> Nutrition {
        let mut nutrition = Nutrition::from_macros(self.protein_g, self.fat_g, self.carbohydrates_g);
        if let Some(calories) = self.calories {
            nutrition.calories = calories;
        }
        nutrition
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn empty_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(empty_as_none(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn egg() -> Ingredient {
        Ingredient::new(
            1,
            "Яйцо",
            Nutrition {
                calories: 155.0,
                proteins: 13.0,
                fats: 11.0,
                carbohydrates: 1.0,
            },
        )
    }

    #[test]
    fn test_nutrition_for_amount() {
        let n = egg().nutrition_for(200.0);
        assert!((n.calories - 310.0).abs() < 1e-9);
        assert!((n.proteins - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(egg().is_valid());
        let mut blank = egg();
        blank.name = "  ".to_string();
        assert!(!blank.is_valid());
    }

    #[test]
    fn test_record_without_calories_uses_macros() {
        let record = IngredientRecord {
            name: "Рис".to_string(),
            protein_g: 7.0,
            fat_g: 1.0,
            carbohydrates_g: 78.0,
            calories: None,
        };
        assert!((record.nutrition().calories - 349.0).abs() < 1e-9);
    }

    #[test]
    fn test_record_with_calories_keeps_declared_value() {
        let record = IngredientRecord {
            name: "Рис".to_string(),
            protein_g: 7.0,
            fat_g: 1.0,
            carbohydrates_g: 78.0,
            calories: Some(344.0),
        };
        assert_eq!(record.nutrition().calories, 344.0);
    }
}
