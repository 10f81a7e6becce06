use serde::{Deserialize, Serialize};

use crate::planner::calculations::calories_from_macros;

/// Nutrition values of an ingredient, expressed per 100 grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
}

impl Nutrition {
    /// Build nutrition from macros, deriving calories with the 4/9/4 rule.
    pub fn from_macros(proteins: f64, fats: f64, carbohydrates: f64) -> Self {
        Self {
            calories: calories_from_macros(proteins, fats, carbohydrates),
            proteins,
            fats,
            carbohydrates,
        }
    }

    /// Nutrition contained in `amount_g` grams.
    #[inline]
    pub fn for_amount(&self, amount_g: f64) -> Self {
        let factor = amount_g / 100.0;
        Self {
            calories: self.calories * factor,
            proteins: self.proteins * factor,
            fats: self.fats * factor,
            carbohydrates: self.carbohydrates * factor,
        }
    }

    /// All values are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.proteins, self.fats, self.carbohydrates]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

/// The four tracked nutrients, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Protein,
    Fat,
    Carbohydrates,
    Calories,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Protein,
        Nutrient::Fat,
        Nutrient::Carbohydrates,
        Nutrient::Calories,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein",
            Nutrient::Fat => "Fat",
            Nutrient::Carbohydrates => "Carbohydrates",
            Nutrient::Calories => "Calories",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

/// Aggregate nutrition of a dish selection.
///
/// Serialized with the field names used by planning responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionTotals {
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    pub calories: f64,
}

impl NutritionTotals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Calories => self.calories,
        }
    }

    /// Pointwise sum.
    pub fn add(&self, other: &NutritionTotals) -> NutritionTotals {
        NutritionTotals {
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            carbohydrates: self.carbohydrates + other.carbohydrates,
            calories: self.calories + other.calories,
        }
    }

    pub fn scaled(&self, factor: f64) -> NutritionTotals {
        NutritionTotals {
            protein: self.protein * factor,
            fat: self.fat * factor,
            carbohydrates: self.carbohydrates * factor,
            calories: self.calories * factor,
        }
    }

    /// Round every value to `decimals` places.
    pub fn rounded(&self, decimals: i32) -> NutritionTotals {
        let round = |v: f64| crate::planner::calculations::round_to(v, decimals);
        NutritionTotals {
            protein: round(self.protein),
            fat: round(self.fat),
            carbohydrates: round(self.carbohydrates),
            calories: round(self.calories),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_macros_uses_4_9_4() {
        let n = Nutrition::from_macros(10.0, 10.0, 10.0);
        assert!((n.calories - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_for_amount_scales_per_100g() {
        let milk = Nutrition {
            calories: 60.0,
            proteins: 3.0,
            fats: 3.0,
            carbohydrates: 5.0,
        };
        let half = milk.for_amount(50.0);
        assert!((half.calories - 30.0).abs() < 1e-9);
        assert!((half.proteins - 1.5).abs() < 1e-9);
        assert!((half.carbohydrates - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid_rejects_negative() {
        let mut n = Nutrition::from_macros(1.0, 1.0, 1.0);
        assert!(n.is_valid());
        n.fats = -1.0;
        assert!(!n.is_valid());
    }

    #[test]
    fn test_totals_add_and_get() {
        let a = NutritionTotals {
            protein: 1.0,
            fat: 2.0,
            carbohydrates: 3.0,
            calories: 4.0,
        };
        let sum = a.add(&a.scaled(2.0));
        assert_eq!(sum.get(Nutrient::Protein), 3.0);
        assert_eq!(sum.get(Nutrient::Calories), 12.0);
    }
}
