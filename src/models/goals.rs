use serde::{Deserialize, Serialize};

use crate::models::Nutrient;

/// Daily nutrition goals. A value of `0` means no goal is set for that nutrient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    #[serde(default)]
    pub protein: f64,

    #[serde(default)]
    pub fat: f64,

    #[serde(default)]
    pub carbohydrates: f64,

    #[serde(default)]
    pub calories: f64,
}

impl Goals {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Fat => self.fat,
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Calories => self.calories,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: f64) {
        match nutrient {
            Nutrient::Protein => self.protein = value,
            Nutrient::Fat => self.fat = value,
            Nutrient::Carbohydrates => self.carbohydrates = value,
            Nutrient::Calories => self.calories = value,
        }
    }

    #[inline]
    pub fn is_set(&self, nutrient: Nutrient) -> bool {
        self.get(nutrient) > 0.0
    }

    /// True when no nutrient has a goal.
    pub fn is_empty(&self) -> bool {
        Nutrient::ALL.iter().all(|n| !self.is_set(*n))
    }

    /// All goals finite and non-negative.
    pub fn is_valid(&self) -> bool {
        Nutrient::ALL
            .iter()
            .map(|n| self.get(*n))
            .all(|v| v.is_finite() && v >= 0.0)
    }
}
