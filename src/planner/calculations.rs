use serde::{Deserialize, Serialize};

use crate::planner::constants::*;

/// Share of calories contributed by each macro, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroDistribution {
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl MacroDistribution {
    /// Sum of the three shares. 100 for any non-empty input, 0 otherwise.
    pub fn sum(&self) -> f64 {
        self.protein + self.fat + self.carbohydrates
    }
}

/// Energy of the given macros using the 4/9/4 kcal-per-gram rule.
#[inline]
pub fn calories_from_macros(proteins_g: f64, fats_g: f64, carbs_g: f64) -> f64 {
    proteins_g * KCAL_PER_GRAM_PROTEIN
        + fats_g * KCAL_PER_GRAM_FAT
        + carbs_g * KCAL_PER_GRAM_CARBOHYDRATES
}

/// Calorie distribution between protein, fat and carbohydrates.
///
/// Returns all zeros when every macro is zero.
pub fn macro_calorie_distribution(protein_g: f64, fat_g: f64, carb_g: f64) -> MacroDistribution {
    let protein_kcal = protein_g * KCAL_PER_GRAM_PROTEIN;
    let fat_kcal = fat_g * KCAL_PER_GRAM_FAT;
    let carb_kcal = carb_g * KCAL_PER_GRAM_CARBOHYDRATES;

    let total = protein_kcal + fat_kcal + carb_kcal;
    if total == 0.0 {
        return MacroDistribution::default();
    }

    MacroDistribution {
        protein: protein_kcal / total * 100.0,
        fat: fat_kcal / total * 100.0,
        carbohydrates: carb_kcal / total * 100.0,
    }
}

/// Progress towards a goal, in percent. Uncapped.
///
/// A goal of zero means "not set" and yields 0.
#[inline]
pub fn goal_percentage(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    current / goal * 100.0
}

/// Percentage clamped to `[0, 100]` for progress-bar width.
#[inline]
pub fn display_percentage(percent: f64) -> f64 {
    percent.clamp(0.0, DISPLAY_PERCENT_CAP)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_from_macros() {
        assert!((calories_from_macros(10.0, 5.0, 20.0) - 165.0).abs() < 1e-9);
        assert_eq!(calories_from_macros(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_distribution_all_zero() {
        let d = macro_calorie_distribution(0.0, 0.0, 0.0);
        assert_eq!(d, MacroDistribution::default());
    }

    #[test]
    fn test_distribution_single_macro() {
        let d = macro_calorie_distribution(0.0, 10.0, 0.0);
        assert!((d.fat - 100.0).abs() < 1e-9);
        assert_eq!(d.protein, 0.0);
        assert_eq!(d.carbohydrates, 0.0);
    }

    #[test]
    fn test_distribution_weights_fat_by_nine() {
        // 10g each: 40 + 90 + 40 = 170 kcal
        let d = macro_calorie_distribution(10.0, 10.0, 10.0);
        assert!((d.fat - 90.0 / 170.0 * 100.0).abs() < 1e-9);
        assert!((d.protein - d.carbohydrates).abs() < 1e-12);
        assert!((d.sum() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_goal_percentage_zero_goal() {
        assert_eq!(goal_percentage(29.0, 0.0), 0.0);
        assert_eq!(goal_percentage(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_goal_percentage_uncapped() {
        assert!((goal_percentage(150.0, 100.0) - 150.0).abs() < 1e-9);
        assert!((goal_percentage(25.0, 200.0) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_display_percentage_clamps() {
        assert_eq!(display_percentage(150.0), 100.0);
        assert_eq!(display_percentage(42.5), 42.5);
        assert_eq!(display_percentage(-3.0), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 2), 1.23);
        assert_eq!(round_to(2.675_000_1, 2), 2.68);
        assert_eq!(round_to(440.0, 2), 440.0);
    }
}
