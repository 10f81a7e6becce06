use serde::{Deserialize, Serialize};

use crate::models::{Goals, Nutrient, NutritionTotals};
use crate::planner::calculations::{display_percentage, goal_percentage};
use crate::planner::constants::*;

/// Five display buckets for progress towards a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Below 20%.
    Minimal,
    /// 20% to below 40%.
    Low,
    /// 40% to below 60%.
    Moderate,
    /// 60% to below 80%.
    High,
    /// 80% and above, including anything over 100%.
    Top,
}

impl Severity {
    pub fn from_percent(percent: f64) -> Self {
        if percent < SEVERITY_LOW_FROM {
            Severity::Minimal
        } else if percent < SEVERITY_MODERATE_FROM {
            Severity::Low
        } else if percent < SEVERITY_HIGH_FROM {
            Severity::Moderate
        } else if percent < SEVERITY_TOP_FROM {
            Severity::High
        } else {
            Severity::Top
        }
    }

    /// Display color of the bucket.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Minimal => "green",
            Severity::Low => "blue",
            Severity::Moderate => "yellow",
            Severity::High => "orange",
            Severity::Top => "red",
        }
    }
}

/// Progress of one nutrient towards its goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    pub nutrient: Nutrient,
    pub current: f64,
    pub goal: f64,
    /// Uncapped percentage used for text and sorting.
    pub percent: f64,
    /// Percentage clamped to 100, for progress-bar width only.
    pub display_percent: f64,
    pub severity: Severity,
}

impl NutrientProgress {
    pub fn new(nutrient: Nutrient, current: f64, goal: f64) -> Self {
        let percent = goal_percentage(current, goal);
        Self {
            nutrient,
            current,
            goal,
            percent,
            display_percent: display_percentage(percent),
            severity: Severity::from_percent(percent),
        }
    }

    #[inline]
    pub fn has_goal(&self) -> bool {
        self.goal > 0.0
    }
}

/// Per-nutrient comparison of aggregated totals against goals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalComparison {
    pub nutrients: Vec<NutrientProgress>,
}

impl GoalComparison {
    pub fn get(&self, nutrient: Nutrient) -> Option<&NutrientProgress> {
        self.nutrients.iter().find(|p| p.nutrient == nutrient)
    }

    /// Nutrients ordered by descending percentage.
    pub fn sorted_by_percent(&self) -> Vec<&NutrientProgress> {
        let mut sorted: Vec<&NutrientProgress> = self.nutrients.iter().collect();
        sorted.sort_by(|a, b| {
            b.percent
                .partial_cmp(&a.percent)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        sorted
    }
}

/// Compare aggregated totals with goals for every nutrient.
pub fn compare_to_goals(totals: &NutritionTotals, goals: &Goals) -> GoalComparison {
    GoalComparison {
        nutrients: Nutrient::ALL
            .iter()
            .map(|n| NutrientProgress::new(*n, totals.get(*n), goals.get(*n)))
            .collect(),
    }
}
