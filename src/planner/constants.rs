/// Energy per gram of protein, in kcal.
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy per gram of fat, in kcal.
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Energy per gram of carbohydrates, in kcal.
pub const KCAL_PER_GRAM_CARBOHYDRATES: f64 = 4.0;

/// Unit of every shopping-list entry. There is no unit conversion.
pub const SHOPPING_UNIT: &str = "г";

/// Decimal places kept in planning responses.
pub const RESPONSE_DECIMALS: i32 = 2;

/// Upper bound of the progress-bar width, in percent.
pub const DISPLAY_PERCENT_CAP: f64 = 100.0;

// ─────────────────────────────────────────────────────────────────────────────
// Goal severity breakpoints (percent of goal)
// ─────────────────────────────────────────────────────────────────────────────

/// Below this: minimal progress.
pub const SEVERITY_LOW_FROM: f64 = 20.0;

pub const SEVERITY_MODERATE_FROM: f64 = 40.0;

pub const SEVERITY_HIGH_FROM: f64 = 60.0;

/// At or above this: top bucket, no upper bound.
pub const SEVERITY_TOP_FROM: f64 = 80.0;
