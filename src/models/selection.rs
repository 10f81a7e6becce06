use serde::{Deserialize, Serialize};

/// A dish chosen for the menu with a portion multiplier.
///
/// `portions` is kept as received on the wire; use [`SelectedDish::portions`]
/// for the coerced integer value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectedDish {
    pub id: u32,

    #[serde(rename = "portions", default = "default_portions")]
    pub raw_portions: f64,
}

fn default_portions() -> f64 {
    1.0
}

impl SelectedDish {
    pub fn new(id: u32, portions: u32) -> Self {
        Self {
            id,
            raw_portions: portions as f64,
        }
    }

    /// Portions coerced to an integer >= 1.
    ///
    /// Fractional values are truncated; anything below one (or not finite)
    /// becomes one.
    pub fn portions(&self) -> u32 {
        coerce_portions(self.raw_portions)
    }
}

/// Coerce a raw portion count to an integer >= 1.
pub fn coerce_portions(raw: f64) -> u32 {
    if !raw.is_finite() || raw < 1.0 {
        return 1;
    }
    if raw >= u32::MAX as f64 {
        return u32::MAX;
    }
    raw.trunc() as u32
}

/// The dishes selected during one planning session, keyed by dish id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    entries: Vec<SelectedDish>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a dish with one portion, or deselect it if already selected.
    ///
    /// Returns true when the dish is selected after the call.
    pub fn toggle(&mut self, dish_id: u32) -> bool {
        if let Some(pos) = self.entries.iter().position(|e| e.id == dish_id) {
            self.entries.remove(pos);
            false
        } else {
            self.entries.push(SelectedDish::new(dish_id, 1));
            true
        }
    }

    /// Change the portions of a selected dish. Unselected dishes are ignored.
    pub fn set_portions(&mut self, dish_id: u32, portions: u32) -> bool {
        match self.entries.iter_mut().find(|e| e.id == dish_id) {
            Some(entry) => {
                entry.raw_portions = coerce_portions(portions as f64) as f64;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, dish_id: u32) -> bool {
        self.entries.iter().any(|e| e.id == dish_id)
    }

    pub fn portions_of(&self, dish_id: u32) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.id == dish_id)
            .map(SelectedDish::portions)
    }

    /// Start over.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[SelectedDish] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<SelectedDish>> for Selection {
    /// Later entries for an already present dish id replace its portions.
    fn from(items: Vec<SelectedDish>) -> Self {
        let mut selection = Selection::new();
        for item in items {
            match selection.entries.iter_mut().find(|e| e.id == item.id) {
                Some(existing) => existing.raw_portions = item.raw_portions,
                None => selection.entries.push(item),
            }
        }
        selection
    }
}
