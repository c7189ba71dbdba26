use crate::formula::constants::{round_to, DISPLAY_DECIMALS};
use crate::models::IngredientId;

/// A valid ingredient's share of the formula.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryEntry {
    pub id: IngredientId,

    /// 1-based position of the ingredient in the store.
    pub position: usize,

    pub name: String,

    /// Parsed quantity.
    pub quantity: f64,

    pub unit: String,

    /// Unrounded share of the formula total, in percent.
    pub percentage: f64,

    pub include_in_optimization: bool,
}

impl SummaryEntry {
    /// Percentage rounded to display precision.
    pub fn display_percentage(&self) -> f64 {
        round_to(self.percentage, DISPLAY_DECIMALS)
    }
}

/// Derived, read-only view of a formula.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaSummary {
    /// Sum of every parsed quantity, including rows left out of `entries`.
    pub total: f64,

    /// Unit shown next to the total, taken from the first valid entry.
    /// Quantities are summed as raw numbers regardless of unit.
    pub unit: String,

    /// Valid ingredients in store order.
    pub entries: Vec<SummaryEntry>,
}

impl FormulaSummary {
    /// Combined share of the valid entries. Below 100 when rows without a
    /// name still carry a quantity.
    pub fn covered_percentage(&self) -> f64 {
        self.entries.iter().map(|e| e.percentage).sum()
    }

    /// Number of valid entries flagged for optimization.
    pub fn optimized_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.include_in_optimization)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
