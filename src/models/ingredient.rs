use std::fmt;

use serde::{Deserialize, Serialize};

use crate::formula::calculations::{parse_lenient_number, parse_quantity};
use crate::formula::constants::{IMPERIAL_UNITS, METRIC_UNITS};

/// Store-assigned identifier of an ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientId(pub u64);

impl fmt::Display for IngredientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Measurement system constraining which unit strings are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    #[default]
    Metric,
    Imperial,
}

impl MeasurementSystem {
    /// Units selectable under this system.
    pub fn units(self) -> &'static [&'static str] {
        match self {
            MeasurementSystem::Metric => &METRIC_UNITS,
            MeasurementSystem::Imperial => &IMPERIAL_UNITS,
        }
    }

    /// Unit an ingredient falls back to when switched to this system.
    pub fn default_unit(self) -> &'static str {
        self.units()[0]
    }

    pub fn allows(self, unit: &str) -> bool {
        self.units().contains(&unit)
    }

    pub fn label(self) -> &'static str {
        match self {
            MeasurementSystem::Metric => "Metric",
            MeasurementSystem::Imperial => "Imperial",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a formula: a named quantity with a unit and optimization metadata.
///
/// Numeric fields are kept as the text the user entered; parsing happens
/// when the summary is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: IngredientId,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub quantity: String,

    pub unit: String,

    #[serde(default)]
    pub measurement_system: MeasurementSystem,

    #[serde(default)]
    pub variation_min: String,

    #[serde(default)]
    pub variation_max: String,

    #[serde(default = "default_include")]
    pub include_in_optimization: bool,
}

fn default_include() -> bool {
    true
}

impl Ingredient {
    /// A blank metric ingredient, included in optimization.
    pub fn blank(id: IngredientId) -> Self {
        let system = MeasurementSystem::Metric;
        Self {
            id,
            name: String::new(),
            quantity: String::new(),
            unit: system.default_unit().to_string(),
            measurement_system: system,
            variation_min: String::new(),
            variation_max: String::new(),
            include_in_optimization: true,
        }
    }

    /// Parsed quantity; anything unparsable counts as zero.
    pub fn parsed_quantity(&self) -> f64 {
        parse_quantity(&self.quantity)
    }

    /// Whether the row contributes an entry to the formula summary.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && self.parsed_quantity() > 0.0
    }

    /// Whether `unit` belongs to the current measurement system.
    pub fn has_consistent_unit(&self) -> bool {
        self.measurement_system.allows(&self.unit)
    }

    /// Variation bounds as entered, parsed leniently. Empty or unparsable
    /// fields yield `None`. No ordering between min and max is enforced.
    pub fn variation_bounds(&self) -> (Option<f64>, Option<f64>) {
        (
            parse_lenient_number(&self.variation_min),
            parse_lenient_number(&self.variation_max),
        )
    }
}

/// A partial update to an [`Ingredient`]. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IngredientPatch {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
    pub measurement_system: Option<MeasurementSystem>,
    pub variation_min: Option<String>,
    pub variation_max: Option<String>,
    pub include_in_optimization: Option<bool>,
}

impl IngredientPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Switch measurement system. Pair with [`IngredientPatch::unit`] to pick
    /// a specific unit; otherwise the system's default unit is used.
    pub fn measurement_system(mut self, system: MeasurementSystem) -> Self {
        self.measurement_system = Some(system);
        self
    }

    pub fn variation(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.variation_min = Some(min.into());
        self.variation_max = Some(max.into());
        self
    }

    pub fn include_in_optimization(mut self, include: bool) -> Self {
        self.include_in_optimization = Some(include);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge this patch over `base`, producing a new record with the same id.
    ///
    /// The result always carries a unit from its measurement system. A foreign
    /// unit keeps the current unit when the system is unchanged, and becomes
    /// the new system's default when the system switched.
    pub fn apply(&self, base: &Ingredient) -> Ingredient {
        let mut next = base.clone();

        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(quantity) = &self.quantity {
            next.quantity = quantity.clone();
        }
        if let Some(system) = self.measurement_system {
            next.measurement_system = system;
        }
        if let Some(unit) = &self.unit {
            next.unit = unit.clone();
        }
        if let Some(min) = &self.variation_min {
            next.variation_min = min.clone();
        }
        if let Some(max) = &self.variation_max {
            next.variation_max = max.clone();
        }
        if let Some(include) = self.include_in_optimization {
            next.include_in_optimization = include;
        }

        if !next.has_consistent_unit() {
            let system_changed = next.measurement_system != base.measurement_system;
            next.unit = if !system_changed && base.has_consistent_unit() {
                base.unit.clone()
            } else {
                next.measurement_system.default_unit().to_string()
            };
        }

        next
    }
}
