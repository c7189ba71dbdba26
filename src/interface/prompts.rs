use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::interface::render::ingredient_label;
use crate::models::{Ingredient, IngredientId, IngredientPatch, MeasurementSystem};

/// Actions offered by the interactive editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Edit,
    Duplicate,
    Remove,
    Show,
    Save,
    Export,
    Quit,
}

impl MenuAction {
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::Add => "Add ingredient",
            MenuAction::Edit => "Edit ingredient",
            MenuAction::Duplicate => "Duplicate ingredient",
            MenuAction::Remove => "Remove ingredient",
            MenuAction::Show => "Show formula",
            MenuAction::Save => "Save",
            MenuAction::Export => "Export summary CSV",
            MenuAction::Quit => "Quit",
        }
    }

    /// Menu entries in display order. Remove is hidden while only one
    /// ingredient is left.
    pub fn available(can_remove: bool) -> Vec<MenuAction> {
        let mut actions = vec![MenuAction::Add, MenuAction::Edit, MenuAction::Duplicate];
        if can_remove {
            actions.push(MenuAction::Remove);
        }
        actions.extend([
            MenuAction::Show,
            MenuAction::Save,
            MenuAction::Export,
            MenuAction::Quit,
        ]);
        actions
    }
}

/// Prompt for the next editor action.
pub fn prompt_menu(can_remove: bool) -> Result<MenuAction> {
    let actions = MenuAction::available(can_remove);
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

    let selection = Select::new()
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(actions[selection])
}

/// Let the user pick one ingredient. Returns `None` if they back out.
pub fn prompt_select_ingredient(
    ingredients: &[Ingredient],
    prompt: &str,
) -> Result<Option<IngredientId>> {
    let mut options: Vec<String> = ingredients
        .iter()
        .enumerate()
        .map(|(i, ing)| ingredient_label(i, ing))
        .collect();
    options.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&options)
        .default(0)
        .interact()?;

    Ok(ingredients.get(selection).map(|ing| ing.id))
}

fn prompt_text(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()?;
    Ok(input)
}

/// Prompt for the measurement system, defaulting to `current`.
pub fn prompt_measurement_system(current: MeasurementSystem) -> Result<MeasurementSystem> {
    let systems = [MeasurementSystem::Metric, MeasurementSystem::Imperial];
    let labels: Vec<&str> = systems.iter().map(|s| s.label()).collect();
    let default = systems.iter().position(|s| *s == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Measurement system")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(systems[selection])
}

/// Prompt for a unit of `system`, defaulting to `current` when it belongs to it.
pub fn prompt_unit(system: MeasurementSystem, current: &str) -> Result<String> {
    let units = system.units();
    let default = units.iter().position(|u| *u == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Unit")
        .items(units)
        .default(default)
        .interact()?;

    Ok(units[selection].to_string())
}

/// Walk through every field of `current` and collect the changes as a patch.
///
/// Unchanged fields stay unset. Numeric fields are taken as typed; the
/// summary treats anything unparsable as zero.
pub fn prompt_ingredient_patch(current: &Ingredient) -> Result<IngredientPatch> {
    let mut patch = IngredientPatch::new();

    let name = prompt_text("Name (e.g. Sodium Chloride)", &current.name)?;
    if name != current.name {
        patch = patch.name(name);
    }

    let quantity = prompt_text("Quantity", &current.quantity)?;
    if quantity != current.quantity {
        patch = patch.quantity(quantity);
    }

    let system = prompt_measurement_system(current.measurement_system)?;
    if system != current.measurement_system {
        patch = patch.measurement_system(system);
    }

    let unit = prompt_unit(system, &current.unit)?;
    if unit != current.unit {
        patch = patch.unit(unit);
    }

    let min = prompt_text("Variation min (%)", &current.variation_min)?;
    let max = prompt_text("Variation max (%)", &current.variation_max)?;
    if min != current.variation_min || max != current.variation_max {
        patch = patch.variation(min, max);
    }

    let include = prompt_yes_no("Include in optimization?", current.include_in_optimization)?;
    if include != current.include_in_optimization {
        patch = patch.include_in_optimization(include);
    }

    Ok(patch)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a file path, defaulting to `default`.
pub fn prompt_path(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_hidden_for_single_ingredient() {
        assert!(!MenuAction::available(false).contains(&MenuAction::Remove));
        assert!(MenuAction::available(true).contains(&MenuAction::Remove));
        assert_eq!(MenuAction::available(true).len(), 8);
    }
}
