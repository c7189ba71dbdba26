use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::formula::format_amount;
use crate::models::{FormulaSummary, Ingredient};
use crate::state::IngredientStore;

/// Load a formula from a JSON file.
///
/// The document is an array of ingredient records; see
/// [`IngredientStore::from_ingredients`] for the checks applied.
pub fn load_formula<P: AsRef<Path>>(path: P) -> Result<IngredientStore> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let ingredients: Vec<Ingredient> = serde_json::from_str(&content)?;
    let store = IngredientStore::from_ingredients(ingredients)?;
    info!(path = %path.display(), ingredients = store.len(), "loaded formula");
    Ok(store)
}

/// Save the store's ingredients to a JSON file.
pub fn save_formula<P: AsRef<Path>>(path: P, store: &IngredientStore) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(store.ingredients())?;
    fs::write(path, json)?;
    info!(path = %path.display(), ingredients = store.len(), "saved formula");
    Ok(())
}

/// Write the summary entries to a CSV file, one row per valid ingredient.
pub fn export_summary_csv<P: AsRef<Path>>(path: P, summary: &FormulaSummary) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "index",
        "name",
        "quantity",
        "unit",
        "percentage",
        "include_in_optimization",
    ])?;

    for entry in &summary.entries {
        wtr.write_record([
            entry.position.to_string(),
            entry.name.clone(),
            format_amount(entry.quantity),
            entry.unit.clone(),
            format_amount(entry.percentage),
            entry.include_in_optimization.to_string(),
        ])?;
    }

    wtr.flush()?;
    info!(path = %path.display(), rows = summary.len(), "exported summary");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormulaError;
    use crate::models::{IngredientPatch, MeasurementSystem};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_original_record_shape() {
        let json = r#"[
            {"id": 1, "name": "Sodium Chloride", "quantity": "25", "unit": "kg", "measurementSystem": "metric", "variationMin": "-10", "variationMax": "10", "includeInOptimization": false},
            {"id": 2, "name": "Water", "quantity": "3", "unit": "gal", "measurementSystem": "imperial"}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = load_formula(file.path()).unwrap();
        assert_eq!(store.len(), 2);

        let salt = &store.ingredients()[0];
        assert_eq!(salt.variation_min, "-10");
        assert!(!salt.include_in_optimization);

        let water = &store.ingredients()[1];
        assert_eq!(water.measurement_system, MeasurementSystem::Imperial);
        assert!(water.include_in_optimization);
        assert_eq!(water.variation_max, "");
    }

    #[test]
    fn test_save_and_reload() {
        let mut store = IngredientStore::new();
        let id = store.ingredients()[0].id;
        store.update(
            id,
            &IngredientPatch::new()
                .name("Glycerin")
                .quantity("12.5")
                .measurement_system(MeasurementSystem::Imperial)
                .unit("fl oz"),
        );
        store.duplicate(id);

        let file = NamedTempFile::new().unwrap();
        save_formula(file.path(), &store).unwrap();

        let reloaded = load_formula(file.path()).unwrap();
        assert_eq!(reloaded.ingredients(), store.ingredients());
    }

    #[test]
    fn test_load_empty_array_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();

        assert!(matches!(
            load_formula(file.path()),
            Err(FormulaError::EmptyFormula)
        ));
    }

    #[test]
    fn test_export_csv() {
        let mut store = IngredientStore::new();
        let salt = store.ingredients()[0].id;
        store.update(salt, &IngredientPatch::new().name("Salt").quantity("1"));
        let water = store.add();
        store.update(water, &IngredientPatch::new().name("Water").quantity("3"));
        store.add();

        let summary = store.compute_summary().unwrap();
        let file = NamedTempFile::new().unwrap();
        export_summary_csv(file.path(), &summary).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "index,name,quantity,unit,percentage,include_in_optimization"
        );
        assert_eq!(lines[1], "1,Salt,1.00,g,25.00,true");
        assert_eq!(lines[2], "2,Water,3.00,g,75.00,true");
        assert_eq!(lines.len(), 3);
    }
}
