use assert_float_eq::assert_float_absolute_eq;

use formula_optimizer_rs::models::{IngredientPatch, MeasurementSystem};
use formula_optimizer_rs::state::IngredientStore;

fn store_with(rows: &[(&str, &str)]) -> IngredientStore {
    let mut store = IngredientStore::new();
    for (i, (name, qty)) in rows.iter().enumerate() {
        let id = if i == 0 {
            store.ingredients()[0].id
        } else {
            store.add()
        };
        store.update(id, &IngredientPatch::new().name(*name).quantity(*qty));
    }
    store
}

#[test]
fn test_salt_and_water_split_evenly() {
    let mut store = IngredientStore::new();
    let salt = store.ingredients()[0].id;
    store.update(salt, &IngredientPatch::new().name("Salt").quantity("50"));
    let water = store.add();
    store.update(water, &IngredientPatch::new().name("Water").quantity("50"));

    let summary = store.compute_summary().unwrap();
    assert_float_absolute_eq!(summary.total, 100.0, 1e-9);
    assert_eq!(summary.len(), 2);
    assert_eq!(summary.unit, "g");
    for entry in &summary.entries {
        assert_eq!(entry.display_percentage(), 50.0);
    }
    assert_eq!(summary.entries[0].name, "Salt");
    assert_eq!(summary.entries[1].name, "Water");
}

#[test]
fn test_percentages_sum_to_hundred() {
    let store = store_with(&[
        ("A", "1"),
        ("B", "2"),
        ("C", "3.3"),
        ("D", "0.07"),
        ("E", "17"),
        ("F", "1e2"),
    ]);

    let summary = store.compute_summary().unwrap();
    assert_eq!(summary.len(), 6);
    assert_float_absolute_eq!(summary.covered_percentage(), 100.0, 1e-9);
}

#[test]
fn test_thirds_round_for_display_only() {
    let store = store_with(&[("A", "1"), ("B", "1"), ("C", "1")]);
    let summary = store.compute_summary().unwrap();

    for entry in &summary.entries {
        assert_eq!(entry.display_percentage(), 33.33);
        assert!(entry.percentage > 33.33);
    }
    assert_float_absolute_eq!(summary.covered_percentage(), 100.0, 1e-9);
}

#[test]
fn test_zero_total_has_no_summary() {
    let store = store_with(&[("Salt", "0"), ("Water", ""), ("Sugar", "abc")]);
    assert!(store.compute_summary().is_none());

    let blank = IngredientStore::new();
    assert!(blank.compute_summary().is_none());
}

#[test]
fn test_nameless_rows_excluded_but_counted() {
    let store = store_with(&[("Salt", "25"), ("   ", "75")]);
    let summary = store.compute_summary().unwrap();

    assert_float_absolute_eq!(summary.total, 100.0, 1e-9);
    assert_eq!(summary.len(), 1);
    assert_float_absolute_eq!(summary.entries[0].percentage, 25.0, 1e-9);
    assert!(summary.entries.iter().all(|e| e.percentage.is_finite()));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_mixed_units_summed_without_conversion() {
    let mut store = store_with(&[("Oil", "2"), ("Flour", "3")]);
    let oil = store.ingredients()[0].id;
    store.update(
        oil,
        &IngredientPatch::new()
            .measurement_system(MeasurementSystem::Imperial)
            .unit("lb"),
    );

    let summary = store.compute_summary().unwrap();
    assert_float_absolute_eq!(summary.total, 5.0, 1e-9);
    assert_eq!(summary.unit, "lb");
    assert_float_absolute_eq!(summary.entries[0].percentage, 40.0, 1e-9);
    assert_float_absolute_eq!(summary.entries[1].percentage, 60.0, 1e-9);
}

#[test]
fn test_optimized_count() {
    let mut store = store_with(&[("Salt", "1"), ("Water", "1"), ("", "1")]);
    let salt = store.ingredients()[0].id;
    store.update(salt, &IngredientPatch::new().include_in_optimization(false));

    let summary = store.compute_summary().unwrap();
    assert_eq!(summary.optimized_count(), 1);
}
