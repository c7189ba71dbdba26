use crate::formula::format_amount;
use crate::models::{FormulaSummary, Ingredient};

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() { "-" } else { text }
}

/// One-line label used in selection menus.
pub fn ingredient_label(index: usize, ingredient: &Ingredient) -> String {
    let name = if ingredient.name.trim().is_empty() {
        "(unnamed)"
    } else {
        ingredient.name.as_str()
    };
    format!(
        "#{} {} - {} {}",
        index + 1,
        name,
        or_dash(&ingredient.quantity),
        ingredient.unit
    )
}

/// Display one ingredient card.
pub fn display_ingredient(index: usize, ingredient: &Ingredient) {
    let optimize = if ingredient.include_in_optimization {
        "yes"
    } else {
        "no"
    };

    println!("Ingredient #{}", index + 1);
    println!("  Name:      {}", or_dash(&ingredient.name));
    println!(
        "  Quantity:  {} {} ({})",
        or_dash(&ingredient.quantity),
        ingredient.unit,
        ingredient.measurement_system
    );
    println!(
        "  Variation: min {}% / max {}%",
        or_dash(&ingredient.variation_min),
        or_dash(&ingredient.variation_max)
    );
    println!("  Optimize:  {}", optimize);
}

/// Display every ingredient in store order.
pub fn display_ingredients(ingredients: &[Ingredient]) {
    println!();
    println!("=== Ingredients [{}] loaded ===", ingredients.len());
    println!();

    for (i, ingredient) in ingredients.iter().enumerate() {
        display_ingredient(i, ingredient);
        println!();
    }
}

/// Width of the name column, in characters.
pub fn name_column_width(summary: &FormulaSummary) -> usize {
    summary
        .entries
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(10)
}

/// Display the formula summary panel, or a hint when nothing qualifies.
pub fn display_summary(summary: Option<&FormulaSummary>) {
    let Some(summary) = summary else {
        println!("No summary yet: give at least one ingredient a name and a quantity.");
        return;
    };

    println!();
    println!("=== Formula Summary ===");
    println!("Total: {} {}", format_amount(summary.total), summary.unit);
    println!();

    let max_name_len = name_column_width(summary);

    for entry in &summary.entries {
        let marker = if entry.include_in_optimization { "*" } else { " " };
        println!(
            "{:>3}. {:<width$}  {:>10} {:<6} {:>7}% {}",
            entry.position,
            entry.name,
            format_amount(entry.quantity),
            entry.unit,
            format_amount(entry.percentage),
            marker,
            width = max_name_len
        );
    }

    println!();
    println!(
        "Total Percentage: {}%",
        format_amount(summary.covered_percentage())
    );
    println!(
        "Included in optimization: {} of {}",
        summary.optimized_count(),
        summary.len()
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::compute_summary;
    use crate::models::IngredientId;

    #[test]
    fn test_ingredient_label() {
        let mut ing = Ingredient::blank(IngredientId(3));
        assert_eq!(ingredient_label(0, &ing), "#1 (unnamed) - - g");

        ing.name = "Salt".to_string();
        ing.quantity = "5".to_string();
        assert_eq!(ingredient_label(2, &ing), "#3 Salt - 5 g");
    }

    #[test]
    fn test_name_column_counts_chars() {
        let rows: Vec<Ingredient> = [(1, "Natriumchlorid ä", "2"), (2, "Salt", "1")]
            .into_iter()
            .map(|(id, name, qty)| Ingredient {
                name: name.to_string(),
                quantity: qty.to_string(),
                ..Ingredient::blank(IngredientId(id))
            })
            .collect();

        let summary = compute_summary(&rows).unwrap();
        assert_eq!(name_column_width(&summary), 16);
    }
}
