use crate::models::{FormulaSummary, Ingredient, SummaryEntry};

/// Parse the longest numeric prefix of `text`, after leading whitespace.
///
/// Accepts an optional sign, digits with at most one decimal point, and an
/// optional exponent. Trailing garbage is ignored ("12abc" is 12). Returns
/// `None` when no digits lead the text.
pub fn parse_lenient_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when it has at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse an ingredient quantity.
///
/// Empty, unparsable, negative, or non-finite input counts as zero.
pub fn parse_quantity(text: &str) -> f64 {
    match parse_lenient_number(text) {
        Some(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

/// Share of `quantity` in `total`, in percent. Zero when the total is not positive.
#[inline]
pub fn percentage_of(quantity: f64, total: f64) -> f64 {
    if total > 0.0 {
        (quantity / total) * 100.0
    } else {
        0.0
    }
}

/// Sum of every parsed quantity, valid or not.
pub fn total_quantity(ingredients: &[Ingredient]) -> f64 {
    ingredients.iter().map(Ingredient::parsed_quantity).sum()
}

/// Compute the percentage summary of a formula.
///
/// Every row counts toward the total, but only rows with a non-blank name
/// and a positive quantity appear as entries. Returns `None` when no row
/// qualifies. Units are not converted.
pub fn compute_summary(ingredients: &[Ingredient]) -> Option<FormulaSummary> {
    let total = total_quantity(ingredients);

    let entries: Vec<SummaryEntry> = ingredients
        .iter()
        .enumerate()
        .filter(|(_, ing)| ing.is_valid())
        .map(|(i, ing)| {
            let quantity = ing.parsed_quantity();
            SummaryEntry {
                id: ing.id,
                position: i + 1,
                name: ing.name.clone(),
                quantity,
                unit: ing.unit.clone(),
                percentage: percentage_of(quantity, total),
                include_in_optimization: ing.include_in_optimization,
            }
        })
        .collect();

    let unit = entries.first()?.unit.clone();

    Some(FormulaSummary {
        total,
        unit,
        entries,
    })
}
