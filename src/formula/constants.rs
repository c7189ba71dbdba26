/// Units selectable under the metric system. The first entry is the default.
pub const METRIC_UNITS: [&str; 5] = ["g", "kg", "mg", "mL", "L"];

/// Units selectable under the imperial system. The first entry is the default.
pub const IMPERIAL_UNITS: [&str; 6] = ["oz", "lb", "fl oz", "gal", "tsp", "tbsp"];

/// Appended to the name of a duplicated ingredient.
pub const COPY_SUFFIX: &str = " (copy)";

/// Decimal places used when displaying quantities and percentages.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Round a value to `decimals` places for display.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Format a quantity or percentage with the display precision.
pub fn format_amount(value: f64) -> String {
    format!("{:.*}", DISPLAY_DECIMALS as usize, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(33.333_333, 2), 33.33);
        assert_eq!(round_to(66.666_666, 2), 66.67);
        assert_eq!(round_to(50.0, 2), 50.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0), "100.00");
        assert_eq!(format_amount(12.345_6), "12.35");
    }
}
