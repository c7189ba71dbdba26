pub mod ingredient;
pub mod summary;

pub use ingredient::{Ingredient, IngredientId, IngredientPatch, MeasurementSystem};
pub use summary::{FormulaSummary, SummaryEntry};
