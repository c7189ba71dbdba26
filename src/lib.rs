pub mod cli;
pub mod error;
pub mod formula;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{FormulaError, Result};
pub use models::{FormulaSummary, Ingredient, IngredientId, IngredientPatch, MeasurementSystem};
pub use state::IngredientStore;
