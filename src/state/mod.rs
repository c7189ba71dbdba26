mod persistence;
mod store;

pub use persistence::{export_summary_csv, load_formula, save_formula};
pub use store::IngredientStore;
