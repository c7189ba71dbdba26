use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormulaError {
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate ingredient id: {0}")]
    DuplicateId(u64),

    #[error("Formula has no ingredients")]
    EmptyFormula,
}

pub type Result<T> = std::result::Result<T, FormulaError>;
