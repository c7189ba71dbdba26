pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_ingredient_patch, prompt_measurement_system, prompt_menu, prompt_path,
    prompt_select_ingredient, prompt_unit, prompt_yes_no, MenuAction,
};
pub use render::{
    display_ingredient, display_ingredients, display_summary, ingredient_label, name_column_width,
};
