pub mod calculations;
pub mod constants;

pub use calculations::{
    compute_summary, parse_lenient_number, parse_quantity, percentage_of, total_quantity,
};
pub use constants::*;
