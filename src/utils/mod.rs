pub mod constants;
pub mod numeric;

pub use constants::*;
pub use numeric::{display_number, round_to, to_fixed, to_precision};
