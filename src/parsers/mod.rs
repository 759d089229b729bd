pub mod classifier;
pub mod extractor;

pub use classifier::{classify, classify_coordinate, validate_range};
pub use extractor::{extract, extract_number, extract_str};
