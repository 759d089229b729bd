pub mod batch_converter;

pub use batch_converter::{batch_convert, BatchConverter};
