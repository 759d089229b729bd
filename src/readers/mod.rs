pub mod token_reader;

pub use token_reader::TokenReader;
