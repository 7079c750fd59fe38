// Value parser: textual input -> byte sequence

pub mod literal;
pub mod parser;

pub use parser::{Mode, ParseError, parse};
