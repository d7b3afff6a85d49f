pub mod parser;
pub mod primitive;
pub mod tokenizer;

pub use parser::{receive, Parser};
