//! Text handling: tokenization, delimiters, and the word filter.

pub mod delimiters;
pub mod filter;
pub mod stop_words;
pub mod tokenizer;

pub use delimiters::WordDelimiters;
pub use filter::WordFilter;
pub use tokenizer::{tokenize, Tokenizer};
