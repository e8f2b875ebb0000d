mod normalizer;
mod stopwords;

pub use normalizer::{clean, tokenize};
pub use stopwords::is_stopword;
