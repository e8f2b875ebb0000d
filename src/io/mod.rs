mod csv;
mod export;
mod reviews;

pub use csv::{parse_records, quote_field, split_record};
pub use export::{read_annotated, write_annotated};
pub use reviews::read_reviews;
