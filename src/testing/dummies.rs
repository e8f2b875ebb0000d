use crate::core::document::Document;
use chrono::NaiveDate;

/// Builds one document per text with fixed metadata, for tests that only care
/// about the review text.
pub fn documents(texts: &[&str]) -> Vec<Document> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| document(t, 1 + (i % 5) as u8))
        .collect()
}

pub fn document(text: &str, rating: u8) -> Document {
    Document::new(
        "The Blue Plate".into(),
        format!("reviewer-{rating}"),
        text.into(),
        rating,
        NaiveDate::from_ymd_opt(2021, 3, 9)
            .unwrap()
            .and_hms_opt(12, 45, 0)
            .unwrap(),
    )
}

/// Tokenizes a slice of raw texts through the production cleaning path.
pub fn token_corpus(texts: &[&str]) -> Vec<Vec<String>> {
    texts.iter().map(|t| crate::text::tokenize(t)).collect()
}
