use crate::core::dataset::Dataset;
use crate::core::document::Document;
use crate::error::PipelineError;
use crate::io::csv::parse_records;
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;

pub(crate) const TIME_FORMAT: &str = "%m/%d/%Y %H:%M";

const REQUIRED: [&str; 5] = ["Restaurant", "Reviewer", "Review", "Rating", "Time"];

/// Loads the raw review table.
///
/// Columns are located by header name; anything else in the file (the unnamed
/// numeric index column, Pictures, ...) is ignored. A row with a missing
/// required field, an out-of-range rating or an unparseable timestamp is
/// dropped whole — the second element of the result counts the drops so the
/// operator can decide whether the file needs fixing. Whole-file semantics:
/// either the complete dataset loads or the call fails.
pub fn read_reviews(path: &Path) -> Result<(Dataset, usize), PipelineError> {
    let text = fs::read_to_string(path)?;
    let mut records = parse_records(&text).into_iter();

    let (_, header) = records.next().ok_or_else(|| PipelineError::MalformedRow {
        line: 1,
        reason: "file has no header row".into(),
    })?;
    let column = |name: &str| -> Result<usize, PipelineError> {
        header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| PipelineError::MalformedRow {
                line: 1,
                reason: format!("missing required column {name}"),
            })
    };
    let columns: Vec<usize> = REQUIRED
        .iter()
        .map(|name| column(name))
        .collect::<Result<_, _>>()?;
    let [restaurant, reviewer, review, rating, time] = columns[..] else {
        unreachable!("REQUIRED has five entries");
    };

    let mut documents = Vec::new();
    let mut dropped = 0usize;
    for (_, fields) in records {
        match parse_row(&fields, restaurant, reviewer, review, rating, time) {
            Some(document) => documents.push(document),
            None => dropped += 1,
        }
    }
    Ok((Dataset::new(documents), dropped))
}

fn parse_row(
    fields: &[String],
    restaurant: usize,
    reviewer: usize,
    review: usize,
    rating: usize,
    time: usize,
) -> Option<Document> {
    let required = |i: usize| -> Option<&str> {
        let value = fields.get(i)?.trim();
        if value.is_empty() { None } else { Some(value) }
    };

    let rating: u8 = required(rating)?.parse().ok()?;
    if !(1..=5).contains(&rating) {
        return None;
    }
    let posted_at = NaiveDateTime::parse_from_str(required(time)?, TIME_FORMAT).ok()?;

    Some(Document::new(
        required(restaurant)?.to_string(),
        required(reviewer)?.to_string(),
        required(review)?.to_string(),
        rating,
        posted_at,
    ))
}
