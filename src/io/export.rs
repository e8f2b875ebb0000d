use crate::core::dataset::AnnotatedDataset;
use crate::core::document::Document;
use crate::core::labels::{Annotation, Aspect, LabelSource, Sentiment};
use crate::error::PipelineError;
use crate::io::csv::{parse_records, quote_field};
use crate::io::reviews::TIME_FORMAT;
use chrono::NaiveDateTime;
use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const UNLABELED: &str = "Unlabeled";

const COLUMNS: [&str; 11] = [
    "Restaurant",
    "Reviewer",
    "Review",
    "Rating",
    "Time",
    "Hour",
    "Weekday",
    "SatisfactionLevel",
    "Sentiments",
    "Sentiment_Description",
    "Label_Sources",
];

/// Writes the annotated dataset: the ingested columns plus the derived ones
/// (Hour, Weekday, SatisfactionLevel), the two label columns, and their
/// provenance as a `sentiment-source/aspect-source` pair so a re-import
/// restores annotations exactly.
pub fn write_annotated(path: &Path, dataset: &AnnotatedDataset) -> Result<(), PipelineError> {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');

    for (i, document) in dataset.documents.iter().enumerate() {
        let sentiment = dataset.sentiments[i];
        let aspect = dataset.aspects[i];
        let row = [
            quote_field(&document.restaurant),
            quote_field(&document.reviewer),
            quote_field(&document.text),
            document.rating.to_string(),
            document.posted_at.format(TIME_FORMAT).to_string(),
            document.hour().to_string(),
            document.weekday().to_string(),
            document.satisfaction().to_string(),
            label_cell(&sentiment),
            label_cell(&aspect),
            source_cell(&sentiment, &aspect),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

/// Reads a file previously produced by [`write_annotated`], restoring every
/// annotation (label and provenance) exactly. Unlike raw ingestion this is
/// strict: a malformed row in our own export is an error, not a drop.
pub fn read_annotated(path: &Path) -> Result<AnnotatedDataset, PipelineError> {
    let text = fs::read_to_string(path)?;
    let mut records = parse_records(&text).into_iter();

    let (_, header) = records.next().ok_or_else(|| PipelineError::MalformedRow {
        line: 1,
        reason: "file has no header row".into(),
    })?;
    if header != COLUMNS {
        return Err(PipelineError::MalformedRow {
            line: 1,
            reason: format!("unexpected header {header:?}"),
        });
    }

    let mut documents = Vec::new();
    let mut sentiments = Vec::new();
    let mut aspects = Vec::new();
    for (line, fields) in records {
        if fields.len() != COLUMNS.len() {
            return Err(PipelineError::MalformedRow {
                line,
                reason: format!("expected {} fields, got {}", COLUMNS.len(), fields.len()),
            });
        }

        let rating: u8 = fields[3].parse().map_err(|_| PipelineError::MalformedRow {
            line,
            reason: format!("bad rating {:?}", fields[3]),
        })?;
        let posted_at = NaiveDateTime::parse_from_str(&fields[4], TIME_FORMAT).map_err(|_| {
            PipelineError::MalformedRow {
                line,
                reason: format!("bad timestamp {:?}", fields[4]),
            }
        })?;
        documents.push(Document::new(
            fields[0].clone(),
            fields[1].clone(),
            fields[2].clone(),
            rating,
            posted_at,
        ));

        let (sentiment_source, aspect_source) = parse_sources(&fields[10], line)?;
        sentiments.push(parse_label::<Sentiment>(
            &fields[8],
            sentiment_source,
            "Sentiments",
            line,
        )?);
        aspects.push(parse_label::<Aspect>(
            &fields[9],
            aspect_source,
            "Sentiment_Description",
            line,
        )?);
    }
    AnnotatedDataset::new(documents, sentiments, aspects)
}

fn label_cell<L: Display + Copy>(slot: &Option<Annotation<L>>) -> String {
    match slot {
        Some(a) => quote_field(&a.label.to_string()),
        None => UNLABELED.to_string(),
    }
}

fn source_cell<A: Copy, B: Copy>(
    sentiment: &Option<Annotation<A>>,
    aspect: &Option<Annotation<B>>,
) -> String {
    let part = |source: Option<LabelSource>| match source {
        Some(s) => s.to_string(),
        None => String::new(),
    };
    format!(
        "{}/{}",
        part(sentiment.map(|a| a.source)),
        part(aspect.map(|a| a.source))
    )
}

fn parse_sources(
    cell: &str,
    line: usize,
) -> Result<(Option<LabelSource>, Option<LabelSource>), PipelineError> {
    let parse_part = |part: &str| -> Result<Option<LabelSource>, PipelineError> {
        if part.is_empty() {
            return Ok(None);
        }
        LabelSource::from_str(part)
            .map(Some)
            .map_err(|_| PipelineError::UnknownLabel {
                column: "Label_Sources".into(),
                value: part.to_string(),
            })
    };
    let Some((first, second)) = cell.split_once('/') else {
        return Err(PipelineError::MalformedRow {
            line,
            reason: format!("bad source cell {cell:?}"),
        });
    };
    Ok((parse_part(first)?, parse_part(second)?))
}

fn parse_label<L: FromStr + Copy>(
    cell: &str,
    source: Option<LabelSource>,
    column: &str,
    line: usize,
) -> Result<Option<Annotation<L>>, PipelineError> {
    if cell == UNLABELED {
        return Ok(None);
    }
    let label = L::from_str(cell).map_err(|_| PipelineError::UnknownLabel {
        column: column.to_string(),
        value: cell.to_string(),
    })?;
    let source = source.ok_or_else(|| PipelineError::MalformedRow {
        line,
        reason: format!("labeled {column} row carries no provenance"),
    })?;
    Ok(Some(Annotation { label, source }))
}
