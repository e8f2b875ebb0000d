use crate::core::document::Document;
use crate::core::labels::{Annotation, Aspect, Sentiment};
use crate::error::PipelineError;

/// The ingested corpus for one batch run.
#[derive(Debug)]
pub struct Dataset {
    pub documents: Vec<Document>,
}

impl Dataset {
    pub fn new(documents: Vec<Document>) -> Dataset {
        Dataset { documents }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Final pipeline output: the documents plus one annotation column per pass,
/// aligned by index. Columns may still hold `None` for documents neither the
/// keyword rules nor the classifier could label (e.g., when a pass was skipped
/// for lack of training data).
#[derive(Debug)]
pub struct AnnotatedDataset {
    pub documents: Vec<Document>,
    pub sentiments: Vec<Option<Annotation<Sentiment>>>,
    pub aspects: Vec<Option<Annotation<Aspect>>>,
}

impl AnnotatedDataset {
    /// Fails if the annotation columns do not line up with the documents.
    pub fn new(
        documents: Vec<Document>,
        sentiments: Vec<Option<Annotation<Sentiment>>>,
        aspects: Vec<Option<Annotation<Aspect>>>,
    ) -> Result<AnnotatedDataset, PipelineError> {
        if sentiments.len() != documents.len() || aspects.len() != documents.len() {
            return Err(PipelineError::InvalidParameter(format!(
                "annotation columns must match document count {} (got {} sentiments, {} aspects)",
                documents.len(),
                sentiments.len(),
                aspects.len()
            )));
        }
        Ok(AnnotatedDataset {
            documents,
            sentiments,
            aspects,
        })
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::documents;

    #[test]
    fn column_lengths_are_checked() {
        let docs = documents(&["great food", "rude staff"]);
        let ok = AnnotatedDataset::new(docs.clone(), vec![None, None], vec![None, None]);
        assert!(ok.is_ok());

        let bad = AnnotatedDataset::new(docs, vec![None], vec![None, None]);
        assert!(matches!(bad, Err(PipelineError::InvalidParameter(_))));
    }
}
