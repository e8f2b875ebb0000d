use crate::classify::TrainedClassifier;
use crate::core::labels::{Annotation, LabelKind};
use crate::error::PipelineError;

/// Back-fills the slots the weak labeler left empty.
///
/// Every `None` slot gets the classifier's prediction (projected through the
/// classifier's own training vocabulary) with `LabelSource::Model`; every
/// existing annotation passes through untouched. Weak labels are never
/// overwritten, and the output is total: one annotation per document.
pub fn propagate_labels<L: LabelKind>(
    tokens: &[Vec<String>],
    annotations: &[Option<Annotation<L>>],
    classifier: &TrainedClassifier<L>,
) -> Result<Vec<Annotation<L>>, PipelineError> {
    if tokens.len() != annotations.len() {
        return Err(PipelineError::InvalidParameter(format!(
            "{} token sequences but {} annotation slots",
            tokens.len(),
            annotations.len()
        )));
    }

    annotations
        .iter()
        .zip(tokens)
        .map(|(slot, tokens)| match slot {
            Some(existing) => Ok(*existing),
            None => Ok(Annotation::model(classifier.predict_tokens(tokens)?)),
        })
        .collect()
}
