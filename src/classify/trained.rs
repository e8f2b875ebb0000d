use crate::classify::LinearSvc;
use crate::core::labels::LabelKind;
use crate::error::PipelineError;
use crate::vectorize::{Vocabulary, project};
use std::marker::PhantomData;

/// A fitted classifier bound to the vocabulary it was trained against.
///
/// Inference goes through [`predict_tokens`], which projects against the
/// owned vocabulary, so a mismatched feature space is impossible by
/// construction. The raw-row entry point still exists for pre-projected
/// partitions and enforces the dimension check instead.
pub struct TrainedClassifier<L> {
    vocabulary: Vocabulary,
    model: LinearSvc,
    _label: PhantomData<L>,
}

impl<L: LabelKind> TrainedClassifier<L> {
    pub fn new(vocabulary: Vocabulary, model: LinearSvc) -> Result<TrainedClassifier<L>, PipelineError> {
        if model.dim() != vocabulary.len() {
            return Err(PipelineError::DimensionMismatch {
                expected: vocabulary.len(),
                actual: model.dim(),
            });
        }
        if model.num_classes() != L::CLASS_COUNT {
            return Err(PipelineError::InvalidParameter(format!(
                "model has {} classes, label set has {}",
                model.num_classes(),
                L::CLASS_COUNT
            )));
        }
        Ok(TrainedClassifier {
            vocabulary,
            model,
            _label: PhantomData,
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn predict_tokens(&self, tokens: &[String]) -> Result<L, PipelineError> {
        self.predict_row(&project(tokens, &self.vocabulary))
    }

    pub fn predict_row(&self, row: &[f64]) -> Result<L, PipelineError> {
        let index = self.model.predict(row)?;
        L::from_index(index).ok_or_else(|| {
            PipelineError::InvalidParameter(format!("predicted class index {index} has no label"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SvcParameters;
    use crate::core::labels::Sentiment;
    use crate::testing::dummies::token_corpus;
    use crate::vectorize::project_all;

    fn trained() -> TrainedClassifier<Sentiment> {
        let vocab = Vocabulary::from_terms(vec!["good".into(), "awful".into()]);
        let corpus = token_corpus(&["good", "good good", "awful", "awful awful"]);
        let x = project_all(&corpus, &vocab);
        let model = LinearSvc::fit(&x, &[0, 0, 1, 1], 2, &SvcParameters::default()).unwrap();
        TrainedClassifier::new(vocab, model).unwrap()
    }

    #[test]
    fn predicts_through_its_own_vocabulary() {
        let clf = trained();
        let tokens = crate::text::tokenize("really good stuff");
        assert_eq!(clf.predict_tokens(&tokens).unwrap(), Sentiment::Positive);
        let tokens = crate::text::tokenize("awful experience");
        assert_eq!(clf.predict_tokens(&tokens).unwrap(), Sentiment::Negative);
    }

    #[test]
    fn rejects_vocabulary_model_size_mismatch() {
        let vocab = Vocabulary::from_terms(vec!["good".into(), "awful".into()]);
        let corpus = token_corpus(&["good", "awful"]);
        let x = project_all(&corpus, &vocab);
        let model = LinearSvc::fit(&x, &[0, 1], 2, &SvcParameters::default()).unwrap();

        let wrong = Vocabulary::from_terms(vec!["good".into()]);
        let err = TrainedClassifier::<Sentiment>::new(wrong, model);
        assert!(matches!(
            err,
            Err(PipelineError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn rejects_class_count_mismatch() {
        let vocab = Vocabulary::from_terms(vec!["good".into(), "awful".into()]);
        let corpus = token_corpus(&["good", "awful", "good awful"]);
        let x = project_all(&corpus, &vocab);
        let model = LinearSvc::fit(&x, &[0, 1, 2], 3, &SvcParameters::default()).unwrap();
        let err = TrainedClassifier::<Sentiment>::new(vocab, model);
        assert!(matches!(err, Err(PipelineError::InvalidParameter(_))));
    }
}
