use crate::classify::{LinearSvc, SvcParameters, TrainedClassifier};
use crate::core::labels::{Annotation, LabelKind};
use crate::error::PipelineError;
use crate::evaluation::{ConfusionMatrix, EvaluationReport};
use crate::model_selection::{KFold, cross_validate, stratified_split};
use crate::vectorize::{FeatureMatrix, Vocabulary, project_all};

/// Configuration for one train/evaluate pass.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Held-out share of the weakly labeled subset.
    pub test_ratio: f64,
    /// Cross-validation fold count over the training partition.
    pub folds: usize,
    /// Vocabulary sparsity threshold: minimum fraction of training documents
    /// a term must appear in (inclusive).
    pub min_doc_fraction: f64,
    pub svc: SvcParameters,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> TrainingConfig {
        TrainingConfig {
            test_ratio: 0.2,
            folds: 10,
            min_doc_fraction: 0.01,
            svc: SvcParameters::default(),
            seed: 42,
        }
    }
}

/// Trains and evaluates a classifier on the weakly labeled subset.
///
/// The labeled rows are stratified-split into train/test, the vocabulary is
/// built from the train partition only, both partitions are projected against
/// it, fold accuracies are estimated by k-fold cross-validation on the train
/// partition, and the final model is fitted on the full train partition and
/// scored on the held-out rows over the full declared label set.
pub fn train_and_evaluate<L: LabelKind>(
    tokens: &[Vec<String>],
    annotations: &[Option<Annotation<L>>],
    config: &TrainingConfig,
) -> Result<(TrainedClassifier<L>, EvaluationReport), PipelineError> {
    if tokens.len() != annotations.len() {
        return Err(PipelineError::InvalidParameter(format!(
            "{} token sequences but {} annotation slots",
            tokens.len(),
            annotations.len()
        )));
    }

    let labeled: Vec<(usize, usize)> = annotations
        .iter()
        .enumerate()
        .filter_map(|(i, a)| a.map(|a| (i, a.label.index())))
        .collect();
    if labeled.is_empty() {
        return Err(PipelineError::EmptyTrainingSet);
    }

    let labels: Vec<usize> = labeled.iter().map(|&(_, c)| c).collect();
    let (train_rows, test_rows) = stratified_split(&labels, config.test_ratio, config.seed)?;

    let train_corpus: Vec<Vec<String>> = train_rows
        .iter()
        .map(|&r| tokens[labeled[r].0].clone())
        .collect();
    let vocabulary = Vocabulary::build(&train_corpus, config.min_doc_fraction);

    let x_train: FeatureMatrix = project_all(&train_corpus, &vocabulary);
    let y_train: Vec<usize> = train_rows.iter().map(|&r| labels[r]).collect();

    let kfold = KFold::new(config.folds, config.seed)?;
    let cv = cross_validate(&x_train, &y_train, L::CLASS_COUNT, &config.svc, &kfold)?;

    let model = LinearSvc::fit(&x_train, &y_train, L::CLASS_COUNT, &config.svc)?;

    let mut confusion = ConfusionMatrix::new(L::CLASS_COUNT);
    let test_corpus: Vec<Vec<String>> = test_rows
        .iter()
        .map(|&r| tokens[labeled[r].0].clone())
        .collect();
    let x_test = project_all(&test_corpus, &vocabulary);
    for (row, &r) in x_test.rows().zip(&test_rows) {
        confusion.add(labels[r], model.predict(row)?);
    }

    let report = EvaluationReport::new(L::class_names(), cv.scores, confusion);
    let classifier = TrainedClassifier::new(vocabulary, model)?;
    Ok((classifier, report))
}
