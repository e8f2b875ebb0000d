use crate::core::dataset::{AnnotatedDataset, Dataset};
use crate::core::labels::{Annotation, Aspect, LabelKind, Sentiment};
use crate::evaluation::EvaluationReport;
use crate::tasks::{TrainingConfig, propagate_labels, train_and_evaluate};
use crate::text::tokenize;
use crate::weak::{WeakLabeler, aspect_rules, sentiment_rules};
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub training: TrainingConfig,
    /// Minimum number of weakly labeled rows before a classifier is trained
    /// for a pass; below this the pass keeps its keyword labels only.
    pub min_labeled: usize,
}

impl Default for PipelineConfig {
    fn default() -> PipelineConfig {
        PipelineConfig {
            training: TrainingConfig::default(),
            min_labeled: 4,
        }
    }
}

/// Label counts for one pass after propagation, kept for auditability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    pub keyword_labeled: usize,
    pub model_labeled: usize,
    pub unlabeled: usize,
}

impl PassSummary {
    fn from_annotations<L: LabelKind>(annotations: &[Option<Annotation<L>>]) -> PassSummary {
        let mut summary = PassSummary {
            keyword_labeled: 0,
            model_labeled: 0,
            unlabeled: 0,
        };
        for slot in annotations {
            match slot {
                Some(a) if a.source == crate::core::labels::LabelSource::Keyword => {
                    summary.keyword_labeled += 1;
                }
                Some(_) => summary.model_labeled += 1,
                None => summary.unlabeled += 1,
            }
        }
        summary
    }
}

/// Result of one batch run: the fully annotated dataset plus the evaluation
/// report and label provenance counts per pass. A report is `None` when the
/// pass had too few weak labels to train a classifier.
pub struct PipelineOutcome {
    pub annotated: AnnotatedDataset,
    pub sentiment_report: Option<EvaluationReport>,
    pub aspect_report: Option<EvaluationReport>,
    pub sentiment_summary: PassSummary,
    pub aspect_summary: PassSummary,
}

/// One-shot batch orchestration: coarse sentiment pass, then fine aspect
/// pass, each running the same weak-label → train/evaluate → propagate chain
/// over explicit per-stage snapshots.
pub struct BatchPipeline {
    config: PipelineConfig,
}

impl BatchPipeline {
    pub fn new(config: PipelineConfig) -> BatchPipeline {
        BatchPipeline { config }
    }

    pub fn with_defaults() -> BatchPipeline {
        BatchPipeline::new(PipelineConfig::default())
    }

    pub fn run(&self, dataset: &Dataset) -> Result<PipelineOutcome> {
        let tokens: Vec<Vec<String>> = dataset
            .documents
            .iter()
            .map(|d| tokenize(&d.text))
            .collect();

        // Coarse pass.
        let weak = WeakLabeler::new(sentiment_rules());
        let mut sentiments: Vec<Option<Annotation<Sentiment>>> = dataset
            .documents
            .iter()
            .map(|d| weak.label(&d.text))
            .collect();

        let mut sentiment_report = None;
        if self.trainable(&sentiments) {
            let (classifier, report) =
                train_and_evaluate(&tokens, &sentiments, &self.config.training)
                    .context("training the sentiment classifier")?;
            sentiment_report = Some(report);
            if sentiments.iter().any(Option::is_none) {
                sentiments = propagate_labels(&tokens, &sentiments, &classifier)
                    .context("propagating sentiment labels")?
                    .into_iter()
                    .map(Some)
                    .collect();
            }
        }

        // Fine pass: the rule table depends on each document's final
        // sentiment; documents without one stay unlabeled for the weak stage.
        let positive_rules = WeakLabeler::new(aspect_rules(Sentiment::Positive));
        let negative_rules = WeakLabeler::new(aspect_rules(Sentiment::Negative));
        let mut aspects: Vec<Option<Annotation<Aspect>>> = dataset
            .documents
            .iter()
            .zip(&sentiments)
            .map(|(d, s)| {
                s.and_then(|s| match s.label {
                    Sentiment::Positive => positive_rules.label(&d.text),
                    Sentiment::Negative => negative_rules.label(&d.text),
                })
            })
            .collect();

        let mut aspect_report = None;
        if self.trainable(&aspects) {
            let (classifier, report) =
                train_and_evaluate(&tokens, &aspects, &self.config.training)
                    .context("training the aspect classifier")?;
            aspect_report = Some(report);
            if aspects.iter().any(Option::is_none) {
                aspects = propagate_labels(&tokens, &aspects, &classifier)
                    .context("propagating aspect labels")?
                    .into_iter()
                    .map(Some)
                    .collect();
            }
        } else {
            // Degenerate back-fill: no classifier to consult, the remainder
            // goes to the catch-all category.
            for slot in aspects.iter_mut() {
                if slot.is_none() {
                    *slot = Some(Annotation::model(Aspect::Other));
                }
            }
        }

        let sentiment_summary = PassSummary::from_annotations(&sentiments);
        let aspect_summary = PassSummary::from_annotations(&aspects);
        let annotated = AnnotatedDataset::new(dataset.documents.clone(), sentiments, aspects)
            .context("assembling the annotated dataset")?;

        Ok(PipelineOutcome {
            annotated,
            sentiment_report,
            aspect_report,
            sentiment_summary,
            aspect_summary,
        })
    }

    /// A pass trains a classifier only if the weak stage produced enough rows
    /// spread over at least two classes.
    fn trainable<L: LabelKind>(&self, annotations: &[Option<Annotation<L>>]) -> bool {
        let labeled: Vec<usize> = annotations
            .iter()
            .filter_map(|a| a.map(|a| a.label.index()))
            .collect();
        if labeled.len() < self.config.min_labeled {
            return false;
        }
        labeled.iter().any(|&c| c != labeled[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::labels::LabelSource;
    use crate::testing::dummies::documents;

    fn review_corpus() -> Dataset {
        Dataset::new(documents(&[
            // Weakly positive, food-flavored vocabulary.
            "Great pasta and pizza",
            "Delicious pasta amazing",
            "Awesome pizza friendly staff",
            "Best pizza excellent pasta",
            // Weakly negative, service-flavored vocabulary.
            "Terrible waiter slow service",
            "Awful rude waiter",
            "Worst service dirty waiter",
            "Horrible waiter bland service",
            // No sentiment keyword: left for the classifier.
            "The pasta pizza here",
            "That waiter service though",
            // Positive keyword but no aspect keyword.
            "Great atmosphere lovely evening",
        ]))
    }

    fn pipeline() -> BatchPipeline {
        let mut config = PipelineConfig::default();
        config.training.folds = 3;
        config.training.min_doc_fraction = 0.0;
        BatchPipeline::new(config)
    }

    #[test]
    fn every_document_ends_up_labeled() {
        let dataset = review_corpus();
        let outcome = pipeline().run(&dataset).unwrap();

        assert_eq!(outcome.annotated.len(), dataset.len());
        assert!(outcome.annotated.sentiments.iter().all(Option::is_some));
        assert!(outcome.annotated.aspects.iter().all(Option::is_some));
        assert_eq!(outcome.sentiment_summary.unlabeled, 0);
        assert_eq!(outcome.aspect_summary.unlabeled, 0);
        assert!(outcome.sentiment_report.is_some());
        assert!(outcome.aspect_report.is_some());
    }

    #[test]
    fn machine_labels_fill_in_where_keywords_missed() {
        let outcome = pipeline().run(&review_corpus()).unwrap();
        let sentiments = &outcome.annotated.sentiments;

        // Vocabulary overlap drives the back-filled documents to the right
        // polarity.
        let food_doc = sentiments[8].unwrap();
        assert_eq!(food_doc.label, Sentiment::Positive);
        assert_eq!(food_doc.source, LabelSource::Model);

        let service_doc = sentiments[9].unwrap();
        assert_eq!(service_doc.label, Sentiment::Negative);
        assert_eq!(service_doc.source, LabelSource::Model);
    }

    #[test]
    fn weak_sentiments_are_never_overwritten() {
        let dataset = review_corpus();
        let weak = WeakLabeler::new(sentiment_rules());
        let before: Vec<_> = dataset.documents.iter().map(|d| weak.label(&d.text)).collect();

        let outcome = pipeline().run(&dataset).unwrap();
        for (weak_slot, final_slot) in before.iter().zip(&outcome.annotated.sentiments) {
            if let Some(weak_annotation) = weak_slot {
                assert_eq!(final_slot.as_ref(), Some(weak_annotation));
            }
        }
    }

    #[test]
    fn aspect_pass_refines_by_sentiment() {
        let outcome = pipeline().run(&review_corpus()).unwrap();
        let aspects = &outcome.annotated.aspects;

        // "pizza" under a positive sentiment is good food; "waiter" under a
        // negative one is bad service.
        assert_eq!(aspects[0].unwrap().label, Aspect::GoodFood);
        assert_eq!(aspects[4].unwrap().label, Aspect::BadService);

        // The aspect-keyword-free document was filled by the classifier.
        assert_eq!(aspects[10].unwrap().source, LabelSource::Model);
    }

    #[test]
    fn file_to_file_run_preserves_labels() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("reviews.csv");
        let output = dir.path().join("labeled.csv");

        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "7,Restaurant,Reviewer,Review,Rating,Pictures,Time").unwrap();
        for (i, text) in review_corpus()
            .documents
            .iter()
            .map(|d| d.text.clone())
            .enumerate()
        {
            writeln!(
                file,
                "{i},Diner,reviewer-{i},{text},{},0,7/14/2021 19:30",
                1 + i % 5
            )
            .unwrap();
        }

        let (dataset, dropped) = crate::io::read_reviews(&input).unwrap();
        assert_eq!(dropped, 0);

        let outcome = pipeline().run(&dataset).unwrap();
        crate::io::write_annotated(&output, &outcome.annotated).unwrap();
        let restored = crate::io::read_annotated(&output).unwrap();

        assert_eq!(restored.sentiments, outcome.annotated.sentiments);
        assert_eq!(restored.aspects, outcome.annotated.aspects);
    }

    #[test]
    fn too_small_corpus_skips_training_and_falls_back() {
        let dataset = Dataset::new(documents(&["mysterious one", "mysterious two"]));
        let outcome = pipeline().run(&dataset).unwrap();

        assert!(outcome.sentiment_report.is_none());
        assert!(outcome.aspect_report.is_none());
        // No sentiment evidence at all: the coarse column stays unlabeled,
        // the aspect column falls back to the catch-all.
        assert!(outcome.annotated.sentiments.iter().all(Option::is_none));
        assert!(
            outcome
                .annotated
                .aspects
                .iter()
                .all(|a| a.map(|a| a.label) == Some(Aspect::Other))
        );
        assert_eq!(outcome.sentiment_summary.unlabeled, 2);
        assert_eq!(outcome.aspect_summary.model_labeled, 2);
    }
}
