use crate::core::labels::Annotation;
use crate::weak::RuleTable;

/// Deterministic keyword-rule labeling pass.
///
/// Produces an annotation with `LabelSource::Keyword` for every document some
/// rule matches and leaves the rest `None` for the classifier to back-fill.
/// Text is untouched; only labels are produced.
pub struct WeakLabeler<L> {
    table: RuleTable<L>,
}

impl<L: Copy> WeakLabeler<L> {
    pub fn new(table: RuleTable<L>) -> WeakLabeler<L> {
        WeakLabeler { table }
    }

    pub fn label(&self, text: &str) -> Option<Annotation<L>> {
        self.table.apply(text).map(Annotation::keyword)
    }

    /// One annotation slot per input text, index-aligned.
    pub fn label_all(&self, texts: &[&str]) -> Vec<Option<Annotation<L>>> {
        texts.iter().map(|t| self.label(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::labels::{LabelSource, Sentiment};
    use crate::weak::{KeywordRule, RuleTable, sentiment_rules};

    #[test]
    fn seed_scenario_labels_expected_documents() {
        let table = RuleTable::new(vec![
            KeywordRule::new(Sentiment::Positive, &["great", "quick"]),
            KeywordRule::new(Sentiment::Negative, &["terrible", "rude"]),
        ]);
        let labeler = WeakLabeler::new(table);
        let out = labeler.label_all(&[
            "Great food and quick service",
            "Terrible rude staff",
            "It was okay I guess",
        ]);

        assert_eq!(out[0].unwrap().label, Sentiment::Positive);
        assert_eq!(out[1].unwrap().label, Sentiment::Negative);
        assert_eq!(out[2], None);
    }

    #[test]
    fn annotations_carry_keyword_provenance() {
        let labeler = WeakLabeler::new(sentiment_rules());
        let a = labeler.label("delicious ramen").unwrap();
        assert_eq!(a.source, LabelSource::Keyword);
    }
}
