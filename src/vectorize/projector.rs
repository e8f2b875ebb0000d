use crate::vectorize::Vocabulary;

/// Row-major term-count matrix with a fixed column dimension.
///
/// Rows only ever come out of [`project`], so every row of a matrix built
/// against one vocabulary has exactly that vocabulary's length. This is the
/// property the linear classifier depends on: train, test and inference
/// inputs share one fixed-dimension, fixed-order feature space.
#[derive(Debug, Clone)]
pub struct FeatureMatrix {
    rows: Vec<Vec<f64>>,
    dim: usize,
}

impl FeatureMatrix {
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.rows[i]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Copies out the rows at `indices` (used to carve train/test partitions
    /// and cross-validation folds out of one projected matrix).
    pub fn select(&self, indices: &[usize]) -> FeatureMatrix {
        FeatureMatrix {
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
            dim: self.dim,
        }
    }
}

/// Projects one tokenized document onto a fixed vocabulary.
///
/// Cell = raw count of the vocabulary term in the document. Terms outside the
/// vocabulary are ignored; vocabulary terms absent from the document stay
/// zero. The result always has exactly `vocabulary.len()` entries.
pub fn project(tokens: &[String], vocabulary: &Vocabulary) -> Vec<f64> {
    let mut row = vec![0.0; vocabulary.len()];
    for token in tokens {
        if let Some(col) = vocabulary.position(token) {
            row[col] += 1.0;
        }
    }
    row
}

/// Projects a whole corpus, one row per document.
pub fn project_all(corpus: &[Vec<String>], vocabulary: &Vocabulary) -> FeatureMatrix {
    FeatureMatrix {
        rows: corpus.iter().map(|t| project(t, vocabulary)).collect(),
        dim: vocabulary.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::token_corpus;

    fn vocab() -> Vocabulary {
        Vocabulary::from_terms(vec!["food".into(), "service".into(), "price".into()])
    }

    #[test]
    fn counts_align_to_vocabulary_order() {
        let tokens = token_corpus(&["food great food service"]);
        assert_eq!(project(&tokens[0], &vocab()), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn row_length_always_matches_vocabulary() {
        let v = vocab();
        for text in ["", "food", "completely unrelated words", "price price price"] {
            let tokens = crate::text::tokenize(text);
            assert_eq!(project(&tokens, &v).len(), v.len());
        }
    }

    #[test]
    fn out_of_vocabulary_terms_do_not_widen_the_row() {
        let tokens = token_corpus(&["sushi ramen tempura"]);
        assert_eq!(project(&tokens[0], &vocab()), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_vocabulary_projects_zero_length_rows() {
        let v = Vocabulary::from_terms(vec![]);
        let tokens = token_corpus(&["food service"]);
        assert!(project(&tokens[0], &v).is_empty());
    }

    #[test]
    fn matrix_shape_and_selection() {
        let corpus = token_corpus(&["food service", "price", "nothing matches"]);
        let m = project_all(&corpus, &vocab());
        assert_eq!(m.num_rows(), 3);
        assert_eq!(m.dim(), 3);
        assert_eq!(m.row(2), &[0.0, 0.0, 0.0]);

        let sub = m.select(&[2, 0]);
        assert_eq!(sub.num_rows(), 2);
        assert_eq!(sub.row(1), m.row(0));
    }
}
