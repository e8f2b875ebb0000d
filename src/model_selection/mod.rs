use crate::classify::{LinearSvc, SvcParameters};
use crate::error::PipelineError;
use crate::vectorize::FeatureMatrix;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Splits `labels` (dense class indices) into train/test index sets,
/// preserving class proportions in both partitions.
///
/// Per class, indices are shuffled with the given seed and the first
/// `test_ratio` share goes to the test partition (at least one row per class
/// goes to each side when a class has two or more rows).
pub fn stratified_split(
    labels: &[usize],
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<usize>, Vec<usize>), PipelineError> {
    if !(0.0..1.0).contains(&test_ratio) {
        return Err(PipelineError::InvalidParameter(format!(
            "test_ratio must be in [0, 1), got {test_ratio}"
        )));
    }
    if labels.is_empty() {
        return Err(PipelineError::EmptyTrainingSet);
    }

    let num_classes = labels.iter().max().copied().unwrap_or(0) + 1;
    let mut per_class: Vec<Vec<usize>> = vec![Vec::new(); num_classes];
    for (i, &c) in labels.iter().enumerate() {
        per_class[c].push(i);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();
    for mut indices in per_class {
        if indices.is_empty() {
            continue;
        }
        indices.shuffle(&mut rng);
        let mut cut = (indices.len() as f64 * test_ratio).round() as usize;
        if test_ratio > 0.0 && indices.len() >= 2 {
            cut = cut.clamp(1, indices.len() - 1);
        } else {
            cut = cut.min(indices.len().saturating_sub(1));
        }
        test.extend_from_slice(&indices[..cut]);
        train.extend_from_slice(&indices[cut..]);
    }
    train.sort_unstable();
    test.sort_unstable();
    Ok((train, test))
}

/// K-fold splitter over row indices, shuffled once from a seed.
#[derive(Debug, Clone)]
pub struct KFold {
    k: usize,
    seed: u64,
}

impl KFold {
    pub fn new(k: usize, seed: u64) -> Result<KFold, PipelineError> {
        if k < 2 {
            return Err(PipelineError::InvalidParameter(format!(
                "fold count must be at least 2, got {k}"
            )));
        }
        Ok(KFold { k, seed })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// `(train, validation)` index pairs for `n` rows. Folds whose validation
    /// side would be empty (k > n) are omitted.
    pub fn split(&self, n: usize) -> Vec<(Vec<usize>, Vec<usize>)> {
        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);
        order.shuffle(&mut rng);

        let mut folds = Vec::with_capacity(self.k);
        let base = n / self.k;
        let extra = n % self.k;
        let mut start = 0;
        for f in 0..self.k {
            let size = base + usize::from(f < extra);
            if size == 0 {
                continue;
            }
            let validation: Vec<usize> = order[start..start + size].to_vec();
            let train: Vec<usize> = order[..start]
                .iter()
                .chain(&order[start + size..])
                .copied()
                .collect();
            folds.push((train, validation));
            start += size;
        }
        folds
    }
}

/// Per-fold scores from cross-validation.
#[derive(Debug, Clone)]
pub struct CrossValidationResult {
    pub scores: Vec<f64>,
}

impl CrossValidationResult {
    pub fn mean(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    pub fn std(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .scores
            .iter()
            .map(|s| (s - mean).powi(2))
            .sum::<f64>()
            / self.scores.len() as f64;
        variance.sqrt()
    }
}

/// K-fold cross-validation of the linear SVC, scoring accuracy per fold.
///
/// With fixed hyper-parameters this is an internal performance estimate, not
/// model selection; folds where training fails for lack of data (k larger
/// than the class support) score 0.
pub fn cross_validate(
    x: &FeatureMatrix,
    y: &[usize],
    num_classes: usize,
    params: &SvcParameters,
    kfold: &KFold,
) -> Result<CrossValidationResult, PipelineError> {
    if x.num_rows() != y.len() {
        return Err(PipelineError::InvalidParameter(format!(
            "{} feature rows but {} labels",
            x.num_rows(),
            y.len()
        )));
    }

    let mut scores = Vec::new();
    for (train_idx, val_idx) in kfold.split(x.num_rows()) {
        if train_idx.is_empty() {
            scores.push(0.0);
            continue;
        }
        let x_train = x.select(&train_idx);
        let y_train: Vec<usize> = train_idx.iter().map(|&i| y[i]).collect();
        let model = LinearSvc::fit(&x_train, &y_train, num_classes, params)?;

        let mut correct = 0usize;
        for &i in &val_idx {
            if model.predict(x.row(i))? == y[i] {
                correct += 1;
            }
        }
        scores.push(correct as f64 / val_idx.len() as f64);
    }
    Ok(CrossValidationResult { scores })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::token_corpus;
    use crate::vectorize::{Vocabulary, project_all};

    #[test]
    fn stratified_split_preserves_class_proportions() {
        // 8 of class 0, 4 of class 1, 20% test.
        let labels: Vec<usize> = [vec![0; 8], vec![1; 4]].concat();
        let (train, test) = stratified_split(&labels, 0.25, 11).unwrap();

        assert_eq!(train.len() + test.len(), labels.len());
        let count = |idx: &[usize], c: usize| idx.iter().filter(|&&i| labels[i] == c).count();
        assert_eq!(count(&test, 0), 2);
        assert_eq!(count(&test, 1), 1);
        assert_eq!(count(&train, 0), 6);
        assert_eq!(count(&train, 1), 3);
    }

    #[test]
    fn stratified_split_partitions_are_disjoint() {
        let labels = vec![0, 1, 0, 1, 0, 1, 0, 0];
        let (train, test) = stratified_split(&labels, 0.25, 3).unwrap();
        for i in &test {
            assert!(!train.contains(i));
        }
    }

    #[test]
    fn stratified_split_is_deterministic() {
        let labels = vec![0, 0, 0, 1, 1, 1, 0, 1, 0, 0];
        assert_eq!(
            stratified_split(&labels, 0.3, 42).unwrap(),
            stratified_split(&labels, 0.3, 42).unwrap()
        );
    }

    #[test]
    fn kfold_covers_every_index_exactly_once() {
        let kfold = KFold::new(3, 5).unwrap();
        let folds = kfold.split(10);
        assert_eq!(folds.len(), 3);

        let mut seen: Vec<usize> = folds.iter().flat_map(|(_, v)| v.clone()).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..10).collect::<Vec<_>>());

        for (train, val) in &folds {
            assert_eq!(train.len() + val.len(), 10);
        }
    }

    #[test]
    fn kfold_rejects_degenerate_k() {
        assert!(KFold::new(1, 0).is_err());
    }

    #[test]
    fn cross_validation_on_separable_data_is_perfect() {
        let vocab = Vocabulary::from_terms(vec!["good".into(), "awful".into()]);
        let corpus = token_corpus(&[
            "good", "good good", "good", "good good good",
            "awful", "awful awful", "awful", "awful awful awful",
        ]);
        let x = project_all(&corpus, &vocab);
        let y = vec![0, 0, 0, 0, 1, 1, 1, 1];

        let kfold = KFold::new(4, 9).unwrap();
        let result =
            cross_validate(&x, &y, 2, &SvcParameters::default(), &kfold).unwrap();
        assert_eq!(result.scores.len(), 4);
        assert!((result.mean() - 1.0).abs() < 1e-12, "scores={:?}", result.scores);
        assert!(result.std() < 1e-12);
    }
}
