use serde::{Deserialize, Serialize};

/// Batch confusion matrix over a fixed, externally declared set of classes.
///
/// The class count comes from the closed label enumeration, not from the
/// observed data, so a class that never shows up in training or test still
/// has its row and column; its precision/recall/F1 degrade to 0 instead of
/// failing the evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    counts: Vec<Vec<u64>>,
    total: u64,
}

impl ConfusionMatrix {
    pub fn new(num_classes: usize) -> ConfusionMatrix {
        ConfusionMatrix {
            counts: vec![vec![0; num_classes]; num_classes],
            total: 0,
        }
    }

    pub fn num_classes(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Records one `(actual, predicted)` pair. Out-of-range indices are a
    /// programming error upstream; they panic in debug via indexing.
    pub fn add(&mut self, actual: usize, predicted: usize) {
        self.counts[actual][predicted] += 1;
        self.total += 1;
    }

    pub fn count(&self, actual: usize, predicted: usize) -> u64 {
        self.counts[actual][predicted]
    }

    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let correct: u64 = (0..self.num_classes()).map(|c| self.counts[c][c]).sum();
        correct as f64 / self.total as f64
    }

    /// Precision for one class; 0 when the class was never predicted.
    pub fn precision(&self, class: usize) -> f64 {
        let predicted: u64 = (0..self.num_classes()).map(|a| self.counts[a][class]).sum();
        if predicted == 0 {
            return 0.0;
        }
        self.counts[class][class] as f64 / predicted as f64
    }

    /// Recall for one class; 0 when the class never occurred.
    pub fn recall(&self, class: usize) -> f64 {
        let actual: u64 = self.counts[class].iter().sum();
        if actual == 0 {
            return 0.0;
        }
        self.counts[class][class] as f64 / actual as f64
    }

    pub fn f1(&self, class: usize) -> f64 {
        let p = self.precision(class);
        let r = self.recall(class);
        if p + r <= f64::EPSILON {
            return 0.0;
        }
        2.0 * p * r / (p + r)
    }

    pub fn macro_precision(&self) -> f64 {
        self.macro_average(|c| self.precision(c))
    }

    pub fn macro_recall(&self) -> f64 {
        self.macro_average(|c| self.recall(c))
    }

    pub fn macro_f1(&self) -> f64 {
        self.macro_average(|c| self.f1(c))
    }

    /// Cohen's kappa from the matrix marginals: `(p_o - p_e) / (1 - p_e)`
    /// with `p_e` the chance agreement of the actual and predicted
    /// distributions. NaN when the marginals make the denominator vanish.
    pub fn kappa(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = self.total as f64;
        let p_o = self.accuracy();
        let mut p_e = 0.0;
        for c in 0..self.num_classes() {
            let actual: u64 = self.counts[c].iter().sum();
            let predicted: u64 = (0..self.num_classes()).map(|a| self.counts[a][c]).sum();
            p_e += (actual as f64 / n) * (predicted as f64 / n);
        }
        let denom = 1.0 - p_e;
        if denom.abs() > f64::EPSILON {
            (p_o - p_e) / denom
        } else {
            f64::NAN
        }
    }

    fn macro_average<F: Fn(usize) -> f64>(&self, metric: F) -> f64 {
        if self.num_classes() == 0 {
            return 0.0;
        }
        (0..self.num_classes()).map(metric).sum::<f64>() / self.num_classes() as f64
    }
}
