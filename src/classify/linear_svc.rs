use crate::error::PipelineError;
use crate::vectorize::FeatureMatrix;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Hyper-parameters for the linear SVC. The pipeline uses a single
/// linear-kernel configuration; there is no hyper-parameter search.
#[derive(Debug, Clone)]
pub struct SvcParameters {
    pub epochs: usize,
    pub regularization: f64,
    pub seed: u64,
}

impl Default for SvcParameters {
    fn default() -> SvcParameters {
        SvcParameters {
            epochs: 30,
            regularization: 0.01,
            seed: 7,
        }
    }
}

/// Linear support-vector classifier, one-vs-rest, trained with Pegasos-style
/// hinge-loss SGD. Logically immutable after `fit`.
#[derive(Debug, Clone)]
pub struct LinearSvc {
    weights: Vec<Vec<f64>>,
    biases: Vec<f64>,
    dim: usize,
}

impl LinearSvc {
    /// Fits one binary hinge-loss separator per class over `num_classes`
    /// classes. `y` holds dense class indices aligned with the matrix rows.
    ///
    /// Example order is reshuffled per epoch from `params.seed`, so the same
    /// inputs always produce the same model.
    pub fn fit(
        x: &FeatureMatrix,
        y: &[usize],
        num_classes: usize,
        params: &SvcParameters,
    ) -> Result<LinearSvc, PipelineError> {
        if x.num_rows() == 0 {
            return Err(PipelineError::EmptyTrainingSet);
        }
        if x.num_rows() != y.len() {
            return Err(PipelineError::InvalidParameter(format!(
                "{} feature rows but {} labels",
                x.num_rows(),
                y.len()
            )));
        }
        if num_classes < 2 {
            return Err(PipelineError::InvalidParameter(
                "num_classes must be at least 2".into(),
            ));
        }
        if let Some(&bad) = y.iter().find(|&&c| c >= num_classes) {
            return Err(PipelineError::InvalidParameter(format!(
                "label index {bad} out of range for {num_classes} classes"
            )));
        }
        if params.epochs == 0 || params.regularization <= 0.0 {
            return Err(PipelineError::InvalidParameter(
                "epochs must be > 0 and regularization positive".into(),
            ));
        }

        let dim = x.dim();
        let lambda = params.regularization;
        let mut rng = StdRng::seed_from_u64(params.seed);
        let mut order: Vec<usize> = (0..x.num_rows()).collect();

        let mut weights = vec![vec![0.0; dim]; num_classes];
        let mut biases = vec![0.0; num_classes];

        let mut t = 0u64;
        for _ in 0..params.epochs {
            order.shuffle(&mut rng);
            for &i in &order {
                t += 1;
                let eta = 1.0 / (lambda * t as f64);
                let row = x.row(i);
                for (c, (w, b)) in weights.iter_mut().zip(biases.iter_mut()).enumerate() {
                    let target = if y[i] == c { 1.0 } else { -1.0 };
                    let margin = target * (dot(w, row) + *b);

                    let shrink = 1.0 - eta * lambda;
                    for wj in w.iter_mut() {
                        *wj *= shrink;
                    }
                    if margin < 1.0 {
                        for (wj, &xj) in w.iter_mut().zip(row) {
                            *wj += eta * target * xj;
                        }
                        *b += eta * target;
                    }
                }
            }
        }

        Ok(LinearSvc {
            weights,
            biases,
            dim,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn num_classes(&self) -> usize {
        self.weights.len()
    }

    /// Per-class decision values for one feature row.
    ///
    /// A row of the wrong width is a programming error (someone bypassed the
    /// projector); it fails fast instead of truncating or padding.
    pub fn decision_values(&self, row: &[f64]) -> Result<Vec<f64>, PipelineError> {
        if row.len() != self.dim {
            return Err(PipelineError::DimensionMismatch {
                expected: self.dim,
                actual: row.len(),
            });
        }
        Ok(self
            .weights
            .iter()
            .zip(&self.biases)
            .map(|(w, b)| dot(w, row) + b)
            .collect())
    }

    /// Class index with the highest decision value; ties go to the lowest
    /// index.
    pub fn predict(&self, row: &[f64]) -> Result<usize, PipelineError> {
        let values = self.decision_values(row)?;
        let mut best = 0;
        for (c, &v) in values.iter().enumerate() {
            if v > values[best] {
                best = c;
            }
        }
        Ok(best)
    }
}

#[inline]
fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
