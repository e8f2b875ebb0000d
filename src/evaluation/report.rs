use crate::evaluation::{ConfusionMatrix, Measurement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured result of one train/evaluate pass: cross-validation fold
/// accuracies, the held-out confusion matrix, and the derived metrics as a
/// flat measurement list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub class_names: Vec<String>,
    pub fold_accuracies: Vec<f64>,
    pub confusion: ConfusionMatrix,
    pub measurements: Vec<Measurement>,
}

impl EvaluationReport {
    pub fn new(
        class_names: Vec<String>,
        fold_accuracies: Vec<f64>,
        confusion: ConfusionMatrix,
    ) -> EvaluationReport {
        let mut measurements = vec![
            Measurement::new("accuracy", confusion.accuracy()),
            Measurement::new("kappa", confusion.kappa()),
            Measurement::new("macro_precision", confusion.macro_precision()),
            Measurement::new("macro_recall", confusion.macro_recall()),
            Measurement::new("macro_f1", confusion.macro_f1()),
        ];
        if !fold_accuracies.is_empty() {
            let mean = fold_accuracies.iter().sum::<f64>() / fold_accuracies.len() as f64;
            measurements.push(Measurement::new("cv_accuracy", mean));
        }
        for (c, name) in class_names.iter().enumerate() {
            measurements.push(Measurement::new(
                format!("precision[{name}]"),
                confusion.precision(c),
            ));
            measurements.push(Measurement::new(
                format!("recall[{name}]"),
                confusion.recall(c),
            ));
            measurements.push(Measurement::new(format!("f1[{name}]"), confusion.f1(c)));
        }

        EvaluationReport {
            class_names,
            fold_accuracies,
            confusion,
            measurements,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.measurements
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "confusion matrix ({} held-out rows):", self.confusion.total())?;
        for (a, name) in self.class_names.iter().enumerate() {
            write!(f, "  {name:>14} |")?;
            for p in 0..self.class_names.len() {
                write!(f, " {:>5}", self.confusion.count(a, p))?;
            }
            writeln!(f)?;
        }
        for m in &self.measurements {
            writeln!(f, "  {} = {:.4}", m.name, m.value)?;
        }
        Ok(())
    }
}
