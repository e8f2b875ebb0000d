mod confusion_matrix;
mod measurement;
mod report;

pub use confusion_matrix::ConfusionMatrix;
pub use measurement::Measurement;
pub use report::EvaluationReport;
