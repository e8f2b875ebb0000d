mod batch_pipeline;
mod propagate;
mod train_evaluate;

pub use batch_pipeline::{BatchPipeline, PassSummary, PipelineConfig, PipelineOutcome};
pub use propagate::propagate_labels;
pub use train_evaluate::{TrainingConfig, train_and_evaluate};
