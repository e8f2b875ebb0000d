pub mod dataset;
pub mod document;
pub mod labels;

pub use dataset::{AnnotatedDataset, Dataset};
pub use document::{Document, Satisfaction};
pub use labels::{Annotation, Aspect, LabelKind, LabelSource, Sentiment};
