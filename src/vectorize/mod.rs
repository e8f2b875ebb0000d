mod projector;
mod vocabulary;

pub use projector::{FeatureMatrix, project, project_all};
pub use vocabulary::Vocabulary;
