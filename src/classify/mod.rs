mod linear_svc;
mod trained;

pub use linear_svc::{LinearSvc, SvcParameters};
pub use trained::TrainedClassifier;
