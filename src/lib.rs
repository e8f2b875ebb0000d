pub mod classify;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod model_selection;
pub mod tasks;
pub mod text;
pub mod vectorize;
pub mod weak;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
