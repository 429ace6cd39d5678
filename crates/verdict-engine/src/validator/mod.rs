//! The validation engine: traversal, dispatch, collection, progress.

pub mod engine;
pub mod message;
pub mod progress;

pub(crate) mod collector;

pub use engine::{ObjectWithContext, Validator};
pub use progress::ValidationProgress;
