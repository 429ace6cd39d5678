//! Capability traits at the engine's seams.

pub mod cancellation;
pub mod object;
pub mod parser;

pub use cancellation::{CancelToken, Cancellable};
pub use object::{GraphObject, ObjectRef};
pub use parser::DocumentParser;
