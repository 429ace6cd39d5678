//! # verdict-core
//!
//! Foundation crate for the Verdict validation engine.
//! Defines the profile data model, result model, graph-node and parser
//! traits, errors, config, and constants. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod profile;
pub mod results;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ValidatorConfig;
pub use errors::{ParserError, ProfileError, ValidationError};
pub use model::{AttrValue, InMemoryParser, ObjectNode};
pub use profile::{ErrorArgument, ErrorDetails, Profile, Rule, Variable};
pub use results::{
    AssertionStatus, ComponentDetails, JobEndStatus, Location, TestAssertion, ValidationResult,
};
pub use traits::{CancelToken, Cancellable, DocumentParser, GraphObject, ObjectRef};
