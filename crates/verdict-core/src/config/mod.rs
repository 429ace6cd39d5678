//! Configuration for the Verdict validator.

pub mod validator_config;

pub use validator_config::ValidatorConfig;
