//! passbatch - batch password generator.
//!
//! Library crate holding the generation core: character pool
//! construction, sampling, constraint validation, and batch delivery.
//! The binary crate (main.rs) wraps it in a small CLI.

pub mod cli;
pub mod config;
pub mod pass;
pub mod rand;

pub use config::GenerationConfig;
pub use pass::generate_batch;
