//! neulang - outline scripts written close to natural language
//!
//! Each line of an outline is matched against a registry of regex-tagged
//! nuclei and the resulting tree of neurons is fired top-down. See
//! [`interpreter`] for the engine and [`cli`] for the `neu` entry point.

pub mod cli;
pub mod config;
pub mod interpreter;

// Re-export main types
pub use interpreter::{Cerebrum, CerebrumBuilder, CerebrumError, Nucleus, Registry, Val};
