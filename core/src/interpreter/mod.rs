//! # Interpreter
//!
//! Outline scripts are read into a tree of neurons, each bound to the nucleus
//! whose pattern recognizes its line, and then fired top-down.
//!
//! ## Pieces
//!
//! - `registry` - pattern -> nucleus mapping, resolved in registration order
//! - `outline` - marker scanning and depth-driven tree building
//! - `cerebrum` - the engine (`read`, `think`) and the firing `Context`
//! - `nuclei` - the built-in catalog
//! - `types` - values, neurons, run-state and firing outcomes

pub mod cerebrum;
pub mod console;
pub mod errors;
pub mod nuclei;
pub mod outline;
pub mod registry;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use cerebrum::{Cerebrum, CerebrumBuilder, CerebrumOptions, Context, MAX_FIRING_DEPTH};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use errors::{CerebrumError, CerebrumResult, OutlineError};
pub use registry::{Nucleus, NucleusId, Registry};
pub use types::{Firing, Neuron, Special, Thoughts, Val, LOOP_STEP};
