//! Type definitions for the interpreter
//!
//! This module contains the core types shared by the parser and the engine:
//! - Runtime values (Val)
//! - Firing outcomes and control signals (Firing, Special)
//! - Parsed units (Neuron)
//! - Shared run-state (Thoughts)

pub mod control;
pub mod neuron;
pub mod thoughts;
pub mod values;

// Re-export all types for convenient access
pub use control::{Firing, Special, LOOP_STEP};
pub use neuron::Neuron;
pub use thoughts::Thoughts;
pub use values::Val;
