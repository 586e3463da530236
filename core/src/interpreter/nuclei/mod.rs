//! Built-in nuclei
//!
//! Each file in this module contains one nucleus:
//!
//! - `print.rs` - `print <text>`
//! - `input.rs` - `get <var> from user`
//! - `set.rs` - `set <var> to <literal>`
//! - `evaluate.rs` - `evaluate it` / `evaluate <var>`
//! - `loops.rs` - `loop` and its for-each/while/until forms
//! - `brk.rs` - `break` / `break out of <n> loops`

mod brk;
mod evaluate;
mod input;
mod loops;
mod print;
mod set;

pub use brk::BreakNucleus;
pub use evaluate::EvaluateNucleus;
pub use input::InputNucleus;
pub use loops::LoopNucleus;
pub use print::PrintNucleus;
pub use set::SetNucleus;

use super::errors::{CerebrumError, CerebrumResult};
use super::registry::Nucleus;
use super::types::Neuron;

/// The built-in catalog, in resolution order
pub fn builtins() -> Vec<Box<dyn Nucleus>> {
    vec![
        Box::new(PrintNucleus),
        Box::new(InputNucleus),
        Box::new(SetNucleus),
        Box::new(EvaluateNucleus),
        Box::new(LoopNucleus),
        Box::new(BreakNucleus),
    ]
}

/// A capture the nucleus pattern guarantees, or a misfire naming it
fn required<'n>(neuron: &'n Neuron, group: &str) -> CerebrumResult<&'n str> {
    neuron.capture(group).ok_or_else(|| {
        CerebrumError::misfire(format!(
            "'{}' has no '{}' part",
            neuron.text(),
            group
        ))
    })
}
