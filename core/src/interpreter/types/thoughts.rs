//! Shared run-state threaded through every firing

use super::control::Special;
use super::values::Val;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The mutable record every nucleus reads and writes.
///
/// One instance lives in each `Cerebrum`; it is borrowed mutably for the
/// duration of a `think` and never copied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thoughts {
    /// Text of each neuron currently firing, outermost first
    pub call_stack: Vec<String>,

    /// Script variables
    pub var_heap: BTreeMap<String, Val>,

    /// Control signals (`last_value`, `break_out`)
    pub special: Special,

    /// Values returned by the top-level neurons of the last `think`
    pub last: Vec<Val>,
}

impl Thoughts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn var(&self, name: &str) -> Option<&Val> {
        self.var_heap.get(name)
    }

    /// Store a variable and make it the current referent of "it"
    pub fn assign(&mut self, name: &str, value: Val) {
        self.special.last_value = value.clone();
        self.var_heap.insert(name.to_string(), value);
    }
}
