use super::required;
use crate::interpreter::cerebrum::Context;
use crate::interpreter::errors::{CerebrumError, CerebrumResult};
use crate::interpreter::registry::Nucleus;
use crate::interpreter::types::{Firing, Neuron, Val};

/// `evaluate it` / `evaluate <var>` runs a string as an outline.
///
/// "it" is `last_value`. The sub-outline fires against the same run-state,
/// so it can read and change the caller's variables.
pub struct EvaluateNucleus;

impl Nucleus for EvaluateNucleus {
    fn name(&self) -> &'static str {
        "evaluate"
    }

    fn pattern(&self) -> Option<&str> {
        Some(r"^evaluate (?P<what>\w+)$")
    }

    fn fire(&self, neuron: &Neuron, ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        let what = required(neuron, "what")?;
        let value = match what {
            "it" => ctx.thoughts.special.last_value.clone(),
            var => ctx
                .thoughts
                .var(var)
                .cloned()
                .ok_or_else(|| CerebrumError::misfire(format!("'{}' is not set", var)))?,
        };

        let text = match value {
            Val::Str(text) => text,
            other => {
                return Err(CerebrumError::misfire(format!(
                    "cannot evaluate non-text value {}",
                    other
                )))
            }
        };

        let values = ctx.think_text(&text)?;
        Ok(Firing::Value(values.into_iter().last().unwrap_or_default()))
    }
}
