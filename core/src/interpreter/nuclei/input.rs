use super::required;
use crate::interpreter::cerebrum::Context;
use crate::interpreter::errors::{CerebrumError, CerebrumResult};
use crate::interpreter::registry::Nucleus;
use crate::interpreter::types::{Firing, Neuron, Val};

/// `get <var> from user` reads one console line into a variable
pub struct InputNucleus;

impl Nucleus for InputNucleus {
    fn name(&self) -> &'static str {
        "input"
    }

    fn pattern(&self) -> Option<&str> {
        Some(r"^get (?P<var>\w+) from (?:the )?user$")
    }

    fn fire(&self, neuron: &Neuron, ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        let var = required(neuron, "var")?;
        let line = ctx.read_line()?.ok_or_else(|| {
            CerebrumError::misfire(format!("no input left for '{}'", var))
        })?;

        let value = Val::Str(line);
        ctx.thoughts.assign(var, value.clone());
        Ok(Firing::Value(value))
    }
}
