use super::required;
use crate::interpreter::cerebrum::Context;
use crate::interpreter::errors::CerebrumResult;
use crate::interpreter::registry::Nucleus;
use crate::interpreter::types::{Firing, Neuron, Val};

/// `set <var> to <literal>`
pub struct SetNucleus;

impl Nucleus for SetNucleus {
    fn name(&self) -> &'static str {
        "set"
    }

    fn pattern(&self) -> Option<&str> {
        Some(r"^set (?P<var>\w+) to (?P<value>.+)$")
    }

    fn fire(&self, neuron: &Neuron, ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        let var = required(neuron, "var")?;
        let value = Val::from_literal(required(neuron, "value")?);

        ctx.thoughts.assign(var, value.clone());
        Ok(Firing::Value(value))
    }
}
