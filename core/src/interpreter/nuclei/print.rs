use super::required;
use crate::interpreter::cerebrum::Context;
use crate::interpreter::errors::CerebrumResult;
use crate::interpreter::registry::Nucleus;
use crate::interpreter::types::{Firing, Neuron, Val};

/// `print <text>` writes the text as one console line
pub struct PrintNucleus;

impl Nucleus for PrintNucleus {
    fn name(&self) -> &'static str {
        "print"
    }

    fn pattern(&self) -> Option<&str> {
        Some(r"^print (?P<what>.+)$")
    }

    fn fire(&self, neuron: &Neuron, ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        let what = required(neuron, "what")?;
        ctx.write_line(what)?;

        let value = Val::from(what);
        ctx.thoughts.special.last_value = value.clone();
        Ok(Firing::Value(value))
    }
}
