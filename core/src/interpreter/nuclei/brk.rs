use crate::interpreter::cerebrum::Context;
use crate::interpreter::errors::{CerebrumError, CerebrumResult};
use crate::interpreter::registry::Nucleus;
use crate::interpreter::types::{Firing, Neuron};

/// `break` leaves the innermost loop; `break out of <n> loops` leaves `n`
pub struct BreakNucleus;

impl Nucleus for BreakNucleus {
    fn name(&self) -> &'static str {
        "break"
    }

    fn pattern(&self) -> Option<&str> {
        Some(r"^break(?: out of (?P<levels>\d+) loops?)?$")
    }

    fn fire(&self, neuron: &Neuron, _ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        let levels = match neuron.capture("levels") {
            Some(levels) => levels
                .parse::<u32>()
                .map_err(|_| CerebrumError::misfire(format!("bad loop count '{}'", levels)))?,
            None => 1,
        };
        Ok(Firing::unwind_levels(levels))
    }
}
