//! Loop nucleus and the break_out protocol
//!
//! `special.break_out` is a counter shared by every loop level. On entry a
//! loop records the current value as its threshold and raises the counter by
//! `LOOP_STEP`. After every child it fires, and again after every full pass,
//! the loop stops as soon as the counter is at or below its threshold.
//!
//! Lowering the counter by `LOOP_STEP` therefore stops exactly the innermost
//! loop; lowering it by `n * LOOP_STEP` stops `n` nested loops. A loop that
//! runs out of items or whose condition fails resets the counter to its
//! threshold on the way out, as does one that returns an error.

use crate::interpreter::cerebrum::Context;
use crate::interpreter::errors::{CerebrumError, CerebrumResult};
use crate::interpreter::registry::Nucleus;
use crate::interpreter::types::{Firing, Neuron, Thoughts, Val, LOOP_STEP};

/// `loop`, `loop for each <item> in <collection>`, `loop while <cond>`,
/// `loop until <cond>`
pub struct LoopNucleus;

/// Which form of loop a neuron spelled out
#[derive(Debug, Clone, PartialEq)]
enum Mode<'n> {
    Forever,
    ForEach { item: &'n str, collection: &'n str },
    While(&'n str),
    Until(&'n str),
}

impl<'n> Mode<'n> {
    fn of(neuron: &'n Neuron) -> Self {
        if let (Some(item), Some(collection)) =
            (neuron.capture("item"), neuron.capture("collection"))
        {
            Mode::ForEach { item, collection }
        } else if let Some(cond) = neuron.capture("while") {
            Mode::While(cond)
        } else if let Some(cond) = neuron.capture("until") {
            Mode::Until(cond)
        } else {
            Mode::Forever
        }
    }
}

/// How a run of passes ended
enum Exit {
    /// Items ran out or the condition failed
    Finished(Val),
    /// The counter dropped to the threshold
    Broken(Val),
}

impl Nucleus for LoopNucleus {
    fn name(&self) -> &'static str {
        "loop"
    }

    fn pattern(&self) -> Option<&str> {
        Some(
            r"^loop(?: for each (?P<item>\w+) in (?P<collection>\w+)| while (?P<while>.+)| until (?P<until>.+))?$",
        )
    }

    fn fire(&self, neuron: &Neuron, ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        if !neuron.has_children() {
            return Err(CerebrumError::misfire(format!(
                "'{}' has no body",
                neuron.text()
            )));
        }

        let mode = Mode::of(neuron);
        let threshold = ctx.thoughts.special.break_out;
        ctx.thoughts.special.break_out += LOOP_STEP;

        match run_passes(neuron, &mode, threshold, ctx) {
            Ok(Exit::Broken(last)) => Ok(Firing::Value(last)),
            Ok(Exit::Finished(last)) => {
                ctx.thoughts.special.break_out = threshold;
                Ok(Firing::Value(last))
            }
            Err(err) => {
                ctx.thoughts.special.break_out = threshold;
                Err(err)
            }
        }
    }
}

fn run_passes(
    neuron: &Neuron,
    mode: &Mode<'_>,
    threshold: i64,
    ctx: &mut Context<'_>,
) -> CerebrumResult<Exit> {
    let mut items = match mode {
        Mode::ForEach { collection, .. } => collection_items(ctx.thoughts, collection)?,
        _ => Vec::new(),
    }
    .into_iter();

    let mut last = Val::Null;
    loop {
        let proceed = match mode {
            Mode::Forever => true,
            Mode::ForEach { item, .. } => match items.next() {
                Some(value) => {
                    ctx.thoughts.assign(item, value);
                    true
                }
                None => false,
            },
            Mode::While(cond) => condition(ctx.thoughts, cond)?,
            Mode::Until(cond) => !condition(ctx.thoughts, cond)?,
        };
        if !proceed {
            return Ok(Exit::Finished(last));
        }

        for child in neuron.children() {
            last = ctx.fire(child)?;
            if ctx.thoughts.special.broken(threshold) {
                return Ok(Exit::Broken(last));
            }
        }

        if ctx.thoughts.special.broken(threshold) {
            return Ok(Exit::Broken(last));
        }
    }
}

/// Evaluate `true`, `false`, `not <cond>` or a variable's truthiness
fn condition(thoughts: &Thoughts, cond: &str) -> CerebrumResult<bool> {
    let cond = cond.trim();
    if let Some(inner) = cond.strip_prefix("not ") {
        return Ok(!condition(thoughts, inner)?);
    }

    match cond {
        "true" => Ok(true),
        "false" => Ok(false),
        var => thoughts
            .var(var)
            .map(Val::is_truthy)
            .ok_or_else(|| CerebrumError::misfire(format!("condition '{}' is not set", var))),
    }
}

/// Snapshot of what a for-each loop walks over
fn collection_items(thoughts: &Thoughts, collection: &str) -> CerebrumResult<Vec<Val>> {
    match thoughts.var(collection) {
        Some(Val::List(items)) => Ok(items.clone()),
        Some(Val::Str(text)) => Ok(text.split_whitespace().map(Val::from).collect()),
        Some(other) => Err(CerebrumError::misfire(format!(
            "cannot loop over '{}' ({})",
            collection, other
        ))),
        None => Err(CerebrumError::misfire(format!(
            "'{}' is not set",
            collection
        ))),
    }
}
