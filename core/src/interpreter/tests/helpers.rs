//! Test helpers for interpreter tests
//!
//! Engines with scripted consoles, leveled neuron lists, and probe nuclei
//! that record when they fire

use std::sync::{Arc, Mutex};

use crate::interpreter::outline;
use crate::interpreter::{
    Cerebrum, CerebrumBuilder, CerebrumResult, Context, Firing, Neuron, Nucleus, Registry,
    ScriptedConsole, Val, LOOP_STEP,
};

/// Engine with the built-in nuclei whose console answers with `input`
pub fn cerebrum_with_input(input: &[&str]) -> Cerebrum<ScriptedConsole> {
    CerebrumBuilder::new().build_with_console(ScriptedConsole::with_input(input.iter().copied()))
}

/// Read and think `source`, panicking on any error
pub fn run(source: &str) -> Cerebrum<ScriptedConsole> {
    run_with_input(source, &[])
}

pub fn run_with_input(source: &str, input: &[&str]) -> Cerebrum<ScriptedConsole> {
    let mut cerebrum = cerebrum_with_input(input);
    cerebrum.read(source).expect("read failed");
    cerebrum.think().expect("think failed");
    cerebrum
}

/// Unresolved neurons at the given depths, texts "line 1", "line 2", ...
pub fn leveled(depths: &[usize]) -> Vec<Neuron> {
    let registry = Registry::new();
    depths
        .iter()
        .enumerate()
        .map(|(idx, &depth)| Neuron::bind(format!("line {}", idx + 1), idx + 1, depth, &registry))
        .collect()
}

/// Depths of every neuron in depth-first order
pub fn depths(tree: &[Neuron]) -> Vec<usize> {
    outline::depth_first(tree)
        .iter()
        .map(|neuron| neuron.depth())
        .collect()
}

/// Shared record of probe firings, in order
#[derive(Debug, Clone, Default)]
pub struct FiringLog(Arc<Mutex<Vec<String>>>);

impl FiringLog {
    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Record a firing and return how many times `text` has fired so far
    fn record(&self, text: &str) -> usize {
        let mut entries = self.0.lock().unwrap();
        entries.push(text.to_string());
        entries.iter().filter(|entry| *entry == text).count()
    }
}

/// `probe <tag>`: logs each firing; can lower break_out directly on the
/// nth firing of one line
pub struct Probe {
    log: FiringLog,
    trigger: Option<(&'static str, usize)>,
}

impl Probe {
    pub fn new(log: &FiringLog) -> Self {
        Self {
            log: log.clone(),
            trigger: None,
        }
    }

    /// Lower break_out by one loop step when `text` fires for the `nth` time
    pub fn lowering_on(log: &FiringLog, text: &'static str, nth: usize) -> Self {
        Self {
            log: log.clone(),
            trigger: Some((text, nth)),
        }
    }
}

impl Nucleus for Probe {
    fn name(&self) -> &'static str {
        "probe"
    }

    fn pattern(&self) -> Option<&str> {
        Some(r"^probe (?P<tag>\w+)$")
    }

    fn fire(&self, neuron: &Neuron, ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        let count = self.log.record(neuron.text());
        if self.trigger == Some((neuron.text(), count)) {
            ctx.thoughts.special.break_out -= LOOP_STEP;
        }
        Ok(Firing::Value(Val::from(neuron.capture("tag").unwrap_or_default())))
    }
}

/// Nucleus that answers with its own name
pub struct Tagged {
    pub name: &'static str,
    pub pattern: Option<&'static str>,
}

impl Tagged {
    pub fn boxed(name: &'static str, pattern: &'static str) -> Box<dyn Nucleus> {
        Box::new(Self {
            name,
            pattern: Some(pattern),
        })
    }
}

impl Nucleus for Tagged {
    fn name(&self) -> &'static str {
        self.name
    }

    fn pattern(&self) -> Option<&str> {
        self.pattern
    }

    fn fire(&self, _neuron: &Neuron, _ctx: &mut Context<'_>) -> CerebrumResult<Firing> {
        Ok(Firing::Value(Val::from(self.name)))
    }
}
