//! Cerebrum - the execution engine
//!
//! The cerebrum owns the nucleus registry, the shared run-state and the
//! current program. Execution is synchronous and single-threaded:
//!
//! 1. `read()` turns outline text into a neuron tree
//! 2. `think()` fires every top-level neuron in order
//!
//! Nuclei fire their children (and run new text) through `Context`, the
//! borrowed view of the engine handed to every firing.
//!
//! # Example
//!
//! ```
//! use neulang_core::interpreter::{CerebrumBuilder, ScriptedConsole};
//!
//! let mut cerebrum = CerebrumBuilder::new().build_with_console(ScriptedConsole::new());
//! cerebrum.read("* print hello").unwrap();
//! cerebrum.think().unwrap();
//! assert_eq!(cerebrum.console().output(), ["hello"]);
//! ```

use tracing::{debug, warn};

use super::console::{Console, StdConsole};
use super::errors::{CerebrumError, CerebrumResult};
use super::nuclei;
use super::outline;
use super::registry::{Nucleus, Registry};
use super::types::{Firing, Neuron, Thoughts, Val, LOOP_STEP};
use crate::config::Config;

/// Deepest chain of nested firings before the innermost one faults.
///
/// Loops and `evaluate` fire recursively; text that evaluates itself would
/// otherwise recurse until the stack overflows.
pub const MAX_FIRING_DEPTH: usize = 64;

/* ===================== Options ===================== */

/// Behavior switches for reading and firing
#[derive(Debug, Clone, PartialEq)]
pub struct CerebrumOptions {
    /// Surface nucleus faults as errors instead of unwinding
    pub debug: bool,

    /// Reject lines no nucleus recognizes at read time
    pub strict: bool,

    /// Level marker character
    pub marker: char,

    /// Inputs that request the process to quit
    pub quit_words: Vec<String>,
}

impl Default for CerebrumOptions {
    fn default() -> Self {
        Self {
            debug: false,
            strict: true,
            marker: '*',
            quit_words: vec!["quit".to_string(), "exit".to_string()],
        }
    }
}

/* ===================== Builder ===================== */

/// Builder for constructing a Cerebrum
pub struct CerebrumBuilder {
    options: CerebrumOptions,
    nuclei: Option<Vec<Box<dyn Nucleus>>>,
    extra: Vec<Box<dyn Nucleus>>,
}

impl CerebrumBuilder {
    /// Create a new builder with default options and the built-in nuclei
    pub fn new() -> Self {
        Self {
            options: CerebrumOptions::default(),
            nuclei: None,
            extra: Vec::new(),
        }
    }

    /// Start from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, config::ConfigError> {
        Ok(Self::new()
            .debug(config.debug)
            .strict(config.strict)
            .marker(config.marker_char()?)
            .quit_words(config.quit_words.clone()))
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.options.debug = debug;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    pub fn marker(mut self, marker: char) -> Self {
        self.options.marker = marker;
        self
    }

    pub fn quit_words(mut self, words: Vec<String>) -> Self {
        self.options.quit_words = words;
        self
    }

    /// Use exactly this nucleus set instead of the built-in catalog
    pub fn nuclei(mut self, nuclei: Vec<Box<dyn Nucleus>>) -> Self {
        self.nuclei = Some(nuclei);
        self
    }

    /// Register one more nucleus after the base set
    pub fn nucleus(mut self, nucleus: Box<dyn Nucleus>) -> Self {
        self.extra.push(nucleus);
        self
    }

    /// Build a cerebrum talking to stdin/stdout
    pub fn build(self) -> Cerebrum<StdConsole> {
        self.build_with_console(StdConsole)
    }

    pub fn build_with_console<C: Console>(self, console: C) -> Cerebrum<C> {
        let mut registry = Registry::new();
        let base = self.nuclei.unwrap_or_else(nuclei::builtins);
        let count = registry.populate(base.into_iter().chain(self.extra));
        debug!(count, "populated registry");

        Cerebrum {
            registry,
            options: self.options,
            thoughts: Thoughts::new(),
            neurons: Vec::new(),
            console,
        }
    }
}

impl Default for CerebrumBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/* ===================== Cerebrum ===================== */

/// The execution engine
pub struct Cerebrum<C: Console = StdConsole> {
    registry: Registry,
    options: CerebrumOptions,
    thoughts: Thoughts,
    neurons: Vec<Neuron>,
    console: C,
}

impl Cerebrum<StdConsole> {
    /// Engine with default options, the built-in nuclei and stdin/stdout
    pub fn new() -> Self {
        CerebrumBuilder::new().build()
    }
}

impl Default for Cerebrum<StdConsole> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> Cerebrum<C> {
    /// Parse outline text and make it the current program.
    ///
    /// Returns the number of input lines processed.
    pub fn read(&mut self, text: &str) -> CerebrumResult<usize> {
        let (neurons, count) = read_outline(text, &self.registry, &self.options)?;
        self.neurons = neurons;
        Ok(count)
    }

    /// Fire every top-level neuron of the current program, in order.
    ///
    /// Returns each top-level neuron's value (also kept in `thoughts().last`).
    /// After an error, `thoughts().last` holds the values of the neurons that
    /// completed before it.
    pub fn think(&mut self) -> CerebrumResult<Vec<Val>> {
        let mut ctx = Context {
            registry: &self.registry,
            options: &self.options,
            thoughts: &mut self.thoughts,
            console: &mut self.console,
        };

        let mut last = Vec::with_capacity(self.neurons.len());
        let mut outcome = Ok(());
        for neuron in &self.neurons {
            match ctx.fire(neuron) {
                Ok(value) => last.push(value),
                Err(err) => {
                    outcome = Err(err);
                    break;
                }
            }
        }

        ctx.thoughts.last = last.clone();
        outcome.map(|()| last)
    }

    /// `read` then `think`
    pub fn run(&mut self, text: &str) -> CerebrumResult<Vec<Val>> {
        self.read(text)?;
        self.think()
    }

    /// Register more nuclei on a live engine, returning how many were accepted
    pub fn populate(&mut self, nuclei: Vec<Box<dyn Nucleus>>) -> usize {
        self.registry.populate(nuclei)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn thoughts(&self) -> &Thoughts {
        &self.thoughts
    }

    pub fn thoughts_mut(&mut self) -> &mut Thoughts {
        &mut self.thoughts
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn options(&self) -> &CerebrumOptions {
        &self.options
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }
}

/// Normalize, scan, bind and nest `text`.
///
/// Returns the tree and the number of input lines processed.
fn read_outline(
    text: &str,
    registry: &Registry,
    options: &CerebrumOptions,
) -> CerebrumResult<(Vec<Neuron>, usize)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok((Vec::new(), 0));
    }
    if options
        .quit_words
        .iter()
        .any(|word| word.eq_ignore_ascii_case(trimmed))
    {
        return Err(CerebrumError::QuitRequested);
    }

    // A bare single line is an implicit top-level instruction
    let wrapped;
    let source = if !trimmed.contains('\n')
        && outline::marker_run(trimmed, options.marker).is_none()
    {
        wrapped = format!("{} {}", options.marker, trimmed);
        wrapped.as_str()
    } else {
        trimmed
    };

    // Line numbers refer to `text`, including the blank lines trimmed above
    let skipped = text[..text.len() - text.trim_start().len()]
        .matches('\n')
        .count();
    let lines = outline::scan(source, options.marker).map_err(|err| err.shifted(skipped))?;

    let mut neurons = Vec::with_capacity(lines.len());
    for line in lines {
        let number = line.number + skipped;
        let neuron = Neuron::bind(line.text, number, line.depth, registry);
        if neuron.nucleus().is_none() && options.strict {
            return Err(CerebrumError::Unrecognized {
                line: number,
                text: line.text.to_string(),
            });
        }
        neurons.push(neuron);
    }

    let tree = outline::build_tree(neurons, 1)?;
    let count = source.lines().count();
    debug!(lines = count, top_level = tree.len(), "read outline");
    Ok((tree, count))
}

/* ===================== Firing Context ===================== */

/// What a nucleus sees while it fires
pub struct Context<'a> {
    registry: &'a Registry,
    options: &'a CerebrumOptions,

    /// Shared run-state
    pub thoughts: &'a mut Thoughts,

    /// Console for user-facing I/O
    pub console: &'a mut dyn Console,
}

impl<'a> Context<'a> {
    /// Fire one neuron and apply the outcome to the run-state.
    ///
    /// - `Firing::Value` is returned as is
    /// - `Firing::Unwind(n)` lowers `break_out` by `n`
    /// - a fault lowers `break_out` by one loop level, or in debug mode is
    ///   returned as `CerebrumError::Fault`
    pub fn fire(&mut self, neuron: &Neuron) -> CerebrumResult<Val> {
        let registry = self.registry;
        let Some(nucleus) = neuron.nucleus().and_then(|id| registry.get(id)) else {
            warn!(line = neuron.line(), text = neuron.text(), "unrecognized instruction skipped");
            return Ok(Val::Null);
        };

        self.thoughts.call_stack.push(neuron.text().to_string());
        let outcome = if self.thoughts.call_stack.len() > MAX_FIRING_DEPTH {
            Err(CerebrumError::misfire(format!(
                "firing nested deeper than {} levels",
                MAX_FIRING_DEPTH
            )))
        } else {
            debug!(nucleus = nucleus.name(), line = neuron.line(), "firing");
            nucleus.fire(neuron, self)
        };

        let result = match outcome {
            Ok(Firing::Value(v)) => Ok(v),
            Ok(Firing::Unwind(amount)) => {
                self.thoughts.special.break_out -= amount;
                Ok(Val::Null)
            }
            Err(err) if err.is_passthrough() => Err(err),
            Err(err) if self.options.debug => Err(CerebrumError::Fault {
                text: neuron.text().to_string(),
                line: neuron.line(),
                trace: self.thoughts.call_stack.clone(),
                source: Box::new(err),
            }),
            Err(err) => {
                warn!(line = neuron.line(), text = neuron.text(), %err, "fault, unwinding");
                self.thoughts.special.break_out -= LOOP_STEP;
                Ok(Val::Null)
            }
        };

        self.thoughts.call_stack.pop();
        result
    }

    /// Read `text` as an outline and fire it against this run-state.
    ///
    /// The engine's stored program is left untouched.
    pub fn think_text(&mut self, text: &str) -> CerebrumResult<Vec<Val>> {
        let (neurons, _) = read_outline(text, self.registry, self.options)?;
        neurons.iter().map(|neuron| self.fire(neuron)).collect()
    }

    pub fn write_line(&mut self, line: &str) -> CerebrumResult<()> {
        self.console.write_line(line)?;
        Ok(())
    }

    pub fn read_line(&mut self) -> CerebrumResult<Option<String>> {
        Ok(self.console.read_line()?)
    }

    pub fn debug(&self) -> bool {
        self.options.debug
    }
}
