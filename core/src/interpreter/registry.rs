//! Nucleus registry
//!
//! A nucleus is one unit of behavior: a regular expression that recognizes a
//! line of outline text, plus the effect performed when a neuron bound to it
//! fires.
//!
//! # Adding a New Nucleus
//!
//! 1. Create a new file in `nuclei/`
//! 2. Implement `Nucleus` for your struct
//! 3. Add it to `nuclei::builtins()`, or register it on a `CerebrumBuilder`
//!
//! # Resolution Order
//!
//! Lines are resolved by a linear scan in registration order, so when two
//! patterns match the same line the one registered first wins. Re-registering
//! an existing pattern swaps the nucleus in place and keeps its position.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use tracing::debug;

use super::cerebrum::Context;
use super::errors::CerebrumResult;
use super::nuclei;
use super::types::{Firing, Neuron};

/* ===================== Nucleus Trait ===================== */

/// Trait every handler implements.
pub trait Nucleus: Send + Sync {
    /// Short identifier used in logs (e.g. "print")
    fn name(&self) -> &'static str;

    /// Regular expression recognizing the lines this nucleus handles.
    ///
    /// Returning `None` opts out: the registry skips the nucleus.
    /// Named capture groups are stored on the neuron.
    fn pattern(&self) -> Option<&str>;

    /// Perform the effect for `neuron`.
    ///
    /// Return `Firing::Unwind` to ask enclosing loops to stop, or an error to
    /// report a fault; `Context::fire` applies the fault policy.
    fn fire(&self, neuron: &Neuron, ctx: &mut Context<'_>) -> CerebrumResult<Firing>;
}

/// Index of a registered nucleus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NucleusId(usize);

struct Entry {
    pattern: String,
    regex: Regex,
    nucleus: Box<dyn Nucleus>,
}

/* ===================== Registry ===================== */

/// Pattern -> nucleus mapping, populated once per engine
#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in catalog
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.populate(nuclei::builtins());
        registry
    }

    /// Register one nucleus. Returns false if it was skipped.
    pub fn register(&mut self, nucleus: Box<dyn Nucleus>) -> bool {
        let Some(pattern) = nucleus.pattern().map(str::to_string) else {
            debug!(nucleus = nucleus.name(), "skipping nucleus without a pattern");
            return false;
        };

        let regex = match Regex::new(&pattern) {
            Ok(regex) => regex,
            Err(err) => {
                debug!(nucleus = nucleus.name(), %pattern, %err, "skipping nucleus with invalid pattern");
                return false;
            }
        };

        debug!(nucleus = nucleus.name(), %pattern, "registered nucleus");
        let entry = Entry {
            pattern,
            regex,
            nucleus,
        };

        match self.entries.iter_mut().find(|e| e.pattern == entry.pattern) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        true
    }

    /// Register a set of nuclei, returning how many were accepted
    pub fn populate<I>(&mut self, nuclei: I) -> usize
    where
        I: IntoIterator<Item = Box<dyn Nucleus>>,
    {
        nuclei
            .into_iter()
            .map(|nucleus| self.register(nucleus))
            .filter(|accepted| *accepted)
            .count()
    }

    /// Find the first nucleus whose pattern matches at the start of `text`
    pub fn resolve(&self, text: &str) -> Option<(NucleusId, BTreeMap<String, String>)> {
        self.entries.iter().enumerate().find_map(|(idx, entry)| {
            let caps = entry.regex.captures(text)?;
            if caps.get(0)?.start() != 0 {
                return None;
            }

            let captures = entry
                .regex
                .capture_names()
                .flatten()
                .filter_map(|name| {
                    caps.name(name)
                        .map(|m| (name.to_string(), m.as_str().to_string()))
                })
                .collect();

            Some((NucleusId(idx), captures))
        })
    }

    pub fn get(&self, id: NucleusId) -> Option<&dyn Nucleus> {
        self.entries.get(id.0).map(|e| e.nucleus.as_ref())
    }

    pub fn pattern(&self, id: NucleusId) -> Option<&str> {
        self.entries.get(id.0).map(|e| e.pattern.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (name, pattern) of every registered nucleus, in resolution order
    pub fn nuclei(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .map(|e| (e.nucleus.name(), e.pattern.as_str()))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.nuclei()).finish()
    }
}
