//! Neuron: one outline line bound to the nucleus that recognizes it

use std::collections::BTreeMap;

use crate::interpreter::registry::{NucleusId, Registry};

/// One parsed source line plus its nested blocks.
///
/// The nucleus is resolved once, when the neuron is built; firing looks it up
/// by id in the owning registry.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    text: String,
    line: usize,
    depth: usize,
    nucleus: Option<NucleusId>,
    captures: BTreeMap<String, String>,
    chain: Vec<Vec<Neuron>>,
}

impl Neuron {
    /// Build a neuron for `text` and resolve it against `registry`
    pub fn bind(text: impl Into<String>, line: usize, depth: usize, registry: &Registry) -> Self {
        let text = text.into();
        let (nucleus, captures) = match registry.resolve(&text) {
            Some((id, captures)) => (Some(id), captures),
            None => (None, BTreeMap::new()),
        };

        Self {
            text,
            line,
            depth,
            nucleus,
            captures,
            chain: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based line number in the text it was read from
    pub fn line(&self) -> usize {
        self.line
    }

    /// Nesting depth, 1 for top-level lines
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn nucleus(&self) -> Option<NucleusId> {
        self.nucleus
    }

    /// Named capture group from the pattern that matched this line
    pub fn capture(&self, name: &str) -> Option<&str> {
        self.captures.get(name).map(String::as_str)
    }

    /// Append a whole nested block as one child group
    pub fn attach(&mut self, group: Vec<Neuron>) {
        self.chain.push(group);
    }

    pub fn chain(&self) -> &[Vec<Neuron>] {
        &self.chain
    }

    /// Direct children across all groups, in order
    pub fn children(&self) -> impl Iterator<Item = &Neuron> {
        self.chain.iter().flatten()
    }

    pub fn has_children(&self) -> bool {
        self.chain.iter().any(|group| !group.is_empty())
    }
}
