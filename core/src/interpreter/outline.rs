//! Outline scanning and tree building
//!
//! Source text is an outline: every instruction line starts with a run of
//! marker characters followed by a space, and the run length is the line's
//! nesting depth.
//!
//! ```text
//! * loop
//! ** print tick
//! ** break
//! * print done
//! ```
//!
//! Reading happens in two passes:
//! 1. `scan()` turns text into leveled lines
//! 2. `build_tree()` nests the resulting neurons by depth

use std::mem;

use super::errors::OutlineError;
use super::types::Neuron;

/// One marker line found by `scan()`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'t> {
    /// 1-based position in the scanned text
    pub number: usize,
    /// Depth relative to the outline's base level (base = 1)
    pub depth: usize,
    /// Text after the marker run and its separator
    pub text: &'t str,
}

/// Length of the marker run if `line` starts with `marker+ `
pub fn marker_run(line: &str, marker: char) -> Option<usize> {
    let run = line.chars().take_while(|c| *c == marker).count();
    if run == 0 {
        return None;
    }
    let rest = &line[run * marker.len_utf8()..];
    rest.starts_with(' ').then_some(run)
}

/// Extract leveled lines from outline text.
///
/// Lines before the first marker line are ignored. The first marker line sets
/// the base level; lines without a marker after that are dropped.
pub fn scan(text: &str, marker: char) -> Result<Vec<Line<'_>>, OutlineError> {
    let mut base = None;
    let mut lines = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let number = idx + 1;
        let Some(run) = marker_run(raw, marker) else {
            continue;
        };
        let base = *base.get_or_insert(run);
        if run < base {
            return Err(OutlineError::BelowBase {
                line: number,
                depth: run,
                base,
            });
        }

        let text = raw[run * marker.len_utf8() + 1..].trim_end();
        lines.push(Line {
            number,
            depth: run - base + 1,
            text,
        });
    }

    Ok(lines)
}

/* ===================== Tree Builder ===================== */

/// Nest a flat, leveled list of neurons into a tree.
///
/// `depth` is the level being collected; neurons deeper than it are gathered
/// and recursively attached as one child group of the preceding neuron.
pub fn build_tree(neurons: Vec<Neuron>, depth: usize) -> Result<Vec<Neuron>, OutlineError> {
    let mut tree: Vec<Neuron> = Vec::new();
    let mut pending: Vec<Neuron> = Vec::new();

    for neuron in neurons {
        if neuron.depth() == depth {
            if !pending.is_empty() {
                attach_pending(&mut tree, mem::take(&mut pending), depth)?;
            }
            tree.push(neuron);
        } else if neuron.depth() > depth {
            pending.push(neuron);
        } else {
            return Err(OutlineError::Shallower {
                line: neuron.line(),
                depth: neuron.depth(),
                expected: depth,
            });
        }
    }

    // Trailing block: nothing shallower followed it
    if !pending.is_empty() {
        attach_pending(&mut tree, pending, depth)?;
    }

    Ok(tree)
}

fn attach_pending(
    tree: &mut [Neuron],
    pending: Vec<Neuron>,
    depth: usize,
) -> Result<(), OutlineError> {
    let Some(parent) = tree.last_mut() else {
        let first = &pending[0];
        return Err(OutlineError::Orphaned {
            line: first.line(),
            depth: first.depth(),
            parent: depth,
        });
    };

    let group = build_tree(pending, depth + 1)?;
    parent.attach(group);
    Ok(())
}

/// Every neuron of `tree` in depth-first source order
pub fn depth_first(tree: &[Neuron]) -> Vec<&Neuron> {
    fn walk<'a>(neuron: &'a Neuron, out: &mut Vec<&'a Neuron>) {
        out.push(neuron);
        for child in neuron.children() {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    for neuron in tree {
        walk(neuron, &mut out);
    }
    out
}
