//! Control flow types

use super::values::Val;
use serde::{Deserialize, Serialize};

/// Amount one loop level adds to `break_out` on entry.
///
/// Lowering the counter by this much unwinds exactly one enclosing loop;
/// lowering it by `n * LOOP_STEP` unwinds `n` loops.
pub const LOOP_STEP: i64 = 2;

/* ===================== Firing Outcome ===================== */

/// Outcome of firing a neuron's nucleus.
///
/// Faults are not part of this enum; a nucleus reports them through the
/// `Err` side of its result and `Context::fire` decides how to recover.
#[derive(Debug, Clone, PartialEq)]
pub enum Firing {
    /// The nucleus completed and produced a value
    Value(Val),
    /// Request unwinding: `break_out` is lowered by this amount
    Unwind(i64),
}

impl Firing {
    /// Unwind request covering `levels` enclosing loops
    pub fn unwind_levels(levels: u32) -> Self {
        Firing::Unwind(LOOP_STEP * i64::from(levels))
    }
}

impl From<Val> for Firing {
    fn from(v: Val) -> Self {
        Firing::Value(v)
    }
}

/* ===================== Control Signals ===================== */

/// Ephemeral control signals shared by every nucleus
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Special {
    /// Most recent output or result; what "it" refers to
    pub last_value: Val,

    /// Termination-depth counter driving loop unwinding
    pub break_out: i64,
}

impl Special {
    /// Whether a loop that entered at `threshold` has been asked to stop
    pub fn broken(&self, threshold: i64) -> bool {
        self.break_out <= threshold
    }
}
