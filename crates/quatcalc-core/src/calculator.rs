//! Calculator state machine: operand edits, memory save/recall, reset.
//!
//! The aggregate holds `(q1, q2, memory, op)` plus the derived result. The
//! load-bearing guarantee: after every recomputing transition the result
//! slot equals `op.apply(q1, q2)` — it is never independently settable and
//! never stale. All transitions are synchronous and total; the single
//! failure mode is the zero-norm divisor, which lands in the result slot as
//! typed data while the operands stay committed.

use std::fmt;

use tracing::debug;
use uuid::Uuid;

use crate::error::{CalcError, Result};
use crate::model::{self, SeedRecord};
use crate::operation::{Evaluation, Operation};
use crate::quaternion::Quaternion;

/// Selector for one of the two operand slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSlot {
    /// The first operand.
    Q1,
    /// The second operand.
    Q2,
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSlot::Q1 => write!(f, "q1"),
            OperandSlot::Q2 => write!(f, "q2"),
        }
    }
}

/// The calculator aggregate: two operands, the active operation, a single
/// memory slot and the derived result.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    id: Uuid,
    q1: Quaternion,
    q2: Quaternion,
    result: Evaluation,
    memory: Option<Quaternion>,
    op: Operation,
}

impl CalculatorState {
    /// Create a calculator in the startup state: unit operands, a zeroed
    /// result display, no memory, no active operation.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            q1: Quaternion::IDENTITY,
            q2: Quaternion::IDENTITY,
            result: Evaluation::Value(Quaternion::ZERO),
            memory: None,
            op: Operation::None,
        }
    }

    /// Build a calculator from an externally supplied seed record.
    ///
    /// Structural problems (operand arrays without exactly 4 components, a
    /// non-empty memory array of the wrong length) fail the seed. A
    /// zero-norm divisor under a seeded `divide` does not: it lands in the
    /// result slot exactly as it would during a live transition.
    pub fn from_seed(seed: &SeedRecord) -> Result<Self> {
        let q1 = model::components("q1", &seed.q1)?;
        let q2 = model::components("q2", &seed.q2)?;
        let memory = if seed.memory.is_empty() {
            None
        } else {
            Some(model::components("memory", &seed.memory)?)
        };

        let mut state = Self {
            id: Uuid::new_v4(),
            q1,
            q2,
            result: Evaluation::Empty,
            memory,
            op: seed.op,
        };

        // Recoverable by supplying new operands, so not a seed error.
        let _ = state.recompute();

        debug!("calculator {} seeded with op {}", state.id, state.op);
        Ok(state)
    }

    /// Export the current state as a seed record.
    ///
    /// The result is omitted: it is always derivable from the operands and
    /// the operation.
    pub fn snapshot(&self) -> SeedRecord {
        SeedRecord {
            q1: self.q1.to_components().to_vec(),
            q2: self.q2.to_components().to_vec(),
            memory: self
                .memory
                .map(|q| q.to_components().to_vec())
                .unwrap_or_default(),
            op: self.op,
        }
    }

    /// Opaque instance identifier; no semantic effect on arithmetic.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The first operand.
    pub fn q1(&self) -> Quaternion {
        self.q1
    }

    /// The second operand.
    pub fn q2(&self) -> Quaternion {
        self.q2
    }

    /// The operand in the given slot.
    pub fn operand(&self, slot: OperandSlot) -> Quaternion {
        match slot {
            OperandSlot::Q1 => self.q1,
            OperandSlot::Q2 => self.q2,
        }
    }

    /// The active operation.
    pub fn op(&self) -> Operation {
        self.op
    }

    /// The memorized quaternion, if one is saved.
    pub fn memory(&self) -> Option<Quaternion> {
        self.memory
    }

    /// The result slot.
    pub fn result(&self) -> Evaluation {
        self.result
    }

    /// The computed result value, if the slot holds one.
    pub fn result_value(&self) -> Option<Quaternion> {
        self.result.value()
    }

    /// Replace both operands and the active operation, then recompute.
    ///
    /// This is the single transition behind every arithmetic key and the
    /// equals key: the result is a pure function of current state, not of
    /// input history. Operands and operation are committed even when the
    /// evaluation fails, so the caller can correct just the divisor.
    pub fn set_operands(
        &mut self,
        q1: Quaternion,
        q2: Quaternion,
        op: Operation,
    ) -> Result<()> {
        self.q1 = q1;
        self.q2 = q2;
        self.op = op;
        self.recompute()
    }

    /// Total reset: zero operands and result display, memory emptied, no
    /// active operation. Irreversible.
    pub fn clear(&mut self) {
        self.q1 = Quaternion::ZERO;
        self.q2 = Quaternion::ZERO;
        self.result = Evaluation::Value(Quaternion::ZERO);
        self.memory = None;
        self.op = Operation::None;
        debug!("calculator {} cleared", self.id);
    }

    /// Clone the chosen operand into the memory slot. The operands, the
    /// operation and the result are untouched.
    pub fn save_memory(&mut self, slot: OperandSlot) {
        let q = self.operand(slot);
        self.memory = Some(q);
        debug!("calculator {} saved {} to memory", self.id, slot);
    }

    /// Overwrite the chosen operand with the memorized quaternion and
    /// recompute against the untouched other operand.
    ///
    /// With nothing in memory this is an explicit no-op returning
    /// `Ok(false)`: the operand keeps its value rather than being
    /// overwritten with an absent one, and no recompute happens.
    pub fn recall_memory(&mut self, slot: OperandSlot) -> Result<bool> {
        let q = match self.memory {
            Some(q) => q,
            None => {
                debug!("calculator {} recall into {} ignored: memory empty", self.id, slot);
                return Ok(false);
            }
        };

        match slot {
            OperandSlot::Q1 => self.q1 = q,
            OperandSlot::Q2 => self.q2 = q,
        }
        self.recompute()?;
        Ok(true)
    }

    /// Re-evaluate the result slot from `(q1, q2, op)`.
    fn recompute(&mut self) -> Result<()> {
        self.result = self.op.apply(self.q1, self.q2);
        debug!(
            "calculator {} recomputed {} -> {:?}",
            self.id, self.op, self.result
        );
        if matches!(self.result, Evaluation::DivisionByZero) {
            return Err(CalcError::DivisionByZero);
        }
        Ok(())
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}
