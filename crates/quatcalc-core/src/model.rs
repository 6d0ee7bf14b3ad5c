//! Seed record: the data contract consumed from an external loader.
//!
//! The boundary shape is `{q1, q2, memory, op}` with each quaternion as a
//! `[w, i, j, k]` array. An empty memory array means nothing is saved. The
//! record never carries the result, which is always derivable from the
//! operands and operation.

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};
use crate::operation::Operation;
use crate::quaternion::Quaternion;

/// Startup/snapshot record exchanged with external loaders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedRecord {
    /// First operand as `[w, i, j, k]`.
    pub q1: Vec<f64>,
    /// Second operand as `[w, i, j, k]`.
    pub q2: Vec<f64>,
    /// Memorized quaternion as `[w, i, j, k]`, or empty when unset.
    #[serde(default)]
    pub memory: Vec<f64>,
    /// Active operation by wire name; defaults to `none`.
    #[serde(default)]
    pub op: Operation,
}

/// Decode one seed field into a quaternion, enforcing the 4-component
/// shape. Component values go through the usual clamp policy.
pub(crate) fn components(field: &'static str, raw: &[f64]) -> Result<Quaternion> {
    match raw {
        &[w, i, j, k] => Ok(Quaternion::new(w, i, j, k)),
        _ => Err(CalcError::SeedComponentCount {
            field,
            actual: raw.len(),
        }),
    }
}
