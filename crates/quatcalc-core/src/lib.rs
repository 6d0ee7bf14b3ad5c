//! # quatcalc-core
//!
//! Quaternion algebra and the four-input calculator state machine built on
//! it: two editable operands, one memory slot, an active operation and a
//! derived result.
//!
//! Two strictly layered pieces:
//!
//! * [`Quaternion`] — immutable-by-value arithmetic: component-wise add and
//!   subtract, the Hamilton product, and division via the multiplicative
//!   inverse. Pure and reentrant, no shared scratch state.
//! * [`CalculatorState`] — the deterministic transition layer deciding,
//!   from `(q1, q2, memory, op)`, what the next visible state must be. The
//!   result slot is always `op.apply(q1, q2)`, never stale.
//!
//! ## Quick start
//!
//! ```
//! use quatcalc_core::{CalculatorState, Operation, Quaternion};
//!
//! let mut calc = CalculatorState::new();
//! calc.set_operands(
//!     Quaternion::new(1.0, 2.0, 3.0, 4.0),
//!     Quaternion::new(4.0, 3.0, 2.0, 1.0),
//!     Operation::Add,
//! )?;
//! assert_eq!(calc.result_value(), Some(Quaternion::new(5.0, 5.0, 5.0, 5.0)));
//! # Ok::<(), quatcalc_core::CalcError>(())
//! ```
//!
//! The one arithmetic failure mode is dividing by a zero-norm quaternion;
//! it is reported as a typed error and recorded in the result slot while
//! the operands stay committed:
//!
//! ```
//! use quatcalc_core::{CalculatorState, Evaluation, Operation, Quaternion};
//!
//! let mut calc = CalculatorState::new();
//! let denied = calc.set_operands(Quaternion::IDENTITY, Quaternion::ZERO, Operation::Divide);
//! assert!(denied.is_err());
//! assert_eq!(calc.result(), Evaluation::DivisionByZero);
//! assert_eq!(calc.q2(), Quaternion::ZERO);
//! ```
//!
//! Hosts seed and snapshot the calculator through the plain [`SeedRecord`]
//! data contract; presentation, persistence and push-notification plumbing
//! all live outside this crate.

pub mod calculator;
pub mod error;
pub mod model;
pub mod operation;
pub mod quaternion;

pub use calculator::{CalculatorState, OperandSlot};
pub use error::CalcError;
pub use model::SeedRecord;
pub use operation::{Evaluation, Operation};
pub use quaternion::Quaternion;
