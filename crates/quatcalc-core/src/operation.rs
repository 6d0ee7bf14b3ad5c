//! Calculator operations and their evaluation over operand pairs.
//!
//! The lowercase variant names double as the wire/serialized form used by
//! seed records and hosts: `none | add | subtract | multiply | divide`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;
use crate::quaternion::Quaternion;

/// Binary operation selected on the calculator.
///
/// `None` is the initial state in which no result is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// No active operation.
    #[default]
    None,
    /// Component-wise sum.
    Add,
    /// Component-wise difference.
    Subtract,
    /// Hamilton product.
    Multiply,
    /// Multiplication by the divisor's inverse.
    Divide,
}

impl Operation {
    /// Evaluate `a <op> b`.
    ///
    /// Total over all finite inputs: `None` yields [`Evaluation::Empty`],
    /// and a divide against a zero-norm divisor yields the typed
    /// [`Evaluation::DivisionByZero`] instead of NaN components.
    pub fn apply(self, a: Quaternion, b: Quaternion) -> Evaluation {
        match self {
            Operation::None => Evaluation::Empty,
            Operation::Add => Evaluation::Value(a + b),
            Operation::Subtract => Evaluation::Value(a - b),
            Operation::Multiply => Evaluation::Value(a * b),
            Operation::Divide => match a.checked_div(b) {
                Ok(q) => Evaluation::Value(q),
                Err(_) => Evaluation::DivisionByZero,
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::None => write!(f, "none"),
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
            Operation::Divide => write!(f, "divide"),
        }
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Operation::None),
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            other => Err(CalcError::UnknownOperation(other.to_string())),
        }
    }
}

/// Outcome of evaluating the active operation over the two operands.
///
/// The divide failure is carried as data so the state can always answer
/// "why is there no result" without an out-of-band error channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// Nothing computed: no operation is active.
    Empty,
    /// The operation produced a value.
    Value(Quaternion),
    /// The active divide hit a zero-norm divisor.
    DivisionByZero,
}

impl Evaluation {
    /// The computed quaternion, if one exists.
    pub fn value(&self) -> Option<Quaternion> {
        match self {
            Evaluation::Value(q) => Some(*q),
            _ => None,
        }
    }

    /// True when the slot holds a computed value.
    pub fn is_value(&self) -> bool {
        matches!(self, Evaluation::Value(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display_matches_wire_names() {
        assert_eq!(Operation::None.to_string(), "none");
        assert_eq!(Operation::Add.to_string(), "add");
        assert_eq!(Operation::Subtract.to_string(), "subtract");
        assert_eq!(Operation::Multiply.to_string(), "multiply");
        assert_eq!(Operation::Divide.to_string(), "divide");
    }

    #[test]
    fn test_operation_parse_round_trip() {
        for op in [
            Operation::None,
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
        ] {
            assert_eq!(op.to_string().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_operation_parse_rejects_unknown_names() {
        let err = "modulo".parse::<Operation>().unwrap_err();
        assert_eq!(err, CalcError::UnknownOperation("modulo".to_string()));

        // The wire form is lowercase only.
        assert!("Add".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_serde_wire_form() {
        assert_eq!(serde_json::to_string(&Operation::Divide).unwrap(), "\"divide\"");
        let op: Operation = serde_json::from_str("\"subtract\"").unwrap();
        assert_eq!(op, Operation::Subtract);
    }

    #[test]
    fn test_apply_none_is_empty() {
        let out = Operation::None.apply(Quaternion::IDENTITY, Quaternion::IDENTITY);
        assert_eq!(out, Evaluation::Empty);
        assert_eq!(out.value(), None);
    }

    #[test]
    fn test_apply_divide_by_zero_is_typed() {
        let out = Operation::Divide.apply(Quaternion::IDENTITY, Quaternion::ZERO);
        assert_eq!(out, Evaluation::DivisionByZero);
        assert!(!out.is_value());
    }
}
