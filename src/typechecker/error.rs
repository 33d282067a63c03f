use colored::Colorize;
use thiserror::Error;

use crate::typechecker::types::Type;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("unbound identifier: {0}")]
    UnboundIdentifier(String),
    #[error("function {0} not found")]
    UnknownFunction(String),
    #[error("{name} expects {expected} argument(s) but got {actual}")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
    #[error("argument #{position} of {name}: expected {expected}, got {actual}")]
    ArgumentTypeMismatch {
        name: String,
        position: usize,
        expected: Type,
        actual: Type,
    },
    #[error("cannot assign {actual} to {name}, which has type {expected}")]
    AssignmentTypeConflict {
        name: String,
        expected: Type,
        actual: Type,
    },
    #[error("{actual} returned but {expected} expected")]
    ReturnTypeMismatch { expected: Type, actual: Type },
    #[error("unsupported operator: {0}")]
    UnsupportedOperator(String),
    #[error("operand of {op}: expected {expected}, got {actual}")]
    OperandTypeMismatch {
        op: String,
        expected: Type,
        actual: Type,
    },
    #[error("function {0} is already defined")]
    DuplicateFunction(String),
    #[error("function {0} cannot be defined inside another function")]
    NestedFunction(String),
    #[error("unknown type: {0}")]
    UnknownType(String),
}

impl TypeError {
    /// Renders the error as a single terminal diagnostic line.
    pub fn report(&self) -> String {
        format!("{}: {}", "type error".red().bold(), self)
    }
}

pub type TypeResult<T> = Result<T, TypeError>;
