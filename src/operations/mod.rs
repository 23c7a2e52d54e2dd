//! Operation catalog
//!
//! The five binary arithmetic operations offered by the menu, each a pure
//! function over two reals with a display name.

use crate::error::{CalcError, Result};

/// A binary arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 5] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];

    /// Map a menu code (1-5) to its operation
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            4 => Some(Operation::Divide),
            5 => Some(Operation::Power),
            _ => None,
        }
    }

    /// Menu code of this operation
    pub fn code(self) -> i32 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
            Operation::Power => 5,
        }
    }

    /// Display name, as shown in the menu and the operation header
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
            Operation::Power => "Power",
        }
    }

    /// Apply the operation to two operands
    ///
    /// Only `Divide` and `Power` can fail, both with `DivisionByZero`.
    pub fn apply(self, a: f64, b: f64) -> Result<f64> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            }
            // Exponent is truncated towards zero; NaN becomes 0 and
            // out-of-range values saturate.
            Operation::Power => power(a, b as i32),
        }
    }
}

/// Raise `base` to an integer `exponent` by repeated multiplication
///
/// Folds `acc = base * acc` from 1, which is the same sequence of products
/// as `base * power(base, e - 1)`. A negative exponent yields
/// `1 / power(base, -e)`; a zero base has no negative powers and fails.
/// A nonzero base whose positive power underflows gives an infinite result.
pub fn power(base: f64, exponent: i32) -> Result<f64> {
    let magnitude = exponent.unsigned_abs();
    let mut acc = 1.0;
    for _ in 0..magnitude {
        acc = base * acc;
    }

    if exponent >= 0 {
        Ok(acc)
    } else if base == 0.0 {
        Err(CalcError::DivisionByZero)
    } else {
        Ok(1.0 / acc)
    }
}
