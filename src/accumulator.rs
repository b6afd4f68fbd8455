//! The accumulator core — a running total plus the history of every
//! submitted operand.
//!
//! One instance exists per process; the transport wraps it in a mutex and
//! applies operations in request order. The total is stored at full f64
//! precision — truncation for display happens at the response boundary,
//! never here.

use thiserror::Error;

/// Operand rejections. Both map to a 400 at the transport boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OpError {
    #[error("division by zero not allowed")]
    DivisionByZero,

    #[error("cannot compute square root of a negative number")]
    NegativeSquareRoot,
}

#[derive(Debug, Default)]
pub struct Accumulator {
    total: f64,
    history: Vec<i64>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, n: i64) -> f64 {
        self.history.push(n);
        self.total += n as f64;
        self.total
    }

    pub fn subtract(&mut self, n: i64) -> f64 {
        self.history.push(n);
        self.total -= n as f64;
        self.total
    }

    pub fn multiply(&mut self, n: i64) -> f64 {
        self.history.push(n);
        self.total *= n as f64;
        self.total
    }

    /// The operand is recorded before validation, so a rejected zero still
    /// lands in the history while the total stays untouched.
    pub fn divide(&mut self, n: i64) -> Result<f64, OpError> {
        self.history.push(n);
        if n == 0 {
            return Err(OpError::DivisionByZero);
        }
        self.total /= n as f64;
        Ok(self.total)
    }

    /// Validates before recording, so a rejected negative never lands in the
    /// history. The total is not modified either way.
    pub fn square_root(&mut self, n: i64) -> Result<f64, OpError> {
        if n < 0 {
            return Err(OpError::NegativeSquareRoot);
        }
        self.history.push(n);
        Ok((n as f64).sqrt())
    }

    /// Zeroes the total. The history is deliberately left in place.
    pub fn reset(&mut self) {
        self.total = 0.0;
    }

    pub fn peek(&self) -> f64 {
        self.total
    }

    pub fn history(&self) -> &[i64] {
        &self.history
    }
}
