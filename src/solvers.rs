//! Solvers for Shipments

use thiserror::Error;

use crate::{
    packs::{PackSizeError, PackSizes},
    shipment::Shipment,
};

pub mod dp;

/// Solver Errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// Requested item count was zero or negative.
    #[error("items must be > 0, got {items}")]
    InvalidItems {
        /// Requested item count
        items: i64,
    },

    /// Wrapped pack size validation error
    #[error(transparent)]
    PackSize(#[from] PackSizeError),

    /// Search horizon is above the safety ceiling.
    #[error("items and pack sizes lead to too large limit: {limit}")]
    LimitExceeded {
        /// Computed horizon (`items + largest pack - 1`)
        limit: i128,
    },

    /// No combination of packs reaches the requested items within the horizon.
    #[error("no combination of packs can cover {items} items")]
    NoSolution {
        /// Requested item count
        items: u64,
    },

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

impl SolverError {
    /// Whether the failure was caused by the caller's input.
    ///
    /// Only [`SolverError::InvariantViolation`] is a fault of the solver itself.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::InvariantViolation { .. })
    }
}

/// Trait for computing the optimal shipment for an item request
pub trait Solver {
    /// Solve for the given number of items using the validated pack sizes.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the input is invalid, the problem is too
    /// large, or no shipment exists.
    fn solve(items: i64, pack_sizes: &PackSizes) -> Result<Shipment, SolverError>;
}

/// Validate raw pack sizes and solve with the default [`dp::PackSolver`].
///
/// Items are checked before pack sizes, so a request that is wrong on both
/// counts reports [`SolverError::InvalidItems`].
///
/// # Errors
///
/// Returns a [`SolverError`] for invalid items or pack sizes, or any failure
/// reported by [`dp::PackSolver`].
pub fn solve(items: i64, pack_sizes: impl IntoIterator<Item = i64>) -> Result<Shipment, SolverError> {
    if items <= 0 {
        return Err(SolverError::InvalidItems { items });
    }

    let pack_sizes = PackSizes::new(pack_sizes)?;

    dp::PackSolver::solve(items, &pack_sizes)
}
