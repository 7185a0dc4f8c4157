//! Dynamic Programming Solver
//!
//! Finds the shipment with the smallest total that covers the request and,
//! at that total, the fewest packs.
//!
//! Any total of `items + largest` or more can lose one of its largest packs and
//! still cover the request, so the search never has to look past
//! `items + largest - 1`. That horizon bounds both the table size and the work,
//! and is itself capped at [`MAX_HORIZON`].

use tracing::{debug, debug_span, error};

use crate::{
    packs::PackSizes,
    shipment::Shipment,
    solvers::{Solver, SolverError, dp::table::PackTable},
};

pub(crate) mod table;

/// Largest horizon the solver will allocate a table for.
pub const MAX_HORIZON: u64 = 10_000_000;

/// Solver using an unbounded knapsack over all totals up to the horizon
#[derive(Debug)]
pub struct PackSolver;

impl Solver for PackSolver {
    fn solve(items: i64, pack_sizes: &PackSizes) -> Result<Shipment, SolverError> {
        let requested = u64::try_from(items)
            .ok()
            .filter(|&requested| requested > 0)
            .ok_or(SolverError::InvalidItems { items })?;

        let limit = horizon(requested, pack_sizes)?;

        let span = debug_span!("pack_solver", items = requested, limit, sizes = %pack_sizes);
        let _entered = span.enter();

        // `limit >= requested`, so this conversion cannot fail once the horizon fits.
        let start = usize::try_from(requested).map_err(|_err| SolverError::LimitExceeded {
            limit: i128::from(requested),
        })?;

        let table = PackTable::build(pack_sizes, limit)?;

        let best = table
            .smallest_reachable(start)
            .ok_or(SolverError::NoSolution { items: requested })?;

        let tallies = table
            .reconstruct(best)
            .inspect_err(|err| error!(total = best, "{err}"))?;

        let shipment = Shipment::from_tallies(requested, tallies);

        debug_assert_eq!(
            usize::try_from(shipment.total_items()).ok(),
            Some(best),
            "reconstructed packs must sum to the selected total"
        );

        debug!(
            total_items = shipment.total_items(),
            extra_items = shipment.extra_items(),
            packs = shipment.pack_count(),
            "solved shipment"
        );

        Ok(shipment)
    }
}

/// Compute the search horizon `items + largest - 1` for a request.
///
/// # Errors
///
/// Returns [`SolverError::LimitExceeded`] if the horizon is not positive or is
/// above [`MAX_HORIZON`].
pub fn horizon(items: u64, pack_sizes: &PackSizes) -> Result<usize, SolverError> {
    let limit = i128::from(items) + i128::from(pack_sizes.largest()) - 1;

    if limit <= 0 || limit > i128::from(MAX_HORIZON) {
        return Err(SolverError::LimitExceeded { limit });
    }

    usize::try_from(limit).map_err(|_err| SolverError::LimitExceeded { limit })
}
