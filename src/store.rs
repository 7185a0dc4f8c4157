//! Pack Size Store
//!
//! Shared, concurrently readable and replaceable pack size configuration.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::{
    packs::{PackSizeError, PackSizes},
    report::ShipmentReport,
    solvers::{Solver, SolverError, dp::PackSolver},
};

/// Current pack sizes, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct PackSizeStore {
    sizes: Arc<RwLock<PackSizes>>,
}

impl PackSizeStore {
    /// Create a store holding the given sizes.
    pub fn new(sizes: PackSizes) -> Self {
        Self {
            sizes: Arc::new(RwLock::new(sizes)),
        }
    }

    /// Snapshot of the current pack sizes.
    pub fn get(&self) -> PackSizes {
        // The stored value is only ever swapped whole, so a poisoned lock still holds valid sizes.
        self.sizes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Validate and store a new set of pack sizes, returning the stored set.
    ///
    /// The current sizes are left untouched if validation fails.
    ///
    /// # Errors
    ///
    /// Returns a [`PackSizeError`] if any size is not positive or none are given.
    pub fn replace(
        &self,
        sizes: impl IntoIterator<Item = i64>,
    ) -> Result<PackSizes, PackSizeError> {
        let sizes = PackSizes::new(sizes)?;

        *self.sizes.write().unwrap_or_else(PoisonError::into_inner) = sizes.clone();

        info!(sizes = %sizes, "replaced pack sizes");

        Ok(sizes)
    }

    /// Solve for `items` against a snapshot of the current pack sizes.
    ///
    /// The lock is released before solving, so a concurrent [`replace`](Self::replace)
    /// never waits on a long calculation.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the request cannot be solved.
    pub fn calculate(&self, items: i64) -> Result<ShipmentReport, SolverError> {
        let sizes = self.get();
        let shipment = PackSolver::solve(items, &sizes)?;

        Ok(ShipmentReport::new(sizes, &shipment))
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn starts_with_default_sizes() {
        assert_eq!(PackSizeStore::default().get(), PackSizes::default());
    }

    #[test]
    fn replace_validates_and_normalises() -> TestResult {
        let store = PackSizeStore::default();

        let stored = store.replace([53, 23, 31, 23])?;

        assert_eq!(stored.as_slice(), &[23, 31, 53]);
        assert_eq!(store.get(), stored);

        Ok(())
    }

    #[test]
    fn failed_replace_keeps_previous_sizes() {
        let store = PackSizeStore::default();

        assert_eq!(
            store.replace([100, -1]),
            Err(PackSizeError::InvalidPackSize { size: -1 })
        );
        assert_eq!(store.replace([]), Err(PackSizeError::NoPackSizes));
        assert_eq!(store.get(), PackSizes::default());
    }

    #[test]
    fn clones_share_storage() -> TestResult {
        let store = PackSizeStore::default();
        let other = store.clone();

        other.replace([10, 20])?;

        assert_eq!(store.get().as_slice(), &[10, 20]);

        Ok(())
    }

    #[test]
    fn calculate_uses_current_sizes() -> TestResult {
        let store = PackSizeStore::default();

        let report = store.calculate(251)?;
        assert_eq!(report.total_items, 500);

        store.replace([100])?;

        let report = store.calculate(251)?;
        assert_eq!(report.total_items, 300);
        assert_eq!(report.pack_sizes.as_slice(), &[100]);

        Ok(())
    }

    #[test]
    fn concurrent_readers_see_whole_sets() -> TestResult {
        let store = PackSizeStore::default();
        let small = PackSizes::new([1, 2, 3])?;

        thread::scope(|scope| {
            let writer = store.clone();

            scope.spawn(move || {
                for _ in 0..100 {
                    let _small = writer.replace([3, 2, 1]);
                    let _default = writer.replace([250, 500, 1000, 2000, 5000]);
                }
            });

            for _ in 0..4 {
                let reader = store.clone();
                let small = small.clone();

                scope.spawn(move || {
                    for _ in 0..100 {
                        let seen = reader.get();
                        assert!(
                            seen == small || seen == PackSizes::default(),
                            "reader observed a partial set: {seen}"
                        );
                    }
                });
            }
        });

        Ok(())
    }
}
