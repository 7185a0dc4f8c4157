//! Pack Table

use std::{fmt, num::NonZeroU32};

use rustc_hash::FxHashMap;

use crate::{packs::PackSizes, solvers::SolverError};

/// Marker for totals that no combination of packs sums to exactly.
const UNREACHABLE: u32 = u32::MAX;

/// Minimum pack counts and back-pointers for every total in `0..=limit`.
///
/// Both arrays are indexed by total. `counts[t]` is the fewest packs summing to
/// exactly `t`, and `last_pack[t]` the size added last to get there.
pub(crate) struct PackTable {
    counts: Vec<u32>,
    last_pack: Vec<Option<NonZeroU32>>,
}

impl fmt::Debug for PackTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackTable")
            .field("limit", &self.limit())
            .field(
                "reachable",
                &format!(
                    "[{} totals]",
                    self.counts.iter().filter(|&&c| c != UNREACHABLE).count()
                ),
            )
            .finish()
    }
}

impl PackTable {
    /// Run the unbounded knapsack forward pass over totals `0..=limit`.
    ///
    /// Sizes are visited in ascending order and totals ascending within each
    /// size, so every size can be reused any number of times. Only a strict
    /// improvement overwrites an entry, which means that among equally short
    /// combinations the back-pointer keeps the last size that improved it.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvariantViolation`] if a pack size no larger than
    /// `limit` does not fit the back-pointer representation.
    pub(crate) fn build(pack_sizes: &PackSizes, limit: usize) -> Result<Self, SolverError> {
        let len = limit.saturating_add(1);

        let mut counts = vec![UNREACHABLE; len];
        let mut last_pack = vec![None; len];

        if let Some(zero) = counts.first_mut() {
            *zero = 0;
        }

        for size in pack_sizes.iter() {
            let Ok(step) = usize::try_from(size) else {
                continue;
            };

            if step > limit {
                continue;
            }

            let marker = u32::try_from(size)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or(SolverError::InvariantViolation {
                    message: "pack size within horizon does not fit a back-pointer",
                })?;

            for total in step..=limit {
                let Some(candidate) = counts
                    .get(total - step)
                    .map(|&from| from.saturating_add(1))
                else {
                    continue;
                };

                if let (Some(count), Some(last)) = (counts.get_mut(total), last_pack.get_mut(total))
                    && candidate < *count
                {
                    *count = candidate;
                    *last = Some(marker);
                }
            }
        }

        Ok(Self { counts, last_pack })
    }

    /// Largest total covered by the table.
    pub(crate) fn limit(&self) -> usize {
        self.counts.len().saturating_sub(1)
    }

    /// Fewest packs summing to exactly `total`, if any combination does.
    pub(crate) fn pack_count(&self, total: usize) -> Option<u32> {
        self.counts
            .get(total)
            .copied()
            .filter(|&count| count != UNREACHABLE)
    }

    /// The smallest reachable total that is at least `items`.
    pub(crate) fn smallest_reachable(&self, items: usize) -> Option<usize> {
        (items..=self.limit()).find(|&total| self.pack_count(total).is_some())
    }

    /// Walk the back-pointers from `total` down to zero, tallying packs per size.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvariantViolation`] if the walk reaches a total
    /// without a recorded pack size.
    pub(crate) fn reconstruct(&self, total: usize) -> Result<FxHashMap<u64, u64>, SolverError> {
        let mut tallies: FxHashMap<u64, u64> = FxHashMap::default();
        let mut remaining = total;

        while remaining > 0 {
            let size = self
                .last_pack
                .get(remaining)
                .copied()
                .flatten()
                .ok_or(SolverError::InvariantViolation {
                    message: "reachable total has no recorded pack size",
                })?;

            *tallies.entry(u64::from(size.get())).or_default() += 1;

            remaining = usize::try_from(size.get())
                .ok()
                .and_then(|step| remaining.checked_sub(step))
                .ok_or(SolverError::InvariantViolation {
                    message: "recorded pack size exceeds the remaining total",
                })?;
        }

        Ok(tallies)
    }
}
