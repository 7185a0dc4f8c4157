//! Shipments

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of packs of a single size used in a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackQuantity {
    /// Pack size
    pub pack: u64,

    /// Number of packs of this size, always at least one
    pub quantity: u64,
}

/// The optimal set of packs for an item request.
///
/// `total_items` is the smallest achievable total that covers the request and,
/// at that total, the packs are the fewest possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    items: u64,
    packs: SmallVec<[PackQuantity; 8]>,
    total_items: u64,
    extra_items: u64,
}

impl Shipment {
    /// Build a shipment from per-size tallies.
    ///
    /// Entries with a zero quantity are dropped and the rest are ordered by pack size.
    pub(crate) fn from_tallies(
        items: u64,
        tallies: impl IntoIterator<Item = (u64, u64)>,
    ) -> Self {
        let mut packs: SmallVec<[PackQuantity; 8]> = tallies
            .into_iter()
            .filter(|&(_, quantity)| quantity > 0)
            .map(|(pack, quantity)| PackQuantity { pack, quantity })
            .collect();

        packs.sort_unstable_by_key(|entry| entry.pack);

        let total_items = packs
            .iter()
            .map(|entry| entry.pack.saturating_mul(entry.quantity))
            .fold(0_u64, u64::saturating_add);

        Self {
            items,
            packs,
            total_items,
            extra_items: total_items.saturating_sub(items),
        }
    }

    /// Number of items that were requested.
    pub fn items(&self) -> u64 {
        self.items
    }

    /// Packs used, ascending by pack size.
    pub fn packs(&self) -> &[PackQuantity] {
        &self.packs
    }

    /// Iterate `(pack size, quantity)` pairs, ascending by pack size.
    pub fn iter(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.packs.iter().map(|entry| (entry.pack, entry.quantity))
    }

    /// Number of packs of the given size, zero if the size is unused.
    pub fn quantity(&self, pack: u64) -> u64 {
        self.packs
            .binary_search_by_key(&pack, |entry| entry.pack)
            .ok()
            .and_then(|idx| self.packs.get(idx))
            .map_or(0, |entry| entry.quantity)
    }

    /// Total items shipped across all packs.
    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    /// Items shipped beyond the request.
    pub fn extra_items(&self) -> u64 {
        self.extra_items
    }

    /// Total number of packs shipped.
    pub fn pack_count(&self) -> u64 {
        self.packs.iter().map(|entry| entry.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_are_sorted_and_zeroes_dropped() {
        let shipment = Shipment::from_tallies(501, [(500, 1), (1000, 0), (250, 1)]);

        assert_eq!(
            shipment.packs(),
            &[
                PackQuantity {
                    pack: 250,
                    quantity: 1
                },
                PackQuantity {
                    pack: 500,
                    quantity: 1
                },
            ]
        );
        assert_eq!(shipment.total_items(), 750);
        assert_eq!(shipment.extra_items(), 249);
        assert_eq!(shipment.pack_count(), 2);
    }

    #[test]
    fn quantity_of_unused_size_is_zero() {
        let shipment = Shipment::from_tallies(12_001, [(5000, 2), (2000, 1), (250, 1)]);

        assert_eq!(shipment.quantity(5000), 2);
        assert_eq!(shipment.quantity(1000), 0);
        assert_eq!(
            shipment.iter().collect::<Vec<_>>(),
            vec![(250, 1), (2000, 1), (5000, 2)]
        );
    }
}
