//! Pack Sizes

use std::{fmt, str::FromStr};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// Pack sizes offered when nothing else has been configured.
pub const DEFAULT_PACK_SIZES: [u64; 5] = [250, 500, 1000, 2000, 5000];

/// Pack Size Errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackSizeError {
    /// A pack size was zero or negative.
    #[error("pack size must be > 0, got {size}")]
    InvalidPackSize {
        /// The offending value
        size: i64,
    },

    /// No pack sizes remained after validation.
    #[error("at least one pack size is required")]
    NoPackSizes,

    /// A pack size list could not be parsed from text.
    #[error("invalid pack size {0:?}")]
    Parse(String),
}

/// A validated set of distinct, positive pack sizes in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackSizes {
    sizes: SmallVec<[u64; 8]>,
}

impl PackSizes {
    /// Validate, deduplicate and sort the given pack sizes.
    ///
    /// Validation stops at the first non-positive value, so the error always
    /// names the earliest offender in input order.
    ///
    /// # Errors
    ///
    /// Returns [`PackSizeError::InvalidPackSize`] for any value `<= 0` and
    /// [`PackSizeError::NoPackSizes`] if nothing is left.
    pub fn new(sizes: impl IntoIterator<Item = i64>) -> Result<Self, PackSizeError> {
        let mut seen = FxHashSet::default();
        let mut cleaned: SmallVec<[u64; 8]> = SmallVec::new();

        for size in sizes {
            let Ok(size @ 1..) = u64::try_from(size) else {
                return Err(PackSizeError::InvalidPackSize { size });
            };

            if seen.insert(size) {
                cleaned.push(size);
            }
        }

        if cleaned.is_empty() {
            return Err(PackSizeError::NoPackSizes);
        }

        cleaned.sort_unstable();

        Ok(Self { sizes: cleaned })
    }

    /// Sizes in ascending order.
    pub fn as_slice(&self) -> &[u64] {
        &self.sizes
    }

    /// Iterate sizes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.sizes.iter().copied()
    }

    /// Number of distinct sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Always `false`; a `PackSizes` holds at least one size.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The largest pack size.
    pub fn largest(&self) -> u64 {
        self.sizes.last().copied().unwrap_or_default()
    }

    /// The smallest pack size.
    pub fn smallest(&self) -> u64 {
        self.sizes.first().copied().unwrap_or_default()
    }

    /// Whether `size` is one of the available pack sizes.
    pub fn contains(&self, size: u64) -> bool {
        self.sizes.binary_search(&size).is_ok()
    }
}

impl Default for PackSizes {
    fn default() -> Self {
        Self {
            sizes: SmallVec::from_slice(&DEFAULT_PACK_SIZES),
        }
    }
}

impl fmt::Display for PackSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, size) in self.sizes.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{size}")?;
        }

        Ok(())
    }
}

impl FromStr for PackSizes {
    type Err = PackSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sizes = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<i64>()
                    .map_err(|_err| PackSizeError::Parse(part.to_string()))
            })
            .collect::<Result<SmallVec<[i64; 8]>, _>>()?;

        Self::new(sizes)
    }
}

impl<'de> Deserialize<'de> for PackSizes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<i64>::deserialize(deserializer)?;

        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_and_deduplicates() -> Result<(), PackSizeError> {
        let sizes = PackSizes::new([500, 250, 500, 1000, 250])?;

        assert_eq!(sizes.as_slice(), &[250, 500, 1000]);
        assert_eq!(sizes.largest(), 1000);
        assert_eq!(sizes.smallest(), 250);
        assert!(sizes.contains(500));
        assert!(!sizes.contains(750));

        Ok(())
    }

    #[test]
    fn rejects_first_non_positive_size() {
        assert_eq!(
            PackSizes::new([250, 0, -5]),
            Err(PackSizeError::InvalidPackSize { size: 0 })
        );
        assert_eq!(
            PackSizes::new([-5, 0]),
            Err(PackSizeError::InvalidPackSize { size: -5 })
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(PackSizes::new([]), Err(PackSizeError::NoPackSizes));
    }

    #[test]
    fn default_matches_standard_sizes() {
        assert_eq!(
            PackSizes::default().as_slice(),
            &[250, 500, 1000, 2000, 5000]
        );
    }

    #[test]
    fn parses_comma_separated_list() -> Result<(), PackSizeError> {
        let sizes: PackSizes = " 53, 23 ,31,23 ".parse()?;

        assert_eq!(sizes.as_slice(), &[23, 31, 53]);
        assert_eq!(sizes.to_string(), "23, 31, 53");

        Ok(())
    }

    #[test]
    fn parse_reports_bad_token() {
        assert_eq!(
            "250,abc".parse::<PackSizes>(),
            Err(PackSizeError::Parse("abc".to_string()))
        );
        assert_eq!("".parse::<PackSizes>(), Err(PackSizeError::NoPackSizes));
    }
}
