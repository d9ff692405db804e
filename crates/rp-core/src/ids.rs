use core::fmt;
use core::num::NonZeroU64;

use crate::error::{RpError, RpResult};

/// Compact, stable identifier used across the network model.
///
/// - `u64` covers externally assigned identifiers as-is
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Id(NonZeroU64);

impl Id {
    /// Create an Id from a raw identifier. Zero is not a valid identifier.
    pub fn new(raw: u64) -> RpResult<Self> {
        NonZeroU64::new(raw)
            .map(Self)
            .ok_or(RpError::InvalidId { raw })
    }

    /// Recover the raw identifier.
    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.get())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Domain-specific ID alias for clarity (no runtime cost).
pub type StationId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_raw() {
        for raw in [1_u64, 2, 42, 10_000] {
            let id = Id::new(raw).unwrap();
            assert_eq!(id.get(), raw);
        }
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(Id::new(0), Err(RpError::InvalidId { raw: 0 }));
    }

    #[test]
    fn option_id_is_small() {
        // This is a classic reason for NonZero: Option<Id> can be same size as Id.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }
}
