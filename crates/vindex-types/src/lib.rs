// Vindex shared types
// Primitive types used across the vehicle identifier registry

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export the commonly used types at the crate root
pub use block::{BlockHash, BlockHeight, BlockRef};
pub use limits::EncodingLimits;
pub use record::VehicleAttributes;
pub use timestamp::Timestamp;

// Block-related types
pub mod block {
    use super::*;

    /// Block hash type
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct BlockHash(pub String);

    impl BlockHash {
        pub fn new(hash: &str) -> Self {
            BlockHash(hash.to_string())
        }

        pub fn as_str(&self) -> &str {
            &self.0
        }

        pub fn is_empty(&self) -> bool {
            self.0.is_empty()
        }
    }

    impl Default for BlockHash {
        fn default() -> Self {
            BlockHash("".to_string())
        }
    }

    impl fmt::Display for BlockHash {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    /// Block height type
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct BlockHeight(pub u64);

    impl BlockHeight {
        pub fn new(height: u64) -> Self {
            BlockHeight(height)
        }

        pub fn value(&self) -> u64 {
            self.0
        }
    }

    impl Default for BlockHeight {
        fn default() -> Self {
            BlockHeight(0)
        }
    }

    impl fmt::Display for BlockHeight {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Add<u64> for BlockHeight {
        type Output = Self;

        fn add(self, rhs: u64) -> Self::Output {
            BlockHeight(self.0 + rhs)
        }
    }

    impl AddAssign<u64> for BlockHeight {
        fn add_assign(&mut self, rhs: u64) {
            self.0 += rhs;
        }
    }

    impl Sub<u64> for BlockHeight {
        type Output = Self;

        fn sub(self, rhs: u64) -> Self::Output {
            if self.0 < rhs {
                BlockHeight(0)
            } else {
                BlockHeight(self.0 - rhs)
            }
        }
    }

    impl SubAssign<u64> for BlockHeight {
        fn sub_assign(&mut self, rhs: u64) {
            if self.0 < rhs {
                self.0 = 0;
            } else {
                self.0 -= rhs;
            }
        }
    }

    /// Reference to one point in the ledger's linear history
    ///
    /// Ordered by block number. The hash is carried when the chain client
    /// resolved it, since historical state reads are keyed by hash on most
    /// chains.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BlockRef {
        /// Block number
        pub number: BlockHeight,
        /// Block hash, when known
        pub hash: Option<BlockHash>,
    }

    impl BlockRef {
        /// Create a block reference from a number alone
        pub fn from_number(number: BlockHeight) -> Self {
            Self { number, hash: None }
        }

        /// Create a block reference with a resolved hash
        pub fn new(number: BlockHeight, hash: BlockHash) -> Self {
            Self {
                number,
                hash: Some(hash),
            }
        }
    }

    impl fmt::Display for BlockRef {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match &self.hash {
                Some(hash) => write!(f, "#{} ({})", self.number, hash),
                None => write!(f, "#{}", self.number),
            }
        }
    }
}

// Timestamp types
pub mod timestamp {
    use super::*;

    /// Timestamp type (milliseconds since UNIX epoch)
    ///
    /// Block timestamps on the target chain are recorded in milliseconds,
    /// so the whole pipeline works in that unit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    pub struct Timestamp(pub u64);

    impl Timestamp {
        pub fn new(millis: u64) -> Self {
            Timestamp(millis)
        }

        pub fn now() -> Self {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis() as u64;
            Timestamp(now)
        }

        pub fn value(&self) -> u64 {
            self.0
        }

        pub fn as_i64(&self) -> i64 {
            self.0 as i64
        }

        /// Absolute difference between this timestamp and another
        pub fn distance(&self, other: Timestamp) -> u64 {
            if self.0 > other.0 {
                self.0 - other.0
            } else {
                other.0 - self.0
            }
        }

        /// Convert a wall-clock instant into a ledger timestamp
        pub fn from_datetime(dt: DateTime<Utc>) -> Self {
            Timestamp(dt.timestamp_millis().max(0) as u64)
        }

        /// Convert back to a wall-clock instant
        pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
            DateTime::<Utc>::from_timestamp_millis(self.0 as i64)
        }
    }

    impl Default for Timestamp {
        fn default() -> Self {
            Timestamp(0)
        }
    }

    impl fmt::Display for Timestamp {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl Add<u64> for Timestamp {
        type Output = Self;

        fn add(self, rhs: u64) -> Self::Output {
            Timestamp(self.0 + rhs)
        }
    }

    impl AddAssign<u64> for Timestamp {
        fn add_assign(&mut self, rhs: u64) {
            self.0 += rhs;
        }
    }

    impl Sub<u64> for Timestamp {
        type Output = Self;

        fn sub(self, rhs: u64) -> Self::Output {
            Timestamp(self.0.saturating_sub(rhs))
        }
    }
}

// Encoding limit configuration
pub mod limits {
    use super::*;

    /// Fixed-capacity limits imposed by the ledger's storage schema
    ///
    /// These are the only wire-format contracts the core owns. They are
    /// configuration, not constants baked into call sites, so a runtime with
    /// different bounded-vector capacities only needs a different
    /// `EncodingLimits` value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EncodingLimits {
        /// Capacity of an attribute fingerprint vector
        pub fingerprint_len: usize,
        /// Capacity of the stored content-identifier vector
        pub identifier_len: usize,
        /// Window of the stored identifier used to reconstruct a CID:
        /// 2-byte multihash header plus a 32-byte digest
        pub stored_multihash_len: usize,
    }

    impl Default for EncodingLimits {
        fn default() -> Self {
            Self {
                fingerprint_len: 32,
                identifier_len: 59,
                stored_multihash_len: 34,
            }
        }
    }
}

// Vehicle record types
pub mod record {
    use super::*;

    /// Free-form vehicle attributes supplied by the caller
    ///
    /// Attributes are ephemeral: they only live for the call that encodes
    /// them, and only their fingerprints ever reach the ledger.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct VehicleAttributes {
        /// Manufacturer name, e.g. "Cruise"
        pub manufacturer: String,
        /// Model name, e.g. "Bolt"
        pub model: String,
        /// Vehicle identification number or VIN prefix
        pub vin: String,
    }

    impl VehicleAttributes {
        pub fn new(
            manufacturer: impl Into<String>,
            model: impl Into<String>,
            vin: impl Into<String>,
        ) -> Self {
            Self {
                manufacturer: manufacturer.into(),
                model: model.into(),
                vin: vin.into(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_height_arithmetic_saturates_at_zero() {
        let h = BlockHeight::new(3);
        assert_eq!(h - 5, BlockHeight::new(0));
        assert_eq!(h - 1, BlockHeight::new(2));
        assert_eq!(h + 2, BlockHeight::new(5));
    }

    #[test]
    fn timestamp_distance_is_symmetric() {
        let a = Timestamp::new(100);
        let b = Timestamp::new(250);
        assert_eq!(a.distance(b), 150);
        assert_eq!(b.distance(a), 150);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn timestamp_datetime_round_trip() {
        let ts = Timestamp::new(1_700_000_000_000);
        let dt = ts.to_datetime().unwrap();
        assert_eq!(Timestamp::from_datetime(dt), ts);
    }

    #[test]
    fn default_limits_match_ledger_schema() {
        let limits = EncodingLimits::default();
        assert_eq!(limits.fingerprint_len, 32);
        assert_eq!(limits.identifier_len, 59);
        assert_eq!(limits.stored_multihash_len, 34);
    }

    #[test]
    fn block_ref_display_includes_hash_when_known() {
        let bare = BlockRef::from_number(BlockHeight::new(7));
        assert_eq!(bare.to_string(), "#7");
        let full = BlockRef::new(BlockHeight::new(7), BlockHash::new("0xabc"));
        assert_eq!(full.to_string(), "#7 (0xabc)");
    }
}
