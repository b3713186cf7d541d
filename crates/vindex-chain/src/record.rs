// Ledger record types
//
// The fixed-capacity vectors a vehicle record carries on chain, the query
// shape for reading them back, and the result set a historical read
// returns.

use serde::{Deserialize, Serialize};

use vindex_crypto::BoundedBytes;

/// One vehicle record as written to the ledger
///
/// Every field is already bounded to the ledger schema's capacity; this
/// type never holds raw attribute strings. Read-only once the containing
/// block finalizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Manufacturer fingerprint, bounded
    pub manufacturer: BoundedBytes,
    /// Model fingerprint, bounded
    pub model: BoundedBytes,
    /// VIN fingerprint, bounded
    pub vin: BoundedBytes,
    /// Stored content-identifier bytes, bounded
    pub identifier: BoundedBytes,
}

/// Fingerprint filter keys for a ledger read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordQuery {
    /// Manufacturer fingerprint, bounded
    pub manufacturer: BoundedBytes,
    /// Model fingerprint, bounded
    pub model: BoundedBytes,
    /// VIN-prefix fingerprint, bounded
    pub vin_prefix: BoundedBytes,
}

/// One matching entry from a ledger read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordEntry {
    /// Raw stored identifier bytes as the chain returned them
    pub identifier: Vec<u8>,
    /// VIN fingerprint bytes the entry was keyed under
    pub vin: Vec<u8>,
}

/// Result set of a ledger read at one block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    pub entries: Vec<RecordEntry>,
}

impl RecordSet {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
