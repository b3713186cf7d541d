// Chain oracle interface
//
// The read-side boundary contract the core depends on. Implementations
// wrap a concrete chain client; the core never retries a failed round
// trip, it surfaces `ChainError::Unavailable` unchanged.

use async_trait::async_trait;
use std::fmt::Debug;

use vindex_error::ChainResult;
use vindex_types::{BlockHash, BlockHeight, BlockRef, Timestamp};

use crate::record::{RecordQuery, RecordSet};

/// Oracle over one chain's linear history
#[async_trait]
pub trait ChainOracle: Send + Sync + Debug {
    /// Get the current head block number
    async fn head_number(&self) -> ChainResult<BlockHeight>;

    /// Get the recorded timestamp of a block, in milliseconds since epoch
    async fn timestamp_at(&self, number: BlockHeight) -> ChainResult<Timestamp>;

    /// Get the hash of a block
    async fn block_hash_at(&self, number: BlockHeight) -> ChainResult<BlockHash>;

    /// Read matching records from ledger state as of the given block
    async fn read_state(&self, at: &BlockRef, query: &RecordQuery) -> ChainResult<RecordSet>;
}
