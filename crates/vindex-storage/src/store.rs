// Content store interface
//
// The store computes the content address itself; the caller only learns the
// resulting CID string. Failures surface as `StoreUnavailable` and are
// never retried at this layer.

use async_trait::async_trait;
use std::fmt::Debug;

use vindex_error::StorageResult;

/// Off-chain content-addressed payload store
#[async_trait]
pub trait ContentStore: Send + Sync + Debug {
    /// Store a payload, returning its content identifier string
    async fn put(&self, payload: &[u8]) -> StorageResult<String>;

    /// Fetch the payload stored under a content identifier string
    async fn get(&self, cid: &str) -> StorageResult<Vec<u8>>;
}
