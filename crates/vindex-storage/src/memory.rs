// In-memory content store
//
// Backs tests and local simulation. Content addresses are computed the same
// way the hosted gateway does: SHA-256 of the payload wrapped as a v1
// dag-pb CID.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use vindex_cid::{Cid, Multihash, CODEC_DAG_PB};
use vindex_crypto::{HashFunction, Sha256Hasher};
use vindex_error::{StorageError, StorageResult};

use crate::store::ContentStore;

/// In-memory implementation of the content store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    objects: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored payloads
    pub fn len(&self) -> usize {
        self.objects.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn address(payload: &[u8]) -> String {
        let hash = Sha256Hasher.hash(payload);
        Cid::v1(CODEC_DAG_PB, Multihash::sha2_256(&hash)).to_string()
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn put(&self, payload: &[u8]) -> StorageResult<String> {
        let cid = Self::address(payload);
        let mut objects = self.objects.write().unwrap();

        // Content addressing makes duplicate puts idempotent
        objects.entry(cid.clone()).or_insert_with(|| payload.to_vec());
        Ok(cid)
    }

    async fn get(&self, cid: &str) -> StorageResult<Vec<u8>> {
        let objects = self.objects.read().unwrap();
        objects
            .get(cid)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(cid.to_string()))
    }
}
