// End-to-end pipeline tests over an in-memory chain and content store

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use vindex_chain::{
    BlockResolver, ChainOracle, LedgerSubmitter, RecordEntry, RecordQuery, RecordSet,
    SubmissionStatus, SubmissionWatch, VehicleRecord,
};
use vindex_error::{ChainError, ChainResult};
use vindex_registry::RecordRegistry;
use vindex_storage::InMemoryStore;
use vindex_types::{BlockHash, BlockHeight, BlockRef, Timestamp, VehicleAttributes};

const BLOCK_INTERVAL_MS: u64 = 6_000;

#[derive(Debug)]
struct Block {
    timestamp: u64,
    records: Vec<VehicleRecord>,
}

/// In-memory chain shared between the oracle and submitter roles
#[derive(Debug, Clone)]
struct MockChain {
    blocks: Arc<Mutex<Vec<Block>>>,
}

impl MockChain {
    fn new() -> Self {
        Self {
            blocks: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Seed empty blocks so the chain has history before any record
    fn seed_empty_blocks(&self, count: usize) {
        let mut blocks = self.blocks.lock().unwrap();
        for _ in 0..count {
            let timestamp = (blocks.len() as u64 + 1) * BLOCK_INTERVAL_MS;
            blocks.push(Block {
                timestamp,
                records: Vec::new(),
            });
        }
    }

    fn timestamp_of(&self, number: u64) -> u64 {
        let blocks = self.blocks.lock().unwrap();
        blocks[number as usize - 1].timestamp
    }
}

#[async_trait]
impl ChainOracle for MockChain {
    async fn head_number(&self) -> ChainResult<BlockHeight> {
        Ok(BlockHeight::new(self.blocks.lock().unwrap().len() as u64))
    }

    async fn timestamp_at(&self, number: BlockHeight) -> ChainResult<Timestamp> {
        let blocks = self.blocks.lock().unwrap();
        blocks
            .get(number.value() as usize - 1)
            .map(|b| Timestamp::new(b.timestamp))
            .ok_or_else(|| ChainError::unavailable(format!("no block {}", number)))
    }

    async fn block_hash_at(&self, number: BlockHeight) -> ChainResult<BlockHash> {
        Ok(BlockHash::new(&format!("0xblock{}", number)))
    }

    async fn read_state(&self, at: &BlockRef, query: &RecordQuery) -> ChainResult<RecordSet> {
        let blocks = self.blocks.lock().unwrap();
        let visible = at.number.value() as usize;
        let entries = blocks
            .iter()
            .take(visible)
            .flat_map(|b| b.records.iter())
            .filter(|r| {
                r.manufacturer == query.manufacturer
                    && r.model == query.model
                    && r.vin == query.vin_prefix
            })
            .map(|r| RecordEntry {
                identifier: r.identifier.as_bytes().to_vec(),
                vin: r.vin.as_bytes().to_vec(),
            })
            .collect();
        Ok(RecordSet { entries })
    }
}

#[async_trait]
impl LedgerSubmitter for MockChain {
    async fn submit(&self, record: VehicleRecord) -> ChainResult<SubmissionWatch> {
        let number = {
            let mut blocks = self.blocks.lock().unwrap();
            let timestamp = (blocks.len() as u64 + 1) * BLOCK_INTERVAL_MS;
            blocks.push(Block {
                timestamp,
                records: vec![record],
            });
            blocks.len() as u64
        };

        let hash = BlockHash::new(&format!("0xblock{}", number));
        let (tx, watch) = SubmissionWatch::channel();
        tx.send(SubmissionStatus::InBlock(hash.clone()))
            .expect("watch alive");
        tx.send(SubmissionStatus::Finalized(hash))
            .expect("watch alive");
        Ok(watch)
    }
}

fn sample_attrs() -> VehicleAttributes {
    VehicleAttributes::new("Cruise", "Bolt", "1HGCM82633A337392")
}

fn registry(chain: &MockChain) -> RecordRegistry<MockChain, InMemoryStore, MockChain> {
    RecordRegistry::new(chain.clone(), InMemoryStore::new(), chain.clone())
}

#[tokio::test]
async fn register_then_lookup_latest_round_trips_the_payload() {
    let chain = MockChain::new();
    let registry = registry(&chain);
    let payload = serde_json::json!({
        "Vehicle_Make": "Cruise",
        "Vehicle_Model": "Bolt",
        "VIN": "1HGCM82633A337392",
    });
    let payload = serde_json::to_vec(&payload).unwrap();

    let watch = registry.register(&sample_attrs(), &payload).await.unwrap();
    let finalized = watch.wait_finalized().await.unwrap();
    assert_eq!(finalized, BlockHash::new("0xblock1"));

    let records = registry.lookup_latest(&sample_attrs()).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].payload, payload);
    assert!(records[0].cid.starts_with('b'));
}

#[tokio::test]
async fn lookup_at_sees_only_history_up_to_the_resolved_block() {
    let chain = MockChain::new();
    let registry = registry(&chain);

    registry
        .register(&sample_attrs(), b"first payload")
        .await
        .unwrap()
        .wait_finalized()
        .await
        .unwrap();
    let first_block_time = chain.timestamp_of(1);

    registry
        .register(&sample_attrs(), b"second payload")
        .await
        .unwrap()
        .wait_finalized()
        .await
        .unwrap();

    // As of the first block's timestamp only one record exists
    let at_first = registry
        .lookup_at(&sample_attrs(), Timestamp::new(first_block_time))
        .await
        .unwrap();
    assert_eq!(at_first.len(), 1);
    assert_eq!(at_first[0].payload, b"first payload");

    // At the head both are visible
    let latest = registry.lookup_latest(&sample_attrs()).await.unwrap();
    assert_eq!(latest.len(), 2);
}

#[tokio::test]
async fn lookup_with_different_attributes_matches_nothing() {
    let chain = MockChain::new();
    let registry = registry(&chain);
    registry
        .register(&sample_attrs(), b"payload")
        .await
        .unwrap()
        .wait_finalized()
        .await
        .unwrap();

    let other = VehicleAttributes::new("Cruise", "Origin", "1HGCM82633A337392");
    let records = registry.lookup_latest(&other).await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn encoded_query_fingerprints_are_distinct_and_nonzero() {
    let chain = MockChain::new();
    let registry = registry(&chain);
    let query = registry.encode_query(&sample_attrs()).unwrap();

    for field in [&query.manufacturer, &query.model, &query.vin_prefix] {
        assert_eq!(field.len(), 32);
        assert!(!field.is_zero());
    }
    assert_ne!(query.manufacturer, query.model);
    assert_ne!(query.manufacturer, query.vin_prefix);
    assert_ne!(query.model, query.vin_prefix);

    // Reproducible across calls
    let again = registry.encode_query(&sample_attrs()).unwrap();
    assert_eq!(query, again);
}

#[tokio::test]
async fn lookup_at_on_an_empty_chain_surfaces_empty_chain() {
    let chain = MockChain::new();
    let registry = registry(&chain);
    let err = registry
        .lookup_at(&sample_attrs(), Timestamp::new(1_000))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), ChainError::EmptyChain.to_string());
}

#[tokio::test]
async fn resolver_can_be_cancelled_externally() {
    let chain = MockChain::new();
    chain.seed_empty_blocks(8);

    let flag = Arc::new(AtomicBool::new(true));
    let resolver = BlockResolver::new(&chain).with_cancel_flag(Arc::clone(&flag));
    let err = resolver
        .resolve_block_at(Timestamp::new(3 * BLOCK_INTERVAL_MS))
        .await
        .unwrap_err();
    assert_eq!(err, ChainError::Cancelled);

    flag.store(false, Ordering::Relaxed);
    let block = resolver
        .resolve_block_at(Timestamp::new(3 * BLOCK_INTERVAL_MS))
        .await
        .unwrap();
    assert_eq!(block.number, BlockHeight::new(3));
}
