// Record registration and retrieval

use serde::{Deserialize, Serialize};
use tracing::info;

use vindex_chain::{
    BlockResolver, ChainOracle, LedgerSubmitter, RecordQuery, SubmissionWatch, VehicleRecord,
};
use vindex_cid::FixedShapeCidDecode;
use vindex_crypto::{bound, fingerprint, BoundedBytes};
use vindex_error::{CryptoResult, Result};
use vindex_storage::ContentStore;
use vindex_types::{BlockRef, EncodingLimits, Timestamp, VehicleAttributes};

/// One record retrieved from the ledger plus its off-chain payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrievedRecord {
    /// Content identifier reconstructed from the stored bytes
    pub cid: String,
    /// Payload fetched from the content store
    pub payload: Vec<u8>,
}

/// The vehicle record pipeline
///
/// Owns nothing but configuration; each operation is independent and
/// reentrant, so one registry may serve any number of concurrent calls.
pub struct RecordRegistry<O, S, W> {
    oracle: O,
    store: S,
    submitter: W,
    limits: EncodingLimits,
    codec: FixedShapeCidDecode,
}

impl<O, S, W> RecordRegistry<O, S, W>
where
    O: ChainOracle,
    S: ContentStore,
    W: LedgerSubmitter,
{
    /// Create a registry with the default ledger encoding limits
    pub fn new(oracle: O, store: S, submitter: W) -> Self {
        Self::with_limits(oracle, store, submitter, EncodingLimits::default())
    }

    /// Create a registry with explicit encoding limits
    pub fn with_limits(oracle: O, store: S, submitter: W, limits: EncodingLimits) -> Self {
        Self {
            oracle,
            store,
            submitter,
            limits,
            codec: FixedShapeCidDecode::new(limits),
        }
    }

    /// The encoding limits in force
    pub fn limits(&self) -> EncodingLimits {
        self.limits
    }

    fn encode_fingerprint(&self, attribute: &str) -> CryptoResult<BoundedBytes> {
        bound(fingerprint(attribute).as_bytes(), self.limits.fingerprint_len)
    }

    /// Encode attributes into the fingerprint filter keys a ledger read
    /// expects
    pub fn encode_query(&self, attrs: &VehicleAttributes) -> Result<RecordQuery> {
        Ok(RecordQuery {
            manufacturer: self.encode_fingerprint(&attrs.manufacturer)?,
            model: self.encode_fingerprint(&attrs.model)?,
            vin_prefix: self.encode_fingerprint(&attrs.vin)?,
        })
    }

    /// Register one vehicle record
    ///
    /// Stores the payload off-chain, encodes the attributes and the
    /// returned content identifier into bounded vectors, and submits the
    /// record for finalization. Returns the submission watch; callers
    /// typically await `wait_finalized` on it.
    pub async fn register(
        &self,
        attrs: &VehicleAttributes,
        payload: &[u8],
    ) -> Result<SubmissionWatch> {
        let cid = self.store.put(payload).await?;
        info!(%cid, "payload stored off-chain");

        let record = VehicleRecord {
            manufacturer: self.encode_fingerprint(&attrs.manufacturer)?,
            model: self.encode_fingerprint(&attrs.model)?,
            vin: self.encode_fingerprint(&attrs.vin)?,
            identifier: self.codec.cid_to_stored_bytes(&cid)?,
        };

        let watch = self.submitter.submit(record).await?;
        info!(manufacturer = %attrs.manufacturer, model = %attrs.model, "record submitted");
        Ok(watch)
    }

    /// Retrieve records matching the attributes at the current chain head
    pub async fn lookup_latest(&self, attrs: &VehicleAttributes) -> Result<Vec<RetrievedRecord>> {
        let head = self.oracle.head_number().await?;
        let hash = self.oracle.block_hash_at(head).await?;
        self.lookup_at_block(attrs, &BlockRef::new(head, hash)).await
    }

    /// Retrieve records matching the attributes as of a past instant
    ///
    /// Resolves the block whose recorded timestamp is closest to `target`,
    /// then reads ledger state at that block.
    pub async fn lookup_at(
        &self,
        attrs: &VehicleAttributes,
        target: Timestamp,
    ) -> Result<Vec<RetrievedRecord>> {
        let resolver = BlockResolver::new(&self.oracle);
        let block = resolver.resolve_block_at(target).await?;
        info!(%block, target = target.value(), "resolved historical block");
        self.lookup_at_block(attrs, &block).await
    }

    async fn lookup_at_block(
        &self,
        attrs: &VehicleAttributes,
        block: &BlockRef,
    ) -> Result<Vec<RetrievedRecord>> {
        let query = self.encode_query(attrs)?;
        let records = self.oracle.read_state(block, &query).await?;
        info!(%block, matches = records.len(), "ledger state read");

        let mut retrieved = Vec::with_capacity(records.len());
        for entry in &records.entries {
            let cid = self.codec.stored_bytes_to_cid(&entry.identifier)?;
            let payload = self.store.get(&cid).await?;
            retrieved.push(RetrievedRecord { cid, payload });
        }
        Ok(retrieved)
    }
}
