// Temporal block resolution
//
// Maps an arbitrary wall-clock timestamp to the ledger block whose recorded
// timestamp is closest, by binary search over block numbers against the
// chain oracle's `timestamp_at` probe. Probes run strictly sequentially:
// each outcome determines the next search boundary, so suspensions total
// O(log head).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use vindex_error::{ChainError, ChainResult};
use vindex_types::{BlockHeight, BlockRef, Timestamp};

use crate::oracle::ChainOracle;

/// Binary-search resolver over a chain oracle
///
/// Block timestamps are assumed monotonically non-decreasing with block
/// number. When that assumption is violated by the underlying chain, the
/// result is a locally best candidate along the probed path, not
/// necessarily the global closest block.
pub struct BlockResolver<'a, O: ChainOracle + ?Sized> {
    oracle: &'a O,
    cancelled: Option<Arc<AtomicBool>>,
}

impl<'a, O: ChainOracle + ?Sized> BlockResolver<'a, O> {
    /// Create a resolver over the given oracle
    pub fn new(oracle: &'a O) -> Self {
        Self {
            oracle,
            cancelled: None,
        }
    }

    /// Attach a cooperative cancellation flag, checked between probes
    ///
    /// The resolver holds no resources needing cleanup, so aborting between
    /// probes leaves no partial state behind.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancelled = Some(flag);
        self
    }

    fn ensure_live(&self) -> ChainResult<()> {
        if let Some(flag) = &self.cancelled {
            if flag.load(Ordering::Relaxed) {
                return Err(ChainError::Cancelled);
            }
        }
        Ok(())
    }

    /// Find the block whose recorded timestamp is closest to `target`
    ///
    /// Searches `[1, head]`. The best-so-far candidate starts at the chain
    /// head; a probe replaces it only when strictly closer, so on equal
    /// distance the earlier-found candidate wins. An exact timestamp match
    /// terminates the search immediately. Fails with `EmptyChain` before
    /// any probe when the chain has no blocks, and propagates
    /// `Unavailable` from any failing probe unchanged.
    pub async fn resolve_block_at(&self, target: Timestamp) -> ChainResult<BlockRef> {
        let head = self.oracle.head_number().await?;
        if head.value() < 1 {
            return Err(ChainError::EmptyChain);
        }

        let mut best = head;
        let mut best_time = self.oracle.timestamp_at(head).await?;

        let mut low: u64 = 1;
        let mut high: u64 = head.value();

        while low <= high {
            self.ensure_live()?;

            let mid = BlockHeight::new(low + (high - low) / 2);
            let mid_time = self.oracle.timestamp_at(mid).await?;
            debug!(
                block = mid.value(),
                timestamp = mid_time.value(),
                target = target.value(),
                "probed block timestamp"
            );

            if mid_time.distance(target) < best_time.distance(target) {
                best = mid;
                best_time = mid_time;
            }

            if mid_time < target {
                low = mid.value() + 1;
            } else if mid_time > target {
                high = mid.value() - 1;
            } else {
                best = mid;
                break;
            }
        }

        let hash = self.oracle.block_hash_at(best).await?;
        debug!(block = best.value(), %hash, "resolved closest block");
        Ok(BlockRef::new(best, hash))
    }
}
