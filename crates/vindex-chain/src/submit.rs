// Ledger write submission
//
// The write-side boundary contract. Submission progresses through an
// explicit state machine instead of ad-hoc status callbacks:
// Submitted -> InBlock -> Finalized | Rejected. Callers either poll the
// watch or await `wait_finalized`. Signing and submission retries belong to
// the implementation behind the trait, not here.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use vindex_error::{ChainError, ChainResult};
use vindex_types::BlockHash;

use crate::record::VehicleRecord;

/// Lifecycle of one ledger write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Accepted by the chain client, not yet in a block
    Submitted,
    /// Included in the given block, not yet final
    InBlock(BlockHash),
    /// Finalized in the given block
    Finalized(BlockHash),
    /// Rejected before finalization
    Rejected(String),
}

impl SubmissionStatus {
    /// True for the two states a submission can end in
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized(_) | Self::Rejected(_))
    }
}

/// Subscription to one submission's status updates
///
/// Wraps a watch channel: the receiver always sees the latest status, and
/// dropping the watch cancels nothing on chain.
#[derive(Debug)]
pub struct SubmissionWatch {
    rx: watch::Receiver<SubmissionStatus>,
}

impl SubmissionWatch {
    /// Create a linked sender/watch pair, starting at `Submitted`
    pub fn channel() -> (watch::Sender<SubmissionStatus>, Self) {
        let (tx, rx) = watch::channel(SubmissionStatus::Submitted);
        (tx, Self { rx })
    }

    /// The latest observed status
    pub fn current(&self) -> SubmissionStatus {
        self.rx.borrow().clone()
    }

    /// Wait until the submission reaches a terminal state
    ///
    /// Resolves to the finalizing block hash, or `SubmissionRejected` when
    /// the write failed. A dropped sender before any terminal state
    /// surfaces as `Unavailable`.
    pub async fn wait_finalized(mut self) -> ChainResult<BlockHash> {
        loop {
            let status = self.rx.borrow_and_update().clone();
            match status {
                SubmissionStatus::Finalized(hash) => return Ok(hash),
                SubmissionStatus::Rejected(reason) => {
                    return Err(ChainError::SubmissionRejected(reason))
                }
                SubmissionStatus::Submitted | SubmissionStatus::InBlock(_) => {
                    if self.rx.changed().await.is_err() {
                        return Err(ChainError::unavailable(
                            "submission watch closed before finalization",
                        ));
                    }
                }
            }
        }
    }
}

/// Write-side boundary: accepts bounded records for submission
///
/// The core only supplies correctly bounded byte vectors; key management
/// and transaction construction live behind this trait.
#[async_trait]
pub trait LedgerSubmitter: Send + Sync {
    /// Submit one record, returning a watch over its lifecycle
    async fn submit(&self, record: VehicleRecord) -> ChainResult<SubmissionWatch>;
}
