// Vindex chain boundary
//
// The chain oracle trait the core consumes, the record types written to and
// read from the ledger, the temporal block resolver, and the submission
// state machine for ledger writes.

mod oracle;
mod record;
mod resolver;
mod submit;

pub use oracle::ChainOracle;
pub use record::{RecordEntry, RecordQuery, RecordSet, VehicleRecord};
pub use resolver::BlockResolver;
pub use submit::{LedgerSubmitter, SubmissionStatus, SubmissionWatch};
