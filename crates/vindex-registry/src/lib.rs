// Vindex record registry
//
// The pipeline over the three cores: attribute fingerprinting, content
// identifier encoding, and temporal block resolution. The write path turns
// caller attributes and a payload into one bounded ledger record; the read
// paths resolve a block (head or past instant), filter ledger state by
// fingerprint, and fetch the payloads back out of the content store.

mod registry;

pub use registry::{RecordRegistry, RetrievedRecord};
