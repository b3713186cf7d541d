// Vindex content identifier codec
//
// Converts between a content identifier's string and byte forms and the
// ledger's fixed-capacity identifier vectors. The ledger stores a CID's
// multihash; reconstruction back to a CID string follows the fixed-shape
// decode policy in [`FixedShapeCidDecode`].

mod cid;
mod codec;
mod multihash;
mod varint;

pub use cid::{Cid, Version, CODEC_DAG_PB, CODEC_RAW};
pub use codec::FixedShapeCidDecode;
pub use multihash::{Multihash, MULTIHASH_SHA2_256};
