// Vindex off-chain content store
//
// Boundary contract for the content-addressed payload store, an in-memory
// implementation for tests and simulation, and an HTTP client for hosted
// pinning gateways.

mod gateway;
mod memory;
mod store;

pub use gateway::{GatewayClient, StoreConfig};
pub use memory::InMemoryStore;
pub use store::ContentStore;
