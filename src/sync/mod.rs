//! Optional mirroring of game state to a persistence backend
//!
//! The game never depends on the backend for correctness: the session in
//! memory is authoritative and backend failures are only reported.

/// Directory-backed JSON store
pub mod file;
/// In-memory store
pub mod memory;
/// Row types and change events
pub mod records;
/// Store trait and subscription registry
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::{ChangeEvent, ChangeKind, Table, UserGameRecord, UserLocationRecord};
pub use store::{ChangeListener, StateStore, Subscribers, SubscriptionId};
