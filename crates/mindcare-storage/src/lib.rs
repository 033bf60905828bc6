//! mindcare-storage
//!
//! The storage collaborator: a synchronous key-value store with
//! whole-value overwrite semantics, plus JSON state helpers on top.

pub mod error;
pub mod file;
pub mod memory;
pub mod state;
pub mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::KeyValueStore;
