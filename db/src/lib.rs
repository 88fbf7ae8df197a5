//! Storage for the bulletin-board service.
//!
//! The API layer talks to storage only through the traits in [`storage`];
//! [`storage::memory::MemoryStorage`] is the bundled implementation.

pub mod boards;
pub mod models;
pub mod password;
pub mod storage;
