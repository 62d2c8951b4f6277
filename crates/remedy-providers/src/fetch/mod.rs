//! Resource Fetch Transports
//!
//! | Transport | Description |
//! |-----------|-------------|
//! | [`InMemoryResourceFetcher`] | Entries held in memory, with injectable failures and latency |
//! | [`FileSystemResourceFetcher`] | Files read from checked-out working trees on disk |

#[cfg(feature = "fetch-filesystem")]
pub mod filesystem;
pub mod in_memory;

#[cfg(feature = "fetch-filesystem")]
pub use filesystem::FileSystemResourceFetcher;
pub use in_memory::InMemoryResourceFetcher;
