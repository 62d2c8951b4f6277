//! Settings Store Implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`InMemorySettingsStore`] | Settings held in memory, updated programmatically |
//! | [`JsonFileSettingsStore`] | Settings loaded from a JSON file, reloaded on demand |

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemorySettingsStore;
pub use json_file::JsonFileSettingsStore;
