//! Configuration types module

pub mod app;
pub mod cache;
pub mod diff;
pub mod logging;

pub use app::AppConfig;
pub use cache::ResourceCacheConfig;
pub use diff::DiffConfig;
pub use logging::LoggingConfig;
