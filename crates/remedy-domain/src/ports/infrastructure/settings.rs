//! Settings Store Port

use super::diagnostics::ChangeStream;
use crate::value_objects::ThreadSettings;
use std::sync::Arc;

/// Source of the persisted thread settings
///
/// Read once per aggregation. A store that can change at runtime announces
/// changes on [`SettingsStore::changes`]; each announcement triggers a
/// recomputation.
pub trait SettingsStore: Send + Sync {
    /// Current settings
    fn settings(&self) -> Arc<ThreadSettings>;

    /// Change notifications (default: never)
    fn changes(&self) -> ChangeStream {
        Box::pin(futures::stream::pending())
    }
}
