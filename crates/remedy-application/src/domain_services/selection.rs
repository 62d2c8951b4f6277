//! Active Action Selector

use remedy_domain::value_objects::{CodeAction, ThreadSettings};

/// Pick the active code action for the diagnostic identified by `diagnostic_id`
///
/// The action whose identity matches the persisted choice for that key wins;
/// otherwise the first action in registration order. `None` only when
/// `actions` is empty.
pub fn select_active<'a>(
    diagnostic_id: &str,
    settings: &ThreadSettings,
    actions: &'a [CodeAction],
) -> Option<&'a CodeAction> {
    settings
        .active_action(diagnostic_id)
        .and_then(|chosen| actions.iter().find(|action| action.identity() == chosen))
        .or_else(|| actions.first())
}
