//! Shared utilities for provider implementations

use futures::stream;
use remedy_domain::ports::infrastructure::ChangeStream;
use tokio::sync::broadcast;
use tracing::warn;

/// Turn a broadcast receiver of change notifications into a [`ChangeStream`]
///
/// Lagging is logged and skipped: a notification carries no payload, so the
/// next retained one still makes the consumer re-read the source. The stream
/// ends when every sender is dropped.
pub fn change_stream(receiver: broadcast::Receiver<()>) -> ChangeStream {
    let stream = stream::unfold(receiver, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(()) => return Some(((), rx)),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("Change stream lagged by {} notifications", n);
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    });
    Box::pin(stream)
}
