//! Changeset Aggregator
//!
//! Composes the pipeline stages into one computation per trigger and drives
//! that computation for a subscriber.
//!
//! ## Cancellation
//!
//! Every trigger (a new snapshot, or a settings change re-using the last
//! snapshot) bumps the subscription's generation counter and replaces the
//! in-flight aggregation. The replaced future is dropped, which cancels all of
//! its outstanding fetches and provider calls. A result is published only if
//! its generation is still the latest one, so nothing derived from a
//! superseded trigger ever reaches the subscriber.
//!
//! Updates are buffered up to `CHANGESET_UPDATE_BUFFER`; a subscriber that
//! stops polling stalls its driver instead of growing the queue.
//!
//! Until its first trigger a subscription is idle: it reports generation 0
//! and has published nothing.
//!
//! ```text
//! Computing(N) -> Ready(N) | Failed(N)
//!      ^                |
//!      +-- trigger N+1 -+
//! ```

use crate::domain_services::select_active;
use crate::ports::services::{CodeActionResolverInterface, EditMaterializerInterface};
use crate::use_cases::enrichment::DiagnosticEnrichment;
use crate::use_cases::snapshot_source::DiagnosticSnapshotSource;
use futures::future::try_join_all;
use futures::stream::{self, BoxStream, Stream, StreamExt};
use remedy_domain::constants::CHANGESET_UPDATE_BUFFER;
use remedy_domain::error::{Error, Result};
use remedy_domain::events::{
    ChangesetReport, ChangesetState, ChangesetUpdate, DiagnosticOutcome,
};
use remedy_domain::ports::infrastructure::SettingsStore;
use remedy_domain::value_objects::{
    CodeAction, DiagnosticSnapshot, EnrichedDiagnostic, FileDiff, ThreadSettings,
    collect_changesets,
};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Aggregator over the pipeline stages
///
/// Cheap to clone; every stage is shared.
#[derive(Clone)]
pub struct ChangesetAggregator {
    source: DiagnosticSnapshotSource,
    enrichment: DiagnosticEnrichment,
    resolver: Arc<dyn CodeActionResolverInterface>,
    materializer: Arc<dyn EditMaterializerInterface>,
    settings: Arc<dyn SettingsStore>,
}

impl ChangesetAggregator {
    /// Create an aggregator from its stages
    pub fn new(
        source: DiagnosticSnapshotSource,
        enrichment: DiagnosticEnrichment,
        resolver: Arc<dyn CodeActionResolverInterface>,
        materializer: Arc<dyn EditMaterializerInterface>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        Self {
            source,
            enrichment,
            resolver,
            materializer,
            settings,
        }
    }

    /// Aggregate the collection's current snapshot once
    pub async fn compute(&self) -> Result<ChangesetReport> {
        let snapshot = self.source.snapshot();
        self.aggregate(&snapshot).await
    }

    /// Aggregate one snapshot
    ///
    /// Settings are read once, before any work starts. Enrichment failures
    /// propagate as they are; a failure while resolving or materializing any
    /// diagnostic fails the whole aggregation as an `Aggregate` error.
    pub async fn aggregate(&self, snapshot: &DiagnosticSnapshot) -> Result<ChangesetReport> {
        let settings = self.settings.settings();
        let diagnostics = self.enrichment.enrich(snapshot).await?;
        let ids: Vec<String> = diagnostics.iter().map(EnrichedDiagnostic::identity).collect();

        let selections = try_join_all(
            diagnostics
                .iter()
                .zip(&ids)
                .map(|(diagnostic, id)| self.select(diagnostic, id, &settings)),
        )
        .await
        .map_err(|e| Error::aggregate([e]))?;

        let diffs = try_join_all(
            selections
                .iter()
                .map(|selection| self.materialize(selection.as_ref())),
        )
        .await
        .map_err(|e| Error::aggregate([e]))?;

        let outcomes = ids
            .into_iter()
            .zip(&selections)
            .zip(&diffs)
            .map(|((diagnostic_id, selection), diffs)| DiagnosticOutcome {
                diagnostic_id,
                active_action: selection.as_ref().map(|a| a.identity().to_string()),
                file_diffs: diffs.len(),
            })
            .collect();
        let changesets = collect_changesets(diffs.into_iter().flatten());

        Ok(ChangesetReport {
            changesets,
            outcomes,
        })
    }

    async fn select(
        &self,
        diagnostic: &EnrichedDiagnostic,
        diagnostic_id: &str,
        settings: &ThreadSettings,
    ) -> Result<Option<CodeAction>> {
        let actions = self.resolver.get_actions(diagnostic).await?;
        let active = select_active(diagnostic_id, settings, &actions).cloned();
        debug!(
            diagnostic = diagnostic_id,
            actions = actions.len(),
            active = active.as_ref().map(CodeAction::identity),
            "Selected active action"
        );
        Ok(active)
    }

    async fn materialize(&self, action: Option<&CodeAction>) -> Result<Vec<FileDiff>> {
        match action {
            Some(action) => self.materializer.materialize(action).await,
            None => Ok(Vec::new()),
        }
    }

    /// Start a subscription
    ///
    /// Must be called within a tokio runtime. The first snapshot is read
    /// immediately, so the first update is `Computing` for generation 1.
    pub fn subscribe(&self) -> ChangesetSubscription {
        let snapshots = self.source.subscribe().map(Trigger::Snapshot);
        let settings_changes = self.settings.changes().map(|()| Trigger::Settings);
        let triggers = stream::select(snapshots, settings_changes).boxed();

        let (updates, receiver) = mpsc::channel(CHANGESET_UPDATE_BUFFER);
        let generation = Arc::new(AtomicU64::new(0));
        let driver = tokio::spawn(drive(
            self.clone(),
            triggers,
            updates,
            Arc::clone(&generation),
        ));
        ChangesetSubscription {
            updates: receiver,
            generation,
            driver,
        }
    }
}

impl std::fmt::Debug for ChangesetAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangesetAggregator")
            .field("enrichment", &self.enrichment)
            .finish_non_exhaustive()
    }
}

enum Trigger {
    Snapshot(DiagnosticSnapshot),
    Settings,
}

type Aggregation = Pin<Box<dyn Future<Output = Result<ChangesetReport>> + Send>>;

struct InFlight {
    generation: u64,
    task: Aggregation,
}

async fn settle(in_flight: &mut Option<InFlight>) -> (u64, Result<ChangesetReport>) {
    match in_flight {
        Some(job) => (job.generation, (&mut job.task).await),
        None => std::future::pending().await,
    }
}

async fn publish(updates: &mpsc::Sender<ChangesetUpdate>, update: ChangesetUpdate) -> bool {
    debug!(
        generation = update.generation,
        state = update.state.name(),
        "Publishing changeset update"
    );
    updates.send(update).await.is_ok()
}

async fn drive(
    aggregator: ChangesetAggregator,
    mut triggers: BoxStream<'static, Trigger>,
    updates: mpsc::Sender<ChangesetUpdate>,
    generation: Arc<AtomicU64>,
) {
    let mut latest: Option<Arc<DiagnosticSnapshot>> = None;
    let mut in_flight: Option<InFlight> = None;
    let mut triggers_open = true;

    loop {
        tokio::select! {
            trigger = triggers.next(), if triggers_open => {
                match trigger {
                    Some(Trigger::Snapshot(snapshot)) => latest = Some(Arc::new(snapshot)),
                    Some(Trigger::Settings) => debug!("Settings changed"),
                    None => {
                        debug!("Trigger sources closed");
                        triggers_open = false;
                        if in_flight.is_none() {
                            break;
                        }
                        continue;
                    }
                }
                let Some(snapshot) = latest.clone() else {
                    continue;
                };

                let current = generation.fetch_add(1, Ordering::SeqCst) + 1;
                if let Some(superseded) = in_flight.take() {
                    debug!(
                        generation = superseded.generation,
                        superseded_by = current,
                        "Cancelling superseded aggregation"
                    );
                }
                info!(generation = current, diagnostics = snapshot.len(), "Aggregation started");
                let update = ChangesetUpdate {
                    generation: current,
                    state: ChangesetState::Computing,
                };
                if !publish(&updates, update).await {
                    break;
                }
                let aggregator = aggregator.clone();
                in_flight = Some(InFlight {
                    generation: current,
                    task: Box::pin(async move { aggregator.aggregate(&snapshot).await }),
                });
            }
            (settled, result) = settle(&mut in_flight) => {
                in_flight = None;
                if settled != generation.load(Ordering::SeqCst) {
                    debug!(generation = settled, "Discarding stale aggregation result");
                    continue;
                }
                let state = match result {
                    Ok(report) => {
                        info!(
                            generation = settled,
                            changesets = report.changesets.len(),
                            "Aggregation ready"
                        );
                        ChangesetState::Ready(report)
                    }
                    Err(e) => {
                        warn!(
                            generation = settled,
                            transient = e.is_transient(),
                            error = %e,
                            "Aggregation failed"
                        );
                        ChangesetState::Failed(e)
                    }
                };
                let update = ChangesetUpdate {
                    generation: settled,
                    state,
                };
                if !publish(&updates, update).await || !triggers_open {
                    break;
                }
            }
        }
    }
    debug!("Changeset driver stopped");
}

/// A live changeset subscription
///
/// Yields one [`ChangesetUpdate`] per state transition. Dropping the
/// subscription stops the driver and cancels any in-flight aggregation.
#[derive(Debug)]
pub struct ChangesetSubscription {
    updates: mpsc::Receiver<ChangesetUpdate>,
    generation: Arc<AtomicU64>,
    driver: JoinHandle<()>,
}

impl ChangesetSubscription {
    /// Next state transition, or `None` once the driver stopped
    pub async fn next(&mut self) -> Option<ChangesetUpdate> {
        self.updates.recv().await
    }

    /// Next `Ready` or `Failed` update, skipping `Computing`
    pub async fn next_settled(&mut self) -> Option<ChangesetUpdate> {
        loop {
            let update = self.updates.recv().await?;
            if update.state.is_settled() {
                return Some(update);
            }
        }
    }

    /// An update already buffered, without waiting for one
    pub fn try_next(&mut self) -> Option<ChangesetUpdate> {
        self.updates.try_recv().ok()
    }

    /// Latest generation started by this subscription (0 before the first)
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Stop the subscription
    pub fn unsubscribe(self) {
        self.driver.abort();
    }
}

impl Stream for ChangesetSubscription {
    type Item = ChangesetUpdate;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.get_mut().updates.poll_recv(cx)
    }
}

impl Drop for ChangesetSubscription {
    fn drop(&mut self) {
        self.driver.abort();
    }
}
