//! Code action providers with controllable behavior

use async_trait::async_trait;
use remedy_domain::ports::providers::{CodeActionContext, CodeActionProvider, TextDocument};
use remedy_domain::{CodeAction, Error, Range, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;

/// Answers with fixed actions per diagnostic message
#[derive(Default)]
pub struct ScriptedProvider {
    name: String,
    actions: HashMap<String, Vec<CodeAction>>,
    failing: Vec<String>,
    delay: Option<Duration>,
    gate: Option<Arc<Semaphore>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Answer diagnostics with `message` with `actions`
    pub fn on(mut self, message: &str, actions: Vec<CodeAction>) -> Self {
        self.actions.insert(message.to_string(), actions);
        self
    }

    /// Fail for diagnostics with `message`
    pub fn failing_on(mut self, message: &str) -> Self {
        self.failing.push(message.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Wait for a permit of `gate` before answering
    pub fn gated(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CodeActionProvider for ScriptedProvider {
    async fn provide_code_actions(
        &self,
        _document: &TextDocument,
        _range: Range,
        context: &CodeActionContext,
    ) -> Result<Vec<CodeAction>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            let permit = gate
                .acquire()
                .await
                .map_err(|e| Error::internal(e.to_string()))?;
            permit.forget();
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let message = context
            .diagnostics
            .first()
            .map(|d| d.message.clone())
            .unwrap_or_default();
        if self.failing.contains(&message) {
            return Err(Error::internal(format!("cannot handle '{message}'")));
        }
        Ok(self.actions.get(&message).cloned().unwrap_or_default())
    }

    fn provider_name(&self) -> &str {
        &self.name
    }
}
