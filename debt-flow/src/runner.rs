//! FlowRunner – loads a session, applies exactly **one** transition, and
//! persists the updated session back to storage.
//!
//! Web services create one runner at start-up and share it across requests;
//! each request maps to a single call. Transitions of the same session are
//! serialised, so a button double-click or a racing analysis timer cannot
//! interleave two load-apply-save cycles.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use uuid::Uuid;

use crate::{
    controller::{FlowController, SessionSnapshot, Turn, UserInput},
    error::{FlowError, Result},
    pacing::{ANALYSIS_DELAY, Pacer},
    storage::{Session, SessionStorage},
};

/// High-level helper that orchestrates the _load → transition → save_ pattern.
#[derive(Clone)]
pub struct FlowRunner {
    controller: Arc<FlowController>,
    storage: Arc<dyn SessionStorage>,
    locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
}

impl FlowRunner {
    pub fn new(controller: Arc<FlowController>, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            controller,
            storage,
            locks: Arc::new(DashMap::new()),
        }
    }

    pub fn controller(&self) -> &FlowController {
        &self.controller
    }

    /// Open a session with a fresh id and persist it.
    pub async fn start(&self) -> Result<(String, Turn)> {
        let (session, turn) = self.controller.start(Uuid::new_v4().to_string());
        let id = session.id.clone();
        self.storage.save(session).await?;
        Ok((id, turn))
    }

    /// Apply one user answer.
    pub async fn respond(&self, session_id: &str, input: UserInput) -> Result<Turn> {
        self.transition(session_id, |controller, session| {
            controller.handle(session, input)
        })
        .await
    }

    /// Finish the analysis pause and produce the result.
    pub async fn complete_analysis(&self, session_id: &str) -> Result<Turn> {
        self.transition(session_id, |controller, session| {
            controller.complete_analysis(session)
        })
        .await
    }

    /// Wait out the analysis pause through `pacer`, then complete it.
    pub async fn run_analysis(&self, session_id: &str, pacer: &dyn Pacer) -> Result<Turn> {
        info!(session_id = %session_id, delay_ms = ANALYSIS_DELAY.as_millis() as u64, "Analysis scheduled");
        pacer.pause(ANALYSIS_DELAY).await;
        self.complete_analysis(session_id).await
    }

    pub async fn snapshot(&self, session_id: &str) -> Result<SessionSnapshot> {
        let session = self.load(session_id).await?;
        Ok(self.controller.snapshot(&session))
    }

    async fn load(&self, session_id: &str) -> Result<Session> {
        self.storage
            .get(session_id)
            .await?
            .ok_or_else(|| FlowError::SessionNotFound(session_id.to_string()))
    }

    async fn transition<F>(&self, session_id: &str, apply: F) -> Result<Turn>
    where
        F: FnOnce(&FlowController, &mut Session) -> Result<Turn>,
    {
        // Unknown ids never get a lock entry
        self.load(session_id).await?;
        let lock = self
            .locks
            .entry(session_id.to_string())
            .or_default()
            .clone();
        let _guard = lock.lock().await;

        // 1. Load session
        let mut session = self.load(session_id).await?;

        // 2. Apply exactly one transition; rejected input leaves storage untouched
        let turn = apply(&self.controller, &mut session)?;

        // 3. Persist new state so the next call starts where we left off
        self.storage.save(session).await?;

        Ok(turn)
    }
}
