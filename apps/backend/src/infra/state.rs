use std::sync::Arc;

use crate::auth::session::{MemorySessionStore, SessionStore};
use crate::config::db::DbKind;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::session_config::SessionConfig;

/// Builder for [`AppState`] (used by both tests and main).
#[derive(Default)]
pub struct StateBuilder {
    db_kind: Option<DbKind>,
    session_config: SessionConfig,
    sessions: Option<Arc<dyn SessionStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, kind: DbKind) -> Self {
        self.db_kind = Some(kind);
        self
    }

    pub fn with_session_config(mut self, cfg: SessionConfig) -> Self {
        self.session_config = cfg;
        self
    }

    /// Swap in a different session backend.
    pub fn with_session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.sessions = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let db = match self.db_kind {
            // single entrypoint: connect + migrate
            Some(kind) => Some(bootstrap_db(kind).await?),
            None => None,
        };
        let sessions = self
            .sessions
            .unwrap_or_else(|| Arc::new(MemorySessionStore::new(self.session_config.max_age)));
        Ok(AppState::new(db, sessions, self.session_config))
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
