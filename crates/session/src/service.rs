use chrono::Utc;
use log::{debug, error};

use crate::{
    CreateError, FinishError, SessionPayload, SessionState, StorageError, build_session_payload,
};

/// Durable storage for finished sessions, provided by the persistence
/// collaborator (cloud sync, analytics and offline queueing live behind
/// this seam).
#[allow(async_fn_in_trait)]
pub trait SessionStoreRepository {
    async fn store_session(&self, payload: SessionPayload) -> Result<SessionPayload, CreateError>;
}

pub struct SessionService<R> {
    store: R,
}

impl<R: SessionStoreRepository> SessionService<R> {
    pub fn new(store: R) -> Self {
        Self { store }
    }

    /// Builds the payload for a completed session and hands it to the
    /// store. Incomplete sessions are rejected without a storage call.
    pub async fn finish(&self, state: &SessionState) -> Result<SessionPayload, FinishError> {
        let Some(payload) = build_session_payload(state, Utc::now()) else {
            debug!("failed to finish session: incomplete sets remain");
            return Err(FinishError::Incomplete);
        };
        let result = self.store.store_session(payload).await;
        if let Err(ref err) = result {
            match err {
                CreateError::Storage(StorageError::NoConnection) => {
                    debug!("failed to store session: {err}");
                }
                _ => {
                    error!("failed to store session: {err}");
                }
            }
        }
        Ok(result?)
    }
}
