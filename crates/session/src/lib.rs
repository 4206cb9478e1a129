#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod builder;
mod error;
mod payload;
mod reducer;
mod service;
mod state;

pub use builder::{Performance, WeightHistoryRepository, start_session};
pub use error::{CreateError, FinishError, StorageError};
pub use payload::{SessionPayload, build_session_payload};
pub use reducer::{Action, Reducer, SetUpdate};
pub use service::{SessionService, SessionStoreRepository};
pub use state::{SessionState, SessionStatus};
