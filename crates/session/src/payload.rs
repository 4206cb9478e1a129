use chrono::{DateTime, Utc};
use liftlog_domain::{Block, find_first_incomplete_set_ref};
use serde::Serialize;

use crate::{SessionState, SessionStatus};

/// The terminal result of a session, handed to the persistence
/// collaborator. The core makes no storage calls itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionPayload {
    pub status: SessionStatus,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub blocks: Vec<Block>,
}

/// Builds the payload for a completed session, or `None` while any set
/// is incomplete. The same predicate gates `Action::FinishSession`, so
/// this doubles as an idempotent "can the session be finished" check.
#[must_use]
pub fn build_session_payload(
    state: &SessionState,
    end_time: DateTime<Utc>,
) -> Option<SessionPayload> {
    if find_first_incomplete_set_ref(&state.blocks).is_some() {
        return None;
    }
    Some(SessionPayload {
        status: SessionStatus::Finished,
        start_time: state.start_time,
        end_time,
        blocks: state.blocks.clone(),
    })
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use liftlog_domain::{
        Block, BlockKind, Exercise, Name, Reps, Set, SetKind, Weight,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn session(completed: bool) -> SessionState {
        SessionState {
            status: SessionStatus::Active,
            start_time: Utc.with_ymd_and_hms(2024, 3, 15, 17, 30, 0).unwrap(),
            blocks: vec![Block {
                id: 1.into(),
                kind: BlockKind::Single,
                exercises: vec![Exercise {
                    id: 11.into(),
                    name: Name::new("Bench Press").unwrap(),
                    slot: None,
                    notes: String::new(),
                    history_note: None,
                    sets: vec![Set {
                        id: 111.into(),
                        kind: SetKind::Working,
                        weight: Some(Weight::new(135.0).unwrap()),
                        reps: Some(Reps::new(8).unwrap()),
                        rpe: None,
                        tempo: None,
                        superset_group: None,
                        cluster: None,
                        completed,
                        previous: None,
                    }],
                }],
            }],
            active_cell: None,
        }
    }

    #[test]
    fn test_build_session_payload_rejects_incomplete_sessions() {
        let end_time = Utc.with_ymd_and_hms(2024, 3, 15, 18, 45, 0).unwrap();
        assert_eq!(build_session_payload(&session(false), end_time), None);
    }

    #[test]
    fn test_build_session_payload_for_completed_session() {
        let state = session(true);
        let end_time = Utc.with_ymd_and_hms(2024, 3, 15, 18, 45, 0).unwrap();

        let payload = build_session_payload(&state, end_time).unwrap();

        assert_eq!(payload.status, SessionStatus::Finished);
        assert_eq!(payload.start_time, state.start_time);
        assert_eq!(payload.end_time, end_time);
        assert_eq!(payload.blocks, state.blocks);
    }

    #[test]
    fn test_session_payload_serialization() {
        let end_time = Utc.with_ymd_and_hms(2024, 3, 15, 18, 45, 0).unwrap();
        let payload = build_session_payload(&session(true), end_time).unwrap();

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["status"], "finished");
        assert_eq!(json["start_time"], "2024-03-15T17:30:00Z");
        assert_eq!(json["end_time"], "2024-03-15T18:45:00Z");
        let set = &json["blocks"][0]["exercises"][0]["sets"][0];
        assert_eq!(set["kind"], "working");
        assert_eq!(set["weight"], 135.0);
        assert_eq!(set["reps"], 8);
        assert_eq!(set["completed"], true);
    }
}
