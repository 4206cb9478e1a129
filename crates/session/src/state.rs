use chrono::{DateTime, Utc};
use liftlog_domain::{
    ActiveCell, Block, BlockId, Exercise, ExerciseId, Set, SetId, find_first_incomplete_set_ref,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Finished,
}

/// The complete state of a live logging session. Created once per
/// program/readiness change, mutated exclusively through the reducer,
/// consumed immutably by the finalizer.
///
/// `status` transitions one-way from `Active` to `Finished`, and only
/// once every set has been completed. `start_time` is fixed at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub start_time: DateTime<Utc>,
    pub blocks: Vec<Block>,
    pub active_cell: Option<ActiveCell>,
}

impl SessionState {
    #[must_use]
    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn exercise_mut(
        &mut self,
        block_id: BlockId,
        exercise_id: ExerciseId,
    ) -> Option<&mut Exercise> {
        self.block_mut(block_id)?.exercise_mut(exercise_id)
    }

    pub fn set_mut(
        &mut self,
        block_id: BlockId,
        exercise_id: ExerciseId,
        set_id: SetId,
    ) -> Option<&mut Set> {
        self.exercise_mut(block_id, exercise_id)?.set_mut(set_id)
    }

    /// Whether every set in the session has been completed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        find_first_incomplete_set_ref(&self.blocks).is_none()
    }
}
