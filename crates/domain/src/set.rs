use derive_more::Deref;
use serde::Serialize;
use uuid::Uuid;

use crate::{BlockId, ExerciseId, Reps, Rpe, Time, Weight};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SetId(Uuid);

impl SetId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SetId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SetId {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetKind {
    Warmup,
    Working,
    Failure,
    Drop,
}

/// A set broken into sub-reps with short intra-set rest periods.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub reps: Vec<Reps>,
    pub rest_seconds: Time,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Set {
    pub id: SetId,
    pub kind: SetKind,
    pub weight: Option<Weight>,
    pub reps: Option<Reps>,
    pub rpe: Option<Rpe>,
    pub tempo: Option<String>,
    pub superset_group: Option<BlockId>,
    pub cluster: Option<Cluster>,
    pub completed: bool,
    pub previous: Option<String>,
}

/// Weak reference to a set by its position in the block tree. Resolution
/// may fail without being an error: the referenced set can have been
/// removed since the reference was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRef {
    pub block_id: BlockId,
    pub exercise_id: ExerciseId,
    pub set_id: SetId,
}

impl SetRef {
    #[must_use]
    pub fn new(block_id: BlockId, exercise_id: ExerciseId, set_id: SetId) -> Self {
        Self {
            block_id,
            exercise_id,
            set_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Reps,
    Rpe,
    Note,
}

/// The input the user is currently editing. Absent when nothing has
/// focus, e.g. after the last set has been completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveCell {
    pub set: SetRef,
    pub field: Field,
}

impl ActiveCell {
    #[must_use]
    pub fn new(set: SetRef, field: Field) -> Self {
        Self { set, field }
    }
}
