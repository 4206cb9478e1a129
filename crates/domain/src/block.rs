use derive_more::Deref;
use serde::Serialize;
use uuid::Uuid;

use crate::{Exercise, ExerciseId, Time};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct BlockId(Uuid);

impl BlockId {
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

impl From<Uuid> for BlockId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for BlockId {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Single,
    Superset {
        rounds: Option<u32>,
        transition_seconds: Option<Time>,
        rest_after_round_seconds: Option<Time>,
    },
}

/// A unit of session structure: either a single exercise or a superset
/// pairing of two exercises performed back-to-back.
///
/// A `Single` block has exactly one exercise; a `Superset` block has at
/// most two, tagged with slots `A1`/`A2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
    pub exercises: Vec<Exercise>,
}

impl Block {
    #[must_use]
    pub fn exercise(&self, id: ExerciseId) -> Option<&Exercise> {
        self.exercises.iter().find(|e| e.id == id)
    }

    pub fn exercise_mut(&mut self, id: ExerciseId) -> Option<&mut Exercise> {
        self.exercises.iter_mut().find(|e| e.id == id)
    }
}
