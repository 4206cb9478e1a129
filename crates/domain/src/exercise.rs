use std::fmt::{self, Display};

use derive_more::Deref;
use serde::Serialize;
use uuid::Uuid;

use crate::{Name, Set, SetId};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
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

impl From<Uuid> for ExerciseId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseId {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Position of an exercise within a superset block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Slot {
    A1,
    A2,
}

impl Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Slot::A1 => "A1",
                Slot::A2 => "A2",
            }
        )
    }
}

/// An exercise as performed in a session. `sets` is non-empty once the
/// exercise has been created and its order is significant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: Name,
    pub slot: Option<Slot>,
    pub notes: String,
    pub history_note: Option<String>,
    pub sets: Vec<Set>,
}

impl Exercise {
    #[must_use]
    pub fn set(&self, id: SetId) -> Option<&Set> {
        self.sets.iter().find(|s| s.id == id)
    }

    pub fn set_mut(&mut self, id: SetId) -> Option<&mut Set> {
        self.sets.iter_mut().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_exercise_id_nil() {
        assert!(ExerciseId::nil().is_nil());
        assert_eq!(ExerciseId::nil(), ExerciseId::default());
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(Slot::A1.to_string(), "A1");
        assert_eq!(Slot::A2.to_string(), "A2");
    }
}
