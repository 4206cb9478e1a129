//! The command-driven core of a live session. Each dispatched action
//! yields a fresh state; previously returned states are never mutated,
//! so a reactive host can rely on reference equality for change
//! detection.

use log::{debug, warn};

use liftlog_domain::{
    ActiveCell, Block, BlockId, BlockKind, Exercise, ExerciseId, Field, Name, Reps, Rpe, Set,
    SetId, SetKind, SetRef, TemplateDay, Weight, find_first_incomplete_set_ref, find_first_set_ref,
    find_next_incomplete_set_ref,
};

use crate::{
    SessionState, SessionStatus,
    builder::{WeightHistoryRepository, start_session},
};

/// The closed set of commands a host can dispatch. Actions whose ids no
/// longer resolve leave the state unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    InitializeSession {
        day: TemplateDay,
        readiness_modifier: f32,
    },
    UpdateSet {
        block_id: BlockId,
        exercise_id: ExerciseId,
        set_id: SetId,
        update: SetUpdate,
    },
    ToggleComplete {
        block_id: BlockId,
        exercise_id: ExerciseId,
        set_id: SetId,
    },
    AddSet {
        block_id: BlockId,
        exercise_id: ExerciseId,
    },
    RemoveSet {
        block_id: BlockId,
        exercise_id: ExerciseId,
        set_id: SetId,
    },
    AddExercise {
        name: Name,
    },
    RemoveExercise {
        block_id: BlockId,
        exercise_id: ExerciseId,
    },
    UpdateNote {
        block_id: BlockId,
        exercise_id: ExerciseId,
        notes: String,
    },
    SetActiveCell(Option<ActiveCell>),
    FinishSession,
}

/// A single-field change to a set. A raw RPE number is clamped onto the
/// valid scale before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum SetUpdate {
    Weight(Option<Weight>),
    Reps(Option<Reps>),
    Rpe(Option<f32>),
    Kind(SetKind),
}

pub struct Reducer<H> {
    history: H,
}

impl<H: WeightHistoryRepository> Reducer<H> {
    pub fn new(history: H) -> Self {
        Self { history }
    }

    /// Applies one action and returns the resulting state. Once the
    /// session is finished, every action except `InitializeSession` is
    /// ignored.
    #[must_use]
    pub fn dispatch(&self, state: &SessionState, action: &Action) -> SessionState {
        if let Action::InitializeSession {
            day,
            readiness_modifier,
        } = action
        {
            return start_session(day, *readiness_modifier, &self.history);
        }

        if state.status == SessionStatus::Finished {
            debug!("ignoring action dispatched after finish");
            return state.clone();
        }

        let mut next = state.clone();
        match action {
            Action::InitializeSession { .. } => (), // handled above
            Action::UpdateSet {
                block_id,
                exercise_id,
                set_id,
                update,
            } => update_set(&mut next, *block_id, *exercise_id, *set_id, update),
            Action::ToggleComplete {
                block_id,
                exercise_id,
                set_id,
            } => toggle_complete(&mut next, *block_id, *exercise_id, *set_id),
            Action::AddSet {
                block_id,
                exercise_id,
            } => add_set(&mut next, *block_id, *exercise_id),
            Action::RemoveSet {
                block_id,
                exercise_id,
                set_id,
            } => remove_set(&mut next, *block_id, *exercise_id, *set_id),
            Action::AddExercise { name } => add_exercise(&mut next, name),
            Action::RemoveExercise {
                block_id,
                exercise_id,
            } => remove_exercise(&mut next, *block_id, *exercise_id),
            Action::UpdateNote {
                block_id,
                exercise_id,
                notes,
            } => update_note(&mut next, *block_id, *exercise_id, notes),
            Action::SetActiveCell(cell) => next.active_cell = *cell,
            Action::FinishSession => finish_session(&mut next),
        }
        next
    }
}

fn update_set(
    state: &mut SessionState,
    block_id: BlockId,
    exercise_id: ExerciseId,
    set_id: SetId,
    update: &SetUpdate,
) {
    let Some(set) = state.set_mut(block_id, exercise_id, set_id) else {
        warn!("ignoring set update: set not found");
        return;
    };
    match update {
        SetUpdate::Weight(weight) => set.weight = *weight,
        SetUpdate::Reps(reps) => set.reps = *reps,
        SetUpdate::Rpe(rpe) => set.rpe = rpe.and_then(Rpe::clamp),
        SetUpdate::Kind(kind) => set.kind = *kind,
    }
}

fn toggle_complete(
    state: &mut SessionState,
    block_id: BlockId,
    exercise_id: ExerciseId,
    set_id: SetId,
) {
    let Some(set) = state.set_mut(block_id, exercise_id, set_id) else {
        warn!("ignoring completion toggle: set not found");
        return;
    };
    set.completed = !set.completed;
    let completed = set.completed;
    let set_ref = SetRef::new(block_id, exercise_id, set_id);
    if completed {
        // Focus advances only if the completed set had it.
        if state.active_cell.is_some_and(|cell| cell.set == set_ref) {
            state.active_cell = find_next_incomplete_set_ref(&state.blocks, &set_ref)
                .map(|next| ActiveCell::new(next, Field::Weight));
        }
    } else {
        state.active_cell = Some(ActiveCell::new(set_ref, Field::Weight));
    }
}

fn add_set(state: &mut SessionState, block_id: BlockId, exercise_id: ExerciseId) {
    let Some(exercise) = state.exercise_mut(block_id, exercise_id) else {
        warn!("ignoring set addition: exercise not found");
        return;
    };
    let Some(last) = exercise.sets.last() else {
        warn!("ignoring set addition: exercise has no sets");
        return;
    };
    let set = Set {
        id: SetId::random(),
        kind: last.kind,
        weight: last.weight,
        reps: last.reps,
        rpe: last.rpe,
        tempo: last.tempo.clone(),
        superset_group: last.superset_group,
        cluster: last.cluster.clone(),
        completed: false,
        previous: match (last.weight, last.reps) {
            (Some(weight), Some(reps)) => Some(format!("{weight} kg × {reps}")),
            _ => None,
        },
    };
    let set_id = set.id;
    exercise.sets.push(set);
    state.active_cell = Some(ActiveCell::new(
        SetRef::new(block_id, exercise_id, set_id),
        Field::Weight,
    ));
}

fn remove_set(
    state: &mut SessionState,
    block_id: BlockId,
    exercise_id: ExerciseId,
    set_id: SetId,
) {
    let removed = SetRef::new(block_id, exercise_id, set_id);
    let was_focused = state.active_cell.is_some_and(|cell| cell.set == removed);
    let replacement = {
        let Some(exercise) = state.exercise_mut(block_id, exercise_id) else {
            warn!("ignoring set removal: exercise not found");
            return;
        };
        if exercise.sets.len() < 2 {
            debug!("not removing the only set of an exercise");
            return;
        }
        let Some(index) = exercise.sets.iter().position(|set| set.id == set_id) else {
            warn!("ignoring set removal: set not found");
            return;
        };
        exercise.sets.remove(index);
        exercise
            .sets
            .get(index)
            .or_else(|| index.checked_sub(1).and_then(|i| exercise.sets.get(i)))
            .map(|set| SetRef::new(block_id, exercise_id, set.id))
    };
    if was_focused {
        state.active_cell = replacement
            .or_else(|| find_first_set_ref(&state.blocks))
            .map(|set_ref| ActiveCell::new(set_ref, Field::Weight));
    }
}

fn add_exercise(state: &mut SessionState, name: &Name) {
    let set = Set {
        id: SetId::random(),
        kind: SetKind::Working,
        weight: None,
        reps: Reps::new(8).ok(),
        rpe: None,
        tempo: None,
        superset_group: None,
        cluster: None,
        completed: false,
        previous: None,
    };
    let exercise = Exercise {
        id: ExerciseId::random(),
        name: name.clone(),
        slot: None,
        notes: String::new(),
        history_note: None,
        sets: vec![set],
    };
    state.blocks.push(Block {
        id: BlockId::random(),
        kind: BlockKind::Single,
        exercises: vec![exercise],
    });
}

fn remove_exercise(state: &mut SessionState, block_id: BlockId, exercise_id: ExerciseId) {
    let Some(block_index) = state.blocks.iter().position(|block| block.id == block_id) else {
        warn!("ignoring exercise removal: block not found");
        return;
    };
    let block = &mut state.blocks[block_index];
    if block.exercise(exercise_id).is_none() {
        warn!("ignoring exercise removal: exercise not found");
        return;
    }
    if block.exercises.len() > 1 {
        block.exercises.retain(|exercise| exercise.id != exercise_id);
    } else {
        state.blocks.remove(block_index);
    }
    if state
        .active_cell
        .is_some_and(|cell| cell.set.block_id == block_id && cell.set.exercise_id == exercise_id)
    {
        state.active_cell = None;
    }
}

fn update_note(
    state: &mut SessionState,
    block_id: BlockId,
    exercise_id: ExerciseId,
    notes: &str,
) {
    let Some(exercise) = state.exercise_mut(block_id, exercise_id) else {
        warn!("ignoring note update: exercise not found");
        return;
    };
    exercise.notes = notes.to_string();
}

fn finish_session(state: &mut SessionState) {
    if let Some(set_ref) = find_first_incomplete_set_ref(&state.blocks) {
        // Soft failure: redirect focus instead of erroring.
        debug!("cannot finish session: incomplete sets remain");
        state.active_cell = Some(ActiveCell::new(set_ref, Field::Weight));
    } else {
        state.status = SessionStatus::Finished;
        state.active_cell = None;
    }
}
