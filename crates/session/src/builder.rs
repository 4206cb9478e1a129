//! Turns one day of a program template into the initial session state.

use chrono::Utc;
use liftlog_domain::{
    ActiveCell, Block, BlockId, BlockKind, DayPlan, Exercise, ExerciseId, Field,
    FlatSetPrescription, Name, Reps, Rpe, Set, SetId, SetKind, SetPrescription, Slot,
    TemplateBlock, TemplateDay, TemplateExercise, Weight, find_first_set_ref,
    parse_cluster_config, parse_reps_target, parse_tempo_cue, round_to_nearest_five,
};

use crate::{SessionState, SessionStatus};

/// The most recent logged performance of an exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct Performance {
    pub weight: Weight,
    pub reps: Reps,
}

/// Lookup of the last known performance of an exercise, backed by the
/// persistence collaborator.
pub trait WeightHistoryRepository {
    fn last_performance(&self, exercise: &Name) -> Option<Performance>;
}

/// Builds the initial session state for a program day. Suggested working
/// weights are the last known weight scaled by the readiness modifier
/// and rounded to the nearest multiple of 5; the first set in traversal
/// order becomes the active cell.
pub fn start_session(
    day: &TemplateDay,
    readiness_modifier: f32,
    history: &impl WeightHistoryRepository,
) -> SessionState {
    let template_blocks = match &day.plan {
        DayPlan::Blocks(blocks) => blocks.clone(),
        DayPlan::FlatSets(sets) => group_flat_sets(sets),
    };
    let blocks = template_blocks
        .iter()
        .map(|block| build_block(block, readiness_modifier, history))
        .collect::<Vec<_>>();
    let active_cell =
        find_first_set_ref(&blocks).map(|set_ref| ActiveCell::new(set_ref, Field::Weight));
    SessionState {
        status: SessionStatus::Active,
        start_time: Utc::now(),
        blocks,
        active_cell,
    }
}

fn build_block(
    template: &TemplateBlock,
    readiness_modifier: f32,
    history: &impl WeightHistoryRepository,
) -> Block {
    let id = BlockId::random();
    let superset = matches!(template.kind, BlockKind::Superset { .. });
    let limit = if superset { 2 } else { 1 };
    let exercises = template
        .exercises
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, exercise)| {
            let slot = superset.then(|| if index == 0 { Slot::A1 } else { Slot::A2 });
            build_exercise(
                exercise,
                slot,
                superset.then_some(id),
                readiness_modifier,
                history,
            )
        })
        .collect();
    Block {
        id,
        kind: template.kind,
        exercises,
    }
}

fn build_exercise(
    template: &TemplateExercise,
    slot: Option<Slot>,
    superset_group: Option<BlockId>,
    readiness_modifier: f32,
    history: &impl WeightHistoryRepository,
) -> Exercise {
    let performance = history.last_performance(&template.name);
    let sets = template
        .sets
        .iter()
        .map(|prescription| {
            build_set(
                prescription,
                readiness_modifier,
                performance.as_ref(),
                superset_group,
            )
        })
        .collect();
    Exercise {
        id: ExerciseId::random(),
        name: template.name.clone(),
        slot,
        notes: template.notes.clone(),
        history_note: performance.as_ref().map(performance_note),
        sets,
    }
}

fn build_set(
    prescription: &SetPrescription,
    readiness_modifier: f32,
    performance: Option<&Performance>,
    superset_group: Option<BlockId>,
) -> Set {
    let cluster = parse_cluster_config(prescription);
    let reps = cluster
        .as_ref()
        .and_then(|c| c.reps.first().copied())
        .or_else(|| parse_reps_target(&prescription.reps));
    let weight = if prescription.kind == SetKind::Working {
        performance.and_then(|p| {
            let suggested =
                round_to_nearest_five((f32::from(p.weight) * readiness_modifier).max(0.0));
            Weight::new(suggested).ok()
        })
    } else {
        None
    };
    Set {
        id: SetId::random(),
        kind: prescription.kind,
        weight,
        reps,
        rpe: prescription.target_rpe.and_then(Rpe::clamp),
        tempo: parse_tempo_cue(prescription),
        superset_group,
        cluster,
        completed: false,
        previous: performance.map(performance_note),
    }
}

fn performance_note(performance: &Performance) -> String {
    format!("{} kg × {}", performance.weight, performance.reps)
}

/// Groups a legacy flat set list into synthetic blocks: consecutive sets
/// sharing an exercise become a single block; consecutive sets sharing a
/// superset group tag become a superset block when they span exactly two
/// exercises, and one single block per exercise otherwise.
fn group_flat_sets(sets: &[FlatSetPrescription]) -> Vec<TemplateBlock> {
    let mut blocks = Vec::new();
    let mut index = 0;
    while index < sets.len() {
        let first = &sets[index];
        let mut end = index + 1;
        if let Some(group) = &first.superset_group {
            while end < sets.len() && sets[end].superset_group.as_ref() == Some(group) {
                end += 1;
            }
            blocks.extend(blocks_from_tagged_run(&sets[index..end]));
        } else {
            while end < sets.len()
                && sets[end].superset_group.is_none()
                && sets[end].exercise == first.exercise
            {
                end += 1;
            }
            blocks.push(single_block_from_run(&sets[index..end]));
        }
        index = end;
    }
    blocks
}

fn single_block_from_run(run: &[FlatSetPrescription]) -> TemplateBlock {
    TemplateBlock {
        kind: BlockKind::Single,
        exercises: vec![template_exercise_from_run(run, &run[0].exercise)],
    }
}

fn blocks_from_tagged_run(run: &[FlatSetPrescription]) -> Vec<TemplateBlock> {
    let mut names: Vec<&Name> = Vec::new();
    for set in run {
        if !names.contains(&&set.exercise) {
            names.push(&set.exercise);
        }
    }
    if names.len() == 2 {
        vec![TemplateBlock {
            kind: BlockKind::Superset {
                rounds: None,
                transition_seconds: None,
                rest_after_round_seconds: None,
            },
            exercises: names
                .iter()
                .map(|name| template_exercise_from_run(run, name))
                .collect(),
        }]
    } else {
        names
            .iter()
            .map(|name| TemplateBlock {
                kind: BlockKind::Single,
                exercises: vec![template_exercise_from_run(run, name)],
            })
            .collect()
    }
}

fn template_exercise_from_run(run: &[FlatSetPrescription], name: &Name) -> TemplateExercise {
    TemplateExercise {
        name: name.clone(),
        notes: String::new(),
        sets: run
            .iter()
            .filter(|set| &set.exercise == name)
            .map(|set| set.prescription.clone())
            .collect(),
    }
}
