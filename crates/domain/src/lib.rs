#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod block;
mod exercise;
mod prescription;
mod set;
mod template;
mod traversal;
mod value;

pub use block::{Block, BlockId, BlockKind};
pub use exercise::{Exercise, ExerciseId, Slot};
pub use prescription::{
    parse_cluster_config, parse_reps_target, parse_tempo_cue, round_to_nearest_five,
};
pub use set::{ActiveCell, Cluster, Field, Set, SetId, SetKind, SetRef};
pub use template::{
    DayPlan, FlatSetPrescription, ProgramTemplate, SetPrescription, TemplateBlock, TemplateDay,
    TemplateExercise, TemplateWeek,
};
pub use traversal::{
    build_traversal_order, find_first_incomplete_set_ref, find_first_set_ref,
    find_next_incomplete_set_ref, resolve_set_ref,
};
pub use value::{
    Name, NameError, Reps, RepsError, Rpe, RpeError, Time, TimeError, Weight, WeightError,
};
