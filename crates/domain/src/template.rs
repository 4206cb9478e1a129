use crate::{BlockKind, Name, SetKind};

/// A static training plan as authored in the program builder. Read-only
/// input to the session builder; never mutated during a live session.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramTemplate {
    pub name: Name,
    pub weeks: Vec<TemplateWeek>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateWeek {
    pub number: u32,
    pub days: Vec<TemplateDay>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateDay {
    pub name: String,
    pub plan: DayPlan,
}

/// A day either expresses its blocks directly or, in the legacy form,
/// a flat list of prescribed sets that the session builder groups into
/// synthetic blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum DayPlan {
    Blocks(Vec<TemplateBlock>),
    FlatSets(Vec<FlatSetPrescription>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateBlock {
    pub kind: BlockKind,
    pub exercises: Vec<TemplateExercise>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub name: Name,
    pub notes: String,
    pub sets: Vec<SetPrescription>,
}

/// The planned specification for a set, as opposed to the values
/// actually logged. `reps` is free-form text ("8-10", "AMRAP").
#[derive(Debug, Clone, PartialEq)]
pub struct SetPrescription {
    pub kind: SetKind,
    pub reps: String,
    pub target_rpe: Option<f32>,
    pub tempo: Option<String>,
    pub notes: String,
    pub cluster: bool,
    pub cluster_reps: Vec<u32>,
    pub cluster_rest_seconds: Option<u32>,
}

impl SetPrescription {
    /// A plain working set with a reps target and no further cues.
    #[must_use]
    pub fn working(reps: &str) -> Self {
        Self {
            kind: SetKind::Working,
            reps: reps.to_string(),
            target_rpe: None,
            tempo: None,
            notes: String::new(),
            cluster: false,
            cluster_reps: Vec::new(),
            cluster_rest_seconds: None,
        }
    }
}

/// One entry of a legacy flat set list. The superset group tag is a
/// "Week N – Day" style header shared by the sets of paired exercises.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatSetPrescription {
    pub exercise: Name,
    pub superset_group: Option<String>,
    pub prescription: SetPrescription,
}
