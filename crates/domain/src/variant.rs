use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::ExerciseID;

/// Training protocol of an exercise entry.
#[derive(
    AsRefStr,
    Debug,
    Default,
    Display,
    EnumIter,
    EnumString,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "snake_case")]
pub enum VariantTag {
    #[default]
    StraightSet,
    Superset,
    GiantSet,
    DropSet,
    ClusterSet,
    RestPause,
    PreExhaustion,
    Amrap,
    Emom,
    Tabata,
    Circuit,
    ForTime,
}

/// Variant-specific part of an exercise entry.
///
/// Each variant owns its exercise references. The fields shared by all
/// variants (sets, reps, rest, RIR, tempo, notes) live in [`crate::Common`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    StraightSet(StraightSet),
    Superset(Superset),
    GiantSet(GiantSet),
    DropSet(DropSet),
    ClusterSet(ClusterSet),
    RestPause(RestPause),
    PreExhaustion(PreExhaustion),
    Amrap(Amrap),
    Emom(Emom),
    Tabata(Tabata),
    Circuit(Circuit),
    ForTime(ForTime),
}

impl Default for Variant {
    fn default() -> Self {
        Variant::StraightSet(StraightSet::default())
    }
}

impl Variant {
    /// Empty payload of the given protocol.
    #[must_use]
    pub fn empty(tag: VariantTag) -> Self {
        match tag {
            VariantTag::StraightSet => Variant::StraightSet(StraightSet::default()),
            VariantTag::Superset => Variant::Superset(Superset::default()),
            VariantTag::GiantSet => Variant::GiantSet(GiantSet::default()),
            VariantTag::DropSet => Variant::DropSet(DropSet::default()),
            VariantTag::ClusterSet => Variant::ClusterSet(ClusterSet::default()),
            VariantTag::RestPause => Variant::RestPause(RestPause::default()),
            VariantTag::PreExhaustion => Variant::PreExhaustion(PreExhaustion::default()),
            VariantTag::Amrap => Variant::Amrap(Amrap::default()),
            VariantTag::Emom => Variant::Emom(Emom::default()),
            VariantTag::Tabata => Variant::Tabata(Tabata::default()),
            VariantTag::Circuit => Variant::Circuit(Circuit::default()),
            VariantTag::ForTime => Variant::ForTime(ForTime::default()),
        }
    }

    #[must_use]
    pub fn tag(&self) -> VariantTag {
        match self {
            Variant::StraightSet(_) => VariantTag::StraightSet,
            Variant::Superset(_) => VariantTag::Superset,
            Variant::GiantSet(_) => VariantTag::GiantSet,
            Variant::DropSet(_) => VariantTag::DropSet,
            Variant::ClusterSet(_) => VariantTag::ClusterSet,
            Variant::RestPause(_) => VariantTag::RestPause,
            Variant::PreExhaustion(_) => VariantTag::PreExhaustion,
            Variant::Amrap(_) => VariantTag::Amrap,
            Variant::Emom(_) => VariantTag::Emom,
            Variant::Tabata(_) => VariantTag::Tabata,
            Variant::Circuit(_) => VariantTag::Circuit,
            Variant::ForTime(_) => VariantTag::ForTime,
        }
    }

    /// The exercise reference stored directly on the payload, if the
    /// variant has one (everything except giant sets, tabata and circuits).
    #[must_use]
    pub fn stored_exercise_id(&self) -> Option<&ExerciseID> {
        match self {
            Variant::StraightSet(StraightSet { exercise_id })
            | Variant::DropSet(DropSet { exercise_id, .. })
            | Variant::ClusterSet(ClusterSet { exercise_id, .. })
            | Variant::RestPause(RestPause { exercise_id, .. })
            | Variant::Amrap(Amrap { exercise_id, .. })
            | Variant::Emom(Emom { exercise_id, .. })
            | Variant::ForTime(ForTime { exercise_id, .. }) => Some(exercise_id),
            Variant::Superset(Superset {
                first_exercise_id, ..
            }) => Some(first_exercise_id),
            Variant::PreExhaustion(PreExhaustion {
                isolation_exercise_id,
                ..
            }) => Some(isolation_exercise_id),
            Variant::GiantSet(_) | Variant::Tabata(_) | Variant::Circuit(_) => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StraightSet {
    pub exercise_id: ExerciseID,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Superset {
    pub first_exercise_id: ExerciseID,
    pub second_exercise_id: ExerciseID,
    pub reps_a: String,
    pub reps_b: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GiantSet {
    pub members: Vec<GiantSetMember>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GiantSetMember {
    pub exercise_id: ExerciseID,
    pub reps: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropSet {
    pub exercise_id: ExerciseID,
    /// Intended range is 10 to 100, but values outside are kept.
    pub drop_percentage: Option<u32>,
    pub drop_set_reps: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClusterSet {
    pub exercise_id: ExerciseID,
    pub cluster_reps: Option<u32>,
    pub clusters_per_set: Option<u32>,
    pub intra_cluster_rest: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestPause {
    pub exercise_id: ExerciseID,
    pub rest_pause_duration: Option<u32>,
    pub max_rest_pauses: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreExhaustion {
    pub isolation_exercise_id: ExerciseID,
    pub compound_exercise_id: ExerciseID,
    pub isolation_reps: String,
    pub compound_reps: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Amrap {
    pub exercise_id: ExerciseID,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Emom {
    pub exercise_id: ExerciseID,
    pub duration_minutes: Option<u32>,
    pub target: EmomTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmomTarget {
    TimeBased { work_seconds: Option<u32> },
    RepBased { reps_per_minute: Option<u32> },
}

impl Default for EmomTarget {
    fn default() -> Self {
        EmomTarget::TimeBased { work_seconds: None }
    }
}

impl EmomTarget {
    #[must_use]
    pub fn mode(&self) -> EmomMode {
        match self {
            EmomTarget::TimeBased { .. } => EmomMode::TimeBased,
            EmomTarget::RepBased { .. } => EmomMode::RepBased,
        }
    }
}

#[derive(
    AsRefStr, Debug, Default, Display, EnumString, Clone, Copy, PartialEq, Eq,
)]
#[strum(serialize_all = "snake_case")]
pub enum EmomMode {
    #[default]
    TimeBased,
    RepBased,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tabata {
    pub sets: Vec<TabataSet>,
    pub work_seconds: Option<u32>,
    pub rounds: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TabataSet {
    pub steps: Vec<Step>,
    pub rest_after: Option<u32>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Circuit {
    pub rounds: Option<u32>,
    pub sets: Vec<CircuitSet>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CircuitSet {
    pub steps: Vec<Step>,
    pub rest_between_sets: Option<u32>,
}

/// One exercise inside a tabata or circuit set.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Step {
    pub exercise_id: ExerciseID,
    pub work_seconds: Option<u32>,
    pub rest_after: Option<u32>,
}

/// Ordered group of steps.
pub trait StepSet {
    fn steps(&self) -> &[Step];
}

impl StepSet for TabataSet {
    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl StepSet for CircuitSet {
    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ForTime {
    pub exercise_id: ExerciseID,
    pub target_reps: Option<u32>,
    pub time_cap_minutes: Option<u32>,
}
