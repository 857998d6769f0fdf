//! Variant-specific attributes as stored in the details bag.
//!
//! Fields that live in the shared columns (sets, reps, rest, RIR, tempo and
//! the primary exercise) are not part of these types.

use std::str::FromStr;

use coachdesk_domain as domain;
use serde_json::{Map, Value};

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Details {
    StraightSet(StraightSetDetails),
    Superset(SupersetDetails),
    GiantSet(GiantSetDetails),
    DropSet(DropSetDetails),
    ClusterSet(ClusterSetDetails),
    RestPause(RestPauseDetails),
    PreExhaustion(PreExhaustionDetails),
    Amrap(AmrapDetails),
    Emom(EmomDetails),
    Tabata(TabataDetails),
    Circuit(CircuitDetails),
    ForTime(ForTimeDetails),
}

impl Details {
    /// Decodes the attributes of the given variant, unrelated keys are
    /// ignored.
    pub fn decode(tag: domain::VariantTag, bag: Map<String, Value>) -> serde_json::Result<Self> {
        let bag = Value::Object(bag);
        Ok(match tag {
            domain::VariantTag::StraightSet => Details::StraightSet(serde_json::from_value(bag)?),
            domain::VariantTag::Superset => Details::Superset(serde_json::from_value(bag)?),
            domain::VariantTag::GiantSet => Details::GiantSet(serde_json::from_value(bag)?),
            domain::VariantTag::DropSet => Details::DropSet(serde_json::from_value(bag)?),
            domain::VariantTag::ClusterSet => Details::ClusterSet(serde_json::from_value(bag)?),
            domain::VariantTag::RestPause => Details::RestPause(serde_json::from_value(bag)?),
            domain::VariantTag::PreExhaustion => {
                Details::PreExhaustion(serde_json::from_value(bag)?)
            }
            domain::VariantTag::Amrap => Details::Amrap(serde_json::from_value(bag)?),
            domain::VariantTag::Emom => Details::Emom(serde_json::from_value(bag)?),
            domain::VariantTag::Tabata => Details::Tabata(serde_json::from_value(bag)?),
            domain::VariantTag::Circuit => Details::Circuit(serde_json::from_value(bag)?),
            domain::VariantTag::ForTime => Details::ForTime(serde_json::from_value(bag)?),
        })
    }

    /// The attributes as a JSON object, not yet pruned.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            Ok(value) => {
                log::error!("details serialized to non-object {value}");
                Map::new()
            }
            Err(err) => {
                log::error!("failed to serialize details: {err}");
                Map::new()
            }
        }
    }

    /// Builds the payload. `exercise_id` is the value of the exercise column,
    /// it is used by all variants that store their primary exercise directly.
    #[must_use]
    pub fn into_variant(self, exercise_id: domain::ExerciseID) -> domain::Variant {
        match self {
            Details::StraightSet(StraightSetDetails {}) => {
                domain::Variant::StraightSet(domain::StraightSet { exercise_id })
            }
            Details::Superset(d) => domain::Variant::Superset(domain::Superset {
                first_exercise_id: exercise_id,
                second_exercise_id: d.second_exercise_id.into(),
                reps_a: d.reps_a,
                reps_b: d.reps_b,
            }),
            Details::GiantSet(d) => domain::Variant::GiantSet(domain::GiantSet {
                members: d
                    .members
                    .into_iter()
                    .map(|m| domain::GiantSetMember {
                        exercise_id: m.exercise_id.into(),
                        reps: m.reps,
                    })
                    .collect(),
            }),
            Details::DropSet(d) => domain::Variant::DropSet(domain::DropSet {
                exercise_id,
                drop_percentage: d.drop_percentage,
                drop_set_reps: d.drop_set_reps,
            }),
            Details::ClusterSet(d) => domain::Variant::ClusterSet(domain::ClusterSet {
                exercise_id,
                cluster_reps: d.cluster_reps,
                clusters_per_set: d.clusters_per_set,
                intra_cluster_rest: d.intra_cluster_rest,
            }),
            Details::RestPause(d) => domain::Variant::RestPause(domain::RestPause {
                exercise_id,
                rest_pause_duration: d.rest_pause_duration,
                max_rest_pauses: d.max_rest_pauses,
            }),
            Details::PreExhaustion(d) => domain::Variant::PreExhaustion(domain::PreExhaustion {
                isolation_exercise_id: exercise_id,
                compound_exercise_id: d.compound_exercise_id.into(),
                isolation_reps: d.isolation_reps,
                compound_reps: d.compound_reps,
            }),
            Details::Amrap(d) => domain::Variant::Amrap(domain::Amrap {
                exercise_id,
                duration_minutes: d.amrap_duration_minutes,
            }),
            Details::Emom(d) => domain::Variant::Emom(domain::Emom {
                exercise_id,
                duration_minutes: d.duration_minutes,
                target: match domain::EmomMode::from_str(&d.mode).unwrap_or_default() {
                    domain::EmomMode::TimeBased => domain::EmomTarget::TimeBased {
                        work_seconds: d.work_seconds,
                    },
                    domain::EmomMode::RepBased => domain::EmomTarget::RepBased {
                        reps_per_minute: d.reps_per_minute,
                    },
                },
            }),
            Details::Tabata(d) => domain::Variant::Tabata(domain::Tabata {
                sets: d
                    .sets
                    .into_iter()
                    .map(|s| domain::TabataSet {
                        steps: s.steps.into_iter().map(domain::Step::from).collect(),
                        rest_after: s.rest_after,
                    })
                    .collect(),
                work_seconds: d.work_seconds,
                rounds: d.rounds,
            }),
            Details::Circuit(d) => domain::Variant::Circuit(domain::Circuit {
                rounds: d.rounds,
                sets: d
                    .sets
                    .into_iter()
                    .map(|s| domain::CircuitSet {
                        steps: s.steps.into_iter().map(domain::Step::from).collect(),
                        rest_between_sets: s.rest_between_sets,
                    })
                    .collect(),
            }),
            Details::ForTime(d) => domain::Variant::ForTime(domain::ForTime {
                exercise_id,
                target_reps: d.target_reps,
                time_cap_minutes: d.time_cap_minutes,
            }),
        }
    }
}

impl From<&domain::Variant> for Details {
    fn from(value: &domain::Variant) -> Self {
        match value {
            domain::Variant::StraightSet(_) => Details::StraightSet(StraightSetDetails {}),
            domain::Variant::Superset(v) => Details::Superset(SupersetDetails {
                second_exercise_id: v.second_exercise_id.to_string(),
                reps_a: v.reps_a.clone(),
                reps_b: v.reps_b.clone(),
            }),
            domain::Variant::GiantSet(v) => Details::GiantSet(GiantSetDetails {
                members: v
                    .members
                    .iter()
                    .map(|m| MemberDetails {
                        exercise_id: m.exercise_id.to_string(),
                        reps: m.reps.clone(),
                    })
                    .collect(),
            }),
            domain::Variant::DropSet(v) => Details::DropSet(DropSetDetails {
                drop_percentage: v.drop_percentage,
                drop_set_reps: v.drop_set_reps.clone(),
            }),
            domain::Variant::ClusterSet(v) => Details::ClusterSet(ClusterSetDetails {
                cluster_reps: v.cluster_reps,
                clusters_per_set: v.clusters_per_set,
                intra_cluster_rest: v.intra_cluster_rest,
            }),
            domain::Variant::RestPause(v) => Details::RestPause(RestPauseDetails {
                rest_pause_duration: v.rest_pause_duration,
                max_rest_pauses: v.max_rest_pauses,
            }),
            domain::Variant::PreExhaustion(v) => Details::PreExhaustion(PreExhaustionDetails {
                compound_exercise_id: v.compound_exercise_id.to_string(),
                isolation_reps: v.isolation_reps.clone(),
                compound_reps: v.compound_reps.clone(),
            }),
            domain::Variant::Amrap(v) => Details::Amrap(AmrapDetails {
                amrap_duration_minutes: v.duration_minutes,
            }),
            domain::Variant::Emom(v) => {
                let (work_seconds, reps_per_minute) = match v.target {
                    domain::EmomTarget::TimeBased { work_seconds } => (work_seconds, None),
                    domain::EmomTarget::RepBased { reps_per_minute } => (None, reps_per_minute),
                };
                Details::Emom(EmomDetails {
                    mode: v.target.mode().to_string(),
                    duration_minutes: v.duration_minutes,
                    work_seconds,
                    reps_per_minute,
                })
            }
            domain::Variant::Tabata(v) => Details::Tabata(TabataDetails {
                sets: v
                    .sets
                    .iter()
                    .map(|s| TabataSetDetails {
                        steps: s.steps.iter().map(StepDetails::from).collect(),
                        rest_after: s.rest_after,
                    })
                    .collect(),
                work_seconds: v.work_seconds,
                rounds: v.rounds,
            }),
            domain::Variant::Circuit(v) => Details::Circuit(CircuitDetails {
                rounds: v.rounds,
                sets: v
                    .sets
                    .iter()
                    .map(|s| CircuitSetDetails {
                        steps: s.steps.iter().map(StepDetails::from).collect(),
                        rest_between_sets: s.rest_between_sets,
                    })
                    .collect(),
            }),
            domain::Variant::ForTime(v) => Details::ForTime(ForTimeDetails {
                target_reps: v.target_reps,
                time_cap_minutes: v.time_cap_minutes,
            }),
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
pub struct StraightSetDetails {}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SupersetDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub second_exercise_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub reps_a: String,
    #[serde(deserialize_with = "lenient::text")]
    pub reps_b: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GiantSetDetails {
    #[serde(deserialize_with = "lenient::list")]
    pub members: Vec<MemberDetails>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MemberDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub exercise_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub reps: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DropSetDetails {
    #[serde(deserialize_with = "lenient::count")]
    pub drop_percentage: Option<u32>,
    #[serde(deserialize_with = "lenient::text")]
    pub drop_set_reps: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterSetDetails {
    #[serde(deserialize_with = "lenient::count")]
    pub cluster_reps: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub clusters_per_set: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub intra_cluster_rest: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RestPauseDetails {
    #[serde(deserialize_with = "lenient::count")]
    pub rest_pause_duration: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub max_rest_pauses: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PreExhaustionDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub compound_exercise_id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub isolation_reps: String,
    #[serde(deserialize_with = "lenient::text")]
    pub compound_reps: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AmrapDetails {
    #[serde(deserialize_with = "lenient::count")]
    pub amrap_duration_minutes: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmomDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub mode: String,
    #[serde(deserialize_with = "lenient::count")]
    pub duration_minutes: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub work_seconds: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub reps_per_minute: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TabataDetails {
    #[serde(deserialize_with = "lenient::list")]
    pub sets: Vec<TabataSetDetails>,
    #[serde(deserialize_with = "lenient::count")]
    pub work_seconds: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub rounds: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TabataSetDetails {
    #[serde(deserialize_with = "lenient::list")]
    pub steps: Vec<StepDetails>,
    #[serde(deserialize_with = "lenient::count")]
    pub rest_after: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CircuitDetails {
    #[serde(deserialize_with = "lenient::count")]
    pub rounds: Option<u32>,
    #[serde(deserialize_with = "lenient::list")]
    pub sets: Vec<CircuitSetDetails>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CircuitSetDetails {
    #[serde(deserialize_with = "lenient::list")]
    pub steps: Vec<StepDetails>,
    #[serde(deserialize_with = "lenient::count")]
    pub rest_between_sets: Option<u32>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StepDetails {
    #[serde(deserialize_with = "lenient::text")]
    pub exercise_id: String,
    #[serde(deserialize_with = "lenient::count")]
    pub work_seconds: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub rest_after: Option<u32>,
}

impl From<&domain::Step> for StepDetails {
    fn from(value: &domain::Step) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            work_seconds: value.work_seconds,
            rest_after: value.rest_after,
        }
    }
}

impl From<StepDetails> for domain::Step {
    fn from(value: StepDetails) -> Self {
        Self {
            exercise_id: value.exercise_id.into(),
            work_seconds: value.work_seconds,
            rest_after: value.rest_after,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ForTimeDetails {
    #[serde(deserialize_with = "lenient::count")]
    pub target_reps: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    pub time_cap_minutes: Option<u32>,
}

/// Deserializers that accept the loosely typed values of older rows.
///
/// Counts may be numbers or numeric strings, texts may be strings or
/// numbers. Anything else becomes unset.
pub(crate) mod lenient {
    use coachdesk_domain::normalize;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(number) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
            Value::String(string) => normalize::number(Some(&string)),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        })
    }

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(string) => string,
            Value::Number(number) => number.to_string(),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => String::new(),
        })
    }

    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
    }
}
