//! Raw editor values and their conversion into canonical payloads.
//!
//! Every form field is an `Option<String>`, i.e. exactly what an input
//! element yields (`None` for a field that was never touched). Normalization
//! never fails: malformed numbers become unset, validation is the only
//! blocking stage.

use std::str::FromStr;

use log::debug;

use crate::{
    Amrap, Circuit, CircuitSet, ClusterSet, Common, DropSet, Emom, EmomMode, EmomTarget,
    ExerciseID, ForTime, GiantSet, GiantSetMember, PreExhaustion, RestPause, Step, StraightSet,
    Superset, Tabata, TabataSet, Variant, VariantTag,
};

pub type Raw = Option<String>;

/// Parses a non-negative integer. Empty and unparseable input is unset.
#[must_use]
pub fn number(raw: Option<&str>) -> Option<u32> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse::<u32>() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!("ignoring invalid number {value:?}: {err}");
            None
        }
    }
}

#[must_use]
pub fn text(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

#[must_use]
pub fn exercise(raw: Option<&str>) -> ExerciseID {
    ExerciseID::from(text(raw))
}

fn raw_number(value: Option<u32>) -> Raw {
    value.map(|v| v.to_string())
}

fn raw_text(value: &str) -> Raw {
    Some(value.to_string())
}

fn raw_exercise(value: &ExerciseID) -> Raw {
    Some(value.to_string())
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CommonForm {
    pub sets: Raw,
    pub reps: Raw,
    pub rest_seconds: Raw,
    pub rir: Raw,
    pub tempo: Raw,
    pub notes: Raw,
}

impl CommonForm {
    /// The primary exercise is left nil, it is resolved on commit.
    #[must_use]
    pub fn normalize(&self) -> Common {
        Common {
            primary_exercise_id: ExerciseID::nil(),
            sets: number(self.sets.as_deref()),
            reps: text(self.reps.as_deref()),
            rest_seconds: number(self.rest_seconds.as_deref()),
            rir: number(self.rir.as_deref()),
            tempo: text(self.tempo.as_deref()),
            notes: text(self.notes.as_deref()),
        }
    }
}

impl From<&Common> for CommonForm {
    fn from(value: &Common) -> Self {
        Self {
            sets: raw_number(value.sets),
            reps: raw_text(&value.reps),
            rest_seconds: raw_number(value.rest_seconds),
            rir: raw_number(value.rir),
            tempo: raw_text(&value.tempo),
            notes: raw_text(&value.notes),
        }
    }
}

/// Form of the currently selected variant.
///
/// Only the fields of one variant exist at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantForm {
    StraightSet(ExerciseForm),
    Superset(SupersetForm),
    GiantSet(GiantSetForm),
    DropSet(DropSetForm),
    ClusterSet(ClusterSetForm),
    RestPause(RestPauseForm),
    PreExhaustion(PreExhaustionForm),
    Amrap(AmrapForm),
    Emom(EmomForm),
    Tabata(TabataForm),
    Circuit(CircuitForm),
    ForTime(ForTimeForm),
}

impl Default for VariantForm {
    fn default() -> Self {
        VariantForm::StraightSet(ExerciseForm::default())
    }
}

impl VariantForm {
    #[must_use]
    pub fn empty(tag: VariantTag) -> Self {
        match tag {
            VariantTag::StraightSet => VariantForm::StraightSet(ExerciseForm::default()),
            VariantTag::Superset => VariantForm::Superset(SupersetForm::default()),
            VariantTag::GiantSet => VariantForm::GiantSet(GiantSetForm::default()),
            VariantTag::DropSet => VariantForm::DropSet(DropSetForm::default()),
            VariantTag::ClusterSet => VariantForm::ClusterSet(ClusterSetForm::default()),
            VariantTag::RestPause => VariantForm::RestPause(RestPauseForm::default()),
            VariantTag::PreExhaustion => VariantForm::PreExhaustion(PreExhaustionForm::default()),
            VariantTag::Amrap => VariantForm::Amrap(AmrapForm::default()),
            VariantTag::Emom => VariantForm::Emom(EmomForm::default()),
            VariantTag::Tabata => VariantForm::Tabata(TabataForm::default()),
            VariantTag::Circuit => VariantForm::Circuit(CircuitForm::default()),
            VariantTag::ForTime => VariantForm::ForTime(ForTimeForm::default()),
        }
    }

    #[must_use]
    pub fn tag(&self) -> VariantTag {
        match self {
            VariantForm::StraightSet(_) => VariantTag::StraightSet,
            VariantForm::Superset(_) => VariantTag::Superset,
            VariantForm::GiantSet(_) => VariantTag::GiantSet,
            VariantForm::DropSet(_) => VariantTag::DropSet,
            VariantForm::ClusterSet(_) => VariantTag::ClusterSet,
            VariantForm::RestPause(_) => VariantTag::RestPause,
            VariantForm::PreExhaustion(_) => VariantTag::PreExhaustion,
            VariantForm::Amrap(_) => VariantTag::Amrap,
            VariantForm::Emom(_) => VariantTag::Emom,
            VariantForm::Tabata(_) => VariantTag::Tabata,
            VariantForm::Circuit(_) => VariantTag::Circuit,
            VariantForm::ForTime(_) => VariantTag::ForTime,
        }
    }

    #[must_use]
    pub fn normalize(&self) -> Variant {
        match self {
            VariantForm::StraightSet(f) => Variant::StraightSet(StraightSet {
                exercise_id: exercise(f.exercise_id.as_deref()),
            }),
            VariantForm::Superset(f) => Variant::Superset(Superset {
                first_exercise_id: exercise(f.first_exercise_id.as_deref()),
                second_exercise_id: exercise(f.second_exercise_id.as_deref()),
                reps_a: text(f.reps_a.as_deref()),
                reps_b: text(f.reps_b.as_deref()),
            }),
            VariantForm::GiantSet(f) => Variant::GiantSet(GiantSet {
                members: f
                    .members
                    .iter()
                    .flatten()
                    .map(|m| GiantSetMember {
                        exercise_id: exercise(m.exercise_id.as_deref()),
                        reps: text(m.reps.as_deref()),
                    })
                    .collect(),
            }),
            VariantForm::DropSet(f) => Variant::DropSet(DropSet {
                exercise_id: exercise(f.exercise_id.as_deref()),
                drop_percentage: number(f.drop_percentage.as_deref()),
                drop_set_reps: text(f.drop_set_reps.as_deref()),
            }),
            VariantForm::ClusterSet(f) => Variant::ClusterSet(ClusterSet {
                exercise_id: exercise(f.exercise_id.as_deref()),
                cluster_reps: number(f.cluster_reps.as_deref()),
                clusters_per_set: number(f.clusters_per_set.as_deref()),
                intra_cluster_rest: number(f.intra_cluster_rest.as_deref()),
            }),
            VariantForm::RestPause(f) => Variant::RestPause(RestPause {
                exercise_id: exercise(f.exercise_id.as_deref()),
                rest_pause_duration: number(f.rest_pause_duration.as_deref()),
                max_rest_pauses: number(f.max_rest_pauses.as_deref()),
            }),
            VariantForm::PreExhaustion(f) => Variant::PreExhaustion(PreExhaustion {
                isolation_exercise_id: exercise(f.isolation_exercise_id.as_deref()),
                compound_exercise_id: exercise(f.compound_exercise_id.as_deref()),
                isolation_reps: text(f.isolation_reps.as_deref()),
                compound_reps: text(f.compound_reps.as_deref()),
            }),
            VariantForm::Amrap(f) => Variant::Amrap(Amrap {
                exercise_id: exercise(f.exercise_id.as_deref()),
                duration_minutes: number(f.duration_minutes.as_deref()),
            }),
            VariantForm::Emom(f) => Variant::Emom(f.normalize()),
            VariantForm::Tabata(f) => Variant::Tabata(Tabata {
                sets: f
                    .sets
                    .iter()
                    .flatten()
                    .map(|s| TabataSet {
                        steps: s.normalize_steps(),
                        rest_after: number(s.rest.as_deref()),
                    })
                    .collect(),
                work_seconds: number(f.work_seconds.as_deref()),
                rounds: number(f.rounds.as_deref()),
            }),
            VariantForm::Circuit(f) => Variant::Circuit(Circuit {
                rounds: number(f.rounds.as_deref()),
                sets: f
                    .sets
                    .iter()
                    .flatten()
                    .map(|s| CircuitSet {
                        steps: s.normalize_steps(),
                        rest_between_sets: number(s.rest.as_deref()),
                    })
                    .collect(),
            }),
            VariantForm::ForTime(f) => Variant::ForTime(ForTime {
                exercise_id: exercise(f.exercise_id.as_deref()),
                target_reps: number(f.target_reps.as_deref()),
                time_cap_minutes: number(f.time_cap_minutes.as_deref()),
            }),
        }
    }
}

impl From<&Variant> for VariantForm {
    fn from(value: &Variant) -> Self {
        match value {
            Variant::StraightSet(v) => VariantForm::StraightSet(ExerciseForm {
                exercise_id: raw_exercise(&v.exercise_id),
            }),
            Variant::Superset(v) => VariantForm::Superset(SupersetForm {
                first_exercise_id: raw_exercise(&v.first_exercise_id),
                second_exercise_id: raw_exercise(&v.second_exercise_id),
                reps_a: raw_text(&v.reps_a),
                reps_b: raw_text(&v.reps_b),
            }),
            Variant::GiantSet(v) => VariantForm::GiantSet(GiantSetForm {
                members: Some(
                    v.members
                        .iter()
                        .map(|m| MemberForm {
                            exercise_id: raw_exercise(&m.exercise_id),
                            reps: raw_text(&m.reps),
                        })
                        .collect(),
                ),
            }),
            Variant::DropSet(v) => VariantForm::DropSet(DropSetForm {
                exercise_id: raw_exercise(&v.exercise_id),
                drop_percentage: raw_number(v.drop_percentage),
                drop_set_reps: raw_text(&v.drop_set_reps),
            }),
            Variant::ClusterSet(v) => VariantForm::ClusterSet(ClusterSetForm {
                exercise_id: raw_exercise(&v.exercise_id),
                cluster_reps: raw_number(v.cluster_reps),
                clusters_per_set: raw_number(v.clusters_per_set),
                intra_cluster_rest: raw_number(v.intra_cluster_rest),
            }),
            Variant::RestPause(v) => VariantForm::RestPause(RestPauseForm {
                exercise_id: raw_exercise(&v.exercise_id),
                rest_pause_duration: raw_number(v.rest_pause_duration),
                max_rest_pauses: raw_number(v.max_rest_pauses),
            }),
            Variant::PreExhaustion(v) => VariantForm::PreExhaustion(PreExhaustionForm {
                isolation_exercise_id: raw_exercise(&v.isolation_exercise_id),
                compound_exercise_id: raw_exercise(&v.compound_exercise_id),
                isolation_reps: raw_text(&v.isolation_reps),
                compound_reps: raw_text(&v.compound_reps),
            }),
            Variant::Amrap(v) => VariantForm::Amrap(AmrapForm {
                exercise_id: raw_exercise(&v.exercise_id),
                duration_minutes: raw_number(v.duration_minutes),
            }),
            Variant::Emom(v) => {
                let (work_seconds, reps_per_minute) = match v.target {
                    EmomTarget::TimeBased { work_seconds } => (raw_number(work_seconds), None),
                    EmomTarget::RepBased { reps_per_minute } => {
                        (None, raw_number(reps_per_minute))
                    }
                };
                VariantForm::Emom(EmomForm {
                    exercise_id: raw_exercise(&v.exercise_id),
                    mode: Some(v.target.mode().to_string()),
                    duration_minutes: raw_number(v.duration_minutes),
                    work_seconds,
                    reps_per_minute,
                })
            }
            Variant::Tabata(v) => VariantForm::Tabata(TabataForm {
                sets: Some(
                    v.sets
                        .iter()
                        .map(|s| SetForm::new(&s.steps, s.rest_after))
                        .collect(),
                ),
                work_seconds: raw_number(v.work_seconds),
                rounds: raw_number(v.rounds),
            }),
            Variant::Circuit(v) => VariantForm::Circuit(CircuitForm {
                rounds: raw_number(v.rounds),
                sets: Some(
                    v.sets
                        .iter()
                        .map(|s| SetForm::new(&s.steps, s.rest_between_sets))
                        .collect(),
                ),
            }),
            Variant::ForTime(v) => VariantForm::ForTime(ForTimeForm {
                exercise_id: raw_exercise(&v.exercise_id),
                target_reps: raw_number(v.target_reps),
                time_cap_minutes: raw_number(v.time_cap_minutes),
            }),
        }
    }
}

/// Form of a variant that only selects a single exercise.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseForm {
    pub exercise_id: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SupersetForm {
    pub first_exercise_id: Raw,
    pub second_exercise_id: Raw,
    pub reps_a: Raw,
    pub reps_b: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GiantSetForm {
    pub members: Option<Vec<MemberForm>>,
}

impl GiantSetForm {
    pub fn add_member(&mut self) {
        self.members
            .get_or_insert_with(Vec::new)
            .push(MemberForm::default());
    }

    pub fn remove_member(&mut self, index: usize) {
        if let Some(members) = &mut self.members {
            if index < members.len() {
                members.remove(index);
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberForm {
    pub exercise_id: Raw,
    pub reps: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DropSetForm {
    pub exercise_id: Raw,
    pub drop_percentage: Raw,
    pub drop_set_reps: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ClusterSetForm {
    pub exercise_id: Raw,
    pub cluster_reps: Raw,
    pub clusters_per_set: Raw,
    pub intra_cluster_rest: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RestPauseForm {
    pub exercise_id: Raw,
    pub rest_pause_duration: Raw,
    pub max_rest_pauses: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PreExhaustionForm {
    pub isolation_exercise_id: Raw,
    pub compound_exercise_id: Raw,
    pub isolation_reps: Raw,
    pub compound_reps: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AmrapForm {
    pub exercise_id: Raw,
    pub duration_minutes: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmomForm {
    pub exercise_id: Raw,
    pub mode: Raw,
    pub duration_minutes: Raw,
    pub work_seconds: Raw,
    pub reps_per_minute: Raw,
}

impl EmomForm {
    /// An unknown or missing mode falls back to time based. Only the target
    /// of the selected mode is kept.
    fn normalize(&self) -> Emom {
        let mode = self
            .mode
            .as_deref()
            .and_then(|m| EmomMode::from_str(m).ok())
            .unwrap_or_default();
        Emom {
            exercise_id: exercise(self.exercise_id.as_deref()),
            duration_minutes: number(self.duration_minutes.as_deref()),
            target: match mode {
                EmomMode::TimeBased => EmomTarget::TimeBased {
                    work_seconds: number(self.work_seconds.as_deref()),
                },
                EmomMode::RepBased => EmomTarget::RepBased {
                    reps_per_minute: number(self.reps_per_minute.as_deref()),
                },
            },
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TabataForm {
    pub sets: Option<Vec<SetForm>>,
    pub work_seconds: Raw,
    pub rounds: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CircuitForm {
    pub rounds: Raw,
    pub sets: Option<Vec<SetForm>>,
}

/// Set of a tabata or circuit.
///
/// `rest` is the rest after the set for tabata and the rest between sets
/// for circuits.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetForm {
    pub steps: Option<Vec<StepForm>>,
    pub rest: Raw,
}

impl SetForm {
    fn new(steps: &[Step], rest: Option<u32>) -> Self {
        Self {
            steps: Some(
                steps
                    .iter()
                    .map(|s| StepForm {
                        exercise_id: raw_exercise(&s.exercise_id),
                        work_seconds: raw_number(s.work_seconds),
                        rest_after: raw_number(s.rest_after),
                    })
                    .collect(),
            ),
            rest: raw_number(rest),
        }
    }

    fn normalize_steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .flatten()
            .map(|s| Step {
                exercise_id: exercise(s.exercise_id.as_deref()),
                work_seconds: number(s.work_seconds.as_deref()),
                rest_after: number(s.rest_after.as_deref()),
            })
            .collect()
    }

    pub fn add_step(&mut self, exercise_id: &ExerciseID) {
        self.steps.get_or_insert_with(Vec::new).push(StepForm {
            exercise_id: raw_exercise(exercise_id),
            ..StepForm::default()
        });
    }

    pub fn remove_step(&mut self, index: usize) {
        if let Some(steps) = &mut self.steps {
            if index < steps.len() {
                steps.remove(index);
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StepForm {
    pub exercise_id: Raw,
    pub work_seconds: Raw,
    pub rest_after: Raw,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ForTimeForm {
    pub exercise_id: Raw,
    pub target_reps: Raw,
    pub time_cap_minutes: Raw,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    fn raw(value: &str) -> Raw {
        Some(value.to_string())
    }

    #[rstest]
    #[case(Some("12"), Some(12))]
    #[case(Some(""), None)]
    #[case(Some("abc"), None)]
    #[case(None, None)]
    #[case(Some(" 45 "), Some(45))]
    #[case(Some("-3"), None)]
    #[case(Some("2.5"), None)]
    #[case(Some("0"), Some(0))]
    fn test_number(#[case] raw: Option<&str>, #[case] expected: Option<u32>) {
        assert_eq!(number(raw), expected);
    }

    #[rstest]
    #[case(None, "")]
    #[case(Some(""), "")]
    #[case(Some(" 8-12 "), " 8-12 ")]
    fn test_text(#[case] raw: Option<&str>, #[case] expected: &str) {
        assert_eq!(text(raw), expected);
    }

    #[test]
    fn test_common_form_normalize() {
        let form = CommonForm {
            sets: raw("4"),
            reps: raw("8-10"),
            rest_seconds: raw("ninety"),
            rir: raw(""),
            tempo: raw("3-1-2-0"),
            notes: None,
        };
        assert_eq!(
            form.normalize(),
            Common {
                primary_exercise_id: ExerciseID::nil(),
                sets: Some(4),
                reps: String::from("8-10"),
                rest_seconds: None,
                rir: None,
                tempo: String::from("3-1-2-0"),
                notes: String::new(),
            }
        );
    }

    #[test]
    fn test_giant_set_form_absent_members() {
        assert_eq!(
            VariantForm::GiantSet(GiantSetForm { members: None }).normalize(),
            Variant::GiantSet(GiantSet { members: vec![] })
        );
    }

    #[test]
    fn test_giant_set_form_keeps_order() {
        let mut form = GiantSetForm::default();
        form.add_member();
        form.add_member();
        form.add_member();
        let members = form.members.as_mut().unwrap();
        members[0].exercise_id = raw("ex-3");
        members[1].exercise_id = raw("ex-1");
        members[2].exercise_id = raw("ex-2");
        members[2].reps = raw("15");
        form.remove_member(1);
        form.remove_member(7);

        assert_eq!(
            VariantForm::GiantSet(form).normalize(),
            Variant::GiantSet(GiantSet {
                members: vec![
                    GiantSetMember {
                        exercise_id: "ex-3".into(),
                        reps: String::new(),
                    },
                    GiantSetMember {
                        exercise_id: "ex-2".into(),
                        reps: String::from("15"),
                    },
                ]
            })
        );
    }

    #[test]
    fn test_tabata_form_normalize() {
        let mut first = SetForm::default();
        first.add_step(&"ex-1".into());
        first.add_step(&"ex-2".into());
        first.remove_step(0);
        let form = TabataForm {
            sets: Some(vec![
                first,
                SetForm {
                    steps: None,
                    rest: raw("60"),
                },
            ]),
            work_seconds: raw("20"),
            rounds: raw("x"),
        };

        assert_eq!(
            VariantForm::Tabata(form).normalize(),
            Variant::Tabata(Tabata {
                sets: vec![
                    TabataSet {
                        steps: vec![Step {
                            exercise_id: "ex-2".into(),
                            work_seconds: None,
                            rest_after: None,
                        }],
                        rest_after: None,
                    },
                    TabataSet {
                        steps: vec![],
                        rest_after: Some(60),
                    },
                ],
                work_seconds: Some(20),
                rounds: None,
            })
        );
    }

    #[test]
    fn test_circuit_form_normalize() {
        let form = CircuitForm {
            rounds: raw("3"),
            sets: Some(vec![SetForm {
                steps: Some(vec![StepForm {
                    exercise_id: raw("ex-4"),
                    work_seconds: raw("45"),
                    rest_after: raw("15"),
                }]),
                rest: raw("90"),
            }]),
        };
        assert_eq!(
            VariantForm::Circuit(form).normalize(),
            Variant::Circuit(Circuit {
                rounds: Some(3),
                sets: vec![CircuitSet {
                    steps: vec![Step {
                        exercise_id: "ex-4".into(),
                        work_seconds: Some(45),
                        rest_after: Some(15),
                    }],
                    rest_between_sets: Some(90),
                }],
            })
        );
    }

    #[rstest]
    #[case(Some("time_based"), EmomTarget::TimeBased { work_seconds: Some(30) })]
    #[case(Some("rep_based"), EmomTarget::RepBased { reps_per_minute: Some(8) })]
    #[case(Some("tempo_based"), EmomTarget::TimeBased { work_seconds: Some(30) })]
    #[case(None, EmomTarget::TimeBased { work_seconds: Some(30) })]
    fn test_emom_form_normalize(#[case] mode: Option<&str>, #[case] target: EmomTarget) {
        let form = EmomForm {
            exercise_id: raw("ex-1"),
            mode: mode.map(String::from),
            duration_minutes: raw("10"),
            work_seconds: raw("30"),
            reps_per_minute: raw("8"),
        };
        assert_eq!(
            VariantForm::Emom(form).normalize(),
            Variant::Emom(Emom {
                exercise_id: "ex-1".into(),
                duration_minutes: Some(10),
                target,
            })
        );
    }

    #[test]
    fn test_drop_set_form_keeps_out_of_range_percentage() {
        let form = DropSetForm {
            exercise_id: raw("ex-1"),
            drop_percentage: raw("150"),
            drop_set_reps: raw("AMRAP"),
        };
        assert_eq!(
            VariantForm::DropSet(form).normalize(),
            Variant::DropSet(DropSet {
                exercise_id: "ex-1".into(),
                drop_percentage: Some(150),
                drop_set_reps: String::from("AMRAP"),
            })
        );
    }

    #[test]
    fn test_variant_form_empty_matches_tag() {
        for tag in VariantTag::iter() {
            let form = VariantForm::empty(tag);
            assert_eq!(form.tag(), tag);
            assert_eq!(form.normalize(), Variant::empty(tag));
        }
    }

    #[test]
    fn test_variant_form_prefill() {
        let variant = Variant::Emom(Emom {
            exercise_id: "ex-1".into(),
            duration_minutes: Some(12),
            target: EmomTarget::RepBased {
                reps_per_minute: Some(6),
            },
        });
        let form = VariantForm::from(&variant);
        assert_eq!(
            form,
            VariantForm::Emom(EmomForm {
                exercise_id: raw("ex-1"),
                mode: raw("rep_based"),
                duration_minutes: raw("12"),
                work_seconds: None,
                reps_per_minute: raw("6"),
            })
        );
        assert_eq!(form.normalize(), variant);
    }

    #[test]
    fn test_common_form_prefill() {
        let common = Common {
            primary_exercise_id: ExerciseID::nil(),
            sets: Some(3),
            reps: String::from("5"),
            rest_seconds: Some(180),
            rir: Some(2),
            tempo: String::new(),
            notes: String::from("belt"),
        };
        assert_eq!(CommonForm::from(&common).normalize(), common);
    }
}
