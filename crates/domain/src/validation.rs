use crate::{ExerciseID, StepSet, Variant, resolve_primary};

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Select an exercise")]
    MissingExercise,
    #[error("Add at least one exercise")]
    EmptyCollection,
    #[error("Select both exercises")]
    IncompletePair,
}

/// Checks whether a payload is complete enough to be committed.
///
/// Numeric ranges are not checked, e.g. a drop percentage outside of 10 to
/// 100 is accepted.
pub fn validate(variant: &Variant) -> Result<(), ValidationError> {
    match variant {
        Variant::Tabata(tabata) => require_steps(&tabata.sets),
        Variant::Circuit(circuit) => require_steps(&circuit.sets),
        Variant::GiantSet(giant_set) => {
            if giant_set.members.iter().all(|m| m.exercise_id.is_nil()) {
                Err(ValidationError::EmptyCollection)
            } else {
                Ok(())
            }
        }
        Variant::Superset(superset) => require_pair(&[
            &superset.first_exercise_id,
            &superset.second_exercise_id,
        ]),
        Variant::PreExhaustion(pre_exhaustion) => require_pair(&[
            &pre_exhaustion.isolation_exercise_id,
            &pre_exhaustion.compound_exercise_id,
        ]),
        _ => match resolve_primary(variant) {
            Some(_) => Ok(()),
            None => Err(ValidationError::MissingExercise),
        },
    }
}

/// A set of steps is only usable if at least one step refers to an exercise.
fn require_steps<S: StepSet>(sets: &[S]) -> Result<(), ValidationError> {
    if sets
        .iter()
        .flat_map(StepSet::steps)
        .all(|step| step.exercise_id.is_nil())
    {
        Err(ValidationError::EmptyCollection)
    } else {
        Ok(())
    }
}

fn require_pair(ids: &[&ExerciseID; 2]) -> Result<(), ValidationError> {
    if ids.iter().any(|id| id.is_nil()) {
        Err(ValidationError::IncompletePair)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{
        Amrap, Circuit, CircuitSet, ClusterSet, DropSet, Emom, EmomTarget, ForTime, GiantSet,
        GiantSetMember, PreExhaustion, RestPause, Step, StraightSet, Superset, Tabata, TabataSet,
        VariantTag,
    };

    use super::*;

    #[rstest]
    #[case(Tabata::default())]
    #[case(Tabata { sets: vec![TabataSet::default()], ..Tabata::default() })]
    #[case(Tabata { sets: vec![TabataSet::default(), TabataSet::default()], ..Tabata::default() })]
    fn test_validate_tabata_empty(#[case] tabata: Tabata) {
        assert_eq!(
            validate(&Variant::Tabata(tabata)),
            Err(ValidationError::EmptyCollection)
        );
    }

    #[test]
    fn test_validate_tabata_with_step() {
        let tabata = Tabata {
            sets: vec![
                TabataSet::default(),
                TabataSet {
                    steps: vec![Step {
                        exercise_id: "ex-7".into(),
                        ..Step::default()
                    }],
                    rest_after: Some(60),
                },
            ],
            work_seconds: Some(20),
            rounds: Some(8),
        };
        assert_eq!(validate(&Variant::Tabata(tabata)), Ok(()));
    }

    #[test]
    fn test_validate_circuit() {
        assert_eq!(
            validate(&Variant::Circuit(Circuit {
                rounds: Some(3),
                sets: vec![CircuitSet::default()],
            })),
            Err(ValidationError::EmptyCollection)
        );
        assert_eq!(
            validate(&Variant::Circuit(Circuit {
                rounds: Some(3),
                sets: vec![CircuitSet {
                    steps: vec![Step::default()],
                    rest_between_sets: None,
                }],
            })),
            Err(ValidationError::EmptyCollection)
        );
        assert_eq!(
            validate(&Variant::Circuit(Circuit {
                rounds: Some(3),
                sets: vec![CircuitSet {
                    steps: vec![
                        Step::default(),
                        Step {
                            exercise_id: "ex-1".into(),
                            work_seconds: Some(45),
                            rest_after: Some(15),
                        },
                    ],
                    rest_between_sets: None,
                }],
            })),
            Ok(())
        );
    }

    #[rstest]
    #[case(vec![], Err(ValidationError::EmptyCollection))]
    #[case(vec!["", ""], Err(ValidationError::EmptyCollection))]
    #[case(vec!["", "ex-1"], Ok(()))]
    fn test_validate_giant_set(
        #[case] members: Vec<&str>,
        #[case] expected: Result<(), ValidationError>,
    ) {
        let giant_set = GiantSet {
            members: members
                .into_iter()
                .map(|id| GiantSetMember {
                    exercise_id: id.into(),
                    reps: String::new(),
                })
                .collect(),
        };
        assert_eq!(validate(&Variant::GiantSet(giant_set)), expected);
    }

    #[rstest]
    #[case("ex-1", "", Err(ValidationError::IncompletePair))]
    #[case("", "ex-2", Err(ValidationError::IncompletePair))]
    #[case("", "", Err(ValidationError::IncompletePair))]
    #[case("ex-1", "ex-2", Ok(()))]
    fn test_validate_superset(
        #[case] first: &str,
        #[case] second: &str,
        #[case] expected: Result<(), ValidationError>,
    ) {
        let superset = Superset {
            first_exercise_id: first.into(),
            second_exercise_id: second.into(),
            reps_a: String::from("10"),
            reps_b: String::from("12"),
        };
        assert_eq!(validate(&Variant::Superset(superset)), expected);
    }

    #[rstest]
    #[case("ex-1", "", Err(ValidationError::IncompletePair))]
    #[case("ex-1", "ex-2", Ok(()))]
    fn test_validate_pre_exhaustion(
        #[case] isolation: &str,
        #[case] compound: &str,
        #[case] expected: Result<(), ValidationError>,
    ) {
        let pre_exhaustion = PreExhaustion {
            isolation_exercise_id: isolation.into(),
            compound_exercise_id: compound.into(),
            ..PreExhaustion::default()
        };
        assert_eq!(validate(&Variant::PreExhaustion(pre_exhaustion)), expected);
    }

    #[rstest]
    #[case(VariantTag::StraightSet)]
    #[case(VariantTag::DropSet)]
    #[case(VariantTag::ClusterSet)]
    #[case(VariantTag::RestPause)]
    #[case(VariantTag::Amrap)]
    #[case(VariantTag::Emom)]
    #[case(VariantTag::ForTime)]
    fn test_validate_missing_exercise(#[case] tag: VariantTag) {
        assert_eq!(
            validate(&Variant::empty(tag)),
            Err(ValidationError::MissingExercise)
        );
    }

    #[rstest]
    #[case(Variant::StraightSet(StraightSet { exercise_id: "ex-1".into() }))]
    #[case(Variant::DropSet(DropSet {
        exercise_id: "ex-1".into(),
        drop_percentage: Some(250),
        drop_set_reps: String::new(),
    }))]
    #[case(Variant::ClusterSet(ClusterSet { exercise_id: "ex-1".into(), ..ClusterSet::default() }))]
    #[case(Variant::RestPause(RestPause { exercise_id: "ex-1".into(), ..RestPause::default() }))]
    #[case(Variant::Amrap(Amrap { exercise_id: "ex-1".into(), duration_minutes: None }))]
    #[case(Variant::Emom(Emom {
        exercise_id: "ex-1".into(),
        duration_minutes: Some(10),
        target: EmomTarget::RepBased { reps_per_minute: None },
    }))]
    #[case(Variant::ForTime(ForTime { exercise_id: "ex-1".into(), ..ForTime::default() }))]
    fn test_validate_simple_complete(#[case] variant: Variant) {
        assert_eq!(validate(&variant), Ok(()));
    }
}
