use crate::{ExerciseID, StepSet, Variant};

/// Derives the exercise that represents an entry in list views.
///
/// Simple variants store it directly. Giant sets use the first member with
/// an exercise, tabata and circuits the first step with an exercise,
/// scanning sets and steps in order.
#[must_use]
pub fn resolve_primary(variant: &Variant) -> Option<ExerciseID> {
    match variant {
        Variant::GiantSet(giant_set) => giant_set
            .members
            .iter()
            .map(|m| &m.exercise_id)
            .find(|id| !id.is_nil())
            .cloned(),
        Variant::Tabata(tabata) => first_step_exercise(&tabata.sets),
        Variant::Circuit(circuit) => first_step_exercise(&circuit.sets),
        _ => variant
            .stored_exercise_id()
            .and_then(ExerciseID::non_nil)
            .cloned(),
    }
}

fn first_step_exercise<S: StepSet>(sets: &[S]) -> Option<ExerciseID> {
    sets.iter()
        .flat_map(StepSet::steps)
        .map(|step| &step.exercise_id)
        .find(|id| !id.is_nil())
        .cloned()
}
