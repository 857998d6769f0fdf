use derive_more::{Deref, Display};
use uuid::Uuid;

use crate::{CatalogError, ExerciseCatalog, ExerciseID, ExerciseReference, Variant, VariantTag};

const TEMPORARY_PREFIX: &str = "tmp-";

#[derive(Deref, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntryID(String);

impl EntryID {
    /// Client-side id for an entry that has not been persisted yet.
    #[must_use]
    pub fn temporary() -> Self {
        Self(format!("{TEMPORARY_PREFIX}{}", Uuid::new_v4()))
    }

    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.0.starts_with(TEMPORARY_PREFIX)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntryID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Fields stored in fixed columns for every variant.
///
/// Not all of them are meaningful for every variant (tempo has no meaning
/// for a tabata), but they exist uniformly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Common {
    /// Derived from the payload when the entry is committed.
    pub primary_exercise_id: ExerciseID,
    pub sets: Option<u32>,
    pub reps: String,
    pub rest_seconds: Option<u32>,
    pub rir: Option<u32>,
    pub tempo: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseEntry {
    pub id: EntryID,
    /// 1-based position inside the template.
    pub order_index: u32,
    pub common: Common,
    pub variant: Variant,
}

impl ExerciseEntry {
    #[must_use]
    pub fn tag(&self) -> VariantTag {
        self.variant.tag()
    }

    pub fn primary_exercise<C: ExerciseCatalog + ?Sized>(
        &self,
        catalog: &C,
    ) -> Option<Result<ExerciseReference, CatalogError>> {
        self.common
            .primary_exercise_id
            .non_nil()
            .map(|id| catalog.resolve(id))
    }

    /// Name of the primary exercise for list views.
    #[must_use]
    pub fn display_name<C: ExerciseCatalog + ?Sized>(&self, catalog: &C) -> String {
        match self.primary_exercise(catalog) {
            Some(Ok(exercise)) => exercise.name,
            Some(Err(CatalogError::NotFound(id))) => format!("Unknown exercise ({id})"),
            None => String::from("No exercise"),
        }
    }
}
