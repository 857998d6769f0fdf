use std::collections::BTreeMap;

use derive_more::{Deref, Display};

/// Reference to an exercise of the external catalog.
///
/// The empty string is the nil reference, i.e. no exercise selected.
#[derive(Deref, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `None` for the nil reference.
    #[must_use]
    pub fn non_nil(&self) -> Option<&ExerciseID> {
        if self.is_nil() { None } else { Some(self) }
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<ExerciseID> for String {
    fn from(value: ExerciseID) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseReference {
    pub id: ExerciseID,
    pub name: String,
    pub description: String,
}

/// Read-only access to the exercise library.
pub trait ExerciseCatalog {
    fn resolve(&self, id: &ExerciseID) -> Result<ExerciseReference, CatalogError>;
}

impl ExerciseCatalog for BTreeMap<ExerciseID, ExerciseReference> {
    fn resolve(&self, id: &ExerciseID) -> Result<ExerciseReference, CatalogError> {
        self.get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }
}

impl ExerciseCatalog for [ExerciseReference] {
    fn resolve(&self, id: &ExerciseID) -> Result<ExerciseReference, CatalogError> {
        self.iter()
            .find(|e| &e.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.clone()))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("exercise {0:?} not found")]
    NotFound(ExerciseID),
}
