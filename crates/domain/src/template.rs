use derive_more::{Deref, Display};

use crate::{EntryListEditor, ExerciseEntry, ReadError, UpdateError};

#[allow(async_fn_in_trait)]
pub trait TemplateEntryService {
    async fn get_entries(&self, template_id: &TemplateID)
    -> Result<Vec<ExerciseEntry>, ReadError>;
    async fn save_entries(
        &self,
        template_id: &TemplateID,
        entries: Vec<ExerciseEntry>,
    ) -> Result<Vec<ExerciseEntry>, UpdateError>;

    async fn get_editor(&self, template_id: &TemplateID) -> Result<EntryListEditor, ReadError> {
        Ok(EntryListEditor::new(self.get_entries(template_id).await?))
    }

    /// Saves the committed entries of an editor and replaces temporary ids
    /// by the ids assigned during the save.
    async fn save_editor(
        &self,
        template_id: &TemplateID,
        editor: &mut EntryListEditor,
    ) -> Result<(), UpdateError> {
        let saved = self
            .save_entries(template_id, editor.entries().to_vec())
            .await?;
        let ids = editor
            .entries()
            .iter()
            .zip(saved)
            .filter(|(before, after)| before.id != after.id)
            .map(|(before, after)| (before.id.clone(), after.id))
            .collect::<Vec<_>>();
        editor.assign_durable_ids(ids);
        Ok(())
    }
}

/// Persistence of the exercise entries of workout templates.
#[allow(async_fn_in_trait)]
pub trait TemplateEntryRepository {
    async fn read_entries(&self, template_id: &TemplateID)
    -> Result<Vec<ExerciseEntry>, ReadError>;
    /// Replaces all entries of a template. Entries with temporary ids get
    /// durable ids, the returned entries are in the order of the input.
    async fn replace_entries(
        &self,
        template_id: &TemplateID,
        entries: Vec<ExerciseEntry>,
    ) -> Result<Vec<ExerciseEntry>, UpdateError>;
}

#[derive(Deref, Debug, Display, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(String);

impl From<String> for TemplateID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TemplateID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Checks that the order indices are exactly `1..=N`, in any order.
#[must_use]
pub fn has_contiguous_order(entries: &[ExerciseEntry]) -> bool {
    let mut indices = entries.iter().map(|e| e.order_index).collect::<Vec<_>>();
    indices.sort_unstable();
    indices.into_iter().eq(1..=u32::try_from(entries.len()).unwrap_or(u32::MAX))
}
