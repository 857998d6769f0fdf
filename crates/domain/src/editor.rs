use log::debug;

use crate::{
    Common, CommonForm, EntryID, ExerciseEntry, ExerciseID, ValidationError, Variant,
    VariantForm, VariantTag, resolve_primary, validate,
};

/// In-progress values of the entry that is being added or edited.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Draft {
    pub common: CommonForm,
    pub variant: VariantForm,
}

impl Draft {
    #[must_use]
    pub fn new(tag: VariantTag) -> Self {
        Self {
            common: CommonForm::default(),
            variant: VariantForm::empty(tag),
        }
    }

    #[must_use]
    pub fn from_entry(entry: &ExerciseEntry) -> Self {
        Self {
            common: CommonForm::from(&entry.common),
            variant: VariantForm::from(&entry.variant),
        }
    }

    #[must_use]
    pub fn tag(&self) -> VariantTag {
        self.variant.tag()
    }

    /// Switches the protocol. The fields of the previous protocol are
    /// discarded, the common fields are kept.
    pub fn set_variant(&mut self, tag: VariantTag) {
        if self.variant.tag() != tag {
            self.variant = VariantForm::empty(tag);
        }
    }

    /// Normalizes and validates the draft and resolves the primary exercise.
    pub fn build(&self) -> Result<(Common, Variant), ValidationError> {
        let variant = self.variant.normalize();
        validate(&variant)?;
        let common = Common {
            primary_exercise_id: resolve_primary(&variant).unwrap_or_else(ExerciseID::nil),
            ..self.common.normalize()
        };
        Ok((common, variant))
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Adding(Draft),
    Editing {
        id: EntryID,
        draft: Draft,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("another entry is being edited")]
    Busy,
    #[error("no entry is being edited")]
    NotEditing,
    #[error("entry {0} not found")]
    NotFound(EntryID),
    #[error("position {0} is out of range")]
    InvalidPosition(u32),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Ordered exercise entries of one template together with the add/edit
/// lifecycle.
///
/// The order indices of the entries are always `1..=N`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EntryListEditor {
    entries: Vec<ExerciseEntry>,
    state: EditorState,
}

impl EntryListEditor {
    /// Entries are sorted by their order index and renumbered.
    #[must_use]
    pub fn new(mut entries: Vec<ExerciseEntry>) -> Self {
        entries.sort_by_key(|e| e.order_index);
        let mut editor = Self {
            entries,
            state: EditorState::Idle,
        };
        editor.renumber();
        editor
    }

    #[must_use]
    pub fn entries(&self) -> &[ExerciseEntry] {
        &self.entries
    }

    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == EditorState::Idle
    }

    #[must_use]
    pub fn entry(&self, id: &EntryID) -> Option<&ExerciseEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    pub fn begin_add(&mut self, tag: VariantTag) -> Result<&mut Draft, EditorError> {
        self.ensure_idle()?;
        self.state = EditorState::Adding(Draft::new(tag));
        self.draft_mut().ok_or(EditorError::NotEditing)
    }

    pub fn begin_edit(&mut self, id: &EntryID) -> Result<&mut Draft, EditorError> {
        self.ensure_idle()?;
        let draft = Draft::from_entry(
            self.entry(id)
                .ok_or_else(|| EditorError::NotFound(id.clone()))?,
        );
        self.state = EditorState::Editing {
            id: id.clone(),
            draft,
        };
        self.draft_mut().ok_or(EditorError::NotEditing)
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        match &mut self.state {
            EditorState::Idle => None,
            EditorState::Adding(draft) | EditorState::Editing { draft, .. } => Some(draft),
        }
    }

    /// Commits the draft.
    ///
    /// A new entry is appended, an edited entry is replaced in place and
    /// keeps its order index. If the draft is invalid, neither the list nor
    /// the draft is changed.
    pub fn commit(&mut self) -> Result<&ExerciseEntry, EditorError> {
        let (common, variant) = match &self.state {
            EditorState::Idle => return Err(EditorError::NotEditing),
            EditorState::Adding(draft) | EditorState::Editing { draft, .. } => draft.build()?,
        };

        let index = match &self.state {
            EditorState::Idle => return Err(EditorError::NotEditing),
            EditorState::Adding(_) => {
                let order_index = u32::try_from(self.entries.len())
                    .unwrap_or(u32::MAX)
                    .saturating_add(1);
                self.entries.push(ExerciseEntry {
                    id: EntryID::temporary(),
                    order_index,
                    common,
                    variant,
                });
                self.entries.len() - 1
            }
            EditorState::Editing { id, .. } => {
                let index = self
                    .entries
                    .iter()
                    .position(|e| &e.id == id)
                    .ok_or_else(|| EditorError::NotFound(id.clone()))?;
                let entry = &mut self.entries[index];
                entry.common = common;
                entry.variant = variant;
                index
            }
        };

        self.state = EditorState::Idle;
        let entry = &self.entries[index];
        debug!(
            "committed {} entry {} at position {}",
            entry.tag(),
            entry.id,
            entry.order_index
        );
        Ok(entry)
    }

    /// Discards the draft. The list stays unchanged.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Removes an entry and renumbers the remaining entries.
    pub fn delete(&mut self, id: &EntryID) -> Result<ExerciseEntry, EditorError> {
        if matches!(&self.state, EditorState::Editing { id: editing, .. } if editing == id) {
            return Err(EditorError::Busy);
        }
        let index = self.position(id)?;
        let entry = self.entries.remove(index);
        self.renumber();
        Ok(entry)
    }

    /// Moves an entry to a 1-based position.
    pub fn move_entry(&mut self, id: &EntryID, position: u32) -> Result<(), EditorError> {
        let len = u32::try_from(self.entries.len()).unwrap_or(u32::MAX);
        if position == 0 || position > len {
            return Err(EditorError::InvalidPosition(position));
        }
        let index = self.position(id)?;
        let entry = self.entries.remove(index);
        self.entries.insert(position as usize - 1, entry);
        self.renumber();
        Ok(())
    }

    /// Replaces temporary ids by the ids assigned by persistence.
    pub fn assign_durable_ids(&mut self, ids: impl IntoIterator<Item = (EntryID, EntryID)>) {
        for (temporary, durable) in ids {
            if let Some(entry) = self.entries.iter_mut().find(|e| e.id == temporary) {
                entry.id = durable.clone();
            }
            if let EditorState::Editing { id, .. } = &mut self.state {
                if *id == temporary {
                    *id = durable;
                }
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), EditorError> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(EditorError::Busy)
        }
    }

    fn position(&self, id: &EntryID) -> Result<usize, EditorError> {
        self.entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or_else(|| EditorError::NotFound(id.clone()))
    }

    fn renumber(&mut self) {
        for (order_index, entry) in (1..).zip(self.entries.iter_mut()) {
            entry.order_index = order_index;
        }
    }
}
