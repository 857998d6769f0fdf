use log::{debug, error};

use crate::{
    ExerciseEntry, ReadError, TemplateEntryRepository, TemplateEntryService, TemplateID,
    UpdateError, has_contiguous_order,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    #[must_use]
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: TemplateEntryRepository> TemplateEntryService for Service<R> {
    async fn get_entries(
        &self,
        template_id: &TemplateID,
    ) -> Result<Vec<ExerciseEntry>, ReadError> {
        let mut entries = log_on_error!(
            self.repository.read_entries(template_id),
            ReadError,
            "get",
            "exercise entries"
        )?;
        entries.sort_by_key(|e| e.order_index);
        Ok(entries)
    }

    async fn save_entries(
        &self,
        template_id: &TemplateID,
        entries: Vec<ExerciseEntry>,
    ) -> Result<Vec<ExerciseEntry>, UpdateError> {
        if !has_contiguous_order(&entries) {
            error!("failed to save exercise entries of {template_id}: order is not contiguous");
            return Err(UpdateError::Conflict);
        }
        log_on_error!(
            self.repository.replace_entries(template_id, entries),
            UpdateError,
            "save",
            "exercise entries"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::BTreeMap};

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use crate::{
        Amrap, Common, EntryID, EntryListEditor, ExerciseID, StorageError, Variant, VariantForm,
        VariantTag,
    };

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        templates: RefCell<BTreeMap<TemplateID, Vec<ExerciseEntry>>>,
        offline: bool,
    }

    impl TemplateEntryRepository for FakeRepository {
        async fn read_entries(
            &self,
            template_id: &TemplateID,
        ) -> Result<Vec<ExerciseEntry>, ReadError> {
            if self.offline {
                return Err(StorageError::NoConnection.into());
            }
            self.templates
                .borrow()
                .get(template_id)
                .cloned()
                .ok_or(ReadError::NotFound)
        }

        async fn replace_entries(
            &self,
            template_id: &TemplateID,
            entries: Vec<ExerciseEntry>,
        ) -> Result<Vec<ExerciseEntry>, UpdateError> {
            if self.offline {
                return Err(StorageError::NoConnection.into());
            }
            let saved = entries
                .into_iter()
                .map(|mut e| {
                    if e.id.is_temporary() {
                        e.id = format!("{template_id}-{}", e.order_index).into();
                    }
                    e
                })
                .collect::<Vec<_>>();
            self.templates
                .borrow_mut()
                .insert(template_id.clone(), saved.clone());
            Ok(saved)
        }
    }

    fn amrap(id: &str, order_index: u32, exercise_id: &str) -> ExerciseEntry {
        ExerciseEntry {
            id: id.into(),
            order_index,
            common: Common {
                primary_exercise_id: exercise_id.into(),
                ..Common::default()
            },
            variant: Variant::Amrap(Amrap {
                exercise_id: exercise_id.into(),
                duration_minutes: Some(10),
            }),
        }
    }

    #[test]
    fn test_get_entries_sorted_by_order_index() {
        let repository = FakeRepository::default();
        repository.templates.borrow_mut().insert(
            "t1".into(),
            vec![amrap("b", 2, "ex-2"), amrap("c", 3, "ex-3"), amrap("a", 1, "ex-1")],
        );
        let service = Service::new(repository);

        let entries = block_on(service.get_entries(&"t1".into())).unwrap();

        assert_eq!(
            entries.iter().map(|e| e.id.to_string()).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn test_get_entries_errors() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            block_on(service.get_entries(&"t1".into())),
            Err(ReadError::NotFound)
        ));

        let service = Service::new(FakeRepository {
            offline: true,
            ..FakeRepository::default()
        });
        assert!(matches!(
            block_on(service.get_entries(&"t1".into())),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
    }

    #[test]
    fn test_save_entries_rejects_gaps() {
        let service = Service::new(FakeRepository::default());
        assert!(matches!(
            block_on(service.save_entries(
                &"t1".into(),
                vec![amrap("a", 1, "ex-1"), amrap("b", 3, "ex-2")]
            )),
            Err(UpdateError::Conflict)
        ));
        assert!(service.repository.templates.borrow().is_empty());
    }

    #[test]
    fn test_save_editor_assigns_durable_ids() {
        let service = Service::new(FakeRepository::default());
        let template_id = TemplateID::from("t1");
        let mut editor = EntryListEditor::default();
        for exercise_id in ["ex-1", "ex-2"] {
            let draft = editor.begin_add(VariantTag::Amrap).unwrap();
            if let VariantForm::Amrap(form) = &mut draft.variant {
                form.exercise_id = Some(exercise_id.to_string());
            }
            editor.commit().unwrap();
        }

        block_on(service.save_editor(&template_id, &mut editor)).unwrap();

        assert_eq!(
            editor
                .entries()
                .iter()
                .map(|e| e.id.clone())
                .collect::<Vec<_>>(),
            vec![EntryID::from("t1-1"), EntryID::from("t1-2")]
        );

        let reloaded = block_on(service.get_editor(&template_id)).unwrap();
        assert_eq!(reloaded, editor);
        assert_eq!(
            reloaded.entries()[1].common.primary_exercise_id,
            ExerciseID::from("ex-2")
        );
    }
}
