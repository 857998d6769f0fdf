use std::cell::RefCell;

use coachdesk_domain::{self as domain, EntryID, ReadError, TemplateID, UpdateError};
use log::debug;

use crate::{Codec, Record};

/// Keeps the records of all templates in memory.
///
/// Records can be imported from and exported to JSON, which makes the store
/// usable for fixtures and offline copies.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Record>>,
    codec: Codec,
}

impl MemoryStore {
    #[must_use]
    pub fn new(codec: Codec) -> Self {
        Self {
            records: RefCell::new(vec![]),
            codec,
        }
    }

    pub fn from_json(json: &str, codec: Codec) -> Result<Self, serde_json::Error> {
        Ok(Self {
            records: RefCell::new(serde_json::from_str(json)?),
            codec,
        })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&*self.records.borrow())
    }

    #[must_use]
    pub fn records(&self, template_id: &TemplateID) -> Vec<Record> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.template_id == template_id.as_str())
            .cloned()
            .collect()
    }
}

impl domain::TemplateEntryRepository for MemoryStore {
    async fn read_entries(
        &self,
        template_id: &TemplateID,
    ) -> Result<Vec<domain::ExerciseEntry>, ReadError> {
        self.records(template_id)
            .into_iter()
            .map(|record| {
                self.codec
                    .deserialize(record)
                    .map_err(|err| ReadError::Other(Box::new(err)))
            })
            .collect()
    }

    async fn replace_entries(
        &self,
        template_id: &TemplateID,
        entries: Vec<domain::ExerciseEntry>,
    ) -> Result<Vec<domain::ExerciseEntry>, UpdateError> {
        let entries = entries
            .into_iter()
            .map(|mut entry| {
                if entry.id.is_temporary() {
                    let id = EntryID::from(uuid::Uuid::new_v4().to_string());
                    debug!("assigning id {id} to entry {}", entry.id);
                    entry.id = id;
                }
                entry
            })
            .collect::<Vec<_>>();
        let mut records = self.records.borrow_mut();
        records.retain(|r| r.template_id != template_id.as_str());
        records.extend(
            entries
                .iter()
                .map(|entry| self.codec.serialize(template_id, entry)),
        );
        Ok(entries)
    }
}
