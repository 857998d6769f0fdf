use std::str::FromStr;

use coachdesk_domain::{self as domain, ExerciseID, TemplateID, VariantTag, resolve_primary};
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::{
    CommonColumns, Details, Record, Settings,
    details::lenient,
    prune,
    record::Column,
};

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("unknown variant {0:?}")]
    UnknownVariant(String),
    #[error("invalid details: {0}")]
    Details(#[from] serde_json::Error),
}

/// Maps exercise entries to persisted records and back.
#[derive(Debug, Default, Clone)]
pub struct Codec {
    settings: Settings,
}

impl Codec {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    #[must_use]
    pub fn serialize(&self, template_id: &TemplateID, entry: &domain::ExerciseEntry) -> Record {
        let (columns, bag) = split(entry);
        Record::new(entry.id.to_string(), template_id.to_string(), columns, bag)
    }

    pub fn deserialize(&self, record: Record) -> Result<domain::ExerciseEntry, DecodeError> {
        let columns = record.column_map();
        let (tag, fields, bag, notes) = match self.source(&record) {
            Source::Structured { tag, bag } => (tag, columns, bag, record.notes),
            Source::Legacy(object) => {
                debug!("decoding legacy notes of record {}", record.id);
                let tag = text(object.get("variantTag"))
                    .filter(|t| !t.is_empty())
                    .or_else(|| record.variant_tag.clone().filter(|t| !t.is_empty()));
                let notes = text(object.get("notes")).unwrap_or_default();
                let fields = overlay(columns, &object);
                (tag, fields, object, notes)
            }
            Source::Plain => (
                record.variant_tag.clone().filter(|t| !t.is_empty()),
                columns,
                Map::new(),
                record.notes,
            ),
        };

        let tag = match tag {
            Some(tag) => VariantTag::from_str(&tag).map_err(|_| {
                warn!("record {} has unknown variant {tag:?}", record.id);
                DecodeError::UnknownVariant(tag)
            })?,
            None => VariantTag::default(),
        };

        let fields: CommonFields = serde_json::from_value(Value::Object(fields))?;
        let exercise_id = ExerciseID::from(fields.exercise_id);
        let variant = Details::decode(tag, bag)?.into_variant(exercise_id.clone());
        let primary_exercise_id = match exercise_id.non_nil() {
            Some(id) => id.clone(),
            None => resolve_primary(&variant).unwrap_or_default(),
        };

        Ok(domain::ExerciseEntry {
            id: record.id.into(),
            order_index: record.order_index,
            common: domain::Common {
                primary_exercise_id,
                sets: fields.sets,
                reps: fields.reps,
                rest_seconds: fields.rest_seconds,
                rir: fields.rir,
                tempo: fields.tempo,
                notes,
            },
            variant,
        })
    }

    fn source(&self, record: &Record) -> Source {
        if let (Some(tag), Some(bag)) = (&record.variant_tag, &record.details_bag) {
            return Source::Structured {
                tag: Some(tag.clone()).filter(|t| !t.is_empty()),
                bag: bag.clone(),
            };
        }
        if !self.settings.decode_legacy_notes {
            return Source::Plain;
        }
        match serde_json::from_str::<Value>(&record.notes) {
            Ok(Value::Object(object)) => Source::Legacy(object),
            Ok(_) => {
                debug!("notes of record {} are JSON but no object", record.id);
                Source::Plain
            }
            Err(err) => {
                if !record.notes.is_empty() {
                    debug!("keeping notes of record {} as text: {err}", record.id);
                }
                Source::Plain
            }
        }
    }
}

enum Source {
    Structured {
        tag: Option<String>,
        bag: Map<String, Value>,
    },
    Legacy(Map<String, Value>),
    Plain,
}

/// Splits an entry into the shared columns and the pruned details bag.
#[must_use]
pub fn split(entry: &domain::ExerciseEntry) -> (CommonColumns, Map<String, Value>) {
    let exercise_id = match entry.variant.stored_exercise_id() {
        Some(id) => id.non_nil().cloned(),
        None => entry
            .common
            .primary_exercise_id
            .non_nil()
            .cloned()
            .or_else(|| resolve_primary(&entry.variant)),
    };
    let common = &entry.common;
    let columns = CommonColumns {
        exercise_id: exercise_id.map(String::from),
        order_index: entry.order_index,
        sets: common.sets,
        reps: non_empty(&common.reps),
        rest_seconds: common.rest_seconds,
        rir: common.rir,
        tempo: non_empty(&common.tempo),
        variant_tag: entry.tag().to_string(),
        notes: common.notes.clone(),
    };
    (columns, prune(Details::from(&entry.variant).to_map()))
}

#[must_use]
pub fn serialize(template_id: &TemplateID, entry: &domain::ExerciseEntry) -> Record {
    Codec::default().serialize(template_id, entry)
}

pub fn deserialize(record: Record) -> Result<domain::ExerciseEntry, DecodeError> {
    Codec::default().deserialize(record)
}

const EXERCISE_ALIASES: [&str; 3] = ["exerciseId", "primaryExerciseId", "isolationExerciseId"];

/// Legacy keys take precedence over the record columns.
fn overlay(mut columns: Map<String, Value>, legacy: &Map<String, Value>) -> Map<String, Value> {
    for (key, value) in legacy {
        if key == "variantTag" || key == "notes" || EXERCISE_ALIASES.contains(&key.as_str()) {
            continue;
        }
        columns.insert(key.clone(), value.clone());
    }
    if let Some(exercise_id) = EXERCISE_ALIASES
        .iter()
        .find_map(|alias| text(legacy.get(*alias)).filter(|id| !id.is_empty()))
    {
        columns.insert(Column::ExerciseId.as_ref().into(), exercise_id.into());
    }
    columns
}

fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(string) => Some(string.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|v| !v.is_empty())
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CommonFields {
    #[serde(deserialize_with = "lenient::text")]
    exercise_id: String,
    #[serde(deserialize_with = "lenient::count")]
    sets: Option<u32>,
    #[serde(deserialize_with = "lenient::text")]
    reps: String,
    #[serde(deserialize_with = "lenient::count")]
    rest_seconds: Option<u32>,
    #[serde(deserialize_with = "lenient::count")]
    rir: Option<u32>,
    #[serde(deserialize_with = "lenient::text")]
    tempo: String,
}
