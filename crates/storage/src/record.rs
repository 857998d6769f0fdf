use serde_json::{Map, Value};
use strum::{AsRefStr, EnumIter};

/// Persisted row of one exercise entry.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub template_id: String,
    #[serde(default)]
    pub exercise_id: Option<String>,
    pub order_index: u32,
    #[serde(default)]
    pub sets: Option<u32>,
    #[serde(default)]
    pub reps: Option<String>,
    #[serde(default)]
    pub rest_seconds: Option<u32>,
    #[serde(default)]
    pub rir: Option<u32>,
    #[serde(default)]
    pub tempo: Option<String>,
    /// Missing in rows written before variants were stored in columns.
    #[serde(default)]
    pub variant_tag: Option<String>,
    #[serde(default)]
    pub details_bag: Option<Map<String, Value>>,
    /// Free text, or a JSON object in legacy rows.
    #[serde(default)]
    pub notes: String,
}

/// Fixed columns shared by all variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonColumns {
    pub exercise_id: Option<String>,
    pub order_index: u32,
    pub sets: Option<u32>,
    pub reps: Option<String>,
    pub rest_seconds: Option<u32>,
    pub rir: Option<u32>,
    pub tempo: Option<String>,
    pub variant_tag: String,
    pub notes: String,
}

impl Record {
    #[must_use]
    pub fn new(
        id: String,
        template_id: String,
        columns: CommonColumns,
        details_bag: Map<String, Value>,
    ) -> Self {
        Self {
            id,
            template_id,
            exercise_id: columns.exercise_id,
            order_index: columns.order_index,
            sets: columns.sets,
            reps: columns.reps,
            rest_seconds: columns.rest_seconds,
            rir: columns.rir,
            tempo: columns.tempo,
            variant_tag: Some(columns.variant_tag),
            details_bag: Some(details_bag),
            notes: columns.notes,
        }
    }

    /// The shared columns as a JSON object keyed by [`Column`].
    #[must_use]
    pub(crate) fn column_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(Column::ExerciseId.as_ref().into(), self.exercise_id.clone().into());
        map.insert(Column::Sets.as_ref().into(), self.sets.into());
        map.insert(Column::Reps.as_ref().into(), self.reps.clone().into());
        map.insert(Column::RestSeconds.as_ref().into(), self.rest_seconds.into());
        map.insert(Column::Rir.as_ref().into(), self.rir.into());
        map.insert(Column::Tempo.as_ref().into(), self.tempo.clone().into());
        map
    }
}

/// JSON keys of the shared columns.
#[derive(AsRefStr, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "camelCase")]
pub enum Column {
    ExerciseId,
    Sets,
    Reps,
    RestSeconds,
    Rir,
    Tempo,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_record_defaults_for_missing_columns() {
        let record: Record = serde_json::from_value(json!({
            "id": "1",
            "templateId": "t1",
            "orderIndex": 3,
            "notes": "go heavy today",
        }))
        .unwrap();
        assert_eq!(
            record,
            Record {
                id: String::from("1"),
                template_id: String::from("t1"),
                exercise_id: None,
                order_index: 3,
                sets: None,
                reps: None,
                rest_seconds: None,
                rir: None,
                tempo: None,
                variant_tag: None,
                details_bag: None,
                notes: String::from("go heavy today"),
            }
        );
    }

    #[test]
    fn test_record_field_names() {
        let record = Record::new(
            String::from("1"),
            String::from("t1"),
            CommonColumns {
                exercise_id: Some(String::from("ex-1")),
                order_index: 1,
                sets: Some(3),
                reps: Some(String::from("10")),
                rest_seconds: Some(90),
                rir: Some(2),
                tempo: None,
                variant_tag: String::from("straight_set"),
                notes: String::new(),
            },
            Map::new(),
        );
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "id": "1",
                "templateId": "t1",
                "exerciseId": "ex-1",
                "orderIndex": 1,
                "sets": 3,
                "reps": "10",
                "restSeconds": 90,
                "rir": 2,
                "tempo": null,
                "variantTag": "straight_set",
                "detailsBag": {},
                "notes": "",
            })
        );
    }

    #[test]
    fn test_column_map() {
        let record: Record = serde_json::from_value(json!({
            "id": "1",
            "templateId": "t1",
            "exerciseId": "ex-1",
            "orderIndex": 1,
            "restSeconds": 60,
        }))
        .unwrap();
        assert_eq!(
            Value::Object(record.column_map()),
            json!({
                "exerciseId": "ex-1",
                "sets": null,
                "reps": null,
                "restSeconds": 60,
                "rir": null,
                "tempo": null,
            })
        );
    }

    #[test]
    fn test_column_keys_match_record_fields() {
        let record = serde_json::to_value(Record::new(
            String::from("1"),
            String::from("t1"),
            CommonColumns {
                exercise_id: None,
                order_index: 1,
                sets: None,
                reps: None,
                rest_seconds: None,
                rir: None,
                tempo: None,
                variant_tag: String::from("straight_set"),
                notes: String::new(),
            },
            Map::new(),
        ))
        .unwrap();
        for column in Column::iter() {
            assert!(record.get(column.as_ref()).is_some(), "{column:?}");
        }
    }
}
