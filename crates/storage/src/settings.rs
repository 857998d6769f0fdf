#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Decode notes of rows without variant columns as JSON objects.
    pub decode_legacy_notes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            decode_legacy_notes: true,
        }
    }
}
