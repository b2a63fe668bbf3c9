use super::output::OutputField;
use crate::components::date_notation::ParsedDateInfo;
use serde::Deserialize;

/// Fields of an event to be created
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    pub date: ParsedDateInfo,
    pub description: Option<String>,
    pub time_zone: Option<String>,
    pub location: Option<String>,
}

/// Sparse set of changes to an existing event
#[derive(Debug, Clone, Default)]
pub struct EventChanges {
    pub name: Option<String>,
    pub date: Option<ParsedDateInfo>,
    pub description: Option<String>,
    pub time_zone: Option<String>,
    pub location: Option<String>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.description.is_none()
            && self.time_zone.is_none()
            && self.location.is_none()
    }
}

/// How a created or updated event is reported back
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
    #[serde(default)]
    pub title_prefix: String,
    #[serde(default)]
    pub title_suffix: String,
    #[serde(default)]
    pub fields: Vec<OutputField>,
}

impl OutputOptions {
    pub fn with_fields(fields: Vec<OutputField>) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Event title with prefix and suffix applied
    pub fn title(&self, name: &str) -> String {
        format!("{}{}{}", self.title_prefix, name, self.title_suffix)
            .trim()
            .to_string()
    }
}
