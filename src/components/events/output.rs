//! Rendering of events as `field::value` lines for pasting into notes.

use crate::components::google_calendar::EventRecord;
use serde::{Deserialize, Serialize};

/// Event properties that can appear in output text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputProperty {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "iCalUID")]
    ICalUid,
    #[serde(rename = "htmlLink")]
    HtmlLink,
    #[serde(rename = "summary")]
    Summary,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "location")]
    Location,
    #[serde(rename = "start")]
    Start,
    #[serde(rename = "end")]
    End,
    #[serde(rename = "updated")]
    Updated,
    /// The calendar holding the event, not a field of the event itself
    #[serde(rename = "calendarId")]
    CalendarId,
}

impl OutputProperty {
    /// Value of this property for `record`, `None` when it has no value
    pub fn resolve(self, record: &EventRecord, calendar_id: &str) -> Option<String> {
        let value = match self {
            OutputProperty::Id => record.id.clone(),
            OutputProperty::ICalUid => record.ical_uid.clone(),
            OutputProperty::HtmlLink => record.html_link.clone(),
            OutputProperty::Summary => record.summary.clone(),
            OutputProperty::Description => record.description.clone(),
            OutputProperty::Location => record.location.clone(),
            OutputProperty::Start => Some(record.start.value().to_string()),
            OutputProperty::End => Some(record.end.value().to_string()),
            OutputProperty::Updated => record.updated.map(|updated| updated.to_rfc3339()),
            OutputProperty::CalendarId => Some(calendar_id.to_string()),
        };
        value.filter(|v| !v.is_empty())
    }
}

/// A labelled output line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputField {
    pub field: String,
    pub property: OutputProperty,
}

impl OutputField {
    pub fn new(field: impl Into<String>, property: OutputProperty) -> Self {
        Self {
            field: field.into(),
            property,
        }
    }
}

/// Selection used when nothing else is configured
pub fn default_output_fields() -> Vec<OutputField> {
    vec![
        OutputField::new("Event ID", OutputProperty::Id),
        OutputField::new("Event URL", OutputProperty::HtmlLink),
        OutputField::new("Calendar ID", OutputProperty::CalendarId),
    ]
}

/// Render the selected fields of `record`, one `field::value` line each.
///
/// Fields without a value are left out entirely.
pub fn render_output(record: &EventRecord, calendar_id: &str, fields: &[OutputField]) -> String {
    fields
        .iter()
        .filter_map(|f| {
            f.property
                .resolve(record, calendar_id)
                .map(|value| format!("{}::{}", f.field, value))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
