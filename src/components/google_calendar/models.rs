use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One end of an event: a whole day or a wall-clock time in a timezone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTimePoint {
    AllDay {
        date: String,
        #[serde(rename = "timeZone", default, skip_serializing_if = "Option::is_none")]
        time_zone: Option<String>,
    },
    Timed {
        #[serde(rename = "dateTime")]
        date_time: String,
        #[serde(rename = "timeZone", default, skip_serializing_if = "Option::is_none")]
        time_zone: Option<String>,
    },
}

impl EventTimePoint {
    /// The date or date-time string of this point
    pub fn value(&self) -> &str {
        match self {
            EventTimePoint::AllDay { date, .. } => date,
            EventTimePoint::Timed { date_time, .. } => date_time,
        }
    }
}

/// Start and end of an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTimeRange {
    pub start: EventTimePoint,
    pub end: EventTimePoint,
}

/// Google Calendar event as sent to and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "iCalUID", default, skip_serializing_if = "Option::is_none")]
    pub ical_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    pub start: EventTimePoint,
    pub end: EventTimePoint,
    /// Fields not modelled here, kept so a full update does not drop them
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventRecord {
    /// A record carrying only a title and times, ready for insertion
    pub fn new(summary: impl Into<String>, times: EventTimeRange) -> Self {
        Self {
            id: None,
            summary: Some(summary.into()),
            description: None,
            location: None,
            ical_uid: None,
            html_link: None,
            updated: None,
            start: times.start,
            end: times.end,
            extra: Map::new(),
        }
    }
}
