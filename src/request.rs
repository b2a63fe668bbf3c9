//! Decoding and dispatch of a single event operation.

use crate::components::date_notation;
use crate::components::events::{EventChanges, EventService, NewEvent, OutputOptions};
use crate::components::google_calendar::CalendarBackend;
use crate::config::{validate_timezone, Config};
use crate::error::NoteCalResult;
use serde::Deserialize;

/// One event operation with already-typed arguments
#[derive(Debug, Clone)]
pub enum Request {
    Create {
        calendar_id: Option<String>,
        event: NewEvent,
        output: OutputOptions,
    },
    Update {
        calendar_id: String,
        event_id: String,
        changes: EventChanges,
        output: OutputOptions,
        destination_calendar_id: Option<String>,
    },
    Delete {
        calendar_id: String,
        event_id: String,
    },
}

/// Request as it arrives, with date notation still unparsed
#[derive(Debug, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
enum RawRequest {
    #[serde(rename_all = "camelCase")]
    Create {
        #[serde(default)]
        calendar_id: Option<String>,
        event: RawNewEvent,
        #[serde(default)]
        output: OutputOptions,
    },
    #[serde(rename_all = "camelCase")]
    Update {
        calendar_id: String,
        event_id: String,
        #[serde(default)]
        changes: RawChanges,
        #[serde(default)]
        output: OutputOptions,
        #[serde(default)]
        destination_calendar_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Delete {
        calendar_id: String,
        event_id: String,
    },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNewEvent {
    name: String,
    date: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    time_zone: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChanges {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    time_zone: Option<String>,
    #[serde(default)]
    location: Option<String>,
}

fn check_timezone(time_zone: Option<&str>) -> NoteCalResult<()> {
    if let Some(time_zone) = time_zone {
        validate_timezone(time_zone)?;
    }
    Ok(())
}

impl RawNewEvent {
    fn into_event(self) -> NoteCalResult<NewEvent> {
        check_timezone(self.time_zone.as_deref())?;
        Ok(NewEvent {
            name: self.name,
            date: date_notation::parse(&self.date)?,
            description: self.description,
            time_zone: self.time_zone,
            location: self.location,
        })
    }
}

impl RawChanges {
    fn into_changes(self) -> NoteCalResult<EventChanges> {
        check_timezone(self.time_zone.as_deref())?;
        let date = self
            .date
            .as_deref()
            .map(date_notation::parse)
            .transpose()?;
        Ok(EventChanges {
            name: self.name,
            date,
            description: self.description,
            time_zone: self.time_zone,
            location: self.location,
        })
    }
}

impl Request {
    /// Parse a JSON request, its date notation and its timezone
    pub fn from_json(input: &str) -> NoteCalResult<Self> {
        let raw: RawRequest = serde_json::from_str(input)?;

        let request = match raw {
            RawRequest::Create {
                calendar_id,
                event,
                output,
            } => Request::Create {
                calendar_id,
                event: event.into_event()?,
                output,
            },
            RawRequest::Update {
                calendar_id,
                event_id,
                changes,
                output,
                destination_calendar_id,
            } => Request::Update {
                calendar_id,
                event_id,
                changes: changes.into_changes()?,
                output,
                destination_calendar_id,
            },
            RawRequest::Delete {
                calendar_id,
                event_id,
            } => Request::Delete {
                calendar_id,
                event_id,
            },
        };

        Ok(request)
    }
}

fn with_default_fields(mut output: OutputOptions, config: &Config) -> OutputOptions {
    if output.fields.is_empty() {
        output.fields = config.output_fields.clone();
    }
    output
}

/// Run one request and produce the text reported back to the note
pub async fn handle_request<B: CalendarBackend>(
    service: &EventService<B>,
    config: &Config,
    request: Request,
) -> NoteCalResult<String> {
    match request {
        Request::Create {
            calendar_id,
            event,
            output,
        } => {
            let calendar_id = calendar_id.unwrap_or_else(|| config.google_calendar_id.clone());
            let output = with_default_fields(output, config);
            service.create_event(&calendar_id, event, &output).await
        }
        Request::Update {
            calendar_id,
            event_id,
            changes,
            output,
            destination_calendar_id,
        } => {
            let output = with_default_fields(output, config);
            service
                .update_event(
                    &calendar_id,
                    &event_id,
                    changes,
                    &output,
                    destination_calendar_id.as_deref(),
                )
                .await
        }
        Request::Delete {
            calendar_id,
            event_id,
        } => {
            let deleted = service.delete_event(&calendar_id, &event_id).await?;
            Ok(if deleted {
                "Event deleted".to_string()
            } else {
                "Event could not be deleted".to_string()
            })
        }
    }
}
