use super::models::{EventChanges, NewEvent, OutputOptions};
use super::output::render_output;
use crate::components::google_calendar::{build_event_times, CalendarBackend, EventRecord};
use crate::error::{Error, NoteCalResult};
use tracing::{debug, info};

/// Create, update and delete events, reporting results as note text
pub struct EventService<B> {
    backend: B,
    default_time_zone: String,
}

impl<B: CalendarBackend> EventService<B> {
    pub fn new(backend: B, default_time_zone: impl Into<String>) -> Self {
        Self {
            backend,
            default_time_zone: default_time_zone.into(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Create an event in `calendar_id`
    pub async fn create_event(
        &self,
        calendar_id: &str,
        event: NewEvent,
        options: &OutputOptions,
    ) -> NoteCalResult<String> {
        let time_zone = event
            .time_zone
            .as_deref()
            .unwrap_or(&self.default_time_zone);
        let times = build_event_times(&event.date, time_zone)?;

        let mut record = EventRecord::new(options.title(&event.name), times);
        record.description = event.description;
        record.location = event.location;

        info!("Creating event '{}' in calendar {}", event.date.original, calendar_id);
        let created = self.backend.insert_event(calendar_id, &record).await?;

        Ok(render_output(&created, calendar_id, &options.fields))
    }

    /// Apply `changes` to an event, moving it to `destination_id` first if given
    pub async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        changes: EventChanges,
        options: &OutputOptions,
        destination_id: Option<&str>,
    ) -> NoteCalResult<String> {
        let mut record = self
            .backend
            .get_event(calendar_id, event_id)
            .await?
            .ok_or_else(|| Error::EventNotFound {
                calendar_id: calendar_id.to_string(),
                event_id: event_id.to_string(),
            })?;

        let mut current_calendar = calendar_id;
        if let Some(destination) = destination_id.filter(|d| *d != calendar_id) {
            info!(
                "Moving event {} from calendar {} to {}",
                event_id, calendar_id, destination
            );
            record = self
                .backend
                .move_event(calendar_id, event_id, destination)
                .await?;
            current_calendar = destination;
        } else {
            debug!("No destination calendar for event {}, skipping move", event_id);
        }

        if changes.is_empty() {
            debug!("No field changes for event {}, skipping update", event_id);
        } else {
            let merged = merge_changes(record, &changes, &self.default_time_zone)?;
            info!("Updating event {} in calendar {}", event_id, current_calendar);
            record = self
                .backend
                .update_event(current_calendar, event_id, &merged)
                .await?;
        }

        Ok(render_output(&record, current_calendar, &options.fields))
    }

    /// Delete an event; `false` when the backend did not delete it
    pub async fn delete_event(&self, calendar_id: &str, event_id: &str) -> NoteCalResult<bool> {
        info!("Deleting event {} from calendar {}", event_id, calendar_id);
        self.backend.delete_event(calendar_id, event_id).await
    }
}

fn apply_if_changed(current: &mut Option<String>, incoming: &Option<String>) {
    if let Some(value) = incoming {
        if current.as_deref() != Some(value.as_str()) {
            *current = Some(value.clone());
        }
    }
}

/// Merge requested changes into a fetched record.
///
/// Start and end are replaced independently, each only when it differs.
pub fn merge_changes(
    mut record: EventRecord,
    changes: &EventChanges,
    default_time_zone: &str,
) -> NoteCalResult<EventRecord> {
    apply_if_changed(&mut record.summary, &changes.name);
    apply_if_changed(&mut record.description, &changes.description);
    apply_if_changed(&mut record.location, &changes.location);

    if let Some(date) = &changes.date {
        let time_zone = changes.time_zone.as_deref().unwrap_or(default_time_zone);
        let times = build_event_times(date, time_zone)?;
        if times.start != record.start {
            record.start = times.start;
        }
        if times.end != record.end {
            record.end = times.end;
        }
    }

    Ok(record)
}
