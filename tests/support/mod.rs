#![allow(dead_code)]

use async_trait::async_trait;
use notecal::components::google_calendar::{
    CalendarBackend, EventRecord, EventTimePoint, EventTimeRange,
};
use notecal::error::{backend_error, NoteCalResult};
use std::collections::HashMap;
use std::sync::Mutex;

/// A call received by the mock calendar
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get { calendar_id: String, event_id: String },
    Insert { calendar_id: String, event: EventRecord },
    Update { calendar_id: String, event_id: String, event: EventRecord },
    Move { calendar_id: String, event_id: String, destination_id: String },
    Delete { calendar_id: String, event_id: String },
}

/// In-memory calendar backend that records every call
#[derive(Default)]
pub struct MockCalendar {
    events: Mutex<HashMap<(String, String), EventRecord>>,
    calls: Mutex<Vec<Call>>,
    fail_updates: bool,
}

impl MockCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose update calls fail like an API error would
    pub fn failing_updates() -> Self {
        Self {
            fail_updates: true,
            ..Default::default()
        }
    }

    pub fn with_event(self, calendar_id: &str, event: EventRecord) -> Self {
        let event_id = event.id.clone().expect("seeded events need an id");
        self.events
            .lock()
            .unwrap()
            .insert((calendar_id.to_string(), event_id), event);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn stored(&self, calendar_id: &str, event_id: &str) -> Option<EventRecord> {
        self.events
            .lock()
            .unwrap()
            .get(&(calendar_id.to_string(), event_id.to_string()))
            .cloned()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CalendarBackend for MockCalendar {
    async fn get_event(
        &self,
        calendar_id: &str,
        event_id: &str,
    ) -> NoteCalResult<Option<EventRecord>> {
        self.record(Call::Get {
            calendar_id: calendar_id.to_string(),
            event_id: event_id.to_string(),
        });
        Ok(self.stored(calendar_id, event_id))
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: &EventRecord,
    ) -> NoteCalResult<EventRecord> {
        self.record(Call::Insert {
            calendar_id: calendar_id.to_string(),
            event: event.clone(),
        });
        let mut created = event.clone();
        created.id = Some("created1".to_string());
        created.html_link = Some("https://calendar.google.com/event?eid=created1".to_string());
        self.events
            .lock()
            .unwrap()
            .insert((calendar_id.to_string(), "created1".to_string()), created.clone());
        Ok(created)
    }

    async fn update_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        event: &EventRecord,
    ) -> NoteCalResult<EventRecord> {
        self.record(Call::Update {
            calendar_id: calendar_id.to_string(),
            event_id: event_id.to_string(),
            event: event.clone(),
        });
        if self.fail_updates {
            return Err(backend_error("Failed to update event: HTTP 500 - backend down"));
        }
        self.events
            .lock()
            .unwrap()
            .insert((calendar_id.to_string(), event_id.to_string()), event.clone());
        Ok(event.clone())
    }

    async fn move_event(
        &self,
        calendar_id: &str,
        event_id: &str,
        destination_id: &str,
    ) -> NoteCalResult<EventRecord> {
        self.record(Call::Move {
            calendar_id: calendar_id.to_string(),
            event_id: event_id.to_string(),
            destination_id: destination_id.to_string(),
        });
        let mut events = self.events.lock().unwrap();
        let mut event = events
            .remove(&(calendar_id.to_string(), event_id.to_string()))
            .ok_or_else(|| backend_error("Failed to move event: HTTP 404 - Not Found"))?;
        event.html_link = Some(format!("https://calendar.google.com/event?eid={}&moved", event_id));
        events.insert((destination_id.to_string(), event_id.to_string()), event.clone());
        Ok(event)
    }

    async fn delete_event(&self, calendar_id: &str, event_id: &str) -> NoteCalResult<bool> {
        self.record(Call::Delete {
            calendar_id: calendar_id.to_string(),
            event_id: event_id.to_string(),
        });
        Ok(self
            .events
            .lock()
            .unwrap()
            .remove(&(calendar_id.to_string(), event_id.to_string()))
            .is_some())
    }
}

pub fn timed(date_time: &str, time_zone: &str) -> EventTimePoint {
    EventTimePoint::Timed {
        date_time: date_time.to_string(),
        time_zone: Some(time_zone.to_string()),
    }
}

pub fn all_day(date: &str, time_zone: &str) -> EventTimePoint {
    EventTimePoint::AllDay {
        date: date.to_string(),
        time_zone: Some(time_zone.to_string()),
    }
}

/// The event most tests start from
pub fn standup() -> EventRecord {
    let mut event = EventRecord::new(
        "Standup",
        EventTimeRange {
            start: timed("2025-06-18T08:00:00", "Europe/Helsinki"),
            end: timed("2025-06-18T08:15:00", "Europe/Helsinki"),
        },
    );
    event.id = Some("evt1".to_string());
    event.description = Some("Daily sync".to_string());
    event.location = Some("Room 1".to_string());
    event.html_link = Some("https://calendar.google.com/event?eid=evt1".to_string());
    event
}
