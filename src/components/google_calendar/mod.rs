mod client;
pub mod models;
pub mod time;

pub use client::{CalendarBackend, GoogleCalendarClient};
pub use models::{EventRecord, EventTimePoint, EventTimeRange};
pub use time::build_event_times;
