pub mod date_notation;
pub mod events;
pub mod google_calendar;

pub use events::EventService;
pub use google_calendar::{CalendarBackend, GoogleCalendarClient};
