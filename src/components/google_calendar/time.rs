use super::models::{EventTimePoint, EventTimeRange};
use crate::components::date_notation::{is_date, is_date_time, ParsedDateInfo};
use crate::error::{Error, NoteCalResult};

/// Turn a single notation token into an event time point
pub fn time_point(token: &str, time_zone: &str) -> NoteCalResult<EventTimePoint> {
    if is_date_time(token) {
        Ok(EventTimePoint::Timed {
            date_time: format!("{}:00", token),
            time_zone: Some(time_zone.to_string()),
        })
    } else if is_date(token) {
        Ok(EventTimePoint::AllDay {
            date: token.to_string(),
            time_zone: Some(time_zone.to_string()),
        })
    } else {
        Err(Error::InvalidDateToken(token.to_string()))
    }
}

/// Build event start and end from parsed date notation.
///
/// A notation without an end produces a range ending where it starts.
pub fn build_event_times(info: &ParsedDateInfo, time_zone: &str) -> NoteCalResult<EventTimeRange> {
    let start = time_point(&info.start, time_zone)?;
    let end = match &info.end {
        Some(end) => time_point(end, time_zone)?,
        None => start.clone(),
    };

    Ok(EventTimeRange { start, end })
}
