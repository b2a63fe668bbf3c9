use crate::components::events::output::{default_output_fields, OutputField};
use crate::error::{config_error, env_error, Error, NoteCalResult};
use chrono_tz::Tz;
use dotenvy::dotenv;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

/// Default Google Calendar REST endpoint
pub const DEFAULT_API_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Timezone applied when an update carries a date but no timezone
pub const DEFAULT_TIMEZONE: &str = "Etc/UTC";

/// Location of the optional output field selection file
pub const OUTPUT_CONFIG_PATH: &str = "config/output.toml";

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth access token for the Google Calendar API
    pub google_access_token: String,
    /// Calendar that receives newly created events
    pub google_calendar_id: String,
    /// Base URL of the Google Calendar REST API
    pub google_api_url: String,
    /// Timezone used when a request does not name one
    pub timezone: String,
    /// Output fields used when a request does not select any
    pub output_fields: Vec<OutputField>,
}

#[derive(Debug, Deserialize)]
struct OutputFile {
    #[serde(default)]
    fields: Option<Vec<OutputField>>,
}

impl Config {
    /// Load configuration from environment and config file
    pub fn load() -> NoteCalResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let google_access_token =
            env::var("GOOGLE_ACCESS_TOKEN").map_err(|_| env_error("GOOGLE_ACCESS_TOKEN"))?;
        let google_calendar_id =
            env::var("GOOGLE_CALENDAR_ID").map_err(|_| env_error("GOOGLE_CALENDAR_ID"))?;
        let google_api_url =
            env::var("GOOGLE_CALENDAR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timezone = env::var("TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());
        validate_timezone(&timezone)?;

        let output_fields = load_output_fields(Path::new(OUTPUT_CONFIG_PATH))?;

        Ok(Config {
            google_access_token,
            google_calendar_id,
            google_api_url,
            timezone,
            output_fields,
        })
    }
}

/// Check that a timezone name is a known IANA identifier
pub fn validate_timezone(name: &str) -> NoteCalResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| Error::InvalidTimezone(name.to_string()))
}

/// Read the output field selection, falling back to the built-in default
pub fn load_output_fields(path: &Path) -> NoteCalResult<Vec<OutputField>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(default_output_fields()),
        Err(e) => return Err(e.into()),
    };

    let file: OutputFile = toml::from_str(&content)?;
    match file.fields {
        Some(fields) if fields.is_empty() => Err(config_error(&format!(
            "{} selects no output fields",
            path.display()
        ))),
        Some(fields) => Ok(fields),
        None => Ok(default_output_fields()),
    }
}
