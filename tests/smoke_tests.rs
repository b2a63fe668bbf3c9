mod support;

use notecal::components::events::output::default_output_fields;
use notecal::components::events::EventService;
use notecal::config::Config;
use notecal::request::{handle_request, Request};
use support::{all_day, standup, Call, MockCalendar};

fn test_config() -> Config {
    Config {
        google_access_token: "test_token".to_string(),
        google_calendar_id: "notes@group.calendar.google.com".to_string(),
        google_api_url: "http://localhost:8080".to_string(),
        timezone: "Etc/UTC".to_string(),
        output_fields: default_output_fields(),
    }
}

/// Create without a calendar id goes to the configured calendar
#[tokio::test]
async fn test_create_request_uses_configured_calendar() {
    let config = test_config();
    let service = EventService::new(MockCalendar::new(), config.timezone.clone());
    let request = Request::from_json(
        r#"{"operation":"create","event":{"name":"Launch","date":"[[date:2025-06-18]]"}}"#,
    )
    .unwrap();

    let output = handle_request(&service, &config, request).await.unwrap();

    assert_eq!(
        output,
        "Event ID::created1\n\
         Event URL::https://calendar.google.com/event?eid=created1\n\
         Calendar ID::notes@group.calendar.google.com"
    );
    match &service.backend().calls()[0] {
        Call::Insert { calendar_id, event } => {
            assert_eq!(calendar_id, "notes@group.calendar.google.com");
            assert_eq!(event.start, all_day("2025-06-18", "Etc/UTC"));
        }
        other => panic!("unexpected call: {:?}", other),
    }
}

/// Requested fields replace the configured default selection
#[tokio::test]
async fn test_update_request_with_selected_fields() {
    let config = test_config();
    let service = EventService::new(
        MockCalendar::new().with_event("primary", standup()),
        config.timezone.clone(),
    );
    let request = Request::from_json(
        r#"{
            "operation": "update",
            "calendarId": "primary",
            "eventId": "evt1",
            "changes": { "name": "Retro" },
            "output": { "fields": [{ "field": "Title", "property": "summary" }] }
        }"#,
    )
    .unwrap();

    let output = handle_request(&service, &config, request).await.unwrap();

    assert_eq!(output, "Title::Retro");
}

#[tokio::test]
async fn test_delete_request_messages() {
    let config = test_config();
    let service = EventService::new(
        MockCalendar::new().with_event("primary", standup()),
        config.timezone.clone(),
    );
    let delete = r#"{"operation":"delete","calendarId":"primary","eventId":"evt1"}"#;

    let first = handle_request(&service, &config, Request::from_json(delete).unwrap())
        .await
        .unwrap();
    let second = handle_request(&service, &config, Request::from_json(delete).unwrap())
        .await
        .unwrap();

    assert_eq!(first, "Event deleted");
    assert_eq!(second, "Event could not be deleted");
}
