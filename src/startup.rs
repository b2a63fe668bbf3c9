use crate::components::{EventService, GoogleCalendarClient};
use crate::config::Config;
use crate::error::Error;
use crate::request::{handle_request, Request};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Read one request from stdin, run it and print the result
pub async fn run(config: Config) -> miette::Result<()> {
    let client = GoogleCalendarClient::from_config(&config)?;
    let service = EventService::new(client, config.timezone.clone());

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .map_err(Error::from)?;

    let request = Request::from_json(&input)?;
    let output = handle_request(&service, &config, request).await?;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(output.as_bytes())
        .await
        .map_err(Error::from)?;
    stdout.flush().await.map_err(Error::from)?;

    info!("Request completed");
    Ok(())
}
