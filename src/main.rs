use notecal::startup;
use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting notecal");

    let config = startup::load_config()?;

    startup::run(config).await
}
