use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use telehealth_client::{config::ClientConfig, HttpProviderApi, ProviderScheduleClient};
use tokio::io::{stdin, BufReader};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize logging; stdout is reserved for the rendered view
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Using provider service at {}", config.api_url);

    let api = HttpProviderApi::new(&config).wrap_err("Failed to build HTTP client")?;
    let client = ProviderScheduleClient::new(api, config.error_policy);

    let mut stdout = std::io::stdout();
    telehealth_console::run(client, BufReader::new(stdin()), &mut stdout).await?;

    Ok(())
}
