use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use groupie_server::groupie::GroupieClient;
use groupie_server::server::{run_server, RequestsLoggingLevel};

#[derive(Parser, Debug)]
struct CliArgs {
    /// Base URL of the groupie tracker API.
    #[clap(long, default_value = "https://groupietrackers.herokuapp.com/api")]
    pub api_base_url: String,

    /// Timeout in seconds for requests to the groupie tracker API.
    #[clap(long, default_value_t = 30)]
    pub api_timeout_sec: u64,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 2156)]
    pub port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the stylesheet directory to be statically served under /css.
    #[clap(long, default_value = "css")]
    pub css_dir_path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let groupie_client = GroupieClient::new(&cli_args.api_base_url, cli_args.api_timeout_sec)
        .context("Error building the API client")?;

    // The server has no useful function without the seed list, so a failed
    // startup fetch kills the process before the listener is bound.
    info!("Fetching the artist list from {}...", cli_args.api_base_url);
    let artists = groupie_client
        .fetch_artists()
        .await
        .context("Error fetching the initial artist list")?;
    info!("Fetched {} artists.", artists.len());

    info!("Ready to serve at port {}!", cli_args.port);
    run_server(
        artists,
        groupie_client,
        cli_args.logging_level,
        cli_args.port,
        cli_args.css_dir_path,
    )
    .await
}
