//! `ig-client` commands

use crate::{
    Session,
    client::{Client, ClientGeneric},
    config::{ConfigLoader, default_config_path},
    transport::Transport,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Query the Instagram private API with a stored session
#[derive(Parser, Debug)]
#[command(name = "ig-client", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Session file produced by a login flow (JSON)
    #[arg(short, long, value_name = "FILE")]
    pub session: Option<PathBuf>,

    /// Proxy server URL (http://host:port, socks5://host:port, etc.)
    #[arg(short, long, value_name = "PROXY")]
    pub proxy: Option<String>,

    /// Print responses unprocessed instead of decoded
    #[arg(long)]
    pub raw: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the simulated device identity
    Device,
    /// Search accounts
    SearchUsers { query: String },
    /// Show an account profile
    UserInfo { user_id: String },
    /// Show the home timeline
    Timeline {
        /// Continue from this cursor
        #[arg(long)]
        max_id: Option<String>,
    },
    /// Show a post
    MediaInfo { media_id: String },
}

impl Command {
    fn needs_session(&self) -> bool {
        !matches!(self, Self::Device)
    }
}

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().or_else(default_config_path);
    let settings = ConfigLoader::new()
        .file_required(cli.config.is_some())
        .load(config_path.as_deref())
        .context("Failed to load configuration")?;

    init_logging(cli.verbose || settings.logging.verbose, &settings.logging.level);
    tracing::debug!("Starting ig-client v{}", crate::utils::get_version());

    let mut client = Client::from_settings(&settings)?;
    if let Some(proxy) = &cli.proxy {
        client.set_proxy_uri(proxy)?;
    }
    if cli.raw {
        client.set_mode(false);
    }

    if cli.command.needs_session() {
        let path = cli
            .session
            .as_ref()
            .context("--session is required for API commands")?;
        let session = Session::load(path)
            .await
            .with_context(|| format!("Failed to load session from {}", path.display()))?;
        client.set_session(session);
    }

    let output = dispatch(&client, &cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

/// Execute one command against a configured client
pub async fn dispatch<T: Transport>(
    client: &ClientGeneric<T>,
    command: &Command,
) -> crate::Result<serde_json::Value> {
    let output = match command {
        Command::Device => serde_json::to_value(client.device())?,
        Command::SearchUsers { query } => client.search().users(query).await?.to_json()?,
        Command::UserInfo { user_id } => client.user().info(user_id).await?.to_json()?,
        Command::Timeline { max_id } => client.feed().timeline(max_id.as_deref()).await?.to_json()?,
        Command::MediaInfo { media_id } => client.media().info(media_id).await?.to_json()?,
    };
    Ok(output)
}

fn init_logging(verbose: bool, level: &str) {
    let default_level = if verbose { "debug" } else { level };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
