//! # HwPulse — homework review status watcher
//!
//! Polls the review service on a fixed interval and pushes status-change
//! notifications to a single Telegram chat.
//!
//! Usage:
//!   hwpulse                      # Start the poll loop
//!   hwpulse --once               # Run a single poll cycle, then exit
//!   hwpulse --config hw.toml     # Custom settings file
//!
//! Required environment: HWPULSE_API_TOKEN, HWPULSE_TELEGRAM_TOKEN,
//! HWPULSE_TELEGRAM_CHAT_ID (a `.env` file is honored).

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use hwpulse_channels::TelegramChannel;
use hwpulse_core::{Config, Credentials, Settings};
use hwpulse_poller::{Notifier, PollCycle, ReviewClient, Scheduler};

#[derive(Parser)]
#[command(
    name = "hwpulse",
    version,
    about = "📬 HwPulse — homework review status watcher"
)]
struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "hwpulse=debug,hwpulse_core=debug,hwpulse_channels=debug,hwpulse_poller=debug"
    } else {
        "hwpulse=info,hwpulse_core=info,hwpulse_channels=info,hwpulse_poller=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    // Missing credentials are the one fatal, non-retrying path.
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("💥 {e} — the worker cannot start");
            std::process::exit(1);
        }
    };
    let settings = Settings::load(cli.config.as_deref())?;
    let config = Config::new(credentials, settings);

    let timeout = Duration::from_secs(config.settings.request_timeout_secs);
    let channel = TelegramChannel::new(
        &config.credentials.bot_token,
        &config.credentials.chat_id,
        timeout,
    );

    // Startup identity log; a transport failure here is not fatal.
    match channel.get_me().await {
        Ok(me) => tracing::info!(
            "🤖 Telegram bot: @{} ({})",
            me.username.as_deref().unwrap_or("unknown"),
            me.first_name
        ),
        Err(e) => tracing::warn!("⚠️ getMe failed: {e}"),
    }

    let client = ReviewClient::new(
        &config.settings.endpoint,
        &config.credentials.api_token,
        timeout,
    );
    let cycle = PollCycle::new(client, Notifier::new(channel));
    let checkpoint = chrono::Utc::now().timestamp();
    let mut scheduler = Scheduler::new(
        cycle,
        checkpoint,
        Duration::from_secs(config.settings.retry_period_secs),
    );

    if cli.once {
        scheduler
            .run_cycle()
            .await
            .map_err(|e| anyhow::anyhow!("poll cycle failed: {e}"))?;
        return Ok(());
    }

    scheduler.run().await;
    Ok(())
}
