//! Stitch CLI
//!
//! Headless driver for the Stitch screens. Every run seeds a fresh in-memory
//! store, so changes made by one invocation are not visible to the next.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use stitch_core::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stitch CLI
#[derive(Parser)]
#[command(name = "stitch")]
#[command(about = "Drive the Stitch chat screens from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding config.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for synthesized data, overrides the config file
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Print values as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List chats, pinned first
    Chats,

    /// Show the thread of a chat
    Messages { chat_id: String },

    /// Send a message and wait for the reply
    Send { chat_id: String, text: String },

    /// List contacts grouped by letter
    Contacts {
        #[arg(long)]
        query: Option<String>,

        #[arg(long)]
        favorites: bool,
    },

    /// Show call history grouped by day
    Calls {
        #[arg(long)]
        missed: bool,
    },

    /// Search chats, contacts and messages
    Search { query: String },

    /// Place or receive a simulated call
    Call {
        user_id: String,

        #[arg(long)]
        video: bool,

        #[arg(long)]
        incoming: bool,

        /// Seconds to stay connected before hanging up
        #[arg(long, default_value_t = 5)]
        hang_up_after: u64,
    },

    /// Block a contact
    Block { contact_id: String },

    /// Unblock a contact
    Unblock { contact_id: String },

    /// Show current settings and blocked users
    Settings,

    /// List in-app notifications
    Notifications,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "stitch=info,stitch_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stitch")
    });
    tracing::debug!("Data directory: {:?}", data_dir);

    let mut config = AppConfig::load(&data_dir)?;
    if let Some(seed) = cli.seed {
        config.data.rng_seed = Some(seed);
    }

    let store = Arc::new(config.build_store());
    let ctx = commands::Context {
        store,
        timings: config.timings,
        json: cli.json,
    };

    commands::run(&ctx, cli.command).await
}
