//! CLI entry point for trackhub

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "trackhub")]
#[command(version)]
#[command(about = "Content pipeline and feed/sitemap generator for track-based learning sites", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the feed and sitemaps to an output directory
    #[command(alias = "g")]
    Generate {
        /// Output directory
        #[arg(short, long, default_value = "out")]
        output: PathBuf,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List site content
    List {
        /// Type of content to list (tracks, content, posts)
        #[arg(default_value = "tracks")]
        r#type: String,

        /// Track name (required for `list content`)
        track: Option<String>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "trackhub=debug,info"
    } else {
        "trackhub=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Generate { output } => {
            let site = trackhub::Site::new(&base_dir)?;
            let output = if output.is_absolute() {
                output
            } else {
                base_dir.join(output)
            };
            trackhub::commands::generate::run(&site, &output)?;
            println!("Generated successfully!");
        }

        Commands::Serve { port, ip } => {
            let site = trackhub::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            trackhub::server::start(site, &ip, port).await?;
        }

        Commands::List { r#type, track } => {
            let site = trackhub::Site::new(&base_dir)?;
            trackhub::commands::list::run(&site, &r#type, track.as_deref())?;
        }

        Commands::Version => {
            println!("trackhub version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
