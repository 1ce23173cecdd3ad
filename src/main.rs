//! CLI entry point for skinforge

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "skinforge")]
#[command(version)]
#[command(about = "A fast static site generator for data-driven landing page skins", long_about = None)]
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
    /// Initialize a new skin site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local preview server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List record content
    List {
        /// Type of content to list (page, slot, menu, field)
        #[arg(default_value = "page")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "skinforge=debug,info"
    } else {
        "skinforge=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing skin site in {:?}", target_dir);
            skinforge::commands::init::init_site(&target_dir)?;
            println!("Initialized skin site in {:?}", target_dir);
        }

        Commands::Generate { watch } => {
            let app = skinforge::Skinforge::new(&base_dir)?;
            tracing::info!("Generating static files...");

            skinforge::commands::generate::run(&app)?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                skinforge::commands::generate::watch(&app).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let app = skinforge::Skinforge::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            app.generate()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            skinforge::server::start(&app, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let app = skinforge::Skinforge::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = skinforge::Skinforge::new(&base_dir)?;
            skinforge::commands::list::run(&app, &r#type)?;
        }

        Commands::Version => {
            println!("skinforge version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
