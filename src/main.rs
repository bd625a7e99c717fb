//! CLI entry point for postgen

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postgen")]
#[command(version)]
#[command(about = "A static page generator for headless-CMS blog posts", long_about = None)]
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
    /// Generate the post pages
    #[command(alias = "g")]
    Generate {
        /// Watch the content export and regenerate on change
        #[arg(short, long)]
        watch: bool,

        /// Regenerate even outputs inside the revalidate window
        #[arg(short, long)]
        force: bool,
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

        /// Disable content watching
        #[arg(long)]
        r#static: bool,
    },

    /// List site content
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postgen=debug,info"
    } else {
        "postgen=info"
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
        Commands::Generate { watch, force } => {
            let site = postgen::Site::new(&base_dir)?;

            site.generate(force)?;
            println!("Generated successfully!");

            if watch {
                postgen::commands::generate::watch(site).await?;
            }
        }

        Commands::Serve {
            port,
            ip,
            r#static,
        } => {
            let site = postgen::Site::new(&base_dir)?;

            // Generate first so there is something to serve
            site.generate(false)?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            postgen::server::start(&site, &ip, port, !r#static).await?;
        }

        Commands::List { r#type } => {
            let site = postgen::Site::new(&base_dir)?;
            postgen::commands::list::run(&site, &r#type)?;
        }

        Commands::Clean => {
            let site = postgen::Site::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("postgen version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
