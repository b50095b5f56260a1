//! VerseBot CLI binary.
//!
//! A developer tool for the citation engine:
//! - Inspect how the citations in a message would resolve
//! - Render the reply for a message against a local passages file

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, inspect_citations, load_config, reply_to_text};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    // Execute the requested command
    match cli.command {
        Commands::Inspect {
            text,
            community,
            format,
        } => {
            inspect_citations(&config, &text, community.as_deref(), format)?;
        }

        Commands::Reply {
            text,
            passages,
            community,
            permalink,
            author,
        } => {
            if let Err(e) =
                reply_to_text(config, &text, &passages, community, permalink, author).await
            {
                if e.is_no_verses() {
                    eprintln!("No verses could be resolved from the message; nothing to reply.");
                    std::process::exit(1);
                }
                return Err(e.into());
            }
        }
    }

    Ok(())
}
