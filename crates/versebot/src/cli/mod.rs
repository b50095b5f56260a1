//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the versebot binary.

mod commands;
mod inspect;
mod reply;

pub use commands::{Cli, Commands};
pub use inspect::inspect_citations;
pub use reply::reply_to_text;

use std::path::Path;
use versebot::{VerseBotConfig, VerseBotResult};

/// Load and validate the configuration.
///
/// A path loads that single file; otherwise the layered load applies.
pub fn load_config(path: Option<&Path>) -> VerseBotResult<VerseBotConfig> {
    let config = match path {
        Some(path) => VerseBotConfig::from_file(path)?,
        None => VerseBotConfig::load()?,
    };
    config.validate()?;
    Ok(config)
}
