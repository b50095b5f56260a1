//! Reference tables and reply settings.
//!
//! Configuration is TOML. The loader supports:
//! - Bundled defaults (include_str! from versebot.toml)
//! - User overrides (./versebot.toml or ~/.config/versebot/versebot.toml)
//! - Automatic merging with user values taking precedence
//!
//! [`ReferenceTable`] indexes a loaded [`VerseBotConfig`] and implements the
//! book and translation lookup traits the engine resolves citations through.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod table;

pub use config::{
    BookConfig, CommunityConfig, LinkConfig, ReplyConfig, TranslationConfig, VerseBotConfig,
    DEFAULT_FOOTER, DEFAULT_OVERFLOW_HEADER, SUMMARY_LINE_RESERVE,
};
pub use table::ReferenceTable;
