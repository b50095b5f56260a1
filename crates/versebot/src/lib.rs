//! VerseBot - Bible citation resolution and replies
//!
//! VerseBot finds bracketed Bible citations such as `[John 3:16 ESV]` in a
//! message, resolves each to a book, chapter, verse range and translation,
//! fetches the passage text and renders a markdown reply with a link to each
//! passage in context.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use versebot::{InboundMessageBuilder, RequestContext, VerseBotConfig, VerseEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VerseBotConfig::load()?;
//!     config.validate()?;
//!
//!     let engine = VerseEngine::new(config, Arc::new(MyProvider::new()));
//!     let message = InboundMessageBuilder::default()
//!         .author("reader")
//!         .body("[John 3:16]")
//!         .permalink("http://www.reddit.com/r/Christianity/comments/abc/x/def")
//!         .build()?;
//!
//!     match engine.respond(message.body(), &message, &RequestContext::default()).await {
//!         Ok(reply) => println!("{}", reply),
//!         Err(e) if e.is_no_verses() => {}
//!         Err(e) => return Err(e.into()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! VerseBot is organized as a workspace with focused crates:
//!
//! - `versebot_error` - Error types
//! - `versebot_core` - Citations, passages, resolved verses and requests
//! - `versebot_interface` - Book lookup, translation default, content provider
//!   and host message traits
//! - `versebot_config` - Layered TOML configuration and the reference table
//! - `versebot_cache` - TTL/LRU passage cache and caching provider
//! - `versebot_engine` - Parsing, resolution and reply rendering
//!
//! This crate (`versebot`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod inspect;

pub use inspect::{CitationReport, inspect};

pub use versebot_cache::*;
pub use versebot_config::*;
pub use versebot_core::*;
pub use versebot_engine::*;
pub use versebot_error::*;
pub use versebot_interface::*;
