//! Error types for VerseBot.
//!
//! This crate provides the error types used throughout the VerseBot workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use versebot_error::{RequestError, RequestErrorKind, VerseBotResult};
//!
//! fn render() -> VerseBotResult<String> {
//!     Err(RequestError::new(RequestErrorKind::NoVerses))?
//! }
//!
//! match render() {
//!     Ok(reply) => println!("{}", reply),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod lookup;
mod provider;
mod request;
mod error;

pub use config::ConfigError;
pub use lookup::{LookupError, LookupErrorKind};
pub use provider::{ProviderError, ProviderErrorKind};
pub use request::{RequestError, RequestErrorKind};
pub use error::{VerseBotError, VerseBotErrorKind, VerseBotResult};
