//! Trait definitions for the collaborators the citation engine depends on.
//!
//! The engine never talks to a platform, an HTTP service or a data file
//! directly. It resolves citations through these seams:
//!
//! - [`BookLookup`] - book names, ids, display names and Tanakh aliases
//! - [`TranslationDefaults`] - supported translation codes and defaults
//! - [`ContentProvider`] - fetches passage text
//! - [`HostMessage`] - the inbound comment or private message

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod message;
mod traits;

pub use message::{InboundMessage, InboundMessageBuilder};
pub use traits::{BookLookup, ContentProvider, HostMessage, TranslationDefaults};
