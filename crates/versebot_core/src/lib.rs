//! Core data types for VerseBot.
//!
//! This crate provides the data model shared by every VerseBot crate: parsed
//! citations, passage queries and results, resolved verses, and the per-message
//! verse request that owns them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod citation;
mod context;
mod passage;
mod request;
mod verse;

pub use citation::{BookId, Citation, Reference, WHOLE_UNIT};
pub use context::{RequestContext, RequestContextBuilder};
pub use passage::{Passage, PassageQuery};
pub use request::VerseRequest;
pub use verse::{Origin, ResolvedVerse};
