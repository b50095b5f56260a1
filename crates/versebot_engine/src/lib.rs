//! Citation resolution and reply rendering.
//!
//! The engine turns bracketed Bible citations in a message into a formatted
//! reply:
//!
//! 1. [`extract_citations`] finds the raw citation tokens
//! 2. [`Resolver`] matches each token to a book, parses its chapter and verse
//!    range with [`parse_reference`], picks a translation with
//!    [`TranslationSelector`] and fetches the passage
//! 3. [`ReplyAssembler`] renders the resolved verses, falling back to a
//!    link-only reply when the quoted text is too long
//!
//! [`VerseEngine`] wires the three together over a loaded configuration.
//!
//! Citations that name no known book, or whose passage cannot be fetched,
//! are dropped without failing the message. A message with no resolvable
//! citation yields [`RequestErrorKind::NoVerses`](versebot_error::RequestErrorKind).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod links;
mod memory;
mod parser;
mod reply;
mod resolver;
mod translation;

pub use engine::VerseEngine;
pub use links::LinkBuilder;
pub use memory::{InMemoryContentProvider, PassageRecord};
pub use parser::{community_from_permalink, extract_citations, parse_reference};
pub use reply::ReplyAssembler;
pub use resolver::Resolver;
pub use translation::TranslationSelector;
