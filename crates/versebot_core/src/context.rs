//! Caller-supplied request context.

use serde::{Deserialize, Serialize};

/// Overrides the caller supplies alongside a message.
///
/// Private messages carry no permalink or community, so the caller provides
/// them here. Edit requests reprocess an earlier comment and pass that
/// comment's permalink as the override.
///
/// # Examples
///
/// ```
/// use versebot_core::RequestContextBuilder;
///
/// let context = RequestContextBuilder::default()
///     .community("judaism")
///     .permalink("http://www.reddit.com/r/Judaism/comments/abc/x/def")
///     .build()
///     .unwrap();
///
/// assert_eq!(context.community().as_deref(), Some("judaism"));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into, strip_option), default)]
pub struct RequestContext {
    /// Permalink to record instead of the message's own
    permalink: Option<String>,
    /// Community to use when the message has no permalink
    community: Option<String>,
}
