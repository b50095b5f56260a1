//! A plain inbound message for hosts without their own message type.

use crate::HostMessage;
use serde::{Deserialize, Serialize};

/// Inbound comment or private message.
///
/// # Examples
///
/// ```
/// use versebot_interface::{HostMessage, InboundMessageBuilder};
///
/// let message = InboundMessageBuilder::default()
///     .author("someone")
///     .body("[John 3:16]")
///     .permalink("http://www.reddit.com/r/Christianity/comments/abc/title/def")
///     .build()
///     .unwrap();
///
/// assert_eq!(message.author(), "someone");
/// assert!(HostMessage::permalink(&message).is_some());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct InboundMessage {
    /// Author name
    author: String,
    /// Message text
    body: String,
    /// Permalink, absent for private messages
    #[builder(default, setter(into, strip_option))]
    permalink: Option<String>,
}

impl HostMessage for InboundMessage {
    fn author(&self) -> String {
        self.author.clone()
    }

    fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }
}
