//! Reply rendering.

use crate::LinkBuilder;
use tracing::{debug, instrument};
use versebot_config::ReplyConfig;
use versebot_core::{ResolvedVerse, VerseRequest};
use versebot_error::VerseBotResult;

/// Renders a verse request as reply text.
///
/// Each verse becomes a linked title line followed by its text as a quote.
/// If the quoted text would run past the character limit, the reply lists a
/// link per verse instead. The footer is appended either way.
pub struct ReplyAssembler<'a> {
    config: &'a ReplyConfig,
    links: LinkBuilder<'a>,
}

impl<'a> ReplyAssembler<'a> {
    /// Create an assembler.
    pub fn new(config: &'a ReplyConfig, links: LinkBuilder<'a>) -> Self {
        Self { config, links }
    }

    /// Render the reply for a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::NoVerses`](versebot_error::RequestErrorKind)
    /// if the request holds no verses.
    #[instrument(skip(self, request), fields(verses = request.len()))]
    pub fn assemble(&self, request: &VerseRequest) -> VerseBotResult<String> {
        request.ensure_valid()?;

        let mut reply: String = request
            .verses()
            .iter()
            .map(|verse| self.fragment(verse))
            .collect();

        let length = reply.chars().count();
        if length > *self.config.char_limit() {
            debug!(
                length,
                limit = *self.config.char_limit(),
                "Quoted text exceeds limit, replying with links"
            );
            reply = self.overflow(request);
        }

        reply.push_str(self.config.footer());
        Ok(reply)
    }

    /// Title line and quoted text for one verse, followed by a blank line.
    pub fn fragment(&self, verse: &ResolvedVerse) -> String {
        let link = self
            .links
            .context_link(verse.book(), verse.chapter(), verse.translation());
        format!(
            "[**{} | {}**]({})\n>{}\n\n",
            verse.verse_title().trim_start(),
            verse.translation_title().trim_start(),
            link,
            verse.contents()
        )
    }

    /// Link-only rendering: the overflow header and one line per verse.
    ///
    /// Lines are added while the reply, footer included, stays under the
    /// platform limit. Verses that do not fit are summarized by a closing
    /// "...and N more" line.
    pub fn overflow(&self, request: &VerseRequest) -> String {
        let budget = self
            .config
            .platform_limit()
            .saturating_sub(self.config.footer().chars().count() + 1);

        let mut reply = self.config.overflow_header_text();
        let mut length = reply.chars().count();
        let verses = request.verses();

        for (index, verse) in verses.iter().enumerate() {
            let line = self.overflow_line(verse);
            let line_length = line.chars().count();
            let after = verses.len() - index - 1;
            let reserve = if after > 0 {
                more_line(after).chars().count()
            } else {
                0
            };

            if length + line_length + reserve > budget {
                let omitted = verses.len() - index;
                debug!(omitted, budget, "Link-only reply truncated");
                reply.push_str(&more_line(omitted));
                break;
            }

            reply.push_str(&line);
            length += line_length;
        }
        reply
    }

    fn overflow_line(&self, verse: &ResolvedVerse) -> String {
        let link = self.links.overflow_link(
            verse.book(),
            verse.chapter(),
            verse.verses(),
            verse.translation(),
        );
        let label = if verse.is_whole_chapter() {
            format!("{} {}", verse.book(), verse.chapter())
        } else {
            format!("{} {}:{}", verse.book(), verse.chapter(), verse.verses())
        };
        format!("- [{} ({})]({})\n", label, verse.translation(), link)
    }
}

fn more_line(count: usize) -> String {
    format!("- ...and {} more\n", count)
}
