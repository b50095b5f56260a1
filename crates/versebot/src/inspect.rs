//! Citation inspection without fetching passages.

use derive_getters::Getters;
use serde::Serialize;
use versebot_config::{ReferenceTable, VerseBotConfig};
use versebot_engine::{LinkBuilder, TranslationSelector, extract_citations, parse_reference};
use versebot_interface::{BookLookup, TranslationDefaults};

/// How one citation token would be resolved.
///
/// `book` is `None` when the token names no known book; the remaining fields
/// are then empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct CitationReport {
    /// Token as written inside the brackets
    token: String,
    /// Book display name
    book: Option<String>,
    /// Chapter, `"0"` for the whole book
    chapter: String,
    /// Verse range, `"0"` for the whole chapter
    verses: String,
    /// Selected translation
    translation: String,
    /// Context link for the passage
    link: String,
}

impl CitationReport {
    fn unrecognized(token: String) -> Self {
        Self {
            token,
            book: None,
            chapter: String::new(),
            verses: String::new(),
            translation: String::new(),
            link: String::new(),
        }
    }

    /// True when the token named a known book.
    pub fn is_recognized(&self) -> bool {
        self.book.is_some()
    }
}

/// Report how each citation in `text` would resolve when posted in
/// `community`.
///
/// Uses the same book matching, parsing and translation selection as
/// [`Resolver`](versebot_engine::Resolver), but never contacts a content provider.
pub fn inspect(config: &VerseBotConfig, text: &str, community: Option<&str>) -> Vec<CitationReport> {
    let table = ReferenceTable::new(config);
    let selector = TranslationSelector::from_defaults(&table);
    let links = LinkBuilder::new(&config.links, &table);
    let community = community.map(str::to_lowercase);

    extract_citations(text)
        .into_iter()
        .map(|token| report(&table, &selector, &links, community.as_deref(), token))
        .collect()
}

fn report(
    table: &ReferenceTable,
    selector: &TranslationSelector,
    links: &LinkBuilder<'_>,
    community: Option<&str>,
    token: String,
) -> CitationReport {
    let lowered = token.to_lowercase();
    let Some(id) = table.book_id(&lowered) else {
        return CitationReport::unrecognized(token);
    };
    let Ok(book) = table.book_name(id) else {
        return CitationReport::unrecognized(token);
    };

    let reference = parse_reference(&lowered);
    let translation = selector.select(
        &token.to_uppercase(),
        community,
        id,
        table as &dyn TranslationDefaults,
    );
    let link = links.context_link(book, reference.chapter(), &translation);

    CitationReport {
        book: Some(book.to_string()),
        chapter: reference.chapter().to_string(),
        verses: reference.verses().to_string(),
        translation,
        link,
        token,
    }
}
