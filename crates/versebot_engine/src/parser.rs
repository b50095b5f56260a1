//! Citation token extraction and chapter/verse parsing.

use regex::Regex;
use std::sync::LazyLock;
use versebot_core::{Reference, WHOLE_UNIT};

static CITATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([\w\s:\-]+)\]").expect("valid citation regex"));

static CHAPTER_AND_VERSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+:\d*(?:-\d+)?").expect("valid chapter:verse regex"));

static BARE_CHAPTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(\d+)").expect("valid chapter regex"));

/// Find the bracketed citation tokens in a message, in order of appearance.
///
/// Brackets are stripped; the inner text is returned as written.
///
/// # Examples
///
/// ```
/// use versebot_engine::extract_citations;
///
/// let tokens = extract_citations("See [John 3:16 ESV] and [Psalm 23].");
/// assert_eq!(tokens, vec!["John 3:16 ESV", "Psalm 23"]);
/// ```
pub fn extract_citations(text: &str) -> Vec<String> {
    CITATION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Extract the chapter and verse range from a lower-cased citation token.
///
/// With a colon, the first `chapter:verses` group governs; the verse part may
/// be a dash range. Without a colon, the first number preceded by whitespace
/// is the chapter and the whole chapter is selected. Anything that does not
/// match yields `"0"` parts rather than an error. Only the first match is
/// used, so "3:16,18" selects 3:16.
///
/// # Examples
///
/// ```
/// use versebot_engine::parse_reference;
///
/// let reference = parse_reference("john 3:16-17");
/// assert_eq!(reference.chapter(), "3");
/// assert_eq!(reference.verses(), "16-17");
///
/// let reference = parse_reference("psalm 23");
/// assert_eq!(reference.chapter(), "23");
/// assert_eq!(reference.verses(), "0");
/// ```
pub fn parse_reference(token: &str) -> Reference {
    if token.contains(':') {
        match CHAPTER_AND_VERSE.find(token) {
            Some(m) => {
                let (chapter, verses) = m.as_str().split_once(':').unwrap_or((m.as_str(), ""));
                Reference::new(chapter, verses)
            }
            None => Reference::default(),
        }
    } else {
        let chapter = BARE_CHAPTER
            .captures(token)
            .and_then(|caps| caps.get(1))
            .map_or(WHOLE_UNIT, |m| m.as_str());
        Reference::new(chapter, WHOLE_UNIT)
    }
}

/// Community name from a reddit-style permalink, lower-cased.
///
/// # Examples
///
/// ```
/// use versebot_engine::community_from_permalink;
///
/// let link = "http://www.reddit.com/r/Christianity/comments/abc/title/def";
/// assert_eq!(community_from_permalink(link).as_deref(), Some("christianity"));
/// assert_eq!(community_from_permalink("http://example.com/post/1"), None);
/// ```
pub fn community_from_permalink(permalink: &str) -> Option<String> {
    let start = permalink.find("/r/")? + "/r/".len();
    let name = permalink[start..].split('/').next()?;
    (!name.is_empty()).then(|| name.to_lowercase())
}
