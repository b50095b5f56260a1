use versebot_core::{
    BookId, Origin, Passage, PassageQuery, Reference, RequestContextBuilder, ResolvedVerse,
    VerseRequest,
};

fn verse(book: &str, chapter: &str, verses: &str) -> ResolvedVerse {
    ResolvedVerse::new(
        PassageQuery::new(book, BookId(43), Reference::new(chapter, verses), "ESV"),
        Passage::new("text", format!("{} {}:{}", book, chapter, verses), " English Standard Version"),
        Origin::new(Some("christianity".to_string()), "someone", "http://www.reddit.com/r/Christianity/comments/a/b/c"),
    )
}

#[test]
fn test_empty_reference_parts_become_whole_unit() {
    let reference = Reference::new("", "");
    assert_eq!(reference.chapter(), "0");
    assert_eq!(reference.verses(), "0");
    assert!(reference.is_whole_book());
    assert!(reference.is_whole_chapter());
}

#[test]
fn test_resolved_verse_copies_query_passage_and_origin() {
    let v = verse("John", "3", "16");
    assert_eq!(v.book(), "John");
    assert_eq!(v.chapter(), "3");
    assert_eq!(v.verses(), "16");
    assert_eq!(v.translation(), "ESV");
    assert_eq!(v.contents(), "text");
    assert_eq!(v.verse_title(), "John 3:16");
    assert_eq!(v.author(), "someone");
    assert_eq!(v.community().as_deref(), Some("christianity"));
    assert!(!v.is_whole_chapter());
}

#[test]
fn test_requests_keep_citation_order_and_clear() {
    let mut request = VerseRequest::new();
    assert!(request.is_invalid());

    request.push(verse("John", "3", "16"));
    request.push(verse("Genesis", "1", "0"));
    assert!(!request.is_invalid());
    assert!(request.ensure_valid().is_ok());
    assert_eq!(request.verses()[0].book(), "John");
    assert_eq!(request.verses()[1].book(), "Genesis");

    request.clear();
    assert!(request.is_empty());
    assert!(request.ensure_valid().unwrap_err().is_no_verses());
}

#[test]
fn test_requests_do_not_share_storage() {
    let mut first = VerseRequest::new();
    let second = VerseRequest::new();
    first.push(verse("John", "3", "16"));

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 0);
}

#[test]
fn test_request_context_defaults_to_no_overrides() {
    let context = RequestContextBuilder::default().build().unwrap();
    assert!(context.permalink().is_none());
    assert!(context.community().is_none());
}

#[test]
fn test_resolved_verse_serializes() {
    let json = serde_json::to_value(verse("John", "3", "16")).unwrap();
    assert_eq!(json["book"], "John");
    assert_eq!(json["verses"], "16");
}
