//! Tests for citation resolution and the end-to-end engine.

use std::sync::Arc;
use versebot_config::{DEFAULT_FOOTER, ReferenceTable, VerseBotConfig};
use versebot_core::{BookId, Passage, RequestContextBuilder, RequestContext, VerseRequest};
use versebot_engine::{InMemoryContentProvider, Resolver, VerseEngine};
use versebot_error::{RequestErrorKind, VerseBotErrorKind};
use versebot_interface::{InboundMessage, InboundMessageBuilder};

const CHRISTIANITY: &str = "http://www.reddit.com/r/Christianity/comments/abc/title/def";
const JUDAISM: &str = "http://www.reddit.com/r/Judaism/comments/abc/title/def";

fn provider() -> InMemoryContentProvider {
    let mut provider = InMemoryContentProvider::new();
    provider.insert(
        "Genesis",
        "1",
        "1",
        "ESV",
        Passage::new("In the beginning, God created the heavens and the earth.", "Genesis 1:1", "English Standard Version"),
    );
    provider.insert(
        "Genesis",
        "1",
        "1",
        "NJPS",
        Passage::new("When God began to create heaven and earth", "Genesis 1:1", "Tanakh"),
    );
    provider.insert(
        "John",
        "3",
        "16-17",
        "KJV",
        Passage::new("For God so loved the world...", "John 3:16-17", "King James Version"),
    );
    provider.insert(
        "Psalms",
        "23",
        "0",
        "ESV",
        Passage::new("The LORD is my shepherd; I shall not want.", "Psalm 23", "English Standard Version"),
    );
    provider.insert(
        "Tobit",
        "1",
        "1",
        "NRSV",
        Passage::new("This book tells the story of Tobit", "Tobit 1:1", "New Revised Standard Version"),
    );
    provider
}

fn resolver() -> Resolver {
    let table = Arc::new(ReferenceTable::new(&VerseBotConfig::bundled().unwrap()));
    Resolver::new(table.clone(), table, Arc::new(provider()))
}

fn message(permalink: Option<&str>) -> InboundMessage {
    let mut builder = InboundMessageBuilder::default();
    builder.author("reader").body("");
    if let Some(link) = permalink {
        builder.permalink(link);
    }
    builder.build().unwrap()
}

#[test]
fn test_citation_matches_book_and_reference() {
    let resolver = resolver();

    let citation = resolver.citation("John 3:16-17 KJV").unwrap();
    assert_eq!(*citation.book_id(), BookId(43));
    assert_eq!(citation.reference().chapter(), "3");
    assert_eq!(citation.reference().verses(), "16-17");
    assert_eq!(citation.raw(), "John 3:16-17 KJV");

    assert!(resolver.citation("xyz 1:1").is_none());
}

#[tokio::test]
async fn test_resolve_uses_global_default() {
    let resolver = resolver();
    let request = resolver
        .resolve(["gen 1:1"], &message(Some(CHRISTIANITY)), &RequestContext::default())
        .await
        .unwrap();

    assert_eq!(request.len(), 1);
    let verse = &request.verses()[0];
    assert_eq!(verse.book(), "Genesis");
    assert_eq!(verse.chapter(), "1");
    assert_eq!(verse.verses(), "1");
    assert_eq!(verse.translation(), "ESV");
    assert_eq!(verse.community().as_deref(), Some("christianity"));
    assert_eq!(verse.author(), "reader");
    assert_eq!(verse.permalink(), CHRISTIANITY);
}

#[tokio::test]
async fn test_resolve_uses_community_and_book_defaults() {
    let resolver = resolver();
    let request = resolver
        .resolve(["Genesis 1:1", "tobit 1:1"], &message(Some(JUDAISM)), &RequestContext::default())
        .await
        .unwrap();

    let translations: Vec<_> = request.verses().iter().map(|v| v.translation().as_str()).collect();
    assert_eq!(translations, vec!["NJPS", "NRSV"]);
}

#[tokio::test]
async fn test_unknown_books_and_failed_fetches_are_dropped() {
    let resolver = resolver();
    let tokens = ["xyz 1:1", "John 3:16-17 KJV", "John 99:1", "Psalm 23"];
    let request = resolver
        .resolve(tokens, &message(Some(CHRISTIANITY)), &RequestContext::default())
        .await
        .unwrap();

    let books: Vec<_> = request.verses().iter().map(|v| v.book().as_str()).collect();
    assert_eq!(books, vec!["John", "Psalms"]);
    assert_eq!(request.verses()[1].verses(), "0");
}

#[tokio::test]
async fn test_no_resolvable_citation_is_no_verses() {
    let resolver = resolver();
    let err = resolver
        .resolve(["xyz 1:1", "abc 2"], &message(Some(CHRISTIANITY)), &RequestContext::default())
        .await
        .unwrap_err();
    assert!(err.is_no_verses());

    let err = resolver
        .resolve(Vec::<String>::new(), &message(Some(CHRISTIANITY)), &RequestContext::default())
        .await
        .unwrap_err();
    assert!(err.is_no_verses());
}

#[tokio::test]
async fn test_permalink_override() {
    let resolver = resolver();
    let context = RequestContextBuilder::default()
        .permalink("http://www.reddit.com/r/Christianity/comments/zzz/edited/ghi")
        .build()
        .unwrap();

    let request = resolver
        .resolve(["gen 1:1"], &message(Some(JUDAISM)), &context)
        .await
        .unwrap();

    let verse = &request.verses()[0];
    assert_eq!(verse.permalink(), "http://www.reddit.com/r/Christianity/comments/zzz/edited/ghi");
    // The community still comes from the message itself.
    assert_eq!(verse.community().as_deref(), Some("judaism"));
    assert_eq!(verse.translation(), "NJPS");
}

#[tokio::test]
async fn test_private_message_uses_context() {
    let resolver = resolver();
    let context = RequestContextBuilder::default()
        .permalink("http://www.reddit.com/message/messages/abc")
        .community("Judaism")
        .build()
        .unwrap();

    let request = resolver.resolve(["gen 1:1"], &message(None), &context).await.unwrap();

    let verse = &request.verses()[0];
    assert_eq!(verse.community().as_deref(), Some("judaism"));
    assert_eq!(verse.translation(), "NJPS");
}

#[tokio::test]
async fn test_missing_permalink_is_invalid_context() {
    let resolver = resolver();
    let err = resolver
        .resolve(["gen 1:1"], &message(None), &RequestContext::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err.kind(),
        VerseBotErrorKind::Request(e) if matches!(e.kind(), RequestErrorKind::InvalidContext(_))
    ));
}

#[tokio::test]
async fn test_message_without_books_is_no_verses_even_without_permalink() {
    let resolver = resolver();

    let err = resolver
        .resolve(Vec::<String>::new(), &message(None), &RequestContext::default())
        .await
        .unwrap_err();
    assert!(err.is_no_verses());

    let err = resolver
        .resolve(["xyz 1:1"], &message(None), &RequestContext::default())
        .await
        .unwrap_err();
    assert!(err.is_no_verses());
}

#[tokio::test]
async fn test_engine_without_citations_or_permalink_is_no_verses() {
    let engine = VerseEngine::new(VerseBotConfig::bundled().unwrap(), Arc::new(provider()));

    let err = engine
        .respond("A private message with no citations.", &message(None), &RequestContext::default())
        .await
        .unwrap_err();
    assert!(err.is_no_verses());
}

#[tokio::test]
async fn test_request_can_be_cleared_and_reused() {
    let resolver = resolver();
    let message = message(Some(CHRISTIANITY));
    let context = RequestContext::default();
    let mut request = VerseRequest::new();

    let added = resolver
        .resolve_into(&mut request, ["gen 1:1", "psalm 23"], &message, &context)
        .await
        .unwrap();
    assert_eq!(added, 2);

    request.clear();
    assert!(request.is_invalid());

    let added = resolver
        .resolve_into(&mut request, ["john 3:16-17 kjv"], &message, &context)
        .await
        .unwrap();
    assert_eq!(added, 1);
    assert_eq!(request.len(), 1);
    assert_eq!(request.verses()[0].book(), "John");
}

#[tokio::test]
async fn test_engine_responds_with_quoted_verses() {
    let engine = VerseEngine::new(VerseBotConfig::bundled().unwrap(), Arc::new(provider()));

    let reply = engine
        .respond(
            "Compare [Genesis 1:1] with [John 3:16-17 KJV].",
            &message(Some(CHRISTIANITY)),
            &RequestContext::default(),
        )
        .await
        .unwrap();

    let expected = format!(
        "[**Genesis 1:1 | English Standard Version**](http://www.biblegateway.com/passage/?search=Genesis%201&version=ESV)\n\
         >In the beginning, God created the heavens and the earth.\n\n\
         [**John 3:16-17 | King James Version**](http://www.biblegateway.com/passage/?search=John%203&version=KJV)\n\
         >For God so loved the world...\n\n{}",
        DEFAULT_FOOTER
    );
    assert_eq!(reply, expected);
}

#[tokio::test]
async fn test_engine_tanakh_link_in_judaism() {
    let engine = VerseEngine::new(VerseBotConfig::bundled().unwrap(), Arc::new(provider()));

    let reply = engine
        .respond("[gen 1:1]", &message(Some(JUDAISM)), &RequestContext::default())
        .await
        .unwrap();

    assert!(reply.starts_with(
        "[**Genesis 1:1 | Tanakh**](http://www.taggedtanakh.org/Chapter/Index/english-Genesis-1)\n"
    ));
}

#[tokio::test]
async fn test_engine_without_citations_is_no_verses() {
    let engine = VerseEngine::new(VerseBotConfig::bundled().unwrap(), Arc::new(provider()));

    let err = engine
        .respond("Nothing to see here.", &message(Some(CHRISTIANITY)), &RequestContext::default())
        .await
        .unwrap_err();
    assert!(err.is_no_verses());
}
