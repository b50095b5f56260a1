//! Tests for translation selection.

use versebot_config::{ReferenceTable, VerseBotConfig};
use versebot_core::BookId;
use versebot_engine::TranslationSelector;

fn table() -> ReferenceTable {
    ReferenceTable::new(&VerseBotConfig::bundled().unwrap())
}

#[test]
fn test_explicit_translation() {
    let table = table();
    let selector = TranslationSelector::from_defaults(&table);

    assert_eq!(selector.select("JOHN 3:16 KJV", None, BookId(43), &table), "KJV");
    assert_eq!(selector.select("JOHN 3:16 NRSV", Some("judaism"), BookId(43), &table), "NRSV");
}

#[test]
fn test_earliest_supported_code_wins() {
    let table = table();
    let selector = TranslationSelector::from_defaults(&table);

    // ESV is listed before KJV, so it wins regardless of position.
    assert_eq!(selector.explicit("JOHN 3:16 KJV ESV"), Some("ESV"));
    assert_eq!(selector.explicit("JOHN 3:16 ESV KJV"), Some("ESV"));
}

#[test]
fn test_code_must_be_a_whole_word() {
    let table = table();
    let selector = TranslationSelector::from_defaults(&table);

    assert_eq!(selector.explicit("JOHN 3:16 NKJVX"), None);
    assert_eq!(selector.explicit("JOHN 3:16 NKJV"), Some("NKJV"));
}

#[test]
fn test_global_default() {
    let table = table();
    let selector = TranslationSelector::from_defaults(&table);

    assert_eq!(selector.select("GEN 1:1", None, BookId(1), &table), "ESV");
    assert_eq!(selector.select("GEN 1:1", Some("christianity"), BookId(1), &table), "ESV");
}

#[test]
fn test_community_default() {
    let table = table();
    let selector = TranslationSelector::from_defaults(&table);

    assert_eq!(selector.select("GEN 1:1", Some("judaism"), BookId(1), &table), "NJPS");
    assert_eq!(selector.select("GEN 1:1", Some("Catholicism"), BookId(1), &table), "NABRE");
}

#[test]
fn test_book_default_beats_community_default() {
    let table = table();
    let selector = TranslationSelector::from_defaults(&table);

    assert_eq!(selector.select("TOBIT 1:1", Some("judaism"), BookId(67), &table), "NRSV");
    assert_eq!(selector.select("TOBIT 1:1 DRA", Some("judaism"), BookId(67), &table), "DRA");
}

#[test]
fn test_custom_code_list() {
    let selector = TranslationSelector::new(&["NIV".to_string(), "ESV".to_string()]);
    assert_eq!(selector.explicit("JOHN 3:16 ESV NIV"), Some("NIV"));
}
