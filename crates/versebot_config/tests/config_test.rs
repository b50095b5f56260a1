//! Tests for the configuration system and reference table.

use versebot_config::{DEFAULT_FOOTER, ReferenceTable, VerseBotConfig};
use versebot_core::BookId;
use versebot_interface::{BookLookup, TranslationDefaults};

fn bundled_table() -> ReferenceTable {
    ReferenceTable::new(&VerseBotConfig::bundled().unwrap())
}

#[test]
fn test_bundled_defaults_are_valid() {
    let config = VerseBotConfig::bundled().unwrap();

    assert_eq!(*config.reply.char_limit(), 6000);
    assert_eq!(*config.reply.platform_limit(), 10_000);
    assert_eq!(config.reply.footer(), DEFAULT_FOOTER);
    assert_eq!(config.translations.default, "ESV");
    assert_eq!(config.links.tanakh_translation, "NJPS");
    assert_eq!(config.books.len(), 73);
    assert!(config.validate().is_ok());
}

#[test]
fn test_overflow_header_expands_limit() {
    let config = VerseBotConfig::bundled().unwrap();
    let header = config.reply.overflow_header_text();
    assert!(header.contains("(6000 characters)"));
    assert!(header.ends_with("here are links to the verse(s)!\n\n"));
}

#[test]
fn test_book_lookup_by_name_and_alias() {
    let table = bundled_table();

    assert_eq!(table.book_id("genesis 1:1"), Some(BookId(1)));
    assert_eq!(table.book_id("gen 1:1"), Some(BookId(1)));
    assert_eq!(table.book_id("john 3:16-17"), Some(BookId(43)));
    assert_eq!(table.book_id("psalm 23"), Some(BookId(19)));
    assert_eq!(table.book_id("song of songs 2:1"), Some(BookId(22)));
}

#[test]
fn test_book_lookup_prefers_longest_name() {
    let table = bundled_table();

    assert_eq!(table.book_id("1 john 3:16"), Some(BookId(62)));
    assert_eq!(table.book_id("john 3:16"), Some(BookId(43)));
    assert_eq!(table.book_id("judith 2:1"), Some(BookId(68)));
    assert_eq!(table.book_id("judges 2:1"), Some(BookId(7)));
}

#[test]
fn test_book_lookup_requires_word_boundary() {
    let table = bundled_table();

    // "jo" is not an alias and "johnny" is not "john"
    assert_eq!(table.book_id("johnny 3:16"), None);
    assert_eq!(table.book_id("xyz 1:1"), None);
    assert_eq!(table.book_id(""), None);
}

#[test]
fn test_book_names_and_tanakh_aliases() {
    let table = bundled_table();

    assert_eq!(table.book_name(BookId(62)).unwrap(), "1 John");
    assert!(table.book_name(BookId(999)).is_err());

    assert_eq!(table.tanakh_name("Genesis").unwrap(), "Genesis");
    assert_eq!(table.tanakh_name("1 Samuel").unwrap(), "1Samuel");
    assert!(table.tanakh_name("Matthew").is_err());
}

#[test]
fn test_default_translation_precedence() {
    let table = bundled_table();

    // Global default
    assert_eq!(table.default_translation(None, BookId(1)), "ESV");
    assert_eq!(table.default_translation(Some("christianity"), BookId(1)), "ESV");

    // Community default, matched case-insensitively
    assert_eq!(table.default_translation(Some("Judaism"), BookId(1)), "NJPS");

    // Book default beats community default
    assert_eq!(table.default_translation(Some("judaism"), BookId(67)), "NRSV");
    assert_eq!(table.default_translation(None, BookId(70)), "NRSV");
}

#[test]
fn test_supported_translations_keep_order() {
    let table = bundled_table();
    let supported = table.supported_translations();

    assert_eq!(supported.first().map(String::as_str), Some("ESV"));
    assert!(supported.iter().any(|code| code == "NJPS"));
}

#[test]
fn test_config_from_file() {
    use std::io::Write;
    use tempfile::Builder;

    let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        temp_file,
        r#"
[reply]
char_limit = 500

[translations]
supported = ["KJV", "ESV"]
default = "KJV"

[communities.test]
default = "ESV"

[[books]]
id = 1
name = "Genesis"
aliases = ["gen"]
"#
    )
    .unwrap();

    let config = VerseBotConfig::from_file(temp_file.path()).unwrap();
    assert_eq!(*config.reply.char_limit(), 500);
    assert_eq!(*config.reply.platform_limit(), 10_000);
    assert_eq!(config.translations.supported, vec!["KJV", "ESV"]);
    assert_eq!(config.books.len(), 1);

    let table = ReferenceTable::new(&config);
    assert_eq!(table.default_translation(Some("test"), BookId(1)), "ESV");
    assert_eq!(table.default_translation(None, BookId(1)), "KJV");
}

#[test]
fn test_missing_file_is_an_error() {
    let result = VerseBotConfig::from_file("/nonexistent/versebot.toml");
    assert!(result.is_err());
}

#[test]
fn test_validate_rejects_unsupported_defaults() {
    let config = VerseBotConfig::from_toml_str(
        r#"
[translations]
supported = ["ESV"]
default = "XYZ"
"#,
    )
    .unwrap();
    assert!(config.validate().is_err());

    let config = VerseBotConfig::from_toml_str(
        r#"
[translations]
supported = ["ESV", "NJPS"]
default = "ESV"

[[books]]
id = 67
name = "Tobit"
translation = "NRSV"
"#,
    )
    .unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_limits_above_platform() {
    let config = VerseBotConfig::bundled().unwrap();
    let mut too_big = config.clone();
    too_big.reply = too_big.reply.with_char_limit(9900);
    assert!(too_big.validate().is_err());

    let mut zero = config;
    zero.reply = zero.reply.with_char_limit(0);
    assert!(zero.validate().is_err());
}

#[test]
fn test_validate_requires_room_for_link_only_reply() {
    let config = VerseBotConfig::bundled().unwrap();

    let mut crowded = config.clone();
    crowded.reply = crowded
        .reply
        .with_char_limit(100)
        .with_overflow_header("x".repeat(9500));
    assert!(crowded.validate().is_err());

    let mut roomy = config;
    roomy.reply = roomy
        .reply
        .with_char_limit(100)
        .with_overflow_header("x".repeat(9000));
    assert!(roomy.validate().is_ok());
}

#[test]
fn test_validate_rejects_duplicate_book_ids() {
    let config = VerseBotConfig::from_toml_str(
        r#"
[translations]
supported = ["ESV", "NJPS"]
default = "ESV"

[[books]]
id = 1
name = "Genesis"

[[books]]
id = 1
name = "Exodus"
"#,
    )
    .unwrap();
    assert!(config.validate().is_err());
}
