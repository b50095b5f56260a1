//! Configuration structures for reference tables and replies.

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};
use versebot_error::{ConfigError, VerseBotError, VerseBotResult};

/// Header of a link-only reply. `{limit}` is replaced by the character limit.
pub const DEFAULT_OVERFLOW_HEADER: &str = "The contents of the verse(s) you quoted exceed the character limit ({limit} characters). Instead, here are links to the verse(s)!\n\n";

/// Characters kept free for the closing "...and N more" line of a truncated
/// link-only reply.
pub const SUMMARY_LINE_RESERVE: usize = 40;

/// Attribution footer appended to every reply.
pub const DEFAULT_FOOTER: &str = concat!(
    "\n***\n",
    "[^Source ^Code](https://github.com/matthieugrieger/versebot) ^|",
    " [^/r/VerseBot](http://www.reddit.com/r/versebot) ^|",
    " [^Contact ^Dev](http://www.reddit.com/message/compose/?to=mgrieger) ^|",
    " [^FAQ](https://github.com/matthieugrieger/versebot/blob/master/docs/VerseBot%20Info.md#faq) ^|",
    " [^Changelog](https://github.com/matthieugrieger/versebot/blob/master/docs/CHANGELOG.md) ^|",
    " [^Statistics](http://matthieugrieger.com/versebot/) \n\n",
    " ^All ^texts ^provided ^by [^BibleGateway](http://www.biblegateway.com)",
    " ^and [^TaggedTanakh](http://www.taggedtanakh.org) \n\n",
);

/// Reply size limits and fixed text.
///
/// # Example
///
/// ```toml
/// [reply]
/// char_limit = 6000
/// platform_limit = 10000
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_setters::Setters)]
#[setters(prefix = "with_")]
pub struct ReplyConfig {
    /// Quoted content longer than this falls back to a link-only reply
    #[serde(default = "default_char_limit")]
    char_limit: usize,

    /// Hard length limit of the host platform
    #[serde(default = "default_platform_limit")]
    platform_limit: usize,

    /// Header of the link-only reply; `{limit}` expands to `char_limit`
    #[serde(default = "default_overflow_header")]
    overflow_header: String,

    /// Footer appended to every reply
    #[serde(default = "default_footer")]
    footer: String,
}

fn default_char_limit() -> usize {
    6000
}

fn default_platform_limit() -> usize {
    10_000 // reddit comment limit
}

fn default_overflow_header() -> String {
    DEFAULT_OVERFLOW_HEADER.to_string()
}

fn default_footer() -> String {
    DEFAULT_FOOTER.to_string()
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            char_limit: default_char_limit(),
            platform_limit: default_platform_limit(),
            overflow_header: default_overflow_header(),
            footer: default_footer(),
        }
    }
}

impl ReplyConfig {
    /// Overflow header with the character limit filled in.
    pub fn overflow_header_text(&self) -> String {
        self.overflow_header
            .replace("{limit}", &self.char_limit.to_string())
    }
}

/// Context link settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Translation whose links point at the Tanakh site
    #[serde(default = "default_tanakh_translation")]
    pub tanakh_translation: String,

    /// Base of query-string passage links
    #[serde(default = "default_gateway_url")]
    pub gateway_url: String,

    /// Prefix of Tanakh chapter links
    #[serde(default = "default_tanakh_url")]
    pub tanakh_url: String,
}

fn default_tanakh_translation() -> String {
    "NJPS".to_string()
}

fn default_gateway_url() -> String {
    "http://www.biblegateway.com/passage/".to_string()
}

fn default_tanakh_url() -> String {
    "http://www.taggedtanakh.org/Chapter/Index/english-".to_string()
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            tanakh_translation: default_tanakh_translation(),
            gateway_url: default_gateway_url(),
            tanakh_url: default_tanakh_url(),
        }
    }
}

/// Supported translations and the global default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// Supported codes; earlier entries win when a citation names several
    pub supported: Vec<String>,

    /// Translation used when nothing more specific applies
    pub default: String,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            supported: vec!["ESV".to_string()],
            default: "ESV".to_string(),
        }
    }
}

/// Per-community settings.
///
/// ```toml
/// [communities.judaism]
/// default = "NJPS"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityConfig {
    /// Default translation for citations posted in this community
    pub default: String,
}

/// One book of the reference table.
///
/// ```toml
/// [[books]]
/// id = 67
/// name = "Tobit"
/// aliases = ["tob", "tb"]
/// translation = "NRSV"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookConfig {
    /// Unique book id
    pub id: u32,

    /// Display name
    pub name: String,

    /// Additional names and abbreviations, matched case-insensitively
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Name used in Tanakh links; absent for books outside the Tanakh
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tanakh: Option<String>,

    /// Book-specific default translation, ahead of community defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

/// Top-level VerseBot configuration.
///
/// Loads from TOML files with a precedence system:
/// 1. Bundled defaults (include_str! from versebot.toml)
/// 2. User override (./versebot.toml or ~/.config/versebot/versebot.toml)
///
/// # Example
///
/// ```no_run
/// use versebot_config::VerseBotConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VerseBotConfig::load()?;
/// println!("Character limit: {}", config.reply.char_limit());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VerseBotConfig {
    /// Reply limits and fixed text
    #[serde(default)]
    pub reply: ReplyConfig,

    /// Context link settings
    #[serde(default)]
    pub links: LinkConfig,

    /// Supported translations
    #[serde(default)]
    pub translations: TranslationConfig,

    /// Community name (lower-case) to community settings
    #[serde(default)]
    pub communities: HashMap<String, CommunityConfig>,

    /// Book reference table
    #[serde(default)]
    pub books: Vec<BookConfig>,
}

impl VerseBotConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> VerseBotResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                VerseBotError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VerseBotError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration.
    pub fn from_toml_str(text: &str) -> VerseBotResult<Self> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()
            .map_err(|e| {
                VerseBotError::from(ConfigError::new(format!(
                    "Failed to read configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VerseBotError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// The bundled configuration alone, without user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is broken.
    pub fn bundled() -> VerseBotResult<Self> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (versebot.toml shipped with the library)
    /// 2. User config in home directory (~/.config/versebot/versebot.toml)
    /// 3. User config in current directory (./versebot.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> VerseBotResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/versebot/versebot.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("versebot").required(false));

        builder
            .build()
            .map_err(|e| {
                VerseBotError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VerseBotError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Check the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the character limit is zero, or a reply at the limit plus the footer
    ///   would not fit under the platform limit
    /// - the overflow header and footer leave no room for a link-only reply
    /// - the global, Tanakh, community or book default translation is not supported
    /// - two books share an id, or a book has an empty name
    #[instrument(skip(self))]
    pub fn validate(&self) -> VerseBotResult<()> {
        let reply = &self.reply;
        if reply.char_limit == 0 {
            return Err(ConfigError::new("reply.char_limit must be greater than 0").into());
        }
        let worst_case = reply.char_limit + reply.footer.chars().count();
        if worst_case >= reply.platform_limit {
            return Err(ConfigError::new(format!(
                "reply.char_limit ({}) plus footer ({} characters) must stay below reply.platform_limit ({})",
                reply.char_limit,
                reply.footer.chars().count(),
                reply.platform_limit
            ))
            .into());
        }
        let link_only_floor = reply.overflow_header_text().chars().count()
            + reply.footer.chars().count()
            + SUMMARY_LINE_RESERVE;
        if link_only_floor >= reply.platform_limit {
            return Err(ConfigError::new(format!(
                "reply.overflow_header plus footer leaves no room for links under reply.platform_limit ({})",
                reply.platform_limit
            ))
            .into());
        }

        let supported: HashSet<&str> = self
            .translations
            .supported
            .iter()
            .map(String::as_str)
            .collect();
        let check = |code: &str, context: &str| -> VerseBotResult<()> {
            if supported.contains(code) {
                Ok(())
            } else {
                Err(ConfigError::new(format!(
                    "{} uses unsupported translation '{}'",
                    context, code
                ))
                .into())
            }
        };

        check(&self.translations.default, "translations.default")?;
        check(&self.links.tanakh_translation, "links.tanakh_translation")?;
        for (name, community) in &self.communities {
            check(&community.default, &format!("communities.{}", name))?;
        }

        let mut ids = HashSet::new();
        for book in &self.books {
            if book.name.trim().is_empty() {
                return Err(ConfigError::new(format!("book {} has an empty name", book.id)).into());
            }
            if !ids.insert(book.id) {
                return Err(ConfigError::new(format!("duplicate book id {}", book.id)).into());
            }
            if let Some(code) = &book.translation {
                check(code, &format!("book '{}'", book.name))?;
            }
        }

        debug!(
            books = self.books.len(),
            communities = self.communities.len(),
            "Configuration is valid"
        );
        Ok(())
    }
}

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../versebot.toml");
