//! Citation inspection command.

use super::commands::OutputFormat;
use versebot::{ProviderError, ProviderErrorKind, VerseBotConfig, VerseBotResult, inspect};

/// Print how each citation in `text` would resolve.
pub fn inspect_citations(
    config: &VerseBotConfig,
    text: &str,
    community: Option<&str>,
    format: OutputFormat,
) -> VerseBotResult<()> {
    let reports = inspect(config, text, community);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&reports).map_err(|e| {
                ProviderError::new(ProviderErrorKind::Malformed(e.to_string()))
            })?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            if reports.is_empty() {
                println!("No citations found.");
            }
            for report in &reports {
                match report.book() {
                    Some(book) => {
                        let selection = if report.verses() == "0" {
                            report.chapter().clone()
                        } else {
                            format!("{}:{}", report.chapter(), report.verses())
                        };
                        println!(
                            "[{}] -> {} {} ({})\n    {}",
                            report.token(),
                            book,
                            selection,
                            report.translation(),
                            report.link()
                        );
                    }
                    None => println!("[{}] -> unrecognized", report.token()),
                }
            }
        }
    }

    Ok(())
}
