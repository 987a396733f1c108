//! Decorative markup removal
//!
//! Generated summaries often arrive with Markdown-style emphasis (`*`, `＊`),
//! heading markers (`#`) and alignment spaces around labels. These are
//! stripped; fullwidth punctuation and line breaks carry structure and are
//! kept verbatim.

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Remove `*`, `＊`, `#` and halfwidth spaces from labeled text
///
/// Never fails. Line breaks, fullwidth colons and fullwidth spaces survive, so
/// the output can still be fed to the section parser.
///
/// # Examples
///
/// ```
/// use summary_formatter::format_output_summary;
///
/// assert_eq!(format_output_summary("# *退院時状況* : 軽快退院"), "退院時状況:軽快退院");
/// assert_eq!(format_output_summary("＊備考＊：特記事項なし"), "備考：特記事項なし");
/// assert_eq!(format_output_summary("# * ＊  "), "");
/// ```
pub fn format_output_summary(text: &str) -> String {
    static MARKUP_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = MARKUP_REGEX
        .get_or_init(|| Regex::new(r"[*＊# ]+").expect("Failed to compile markup regex"));

    let cleaned = re.replace_all(text, "");

    if cleaned.len() != text.len() {
        debug!(
            "Stripped decorative markup: original {} bytes -> cleaned {} bytes",
            text.len(),
            cleaned.len()
        );
    }

    cleaned.into_owned()
}
