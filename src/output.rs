//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Pages
//!     es
//!         001 / → index.html
//!         002 /about → about/index.html
//!     en
//!         001 / → en/index.html
//!
//! Blog
//!     001 Inauguramos una nueva escuela (2025-03-01)
//!     Skipped: borrador.md
//!
//! Assets
//!     style.3f9a1c02.css
//!     site.81be44d0.js
//!     2 files from assets/
//!     sitemap.xml (18 URLs)
//!
//! Generated 20 pages in 2 locales, 2 posts
//! ```
//!
//! ## Check
//!
//! ```text
//! Config
//!     config.toml
//!     Default locale: es
//!
//! Blog
//!     001 Inauguramos una nueva escuela (2025-03-01)
//!         Slug: nueva-escuela
//!
//! Translations
//!     Missing en: blog:extra
//! ```
//!
//! ## Submit
//!
//! ```text
//! ==> Validation failed
//!     email: Email inválido
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::forms::submit::SubmitOutcome;
use crate::generate::{BuildReport, Site};
use crate::i18n::Locale;
use crate::types::BlogPost;
use std::collections::BTreeMap;
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a blog post header: positional index, title, date.
///
/// ```text
/// 001 Inauguramos una nueva escuela (2025-03-01)
/// ```
fn post_header(index: usize, post: &BlogPost) -> String {
    format!("{} {} ({})", format_index(index), post.title, post.date)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format build output: pages per locale, blog posts, written assets.
pub fn format_build_output(report: &BuildReport, posts: &[BlogPost]) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];

    let mut locales = 0;
    for locale in Locale::ALL {
        let pages: Vec<_> = report.pages.iter().filter(|p| p.locale == locale).collect();
        if pages.is_empty() {
            continue;
        }
        locales += 1;
        lines.push(format!("{}{}", indent(1), locale));
        for (i, page) in pages.iter().enumerate() {
            lines.push(format!(
                "{}{} {} → {}",
                indent(2),
                format_index(i + 1),
                page.route.path(),
                page.file
            ));
        }
    }

    if !posts.is_empty() || !report.skipped_posts.is_empty() {
        lines.push(String::new());
        lines.push("Blog".to_string());
        for (i, post) in posts.iter().enumerate() {
            lines.push(format!("{}{}", indent(1), post_header(i + 1, post)));
        }
        for path in &report.skipped_posts {
            lines.push(format!("{}Skipped: {}", indent(1), file_name(path)));
        }
    }

    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!("{}{}", indent(1), report.stylesheet));
    lines.push(format!("{}{}", indent(1), report.script));
    if report.assets_copied > 0 {
        lines.push(format!(
            "{}{} from assets/",
            indent(1),
            plural(report.assets_copied, "file", "files")
        ));
    }
    lines.push(format!(
        "{}sitemap.xml ({})",
        indent(1),
        plural(report.sitemap_urls, "URL", "URLs")
    ));

    lines.push(String::new());
    lines.push(format!(
        "Generated {} in {}, {}",
        plural(report.pages.len(), "page", "pages"),
        plural(locales, "locale", "locales"),
        plural(report.posts, "post", "posts")
    ));
    lines
}

/// Print build output to stdout.
pub fn print_build_output(report: &BuildReport, posts: &[BlogPost]) {
    for line in format_build_output(report, posts) {
        println!("{}", line);
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ============================================================================
// Check
// ============================================================================

/// Format check output: config in use, blog inventory, translation gaps.
pub fn format_check_output(
    site: &Site,
    source_root: &Path,
    missing_keys: &[(Locale, String)],
) -> Vec<String> {
    let mut lines = vec!["Config".to_string()];
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    lines.push(format!(
        "{}Default locale: {}",
        indent(1),
        site.config.i18n.default_locale
    ));
    for locale in Locale::ALL {
        let path = source_root.join("locales").join(format!("{}.toml", locale.code()));
        if path.exists() {
            lines.push(format!("{}locales/{}.toml", indent(1), locale.code()));
        }
    }

    lines.push(String::new());
    lines.push("Blog".to_string());
    if site.blog.posts.is_empty() {
        lines.push(format!("{}(no posts)", indent(1)));
    }
    for (i, post) in site.blog.posts.iter().enumerate() {
        lines.push(format!("{}{}", indent(1), post_header(i + 1, post)));
        lines.push(format!("{}Slug: {}", indent(2), post.slug));
    }
    for path in &site.blog.skipped {
        lines.push(format!("{}Skipped: {}", indent(1), file_name(path)));
    }

    lines.push(String::new());
    lines.push("Translations".to_string());
    if missing_keys.is_empty() {
        lines.push(format!("{}complete", indent(1)));
    }
    for (locale, key) in missing_keys {
        lines.push(format!("{}Missing {}: {}", indent(1), locale, key));
    }
    lines
}

/// Print check output to stdout.
pub fn print_check_output(site: &Site, source_root: &Path, missing_keys: &[(Locale, String)]) {
    for line in format_check_output(site, source_root, missing_keys) {
        println!("{}", line);
    }
}

// ============================================================================
// Submit
// ============================================================================

/// Localized strings for reporting one submission.
pub struct SubmitMessages {
    /// Field name → localized validation message.
    pub errors: BTreeMap<&'static str, String>,
    pub success: String,
    pub failure: String,
}

/// Format the result of a `submit` command. `describe` renders the
/// successful payload (a receipt reference, a session owner).
pub fn format_submit_outcome<T>(
    outcome: &SubmitOutcome<T>,
    messages: &SubmitMessages,
    describe: impl Fn(&T) -> String,
) -> Vec<String> {
    match outcome {
        SubmitOutcome::Invalid(_) => {
            let mut lines = vec!["==> Validation failed".to_string()];
            for (field, message) in &messages.errors {
                lines.push(format!("{}{}: {}", indent(1), field, message));
            }
            lines
        }
        SubmitOutcome::Busy => vec!["==> A submission is already in progress".to_string()],
        SubmitOutcome::Sent(value) => vec![
            format!("==> {}", messages.success),
            format!("{}{}", indent(1), describe(value)),
        ],
        SubmitOutcome::Failed(err) => vec![
            format!("==> {}", messages.failure),
            format!("{}Error: {}", indent(1), err),
        ],
    }
}

/// Print submit output to stdout.
pub fn print_submit_outcome<T>(
    outcome: &SubmitOutcome<T>,
    messages: &SubmitMessages,
    describe: impl Fn(&T) -> String,
) {
    for line in format_submit_outcome(outcome, messages, describe) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::FieldErrors;
    use crate::forms::submit::{Receipt, ReceiptKind, SubmitError};
    use crate::generate::GeneratedPage;
    use crate::routes::Route;
    use crate::test_helpers::{sample_blog, setup_fixtures};
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn plural_picks_form() {
        assert_eq!(plural(1, "page", "pages"), "1 page");
        assert_eq!(plural(0, "page", "pages"), "0 pages");
        assert_eq!(plural(3, "page", "pages"), "3 pages");
    }

    // =========================================================================
    // Build
    // =========================================================================

    fn report() -> BuildReport {
        BuildReport {
            pages: vec![
                GeneratedPage {
                    locale: Locale::Es,
                    route: Route::Home,
                    file: "index.html".into(),
                },
                GeneratedPage {
                    locale: Locale::Es,
                    route: Route::About,
                    file: "about/index.html".into(),
                },
                GeneratedPage {
                    locale: Locale::En,
                    route: Route::Home,
                    file: "en/index.html".into(),
                },
            ],
            posts: 2,
            skipped_posts: vec![PathBuf::from("content/blog/borrador.md")],
            stylesheet: "style.0123abcd.css".into(),
            script: "site.89ef4567.js".into(),
            assets_copied: 1,
            sitemap_urls: 3,
        }
    }

    #[test]
    fn build_output_groups_pages_by_locale() {
        let lines = format_build_output(&report(), &[]);
        assert_eq!(
            &lines[..6],
            &[
                "Pages",
                "    es",
                "        001 / → index.html",
                "        002 /about → about/index.html",
                "    en",
                "        001 / → en/index.html",
            ]
        );
    }

    #[test]
    fn build_output_lists_posts_and_skipped_files() {
        let blog = sample_blog();
        let lines = format_build_output(&report(), &blog.posts);
        assert!(lines.contains(&"    001 Inauguramos una nueva escuela (2025-03-01)".to_string()));
        assert!(lines.contains(&"    Skipped: borrador.md".to_string()));
    }

    #[test]
    fn build_output_summarizes_assets() {
        let lines = format_build_output(&report(), &[]);
        assert!(lines.contains(&"    style.0123abcd.css".to_string()));
        assert!(lines.contains(&"    1 file from assets/".to_string()));
        assert!(lines.contains(&"    sitemap.xml (3 URLs)".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "Generated 3 pages in 2 locales, 2 posts"
        );
    }

    // =========================================================================
    // Check
    // =========================================================================

    #[test]
    fn check_output_reports_config_and_missing_keys() {
        let tmp = setup_fixtures();
        let site = Site::load(tmp.path()).unwrap();
        let missing = vec![(Locale::Es, "blog:extra".to_string())];
        let lines = format_check_output(&site, tmp.path(), &missing);
        assert_eq!(&lines[..3], &["Config", "    config.toml", "    Default locale: es"]);
        assert!(lines.contains(&"        Slug: nueva-escuela".to_string()));
        assert!(lines.contains(&"    Skipped: borrador.md".to_string()));
        assert_eq!(lines.last().unwrap(), "    Missing es: blog:extra");
    }

    #[test]
    fn check_output_without_gaps_says_complete() {
        let tmp = setup_fixtures();
        let site = Site::load(tmp.path()).unwrap();
        let lines = format_check_output(&site, tmp.path(), &[]);
        assert_eq!(lines.last().unwrap(), "    complete");
    }

    // =========================================================================
    // Submit
    // =========================================================================

    fn messages() -> SubmitMessages {
        SubmitMessages {
            errors: BTreeMap::from([("email", "Email inválido".to_string())]),
            success: "¡Mensaje enviado correctamente!".into(),
            failure: "No se pudo completar el envío.".into(),
        }
    }

    fn reference(receipt: &Receipt) -> String {
        format!("Reference: {}", receipt.reference)
    }

    #[test]
    fn submit_invalid_lists_field_errors() {
        let outcome: SubmitOutcome<Receipt> = SubmitOutcome::Invalid(FieldErrors::default());
        let lines = format_submit_outcome(&outcome, &messages(), reference);
        assert_eq!(lines, vec!["==> Validation failed", "    email: Email inválido"]);
    }

    #[test]
    fn submit_sent_shows_reference() {
        let outcome = SubmitOutcome::Sent(Receipt {
            kind: ReceiptKind::Contact,
            reference: "SIM-MSG-000001".into(),
        });
        let lines = format_submit_outcome(&outcome, &messages(), reference);
        assert_eq!(
            lines,
            vec!["==> ¡Mensaje enviado correctamente!", "    Reference: SIM-MSG-000001"]
        );
    }

    #[test]
    fn submit_failed_shows_error() {
        let outcome: SubmitOutcome<Receipt> =
            SubmitOutcome::Failed(SubmitError::Network("connection reset".into()));
        let lines = format_submit_outcome(&outcome, &messages(), reference);
        assert_eq!(lines[0], "==> No se pudo completar el envío.");
        assert_eq!(lines[1], "    Error: network error: connection reset");
    }
}
