//! Blog posts from `content/blog/`.
//!
//! Each post is one markdown file named `YYYY-MM-DD-slug.md`. The date
//! prefix orders posts (newest first) and the rest of the stem is the URL
//! slug. Files that don't follow the convention are skipped and reported,
//! so drafts can sit next to published posts. The date must exist on the
//! calendar and the slug may only hold `a-z`, `0-9` and `-`.
//!
//! ```text
//! content/blog/
//! ├── 2025-03-01-nueva-escuela.md    → /blog/nueva-escuela/
//! ├── 2024-11-20-campana-salud.md    → /blog/campana-salud/
//! └── borrador.md                     (skipped)
//! ```
//!
//! The title is the first `# heading`; without one, the slug with dashes
//! turned into spaces. Posts are not translated: the same post is rendered
//! under both locales.

use crate::types::BlogPost;
use pulldown_cmark::{Parser, html as md_html};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read blog directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Duplicate blog slug '{slug}' in {path}")]
    DuplicateSlug { slug: String, path: PathBuf },
}

/// Loaded posts plus the files that were ignored.
#[derive(Debug, Default)]
pub struct BlogIndex {
    /// Newest first.
    pub posts: Vec<BlogPost>,
    pub skipped: Vec<PathBuf>,
}

impl BlogIndex {
    pub fn find(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }
}

/// Load every post under `content_root/blog`. A missing directory is an
/// empty blog.
pub fn load_posts(content_root: &Path) -> Result<BlogIndex, BlogError> {
    let dir = content_root.join("blog");
    let mut index = BlogIndex::default();
    if !dir.is_dir() {
        return Ok(index);
    }

    let mut seen = BTreeSet::new();
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        let is_markdown = path
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !entry.file_type().is_file() || !is_markdown {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let Some((date, slug)) = parse_post_name(&stem) else {
            index.skipped.push(path.to_path_buf());
            continue;
        };
        if !seen.insert(slug.to_string()) {
            return Err(BlogError::DuplicateSlug {
                slug: slug.to_string(),
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        index.posts.push(parse_post(date, slug, &content));
    }

    index
        .posts
        .sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
    Ok(index)
}

/// Split `2025-03-01-nueva-escuela` into date and slug.
fn parse_post_name(stem: &str) -> Option<(&str, &str)> {
    let date = stem.get(..10)?;
    let slug = stem.get(10..)?.strip_prefix('-')?;
    if !is_date(date) || !is_slug(slug) {
        return None;
    }
    Some((date, slug))
}

/// Lowercase ASCII letters, digits and dashes, with at least one letter or
/// digit. Anything else could escape `blog/` in the output tree or break
/// the URL.
fn is_slug(slug: &str) -> bool {
    slug.bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && slug.bytes().any(|b| b.is_ascii_alphanumeric())
}

fn is_date(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };
    let all_digits = |p: &str, len: usize| p.len() == len && p.bytes().all(|b| b.is_ascii_digit());
    if !(all_digits(year, 4) && all_digits(month, 2) && all_digits(day, 2)) {
        return false;
    }
    let year: u32 = year.parse().unwrap_or(0);
    let month: u32 = month.parse().unwrap_or(0);
    let day: u32 = day.parse().unwrap_or(0);
    let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}

fn parse_post(date: &str, slug: &str, content: &str) -> BlogPost {
    let heading = content
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string());

    // The title is rendered separately; drop its line from the body.
    let body = match &heading {
        Some(_) => {
            let mut dropped = false;
            content
                .lines()
                .filter(|line| {
                    if !dropped && line.starts_with("# ") {
                        dropped = true;
                        return false;
                    }
                    true
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        None => content.to_string(),
    };

    BlogPost {
        date: date.to_string(),
        slug: slug.to_string(),
        title: heading.unwrap_or_else(|| slug.replace('-', " ")),
        summary: summary(&body),
        body: body.trim().to_string(),
    }
}

/// First paragraph of prose: consecutive non-blank lines that aren't
/// headings, images or list items, joined with spaces.
fn summary(body: &str) -> String {
    body.split("\n\n")
        .map(str::trim)
        .find(|block| {
            !block.is_empty()
                && !block.starts_with('#')
                && !block.starts_with("![")
                && !block.starts_with("- ")
                && !block.starts_with("* ")
        })
        .map(|block| block.lines().map(str::trim).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}

/// Markdown → HTML.
pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}
