//! Shared types passed between content loading, rendering and CLI output.

use serde::{Deserialize, Serialize};

/// A link in the site navigation: route path plus localized label.
///
/// Built once per render from the route table; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Locale-prefixed path (`/about/`, `/en/about/`).
    pub href: String,
    pub label: String,
    /// Whether this item is the page being rendered.
    #[serde(default)]
    pub active: bool,
}

/// A blog post loaded from `content/blog/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// Publication date from the filename prefix (`YYYY-MM-DD`).
    pub date: String,
    /// URL slug (filename stem without the date prefix).
    pub slug: String,
    /// First `# heading` in the markdown, or the slug with dashes → spaces.
    pub title: String,
    /// First paragraph of plain text, used for listings and meta description.
    pub summary: String,
    /// Raw markdown body.
    pub body: String,
}
