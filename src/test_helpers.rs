//! Shared test utilities.
//!
//! Provides a ready-made rendering [`Fixture`] (stock config, embedded
//! catalog, default asset URLs), a one-call [`render`] for route-level
//! assertions, and access to the sample content under `fixtures/content/`.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render(&Route::Contact, Locale::En);
//! assert!(html.contains("Send us a message"));
//!
//! let mut fixture = Fixture::new();
//! fixture.config.contact.email = "hola@example.org".into();
//! let html = fixture.render(&Route::Contact, Locale::Es);
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::blog::{BlogIndex, load_posts};
use crate::config::SiteConfig;
use crate::i18n::{Catalog, Locale};
use crate::pages::{Assets, PageContext, render_route};
use crate::routes::Route;

// =========================================================================
// Fixture setup
// =========================================================================

/// Path of the checked-in sample content.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content")
}

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    copy_dir_recursive(&fixtures_dir(), tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The fixture blog: `nueva-escuela` (newest) and `campana-salud`.
pub fn sample_blog() -> BlogIndex {
    load_posts(&fixtures_dir()).unwrap()
}

// =========================================================================
// Rendering
// =========================================================================

/// Everything a page renderer borrows, owned in one place so tests can
/// tweak a field before rendering.
pub struct Fixture {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub assets: Assets,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            config: SiteConfig::default(),
            catalog: Catalog::embedded().unwrap(),
            assets: Assets::default(),
        }
    }

    pub fn ctx(&self, locale: Locale) -> PageContext<'_> {
        PageContext {
            config: &self.config,
            catalog: &self.catalog,
            locale,
            assets: &self.assets,
        }
    }

    /// Render `route` with pristine forms. Panics on an unknown blog slug.
    pub fn render(&self, route: &Route, locale: Locale) -> String {
        render_route(&self.ctx(locale), route, &sample_blog())
            .unwrap_or_else(|| panic!("route {route:?} did not render"))
            .into_string()
    }
}

/// Render `route` with the stock fixture.
pub fn render(route: &Route, locale: Locale) -> String {
    Fixture::new().render(route, locale)
}
