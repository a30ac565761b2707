//! Static site generation.
//!
//! Loads everything from the content directory (config, translation
//! overrides, blog posts), renders every route in both locales, and writes
//! the result to the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Home (default locale at the root)
//! ├── about/index.html
//! ├── blog/index.html
//! ├── blog/nueva-escuela/index.html
//! ├── admin/login/index.html
//! ├── en/                        # Other locale under its code
//! │   ├── index.html
//! │   └── ...
//! ├── style.3f9a1c02.css         # Fingerprinted assets
//! ├── site.81be44d0.js
//! ├── sitemap.xml
//! └── logo-almare.jpg            # Copied from content/assets/
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (colors injected from config)
//! - `static/site.js`: Analytics beacon, form validation, presets
//!
//! Both are written under a name carrying the first 8 hex digits of their
//! SHA-256, so a changed file never hits a stale browser cache.
//!
//! ## Rendering
//!
//! Pages are independent, so rendering runs on rayon's pool. Files are
//! written afterwards on the calling thread.

use crate::blog::{self, BlogError, BlogIndex};
use crate::config::{self, ConfigError, SiteConfig};
use crate::i18n::{Catalog, I18nError, Locale};
use crate::pages::{Assets, PageContext, render_route};
use crate::routes::Route;
use maud::{Markup, PreEscaped, html};
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    I18n(#[from] I18nError),
    #[error(transparent)]
    Blog(#[from] BlogError),
    #[error("failed to copy assets: {0}")]
    Assets(#[from] walkdir::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub locale: Locale,
    pub route: Route,
    /// Path relative to the output root.
    pub file: String,
}

/// What a build produced, for CLI output.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages: Vec<GeneratedPage>,
    pub posts: usize,
    pub skipped_posts: Vec<PathBuf>,
    pub stylesheet: String,
    pub script: String,
    pub assets_copied: usize,
    pub sitemap_urls: usize,
}

/// Everything loaded from a content directory.
pub struct Site {
    pub config: SiteConfig,
    pub catalog: Catalog,
    pub blog: BlogIndex,
}

impl Site {
    pub fn load(source: &Path) -> Result<Self, GenerateError> {
        Ok(Self {
            config: config::load_config(source)?,
            catalog: Catalog::load(source)?,
            blog: blog::load_posts(source)?,
        })
    }

    /// Every (locale, route) pair the site serves, fixed routes first.
    pub fn jobs(&self) -> Vec<(Locale, Route)> {
        let mut routes = Route::fixed();
        routes.extend(
            self.blog
                .posts
                .iter()
                .map(|post| Route::BlogPost(post.slug.clone())),
        );
        Locale::ALL
            .iter()
            .flat_map(|locale| routes.iter().map(move |route| (*locale, route.clone())))
            .collect()
    }
}

/// Load the content directory and build the site from it.
pub fn generate(source: &Path, output_dir: &Path) -> Result<BuildReport, GenerateError> {
    let site = Site::load(source)?;
    render_site(&site, source, output_dir)
}

/// Build an already loaded site. `source` is only read for `assets/`.
pub fn render_site(
    site: &Site,
    source: &Path,
    output_dir: &Path,
) -> Result<BuildReport, GenerateError> {
    let default_locale = site.config.i18n.default_locale;

    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&site.config.colors),
        CSS_STATIC
    );
    let stylesheet = fingerprinted_name("style", "css", &css);
    let script = fingerprinted_name("site", "js", JS);
    let assets = Assets {
        css: format!("/{stylesheet}"),
        js: format!("/{script}"),
    };

    let rendered: Vec<(GeneratedPage, Markup)> = site
        .jobs()
        .into_par_iter()
        .filter_map(|(locale, route)| {
            let ctx = PageContext {
                config: &site.config,
                catalog: &site.catalog,
                locale,
                assets: &assets,
            };
            let markup = render_route(&ctx, &route, &site.blog)?;
            let file = route.output_file(locale, default_locale);
            Some((
                GeneratedPage {
                    locale,
                    route,
                    file,
                },
                markup,
            ))
        })
        .collect();

    fs::create_dir_all(output_dir)?;
    let assets_copied = copy_assets(&source.join("assets"), output_dir)?;
    fs::write(output_dir.join(&stylesheet), &css)?;
    fs::write(output_dir.join(&script), JS)?;

    let mut pages = Vec::with_capacity(rendered.len());
    for (page, markup) in rendered {
        let path = output_dir.join(&page.file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, markup.into_string())?;
        pages.push(page);
    }

    let urls: Vec<String> = pages
        .iter()
        .filter(|page| page.route != Route::AdminLogin)
        .map(|page| {
            site.config
                .absolute_url(&page.route.href(page.locale, default_locale))
        })
        .collect();
    fs::write(output_dir.join("sitemap.xml"), render_sitemap(&urls).into_string())?;

    Ok(BuildReport {
        pages,
        posts: site.blog.posts.len(),
        skipped_posts: site.blog.skipped.clone(),
        stylesheet,
        script,
        assets_copied,
        sitemap_urls: urls.len(),
    })
}

/// `style.css` → `style.{first 8 hex of sha256}.css`.
fn fingerprinted_name(stem: &str, ext: &str, content: &str) -> String {
    let digest = format!("{:x}", Sha256::digest(content.as_bytes()));
    format!("{stem}.{}.{ext}", &digest[..8])
}

/// Copy `content/assets/` into the output root. Returns the file count.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        return Ok(0);
    }
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Public pages for crawlers. The admin login is left out.
fn render_sitemap(urls: &[String]) -> Markup {
    html! {
        (PreEscaped(r#"<?xml version="1.0" encoding="UTF-8"?>"#))
        urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" {
            @for address in urls {
                url { loc { (address) } }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;
    use tempfile::TempDir;

    fn build() -> (TempDir, TempDir, BuildReport) {
        let content = setup_fixtures();
        let out = TempDir::new().unwrap();
        let report = generate(content.path(), out.path()).unwrap();
        (content, out, report)
    }

    #[test]
    fn writes_every_route_in_both_locales() {
        let (_content, out, report) = build();
        // 8 fixed routes + 2 posts, twice
        assert_eq!(report.pages.len(), 20);
        for file in [
            "index.html",
            "about/index.html",
            "donations/index.html",
            "admin/login/index.html",
            "blog/nueva-escuela/index.html",
            "en/index.html",
            "en/contact/index.html",
            "en/blog/campana-salud/index.html",
        ] {
            assert!(out.path().join(file).is_file(), "{file}");
        }
    }

    #[test]
    fn english_pages_are_english() {
        let (_content, out, _) = build();
        let html = fs::read_to_string(out.path().join("en/donations/index.html")).unwrap();
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("Make a donation"));
    }

    #[test]
    fn page_script_rejects_radix_prefixed_numbers() {
        assert!(JS.contains("/^[+-]?0[xXbBoO]/.test(trimmed)"));
    }

    #[test]
    fn assets_are_fingerprinted_and_linked() {
        let (_content, out, report) = build();
        assert!(report.stylesheet.starts_with("style."));
        assert!(report.stylesheet.ends_with(".css"));
        assert_eq!(report.stylesheet.len(), "style.12345678.css".len());

        let css = fs::read_to_string(out.path().join(&report.stylesheet)).unwrap();
        assert!(css.contains("--color-primary: #2563eb"));

        let home = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(home.contains(&format!(r#"href="/{}""#, report.stylesheet)));
        assert!(home.contains(&format!(r#"src="/{}""#, report.script)));
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = fingerprinted_name("style", "css", "body{}");
        let b = fingerprinted_name("style", "css", "body{color:red}");
        assert_ne!(a, b);
        assert_eq!(a, fingerprinted_name("style", "css", "body{}"));
    }

    #[test]
    fn content_assets_are_copied() {
        let (_content, out, report) = build();
        assert_eq!(report.assets_copied, 2);
        assert!(out.path().join("robots.txt").is_file());
        assert!(out.path().join("favicon.svg").is_file());
    }

    #[test]
    fn sitemap_lists_public_pages() {
        let (_content, out, report) = build();
        let sitemap = fs::read_to_string(out.path().join("sitemap.xml")).unwrap();
        assert!(sitemap.starts_with("<?xml"));
        assert!(sitemap.contains("<loc>https://almare.org/</loc>"));
        assert!(sitemap.contains("<loc>https://almare.org/en/blog/nueva-escuela/</loc>"));
        assert!(!sitemap.contains("admin"));
        assert_eq!(report.sitemap_urls, 18);
    }

    #[test]
    fn undated_posts_are_reported() {
        let (_content, _out, report) = build();
        assert_eq!(report.posts, 2);
        assert_eq!(report.skipped_posts.len(), 1);
        assert!(report.skipped_posts[0].ends_with("borrador.md"));
    }

    #[test]
    fn translation_overrides_are_applied() {
        let content = setup_fixtures();
        fs::create_dir_all(content.path().join("locales")).unwrap();
        fs::write(
            content.path().join("locales/en.toml"),
            "[home.hero]\ntitle = \"Together we grow\"\n",
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        generate(content.path(), out.path()).unwrap();
        let html = fs::read_to_string(out.path().join("en/index.html")).unwrap();
        assert!(html.contains("Together we grow"));
    }

    #[test]
    fn english_default_locale_moves_spanish_under_prefix() {
        let content = setup_fixtures();
        fs::write(
            content.path().join("config.toml"),
            "[i18n]\ndefault_locale = \"en\"\n",
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        generate(content.path(), out.path()).unwrap();
        let root = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(root.contains(r#"<html lang="en">"#));
        assert!(out.path().join("es/about/index.html").is_file());
    }

    #[test]
    fn invalid_config_aborts_build() {
        let content = setup_fixtures();
        fs::write(
            content.path().join("config.toml"),
            "[donations]\ndefault_amount = 2\n",
        )
        .unwrap();
        let out = TempDir::new().unwrap();
        let err = generate(content.path(), out.path()).unwrap_err();
        assert!(matches!(err, GenerateError::Config(_)));
    }
}
