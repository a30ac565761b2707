//! # Almare Site
//!
//! Static site generator for the Almare nonprofit website. Every page is
//! rendered in Spanish and English from Maud templates compiled into the
//! binary; the content directory only carries what changes per deployment
//! (config, translation overrides, blog posts, images).
//!
//! ```text
//! content/  →  Site::load  →  render (rayon)  →  dist/
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`routes`] | The closed set of pages and their localized URLs |
//! | [`i18n`] | Locales, translation catalogs, `{{name}}` interpolation |
//! | [`config`] | `config.toml` loading, validation, merging, and color CSS |
//! | [`types`] | Shared content types (navigation items, blog posts) |
//! | [`forms`] | Contact, donation and admin login forms: schemas, validation, simulated submit |
//! | [`analytics`] | Page-view, contact and donation events, and where they are recorded |
//! | [`seo`] | Title, description, canonical and Open Graph metadata per page |
//! | [`blog`] | Date-prefixed markdown posts |
//! | [`icons`] | Inline SVG icons |
//! | [`pages`] | Layout shell and one renderer per route |
//! | [`generate`] | Renders every (locale, route) pair and writes the output tree |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Default Locale at the Root
//!
//! The default locale (Spanish unless configured) is served at `/`, the other
//! under `/{code}/`. The language toggle in the header links to the same page
//! in the other locale, so switching language never loses the visitor's place.
//!
//! ## Forms Without a Backend
//!
//! Submissions go through a [`forms::submit::Gateway`]. The shipped gateway
//! simulates latency and succeeds for contact and donation; admin sign-in is
//! always reported as unavailable. The page script mirrors the same rules,
//! which are serialized into `data-rules` attributes from the Rust schemas so
//! both sides agree on what is valid.

pub mod analytics;
pub mod blog;
pub mod config;
pub mod forms;
pub mod generate;
pub mod i18n;
pub mod icons;
pub mod output;
pub mod pages;
pub mod routes;
pub mod seo;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
