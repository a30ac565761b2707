//! Page renderers.
//!
//! One module per route. Every renderer takes a [`PageContext`] (config,
//! translations, locale, asset URLs) and returns a complete document. All
//! pages except the admin login are wrapped in the [`layout`] shell.
//!
//! Form pages take the form model as an argument so the same renderer shows
//! a pristine form at build time or a form carrying values and inline errors.

pub mod about;
pub mod admin_login;
pub mod blog;
pub mod components;
pub mod contact;
pub mod donations;
pub mod home;
pub mod layout;
pub mod services;
pub mod transparency;

use crate::blog::BlogIndex;
use crate::config::SiteConfig;
use crate::forms::contact::ContactForm;
use crate::forms::donation::DonationForm;
use crate::forms::login::LoginForm;
use crate::i18n::{Catalog, Locale, Translator};
use crate::routes::Route;
use crate::seo::{SeoInput, SeoMetadata, generate_page_seo};
use maud::Markup;

/// URLs of the fingerprinted stylesheet and script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assets {
    pub css: String,
    pub js: String,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            css: "/style.css".to_string(),
            js: "/site.js".to_string(),
        }
    }
}

/// Everything a renderer needs besides its own content.
#[derive(Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub catalog: &'a Catalog,
    pub locale: Locale,
    pub assets: &'a Assets,
}

impl<'a> PageContext<'a> {
    pub fn tr(&self, namespace: &'static str) -> Translator<'a> {
        self.catalog.translator(self.locale, namespace)
    }

    /// Link to `route` in the current locale.
    pub fn href(&self, route: &Route) -> String {
        route.href(self.locale, self.config.i18n.default_locale)
    }

    pub fn seo(&self, route: &Route, title: &str, description: &str) -> SeoMetadata {
        generate_page_seo(
            self.config,
            &SeoInput {
                route,
                locale: self.locale,
                title,
                description,
                image: None,
                article: false,
            },
        )
    }

    pub fn currency(&self) -> &'a str {
        &self.config.donations.currency_symbol
    }
}

/// Render a route with pristine forms. `None` for a blog slug that doesn't exist.
pub fn render_route(ctx: &PageContext, route: &Route, blog: &BlogIndex) -> Option<Markup> {
    let page = match route {
        Route::Home => home::render(ctx),
        Route::About => about::render(ctx),
        Route::Services => services::render(ctx),
        Route::Transparency => transparency::render(ctx),
        Route::Donations => {
            let donations = &ctx.config.donations;
            donations::render(
                ctx,
                &DonationForm::new(&donations.presets, donations.default_amount),
            )
        }
        Route::Blog => blog::render_index(ctx, &blog.posts),
        Route::BlogPost(slug) => blog::render_post(ctx, blog.find(slug)?),
        Route::Contact => contact::render(ctx, &ContactForm::new()),
        Route::AdminLogin => admin_login::render(ctx, &LoginForm::new()),
    };
    Some(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{render, sample_blog};

    #[test]
    fn every_fixed_route_renders_in_both_locales() {
        for locale in Locale::ALL {
            for route in Route::fixed() {
                let html = render(&route, locale);
                assert!(html.starts_with("<!DOCTYPE html>"), "{route:?}");
                assert!(
                    html.contains(&format!(r#"<html lang="{}">"#, locale.code())),
                    "{route:?}"
                );
            }
        }
    }

    #[test]
    fn unknown_blog_post_is_none() {
        let config = SiteConfig::default();
        let catalog = Catalog::embedded().unwrap();
        let assets = Assets::default();
        let ctx = PageContext {
            config: &config,
            catalog: &catalog,
            locale: Locale::Es,
            assets: &assets,
        };
        let blog = sample_blog();
        assert!(render_route(&ctx, &Route::BlogPost("nope".into()), &blog).is_none());
        assert!(render_route(&ctx, &Route::BlogPost("nueva-escuela".into()), &blog).is_some());
    }
}
