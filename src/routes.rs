//! The site's route table.
//!
//! Every page is a [`Route`]. A route knows its canonical path, where its
//! HTML lands in the output directory, and whether it appears in the
//! navigation. Paths are prefixed with `/{code}` for the non-default locale.

use crate::i18n::{Locale, Translator};
use crate::types::NavigationItem;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Services,
    Transparency,
    Donations,
    Blog,
    BlogPost(String),
    Contact,
    AdminLogin,
}

/// Routes shown in the main navigation, in display order.
pub const NAVIGATION: [Route; 7] = [
    Route::Home,
    Route::About,
    Route::Services,
    Route::Transparency,
    Route::Donations,
    Route::Blog,
    Route::Contact,
];

/// How many navigation items the footer repeats as quick links.
pub const FOOTER_QUICK_LINKS: usize = 4;

impl Route {
    /// Every fixed route (blog posts excluded).
    pub fn fixed() -> Vec<Route> {
        let mut routes = NAVIGATION.to_vec();
        routes.push(Route::AdminLogin);
        routes
    }

    /// Client-side path without locale prefix or trailing slash.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Services => "/services".to_string(),
            Route::Transparency => "/transparency".to_string(),
            Route::Donations => "/donations".to_string(),
            Route::Blog => "/blog".to_string(),
            Route::BlogPost(slug) => format!("/blog/{slug}"),
            Route::Contact => "/contact".to_string(),
            Route::AdminLogin => "/admin/login".to_string(),
        }
    }

    /// Parse a client-side path back into a route.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        let route = match trimmed {
            "" => Route::Home,
            "/about" => Route::About,
            "/services" => Route::Services,
            "/transparency" => Route::Transparency,
            "/donations" => Route::Donations,
            "/blog" => Route::Blog,
            "/contact" => Route::Contact,
            "/admin/login" => Route::AdminLogin,
            other => {
                let slug = other.strip_prefix("/blog/")?;
                if slug.is_empty() || slug.contains('/') {
                    return None;
                }
                Route::BlogPost(slug.to_string())
            }
        };
        Some(route)
    }

    /// Public URL path for a locale, with trailing slash (`/en/about/`).
    pub fn href(&self, locale: Locale, default_locale: Locale) -> String {
        let prefix = locale_prefix(locale, default_locale);
        match self {
            Route::Home => format!("{prefix}/"),
            other => format!("{prefix}{}/", other.path()),
        }
    }

    /// Output file relative to the site root (`en/about/index.html`).
    pub fn output_file(&self, locale: Locale, default_locale: Locale) -> String {
        let href = self.href(locale, default_locale);
        format!("{}index.html", href.trim_start_matches('/'))
    }

    /// Navigation label key in the `common` namespace.
    pub fn label_key(&self) -> &'static str {
        match self {
            Route::Home => "common:navigation.home",
            Route::About => "common:navigation.about",
            Route::Services => "common:navigation.services",
            Route::Transparency => "common:navigation.transparency",
            Route::Donations => "common:navigation.donations",
            Route::Blog | Route::BlogPost(_) => "common:navigation.blog",
            Route::Contact => "common:navigation.contact",
            Route::AdminLogin => "admin:seo.title",
        }
    }

    /// The navigation entry highlighted while this route is shown.
    pub fn nav_anchor(&self) -> Route {
        match self {
            Route::BlogPost(_) => Route::Blog,
            other => other.clone(),
        }
    }
}

fn locale_prefix(locale: Locale, default_locale: Locale) -> String {
    if locale == default_locale {
        String::new()
    } else {
        format!("/{}", locale.code())
    }
}

/// Build the navigation list for one render, marking `current` as active.
pub fn navigation(tr: &Translator, default_locale: Locale, current: &Route) -> Vec<NavigationItem> {
    let anchor = current.nav_anchor();
    NAVIGATION
        .iter()
        .map(|route| NavigationItem {
            href: route.href(tr.locale(), default_locale),
            label: tr.t(route.label_key()),
            active: *route == anchor,
        })
        .collect()
}

/// Responsive navigation state: a single open/closed flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link always collapses the menu.
    pub fn navigate(&mut self) {
        self.open = false;
    }
}
