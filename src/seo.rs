//! Per-page search and social metadata.
//!
//! Every page renderer builds one [`SeoInput`] and calls
//! [`generate_page_seo`]; the resulting [`SeoMetadata`] is rendered into the
//! document `<head>` by [`SeoMetadata::render_head`].

use crate::config::SiteConfig;
use crate::i18n::Locale;
use crate::routes::Route;
use maud::{Markup, html};

/// What a page knows about itself.
#[derive(Debug, Clone)]
pub struct SeoInput<'a> {
    pub route: &'a Route,
    pub locale: Locale,
    /// Page title without the site name.
    pub title: &'a str,
    pub description: &'a str,
    /// Site-relative image path; falls back to `site.default_image`.
    pub image: Option<&'a str>,
    /// Blog posts are `article`, everything else `website`.
    pub article: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeoMetadata {
    /// `"{page} | {site}"`
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub locale: Locale,
    /// Same page in the other locale.
    pub alternate: (Locale, String),
    /// Same page in the default locale, for `hreflang="x-default"`.
    pub x_default: String,
    pub image: String,
    pub og_type: &'static str,
    pub site_name: String,
}

pub fn generate_page_seo(config: &SiteConfig, input: &SeoInput) -> SeoMetadata {
    let default_locale = config.i18n.default_locale;
    let url_for = |locale: Locale| config.absolute_url(&input.route.href(locale, default_locale));
    let other = input.locale.toggle();
    let image = input.image.unwrap_or(&config.site.default_image);

    SeoMetadata {
        title: page_title(input.title, &config.site.name),
        description: input.description.to_string(),
        canonical: url_for(input.locale),
        locale: input.locale,
        alternate: (other, url_for(other)),
        x_default: url_for(default_locale),
        image: config.absolute_url(image),
        og_type: if input.article { "article" } else { "website" },
        site_name: config.site.name.clone(),
    }
}

fn page_title(page: &str, site: &str) -> String {
    if page.is_empty() || page == site {
        site.to_string()
    } else {
        format!("{page} | {site}")
    }
}

impl SeoMetadata {
    /// `<title>`, description, canonical + hreflang links, Open Graph and
    /// Twitter card tags.
    pub fn render_head(&self) -> Markup {
        let (alt_locale, alt_url) = &self.alternate;
        html! {
            title { (self.title) }
            meta name="description" content=(self.description);
            link rel="canonical" href=(self.canonical);
            link rel="alternate" hreflang=(self.locale.code()) href=(self.canonical);
            link rel="alternate" hreflang=(alt_locale.code()) href=(alt_url);
            link rel="alternate" hreflang="x-default" href=(self.x_default);
            meta property="og:type" content=(self.og_type);
            meta property="og:site_name" content=(self.site_name);
            meta property="og:title" content=(self.title);
            meta property="og:description" content=(self.description);
            meta property="og:url" content=(self.canonical);
            meta property="og:image" content=(self.image);
            meta property="og:locale" content=(self.locale.og_locale());
            meta property="og:locale:alternate" content=(alt_locale.og_locale());
            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:title" content=(self.title);
            meta name="twitter:description" content=(self.description);
            meta name="twitter:image" content=(self.image);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input<'a>(route: &'a Route, locale: Locale) -> SeoInput<'a> {
        SeoInput {
            route,
            locale,
            title: "Donaciones",
            description: "Haz una donación",
            image: None,
            article: false,
        }
    }

    #[test]
    fn title_appends_site_name() {
        let config = SiteConfig::default();
        let seo = generate_page_seo(&config, &input(&Route::Donations, Locale::Es));
        assert_eq!(seo.title, "Donaciones | Almare");
    }

    #[test]
    fn site_name_alone_is_not_repeated() {
        assert_eq!(page_title("Almare", "Almare"), "Almare");
        assert_eq!(page_title("", "Almare"), "Almare");
    }

    #[test]
    fn canonical_and_alternate_urls_follow_locale() {
        let config = SiteConfig::default();
        let seo = generate_page_seo(&config, &input(&Route::Donations, Locale::En));
        assert_eq!(seo.canonical, "https://almare.org/en/donations/");
        assert_eq!(
            seo.alternate,
            (Locale::Es, "https://almare.org/donations/".to_string())
        );
        assert_eq!(seo.x_default, "https://almare.org/donations/");
    }

    #[test]
    fn image_defaults_to_site_banner() {
        let config = SiteConfig::default();
        let seo = generate_page_seo(&config, &input(&Route::Home, Locale::Es));
        assert_eq!(seo.image, "https://almare.org/banner.jpeg");

        let mut custom = input(&Route::Home, Locale::Es);
        custom.image = Some("/nino-escuela.jpg");
        let seo = generate_page_seo(&config, &custom);
        assert_eq!(seo.image, "https://almare.org/nino-escuela.jpg");
    }

    #[test]
    fn head_contains_open_graph_tags() {
        let config = SiteConfig::default();
        let head = generate_page_seo(&config, &input(&Route::About, Locale::En))
            .render_head()
            .into_string();
        assert!(head.contains("<title>Donaciones | Almare</title>"));
        assert!(head.contains(r#"<meta property="og:locale" content="en_US">"#));
        assert!(head.contains(r#"<meta property="og:type" content="website">"#));
        assert!(head.contains(r#"hreflang="es" href="https://almare.org/about/""#));
        assert!(head.contains(r#"<link rel="canonical" href="https://almare.org/en/about/">"#));
    }

    #[test]
    fn head_escapes_description() {
        let config = SiteConfig::default();
        let mut seo_input = input(&Route::Blog, Locale::Es);
        seo_input.description = r#"Say "hi" <b>"#;
        let head = generate_page_seo(&config, &seo_input).render_head().into_string();
        assert!(head.contains("Say &quot;hi&quot; &lt;b&gt;"));
    }
}
