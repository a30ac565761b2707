//! The document skeleton and the shared page shell.
//!
//! [`document`] is the bare HTML document (head, SEO tags, assets, analytics
//! attributes). [`shell`] wraps page content in the site header, footer and
//! the floating WhatsApp link.
//!
//! The mobile menu is a hidden checkbox: the hamburger and close buttons are
//! `<label>`s for it and CSS shows the panel while it is checked. Every page
//! load starts with it unchecked, so following a link collapses the menu.

use super::PageContext;
use crate::analytics::Event;
use crate::icons::Icon;
use crate::routes::{self, FOOTER_QUICK_LINKS, Route};
use crate::seo::SeoMetadata;
use crate::types::NavigationItem;
use maud::{DOCTYPE, Markup, html};
use url::Url;

/// Renders the base HTML document structure.
pub fn document(
    ctx: &PageContext,
    route: &Route,
    seo: &SeoMetadata,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    let page_view = Event::PageView {
        path: route.path(),
        title: seo.title.clone(),
    };
    html! {
        (DOCTYPE)
        html lang=(ctx.locale.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (seo.render_head())
                link rel="icon" href=(ctx.config.site.logo);
                link rel="stylesheet" href=(ctx.assets.css);
                script src=(ctx.assets.js) defer {}
            }
            body class=[body_class]
                data-analytics=(page_view.to_json())
                data-analytics-endpoint=[ctx.config.analytics.endpoint()] {
                (content)
            }
        }
    }
}

/// Header, main content, footer and WhatsApp link.
pub fn shell(ctx: &PageContext, route: &Route, seo: &SeoMetadata, content: Markup) -> Markup {
    let common = ctx.tr("common");
    let nav = routes::navigation(&common, ctx.config.i18n.default_locale, route);
    let body = html! {
        (site_header(ctx, route, &nav))
        main #main { (content) }
        (site_footer(ctx, &nav))
        (whatsapp_button(ctx))
    };
    document(ctx, route, seo, None, body)
}

fn site_header(ctx: &PageContext, route: &Route, nav: &[NavigationItem]) -> Markup {
    let t = ctx.tr("common");
    let other = ctx.locale.toggle();
    let counterpart = route.href(other, ctx.config.i18n.default_locale);

    html! {
        header.site-header {
            div.container.header-inner {
                a.logo href=(ctx.href(&Route::Home)) {
                    img src=(ctx.config.site.logo) alt=(t.t("layout.logoAlt")) height="32";
                }
                input.nav-toggle type="checkbox" id="nav-toggle" aria-label=(t.t("layout.openMenu"));
                label.nav-hamburger for="nav-toggle" title=(t.t("layout.openMenu")) {
                    (Icon::Menu.render("icon-md"))
                }
                div.nav-panel {
                    label.nav-close for="nav-toggle" title=(t.t("layout.closeMenu")) {
                        (Icon::X.render("icon-md"))
                    }
                    nav.site-nav {
                        ul {
                            @for item in nav {
                                li class=[item.active.then_some("current")] {
                                    a href=(item.href) aria-current=[item.active.then_some("page")] {
                                        (item.label)
                                    }
                                }
                            }
                        }
                    }
                    div.header-actions {
                        a.lang-toggle href=(counterpart) hreflang=(other.code())
                            title=(t.t("layout.switchLanguage")) {
                            (Icon::Globe.render("icon-sm"))
                            span { (ctx.locale.code().to_uppercase()) }
                        }
                        a.admin-link href=(ctx.href(&Route::AdminLogin)) {
                            (Icon::LogIn.render("icon-sm"))
                            span { (t.t("layout.admin")) }
                        }
                        a.btn.btn-primary href=(ctx.href(&Route::Donations)) {
                            (t.t("buttons.donate"))
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(ctx: &PageContext, nav: &[NavigationItem]) -> Markup {
    let t = ctx.tr("common");
    let contact = &ctx.config.contact;
    let tel: String = contact.phone.chars().filter(|c| !c.is_whitespace()).collect();

    html! {
        footer.site-footer {
            div.container.footer-grid {
                div.footer-brand {
                    a.logo href=(ctx.href(&Route::Home)) {
                        img src=(ctx.config.site.logo) alt=(t.t("layout.logoAlt")) height="32";
                    }
                    p { (t.t("footer.description")) }
                }
                div.footer-links {
                    h3 { (t.t("footer.quickLinks")) }
                    ul {
                        @for item in nav.iter().take(FOOTER_QUICK_LINKS) {
                            li { a href=(item.href) { (item.label) } }
                        }
                    }
                }
                div.footer-contact {
                    h3 { (t.t("footer.contact.title")) }
                    p { a href={ "mailto:" (contact.email) } { (contact.email) } }
                    p { a href={ "tel:" (tel) } { (contact.phone) } }
                }
            }
            div.footer-bottom {
                p { (t.t("footer.copyright")) }
            }
        }
    }
}

fn whatsapp_button(ctx: &PageContext) -> Markup {
    let t = ctx.tr("common");
    let href = whatsapp_url(&ctx.config.contact.whatsapp_number, &t.t("layout.whatsappText"));
    html! {
        a.whatsapp-float href=(href) target="_blank" rel="noopener noreferrer"
            aria-label=(t.t("layout.whatsappLabel")) {
            (Icon::MessageCircle.render("icon-lg"))
            span.whatsapp-tooltip { (t.t("layout.whatsappTooltip")) }
        }
    }
}

/// `wa.me` link with a prefilled, URL-encoded message.
fn whatsapp_url(number: &str, text: &str) -> String {
    let base = format!("https://wa.me/{number}");
    Url::parse_with_params(&base, &[("text", text)])
        .map(String::from)
        .unwrap_or(base)
}
