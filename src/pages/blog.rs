//! Blog listing and single-post pages.

use super::PageContext;
use super::components::{Hero, card, hero};
use super::layout;
use crate::blog::render_markdown;
use crate::icons::Icon;
use crate::routes::Route;
use crate::seo::{SeoInput, generate_page_seo};
use crate::types::BlogPost;
use maud::{Markup, PreEscaped, html};

pub fn render_index(ctx: &PageContext, posts: &[BlogPost]) -> Markup {
    let t = ctx.tr("blog");
    let title = t.t("hero.title");
    let subtitle = t.t("hero.subtitle");
    let seo = ctx.seo(&Route::Blog, &title, &subtitle);

    let content = html! {
        (hero(&Hero {
            title: &title,
            subtitle: &subtitle,
            image: None,
            cta: None,
            large: false,
        }))

        section.section {
            div.container.narrow {
                @if posts.is_empty() {
                    p.empty-state { (t.t("empty")) }
                } @else {
                    div.post-list {
                        @for post in posts {
                            @let href = ctx.href(&Route::BlogPost(post.slug.clone()));
                            (card(html! {
                                article.post-summary {
                                    time.post-date datetime=(post.date) {
                                        (Icon::Calendar.render("icon-sm")) " " (post.date)
                                    }
                                    h2.card-title { a href=(href) { (post.title) } }
                                    p.card-text { (post.summary) }
                                    a.card-link href=(href) { (t.t("readMore")) " →" }
                                }
                            }))
                        }
                    }
                }
            }
        }
    };

    layout::shell(ctx, &Route::Blog, &seo, content)
}

pub fn render_post(ctx: &PageContext, post: &BlogPost) -> Markup {
    let t = ctx.tr("blog");
    let route = Route::BlogPost(post.slug.clone());
    let seo = generate_page_seo(
        ctx.config,
        &SeoInput {
            route: &route,
            locale: ctx.locale,
            title: &post.title,
            description: &post.summary,
            image: None,
            article: true,
        },
    );

    let content = html! {
        article.section {
            div.container.narrow {
                a.back-link href=(ctx.href(&Route::Blog)) {
                    (Icon::ArrowLeft.render("icon-sm")) (t.t("back"))
                }
                header.post-header {
                    h1.post-title { (post.title) }
                    time.post-date datetime=(post.date) { (post.date) }
                }
                div.prose {
                    (PreEscaped(render_markdown(&post.body)))
                }
            }
        }
    };

    layout::shell(ctx, &route, &seo, content)
}
