use super::PageContext;
use super::components::{Hero, card, hero, icon_badge};
use super::layout;
use crate::icons::Icon;
use crate::routes::Route;
use maud::{Markup, html};

const MISSION_IMAGE: &str = "/marcha.jpeg";

/// Headline figures shown under the hero.
const IMPACT: [(Icon, &str, &str); 4] = [
    (Icon::Users, "2,500+", "impact.familiesHelped"),
    (Icon::Calendar, "45", "impact.projectsCompleted"),
    (Icon::Heart, "180", "impact.volunteersActive"),
    (Icon::BookOpen, "7", "impact.yearsOfWork"),
];

pub fn render(ctx: &PageContext) -> Markup {
    let t = ctx.tr("home");
    let title = t.t("hero.title");
    let subtitle = t.t("hero.subtitle");
    let seo = ctx.seo(&Route::Home, &title, &subtitle);
    let about = ctx.href(&Route::About);
    let cta = t.t("hero.cta");

    let actions = [
        ("actions.donate", Route::Donations, t.t("common:buttons.donate")),
        ("actions.volunteer", Route::Contact, t.t("actions.volunteer.link")),
        ("actions.transparency", Route::Transparency, t.t("actions.transparency.link")),
    ];

    let content = html! {
        (hero(&Hero {
            title: &title,
            subtitle: &subtitle,
            image: Some(ctx.config.site.default_image.as_str()),
            cta: Some((cta.as_str(), about.as_str())),
            large: true,
        }))

        section.section.section-muted {
            div.container {
                h2.section-title { (t.t("impact.title")) }
                div.stats-grid {
                    @for (icon, value, label) in IMPACT {
                        div.stat {
                            (icon_badge(icon))
                            div.stat-value { (value) }
                            div.stat-label { (t.t(label)) }
                        }
                    }
                }
            }
        }

        section.section {
            div.container.split {
                div {
                    h2.section-title.text-left { (t.t("mission.title")) }
                    p.lead { (t.t("mission.description")) }
                    a.btn.btn-primary href=(about) { (t.t("common:buttons.learnMore")) }
                }
                div {
                    img.rounded.shadow src=(MISSION_IMAGE) alt=(t.t("mission.imageAlt")) loading="lazy";
                }
            }
        }

        section.section.section-muted {
            div.container.card-grid {
                @for (key, route, link) in &actions {
                    (card(html! {
                        h3.card-title { (t.t(&format!("{key}.title"))) }
                        p.card-text { (t.t(&format!("{key}.description"))) }
                        a.card-link href=(ctx.href(route)) { (link) " →" }
                    }))
                }
            }
        }
    };

    layout::shell(ctx, &Route::Home, &seo, content)
}
