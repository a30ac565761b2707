use super::PageContext;
use super::components::{Hero, card, hero, icon_badge};
use super::layout;
use crate::icons::Icon;
use crate::routes::Route;
use maud::{Markup, html};

const HERO_IMAGE: &str = "https://images.pexels.com/photos/6646971/pexels-photo-6646971.jpeg";

const VALUES: [(Icon, &str); 4] = [
    (Icon::Eye, "transparency"),
    (Icon::Target, "impact"),
    (Icon::Users, "community"),
    (Icon::Leaf, "sustainability"),
];

struct TeamMember {
    name: &'static str,
    role: &'static str,
    photo: &'static str,
}

const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "María González",
        role: "team.roles.director",
        photo: "https://images.pexels.com/photos/3760263/pexels-photo-3760263.jpeg",
    },
    TeamMember {
        name: "Carlos Rodríguez",
        role: "team.roles.coordinator",
        photo: "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg",
    },
    TeamMember {
        name: "Ana Martínez",
        role: "team.roles.communication",
        photo: "https://images.pexels.com/photos/3760067/pexels-photo-3760067.jpeg",
    },
];

pub fn render(ctx: &PageContext) -> Markup {
    let t = ctx.tr("about");
    let title = t.t("hero.title");
    let subtitle = t.t("hero.subtitle");
    let seo = ctx.seo(&Route::About, &title, &subtitle);

    let content = html! {
        (hero(&Hero {
            title: &title,
            subtitle: &subtitle,
            image: Some(HERO_IMAGE),
            cta: None,
            large: false,
        }))

        section.section {
            div.container.narrow.text-center {
                h2.section-title { (t.t("story.title")) }
                p.lead { (t.t("story.description")) }
            }
        }

        section.section.section-muted {
            div.container {
                h2.section-title { (t.t("values.title")) }
                div.card-grid.card-grid-4 {
                    @for (icon, key) in VALUES {
                        (card(html! {
                            div.text-center {
                                (icon_badge(icon))
                                h3.card-title { (t.t(&format!("values.{key}"))) }
                                p.card-text { (t.t(&format!("valueDescriptions.{key}"))) }
                            }
                        }))
                    }
                }
            }
        }

        section.section {
            div.container {
                h2.section-title { (t.t("team.title")) }
                div.card-grid {
                    @for member in &TEAM {
                        (card(html! {
                            div.text-center {
                                img.avatar src=(member.photo) alt=(member.name) loading="lazy";
                                h3.card-title { (member.name) }
                                p.card-text { (t.t(member.role)) }
                            }
                        }))
                    }
                }
            }
        }
    };

    layout::shell(ctx, &Route::About, &seo, content)
}
