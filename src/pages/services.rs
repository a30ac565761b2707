use super::PageContext;
use super::components::{Hero, hero};
use super::layout;
use crate::icons::Icon;
use crate::routes::Route;
use maud::{Markup, html};

const HERO_IMAGE: &str = "https://images.pexels.com/photos/6646862/pexels-photo-6646862.jpeg";

/// Program key under `services:programs`, icon, photo.
const PROGRAMS: [(&str, Icon, &str); 3] = [
    (
        "education",
        Icon::GraduationCap,
        "https://images.pexels.com/photos/8926553/pexels-photo-8926553.jpeg",
    ),
    (
        "health",
        Icon::Heart,
        "https://images.pexels.com/photos/6975474/pexels-photo-6975474.jpeg",
    ),
    (
        "development",
        Icon::Building,
        "https://images.pexels.com/photos/5691659/pexels-photo-5691659.jpeg",
    ),
];

pub fn render(ctx: &PageContext) -> Markup {
    let t = ctx.tr("services");
    let title = t.t("hero.title");
    let subtitle = t.t("hero.subtitle");
    let seo = ctx.seo(&Route::Services, &title, &subtitle);
    let contact = ctx.href(&Route::Contact);

    let content = html! {
        (hero(&Hero {
            title: &title,
            subtitle: &subtitle,
            image: Some(HERO_IMAGE),
            cta: None,
            large: false,
        }))

        section.section {
            div.container.programs {
                @for (index, (key, icon, photo)) in PROGRAMS.iter().enumerate() {
                    @let program_title = t.t(&format!("programs.{key}.title"));
                    // Odd rows put the photo first.
                    div.split.program.reversed[index % 2 == 1] {
                        div.program-text {
                            div.program-heading {
                                div.icon-tile { (icon.render("icon-md")) }
                                h3 { (program_title) }
                            }
                            p.lead { (t.t(&format!("programs.{key}.description"))) }
                            a.card-link href=(contact) { (t.t("programs.join")) " →" }
                        }
                        div.program-photo {
                            img.rounded.shadow src=(photo) alt=(program_title) loading="lazy";
                        }
                    }
                }
            }
        }

        section.section.section-primary {
            div.container.narrow.text-center {
                h2.section-title { (t.t("cta.title")) }
                p.lead { (t.t("cta.description")) }
                div.button-row {
                    a.btn.btn-light href=(contact) { (t.t("cta.volunteer")) }
                    a.btn.btn-outline-light href=(ctx.href(&Route::Donations)) {
                        (t.t("common:buttons.donate"))
                    }
                }
            }
        }
    };

    layout::shell(ctx, &Route::Services, &seo, content)
}
