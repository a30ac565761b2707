use super::PageContext;
use super::components::{Hero, card, hero};
use super::layout;
use crate::icons::Icon;
use crate::routes::Route;
use maud::{Markup, html};

/// Share of funds per destination, in percent. Must sum to 100.
const ALLOCATION: [(&str, u32); 3] = [("programs", 85), ("operations", 10), ("fundraising", 5)];

const COMMITMENTS: [(Icon, &str); 4] = [
    (Icon::Shield, "audit"),
    (Icon::FileText, "reports"),
    (Icon::PieChart, "publicAccounts"),
    (Icon::Mail, "requests"),
];

pub fn render(ctx: &PageContext) -> Markup {
    let t = ctx.tr("transparency");
    let title = t.t("hero.title");
    let subtitle = t.t("hero.subtitle");
    let seo = ctx.seo(&Route::Transparency, &title, &subtitle);

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
                h2.section-title { (t.t("allocation.title")) }
                (card(html! {
                    ul.allocation {
                        @for (key, percent) in ALLOCATION {
                            li {
                                div.allocation-label {
                                    span { (t.t(&format!("allocation.{key}"))) }
                                    strong { (percent) "%" }
                                }
                                div.allocation-bar {
                                    div.allocation-fill style={ "width: " (percent) "%" } {}
                                }
                            }
                        }
                    }
                    p.note { (t.t("allocation.note")) }
                }))
            }
        }

        section.section.section-muted {
            div.container.narrow {
                h2.section-title { (t.t("commitments.title")) }
                ul.check-list {
                    @for (icon, key) in COMMITMENTS {
                        li {
                            (icon.render("icon-md icon-primary"))
                            span { (t.t(&format!("commitments.{key}"))) }
                        }
                    }
                }
                p.text-center {
                    a.btn.btn-primary href=(ctx.href(&Route::Donations)) {
                        (t.t("common:buttons.donate"))
                    }
                }
            }
        }
    };

    layout::shell(ctx, &Route::Transparency, &seo, content)
}
