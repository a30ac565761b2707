//! Donation page: the donation form beside impact areas and reasons to give.
//!
//! Preset buttons carry `data-preset`; the page script copies the value into
//! the amount field and updates the submit label, which reads
//! "Donar €{amount}". After a successful (simulated) donation the fields are
//! kept as they were.

use super::PageContext;
use super::components::{Control, Field, Hero, card, form_field, form_status, hero};
use super::layout;
use crate::forms::donation::{DonationForm, format_amount};
use crate::icons::Icon;
use crate::routes::Route;
use maud::{Markup, html};

const HERO_IMAGE: &str = "/donaciones.png";

/// Impact area key under `donations:impact`, and the amount it refers to.
const IMPACT_AREAS: [(&str, u32); 3] = [("education", 25), ("health", 50), ("food", 100)];

const REASONS: [&str; 4] = ["programs", "transparency", "measurable", "certificate"];

pub fn render(ctx: &PageContext, form: &DonationForm) -> Markup {
    let t = ctx.tr("donations");
    let common = ctx.tr("common");
    let symbol = ctx.currency();
    let args = [("symbol", symbol)];

    let title = t.t("hero.title");
    let subtitle = t.t("hero.subtitle");
    let seo = ctx.seo(&Route::Donations, &title, &subtitle);

    let state = form.state();
    let errors = state.errors().localize(&common, &args);
    let error = |field: &str| errors.get(field).map(String::as_str);

    let raw_amount = state.value("amount");
    let amount = form.amount().map(format_amount).unwrap_or_else(|| raw_amount.to_string());
    let submit_label = t.t_args("form.submit", &[("symbol", symbol), ("amount", &amount)]);
    // Keeps {{amount}} for the page script to fill in.
    let submit_template = t.t_args("form.submit", &args);
    let success_template = t.t_args("form.success", &args);
    let selected = form.selected_preset();
    let spec = |name: &str| state.schema().field(name);

    let content = html! {
        (hero(&Hero {
            title: &title,
            subtitle: &subtitle,
            image: Some(HERO_IMAGE),
            cta: None,
            large: false,
        }))

        section.section {
            div.container.split.split-top {
                div {
                    (card(html! {
                        div.card-heading {
                            (Icon::Heart.render("icon-md icon-accent"))
                            h2 { (t.t("form.title")) }
                        }
                        form.site-form data-form="donation" data-event="donation" novalidate
                            data-delay=(ctx.config.submission.delay_ms)
                            data-success=(success_template)
                            data-failure=(common.t("submit.failed"))
                            data-submit-template=(submit_template) {
                            p.group-label { (t.t("form.amount")) }
                            div.preset-grid {
                                @for preset in form.presets() {
                                    @let is_selected = selected == Some(*preset);
                                    button.preset.selected[is_selected] type="button"
                                        data-preset=(preset)
                                        aria-pressed=(if is_selected { "true" } else { "false" }) {
                                        (symbol) (preset)
                                    }
                                }
                            }
                            @if let Some(amount_spec) = spec("amount") {
                                (form_field(&Field {
                                    spec: amount_spec,
                                    control: Control::Amount,
                                    label: t.t("form.customAmount"),
                                    placeholder: Some(t.t("form.customAmount")),
                                    value: raw_amount,
                                    error: error("amount"),
                                    addon: Some(html! { span.input-prefix { (symbol) } }),
                                }, &common, &args))
                            }
                            div.field-row {
                                @if let Some(name_spec) = spec("name") {
                                    (form_field(&Field {
                                        spec: name_spec,
                                        control: Control::Text,
                                        label: common.t("name"),
                                        placeholder: None,
                                        value: state.value("name"),
                                        error: error("name"),
                                        addon: None,
                                    }, &common, &args))
                                }
                                @if let Some(email_spec) = spec("email") {
                                    (form_field(&Field {
                                        spec: email_spec,
                                        control: Control::Email,
                                        label: common.t("email"),
                                        placeholder: None,
                                        value: state.value("email"),
                                        error: error("email"),
                                        addon: None,
                                    }, &common, &args))
                                }
                            }
                            @if let Some(message_spec) = spec("message") {
                                (form_field(&Field {
                                    spec: message_spec,
                                    control: Control::TextArea(3),
                                    label: t.t("form.messageOptional"),
                                    placeholder: Some(t.t("form.messagePlaceholder")),
                                    value: state.value("message"),
                                    error: error("message"),
                                    addon: None,
                                }, &common, &args))
                            }
                            div.notice {
                                (Icon::Shield.render("icon-md icon-success"))
                                div {
                                    p.notice-title { (t.t("form.secureTitle")) }
                                    p { (t.t("form.secureText")) }
                                }
                            }
                            button.btn.btn-primary.btn-block type="submit"
                                disabled[state.is_pending()]
                                data-label=(submit_label)
                                data-pending-label=(common.t("buttons.processing")) {
                                @if state.is_pending() {
                                    (common.t("buttons.processing"))
                                } @else {
                                    (Icon::CreditCard.render("icon-sm"))
                                    span.submit-text { (submit_label) }
                                }
                            }
                            (form_status())
                        }
                    }))
                }
                div.stack {
                    (card(html! {
                        h3.card-title { (t.t("impact.title")) }
                        ul.impact-list {
                            @for (key, value) in IMPACT_AREAS {
                                li {
                                    div.impact-check { (Icon::CheckCircle.render("icon-sm")) }
                                    div.impact-body {
                                        div.impact-head {
                                            h4 { (t.t(&format!("impact.{key}.title"))) }
                                            span.impact-amount { (symbol) (value) }
                                        }
                                        p.card-text { (t.t(&format!("impact.{key}.description"))) }
                                        p.impact-effect { (t.t(&format!("impact.{key}.impact"))) }
                                    }
                                }
                            }
                        }
                    }))
                    (card(html! {
                        h3.card-title { (t.t("why.title")) }
                        ul.check-list {
                            @for key in REASONS {
                                li {
                                    (Icon::CheckCircle.render("icon-md icon-success"))
                                    span { (t.t(&format!("why.{key}"))) }
                                }
                            }
                        }
                    }))
                }
            }
        }
    };

    layout::shell(ctx, &Route::Donations, &seo, content)
}
