use super::PageContext;
use super::components::{Control, Field, Hero, card, form_field, form_status, hero, submit_button};
use super::layout;
use crate::forms::contact::ContactForm;
use crate::icons::Icon;
use crate::routes::Route;
use maud::{Markup, html};

const VOLUNTEERING: [&str; 3] = ["field", "admin", "events"];

/// Day key under `contact:hours` and its opening times; `None` is closed.
const HOURS: [(&str, Option<&str>); 3] = [
    ("weekdays", Some("9:00 - 18:00")),
    ("saturday", Some("10:00 - 14:00")),
    ("sunday", None),
];

pub fn render(ctx: &PageContext, form: &ContactForm) -> Markup {
    let t = ctx.tr("contact");
    let common = ctx.tr("common");
    let title = t.t("hero.title");
    let subtitle = t.t("hero.subtitle");
    let seo = ctx.seo(&Route::Contact, &title, &subtitle);

    let state = form.state();
    let errors = state.errors().localize(&common, &[]);
    let contact = &ctx.config.contact;
    let phone_href = format!("tel:{}", contact.phone.replace(' ', ""));

    // (name, control, label, placeholder)
    let fields = [
        ("name", Control::Text, common.t("name"), t.t("form.namePlaceholder")),
        ("email", Control::Email, common.t("email"), t.t("form.emailPlaceholder")),
        ("subject", Control::Text, t.t("form.subject"), t.t("form.subjectPlaceholder")),
        ("message", Control::TextArea(6), common.t("message"), t.t("form.messagePlaceholder")),
    ];

    let content = html! {
        (hero(&Hero {
            title: &title,
            subtitle: &subtitle,
            image: None,
            cta: None,
            large: false,
        }))

        section.section {
            div.container.split.split-top {
                (card(html! {
                    h2.card-heading { (t.t("form.title")) }
                    form.site-form data-form="contact" data-event="contact_form" data-reset novalidate
                        data-delay=(ctx.config.submission.delay_ms)
                        data-success=(t.t("form.success"))
                        data-failure=(common.t("submit.failed")) {
                        @for (name, control, label, placeholder) in &fields {
                            @if let Some(spec) = state.schema().field(name) {
                                (form_field(&Field {
                                    spec,
                                    control: *control,
                                    label: label.clone(),
                                    placeholder: Some(placeholder.clone()),
                                    value: state.value(name),
                                    error: errors.get(*name).map(String::as_str),
                                    addon: None,
                                }, &common, &[]))
                            }
                        }
                        (submit_button(
                            &common.t("buttons.send"),
                            &common.t("buttons.sending"),
                            state.is_pending(),
                        ))
                        (form_status())
                    }
                }))

                div.stack {
                    (card(html! {
                        h3.card-title { (t.t("info.title")) }
                        ul.info-list {
                            li {
                                (Icon::Mail.render("icon-md icon-primary"))
                                div {
                                    h4 { (t.t("info.email.title")) }
                                    a href={ "mailto:" (contact.email) } { (contact.email) }
                                    p.card-text { (t.t("info.email.description")) }
                                }
                            }
                            li {
                                (Icon::Phone.render("icon-md icon-primary"))
                                div {
                                    h4 { (t.t("info.phone.title")) }
                                    a href=(phone_href) { (contact.phone) }
                                    p.card-text { (t.t("info.phone.description")) }
                                }
                            }
                            li {
                                (Icon::MapPin.render("icon-md icon-primary"))
                                div {
                                    h4 { (t.t("info.office.title")) }
                                    p { (t.t("info.office.value")) }
                                    p.card-text { (t.t("info.office.description")) }
                                }
                            }
                        }
                    }))
                    (card(html! {
                        h3.card-title { (t.t("volunteer.title")) }
                        ul.plain-list {
                            @for key in VOLUNTEERING {
                                li {
                                    h4 { (t.t(&format!("volunteer.{key}.title"))) }
                                    p.card-text { (t.t(&format!("volunteer.{key}.description"))) }
                                }
                            }
                        }
                        p.note { (t.t("volunteer.hint")) }
                    }))
                    (card(html! {
                        div.card-heading {
                            (Icon::Clock.render("icon-md icon-primary"))
                            h3.card-title { (t.t("hours.title")) }
                        }
                        dl.hours {
                            @for (day, times) in HOURS {
                                dt { (t.t(&format!("hours.{day}"))) }
                                dd {
                                    @match times {
                                        Some(times) => { (times) }
                                        None => { (t.t("hours.closed")) }
                                    }
                                }
                            }
                        }
                    }))
                }
            }
        }
    };

    layout::shell(ctx, &Route::Contact, &seo, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemorySink;
    use crate::forms::submit::SimulatedGateway;
    use crate::i18n::Locale;
    use crate::test_helpers::{Fixture, render};

    #[test]
    fn contact_form_has_all_fields() {
        let html = render(&Route::Contact, Locale::Es);
        for name in ["name", "email", "subject", "message"] {
            assert!(html.contains(&format!(r#"data-field="{name}""#)), "{name}");
        }
        assert!(html.contains(r#"placeholder="¿En qué te podemos ayudar?""#));
        assert!(html.contains(r#"data-label="Enviar mensaje" data-pending-label="Enviando...""#));
    }

    #[test]
    fn contact_form_resets_after_success() {
        let html = render(&Route::Contact, Locale::Es);
        assert!(html.contains(r#"data-form="contact""#));
        assert!(html.contains("data-reset"));
        assert!(html.contains("¡Mensaje enviado correctamente! Te responderemos pronto."));
    }

    #[test]
    fn donation_form_does_not_reset() {
        let html = render(&Route::Donations, Locale::Es);
        assert!(!html.contains("data-reset"));
    }

    #[test]
    fn invalid_submission_shows_every_error() {
        let fixture = Fixture::new();
        let mut form = ContactForm::new();
        form.set("name", "A");
        form.set("email", "no-arroba");
        form.submit(&SimulatedGateway::instant(), &MemorySink::default());
        let html = super::render(&fixture.ctx(Locale::En), &form).into_string();
        assert!(html.contains("Name is required"));
        assert!(html.contains("Invalid email"));
        assert_eq!(html.matches(r#"aria-invalid="true""#).count(), 4);
        assert!(html.contains(r#"value="no-arroba""#));
    }

    #[test]
    fn info_uses_configured_contact_details() {
        let mut fixture = Fixture::new();
        fixture.config.contact.email = "hola@example.org".into();
        fixture.config.contact.phone = "+34 600 000 000".into();
        let html = fixture.render(&Route::Contact, Locale::Es);
        assert!(html.contains(r#"<a href="mailto:hola@example.org">hola@example.org</a>"#));
        assert!(html.contains(r#"<a href="tel:+34600000000">+34 600 000 000</a>"#));
    }

    #[test]
    fn sunday_is_closed() {
        let html = render(&Route::Contact, Locale::En);
        assert!(html.contains("<dt>Sunday</dt><dd>Closed</dd>"));
        assert!(html.contains("<dt>Saturday</dt><dd>10:00 - 14:00</dd>"));
    }
}
