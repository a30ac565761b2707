//! Admin sign-in page.
//!
//! Standalone: no site header or footer, just a brand panel beside the
//! form. There is no authentication backend, so the page script always
//! ends a valid submission with the `admin:unavailable` message.

use super::PageContext;
use super::components::{Control, Field, form_field, form_status, submit_button};
use super::layout;
use crate::forms::login::LoginForm;
use crate::icons::Icon;
use crate::routes::Route;
use maud::{Markup, html};

pub fn render(ctx: &PageContext, form: &LoginForm) -> Markup {
    let t = ctx.tr("admin");
    let common = ctx.tr("common");
    let seo = ctx.seo(&Route::AdminLogin, &t.t("seo.title"), &t.t("seo.description"));

    let state = form.state();
    let errors = state.errors().localize(&common, &[]);
    let error = |field: &str| errors.get(field).map(String::as_str);
    let (password_control, eye) = if form.show_password() {
        (Control::Text, Icon::EyeOff)
    } else {
        (Control::Password, Icon::Eye)
    };
    let logo = &ctx.config.site.logo;
    let logo_alt = common.t("layout.logoAlt");

    let content = html! {
        div.admin-layout {
            aside.admin-brand style={ "background-image: url('" (ctx.config.site.default_image) "')" } {
                div.admin-brand-inner {
                    img src=(logo) alt=(logo_alt) height="64";
                    h1 { (t.t("panel.title")) }
                    p { (t.t("panel.subtitle")) }
                }
            }
            main.admin-main #main {
                div.admin-box {
                    img.admin-mobile-logo src=(logo) alt=(logo_alt) height="48";
                    a.back-link href=(ctx.href(&Route::Home)) {
                        (Icon::ArrowLeft.render("icon-sm")) (t.t("back"))
                    }
                    div.text-center {
                        (Icon::Lock.render("icon-lg icon-primary"))
                        h2 { (t.t("title")) }
                        p.muted { (t.t("subtitle")) }
                    }
                    div.card {
                        form.site-form data-form="login" novalidate
                            data-delay=(ctx.config.submission.login_delay_ms)
                            data-failure=(t.t("unavailable")) {
                            @if let Some(spec) = state.schema().field("email") {
                                (form_field(&Field {
                                    spec,
                                    control: Control::Email,
                                    label: t.t("email"),
                                    placeholder: Some("admin@almare.org".to_string()),
                                    value: state.value("email"),
                                    error: error("email"),
                                    addon: Some(Icon::Mail.render("input-icon")),
                                }, &common, &[]))
                            }
                            @if let Some(spec) = state.schema().field("password") {
                                (form_field(&Field {
                                    spec,
                                    control: password_control,
                                    label: t.t("password"),
                                    placeholder: Some("••••••••".to_string()),
                                    value: state.value("password"),
                                    error: error("password"),
                                    addon: Some(html! {
                                        button.password-toggle type="button" data-toggle-password
                                            aria-label=(t.t("showPassword"))
                                            aria-pressed=(if form.show_password() { "true" } else { "false" }) {
                                            (eye.render("icon-sm"))
                                        }
                                    }),
                                }, &common, &[]))
                            }
                            div.form-row-between {
                                label.checkbox {
                                    input #remember-me type="checkbox" name="remember-me";
                                    " " (t.t("rememberMe"))
                                }
                                a.small-link href="#" { (t.t("forgot")) }
                            }
                            (submit_button(&t.t("submit"), &t.t("submitting"), state.is_pending()))
                            (form_status())
                        }
                        p.fine-print { (t.t("notice")) }
                    }
                }
            }
        }
    };

    layout::document(ctx, &Route::AdminLogin, &seo, Some("admin-page"), content)
}
