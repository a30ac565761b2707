//! Building blocks shared by several pages: hero banners, cards, icon
//! badges, and schema-driven form fields.

use crate::forms::donation::format_amount;
use crate::forms::schema::FieldSpec;
use crate::i18n::Translator;
use crate::icons::Icon;
use maud::{Markup, html};

/// Full-width banner at the top of a page.
pub struct Hero<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
    pub image: Option<&'a str>,
    /// Call to action: label and link.
    pub cta: Option<(&'a str, &'a str)>,
    pub large: bool,
}

pub fn hero(hero: &Hero) -> Markup {
    let style = hero.image.map(|src| format!("background-image: url('{src}')"));
    html! {
        section.hero.hero-large[hero.large].hero-image[hero.image.is_some()] style=[style] {
            div.hero-inner {
                h1.hero-title { (hero.title) }
                p.hero-subtitle { (hero.subtitle) }
                @if let Some((label, href)) = hero.cta {
                    a.btn.btn-primary.btn-lg href=(href) { (label) }
                }
            }
        }
    }
}

pub fn card(content: Markup) -> Markup {
    html! {
        div.card { (content) }
    }
}

/// Round tinted circle around an icon.
pub fn icon_badge(icon: Icon) -> Markup {
    html! {
        div.icon-badge { (icon.render("icon-lg")) }
    }
}

/// Which HTML control renders a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Text,
    Email,
    Password,
    /// Decimal amount input.
    Amount,
    /// Multi-line text, this many rows tall.
    TextArea(u32),
}

impl Control {
    fn input_type(self) -> &'static str {
        match self {
            Control::Text | Control::TextArea(_) => "text",
            Control::Email => "email",
            Control::Password => "password",
            Control::Amount => "number",
        }
    }
}

/// One labelled form field, driven by its schema entry.
pub struct Field<'a> {
    pub spec: &'a FieldSpec,
    pub control: Control,
    pub label: String,
    pub placeholder: Option<String>,
    pub value: &'a str,
    /// Localized inline error, if the field currently fails.
    pub error: Option<&'a str>,
    /// Extra markup inside the input wrapper (e.g. a visibility toggle).
    pub addon: Option<Markup>,
}

/// Render a field with native constraint attributes and the serialized
/// rules the page script validates against. `validation` resolves the
/// schema's message keys; `args` fills their placeholders.
pub fn form_field(field: &Field, validation: &Translator, args: &[(&str, &str)]) -> Markup {
    let spec = field.spec;
    let name = spec.name;
    let error_id = format!("{name}-error");
    let rules = serde_json::to_string(&spec.client_rules(validation, args)).unwrap_or_default();
    let min_length = spec.min_length().map(|n| n.to_string());
    let min = spec.min().map(format_amount);
    let max = spec.max().map(format_amount);
    let invalid = field.error.map(|_| "true");

    html! {
        div.form-field.has-error[field.error.is_some()] data-field=(name) {
            label for=(name) { (field.label) }
            div.input-wrap {
                @match field.control {
                    Control::TextArea(rows) => {
                        textarea id=(name) name=(name) rows=(rows)
                            required[spec.required()] minlength=[min_length.as_deref()]
                            placeholder=[field.placeholder.as_deref()]
                            aria-invalid=[invalid] aria-describedby=(error_id)
                            data-rules=(rules) { (field.value) }
                    }
                    control => {
                        input id=(name) name=(name) type=(control.input_type())
                            value=(field.value)
                            required[spec.required()] minlength=[min_length.as_deref()]
                            min=[min.as_deref()] max=[max.as_deref()]
                            step=[(control == Control::Amount).then_some("0.01")]
                            inputmode=[(control == Control::Amount).then_some("decimal")]
                            autocomplete=[autocomplete(name, control)]
                            placeholder=[field.placeholder.as_deref()]
                            aria-invalid=[invalid] aria-describedby=(error_id)
                            data-rules=(rules);
                    }
                }
                @if let Some(addon) = &field.addon {
                    (addon)
                }
            }
            p.field-error id=(error_id) role="alert" hidden[field.error.is_none()] {
                @if let Some(error) = field.error {
                    (error)
                }
            }
        }
    }
}

fn autocomplete(name: &str, control: Control) -> Option<&'static str> {
    match (name, control) {
        (_, Control::Email) => Some("email"),
        (_, Control::Password) => Some("current-password"),
        ("name", _) => Some("name"),
        _ => None,
    }
}

/// Submit button that the page script disables while a submission is
/// pending, swapping its label for `pending_label`.
pub fn submit_button(label: &str, pending_label: &str, pending: bool) -> Markup {
    html! {
        button.btn.btn-primary.btn-block type="submit" disabled[pending]
            data-label=(label) data-pending-label=(pending_label) {
            @if pending { (pending_label) } @else { (label) }
        }
    }
}

/// Live region the page script writes success or failure messages into.
pub fn form_status() -> Markup {
    html! {
        div.form-status role="status" aria-live="polite" hidden {}
    }
}
