//! Declarative field constraints.
//!
//! A [`Schema`] is a static list of [`FieldSpec`]s. Each field carries an
//! ordered list of [`Constraint`]s; validation stops at the first one that
//! fails, so a field reports at most one error. Messages are translation
//! keys and are only turned into text by [`FieldErrors::localize`].
//!
//! The same schema also feeds the generated HTML: [`FieldSpec::client_rules`]
//! serializes the constraints for the page script, and the `min_length` /
//! `min` / `max` accessors become native input attributes.

use crate::i18n::Translator;
use email_address::{EmailAddress, Options};
use serde::Serialize;
use std::collections::BTreeMap;

/// A single check applied to a raw field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// At least this many characters (Unicode scalar values, untrimmed).
    MinChars(usize),
    /// Syntactically valid email address.
    Email,
    /// Not empty.
    Required,
    /// Parses as a finite number.
    Numeric,
    /// Numeric value `>=` bound. Non-numeric input is left to [`Rule::Numeric`].
    Min(f64),
    /// Numeric value `<=` bound.
    Max(f64),
}

impl Rule {
    pub fn check(&self, value: &str) -> bool {
        match *self {
            Rule::MinChars(n) => value.chars().count() >= n,
            Rule::Email => EmailAddress::parse_with_options(value, email_options()).is_ok(),
            Rule::Required => !value.is_empty(),
            Rule::Numeric => parse_number(value).is_some(),
            Rule::Min(bound) => parse_number(value).is_none_or(|n| n >= bound),
            Rule::Max(bound) => parse_number(value).is_none_or(|n| n <= bound),
        }
    }

    /// Stable name used by the page script.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::MinChars(_) => "min_chars",
            Rule::Email => "email",
            Rule::Required => "required",
            Rule::Numeric => "numeric",
            Rule::Min(_) => "min",
            Rule::Max(_) => "max",
        }
    }

    fn param(&self) -> Option<f64> {
        match *self {
            Rule::MinChars(n) => Some(n as f64),
            Rule::Min(b) | Rule::Max(b) => Some(b),
            Rule::Email | Rule::Required | Rule::Numeric => None,
        }
    }
}

/// A bare `local@domain.tld`: no display name, no IP literal, at least one dot
/// in the domain. Matches the page script's check.
fn email_options() -> Options {
    Options::default()
        .with_required_tld()
        .without_domain_literal()
        .without_display_text()
}

/// Parse a numeric input the way a browser number field does: surrounding
/// whitespace ignored, `.` as decimal separator, no NaN or infinities.
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    pub rule: Rule,
    /// Translation key of the message shown when `rule` fails.
    pub message: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Optional fields skip their constraints while empty.
    pub optional: bool,
    pub constraints: &'static [Constraint],
}

impl FieldSpec {
    /// First failing constraint for `value`, if any.
    pub fn check(&self, value: &str) -> Option<FieldError> {
        if self.optional && value.is_empty() {
            return None;
        }
        self.constraints
            .iter()
            .find(|c| !c.rule.check(value))
            .map(|c| FieldError {
                field: self.name,
                rule: c.rule,
                message: c.message,
            })
    }

    pub fn required(&self) -> bool {
        !self.optional
    }

    pub fn min_length(&self) -> Option<usize> {
        self.constraints.iter().find_map(|c| match c.rule {
            Rule::MinChars(n) => Some(n),
            _ => None,
        })
    }

    pub fn min(&self) -> Option<f64> {
        self.constraints.iter().find_map(|c| match c.rule {
            Rule::Min(b) => Some(b),
            _ => None,
        })
    }

    pub fn max(&self) -> Option<f64> {
        self.constraints.iter().find_map(|c| match c.rule {
            Rule::Max(b) => Some(b),
            _ => None,
        })
    }

    /// Constraints with localized messages, for the page script.
    pub fn client_rules(&self, tr: &Translator, args: &[(&str, &str)]) -> Vec<ClientRule> {
        self.constraints
            .iter()
            .map(|c| ClientRule {
                rule: c.rule.kind(),
                value: c.rule.param(),
                message: tr.t_args(c.message, args),
            })
            .collect()
    }
}

/// Serialized form of a constraint embedded in `data-rules`.
#[derive(Debug, Clone, Serialize)]
pub struct ClientRule {
    pub rule: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    pub message: String,
}

/// A static set of field specs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schema {
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate every field. `value` returns the raw input for a field name;
    /// fields it doesn't know are treated as empty.
    pub fn validate<'v>(&self, value: impl Fn(&str) -> Option<&'v str>) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for spec in self.fields {
            if let Some(error) = spec.check(value(spec.name).unwrap_or("")) {
                errors.insert(error);
            }
        }
        errors
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub rule: Rule,
    pub message: &'static str,
}

/// Field name → first failing constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<&'static str, FieldError>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    pub fn insert(&mut self, error: FieldError) {
        self.0.insert(error.field, error);
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    /// Field name → localized message.
    pub fn localize(&self, tr: &Translator, args: &[(&str, &str)]) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(field, error)| (*field, tr.t_args(error.message, args)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};

    const SPEC: FieldSpec = FieldSpec {
        name: "amount",
        optional: false,
        constraints: &[
            Constraint {
                rule: Rule::Numeric,
                message: "common:validation.amountNumber",
            },
            Constraint {
                rule: Rule::Min(5.0),
                message: "common:validation.amountMin",
            },
            Constraint {
                rule: Rule::Max(10000.0),
                message: "common:validation.amountMax",
            },
        ],
    };

    #[test]
    fn min_chars_counts_characters_not_bytes() {
        assert!(Rule::MinChars(2).check("Jo"));
        assert!(Rule::MinChars(2).check("Ñá"));
        assert!(!Rule::MinChars(2).check("é"));
        assert!(!Rule::MinChars(2).check(""));
    }

    #[test]
    fn email_requires_at_sign() {
        assert!(Rule::Email.check("a@b.com"));
        assert!(!Rule::Email.check("ab.com"));
        assert!(!Rule::Email.check(""));
    }

    #[test]
    fn numeric_rejects_radix_prefixes() {
        for value in ["0x10", "0b1", "0o7", "-0x10"] {
            assert_eq!(parse_number(value), None, "{value}");
            assert!(!Rule::Numeric.check(value), "{value}");
        }
        assert_eq!(parse_number(" 010 "), Some(10.0));
    }

    #[test]
    fn email_rejects_forms_the_page_script_rejects() {
        assert!(!Rule::Email.check("a@b"));
        assert!(!Rule::Email.check("a@[127.0.0.1]"));
        assert!(!Rule::Email.check("Ana <ana@x.org>"));
        assert!(Rule::Email.check("ana@mail.almare.org"));
    }

    #[test]
    fn numeric_rejects_text_and_nan() {
        assert!(Rule::Numeric.check(" 25 "));
        assert!(Rule::Numeric.check("12.5"));
        assert!(!Rule::Numeric.check("abc"));
        assert!(!Rule::Numeric.check("NaN"));
        assert!(!Rule::Numeric.check("inf"));
        assert!(!Rule::Numeric.check(""));
    }

    #[test]
    fn first_failing_constraint_wins() {
        assert_eq!(SPEC.check("abc").unwrap().rule, Rule::Numeric);
        assert_eq!(SPEC.check("4").unwrap().rule, Rule::Min(5.0));
        assert_eq!(SPEC.check("10001").unwrap().rule, Rule::Max(10000.0));
        assert_eq!(SPEC.check("5"), None);
        assert_eq!(SPEC.check("10000"), None);
    }

    #[test]
    fn optional_field_skips_rules_when_empty() {
        let spec = FieldSpec {
            name: "message",
            optional: true,
            constraints: &[Constraint {
                rule: Rule::MinChars(3),
                message: "x",
            }],
        };
        assert_eq!(spec.check(""), None);
        assert!(spec.check("ab").is_some());
    }

    #[test]
    fn html_attribute_accessors() {
        assert_eq!(SPEC.min(), Some(5.0));
        assert_eq!(SPEC.max(), Some(10000.0));
        assert_eq!(SPEC.min_length(), None);
        assert!(SPEC.required());
    }

    #[test]
    fn client_rules_serialize_with_localized_messages() {
        let catalog = Catalog::embedded().unwrap();
        let tr = catalog.translator(Locale::Es, "common");
        let rules = SPEC.client_rules(&tr, &[("symbol", "€")]);
        let json = serde_json::to_string(&rules).unwrap();
        assert!(json.contains(r#"{"rule":"numeric","message":"Introduce una cantidad válida"}"#));
        assert!(json.contains(r#"{"rule":"min","value":5.0,"message":"Mínimo €5"}"#));
    }

    #[test]
    fn localize_maps_fields_to_text() {
        let catalog = Catalog::embedded().unwrap();
        let tr = catalog.translator(Locale::En, "common");
        let schema = Schema { fields: &[SPEC] };
        let errors = schema.validate(|_| Some("1"));
        let messages = errors.localize(&tr, &[("symbol", "€")]);
        assert_eq!(messages.get("amount").map(String::as_str), Some("Minimum €5"));
    }
}
