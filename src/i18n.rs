//! Internationalization: the two site locales and the translation catalog.
//!
//! Strings live in `locales/{code}.toml`, embedded at compile time. Each
//! top-level table is a namespace and keys are addressed as
//! `"namespace:dotted.path"`, e.g. `"home:hero.title"`. A key without a
//! namespace is resolved in the translator's default namespace.
//!
//! A content directory may ship `locales/{code}.toml` overrides; they are
//! merged over the embedded tables with [`config::merge_toml`], so an
//! override file only needs the keys it changes.
//!
//! Resolution order for a key: requested locale → fallback locale (`es`) →
//! the key itself, so a missing string is visible on the page instead of
//! rendering empty.

use crate::config::{self, ConfigError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

const ES_TOML: &str = include_str!("../locales/es.toml");
const EN_TOML: &str = include_str!("../locales/en.toml");

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("failed to parse embedded {locale} translations: {source}")]
    Embedded {
        locale: Locale,
        source: toml::de::Error,
    },
    #[error("failed to load translation overrides: {0}")]
    Override(#[from] ConfigError),
    #[error("unknown locale code: {0}")]
    UnknownLocale(String),
}

/// One of the two fixed site languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Es,
    En,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// The language toggle: always the other of the two codes.
    pub fn toggle(self) -> Locale {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    /// Open Graph `og:locale` value.
    pub fn og_locale(self) -> &'static str {
        match self {
            Locale::Es => "es_ES",
            Locale::En => "en_US",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            other => Err(I18nError::UnknownLocale(other.to_string())),
        }
    }
}

/// Merged translation tables for both locales.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: BTreeMap<Locale, toml::Value>,
    fallback: Locale,
}

impl Catalog {
    /// Catalog built from the embedded translation files only.
    pub fn embedded() -> Result<Self, I18nError> {
        let mut tables = BTreeMap::new();
        for locale in Locale::ALL {
            let source = match locale {
                Locale::Es => ES_TOML,
                Locale::En => EN_TOML,
            };
            let value: toml::Value = toml::from_str(source)
                .map_err(|source| I18nError::Embedded { locale, source })?;
            tables.insert(locale, value);
        }
        Ok(Self {
            tables,
            fallback: Locale::Es,
        })
    }

    /// Embedded catalog with `content/locales/{code}.toml` overrides merged on top.
    pub fn load(content_root: &Path) -> Result<Self, I18nError> {
        let mut catalog = Self::embedded()?;
        let dir = content_root.join("locales");
        for locale in Locale::ALL {
            let path = dir.join(format!("{}.toml", locale.code()));
            if let Some(overlay) = config::load_raw_toml(&path)? {
                catalog.merge(locale, overlay);
            }
        }
        Ok(catalog)
    }

    /// Merge an override table into one locale.
    pub fn merge(&mut self, locale: Locale, overlay: toml::Value) {
        let base = self
            .tables
            .remove(&locale)
            .unwrap_or_else(|| toml::Value::Table(Default::default()));
        self.tables.insert(locale, config::merge_toml(base, overlay));
    }

    /// Look up `namespace` + dotted `path` in one locale, without fallback.
    pub fn lookup(&self, locale: Locale, namespace: &str, path: &str) -> Option<&str> {
        let mut node = self.tables.get(&locale)?.get(namespace)?;
        for segment in path.split('.') {
            node = node.get(segment)?;
        }
        node.as_str()
    }

    /// Resolve a full key, falling back to the fallback locale.
    pub fn resolve(&self, locale: Locale, namespace: &str, path: &str) -> Option<&str> {
        self.lookup(locale, namespace, path)
            .or_else(|| self.lookup(self.fallback, namespace, path))
    }

    pub fn translator(&self, locale: Locale, namespace: &'static str) -> Translator<'_> {
        Translator {
            catalog: self,
            locale,
            namespace,
        }
    }

    /// Keys defined in one locale but absent from the other, as
    /// `(locale missing the key, "namespace:path")`.
    pub fn missing_keys(&self) -> Vec<(Locale, String)> {
        let keys: BTreeMap<Locale, Vec<String>> = self
            .tables
            .iter()
            .map(|(locale, table)| (*locale, flatten_keys(table)))
            .collect();

        let mut missing = Vec::new();
        for locale in Locale::ALL {
            let other = locale.toggle();
            let ours = keys.get(&locale).cloned().unwrap_or_default();
            for key in keys.get(&other).into_iter().flatten() {
                if ours.binary_search(key).is_err() {
                    missing.push((locale, key.clone()));
                }
            }
        }
        missing
    }
}

/// All string leaves of a catalog table as sorted `"namespace:dotted.path"` keys.
fn flatten_keys(table: &toml::Value) -> Vec<String> {
    fn walk(prefix: &str, value: &toml::Value, out: &mut Vec<String>) {
        match value {
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let next = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&next, v, out);
                }
            }
            toml::Value::String(_) => out.push(prefix.to_string()),
            _ => {}
        }
    }

    let mut out = Vec::new();
    if let toml::Value::Table(namespaces) = table {
        for (ns, value) in namespaces {
            let mut inner = Vec::new();
            walk("", value, &mut inner);
            out.extend(inner.into_iter().map(|path| format!("{ns}:{path}")));
        }
    }
    out.sort();
    out
}

/// Split `"ns:path"` into its parts; bare keys use `default_ns`.
fn split_key<'k>(key: &'k str, default_ns: &'k str) -> (&'k str, &'k str) {
    key.split_once(':').unwrap_or((default_ns, key))
}

/// Replace `{{name}}` placeholders.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in args {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}

/// Locale-bound view of a [`Catalog`] with a default namespace.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    catalog: &'a Catalog,
    locale: Locale,
    namespace: &'static str,
}

impl<'a> Translator<'a> {
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Same locale, different default namespace.
    pub fn with_namespace(&self, namespace: &'static str) -> Translator<'a> {
        Translator {
            namespace,
            ..*self
        }
    }

    /// Translate a key. Missing keys come back verbatim.
    pub fn t(&self, key: &str) -> String {
        let (ns, path) = split_key(key, self.namespace);
        self.catalog
            .resolve(self.locale, ns, path)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// Translate and fill `{{name}}` placeholders.
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(&self.t(key), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn toggle_alternates_between_two_codes() {
        let mut locale = Locale::Es;
        let mut seen = Vec::new();
        for _ in 0..5 {
            locale = locale.toggle();
            seen.push(locale.code());
        }
        assert_eq!(seen, vec!["en", "es", "en", "es", "en"]);
        assert!(seen.iter().all(|c| *c == "es" || *c == "en"));
    }

    #[test]
    fn parse_locale_codes() {
        assert_eq!("es".parse::<Locale>().unwrap(), Locale::Es);
        assert_eq!("EN".parse::<Locale>().unwrap(), Locale::En);
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn embedded_catalog_resolves_namespaced_keys() {
        let catalog = Catalog::embedded().unwrap();
        let es = catalog.translator(Locale::Es, "common");
        assert_eq!(es.t("navigation.home"), "Inicio");
        assert_eq!(es.t("home:hero.cta"), "Conoce nuestra misión");
        let en = catalog.translator(Locale::En, "common");
        assert_eq!(en.t("navigation.home"), "Home");
    }

    #[test]
    fn missing_key_returns_key() {
        let catalog = Catalog::embedded().unwrap();
        let tr = catalog.translator(Locale::En, "common");
        assert_eq!(tr.t("nope.nothing"), "nope.nothing");
        assert_eq!(tr.t("home:nope"), "home:nope");
    }

    #[test]
    fn table_node_is_not_a_string() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.lookup(Locale::Es, "common", "navigation"), None);
    }

    #[test]
    fn falls_back_to_spanish() {
        let mut catalog = Catalog::embedded().unwrap();
        let overlay: toml::Value = toml::from_str("[home.extra]\nonly = \"Solo español\"").unwrap();
        catalog.merge(Locale::Es, overlay);
        let en = catalog.translator(Locale::En, "home");
        assert_eq!(en.t("extra.only"), "Solo español");
    }

    #[test]
    fn interpolation_fills_placeholders() {
        let catalog = Catalog::embedded().unwrap();
        let tr = catalog.translator(Locale::Es, "donations");
        assert_eq!(
            tr.t_args("form.success", &[("symbol", "€"), ("amount", "25")]),
            "¡Gracias por tu donación de €25!"
        );
    }

    #[test]
    fn interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("{{a}} {{b}}", &[("a", "x")]), "x {{b}}");
    }

    #[test]
    fn with_namespace_keeps_locale() {
        let catalog = Catalog::embedded().unwrap();
        let tr = catalog.translator(Locale::En, "common").with_namespace("about");
        assert_eq!(tr.locale(), Locale::En);
        assert_eq!(tr.t("values.impact"), "Impact");
    }

    #[test]
    fn embedded_locales_have_identical_keys() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.missing_keys(), Vec::<(Locale, String)>::new());
    }

    #[test]
    fn missing_keys_reports_one_sided_additions() {
        let mut catalog = Catalog::embedded().unwrap();
        let overlay: toml::Value = toml::from_str("[blog]\nextra = \"More\"").unwrap();
        catalog.merge(Locale::En, overlay);
        assert_eq!(
            catalog.missing_keys(),
            vec![(Locale::Es, "blog:extra".to_string())]
        );
    }

    #[test]
    fn load_merges_override_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("locales");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("en.toml"), "[home.hero]\ntitle = \"Hello there\"\n").unwrap();

        let catalog = Catalog::load(tmp.path()).unwrap();
        let en = catalog.translator(Locale::En, "home");
        assert_eq!(en.t("hero.title"), "Hello there");
        // Sibling keys survive the merge
        assert_eq!(en.t("hero.cta"), "Discover our mission");
    }

    #[test]
    fn load_rejects_broken_override() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("locales");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("es.toml"), "[home\n").unwrap();
        assert!(matches!(
            Catalog::load(tmp.path()),
            Err(I18nError::Override(_))
        ));
    }

    #[test]
    fn submit_result_lines_are_localized() {
        let catalog = Catalog::embedded().unwrap();
        let args = [("reference", "SIM-MSG-1")];
        let es = catalog.translator(Locale::Es, "common");
        let en = catalog.translator(Locale::En, "common");
        assert_eq!(es.t_args("submit.reference", &args), "Referencia: SIM-MSG-1");
        assert_eq!(en.t_args("submit.reference", &args), "Reference: SIM-MSG-1");

        let args = [("email", "admin@almare.org")];
        let es = catalog.translator(Locale::Es, "admin");
        let en = catalog.translator(Locale::En, "admin");
        assert_eq!(
            es.t_args("signedInAs", &args),
            "Sesión iniciada como admin@almare.org"
        );
        assert_eq!(en.t_args("signedInAs", &args), "Signed in as admin@almare.org");
    }
}
