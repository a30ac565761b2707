//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table and the user's file is merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Config File Location
//!
//! ```text
//! content/
//! ├── config.toml      # Site config (optional)
//! ├── locales/         # Translation overrides (see `i18n`)
//! ├── assets/
//! └── blog/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! [site]
//! name = "Almare"
//! base_url = "https://almare.org"
//! logo = "/logo-almare.jpg"
//! default_image = "/banner.jpeg"
//!
//! [i18n]
//! default_locale = "es"      # "es" or "en"; the other locale lives under /{code}/
//!
//! [contact]
//! email = "info@almare.org"
//! phone = "+34 123 456 789"
//! whatsapp_number = "34123456789"
//!
//! [donations]
//! presets = [10, 25, 50, 100]
//! default_amount = 25
//! currency_symbol = "€"
//!
//! [submission]
//! delay_ms = 2000            # Simulated network delay for contact/donation
//! login_delay_ms = 1500      # Simulated delay for the admin login
//!
//! [analytics]
//! endpoint = ""              # Page-view beacon URL; empty disables it
//!
//! [colors]
//! primary = "#2563eb"
//! primary_dark = "#1d4ed8"
//! ...
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::forms::donation::{MAX_AMOUNT, MIN_AMOUNT};
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub i18n: I18nConfig,
    pub contact: ContactConfig,
    pub donations: DonationsConfig,
    pub submission: SubmissionConfig,
    pub analytics: AnalyticsConfig,
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        let base_ok = Url::parse(&self.site.base_url)
            .ok()
            .is_some_and(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some());
        if !base_ok {
            return Err(ConfigError::Validation(
                "site.base_url must be an absolute http(s) URL".into(),
            ));
        }
        if self.donations.presets.is_empty() {
            return Err(ConfigError::Validation(
                "donations.presets must not be empty".into(),
            ));
        }
        let in_bounds = |amount: u32| (MIN_AMOUNT..=MAX_AMOUNT).contains(&f64::from(amount));
        if let Some(bad) = self.donations.presets.iter().find(|&&a| !in_bounds(a)) {
            return Err(ConfigError::Validation(format!(
                "donations.presets value {bad} is outside {MIN_AMOUNT}-{MAX_AMOUNT}"
            )));
        }
        if !in_bounds(self.donations.default_amount) {
            return Err(ConfigError::Validation(format!(
                "donations.default_amount must be within {MIN_AMOUNT}-{MAX_AMOUNT}"
            )));
        }
        if !self.contact.whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::Validation(
                "contact.whatsapp_number must contain digits only".into(),
            ));
        }
        Ok(())
    }

    /// Absolute URL for a site-relative path (`/about/` → `https://…/about/`).
    pub fn absolute_url(&self, path: &str) -> String {
        format!("{}{}", self.site.base_url.trim_end_matches('/'), path)
    }
}

/// Organization identity and shared imagery.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    /// Public origin used for canonical URLs and the sitemap.
    pub base_url: String,
    pub logo: String,
    /// Open Graph image used when a page does not provide its own.
    pub default_image: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Almare".to_string(),
            base_url: "https://almare.org".to_string(),
            logo: "/logo-almare.jpg".to_string(),
            default_image: "/banner.jpeg".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct I18nConfig {
    /// Locale served at the site root.
    pub default_locale: Locale,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: Locale::Es,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    /// International number without `+`, as `wa.me` expects it.
    pub whatsapp_number: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: "info@almare.org".to_string(),
            phone: "+34 123 456 789".to_string(),
            whatsapp_number: "34123456789".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DonationsConfig {
    /// Amounts offered as one-click buttons on the donation form.
    pub presets: Vec<u32>,
    /// Amount preselected when the form is first shown.
    pub default_amount: u32,
    pub currency_symbol: String,
}

impl Default for DonationsConfig {
    fn default() -> Self {
        Self {
            presets: vec![10, 25, 50, 100],
            default_amount: 25,
            currency_symbol: "€".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SubmissionConfig {
    pub delay_ms: u64,
    pub login_delay_ms: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            login_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Page-view beacon endpoint. Empty disables reporting.
    pub endpoint: String,
}

impl AnalyticsConfig {
    pub fn endpoint(&self) -> Option<&str> {
        Some(self.endpoint.trim()).filter(|e| !e.is_empty())
    }
}

/// Brand palette, emitted as CSS custom properties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub primary: String,
    pub primary_dark: String,
    pub primary_soft: String,
    pub accent: String,
    pub text: String,
    pub text_muted: String,
    pub background: String,
    pub surface: String,
    pub border: String,
    pub error: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#2563eb".to_string(),
            primary_dark: "#1d4ed8".to_string(),
            primary_soft: "#dbeafe".to_string(),
            accent: "#16a34a".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            border: "#e5e7eb".to_string(),
            error: "#dc2626".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(SiteConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Read a TOML file as a raw value. `Ok(None)` when the file does not exist.
pub fn load_raw_toml(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load `config.toml` from the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match load_raw_toml(&root.join("config.toml"))? {
        Some(overlay) => merge_toml(base, overlay),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Almare Site Configuration
# =========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Organization
# ---------------------------------------------------------------------------
[site]
name = "Almare"
# Public origin, used for canonical URLs, hreflang links and sitemap.xml.
base_url = "https://almare.org"
# Paths are site-relative; put the files in content/assets/.
logo = "/logo-almare.jpg"
# Open Graph image for pages without their own.
default_image = "/banner.jpeg"

# ---------------------------------------------------------------------------
# Languages
# ---------------------------------------------------------------------------
[i18n]
# Locale served at the site root: "es" or "en".
# The other locale is generated under /en/ (or /es/).
default_locale = "es"

# ---------------------------------------------------------------------------
# Contact details shown in the footer and on the contact page
# ---------------------------------------------------------------------------
[contact]
email = "info@almare.org"
phone = "+34 123 456 789"
# Digits only, international format, used for the floating WhatsApp link.
whatsapp_number = "34123456789"

# ---------------------------------------------------------------------------
# Donation form
# ---------------------------------------------------------------------------
[donations]
# One-click amounts. Each must lie within 5-10000.
presets = [10, 25, 50, 100]
default_amount = 25
currency_symbol = "€"

# ---------------------------------------------------------------------------
# Form submission
# ---------------------------------------------------------------------------
[submission]
# Simulated network delay (milliseconds) before a contact or donation
# request is reported as sent.
delay_ms = 2000
login_delay_ms = 1500

# ---------------------------------------------------------------------------
# Analytics
# ---------------------------------------------------------------------------
[analytics]
# Page views are sent here with navigator.sendBeacon. Empty disables it.
endpoint = ""

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
primary = "#2563eb"
primary_dark = "#1d4ed8"
primary_soft = "#dbeafe"
accent = "#16a34a"
text = "#111827"
text_muted = "#4b5563"
background = "#ffffff"
surface = "#f9fafb"
border = "#e5e7eb"
error = "#dc2626"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-primary-dark: {primary_dark};
    --color-primary-soft: {primary_soft};
    --color-accent: {accent};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-bg: {background};
    --color-surface: {surface};
    --color-border: {border};
    --color-error: {error};
}}"#,
        primary = colors.primary,
        primary_dark = colors.primary_dark,
        primary_soft = colors.primary_soft,
        accent = colors.accent,
        text = colors.text,
        text_muted = colors.text_muted,
        background = colors.background,
        surface = colors.surface,
        border = colors.border,
        error = colors.error,
    )
}
