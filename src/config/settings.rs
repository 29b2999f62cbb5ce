use crate::adapters::browser::{DEFAULT_CARD_SELECTOR, DEFAULT_PAGE_URL_TEMPLATE};
use crate::adapters::http::{DEFAULT_CARDS_ENDPOINT, DEFAULT_RECOMMENDATIONS_ENDPOINT};
use crate::core::extractor::{DEFAULT_NAME_LINE, DEFAULT_SYNERGY_LINE};
use crate::core::slug::DEFAULT_STRIP_CHARS;
use crate::utils::error::{RecsError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_url, validate_url_template, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Optional TOML overrides for the fetch collaborators. Every key may be
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub browser: BrowserSettings,
    pub layout: LayoutSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    pub cards_endpoint: String,
    pub recommendations_endpoint: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            cards_endpoint: DEFAULT_CARDS_ENDPOINT.to_string(),
            recommendations_endpoint: DEFAULT_RECOMMENDATIONS_ENDPOINT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    pub page_url_template: String,
    pub card_selector: String,
    pub slug_strip_chars: String,
    pub chrome_path: Option<PathBuf>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            page_url_template: DEFAULT_PAGE_URL_TEMPLATE.to_string(),
            card_selector: DEFAULT_CARD_SELECTOR.to_string(),
            slug_strip_chars: DEFAULT_STRIP_CHARS.to_string(),
            chrome_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub name_line: usize,
    pub synergy_line: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            name_line: DEFAULT_NAME_LINE,
            synergy_line: DEFAULT_SYNERGY_LINE,
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content)?;
        Ok(settings)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api.cards_endpoint", &self.api.cards_endpoint)?;
        validate_url(
            "api.recommendations_endpoint",
            &self.api.recommendations_endpoint,
        )?;
        validate_url_template("browser.page_url_template", &self.browser.page_url_template)?;
        validate_non_empty_string("browser.card_selector", &self.browser.card_selector)?;

        if self.layout.name_line == self.layout.synergy_line {
            return Err(RecsError::InvalidConfigValueError {
                field: "layout.synergy_line".to_string(),
                value: self.layout.synergy_line.to_string(),
                reason: "Name and synergy must be on different lines".to_string(),
            });
        }
        Ok(())
    }
}
