//! Widget Configuration
//!
//! Read from the page URL query string, e.g. `?mode=modal&log=debug`.

use log::LevelFilter;
use serde::Deserialize;
use std::str::FromStr;

pub const DEFAULT_TITLE: &str = "LetsStopAIDS Frontend Test";
pub const DEFAULT_DESCRIPTION: &str = "Frontend Test";

/// How validation feedback is triggered and shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Items are created in the list and committed on blur; errors render inline
    #[default]
    Inline,
    /// Separate add row, Enter/blur commit, Escape cancel; errors raise an alert
    Modal,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationMode::Inline => "inline",
            ValidationMode::Modal => "modal",
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inline" | "1" => Ok(ValidationMode::Inline),
            "modal" | "2" => Ok(ValidationMode::Modal),
            _ => Err(()),
        }
    }
}

/// Query parameters as they arrive, before validation
#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    mode: Option<String>,
    title: Option<String>,
    description: Option<String>,
    log: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub mode: ValidationMode,
    /// Document title applied on mount
    pub title: String,
    /// `<meta name="description">` content applied on mount
    pub description: String,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl WidgetConfig {
    /// Parse a query string (with or without the leading `?`).
    ///
    /// Unknown keys are ignored; malformed values keep their defaults.
    /// A query that does not decode at all yields the defaults.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: QueryParams = serde_urlencoded::from_str(query).unwrap_or_else(|e| {
            log::debug!("[CONFIG] Ignoring query {:?}: {}", query, e);
            QueryParams::default()
        });
        Self::from_params(params)
    }

    fn from_params(params: QueryParams) -> Self {
        let defaults = Self::default();
        Self {
            mode: params.mode.and_then(|m| m.parse().ok()).unwrap_or(defaults.mode),
            title: non_blank(params.title).unwrap_or(defaults.title),
            description: non_blank(params.description).unwrap_or(defaults.description),
            log_level: params.log.and_then(|l| l.parse().ok()).unwrap_or(defaults.log_level),
        }
    }

    /// Read config from the current page location
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
