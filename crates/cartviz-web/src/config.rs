//! Startup configuration, read once from the page URL.

use cartviz_protocol::{QueryParams, ThemeMode, resolve_theme};

pub const DEFAULT_WHEEL_ASSET: &str = "wheel.obj";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub theme: ThemeMode,
    /// Log the reason for every dropped message.
    pub debug: bool,
    pub wheel_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            debug: false,
            wheel_url: DEFAULT_WHEEL_ASSET.to_string(),
        }
    }
}

impl Config {
    /// Build from a query-parameter lookup.
    pub fn from_query(get: impl Fn(&str) -> Option<String>) -> Self {
        let debug = matches!(get(QueryParams::DEBUG).as_deref(), Some("1" | "true"));
        let wheel_url = get(QueryParams::WHEEL_ASSET)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_WHEEL_ASSET.to_string());
        Self {
            theme: resolve_theme(get(QueryParams::THEME).as_deref()),
            debug,
            wheel_url,
        }
    }

    /// Read the current page's query string.
    pub fn from_location() -> Self {
        let params = crate::dom::window()
            .location()
            .href()
            .ok()
            .and_then(|href| web_sys::Url::new(&href).ok())
            .map(|url| url.search_params());
        match params {
            Some(params) => Self::from_query(|key| params.get(key)),
            None => Self::default(),
        }
    }
}
