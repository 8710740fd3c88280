use serde::{Deserialize, Serialize};

/// Display theme, fixed for the lifetime of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Resolve the `theme` query value. Only an exact `"dark"` selects dark mode.
pub fn resolve_theme(value: Option<&str>) -> ThemeMode {
    match value {
        Some(v) if v == ThemeMode::Dark.as_str() => ThemeMode::Dark,
        _ => ThemeMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_dark_is_dark() {
        assert_eq!(resolve_theme(Some("dark")), ThemeMode::Dark);
        assert_eq!(resolve_theme(Some("Dark")), ThemeMode::Light);
        assert_eq!(resolve_theme(Some(" dark")), ThemeMode::Light);
        assert_eq!(resolve_theme(Some("light")), ThemeMode::Light);
        assert_eq!(resolve_theme(Some("")), ThemeMode::Light);
        assert_eq!(resolve_theme(None), ThemeMode::Light);
    }
}
