use std::collections::HashMap;

use serde::Deserialize;

fn default_locale() -> String {
    "sk".to_string()
}

fn default_debounce_ms() -> u64 {
    250
}

/// App configuration, read from `config.toml` in the data directory.
///
/// Every field has a default so an empty or missing file works.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Locale for the "items left" label ("sk" or "en")
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Search debounce in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Hex color overrides for the TUI theme, e.g. `text = "#B0AAFF"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            locale: default_locale(),
            debounce_ms: default_debounce_ms(),
            colors: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.locale, "sk");
        assert_eq!(config.debounce_ms, 250);
        assert!(config.colors.is_empty());
    }

    #[test]
    fn partial_toml_overrides() {
        let config: AppConfig = toml::from_str(
            "\
locale = \"en\"

[colors]
text = \"#FFFFFF\"
",
        )
        .unwrap();
        assert_eq!(config.locale, "en");
        assert_eq!(config.debounce_ms, 250);
        assert_eq!(config.colors.get("text").unwrap(), "#FFFFFF");
    }
}
