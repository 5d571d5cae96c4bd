//! Runtime configuration for hosts embedding the panel.

/// Where the collection endpoint lives when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_VAR: &str = "TODO_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    pub base_url: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl PanelConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Blank values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(BASE_URL_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_uses_default() {
        assert_eq!(PanelConfig::from_lookup(|_| None), PanelConfig::default());
    }

    #[test]
    fn variable_overrides_default() {
        let config = PanelConfig::from_lookup(|key| {
            (key == BASE_URL_VAR).then(|| "http://todo.internal:8080/".to_string())
        });
        assert_eq!(config.base_url, "http://todo.internal:8080/");
    }

    #[test]
    fn blank_variable_is_ignored() {
        let config = PanelConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
