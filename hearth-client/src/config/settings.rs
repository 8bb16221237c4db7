//! User preference settings

/// Dashboard address used until the user configures one
pub const DEFAULT_SERVER_URL: &str = "http://homeassistant.local:8123";

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 720.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 560.0;

/// Smallest window the layout still works in
pub const MIN_WINDOW_WIDTH: f32 = 480.0;

/// Smallest window the layout still works in
pub const MIN_WINDOW_HEIGHT: f32 = 400.0;

/// User preferences for the application
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct Settings {
    /// Base address of the dashboard
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Long-lived access token of an administrator
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub access_token: String,

    /// UI language (e.g. "de"); the system locale is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: f32,

    /// Window height in pixels
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            access_token: String::new(),
            locale: None,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("server_url", &self.server_url)
            .field(
                "access_token",
                &(!self.access_token.is_empty()).then_some("[REDACTED]"),
            )
            .field("locale", &self.locale)
            .field("window_width", &self.window_width)
            .field("window_height", &self.window_height)
            .finish()
    }
}

// =============================================================================
// Default Functions (for serde)
// =============================================================================

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_window_width() -> f32 {
    DEFAULT_WINDOW_WIDTH
}

fn default_window_height() -> f32 {
    DEFAULT_WINDOW_HEIGHT
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert!(settings.access_token.is_empty());
        assert!(settings.locale.is_none());
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(settings.window_height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"locale":"de"}"#).expect("deserialize");
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.locale.as_deref(), Some("de"));
        assert_eq!(settings.window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn test_empty_token_not_written() {
        let json = serde_json::to_string(&Settings::default()).expect("serialize");
        assert!(!json.contains("access_token"));
        assert!(!json.contains("locale"));
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = Settings {
            access_token: "eyJhbGciOi".to_string(),
            ..Default::default()
        };
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("eyJhbGciOi"));
        assert!(debug.contains("[REDACTED]"));
    }
}
