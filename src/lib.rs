//! Character Browser: a Zellij plugin for browsing characters from a REST API.
//!
//! The plugin shows one page of characters as a grid of cards with:
//! - name search, debounced so typing does not flood the API
//! - page buttons shown a "portion" at a time, with arrows to move between portions
//! - distinct loading, error and list states
//! - a detail modal for the highlighted character
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! │  - key / timer / web result mapping                 │
//! │  - web_request, set_timeout, hide_self              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, actions                          │
//! │  - Debounce, pagination                             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────┐                    ┌────────────────┐
//! │ UI Layer      │                    │ API Layer      │
//! │ (ui/)         │                    │ (api/)         │
//! │ - Rendering   │                    │ - URL building │
//! │ - Theming     │                    │ - Response     │
//! │ - Components  │                    │   classifying  │
//! └───────────────┘                    └────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Character records, errors                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The library never calls the host. HTTP, timers and hiding the pane are
//! [`Action`]s performed by `main.rs`, which keeps everything here testable
//! on the native target.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/character-browser.wasm" {
//!         api_url "https://rickandmortyapi.com/api"
//!         debounce_ms "500"
//!         portion_size "10"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use character_browser::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(actions.as_slice(), [Action::Fetch(_)]));
//! # Ok::<(), character_browser::BrowserError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use api::{parse_response, ApiRequest, CharacterClient, FetchError};
pub use app::{handle_event, Action, Event, InputMode, PageState, RenderState};
pub use domain::{BrowserError, Character, CharacterPage, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Base URL used when `api_url` is not configured.
pub const DEFAULT_API_URL: &str = "https://rickandmortyapi.com/api";

/// Search debounce used when `debounce_ms` is not configured.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Plugin configuration, read from the plugin's KDL block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the character API, without the `/character` suffix.
    pub api_url: String,

    /// Quiet period before typed search text triggers a request.
    pub debounce_ms: u64,

    /// Page buttons shown per portion. Never zero.
    pub portion_size: u32,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` means the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            portion_size: app::DEFAULT_PORTION_SIZE,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys and values that do not parse fall back to the defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use character_browser::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    /// map.insert("portion_size".to_string(), "many".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.portion_size, 10);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_url = config
            .get("api_url")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .filter(|s| match validate_api_url(s) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring api_url");
                    false
                }
            })
            .map_or(defaults.api_url, String::from);

        let debounce_ms = config
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        let portion_size = config
            .get("portion_size")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.portion_size);

        Self {
            api_url,
            debounce_ms,
            portion_size,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Resolves the configured theme, falling back to the default on error.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        let loaded = match (&self.theme_file, &self.theme_name) {
            (Some(file), _) => Theme::from_file(infrastructure::expand_tilde(file)),
            (None, Some(name)) => Theme::from_name(name),
            (None, None) => return Theme::default(),
        };

        loaded.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load theme, using default");
            Theme::default()
        })
    }
}

/// Checks that `url` is an absolute `http` or `https` URL.
///
/// # Errors
///
/// Returns [`BrowserError::Config`] describing the problem.
///
/// ```rust
/// use character_browser::validate_api_url;
///
/// assert!(validate_api_url("https://rickandmortyapi.com/api").is_ok());
/// assert!(validate_api_url("ftp://example.com").is_err());
/// assert!(validate_api_url("/api").is_err());
/// ```
pub fn validate_api_url(url: &str) -> Result<()> {
    let parsed =
        url::Url::parse(url).map_err(|e| BrowserError::Config(format!("api_url '{url}': {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(BrowserError::Config(format!(
            "api_url '{url}': unsupported scheme '{other}'"
        ))),
    }
}

/// Creates the page state for a freshly loaded plugin.
///
/// Nothing is fetched yet; the runtime sends [`Event::Mount`] once web
/// access has been granted.
#[must_use]
pub fn initialize(config: &Config) -> PageState {
    tracing::debug!(
        api_url = %config.api_url,
        debounce_ms = config.debounce_ms,
        portion_size = config.portion_size,
        "initializing character browser"
    );

    PageState::new(
        CharacterClient::new(config.api_url.clone()),
        config.load_theme(),
        config.debounce(),
        config.portion_size,
    )
}
