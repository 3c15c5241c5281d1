//! Path utilities for the Zellij sandbox, where `~` is reachable as `/host`.

use std::path::PathBuf;

/// File name of the OTLP span log inside [`data_dir`].
pub const TRACE_FILE_NAME: &str = "character-browser-otlp.json";

/// Directory holding the plugin's own files (span logs).
///
/// Resolves to `~/.local/share/zellij/character-browser` on the host.
///
/// ```
/// use character_browser::infrastructure::data_dir;
///
/// assert_eq!(
///     data_dir().to_str(),
///     Some("/host/.local/share/zellij/character-browser")
/// );
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("character-browser")
}

/// Location of the rotating OTLP span log.
#[must_use]
pub fn trace_file() -> PathBuf {
    data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use character_browser::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("themes/~/x.toml"), "themes/~/x.toml");
        assert_eq!(expand_tilde("~user/x.toml"), "~user/x.toml");
    }

    #[test]
    fn trace_file_lives_in_data_dir() {
        assert_eq!(trace_file().parent(), Some(data_dir().as_path()));
        assert!(trace_file().ends_with(TRACE_FILE_NAME));
    }
}
