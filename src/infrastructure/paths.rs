//! Path manipulation utilities for the Zellij sandbox environment.
//!
//! In the plugin sandbox the host filesystem is mounted under `/host`, which
//! points at the cwd Zellij was started from (typically the user's home). These
//! helpers translate between user-facing paths and sandbox paths.

use std::path::PathBuf;

/// Default list file, relative to the user's home as seen from the sandbox.
pub const DEFAULT_LIST_FILE: &str = "~/list.list";

/// Returns the data directory used for the plugin log file.
///
/// Resolves to `~/.local/share/zellij/justlists` on the host.
///
/// # Examples
///
/// ```
/// use justlists::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/justlists"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("justlists")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// # Examples
///
/// ```
/// use justlists::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/lists/shopping.list"), "/host/lists/shopping.list");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
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

/// Rewrites a sandbox path the way the user would write it on the host.
///
/// # Examples
///
/// ```
/// use justlists::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/list.list"), "~/list.list");
/// assert_eq!(strip_host_prefix("/data/list.list"), "/data/list.list");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    path.strip_prefix("/host")
        .map_or_else(|| path.to_string(), |rest| format!("~{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_round_trip() {
        assert_eq!(strip_host_prefix(&expand_tilde(DEFAULT_LIST_FILE)), DEFAULT_LIST_FILE);
    }
}
