//! Path helpers for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, and `/tmp` is
//! private to the Zellij server process.

use std::path::{Path, PathBuf};

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Returns the durable data directory, `/host/.local/share/zellij/quotebook`.
///
/// `/host` normally resolves to the directory Zellij was started from, so this is
/// usually `~/.local/share/zellij/quotebook` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("quotebook")
}

/// Returns the default root for per-session scratch directories.
#[must_use]
pub fn get_session_root() -> PathBuf {
    PathBuf::from("/tmp/quotebook")
}

/// Directory holding the session cache of one Zellij server instance.
///
/// ```
/// use quotebook::infrastructure::session_dir;
/// use std::path::Path;
///
/// assert_eq!(
///     session_dir(Path::new("/tmp/quotebook"), 4242),
///     Path::new("/tmp/quotebook/session-4242")
/// );
/// ```
#[must_use]
pub fn session_dir(root: &Path, session_id: u32) -> PathBuf {
    root.join(format!("session-{session_id}"))
}

/// Expands `~` to the sandbox host root.
///
/// ```
/// use quotebook::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/quotes.json"), "/host/quotes.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/q.json"), "/tmp/q.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_ROOT, 1)
    } else if path == "~" {
        HOST_ROOT.to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix for display.
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

/// Maps a path typed by the user to a sandbox path.
///
/// Tilde paths and relative paths resolve under the host root; absolute paths are
/// kept.
#[must_use]
pub fn resolve_user_path(typed: &str) -> String {
    let typed = typed.trim();
    let expanded = expand_tilde(typed);
    if Path::new(&expanded).is_absolute() {
        expanded
    } else {
        format!("{HOST_ROOT}/{expanded}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_lives_under_host() {
        assert_eq!(
            get_data_dir(),
            PathBuf::from("/host/.local/share/zellij/quotebook")
        );
    }

    #[test]
    fn strip_host_prefix_shows_home_relative_paths() {
        assert_eq!(strip_host_prefix("/host/quotes.json"), "~/quotes.json");
        assert_eq!(strip_host_prefix("/host"), "~");
        assert_eq!(strip_host_prefix("/hostile/x"), "/hostile/x");
        assert_eq!(strip_host_prefix("/tmp/x"), "/tmp/x");
    }

    #[test]
    fn resolve_user_path_handles_every_form() {
        assert_eq!(resolve_user_path("~/in.json"), "/host/in.json");
        assert_eq!(resolve_user_path("  backup/in.json "), "/host/backup/in.json");
        assert_eq!(resolve_user_path("/data/in.json"), "/data/in.json");
    }
}
