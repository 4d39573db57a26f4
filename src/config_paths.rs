//! Where tablemode keeps its files
//!
//! ```text
//! $XDG_CONFIG_HOME/tablemode/   (else ~/.config/tablemode/, %APPDATA%\tablemode\ on Windows)
//! ├── config.yaml
//! └── logs/tablemode.log.YYYY-MM-DD
//! ```

use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "tablemode";
const CONFIG_FILE: &str = "config.yaml";
const LOGS_DIR: &str = "logs";

/// Resolve the app directory from an explicit XDG base or home directory
///
/// A relative or empty XDG base is ignored, as the XDG spec requires.
pub fn app_dir_from(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|base| base.is_absolute())
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|base| base.join(APP_DIR))
}

/// Base config directory for the current user
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        std::env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        app_dir_from(
            std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            dirs::home_dir(),
        )
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no home or config directory")
    })?;
    create_dir(&logs)?;
    Ok(logs)
}

fn create_dir(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path).map_err(|e| {
        io::Error::new(e.kind(), format!("cannot create {}: {e}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_absolute_xdg_base_wins() {
        assert_eq!(
            app_dir_from(Some("/xdg".into()), Some("/home/u".into())),
            Some(PathBuf::from("/xdg/tablemode"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_xdg_base_falls_back_to_home() {
        assert_eq!(
            app_dir_from(Some("rel".into()), Some("/home/u".into())),
            Some(PathBuf::from("/home/u/.config/tablemode"))
        );
        assert_eq!(
            app_dir_from(Some(PathBuf::new()), Some("/home/u".into())),
            Some(PathBuf::from("/home/u/.config/tablemode"))
        );
    }

    #[test]
    fn test_no_base_at_all() {
        assert_eq!(app_dir_from(None, None), None);
    }
}
