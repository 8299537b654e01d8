pub mod actions;
pub mod theme;

pub mod settings {
    use crate::theme::Theme;
    use serde::{Deserialize, Serialize};
    use std::fs;
    use std::path::{Path, PathBuf};

    #[derive(Debug, thiserror::Error)]
    pub enum SettingsError {
        #[error("failed to read settings file {path}: {source}")]
        Io {
            path: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("invalid settings file {path}: {source}")]
        Parse {
            path: PathBuf,
            #[source]
            source: serde_json::Error,
        },
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct AppSettings {
        #[serde(default)]
        pub theme: Theme,
    }

    impl AppSettings {
        /// Read settings from a JSON file. Missing fields take their defaults.
        pub fn load(path: &Path) -> Result<Self, SettingsError> {
            let bytes = fs::read(path).map_err(|source| SettingsError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_slice(&bytes).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
    }

}
