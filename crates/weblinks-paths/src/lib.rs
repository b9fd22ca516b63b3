use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("home directory not found: set the $HOME environment variable")]
    HomeNotFound,
}

impl PathError {
    pub fn error_code(&self) -> &'static str {
        match self {
            PathError::HomeNotFound => "HOME_NOT_FOUND",
        }
    }

    pub fn is_user_error(&self) -> bool {
        true
    }
}

/// Centralized path construction for the `~/.weblinks/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct WeblinksPaths {
    weblinks_dir: PathBuf,
}

impl WeblinksPaths {
    /// Resolve paths from the user's home directory (`~/.weblinks`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            weblinks_dir: home.join(".weblinks"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(weblinks_dir: PathBuf) -> Self {
        Self { weblinks_dir }
    }

    /// The base `~/.weblinks` directory.
    pub fn weblinks_dir(&self) -> &Path {
        &self.weblinks_dir
    }

    pub fn user_config(&self) -> PathBuf {
        self.weblinks_dir.join("config.toml")
    }

    /// Project-level config: `<project_root>/.weblinks/config.toml`.
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".weblinks").join("config.toml")
    }
}
