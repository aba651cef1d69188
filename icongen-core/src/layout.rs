use std::path::{Path, PathBuf};

pub const PROJECT_ROOT_VAR: &str = "ICONGEN_PROJECT_ROOT";

const SOURCE: &str = "assets/images/logo.jpg";

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("failed to get path to the current executable")]
    CurrentExe(#[source] std::io::Error),
    #[error("executable '{}' has no project directory two levels up", .0.display())]
    NoAnchor(PathBuf),
}

/// Locations of the logo and the generated icons within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Layout { root: root.into() }
    }

    /// Uses `ICONGEN_PROJECT_ROOT` when set, else the directory two levels
    /// above the running executable.
    pub fn from_env() -> Result<Self, LayoutError> {
        match std::env::var_os(PROJECT_ROOT_VAR) {
            Some(root) if !root.is_empty() => Ok(Layout::new(root)),
            _ => {
                let exe = std::env::current_exe().map_err(LayoutError::CurrentExe)?;
                Layout::from_exe(&exe)
            }
        }
    }

    pub fn from_exe(exe: &Path) -> Result<Self, LayoutError> {
        exe.parent()
            .and_then(Path::parent)
            .filter(|root| !root.as_os_str().is_empty())
            .map(Layout::new)
            .ok_or_else(|| LayoutError::NoAnchor(exe.to_owned()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source(&self) -> PathBuf {
        self.root.join(SOURCE)
    }

    pub fn resolve(&self, relative: &Path) -> PathBuf {
        self.root.join(relative)
    }
}
