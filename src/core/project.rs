//! Target project location.

use std::path::{Component, Path, PathBuf};

use crate::error::{ConfigError, Result};

/// A project directory and the name derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
    name: String,
}

impl Project {
    /// Resolve a project from its target directory.
    ///
    /// The name is the last path component, so `work/my-lib` yields
    /// `my-lib`. Paths ending in `.` or `..` take their name from the
    /// directory they point at, relative to the current directory. The
    /// directory does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProject` if the path resolves to no
    /// named directory (e.g. `/`).
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        match last_name(root) {
            Some(name) => Ok(Self {
                name,
                root: root.to_path_buf(),
            }),
            None => Self::new_in(root, &std::env::current_dir()?),
        }
    }

    /// Resolve a project against an explicit working directory.
    ///
    /// The root is kept as given; only the name comes from the resolved
    /// path.
    pub fn new_in(root: impl AsRef<Path>, cwd: &Path) -> Result<Self> {
        let root = root.as_ref();
        let name = last_name(root)
            .or_else(|| last_name(&normalize(&cwd.join(root))))
            .ok_or_else(|| ConfigError::InvalidProject(root.to_path_buf()))?;

        Ok(Self {
            name,
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn last_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

/// Drop `.` and apply `..` without touching the file system.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
