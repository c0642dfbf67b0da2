//! Error types for hatch.
//!
//! Errors are grouped by the stage that raises them. The top-level
//! [`Error`] wraps each group so callers can match on the stage first and
//! the concrete failure second.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Encrypt(#[from] EncryptError),

    #[error(transparent)]
    Runner(#[from] RunnerError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration and input file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("invalid project path: {0}")]
    InvalidProject(PathBuf),
}

/// Secret encryption stage errors.
#[derive(Error, Debug)]
pub enum EncryptError {
    #[error("property not found: {0}")]
    MissingProperty(String),

    #[error("keystore not found: {}", .0.display())]
    KeystoreNotFound(PathBuf),

    #[error("no encryption key id in `encrypt-file` output")]
    KeyIdNotFound,
}

/// External command errors.
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("{0} not found in PATH")]
    NotFound(String),

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("`{0}` produced non-UTF-8 output")]
    InvalidOutput(String),
}

/// Template registration and rendering errors.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("failed to register template {name}: {source}")]
    Register {
        name: &'static str,
        #[source]
        source: Box<handlebars::TemplateError>,
    },

    #[error("failed to render template {name}: {source}")]
    Render {
        name: &'static str,
        #[source]
        source: Box<handlebars::RenderError>,
    },
}

/// Scaffold writing errors.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("{0} file(s) could not be written")]
    EntriesFailed(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
