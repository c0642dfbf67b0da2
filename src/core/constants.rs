//! Constants used throughout hatch.
//!
//! Centralizes file names and default configuration values.

/// User configuration file, relative to HOME (~/.hatch.toml).
pub const CONFIG_FILE: &str = ".hatch.toml";

/// Default external CI tool.
pub const DEFAULT_TOOL: &str = "travis";

/// Default credentials properties file, relative to HOME.
pub const DEFAULT_PROPERTIES: &str = ".gradle/gradle.properties";

/// Default signing keystore, relative to HOME.
pub const DEFAULT_KEYSTORE: &str = ".gnupg/secring.gpg";

/// Encrypted keystore written into the project root by `encrypt-file`.
pub const ENCRYPTED_KEYSTORE: &str = "secring.gpg.enc";

/// Properties encrypted into the pipeline, in declaration order.
pub const DEFAULT_SECURE: &[&str] = &[
    "repositoryUrl",
    "repositoryUser",
    "repositoryPassword",
    "signingKeyId",
    "signingPassword",
];

/// Pattern locating the key id in `encrypt-file` output.
pub const KEY_ID_PATTERN: &str = r"\$encrypted_([^_]+)_key";
