//! Secret encryption stage.
//!
//! Turns plaintext publishing credentials into `secure:` values for the
//! pipeline file and encrypts the signing keystore, recovering the key id
//! that names its decryption variables.

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

use crate::core::constants;
use crate::core::properties::Properties;
use crate::core::runner::Runner;
use crate::core::types::{EncryptedSecret, KeyId, PropertyName};
use crate::error::{EncryptError, Result};

/// Output of the encryption stage.
#[derive(Debug, Clone, PartialEq)]
pub struct Encrypted {
    /// Encrypted `name=value` pairs, in declaration order.
    pub secure: Vec<EncryptedSecret>,
    /// Key id of the encrypted keystore.
    pub key: KeyId,
}

/// Inputs for one run of the stage.
pub struct EncryptRequest<'a> {
    pub properties: &'a Properties,
    pub names: &'a [PropertyName],
    pub keystore: &'a Path,
    /// Project root; receives the encrypted keystore.
    pub project: &'a Path,
}

/// Encrypt every named property and the keystore.
///
/// All names are checked before the tool runs, so a missing property
/// never leaves a half-encrypted set behind. A stale encrypted keystore
/// in the project root is removed before `encrypt-file` regenerates it.
///
/// # Errors
///
/// - `EncryptError::MissingProperty` if a name is absent
/// - `EncryptError::KeystoreNotFound` if the keystore file is missing
/// - `EncryptError::KeyIdNotFound` if `encrypt-file` output has no key id
/// - `RunnerError` if the tool fails
pub fn encrypt_secrets(request: &EncryptRequest<'_>, runner: &dyn Runner) -> Result<Encrypted> {
    let pairs = request
        .names
        .iter()
        .map(|name| {
            request
                .properties
                .require(name)
                .map(|value| (name.as_str(), value))
        })
        .collect::<Result<Vec<_>>>()?;

    if !request.keystore.is_file() {
        return Err(EncryptError::KeystoreNotFound(request.keystore.to_path_buf()).into());
    }

    info!(count = pairs.len(), "encrypting properties");
    let mut secure = Vec::with_capacity(pairs.len());
    for (name, value) in pairs {
        debug!(property = name, "encrypting");
        let arg = zeroize::Zeroizing::new(format!("{}={}", name, value));
        let out = runner.run(&["encrypt", arg.as_str()])?;
        secure.push(out.trim_end().to_string());
    }

    let stale = encrypted_keystore_path(request.project);
    if stale.is_file() {
        info!(path = %stale.display(), "removing existing encrypted keystore");
        std::fs::remove_file(&stale)?;
    }

    info!(keystore = %request.keystore.display(), "encrypting keystore");
    let keystore = request.keystore.to_string_lossy();
    let out = runner.run(&["encrypt-file", keystore.as_ref()])?;
    let key = parse_key_id(&out)?;
    debug!(key = %key, "found key id");

    Ok(Encrypted { secure, key })
}

/// Location of the encrypted keystore inside a project.
pub fn encrypted_keystore_path(project: &Path) -> PathBuf {
    project.join(constants::ENCRYPTED_KEYSTORE)
}

/// Extract the key id from `encrypt-file` output.
///
/// `$encrypted_0a1b2c3d_key` yields `0a1b2c3d`.
///
/// # Errors
///
/// Returns `EncryptError::KeyIdNotFound` if the pattern is absent.
pub fn parse_key_id(output: &str) -> Result<KeyId> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(constants::KEY_ID_PATTERN).expect("key id pattern is valid")
    });

    pattern
        .captures(output)
        .and_then(|caps| caps.get(1))
        .map(|m| KeyId::new(m.as_str()))
        .ok_or_else(|| EncryptError::KeyIdNotFound.into())
}
