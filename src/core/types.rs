//! Domain types shared by the encryption stage and the renderer.

use serde::Serialize;
use std::fmt;

/// A property name (e.g., repositoryUser).
pub type PropertyName = String;

/// Output of `travis encrypt` for one `name=value` pair.
///
/// Opaque text, embedded verbatim into the pipeline file.
pub type EncryptedSecret = String;

/// Identifier extracted from `travis encrypt-file` output.
///
/// Names the `$encrypted_<id>_key` and `$encrypted_<id>_iv` variables
/// that hold the keystore's decryption key and IV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeyId(String);

impl KeyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the variable holding the decryption key.
    pub fn key_var(&self) -> String {
        format!("encrypted_{}_key", self.0)
    }

    /// Name of the variable holding the initialization vector.
    pub fn iv_var(&self) -> String {
        format!("encrypted_{}_iv", self.0)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
