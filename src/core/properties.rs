//! Java-style properties file.
//!
//! Holds the publishing credentials (`~/.gradle/gradle.properties` by
//! default). Values are secrets and are zeroed when dropped.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{ConfigError, EncryptError, Result};

/// A parsed properties file.
///
/// Later definitions of a key replace earlier ones.
#[derive(Default)]
pub struct Properties {
    entries: BTreeMap<String, Zeroizing<String>>,
}

impl Properties {
    /// Load and parse a properties file from disk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading properties");

        let contents = std::fs::read_to_string(path)
            .map(Zeroizing::new)
            .map_err(|source| ConfigError::ReadFile {
                path: path.to_path_buf(),
                source,
            })?;

        let properties = Self::parse(&contents);
        debug!(count = properties.len(), "properties loaded");
        Ok(properties)
    }

    /// Parse properties text.
    ///
    /// Supports `#` and `!` comments, `=`, `:` or whitespace separators,
    /// backslash line continuations and the usual escapes (`\t`, `\n`,
    /// `\r`, `\f`, `\uXXXX`).
    pub fn parse(contents: &str) -> Self {
        let mut entries = BTreeMap::new();

        for line in logical_lines(contents) {
            let (key, value) = split_entry(&line);
            if key.is_empty() {
                continue;
            }
            entries.insert(key, Zeroizing::new(value));
        }

        Self { entries }
    }

    /// Create from raw key-value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Zeroizing::new(v.into())))
            .collect();
        Self { entries }
    }

    /// Get a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    /// Get a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns `EncryptError::MissingProperty` if the key is absent.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| EncryptError::MissingProperty(key.to_string()).into())
    }

    /// All keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Values stay out of Debug output.
impl fmt::Debug for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Properties")
            .field("keys", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Join continuation lines and drop blanks and comments.
fn logical_lines(contents: &str) -> Vec<Zeroizing<String>> {
    let mut lines = Vec::new();
    let mut current: Option<Zeroizing<String>> = None;

    for raw in contents.lines() {
        let line = raw.trim_start();

        let mut buf = match current.take() {
            Some(buf) => buf,
            None => {
                if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                    continue;
                }
                Zeroizing::new(String::new())
            }
        };

        if continues(line) {
            buf.push_str(&line[..line.len() - 1]);
            current = Some(buf);
        } else {
            buf.push_str(line);
            lines.push(buf);
        }
    }

    if let Some(buf) = current {
        lines.push(buf);
    }

    lines
}

/// An odd number of trailing backslashes continues the line.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn split_entry(line: &str) -> (String, String) {
    let mut key_end = line.len();
    let mut escaped = false;

    for (i, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                break;
            }
            c if c.is_whitespace() => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start();
    if let Some(stripped) = rest.strip_prefix(|c| c == '=' || c == ':') {
        rest = stripped.trim_start();
    }

    (unescape(key), unescape(rest))
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000C}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(c) => out.push(c),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
