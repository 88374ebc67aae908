//! Line parser for the `key = value` config format.
//!
//! Rules:
//! - Each line is trimmed. A trimmed line starting with `#` is a comment.
//! - The line is split at the first `=`; both halves are trimmed.
//! - Lines with no `=`, or with an empty key, are skipped without error.
//! - A repeated key overwrites the earlier value.
//! - There are no inline comments: everything after the `=` is the value.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::domain::error::ConfigError;

/// Parsed config: key to trimmed raw value.
pub type RawConfig = HashMap<String, String>;

/// Splits one line into a key/value pair, or `None` if the line carries no entry.
pub fn parse_line(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.starts_with('#') {
        return None;
    }
    let (key, value) = trimmed.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Reads every line from `reader` into a [`RawConfig`]. `path` is only used
/// to label I/O errors.
pub fn parse_reader<R: BufRead>(reader: R, path: &Path) -> Result<RawConfig, ConfigError> {
    let mut config = RawConfig::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let Some((key, value)) = parse_line(&line) else {
            tracing::trace!(line = index + 1, "skipping line without entry");
            continue;
        };
        if let Some(previous) = config.insert(key.to_string(), value.to_string()) {
            tracing::trace!(
                line = index + 1,
                key,
                previous = previous.as_str(),
                "key overwritten"
            );
        }
    }
    Ok(config)
}

/// Parses config text held in memory.
pub fn parse_str(text: &str) -> RawConfig {
    text.lines()
        .filter_map(parse_line)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Fails with `MissingKey` naming the first of `keys` absent from `config`.
pub fn require_keys<S: AsRef<str>>(config: &RawConfig, keys: &[S]) -> Result<(), ConfigError> {
    match keys.iter().find(|k| !config.contains_key(k.as_ref())) {
        Some(key) => Err(ConfigError::MissingKey {
            key: key.as_ref().to_string(),
        }),
        None => Ok(()),
    }
}
