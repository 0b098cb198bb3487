//! Signing key resolution and format checks

use std::path::Path;

use crate::{Error, Result};

/// Key type prefixes accepted for `user.signingkey`
pub const SIGNING_KEY_PREFIXES: [&str; 5] = [
    "ssh-rsa",
    "ecdsa-sha2-nistp256",
    "ecdsa-sha2-nistp384",
    "ecdsa-sha2-nistp521",
    "ssh-ed25519",
];

/// Check whether `key` starts with a supported key type
pub fn is_valid_signing_key(key: &str) -> bool {
    SIGNING_KEY_PREFIXES
        .iter()
        .any(|prefix| key.starts_with(prefix))
}

/// Resolve a signing key argument to the key text
///
/// If `value` names an existing path its contents are read and trimmed,
/// otherwise `value` is taken literally. The result must carry a supported
/// key type prefix.
pub fn resolve_signing_key(value: &str) -> Result<String> {
    let path = Path::new(value);

    let key = if path.exists() {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::Other(format!("Error reading signing key file: {}", e))
        })?;
        tracing::debug!(path = %path.display(), "Read signing key from file");
        contents.trim().to_string()
    } else {
        value.to_string()
    };

    if !is_valid_signing_key(&key) {
        return Err(Error::InvalidSigningKey);
    }

    Ok(key)
}
