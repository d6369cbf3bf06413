use crate::error::StorageError;
use std::fmt;

/// Longest accepted key, in bytes.
pub const MAX_KEY_LEN: usize = 128;

/// A validated storage key.
///
/// Keys are case-preserving and limited to ASCII letters, digits, `_` and `-`, which keeps
/// every key a safe single path component for [`FileStore`](crate::FileStore).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StorageKey(String);

impl StorageKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for StorageKey {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, StorageError> {
        if value.is_empty() {
            return Err(StorageError::InvalidKey {
                message: "EMPTY".into(),
                context: Some("Key cannot be empty".into()),
            });
        }

        if value.len() > MAX_KEY_LEN {
            return Err(StorageError::InvalidKey {
                message: format!("{}...", value.chars().take(16).collect::<String>()).into(),
                context: Some(format!("Key longer than {MAX_KEY_LEN} bytes").into()),
            });
        }

        if !value.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-') {
            return Err(StorageError::InvalidKey {
                message: value.to_owned().into(),
                context: Some("Key contains illegal characters".into()),
            });
        }

        Ok(Self(value.to_owned()))
    }
}

impl TryFrom<String> for StorageKey {
    type Error = StorageError;

    fn try_from(value: String) -> Result<Self, StorageError> {
        Self::try_from(value.as_str())
    }
}

impl AsRef<str> for StorageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
