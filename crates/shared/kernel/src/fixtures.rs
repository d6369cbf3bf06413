//! Static JSON fixtures (product catalog, adoptable pets).

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, error};

/// Progress of a fixture load.
///
/// A failed load is kept distinct from a successful load that happens to be empty, so a
/// panel can say "could not load" instead of "nothing matched".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Loadable<T> {
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Loading => Loadable::Loading,
            Self::Failed(reason) => Loadable::Failed(reason),
            Self::Ready(value) => Loadable::Ready(f(value)),
        }
    }
}

/// Reads and decodes a JSON fixture. Failures are logged and reported as [`Loadable::Failed`].
pub async fn load_fixture<T>(path: impl AsRef<Path>) -> Loadable<T>
where
    T: DeserializeOwned,
{
    let path = path.as_ref();

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) => {
            error!(path = %path.display(), error = %err, "Failed to read fixture");
            return Loadable::Failed(format!("Failed to read {}: {err}", path.display()));
        },
    };

    match serde_json::from_str(&raw) {
        Ok(value) => {
            debug!(path = %path.display(), bytes = raw.len(), "Fixture loaded");
            Loadable::Ready(value)
        },
        Err(err) => {
            error!(path = %path.display(), error = %err, "Fixture is not valid JSON");
            Loadable::Failed(format!("Failed to parse {}: {err}", path.display()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Catalog {
        products: Vec<String>,
    }

    #[tokio::test]
    async fn ready_when_file_parses() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("pet-products.json");
        std::fs::write(&path, r#"{"products":[]}"#)?;

        let loaded: Loadable<Catalog> = load_fixture(&path).await;
        assert_eq!(loaded, Loadable::Ready(Catalog { products: vec![] }));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_failed_not_empty() {
        let loaded: Loadable<Catalog> = load_fixture("/no/such/fixture.json").await;
        assert!(matches!(loaded, Loadable::Failed(ref reason) if reason.contains("fixture.json")));
        assert!(loaded.ready().is_none());
    }

    #[tokio::test]
    async fn malformed_file_is_failed() -> std::io::Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("adoptable-pets.json");
        std::fs::write(&path, "[oops")?;

        let loaded: Loadable<Catalog> = load_fixture(&path).await;
        assert!(matches!(loaded, Loadable::Failed(_)));
        Ok(())
    }

    #[test]
    fn map_preserves_state() {
        assert_eq!(Loadable::Ready(2).map(|n| n * 2), Loadable::Ready(4));
        assert_eq!(Loadable::<u8>::Loading.map(|n| n * 2), Loadable::Loading);
        assert_eq!(Loadable::<u8>::Failed("x".into()).map(|n| n * 2), Loadable::Failed("x".into()));
    }
}
