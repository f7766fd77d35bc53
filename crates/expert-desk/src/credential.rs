//! OpenAI API key lookup: environment first, hosted secrets file second.
//!
//! Resolution runs once at startup and yields an explicit [`ApiKey`] value
//! (or nothing). Every failure of the secrets file is treated as "not found";
//! the difference between a genuinely absent key and a broken store only
//! shows up in the log.

use std::{env, fmt, io, path::PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Name of the credential in both the environment and the secrets file.
pub const API_KEY_NAME: &str = "OPENAI_API_KEY";

/// Opaque OpenAI credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("secret store is not configured")]
    NotConfigured,

    #[error("secret `{0}` is not set")]
    MissingKey(String),

    #[error("secret `{0}` is not a UTF-8 string")]
    NotAString(String),

    #[error("failed to read secrets file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse secrets file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl SecretError {
    /// `true` for plain absence, `false` when the store exists but is broken.
    pub fn is_absent(&self) -> bool {
        matches!(self, SecretError::NotConfigured | SecretError::MissingKey(_))
    }
}

/// Somewhere a named secret can be looked up.
pub trait SecretSource {
    /// Human-readable name used in log lines.
    fn name(&self) -> &'static str;

    fn lookup(&self, key: &str) -> Result<String, SecretError>;
}

/// The process environment (after `.env` has been loaded into it).
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvironmentSource;

impl SecretSource for EnvironmentSource {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn lookup(&self, key: &str) -> Result<String, SecretError> {
        env::var(key).map_err(|err| match err {
            env::VarError::NotPresent => SecretError::MissingKey(key.to_owned()),
            env::VarError::NotUnicode(_) => SecretError::NotAString(key.to_owned()),
        })
    }
}

/// Hosted secret store backed by a TOML file with top-level string keys:
///
/// ```toml
/// OPENAI_API_KEY = "sk-…"
/// ```
#[derive(Debug, Clone)]
pub struct TomlSecretStore {
    path: PathBuf,
}

impl TomlSecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretSource for TomlSecretStore {
    fn name(&self) -> &'static str {
        "secrets file"
    }

    fn lookup(&self, key: &str) -> Result<String, SecretError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(SecretError::NotConfigured);
            }
            Err(source) => {
                return Err(SecretError::Unreadable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let table: toml::Table =
            toml::from_str(&contents).map_err(|source| SecretError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        match table.get(key) {
            None => Err(SecretError::MissingKey(key.to_owned())),
            Some(toml::Value::String(value)) => Ok(value.clone()),
            Some(_) => Err(SecretError::NotAString(key.to_owned())),
        }
    }
}

/// Two-tier lookup of [`API_KEY_NAME`]: `env` wins over `store`.
pub struct CredentialResolver<E = EnvironmentSource, S = TomlSecretStore> {
    env: E,
    store: S,
}

impl<E: SecretSource, S: SecretSource> CredentialResolver<E, S> {
    pub fn new(env: E, store: S) -> Self {
        Self { env, store }
    }

    /// Return the first non-empty key, or `None` when neither source has one.
    pub fn resolve(&self) -> Option<ApiKey> {
        lookup_in(&self.env).or_else(|| lookup_in(&self.store))
    }
}

fn lookup_in(source: &dyn SecretSource) -> Option<ApiKey> {
    match source.lookup(API_KEY_NAME) {
        Ok(value) if !value.is_empty() => {
            info!(source = source.name(), "resolved {API_KEY_NAME}");
            Some(ApiKey(value))
        }
        Ok(_) => {
            debug!(source = source.name(), "{API_KEY_NAME} is empty");
            None
        }
        Err(err) if err.is_absent() => {
            debug!(source = source.name(), error = %err, "{API_KEY_NAME} not found");
            None
        }
        Err(err) => {
            warn!(
                source = source.name(),
                error = %err,
                "secret source is unusable, treating {API_KEY_NAME} as absent"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, io::Write as _};

    use super::*;

    /// In-memory source standing in for either tier.
    struct MapSource(HashMap<&'static str, &'static str>);

    impl MapSource {
        fn empty() -> Self {
            Self(HashMap::new())
        }

        fn with_key(value: &'static str) -> Self {
            Self(HashMap::from([(API_KEY_NAME, value)]))
        }
    }

    impl SecretSource for MapSource {
        fn name(&self) -> &'static str {
            "map"
        }

        fn lookup(&self, key: &str) -> Result<String, SecretError> {
            self.0
                .get(key)
                .map(|v| v.to_string())
                .ok_or_else(|| SecretError::MissingKey(key.to_owned()))
        }
    }

    struct BrokenSource;

    impl SecretSource for BrokenSource {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn lookup(&self, _key: &str) -> Result<String, SecretError> {
            Err(SecretError::Unreadable {
                path: PathBuf::from("/nowhere/secrets.toml"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            })
        }
    }

    fn secrets_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn environment_wins_over_store() {
        let resolver =
            CredentialResolver::new(MapSource::with_key("sk-env"), MapSource::with_key("sk-store"));
        assert_eq!(resolver.resolve(), Some(ApiKey::new("sk-env")));
    }

    #[test]
    fn falls_back_to_store() {
        let resolver =
            CredentialResolver::new(MapSource::empty(), MapSource::with_key("sk-store"));
        assert_eq!(resolver.resolve(), Some(ApiKey::new("sk-store")));
    }

    #[test]
    fn empty_environment_value_counts_as_absent() {
        let resolver =
            CredentialResolver::new(MapSource::with_key(""), MapSource::with_key("sk-store"));
        assert_eq!(resolver.resolve(), Some(ApiKey::new("sk-store")));
    }

    #[test]
    fn absent_everywhere_is_none() {
        let resolver = CredentialResolver::new(MapSource::empty(), MapSource::empty());
        assert_eq!(resolver.resolve(), None);
    }

    #[test]
    fn broken_store_is_treated_as_absent() {
        let resolver = CredentialResolver::new(MapSource::empty(), BrokenSource);
        assert_eq!(resolver.resolve(), None);
    }

    #[test]
    fn toml_store_reads_top_level_string() {
        let file = secrets_file("OPENAI_API_KEY = \"sk-file\"\nOTHER = 1\n");
        let store = TomlSecretStore::new(file.path());
        assert_eq!(store.lookup(API_KEY_NAME).unwrap(), "sk-file");
        assert!(matches!(
            store.lookup("OTHER"),
            Err(SecretError::NotAString(_))
        ));
        assert!(matches!(
            store.lookup("MISSING"),
            Err(SecretError::MissingKey(_))
        ));
    }

    #[test]
    fn toml_store_distinguishes_missing_file_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = TomlSecretStore::new(dir.path().join("secrets.toml"));
        let err = missing.lookup(API_KEY_NAME).unwrap_err();
        assert!(matches!(err, SecretError::NotConfigured));
        assert!(err.is_absent());

        let file = secrets_file("OPENAI_API_KEY = ");
        let err = TomlSecretStore::new(file.path())
            .lookup(API_KEY_NAME)
            .unwrap_err();
        assert!(matches!(err, SecretError::Malformed { .. }));
        assert!(!err.is_absent());
    }

    #[test]
    fn debug_redacts_key() {
        assert_eq!(format!("{:?}", ApiKey::new("sk-123")), "ApiKey(<redacted>)");
    }
}
