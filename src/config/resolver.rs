//! Secret resolution with an env → dotenv file → default fallback chain.
//!
//! Candidate files are read as `java.util.Properties` text, one line at a
//! time. Values are taken literally: no `$VAR` interpolation happens, and a
//! line that fails to parse is skipped without hiding the rest of the file.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use super::error::ConfigError;

/// Dotenv files consulted when a key is missing from the environment,
/// in lookup order. The working-directory file is appended at runtime.
pub const FIXED_ENV_FILE_PATHS: [&str; 3] = [".env", "/opt/keycloak/.env", "/config/.env"];

/// Where environment lookups are answered from.
#[derive(Debug, Clone)]
enum EnvSource {
    Process,
    Fixed(HashMap<String, String>),
}

/// Resolves configuration values through an ordered fallback chain.
///
/// 1. Process environment
/// 2. The first candidate dotenv file that defines the key
/// 3. A caller-supplied default ([`resolve_or_default`](Self::resolve_or_default)),
///    or an error ([`resolve_required`](Self::resolve_required))
///
/// Empty and whitespace-only values count as absent at every step. An
/// unreadable file is logged and treated as "not found"; an unparseable
/// line is logged and skipped.
///
/// # Example
///
/// ```no_run
/// use registration_notifier::config::ConfigResolver;
///
/// let resolver = ConfigResolver::new();
/// let url = resolver.resolve_or_default("USER_REGISTER_URL", "http://localhost:8000");
/// let key = resolver.resolve_required("BACKEND_API_KEY")?;
/// # Ok::<(), registration_notifier::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    env: EnvSource,
    candidate_paths: Vec<PathBuf>,
}

impl ConfigResolver {
    /// Resolver backed by the process environment and the fixed dotenv paths.
    pub fn new() -> Self {
        Self {
            env: EnvSource::Process,
            candidate_paths: default_candidate_paths(),
        }
    }

    /// Answers environment lookups from `vars` instead of the process environment.
    pub fn with_env<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env = EnvSource::Fixed(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Replaces the dotenv candidate list.
    pub fn with_candidate_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.candidate_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn candidate_paths(&self) -> &[PathBuf] {
        &self.candidate_paths
    }

    /// Returns the first non-empty value for `key`, trimmed.
    pub fn resolve(&self, key: &str) -> Option<String> {
        if let Some(value) = self.lookup_env(key) {
            debug!(key, "Resolved from environment");
            return Some(value);
        }
        self.lookup_env_files(key)
    }

    /// Like [`resolve`](Self::resolve), falling back to `default` with a warning.
    pub fn resolve_or_default(&self, key: &str, default: &str) -> String {
        match self.resolve(key) {
            Some(value) => value,
            None => {
                warn!(
                    key,
                    fallback = default,
                    "{} not found in environment variables or .env file, using default",
                    key
                );
                default.to_string()
            }
        }
    }

    /// Like [`resolve`](Self::resolve), failing when every source is empty.
    pub fn resolve_required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.resolve(key).ok_or_else(|| {
            error!(
                key,
                "{} not found in environment variables or .env file and has no default",
                key
            );
            ConfigError::MissingRequired(key)
        })
    }

    fn lookup_env(&self, key: &str) -> Option<String> {
        let raw = match &self.env {
            EnvSource::Process => std::env::var(key).ok(),
            EnvSource::Fixed(vars) => vars.get(key).cloned(),
        };
        non_empty(raw)
    }

    fn lookup_env_files(&self, key: &str) -> Option<String> {
        for path in &self.candidate_paths {
            if !path.is_file() {
                continue;
            }
            match read_env_file_value(path, key) {
                Ok(Some(value)) => {
                    info!(key, path = %path.display(), "Loaded {} from .env file", key);
                    return Some(value);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Could not load .env file");
                }
            }
        }
        None
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed dotenv paths followed by `<working-dir>/.env`.
pub fn default_candidate_paths() -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = FIXED_ENV_FILE_PATHS.into_iter().map(PathBuf::from).collect();
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".env"));
    }
    paths
}

/// Reads `key` from a dotenv file. A key assigned twice keeps its last value.
fn read_env_file_value(path: &Path, key: &str) -> io::Result<Option<String>> {
    let contents = fs::read(path)?;

    let mut found = None;
    for (index, line) in contents.split(|b| *b == b'\n').enumerate() {
        match java_properties::read(line) {
            Ok(mut pairs) => {
                if let Some(value) = pairs.remove(key) {
                    found = Some(value);
                }
            }
            Err(e) => {
                warn!(
                    path = %path.display(),
                    line = index + 1,
                    error = %e,
                    "Skipping unparseable .env line"
                );
            }
        }
    }
    Ok(non_empty(found))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
