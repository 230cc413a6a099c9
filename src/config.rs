//! Trust configuration: which hostnames may receive post-login redirects.
//!
//! Configuration is loaded once at startup, validated, and immutable
//! thereafter. Hostname extraction happens here, at load time, so the
//! per-request decision only ever compares precomputed lowercase strings.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::hostname::normalize_origin;

/// Raw trust settings as they appear in configuration.
///
/// This is the serde-facing form; promote it to a validated
/// [`TrustConfig`] with [`TrustConfig::from_settings`]. In TOML:
///
/// ```toml
/// default_url = "https://repo.example.org"
/// server_url = "https://repo.example.org/server"
/// allowed_origins = ["https://ui.example.org", "admin.example.org"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TrustSettings {
    /// Redirect target used when the client expresses no preference.
    pub default_url: String,
    /// The server's own origin: a hostname or an absolute http(s) URL.
    pub server_url: String,
    /// Additional origins allowed to receive redirects; may be empty.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Validated, immutable trust configuration.
///
/// Holds the default redirect target and the allowed-hostname set (server
/// origin first, then the additional origins in configured order, each
/// lowercased, duplicates dropped). Constructed at startup; a
/// half-configured state is a [`ConfigError`], never a runtime fallback.
/// Safe for unsynchronized concurrent reads.
///
/// # Examples
///
/// ```
/// use redirect_guard::TrustConfig;
///
/// let config = TrustConfig::new(
///     "https://repo.example.org",
///     "https://repo.example.org/server",
///     &["ui.example.org"],
/// )
/// .unwrap();
///
/// assert_eq!(config.allowed_hosts(), ["repo.example.org", "ui.example.org"]);
/// assert!(config.is_allowed_host("UI.Example.Org"));
/// assert!(!config.is_allowed_host("evil-ui.example.org"));
/// ```
#[derive(Debug, Clone)]
pub struct TrustConfig {
    default_url: String,
    allowed_hosts: Vec<String>,
}

impl TrustConfig {
    /// Builds a trust configuration from explicit parts.
    ///
    /// `server_origin` and every entry of `additional_origins` may be a
    /// bare hostname or an absolute http(s) URL; only the hostname is
    /// retained, lowercased.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `default_url` is empty, when
    /// `server_origin` yields no hostname, or when any additional origin
    /// entry yields no hostname.
    pub fn new<S: AsRef<str>>(
        default_url: impl Into<String>,
        server_origin: &str,
        additional_origins: &[S],
    ) -> Result<Self, ConfigError> {
        let default_url = default_url.into();
        if default_url.trim().is_empty() {
            return Err(ConfigError::new(
                ConfigErrorKind::MissingDefaultUrl,
                "default redirect URL is required",
            ));
        }

        let server_host = normalize_origin(server_origin).ok_or_else(|| {
            ConfigError::new(
                ConfigErrorKind::MissingServerOrigin,
                "server origin must be a hostname or an absolute http(s) URL",
            )
        })?;

        let mut allowed_hosts = vec![server_host];
        for entry in additional_origins {
            let entry = entry.as_ref();
            let host = normalize_origin(entry).ok_or_else(|| {
                ConfigError::new(
                    ConfigErrorKind::InvalidOrigin,
                    format!("allowed origin '{}' has no usable hostname", entry),
                )
            })?;
            if !allowed_hosts.contains(&host) {
                allowed_hosts.push(host);
            }
        }

        Ok(Self {
            default_url,
            allowed_hosts,
        })
    }

    /// Promotes raw [`TrustSettings`] to a validated configuration.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TrustConfig::new`].
    pub fn from_settings(settings: TrustSettings) -> Result<Self, ConfigError> {
        Self::new(
            settings.default_url,
            &settings.server_url,
            &settings.allowed_origins,
        )
    }

    /// Parses TOML trust settings and validates them.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` with kind [`ConfigErrorKind::Parse`] for
    /// malformed TOML, or any [`TrustConfig::new`] error afterwards.
    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let settings: TrustSettings = toml::from_str(data).map_err(|e| {
            ConfigError::with_source(ConfigErrorKind::Parse, "invalid trust configuration", e)
        })?;
        Self::from_settings(settings)
    }

    /// Loads trust settings from a TOML file.
    ///
    /// Intended to run once at process startup; a failure here should be
    /// fatal rather than leaving redirect validation half-configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` with kind [`ConfigErrorKind::Io`] when the
    /// file cannot be read, plus any [`TrustConfig::from_toml_str`] error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|e| {
            ConfigError::with_source(
                ConfigErrorKind::Io,
                format!("cannot read trust configuration at {}", path.display()),
                e,
            )
        })?;
        Self::from_toml_str(&data)
    }

    /// The redirect target substituted when the client supplies none.
    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    /// The allowed hostnames: server origin first, then additional origins
    /// in configured order, lowercased.
    pub fn allowed_hosts(&self) -> &[String] {
        &self.allowed_hosts
    }

    /// Case-insensitive exact membership test against the allowed set.
    ///
    /// Exact equality only: `evil-repo.example.org` never matches an
    /// allowed `repo.example.org`, and neither does
    /// `repo.example.org.evil.com`.
    pub fn is_allowed_host(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.allowed_hosts.iter().any(|allowed| *allowed == host)
    }
}

/// Error raised when trust configuration cannot be loaded or validated.
///
/// Configuration errors are startup-time and fatal: the process should
/// refuse to serve redirect validation rather than run half-configured.
///
/// # Examples
///
/// ```
/// use redirect_guard::{ConfigErrorKind, TrustConfig};
///
/// let err = TrustConfig::new("", "repo.example.org", &[] as &[&str]).unwrap_err();
/// assert_eq!(err.kind(), ConfigErrorKind::MissingDefaultUrl);
/// ```
#[derive(Debug)]
pub struct ConfigError {
    kind: ConfigErrorKind,
    message: String,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConfigError {
    /// Creates a new configuration error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a configuration error wrapping an underlying cause.
    pub fn with_source(
        kind: ConfigErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ConfigErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "trust configuration error ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|source| {
            let source: &(dyn std::error::Error + 'static) = &**source;
            source
        })
    }
}

/// Kind of trust configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// The default redirect URL is missing or empty.
    MissingDefaultUrl,
    /// The server origin is missing or yields no hostname.
    MissingServerOrigin,
    /// An additional origin entry yields no hostname.
    InvalidOrigin,
    /// The configuration source could not be read.
    Io,
    /// The configuration source could not be parsed.
    Parse,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDefaultUrl => write!(f, "missing default URL"),
            Self::MissingServerOrigin => write!(f, "missing server origin"),
            Self::InvalidOrigin => write!(f, "invalid origin"),
            Self::Io => write!(f, "io"),
            Self::Parse => write!(f, "parse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_from_explicit_parts() {
        let config = TrustConfig::new(
            "https://repo.example.org",
            "repo.example.org",
            &["ui.example.org", "https://admin.example.org:8443"],
        )
        .unwrap();

        assert_eq!(config.default_url(), "https://repo.example.org");
        assert_eq!(
            config.allowed_hosts(),
            ["repo.example.org", "ui.example.org", "admin.example.org"]
        );
    }

    #[test]
    fn config_server_origin_may_be_url() {
        let config = TrustConfig::new(
            "https://repo.example.org",
            "https://repo.example.org/server",
            &[] as &[&str],
        )
        .unwrap();

        assert_eq!(config.allowed_hosts(), ["repo.example.org"]);
    }

    #[test]
    fn config_lowercases_hosts_at_load_time() {
        let config = TrustConfig::new(
            "https://repo.example.org",
            "Repo.Example.Org",
            &["UI.EXAMPLE.ORG"],
        )
        .unwrap();

        assert_eq!(config.allowed_hosts(), ["repo.example.org", "ui.example.org"]);
    }

    #[test]
    fn config_drops_duplicate_hosts() {
        let config = TrustConfig::new(
            "https://repo.example.org",
            "repo.example.org",
            &["https://repo.example.org", "ui.example.org", "ui.example.org"],
        )
        .unwrap();

        assert_eq!(config.allowed_hosts(), ["repo.example.org", "ui.example.org"]);
    }

    #[test]
    fn config_rejects_empty_default_url() {
        let err = TrustConfig::new("   ", "repo.example.org", &[] as &[&str]).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::MissingDefaultUrl);
    }

    #[test]
    fn config_rejects_unusable_server_origin() {
        let err = TrustConfig::new("https://repo.example.org", "", &[] as &[&str]).unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::MissingServerOrigin);

        let err =
            TrustConfig::new("https://repo.example.org", "ftp://repo.example.org", &[] as &[&str])
                .unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::MissingServerOrigin);
    }

    #[test]
    fn config_rejects_unusable_origin_entry() {
        let err = TrustConfig::new(
            "https://repo.example.org",
            "repo.example.org",
            &["ui.example.org/app"],
        )
        .unwrap_err();

        assert_eq!(err.kind(), ConfigErrorKind::InvalidOrigin);
        assert!(err.message().contains("ui.example.org/app"));
    }

    #[test]
    fn config_empty_origin_list_is_valid() {
        let config =
            TrustConfig::new("https://repo.example.org", "repo.example.org", &[] as &[&str])
                .unwrap();
        assert_eq!(config.allowed_hosts(), ["repo.example.org"]);
    }

    #[test]
    fn config_from_toml() {
        let toml = r#"
            default_url = "https://repo.example.org"
            server_url = "https://repo.example.org/server"
            allowed_origins = ["https://ui.example.org", "admin.example.org"]
        "#;
        let config = TrustConfig::from_toml_str(toml).unwrap();

        assert_eq!(config.default_url(), "https://repo.example.org");
        assert_eq!(
            config.allowed_hosts(),
            ["repo.example.org", "ui.example.org", "admin.example.org"]
        );
    }

    #[test]
    fn config_from_toml_origins_default_to_empty() {
        let toml = r#"
            default_url = "https://repo.example.org"
            server_url = "repo.example.org"
        "#;
        let config = TrustConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.allowed_hosts(), ["repo.example.org"]);
    }

    #[test]
    fn config_from_toml_rejects_missing_fields() {
        let err = TrustConfig::from_toml_str("default_url = \"https://x.example\"").unwrap_err();
        assert_eq!(err.kind(), ConfigErrorKind::Parse);
    }

    #[test]
    fn config_error_display_names_kind() {
        let err = ConfigError::new(ConfigErrorKind::InvalidOrigin, "bad entry");
        let output = format!("{}", err);
        assert!(output.contains("trust configuration error"));
        assert!(output.contains("invalid origin"));
        assert!(output.contains("bad entry"));
    }

    #[test]
    fn is_allowed_host_is_case_insensitive_exact() {
        let config = TrustConfig::new(
            "https://repo.example.org",
            "repo.example.org",
            &[] as &[&str],
        )
        .unwrap();

        assert!(config.is_allowed_host("repo.example.org"));
        assert!(config.is_allowed_host("REPO.EXAMPLE.ORG"));
        assert!(!config.is_allowed_host("evil-repo.example.org"));
        assert!(!config.is_allowed_host("repo.example.org.evil.com"));
        assert!(!config.is_allowed_host(""));
    }
}
