//! The trusted-redirect decision procedure.

use std::fmt;

use crate::config::TrustConfig;
use crate::hostname::host_of_url;
use crate::target::TrustedTarget;
use crate::untrusted::UntrustedUrl;

/// Outcome of validating a candidate redirect.
///
/// A two-state terminal decision: either the redirect may be issued to the
/// contained target, or it must be refused. There is no retry and no
/// fallback; rejection must surface to the caller as a client error, not
/// silently degrade to the default target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectDecision {
    /// The redirect may be issued to the contained target.
    Allowed(TrustedTarget),
    /// The redirect must be refused.
    Rejected(Rejection),
}

impl RedirectDecision {
    /// Returns `true` when the decision permits the redirect.
    pub fn is_allowed(&self) -> bool {
        matches!(self, RedirectDecision::Allowed(_))
    }
}

/// Why a candidate redirect was refused.
///
/// A `Rejection` is not a defect: it is the validator doing its job.
/// The message names the offending hostname when one could be extracted,
/// never the full URL (the full URL belongs in the caller's error log,
/// see [`web::complete_login`](crate::web::complete_login)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    kind: RejectionKind,
    message: String,
}

impl Rejection {
    pub(crate) fn new(kind: RejectionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the rejection kind.
    pub fn kind(&self) -> RejectionKind {
        self.kind
    }

    /// Returns the diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "redirect rejected ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for Rejection {}

/// Kind of redirect rejection.
///
/// Both kinds receive identical treatment: a malformed candidate is not
/// given the benefit of the doubt; it falls through to rejection exactly
/// like a hostname mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
    /// The candidate's hostname matches no trusted origin.
    HostnameMismatch,
    /// The candidate does not parse as an absolute http(s) URL.
    MalformedUrl,
}

impl fmt::Display for RejectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HostnameMismatch => write!(f, "hostname mismatch"),
            Self::MalformedUrl => write!(f, "malformed url"),
        }
    }
}

/// Decides whether candidate redirects are trusted.
///
/// Holds the immutable [`TrustConfig`] injected at construction, never an
/// ambient lookup, so tests can supply arbitrary configurations. The
/// validator is stateless apart from that configuration and is cheap to
/// clone and share across concurrent request handlers.
///
/// # Examples
///
/// ```
/// use redirect_guard::{RedirectDecision, RedirectValidator, TrustConfig, UntrustedUrl};
///
/// let config = TrustConfig::new(
///     "https://repo.example.org",
///     "repo.example.org",
///     &[] as &[&str],
/// )
/// .unwrap();
/// let validator = RedirectValidator::new(config);
///
/// // No candidate: the default target is substituted
/// match validator.validate(None) {
///     RedirectDecision::Allowed(target) => {
///         assert_eq!(target.as_str(), "https://repo.example.org")
///     }
///     RedirectDecision::Rejected(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RedirectValidator {
    config: TrustConfig,
}

impl RedirectValidator {
    /// Creates a validator over the given trust configuration.
    pub fn new(config: TrustConfig) -> Self {
        Self { config }
    }

    /// Returns the trust configuration this validator decides against.
    pub fn config(&self) -> &TrustConfig {
        &self.config
    }

    /// Validates a candidate redirect URL against the trusted origins.
    ///
    /// An absent or empty candidate substitutes the configured default
    /// target, which is implicitly trusted and never rejected. Any other
    /// candidate is allowed exactly when its hostname matches an allowed
    /// hostname, case-insensitively and by exact string equality; the
    /// returned target is the full original URL, unmodified. A candidate
    /// that happens to equal the default URL gets no special treatment;
    /// it goes through the hostname check like any other.
    ///
    /// Pure with respect to its inputs: no I/O, no logging, no state
    /// mutation; identical inputs always yield identical decisions.
    pub fn validate(&self, candidate: Option<UntrustedUrl>) -> RedirectDecision {
        let candidate = match candidate {
            Some(c) if !c.as_str().is_empty() => c,
            _ => {
                return RedirectDecision::Allowed(TrustedTarget::new_unchecked(
                    self.config.default_url().to_string(),
                ))
            }
        };

        let url = candidate.into_inner();
        let Some(host) = host_of_url(&url) else {
            return RedirectDecision::Rejected(Rejection::new(
                RejectionKind::MalformedUrl,
                "candidate is not an absolute http(s) URL",
            ));
        };

        if self.config.is_allowed_host(&host) {
            RedirectDecision::Allowed(TrustedTarget::new_unchecked(url))
        } else {
            RedirectDecision::Rejected(Rejection::new(
                RejectionKind::HostnameMismatch,
                format!("hostname '{}' does not match a trusted origin", host),
            ))
        }
    }
}
