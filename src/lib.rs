//! Trusted-redirect validation for authentication callbacks.
//!
//! When a single-sign-on handshake completes, the client is redirected back
//! into the application, often to a URL the client itself supplied before
//! the handshake started. Honoring that parameter blindly is an open
//! redirect: an attacker can bounce freshly-authenticated users to a
//! phishing site. This crate provides the decision procedure that prevents
//! it:
//!
//! - **Taint at the boundary**: the candidate URL enters as
//!   [`UntrustedUrl`] and cannot be used until a trust decision is made
//! - **Hostname allow-list**: the candidate's hostname must exactly match
//!   the server origin or an explicitly configured origin, case-insensitively
//!   and with no suffix/substring matching
//! - **Proof-carrying output**: a permitted target comes back as
//!   [`TrustedTarget`], which only the validator can construct
//!
//! # Core Types
//!
//! - [`TrustConfig`]: immutable trust configuration, validated at startup
//! - [`UntrustedUrl`]: wrapper for the client-supplied candidate URL
//! - [`RedirectValidator`]: decides [`RedirectDecision`] for a candidate
//! - [`TrustedTarget`]: a redirect target that passed validation
//! - [`web::CallbackRequest`]: framework-free callback-request boundary
//!
//! # Examples
//!
//! ```
//! use redirect_guard::{RedirectValidator, TrustConfig, UntrustedUrl};
//!
//! let config = TrustConfig::new(
//!     "https://repo.example.org",
//!     "repo.example.org",
//!     &["ui.example.org"],
//! )
//! .expect("valid trust configuration");
//!
//! let validator = RedirectValidator::new(config);
//!
//! // A candidate on a trusted origin is allowed, unmodified
//! let candidate = UntrustedUrl::new("https://ui.example.org/search?q=1");
//! assert!(validator.validate(Some(candidate)).is_allowed());
//!
//! // An attacker-controlled host is rejected
//! let candidate = UntrustedUrl::new("https://evil.example.com/phish");
//! assert!(!validator.validate(Some(candidate)).is_allowed());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod config;
mod hostname;
mod target;
mod untrusted;
mod validator;
pub mod web;

pub use config::{ConfigError, ConfigErrorKind, TrustConfig, TrustSettings};
pub use hostname::{host_of_url, normalize_origin};
pub use target::TrustedTarget;
pub use untrusted::UntrustedUrl;
pub use validator::{RedirectDecision, RedirectValidator, Rejection, RejectionKind};
