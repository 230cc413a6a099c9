//! Callback-request adapter mapping HTTP requests to validator inputs.

use std::collections::HashMap;

use crate::untrusted::UntrustedUrl;

/// Query parameter carrying the candidate redirect target.
pub const REDIRECT_PARAM: &str = "redirectUrl";

/// Framework-free view of an authentication-callback request.
///
/// `CallbackRequest` is the integration point between web frameworks and
/// the validator. It holds owned copies of the request id and query
/// parameters to avoid coupling to any framework's request types;
/// framework-specific code should implement `From<FrameworkRequest>` for
/// it. The candidate redirect target leaves the adapter only as
/// [`UntrustedUrl`].
///
/// # Examples
///
/// ```
/// use redirect_guard::web::CallbackRequest;
///
/// let mut request = CallbackRequest::new("req-12345".to_string());
/// request.add_query_param(
///     "redirectUrl".to_string(),
///     "https://ui.example.org/cb".to_string(),
/// );
///
/// assert_eq!(request.request_id(), "req-12345");
/// assert!(request.redirect_candidate().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct CallbackRequest {
    /// Unique request identifier (required, used for tracing and audit)
    request_id: String,
    /// Query parameters from the callback URL (all untrusted)
    query_params: HashMap<String, String>,
}

impl CallbackRequest {
    /// Creates a new callback request with the given request ID.
    pub fn new(request_id: String) -> Self {
        Self {
            request_id,
            query_params: HashMap::new(),
        }
    }

    /// Adds a query parameter from the callback URL.
    pub fn add_query_param(&mut self, key: String, value: String) {
        self.query_params.insert(key, value);
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// The tainted candidate from the [`REDIRECT_PARAM`] parameter, if the
    /// client sent one.
    pub fn redirect_candidate(&self) -> Option<UntrustedUrl> {
        self.candidate_from(REDIRECT_PARAM)
    }

    /// The tainted candidate from a custom parameter name, for deployments
    /// that use something other than [`REDIRECT_PARAM`].
    pub fn candidate_from(&self, param: &str) -> Option<UntrustedUrl> {
        self.query_params
            .get(param)
            .map(|value| UntrustedUrl::new(value.clone()))
    }

    /// Raw candidate text for diagnostics (rejection logging needs the
    /// offending URL). Crate-internal: the public path to the value is the
    /// taint wrapper.
    pub(crate) fn raw_candidate(&self) -> Option<&str> {
        self.query_params.get(REDIRECT_PARAM).map(String::as_str)
    }
}
