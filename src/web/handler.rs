//! Completion handler: maps a trust decision onto an HTTP response.

use std::fmt;

use crate::audit::{AuditEvent, AuditOutcome, AuditTrail};
use crate::validator::{RedirectDecision, RedirectValidator};

use super::adapter::CallbackRequest;

/// HTTP status used for the redirect on an allowed target.
///
/// `Found` (302) matches what servlet-style `sendRedirect` issues and is
/// the default; `SeeOther` (303) forces the follow-up request to GET.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStatus {
    /// 302 Found
    Found,
    /// 303 See Other
    SeeOther,
}

impl RedirectStatus {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(self) -> u16 {
        match self {
            RedirectStatus::Found => 302,
            RedirectStatus::SeeOther => 303,
        }
    }
}

impl fmt::Display for RedirectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectStatus::Found => write!(f, "302 Found"),
            RedirectStatus::SeeOther => write!(f, "303 See Other"),
        }
    }
}

/// Response the host framework should issue after the login callback.
///
/// This type is deliberately framework-free: integrations translate it to
/// their own response type (set the `Location` header and status on
/// `Redirect`, return the diagnostic with the status on `ClientError`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionResponse {
    /// Issue an HTTP redirect to the validated target.
    Redirect {
        /// Redirect status to send.
        status: RedirectStatus,
        /// Validated target for the `Location` header.
        location: String,
    },
    /// Refuse the redirect with a client error; no redirect is issued.
    ClientError {
        /// HTTP status to send (400).
        status: u16,
        /// Diagnostic message for the client.
        message: String,
    },
}

impl CompletionResponse {
    /// Returns `true` when the response is a redirect.
    pub fn is_redirect(&self) -> bool {
        matches!(self, CompletionResponse::Redirect { .. })
    }
}

/// Completes a login callback: validates the candidate redirect and shapes
/// the response, issuing a 302 on success.
///
/// See [`complete_login_with_status`] for details and logging behavior.
pub fn complete_login(
    request: &CallbackRequest,
    validator: &RedirectValidator,
) -> CompletionResponse {
    complete_login_with_status(request, validator, RedirectStatus::Found)
}

/// Completes a login callback with an explicit redirect status.
///
/// Reads the candidate from the request's `redirectUrl` parameter,
/// validates it, and maps the decision:
/// - `Allowed` → `Redirect` to the validated target; logged at debug level
/// - `Rejected` → `ClientError` with status 400; logged at error level
///   naming the offending URL, so refused attempts are visible to
///   operators. The rejection is never downgraded to a default-target
///   redirect; silently substituting the default would hide attack
///   attempts from the log.
pub fn complete_login_with_status(
    request: &CallbackRequest,
    validator: &RedirectValidator,
    status: RedirectStatus,
) -> CompletionResponse {
    evaluate(request, validator, status).0
}

/// Completes a login callback and records the decision on an audit trail.
///
/// Behaves exactly like [`complete_login`], then records one
/// [`AuditEvent`] per call: the validated target on allow, the rejection
/// reason on refusal.
pub fn complete_login_audited(
    request: &CallbackRequest,
    validator: &RedirectValidator,
    trail: &AuditTrail,
) -> CompletionResponse {
    let (response, event) = evaluate(request, validator, RedirectStatus::Found);
    trail.record(event);
    response
}

/// Shared decision path: validates, logs, and shapes both the response
/// and the matching audit event.
fn evaluate(
    request: &CallbackRequest,
    validator: &RedirectValidator,
    status: RedirectStatus,
) -> (CompletionResponse, AuditEvent) {
    match validator.validate(request.redirect_candidate()) {
        RedirectDecision::Allowed(target) => {
            tracing::debug!(
                request_id = %request.request_id(),
                location = %target.as_str(),
                "login redirect allowed"
            );
            let event = AuditEvent::new(
                request.request_id(),
                AuditOutcome::Allowed,
                target.as_str(),
            );
            let response = CompletionResponse::Redirect {
                status,
                location: target.into_inner(),
            };
            (response, event)
        }
        RedirectDecision::Rejected(rejection) => {
            tracing::error!(
                request_id = %request.request_id(),
                url = %request.raw_candidate().unwrap_or_default(),
                %rejection,
                "login redirect refused"
            );
            let event = AuditEvent::new(
                request.request_id(),
                AuditOutcome::Rejected,
                rejection.to_string(),
            );
            let response = CompletionResponse::ClientError {
                status: 400,
                message: "Invalid redirect URL: must match a trusted hostname".to_string(),
            };
            (response, event)
        }
    }
}
