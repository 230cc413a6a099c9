//! Audit trail for redirect decisions.
//!
//! Every completed login callback yields exactly one decision, and
//! security review wants to see them all, especially the rejections,
//! which may be attack attempts. Events record only safe metadata: the
//! request id, the outcome, and the decision detail (which names the
//! offending hostname, not the full candidate URL; the full URL goes to
//! the error log at the HTTP boundary).

use std::cell::RefCell;
use std::fmt;

/// Outcome of an audited redirect decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    /// The redirect was issued.
    Allowed,
    /// The redirect was refused.
    Rejected,
}

impl fmt::Display for AuditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditOutcome::Allowed => write!(f, "allowed"),
            AuditOutcome::Rejected => write!(f, "rejected"),
        }
    }
}

/// A recorded redirect decision.
///
/// # Example
///
/// ```
/// use redirect_guard::audit::{AuditEvent, AuditOutcome};
///
/// let event = AuditEvent::new(
///     "req-123",
///     AuditOutcome::Rejected,
///     "redirect rejected (hostname mismatch): hostname 'evil.example.com' does not match a trusted origin",
/// );
///
/// assert_eq!(event.request_id(), "req-123");
/// assert_eq!(event.outcome(), AuditOutcome::Rejected);
/// ```
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Request identifier for correlation
    request_id: String,
    /// Whether the redirect was issued or refused
    outcome: AuditOutcome,
    /// Decision detail: target for allowed, rejection reason for refused
    detail: String,
}

impl AuditEvent {
    /// Creates a new audit event.
    pub fn new(
        request_id: impl Into<String>,
        outcome: AuditOutcome,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            outcome,
            detail: detail.into(),
        }
    }

    /// Returns the request identifier.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    /// Returns the decision outcome.
    pub fn outcome(&self) -> AuditOutcome {
        self.outcome
    }

    /// Returns the decision detail.
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] redirect {}: {}",
            self.request_id, self.outcome, self.detail
        )
    }
}

/// In-memory recorder for redirect-decision events.
///
/// A simple implementation that stores events in a vector, in decision
/// order. Production deployments would typically forward events to a
/// persistent audit logging system instead.
///
/// # Example
///
/// ```
/// use redirect_guard::audit::{AuditEvent, AuditOutcome, AuditTrail};
///
/// let trail = AuditTrail::new();
/// trail.record(AuditEvent::new("req-1", AuditOutcome::Allowed, "https://repo.example.org"));
///
/// assert_eq!(trail.len(), 1);
/// ```
pub struct AuditTrail {
    events: RefCell<Vec<AuditEvent>>,
}

impl AuditTrail {
    /// Creates a new empty audit trail.
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Records a decision event.
    pub fn record(&self, event: AuditEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Returns a snapshot of all recorded events.
    ///
    /// This clones the events to avoid holding the borrow.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_trail_starts_empty() {
        let trail = AuditTrail::new();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
    }

    #[test]
    fn audit_trail_records_in_order() {
        let trail = AuditTrail::new();
        trail.record(AuditEvent::new(
            "req-1",
            AuditOutcome::Allowed,
            "https://repo.example.org",
        ));
        trail.record(AuditEvent::new(
            "req-2",
            AuditOutcome::Rejected,
            "hostname mismatch",
        ));

        let events = trail.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].request_id(), "req-1");
        assert_eq!(events[0].outcome(), AuditOutcome::Allowed);
        assert_eq!(events[1].request_id(), "req-2");
        assert_eq!(events[1].outcome(), AuditOutcome::Rejected);
    }

    #[test]
    fn audit_trail_can_be_cleared() {
        let trail = AuditTrail::new();
        trail.record(AuditEvent::new("req-1", AuditOutcome::Rejected, "x"));
        assert_eq!(trail.len(), 1);

        trail.clear();
        assert!(trail.is_empty());
    }

    #[test]
    fn audit_event_display_is_structured() {
        let event = AuditEvent::new("req-9", AuditOutcome::Rejected, "hostname mismatch");
        assert_eq!(
            format!("{}", event),
            "[req-9] redirect rejected: hostname mismatch"
        );
    }
}
