use std::fmt;

/// A client-supplied redirect URL that has not been validated.
///
/// `UntrustedUrl` marks the candidate redirect target taken from an
/// authentication callback (typically its `redirectUrl` query parameter)
/// and keeps it out of reach until a trust decision has been made. The
/// wrapper implements no `Deref`, `AsRef`, or conversion traits; the only
/// way to act on the value is
/// [`RedirectValidator::validate`](crate::RedirectValidator::validate).
///
/// # Security Properties
///
/// - Inner value is inaccessible outside this crate
/// - Cannot be placed in a `Location` header without a trust decision
///
/// # Examples
///
/// ```
/// use redirect_guard::UntrustedUrl;
///
/// let candidate = UntrustedUrl::new("https://attacker.example.com/phish");
///
/// // Debug output shows it is untrusted (for development)
/// println!("{:?}", candidate);
///
/// // But the raw string cannot be used directly:
/// // let location = format!("Location: {}", candidate); // Won't compile!
/// ```
#[derive(Clone)]
pub struct UntrustedUrl {
    // Private field: exposing the raw string would let callers issue the
    // redirect without a trust decision.
    inner: String,
}

impl UntrustedUrl {
    /// Wraps a candidate redirect URL taken from an untrusted source.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Extracts the raw candidate for validation.
    ///
    /// `pub(crate)` so that only the validator can unwrap; external code
    /// must go through the decision procedure.
    pub(crate) fn into_inner(self) -> String {
        self.inner
    }

    /// Borrows the raw candidate for the empty-check and for crate-internal
    /// diagnostics (rejection logging records the offending URL).
    pub(crate) fn as_str(&self) -> &str {
        &self.inner
    }
}

impl fmt::Debug for UntrustedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UntrustedUrl")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untrusted_url_wraps_value() {
        let candidate = UntrustedUrl::new("https://evil.example.com/x");
        let debug_output = format!("{:?}", candidate);

        assert!(debug_output.contains("UntrustedUrl"));
        assert!(debug_output.contains("evil.example.com"));
    }

    #[test]
    fn untrusted_url_prevents_direct_access() {
        let candidate = UntrustedUrl::new("https://example.com");

        // These would not compile if uncommented (good!):
        // let value: &str = candidate.as_ref(); // ← no AsRef outside the crate
        // let value: String = candidate.into(); // ← no Into
        // takes_str(&candidate); // ← type mismatch

        let _ = candidate;
    }

    #[test]
    fn untrusted_url_clone_preserves_value() {
        let a = UntrustedUrl::new("https://repo.example.org/path");
        let b = a.clone();
        assert_eq!(a.as_str(), b.as_str());
    }
}
