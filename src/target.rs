/// A redirect target that passed trust validation.
///
/// `TrustedTarget` is the proof-carrying counterpart of
/// [`UntrustedUrl`](crate::UntrustedUrl): holding one means the URL either
/// matched a trusted hostname or is the configured default target, and it
/// is safe to place in a `Location` header. The contained URL is the full
/// original candidate, unmodified; only the hostname was consulted for
/// the trust decision.
///
/// # Construction Invariants
///
/// External code cannot construct a `TrustedTarget`. There is no public
/// constructor and no `From`/`Into` implementation; the only producers are
/// the validator's hostname check and its default-URL substitution.
///
/// # Examples
///
/// External callers cannot mint proof:
///
/// ```compile_fail
/// use redirect_guard::TrustedTarget;
///
/// // This will not compile - no public constructor:
/// let target = TrustedTarget::new_unchecked("https://evil.example.com".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedTarget {
    inner: String,
}

impl TrustedTarget {
    /// Creates a `TrustedTarget` without performing validation.
    ///
    /// # Safety (Policy-Level)
    ///
    /// `pub(crate)` on purpose: callers inside the crate must only wrap a
    /// URL after the hostname check succeeded, or when substituting the
    /// implicitly trusted default target.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self { inner: value }
    }

    /// Borrows the validated URL.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Consumes the proof and returns the validated URL, e.g. to build a
    /// `Location` header.
    pub fn into_inner(self) -> String {
        self.inner
    }
}

impl AsRef<str> for TrustedTarget {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_target_as_str_returns_url() {
        let target = TrustedTarget::new_unchecked("https://repo.example.org/x".to_string());
        assert_eq!(target.as_str(), "https://repo.example.org/x");
        assert_eq!(target.as_ref(), "https://repo.example.org/x");
    }

    #[test]
    fn trusted_target_into_inner_returns_url() {
        let target = TrustedTarget::new_unchecked("https://repo.example.org".to_string());
        assert_eq!(target.into_inner(), "https://repo.example.org");
    }

    #[test]
    fn trusted_target_derives_work() {
        let a = TrustedTarget::new_unchecked("https://repo.example.org".to_string());
        let b = a.clone();
        assert_eq!(a, b);

        let debug_output = format!("{:?}", a);
        assert!(debug_output.contains("TrustedTarget"));
    }

    #[test]
    fn trusted_target_prevents_direct_construction() {
        // This test documents that construction is restricted.
        // If the following were uncommented, they would not compile
        // outside the crate:

        // let t = TrustedTarget { inner: "x".into() }; // ← private field
        // let t: TrustedTarget = "x".to_string().into(); // ← no From impl

        let _ = TrustedTarget::new_unchecked("x".to_string());
    }
}
