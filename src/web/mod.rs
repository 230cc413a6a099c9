//! Framework-free HTTP boundary for the login callback.
//!
//! This module is the seam between HTTP frameworks and the redirect
//! validator. It handles:
//! - Mapping an authentication-callback request to [`CallbackRequest`]
//! - Introducing taint at the boundary (the candidate redirect parameter
//!   leaves the adapter only as `UntrustedUrl`)
//! - Mapping a trust decision onto the response the framework should
//!   issue: a redirect, or a 400 refusal
//!
//! # Design Principles
//!
//! 1. **No Framework Dependencies**: no framework-specific code here.
//!    Integrations build a `CallbackRequest` from their own request types
//!    and translate `CompletionResponse` back.
//!
//! 2. **Taint at Boundary**: the candidate URL is untrusted the moment it
//!    is read from the query string.
//!
//! 3. **No Authentication Here**: credential verification and session or
//!    token issuance belong to the surrounding authentication stack; this
//!    boundary only decides and shapes the post-login redirect.
//!
//! # Integration Flow
//!
//! ```text
//! SSO callback request
//!   ↓
//! Framework-specific code builds CallbackRequest
//!   ↓
//! complete_login(&request, &validator)
//!   ↓
//! CompletionResponse::Redirect { 302, location }   → send redirect
//! CompletionResponse::ClientError { 400, message } → refuse, no redirect
//! ```

mod adapter;
mod handler;

pub use adapter::{CallbackRequest, REDIRECT_PARAM};
pub use handler::{
    complete_login, complete_login_audited, complete_login_with_status, CompletionResponse,
    RedirectStatus,
};
