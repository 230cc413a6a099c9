//! Login callback flow demonstration.
//!
//! Shows the full boundary flow for an SSO callback:
//! 1. Build the trust configuration at startup
//! 2. Adapt the incoming callback request
//! 3. Validate the candidate redirect
//! 4. Act on the completion response (redirect or refuse)
//!
//! Run with: `cargo run --example login_callback_flow`

use redirect_guard::audit::AuditTrail;
use redirect_guard::web::{complete_login_audited, CallbackRequest, CompletionResponse};
use redirect_guard::{RedirectValidator, TrustConfig};

fn handle_callback(
    validator: &RedirectValidator,
    trail: &AuditTrail,
    request_id: &str,
    redirect_param: Option<&str>,
) {
    let mut request = CallbackRequest::new(request_id.to_string());
    if let Some(url) = redirect_param {
        request.add_query_param("redirectUrl".to_string(), url.to_string());
    }

    match complete_login_audited(&request, validator, trail) {
        CompletionResponse::Redirect { status, location } => {
            println!("{}: {} -> Location: {}", request_id, status, location);
        }
        CompletionResponse::ClientError { status, message } => {
            println!("{}: {} {}", request_id, status, message);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Loaded once at startup; immutable afterwards.
    let config = TrustConfig::new(
        "https://repo.example.org",
        "https://repo.example.org/server",
        &["ui.example.org"],
    )?;
    let validator = RedirectValidator::new(config);
    let trail = AuditTrail::new();

    // A client that asked to land back on the UI.
    handle_callback(
        &validator,
        &trail,
        "req-1",
        Some("https://ui.example.org/search?q=theses"),
    );

    // A client with no preference: default target substituted.
    handle_callback(&validator, &trail, "req-2", None);

    // A phishing attempt riding on a fresh login.
    handle_callback(
        &validator,
        &trail,
        "req-3",
        Some("https://repo.example.org.evil.com/login"),
    );

    println!("\naudit trail:");
    for event in trail.events() {
        println!("  {}", event);
    }

    Ok(())
}
