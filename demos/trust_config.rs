//! Trust configuration demonstration.
//!
//! Shows startup-time loading and validation: well-formed TOML settings
//! are promoted to an immutable `TrustConfig`; half-configured settings
//! fail fast instead of serving a permissive validator.
//!
//! Run with: `cargo run --example trust_config`

use redirect_guard::TrustConfig;

fn main() {
    let good = r#"
        default_url = "https://repo.example.org"
        server_url = "https://repo.example.org/server"
        allowed_origins = ["https://ui.example.org", "admin.example.org"]
    "#;

    match TrustConfig::from_toml_str(good) {
        Ok(config) => {
            println!("default target : {}", config.default_url());
            println!("allowed hosts  : {}", config.allowed_hosts().join(", "));
        }
        Err(e) => println!("unexpected: {}", e),
    }

    // Missing server origin: startup failure, not a runtime fallback.
    let half_configured = r#"
        default_url = "https://repo.example.org"
        server_url = ""
    "#;

    match TrustConfig::from_toml_str(half_configured) {
        Ok(_) => println!("unexpected: half-configured settings accepted"),
        Err(e) => println!("refused as expected: {}", e),
    }

    // An origin entry with a path has no usable hostname.
    let bad_origin = r#"
        default_url = "https://repo.example.org"
        server_url = "repo.example.org"
        allowed_origins = ["ui.example.org/app"]
    "#;

    match TrustConfig::from_toml_str(bad_origin) {
        Ok(_) => println!("unexpected: bad origin accepted"),
        Err(e) => println!("refused as expected: {}", e),
    }
}
