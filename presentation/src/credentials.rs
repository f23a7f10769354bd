//! API credential resolution.
//!
//! The credential comes from the environment when set; otherwise the user
//! is prompted once with masked input. A missing credential halts the
//! session before any model call is attempted: the caller refuses to
//! construct the gateway without one.

use tracing::info;

/// Environment variable carrying the Gemini API credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Resolve the API key from the environment, falling back to a masked
/// prompt. Returns `None` when neither source yields a non-blank key.
pub fn resolve_api_key() -> Option<String> {
    if let Ok(key) = std::env::var(API_KEY_ENV)
        && !key.trim().is_empty()
    {
        info!("API key loaded from environment");
        return Some(key);
    }

    println!("No {} found in the environment.", API_KEY_ENV);
    dialoguer::Password::new()
        .with_prompt("Google API key")
        .allow_empty_password(true)
        .interact()
        .ok()
        .filter(|key| !key.trim().is_empty())
}
