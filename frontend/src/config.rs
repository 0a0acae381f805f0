use crate::chat::Pacing;

pub const CONTACT_EMAIL: &str = "hello@ctxfoundry.com";

#[cfg(debug_assertions)]
pub fn get_contact_endpoint() -> &'static str {
    "http://localhost:3001/contact"  // Local form sink when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_contact_endpoint() -> &'static str {
    // Baked in at build time so the form provider can be swapped per deploy
    option_env!("CONTACT_FORM_ENDPOINT").unwrap_or("https://formspree.io/f/ctxfoundry")
}

#[cfg(debug_assertions)]
pub fn chat_pacing() -> Pacing {
    // Shorter waits so the chat tree can be clicked through quickly
    Pacing {
        typing_min_ms: 200,
        typing_max_ms: 600,
        options_delay_ms: 150,
    }
}

#[cfg(not(debug_assertions))]
pub fn chat_pacing() -> Pacing {
    Pacing::default()
}
