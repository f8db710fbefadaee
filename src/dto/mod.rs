/// Game payloads.
pub mod game;
/// Healthcheck payload.
pub mod health;
