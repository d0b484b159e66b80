use log::Level;

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Vertical scroll offset, in pixels, past which the navbar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const REVEAL_DURATION_MS: u32 = 1000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty while running under `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
