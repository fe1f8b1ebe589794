use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose effect lifecycle logs while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const EVENT_NAME: &str = "HexaFalls";
pub const DOCUMENT_TITLE: &str = "HexaFalls - Mystery Coding Hackathon";
pub const EVENT_DATES: &str = "June 15-17, 2024";
pub const CONTACT_EMAIL: &str = "info@gravityhack.com";
pub const VENUE_LINES: [&str; 3] = [
    "Mystery Shack Convention Center",
    "618 Gopher Road",
    "Gravity Falls, OR",
];
pub const DISCORD_URL: &str = "#discord";

/// Scroll distance after which the nav bar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 20.0;
/// Space left above a section when scrolling to it, so the fixed nav
/// does not cover the heading.
pub const NAV_SCROLL_OFFSET: f64 = 100.0;
/// Fraction of a section that must be visible before it fades in.
pub const REVEAL_THRESHOLD: f64 = 0.1;
