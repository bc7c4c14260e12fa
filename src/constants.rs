//! Page markup contract and surface tuning for the web frontend.
//!
//! Selectors, ids and class names used by the DOM wiring.

// Render surface
pub const CANVAS_ID: &str = "tars-bg";
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Reveal sequencer
pub const REVEAL_SELECTOR: &str = "h1, h2, .card, .terminal, .hero p";
pub const HEADING_TAG: &str = "H1";
pub const REVEAL_CLASS: &str = "reveal";
pub const ACTIVE_CLASS: &str = "active";
pub const TEXT_PAYLOAD_ATTR: &str = "data-text";

// Page collaborators
pub const BUTTON_SELECTOR: &str = ".primary-btn";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
