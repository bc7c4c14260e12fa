// Label sequence played by the download button after a click.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelStep {
    /// Delay from the click, in milliseconds.
    pub at_ms: i32,
    pub label: &'static str,
    /// Switch the button to its highlighted border/glow.
    pub highlight: bool,
}

pub static LABEL_SEQUENCE: [LabelStep; 3] = [
    LabelStep {
        at_ms: 0,
        label: "ESTABLISHING LINK...",
        highlight: false,
    },
    LabelStep {
        at_ms: 1000,
        label: "TRANSFERRING DATA...",
        highlight: false,
    },
    LabelStep {
        at_ms: 3000,
        label: "TRANSFER COMPLETE",
        highlight: true,
    },
];

pub const HIGHLIGHT_BORDER: &str = "var(--primary)";
pub const HIGHLIGHT_SHADOW: &str = "0 0 15px var(--primary)";
