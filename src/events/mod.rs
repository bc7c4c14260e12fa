pub mod anchors;
pub mod button;
pub mod pointer;

pub use anchors::wire_anchor_scrolling;
pub use button::wire_download_button;
pub use pointer::wire_pointermove;
