pub mod button;
pub mod constants;
pub mod driver;
pub mod environment;
pub mod geometry;
pub mod gpu_types;
pub mod input;
pub mod mascot;
pub mod reveal;
pub mod scene;
pub mod segment;
pub mod typewriter;
pub mod viewport;

pub use driver::*;
pub use environment::*;
pub use input::*;
pub use mascot::*;
pub use reveal::*;
pub use scene::*;
pub use segment::*;
pub use typewriter::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
