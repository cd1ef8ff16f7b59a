//! Physical display side: LED addressing, brightness ramps and rendering.

pub mod layout;
pub mod palette;
pub mod render;

pub use layout::{PanelLayout, RowParity};
pub use palette::{Luminance, Transition};
pub use render::Renderer;
