//! Renderer hand-off
//!
//! The simulation never draws. Each frame it produces a `DrawList` of
//! colored rectangles; `shapes` turns that into triangles an external GPU
//! renderer can upload as-is.

pub mod draw_list;
pub mod shapes;
pub mod vertex;

pub use draw_list::{DrawCommand, DrawList, Rgba, reflex_draw_list, stack_draw_list};
pub use vertex::Vertex;
