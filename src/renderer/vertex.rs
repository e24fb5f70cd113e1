//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// 8-bit RGBA to normalized floats
#[inline]
pub fn rgba_to_f32(color: [u8; 4]) -> [f32; 4] {
    color.map(|c| c as f32 / 255.0)
}

/// Colors for game elements
pub mod colors {
    pub const WHITE: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];
    pub const BAND: [u8; 4] = [0x00, 0x00, 0xFF, 0xFF];
    pub const LOST: [u8; 4] = [0xFF, 0x00, 0x00, 0xFF];
    pub const TOWER_COMPLETE: [u8; 4] = [0x00, 0xFF, 0x00, 0xFF];
}
