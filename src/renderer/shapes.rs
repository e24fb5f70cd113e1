//! Triangle generation for draw lists

use super::draw_list::DrawList;
use super::vertex::{Vertex, rgba_to_f32};
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn rect(rect: &Rect, color: [f32; 4], out: &mut Vec<Vertex>) {
    let min = rect.min();
    let max = rect.max();

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));

    out.push(Vertex::new(min.x, min.y, color));
    out.push(Vertex::new(max.x, max.y, color));
    out.push(Vertex::new(min.x, max.y, color));
}

/// Tessellate a whole draw list, in draw order
pub fn tessellate(list: &DrawList) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.len() * 6);
    for cmd in list.iter() {
        rect(&cmd.rect, rgba_to_f32(cmd.color), &mut vertices);
    }
    vertices
}
