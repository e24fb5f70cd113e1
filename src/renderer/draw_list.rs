//! Per-frame draw lists
//!
//! A draw list is a read-only snapshot: colored rectangles in draw order.

use glam::Vec2;
use rand::Rng;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{FIELD_MAX, FIELD_MIN};
use crate::sim::{Outcome, Phase, ReflexGame, Rect, StackGame};

pub type Rgba = [u8; 4];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub rect: Rect,
    pub color: Rgba,
}

#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, color: Rgba) {
        self.commands.push(DrawCommand { rect, color });
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        shapes::tessellate(self)
    }

    /// Vertex data as raw bytes, ready for a vertex buffer upload
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }
}

/// Actor, the two boundary bands, then every live target.
///
/// Above unit length the actor is drawn white at full length; at or below
/// it the actor shrinks to one target width and fades toward red.
pub fn reflex_draw_list<R: Rng>(game: &ReflexGame<R>) -> DrawList {
    let mut list = DrawList::new();
    let size = game.config().target_size;
    let length = game.actor_length;
    let center = Vec2::new(game.actor_x, 0.0);

    if length > 1.0 {
        list.push(game.actor_rect(), colors::WHITE);
    } else {
        let fade = (255.0 * length.clamp(0.0, 1.0)) as u8;
        list.push(Rect::new(center, size), [0xFF, fade, fade, 0xFF]);
    }

    for sign in [1.0, -1.0] {
        list.push(
            Rect::from_corners(
                Vec2::new(FIELD_MIN, sign * 0.6 * size.y),
                Vec2::new(FIELD_MAX, sign * 0.5 * size.y),
            ),
            colors::BAND,
        );
    }

    for target in &game.targets {
        list.push(target.rect, colors::WHITE);
    }
    list
}

/// Tower blocks bottom first, then the level element.
///
/// Blocks turn green once the tower is complete; the level turns red when
/// the round is over and is hidden after a win.
pub fn stack_draw_list(game: &StackGame) -> DrawList {
    let mut list = DrawList::new();
    let block_color = match game.phase {
        Phase::Terminal(Outcome::Won) => colors::TOWER_COMPLETE,
        Phase::Idle | Phase::Active | Phase::Terminal(_) => colors::WHITE,
    };
    for block in &game.tower {
        list.push(*block, block_color);
    }

    match game.phase {
        Phase::Idle | Phase::Active => list.push(game.level, colors::WHITE),
        Phase::Terminal(Outcome::Won) => {}
        Phase::Terminal(_) => list.push(game.level, colors::LOST),
    }
    list
}
