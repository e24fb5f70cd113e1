//! Abstract input events and per-frame input state
//!
//! The windowing layer translates its own events into `InputEvent`s; the
//! simulation only ever sees a `FrameInput`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Space,
    R,
    Other(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer position in window pixels
    PointerMove { x: f32, y: f32 },
    PointerDown { button: u8 },
    KeyDown(Key),
    QuitRequested,
}

/// Window size used to map pixels into the [-1, 1] field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Pixel (origin top-left, y down) to normalized (y up), sampling pixel centers
    pub fn to_normalized(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x + 0.5) / self.width * 2.0 - 1.0,
            1.0 - (y + 0.5) / self.height * 2.0,
        )
    }

    /// Inverse of `to_normalized`
    pub fn to_pixels(&self, p: Vec2) -> (f32, f32) {
        (
            (p.x + 1.0) * 0.5 * self.width - 0.5,
            (1.0 - p.y) * 0.5 * self.height - 0.5,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(crate::consts::REFERENCE_WIDTH, crate::consts::REFERENCE_HEIGHT)
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer position (normalized) if it moved this frame
    pub pointer: Option<Vec2>,
    /// Click: start / place
    pub pointer_down: bool,
    /// Restart after a round ended
    pub restart: bool,
    pub quit: bool,
}

impl FrameInput {
    pub fn apply(&mut self, event: &InputEvent, viewport: &Viewport) {
        match *event {
            InputEvent::PointerMove { x, y } => {
                self.pointer = Some(viewport.to_normalized(x, y));
            }
            InputEvent::PointerDown { .. } => self.pointer_down = true,
            InputEvent::KeyDown(Key::R | Key::Space) => self.restart = true,
            InputEvent::KeyDown(Key::Escape) | InputEvent::QuitRequested => self.quit = true,
            InputEvent::KeyDown(Key::Other(_)) => {}
        }
    }

    pub fn apply_all<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
        viewport: &Viewport,
    ) {
        for event in events {
            self.apply(event, viewport);
        }
    }

    /// Clear one-shot inputs after the frame consumed them
    pub fn clear_one_shots(&mut self) {
        self.pointer = None;
        self.pointer_down = false;
        self.restart = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_normalized() {
        let vp = Viewport::new(640.0, 480.0);
        let p = vp.to_normalized(319.5, 239.5);
        assert!(p.x.abs() < 1e-6);
        assert!(p.y.abs() < 1e-6);

        let left = vp.to_normalized(-0.5, 0.0);
        assert!((left.x + 1.0).abs() < 1e-6);
        assert!(left.y > 0.99);

        let (px, py) = vp.to_pixels(Vec2::new(0.25, -0.5));
        let back = vp.to_normalized(px, py);
        assert!((back - Vec2::new(0.25, -0.5)).length() < 1e-5);
    }

    #[test]
    fn test_apply_events() {
        let vp = Viewport::default();
        let mut input = FrameInput::default();
        input.apply_all(
            &[
                InputEvent::PointerMove { x: 0.0, y: 0.0 },
                InputEvent::PointerDown { button: 1 },
                InputEvent::KeyDown(Key::R),
            ],
            &vp,
        );
        assert!(input.pointer.is_some());
        assert!(input.pointer_down);
        assert!(input.restart);
        assert!(!input.quit);

        input.clear_one_shots();
        assert!(!input.pointer_down);
        assert!(!input.restart);
        assert!(input.pointer.is_none());

        input.apply(&InputEvent::QuitRequested, &vp);
        assert!(input.quit);
    }
}
