use crate::{
    foundation::core::{Rect, Vec2},
    schedule::driver::FrameEffect,
};

const MAX_TILT: f64 = 0.15; // radians at the container edge
const FOLLOW: f64 = 0.1; // fraction of the remaining gap closed per frame

/// Pointer-following tilt of the logo while hovered; eases back to level on leave.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HoverTilt {
    hovered: bool,
    pointer: Vec2, // normalized, x right / y up, each in -1..=1
    current: Vec2, // x = pitch, y = yaw
}

impl HoverTilt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Records a pointer position given in client coordinates over `container`.
    pub fn pointer_moved(&mut self, container: Rect, client_x: f64, client_y: f64) {
        if container.width() <= 0.0 || container.height() <= 0.0 {
            return;
        }
        self.pointer = Vec2::new(
            ((client_x - container.x0) / container.width()) * 2.0 - 1.0,
            -((client_y - container.y0) / container.height()) * 2.0 + 1.0,
        );
    }

    pub fn target(&self) -> Vec2 {
        if self.hovered {
            Vec2::new(self.pointer.y * MAX_TILT, self.pointer.x * MAX_TILT)
        } else {
            Vec2::ZERO
        }
    }

    pub fn rotation(&self) -> Vec2 {
        self.current
    }
}

impl FrameEffect for HoverTilt {
    fn frame(&mut self, _time: f64, _dt: f64) {
        let target = self.target();
        self.current += (target - self.current) * FOLLOW;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tilt.rs"]
mod tests;
