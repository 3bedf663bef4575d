use egui::{Pos2, Rect};

use crate::segment::Point;

/// Pointer input already translated into canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button went down inside the canvas
    Press(Point),
    /// Pointer moved while the button is held
    Move(Point),
    /// Button released
    Release,
    /// Pointer position was lost while the button was held
    Cancel,
}

/// Turns per-frame pointer state into discrete [`PointerEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    pressed: bool,
    last_pointer_pos: Option<Pos2>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::ZERO)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pressed: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Screen position to canvas-local position
    pub fn to_canvas(&self, pos: Pos2) -> Point {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Canvas-local position back to screen position
    pub fn to_screen(&self, point: Point) -> Pos2 {
        self.canvas_rect.min + point.to_vec2()
    }

    /// Feed the current button state and pointer position (screen space),
    /// getting back the events that happened since the previous frame.
    pub fn process(&mut self, button_down: bool, pos: Option<Pos2>) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        match (self.pressed, button_down, pos) {
            (false, true, Some(pos)) if self.canvas_rect.contains(pos) => {
                self.pressed = true;
                events.push(PointerEvent::Press(self.to_canvas(pos)));
            }
            (true, true, Some(pos)) => {
                if self.last_pointer_pos != Some(pos) {
                    events.push(PointerEvent::Move(self.to_canvas(pos)));
                }
            }
            (true, true, None) => {
                self.pressed = false;
                events.push(PointerEvent::Cancel);
            }
            (true, false, pos) => {
                if let Some(pos) = pos.filter(|pos| self.last_pointer_pos != Some(*pos)) {
                    events.push(PointerEvent::Move(self.to_canvas(pos)));
                }
                self.pressed = false;
                events.push(PointerEvent::Release);
            }
            _ => {}
        }

        self.last_pointer_pos = pos;
        events
    }
}
