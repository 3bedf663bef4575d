use log::{debug, info};

use crate::brush::BrushState;
use crate::command::{Command, CommandHistory};
use crate::config::CanvasConfig;
use crate::input::PointerEvent;
use crate::segment::Point;
use crate::stroke::StrokeAccumulator;
use crate::surface::{Canvas, RenderSurface};

/// Drives drawing on a surface: pointer callbacks build strokes live, and
/// finished strokes and clears go through an undoable history.
///
/// The controller owns the surface and the history; nothing else mutates them.
#[derive(Debug)]
pub struct DrawingController<S: RenderSurface = Canvas> {
    surface: S,
    brush: BrushState,
    accumulator: StrokeAccumulator,
    history: CommandHistory,
}

impl Default for DrawingController<Canvas> {
    fn default() -> Self {
        Self::new(Canvas::new(), BrushState::default())
    }
}

impl<S: RenderSurface> DrawingController<S> {
    pub fn new(surface: S, brush: BrushState) -> Self {
        Self {
            surface,
            brush,
            accumulator: StrokeAccumulator::new(true),
            history: CommandHistory::new(),
        }
    }

    pub fn with_config(surface: S, config: &CanvasConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => CommandHistory::with_limit(limit),
            None => CommandHistory::new(),
        };
        Self {
            surface,
            brush: config.brush(),
            accumulator: StrokeAccumulator::new(config.skip_zero_length),
            history,
        }
    }

    /// Begin a gesture. A gesture that was still active is abandoned.
    pub fn on_press(&mut self, point: Point) {
        self.abandon_gesture();
        self.accumulator.begin(point);
        debug!("Stroke started at {point:?}");
    }

    /// Extend the active gesture to `point`; ignored when not drawing
    pub fn on_move(&mut self, point: Point) {
        self.accumulator.extend(point, &self.brush, &mut self.surface);
    }

    /// Finish the gesture, committing a stroke if anything was drawn
    pub fn on_release(&mut self) {
        let segments = self.accumulator.finish();
        if segments.is_empty() {
            return;
        }
        debug!("Stroke finished with {} segments", segments.len());
        self.history.commit(Command::stroke(segments), &mut self.surface);
    }

    /// Drop the active gesture, e.g. when pointer capture is lost.
    /// Its live segments are removed and nothing is committed.
    pub fn on_cancel(&mut self) {
        self.abandon_gesture();
    }

    /// Route one translated pointer event to the matching callback
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(point) => self.on_press(point),
            PointerEvent::Move(point) => self.on_move(point),
            PointerEvent::Release => self.on_release(),
            PointerEvent::Cancel => self.on_cancel(),
        }
    }

    /// Remove everything from the surface as one undoable step.
    /// Returns false when the surface was already empty.
    pub fn clear(&mut self) -> bool {
        self.abandon_gesture();
        if self.surface.is_empty() {
            return false;
        }
        let removed = self.surface.segments().to_vec();
        info!("Clearing {} segments", removed.len());
        self.history.commit(Command::clear(removed), &mut self.surface);
        self.surface.clear();
        true
    }

    pub fn undo(&mut self) -> bool {
        self.abandon_gesture();
        self.history.undo(&mut self.surface)
    }

    pub fn redo(&mut self) -> bool {
        self.abandon_gesture();
        self.history.redo(&mut self.surface)
    }

    pub fn is_drawing(&self) -> bool {
        self.accumulator.is_active()
    }

    /// Current pointer position of the active gesture
    pub fn pointer(&self) -> Option<Point> {
        self.accumulator.last_point()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn brush(&self) -> &BrushState {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut BrushState {
        &mut self.brush
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    fn abandon_gesture(&mut self) {
        if !self.accumulator.is_active() {
            return;
        }
        let removed = self.accumulator.abandon(&mut self.surface);
        if removed > 0 {
            debug!("Abandoned unfinished stroke, removed {removed} segments");
        }
    }
}
