use egui::{Painter, Rect, Stroke as EguiStroke};
use std::collections::HashSet;

use crate::segment::{SegmentId, SegmentRef};

/// The ordered list of drawables the controller renders into.
///
/// Insertion order is draw order. Implementations must tolerate removing
/// a segment that is not present.
pub trait RenderSurface {
    /// Add a segment on top of everything else
    fn append(&mut self, segment: SegmentRef);

    /// Remove the segment with this id, if present
    fn remove(&mut self, id: SegmentId) -> Option<SegmentRef>;

    /// Remove every segment
    fn clear(&mut self);

    /// Current contents in draw order
    fn segments(&self) -> &[SegmentRef];

    fn contains(&self, id: SegmentId) -> bool {
        self.segments().iter().any(|segment| segment.id() == id)
    }

    fn len(&self) -> usize {
        self.segments().len()
    }

    fn is_empty(&self) -> bool {
        self.segments().is_empty()
    }
}

/// In-memory surface that can paint itself with egui
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    segments: Vec<SegmentRef>,
    // Mirrors `segments` for constant-time membership checks during replay
    ids: HashSet<SegmentId>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint every segment, offset so that canvas (0, 0) lands on `rect.min`.
    ///
    /// Each end gets a filled disc of the segment's thickness so consecutive
    /// segments join with round caps.
    pub fn draw(&self, painter: &Painter, rect: Rect) {
        let origin = rect.min.to_vec2();
        for segment in &self.segments {
            let start = segment.start() + origin;
            let end = segment.end() + origin;
            let radius = segment.thickness() / 2.0;

            painter.line_segment([start, end], EguiStroke::new(segment.thickness(), segment.color()));
            painter.circle_filled(start, radius, segment.color());
            painter.circle_filled(end, radius, segment.color());
        }
    }
}

impl RenderSurface for Canvas {
    fn append(&mut self, segment: SegmentRef) {
        if !self.ids.insert(segment.id()) {
            return;
        }
        self.segments.push(segment);
    }

    fn remove(&mut self, id: SegmentId) -> Option<SegmentRef> {
        if !self.ids.remove(&id) {
            return None;
        }
        let index = self.segments.iter().rposition(|segment| segment.id() == id)?;
        Some(self.segments.remove(index))
    }

    fn clear(&mut self) {
        self.segments.clear();
        self.ids.clear();
    }

    fn segments(&self) -> &[SegmentRef] {
        &self.segments
    }

    fn contains(&self, id: SegmentId) -> bool {
        self.ids.contains(&id)
    }
}
