use crate::brush::BrushState;
use crate::segment::{Point, Segment, SegmentRef};
use crate::surface::RenderSurface;

/// Gesture buffer: turns the pointer samples of one press-drag-release into
/// segments, appending each one to the surface as soon as it exists.
#[derive(Debug, Default)]
pub struct StrokeAccumulator {
    last_point: Option<Point>,
    active_segments: Vec<SegmentRef>,
    skip_zero_length: bool,
}

impl StrokeAccumulator {
    pub fn new(skip_zero_length: bool) -> Self {
        Self {
            last_point: None,
            active_segments: Vec::new(),
            skip_zero_length,
        }
    }

    /// Whether a gesture is in progress
    pub fn is_active(&self) -> bool {
        self.last_point.is_some()
    }

    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// Segments produced so far in the current gesture
    pub fn active_segments(&self) -> &[SegmentRef] {
        &self.active_segments
    }

    /// Start a fresh buffer at `point`.
    ///
    /// The caller is responsible for dealing with a previous unfinished
    /// gesture before calling this (see [`StrokeAccumulator::abandon`]).
    pub fn begin(&mut self, point: Point) {
        self.last_point = Some(point);
        self.active_segments.clear();
    }

    /// Extend the gesture to `point`.
    ///
    /// Returns the new segment, or `None` when no gesture is active or the
    /// move was a zero-length one that is being skipped.
    pub fn extend(
        &mut self,
        point: Point,
        brush: &BrushState,
        surface: &mut impl RenderSurface,
    ) -> Option<SegmentRef> {
        let last = self.last_point?;
        if self.skip_zero_length && last == point {
            return None;
        }

        let segment = Segment::new_ref(last, point, brush);
        surface.append(segment.clone());
        self.active_segments.push(segment.clone());
        self.last_point = Some(point);
        Some(segment)
    }

    /// End the gesture, handing over its segments (possibly none)
    pub fn finish(&mut self) -> Vec<SegmentRef> {
        self.last_point = None;
        std::mem::take(&mut self.active_segments)
    }

    /// Drop the gesture without committing it, taking its live segments
    /// back off the surface. Returns how many were removed.
    pub fn abandon(&mut self, surface: &mut impl RenderSurface) -> usize {
        let segments = self.finish();
        segments
            .iter()
            .filter(|segment| surface.remove(segment.id()).is_some())
            .count()
    }
}
