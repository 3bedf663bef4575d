use egui::{Color32, Pos2};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::brush::BrushState;

// Single static counter for all segments
static NEXT_SEGMENT_ID: AtomicUsize = AtomicUsize::new(1);

/// Canvas-space coordinate
pub type Point = Pos2;

/// Lightweight handle identifying one segment on a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(usize);

impl SegmentId {
    pub fn next() -> Self {
        Self(NEXT_SEGMENT_ID.fetch_add(1, Ordering::SeqCst))
    }
}

/// Immutable straight line between two consecutive pointer samples
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: SegmentId,
    start: Point,
    end: Point,
    color: Color32,
    thickness: f32,
}

// Shared handle: the surface and the commands that remember a segment
// both point at the same allocation
pub type SegmentRef = Arc<Segment>;

impl Segment {
    /// Create a segment with a fresh id
    pub fn new(start: Point, end: Point, color: Color32, thickness: f32) -> Self {
        Self {
            id: SegmentId::next(),
            start,
            end,
            color,
            thickness,
        }
    }

    /// Create a segment using the brush values at this moment
    pub fn from_brush(start: Point, end: Point, brush: &BrushState) -> Self {
        Self::new(start, end, brush.color(), brush.thickness())
    }

    pub fn new_ref(start: Point, end: Point, brush: &BrushState) -> SegmentRef {
        Arc::new(Self::from_brush(start, end, brush))
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn is_zero_length(&self) -> bool {
        self.start == self.end
    }
}
