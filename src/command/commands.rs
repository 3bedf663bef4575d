use crate::segment::{SegmentId, SegmentRef};
use crate::surface::RenderSurface;

/// Undoable mutations of the canvas.
///
/// Commands only hold shared handles to segments that live on the surface;
/// replaying them adds or removes those handles and never touches the
/// segments themselves.
#[derive(Clone)]
pub enum Command {
    /// All segments drawn by one press-drag-release gesture
    Stroke { segments: Vec<SegmentRef> },

    /// Everything that was on the surface when it was cleared, in draw order
    Clear { removed_segments: Vec<SegmentRef> },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Stroke { segments } => f
                .debug_struct("Stroke")
                .field("segments", &ids(segments))
                .finish(),
            Command::Clear { removed_segments } => f
                .debug_struct("Clear")
                .field("removed_segments", &ids(removed_segments))
                .finish(),
        }
    }
}

fn ids(segments: &[SegmentRef]) -> Vec<SegmentId> {
    segments.iter().map(|segment| segment.id()).collect()
}

impl Command {
    pub fn stroke(segments: Vec<SegmentRef>) -> Self {
        Command::Stroke { segments }
    }

    pub fn clear(removed_segments: Vec<SegmentRef>) -> Self {
        Command::Clear { removed_segments }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Stroke { .. } => "stroke",
            Command::Clear { .. } => "clear",
        }
    }

    /// The segments this command adds or removes
    pub fn segments(&self) -> &[SegmentRef] {
        match self {
            Command::Stroke { segments } => segments,
            Command::Clear { removed_segments } => removed_segments,
        }
    }

    /// Reproduce the command's effect on the surface.
    ///
    /// A stroke only appends segments that are not already present, so
    /// applying it right after live drawing changes nothing.
    pub fn forward(&self, surface: &mut impl RenderSurface) {
        match self {
            Command::Stroke { segments } => append_missing(segments, surface),
            Command::Clear { .. } => surface.clear(),
        }
    }

    /// Revert the command's effect on the surface
    pub fn reverse(&self, surface: &mut impl RenderSurface) {
        match self {
            Command::Stroke { segments } => {
                // Newest first: on an untouched surface each one is at the tail
                for segment in segments.iter().rev() {
                    surface.remove(segment.id());
                }
            }
            Command::Clear { removed_segments } => append_missing(removed_segments, surface),
        }
    }
}

fn append_missing(segments: &[SegmentRef], surface: &mut impl RenderSurface) {
    for segment in segments {
        if !surface.contains(segment.id()) {
            surface.append(segment.clone());
        }
    }
}
