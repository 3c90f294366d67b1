use std::fmt;

use serde::{Deserialize, Serialize};

/// Which of the two binaries is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Plain capture tool: save / copy-image actions.
    Capture,
    /// Reader variant: text extraction panel, full captures auto-extract.
    Reader,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    CaptureFullScreen,
    BeginSelection,
    RegionSelected(CaptureRegion),
    SelectionCancelled,
    SaveImage,
    CopyImage,
    ExtractText,
    CopyText(String),
    ShowOverlay(CapturedImage),
    ShowCapture(CapturedImage),
    ShowText(String),
    StatusUpdate { status: String, capturing: bool },
    Warning(String),
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Show,
    Hide,
    Close,
}

/// Screen-space rectangle handed to the capture primitives.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CaptureRegion {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A drag selection as two normalized corners: x1 <= x2 and y1 <= y2
/// always hold, regardless of the drag direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl SelectionRect {
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            x1: a.0.min(b.0),
            y1: a.1.min(b.1),
            x2: a.0.max(b.0),
            y2: a.1.max(b.1),
        }
    }

    pub fn width(&self) -> u32 {
        (self.x2 - self.x1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y2 - self.y1) as u32
    }

    /// A click without a drag produces a zero-area rectangle. That is a
    /// legal capture request: the derived region is widened to one pixel.
    pub fn to_region(&self) -> CaptureRegion {
        CaptureRegion {
            x: self.x1,
            y: self.y1,
            width: self.width().max(1),
            height: self.height().max(1),
        }
    }
}

/// The most recent capture, as a raw RGBA8 buffer. Replace-only: a new
/// capture swaps the whole value, nothing ever mutates pixels in place.
#[derive(Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl CapturedImage {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }
}

impl fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized_in_any_drag_direction() {
        for (a, b) in [
            ((10, 20), (30, 40)),
            ((30, 40), (10, 20)),
            ((30, 20), (10, 40)),
            ((10, 40), (30, 20)),
        ] {
            let rect = SelectionRect::from_corners(a, b);
            assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (10, 20, 30, 40));
        }
    }

    #[test]
    fn reverse_drag_example() {
        // press at (100,200), drag to (50,80)
        let rect = SelectionRect::from_corners((100, 200), (50, 80));
        assert_eq!((rect.x1, rect.y1), (50, 80));
        assert_eq!((rect.x2, rect.y2), (100, 200));
    }

    #[test]
    fn zero_area_selection_maps_to_one_pixel_region() {
        let rect = SelectionRect::from_corners((42, 17), (42, 17));
        let region = rect.to_region();
        assert_eq!((region.x, region.y), (42, 17));
        assert_eq!((region.width, region.height), (1, 1));
    }

    #[test]
    fn zero_width_line_keeps_its_height() {
        let rect = SelectionRect::from_corners((5, 10), (5, 90));
        let region = rect.to_region();
        assert_eq!((region.width, region.height), (1, 80));
    }
}
