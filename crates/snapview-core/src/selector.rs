use snapview_types::SelectionRect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// No gesture open.
    Idle,
    /// Overlay is up, waiting for the first corner.
    Armed,
    /// Pointer is down, second corner follows the cursor.
    Dragging,
}

/// Drives a single drag-to-select gesture. The UI feeds pointer events in;
/// transitions that make no sense in the current state are no-ops, so a
/// drag can never precede a press and a stray release produces nothing.
#[derive(Debug)]
pub struct RegionSelector {
    state: SelectorState,
    origin: (i32, i32),
    cursor: (i32, i32),
}

impl RegionSelector {
    pub fn new() -> Self {
        Self {
            state: SelectorState::Idle,
            origin: (0, 0),
            cursor: (0, 0),
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != SelectorState::Idle
    }

    /// Open a gesture. Refused while one is already open, which is what
    /// keeps a second "begin selection" from interleaving with the first.
    pub fn arm(&mut self) -> bool {
        if self.state != SelectorState::Idle {
            return false;
        }
        self.state = SelectorState::Armed;
        true
    }

    /// First corner. Both corners start at the press position.
    pub fn press(&mut self, x: i32, y: i32) {
        if self.state != SelectorState::Armed {
            return;
        }
        self.origin = (x, y);
        self.cursor = (x, y);
        self.state = SelectorState::Dragging;
    }

    /// Second corner follows the pointer.
    pub fn drag(&mut self, x: i32, y: i32) {
        if self.state != SelectorState::Dragging {
            return;
        }
        self.cursor = (x, y);
    }

    /// The live rectangle while a drag is open, for overlay painting.
    pub fn current(&self) -> Option<SelectionRect> {
        (self.state == SelectorState::Dragging)
            .then(|| SelectionRect::from_corners(self.origin, self.cursor))
    }

    /// Finalize the gesture and return the selection. The selector is back
    /// in `Idle` afterwards, whether or not a rectangle was produced.
    pub fn release(&mut self, x: i32, y: i32) -> Option<SelectionRect> {
        if self.state != SelectorState::Dragging {
            return None;
        }
        self.cursor = (x, y);
        let rect = SelectionRect::from_corners(self.origin, self.cursor);
        self.state = SelectorState::Idle;
        Some(rect)
    }

    /// Abort from any state. Idempotent.
    pub fn cancel(&mut self) {
        self.state = SelectorState::Idle;
    }
}

impl Default for RegionSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_gesture_produces_exactly_one_rect_then_idles() {
        let mut selector = RegionSelector::new();
        assert!(selector.arm());
        selector.press(100, 200);
        selector.drag(70, 120);
        let rect = selector.release(50, 80).expect("gesture was open");

        assert_eq!((rect.x1, rect.y1), (50, 80));
        assert_eq!((rect.x2, rect.y2), (100, 200));
        assert_eq!(selector.state(), SelectorState::Idle);

        // A second release is a stray event, not a second capture.
        assert_eq!(selector.release(50, 80), None);
    }

    #[test]
    fn rect_is_normalized_for_every_drag_direction() {
        for (press, release) in [
            ((10, 10), (90, 60)),
            ((90, 60), (10, 10)),
            ((90, 10), (10, 60)),
            ((10, 60), (90, 10)),
        ] {
            let mut selector = RegionSelector::new();
            selector.arm();
            selector.press(press.0, press.1);
            let rect = selector.release(release.0, release.1).unwrap();
            assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (10, 10, 90, 60));
        }
    }

    #[test]
    fn cancel_while_armed_produces_nothing() {
        let mut selector = RegionSelector::new();
        selector.arm();
        selector.cancel();
        assert_eq!(selector.state(), SelectorState::Idle);
        assert_eq!(selector.release(5, 5), None);
    }

    #[test]
    fn cancel_while_dragging_discards_the_gesture() {
        let mut selector = RegionSelector::new();
        selector.arm();
        selector.press(10, 10);
        selector.drag(40, 40);
        selector.cancel();
        assert_eq!(selector.state(), SelectorState::Idle);
        assert_eq!(selector.current(), None);
    }

    #[test]
    fn cancel_is_idempotent() {
        let mut selector = RegionSelector::new();
        selector.arm();
        selector.press(1, 2);
        selector.cancel();
        let after_first = selector.state();
        selector.cancel();
        assert_eq!(selector.state(), after_first);
        assert_eq!(selector.state(), SelectorState::Idle);
    }

    #[test]
    fn drag_before_press_is_unreachable() {
        let mut selector = RegionSelector::new();
        selector.arm();
        selector.drag(30, 30);
        assert_eq!(selector.state(), SelectorState::Armed);
        assert_eq!(selector.current(), None);
    }

    #[test]
    fn press_without_arm_is_ignored() {
        let mut selector = RegionSelector::new();
        selector.press(3, 4);
        assert_eq!(selector.state(), SelectorState::Idle);
    }

    #[test]
    fn arm_is_refused_while_a_gesture_is_open() {
        let mut selector = RegionSelector::new();
        assert!(selector.arm());
        assert!(!selector.arm());
        selector.press(0, 0);
        assert!(!selector.arm());
    }

    #[test]
    fn click_without_drag_finalizes_a_degenerate_rect() {
        let mut selector = RegionSelector::new();
        selector.arm();
        selector.press(42, 17);
        let rect = selector.release(42, 17).unwrap();
        assert_eq!(rect.width(), 0);
        assert_eq!(rect.height(), 0);
        // widened to a pixel when it becomes a capture request
        assert_eq!(rect.to_region().width, 1);
        assert_eq!(rect.to_region().height, 1);
    }

    #[test]
    fn live_rect_tracks_the_cursor() {
        let mut selector = RegionSelector::new();
        selector.arm();
        selector.press(10, 10);
        selector.drag(20, 5);
        let rect = selector.current().unwrap();
        assert_eq!((rect.x1, rect.y1, rect.x2, rect.y2), (10, 5, 20, 10));
    }
}
