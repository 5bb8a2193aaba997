//! Drag-to-select time ranges
//!
//! Tracks one press → move → release cycle over a roll surface, in
//! normalized x coordinates. Mouse and touch arrive through the same
//! pointer events upstream, so the tool only ever sees presses, moves,
//! and releases.

/// A time-range selection in normalized x coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSelection {
    /// x where the drag began.
    pub start: f32,
    /// x where the pointer currently is, or ended.
    pub end: f32,
}

impl TimeSelection {
    /// Bounds ordered left to right.
    pub fn bounds(&self) -> (f32, f32) {
        (self.start.min(self.end), self.start.max(self.end))
    }

    pub fn width(&self) -> f32 {
        let (lo, hi) = self.bounds();
        hi - lo
    }
}

/// State machine for one roll's drag selection.
///
/// idle → press → selecting → release → idle. There is no cancellation
/// path: a drag that never sees a release stays in the selecting state.
#[derive(Debug, Default)]
pub struct SelectionTool {
    active: Option<TimeSelection>,
    captured: Option<TimeSelection>,
}

impl SelectionTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selecting(&self) -> bool {
        self.active.is_some()
    }

    /// Begin a drag at `x`. Ignored while a drag is already in progress.
    pub fn press(&mut self, x: f32) {
        if self.active.is_none() {
            self.active = Some(TimeSelection { start: x, end: x });
        }
    }

    /// Move the drag end to `x`. Ignored while idle.
    pub fn drag_to(&mut self, x: f32) {
        if let Some(sel) = &mut self.active {
            sel.end = x;
        }
    }

    /// Finish the drag and capture its bounds. Returns the captured
    /// selection, or `None` if no drag was in progress.
    pub fn release(&mut self) -> Option<TimeSelection> {
        let sel = self.active.take()?;
        let (lo, hi) = sel.bounds();
        log::debug!("selection captured: [{lo:.3}, {hi:.3}]");
        self.captured = Some(sel);
        self.captured
    }

    /// The rectangle to draw this frame: the live drag if one is active,
    /// otherwise the last captured selection.
    pub fn visible(&self) -> Option<TimeSelection> {
        self.active.or(self.captured)
    }

    /// The last completed selection.
    pub fn captured(&self) -> Option<TimeSelection> {
        self.captured
    }
}
