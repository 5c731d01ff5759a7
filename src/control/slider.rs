//! Draggable range: pointer geometry and drag lifecycle for a horizontal bar.

use super::element::CssLength;

/// Pointer position in the host's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Keys the slider responds to while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    Left,
    Right,
    Up,
    Down,
}

impl SliderKey {
    /// Whether the key moves the position forward (Right/Up) or back (Left/Down).
    pub fn is_forward(self) -> bool {
        matches!(self, SliderKey::Right | SliderKey::Up)
    }
}

/// Capabilities a seek control needs from its slider base.
///
/// Implementations own the bar geometry and the visual fill; the seek
/// control owns what a position means.
pub trait DraggableRange {
    /// Fraction in `[0, 1]` of the bar to the left of the pointer.
    fn distance(&self, event: &PointerEvent) -> f64;

    /// Called first when a drag begins.
    fn on_drag_start(&mut self, event: &PointerEvent);

    /// Called first when a drag ends.
    fn on_drag_end(&mut self, event: &PointerEvent);

    fn is_dragging(&self) -> bool;

    /// Set the played fill from a progress fraction.
    fn update_fill(&mut self, progress: f64);

    /// Current fill width of the bar.
    fn fill_width(&self) -> CssLength;
}

/// Horizontal bar occupying `[left, left + width)` on the x axis.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalRange {
    left: f64,
    width: f64,
    dragging: bool,
    fill: CssLength,
}

impl HorizontalRange {
    pub fn new(left: f64, width: f64) -> Self {
        Self {
            left,
            width,
            dragging: false,
            fill: CssLength::Percent(0.0),
        }
    }

    /// Move or resize the bar (e.g. after the host resized).
    pub fn set_geometry(&mut self, left: f64, width: f64) {
        self.left = left;
        self.width = width;
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

impl DraggableRange for HorizontalRange {
    fn distance(&self, event: &PointerEvent) -> f64 {
        if self.width <= 0.0 {
            return 0.0;
        }
        ((event.x - self.left) / self.width).clamp(0.0, 1.0)
    }

    fn on_drag_start(&mut self, _event: &PointerEvent) {
        self.dragging = true;
    }

    fn on_drag_end(&mut self, _event: &PointerEvent) {
        self.dragging = false;
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn update_fill(&mut self, progress: f64) {
        // NaN, negative and infinite progress draw an empty bar
        let progress = if progress.is_finite() && progress >= 0.0 {
            progress
        } else {
            0.0
        };
        self.fill = CssLength::Percent(progress * 100.0);
    }

    fn fill_width(&self) -> CssLength {
        self.fill
    }
}
