//! Tooltip progress bar: a child bar carrying a floating time label that
//! follows the played position.

use super::element::{CssLength, Element, StyleProperty};
use super::registry::Component;

/// Box constraints that keep the tooltip inside the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipBounds {
    pub max_width: f64,
    pub min_width: f64,
    /// Offset from the right edge of the tooltip bar
    pub right: f64,
}

/// Compute tooltip bounds for the current player and tooltip widths.
///
/// The tooltip is centered on the end of its bar, so it needs half its own
/// width of room on either side of the played position.
pub fn compute_bounds(player_width: f64, tooltip_width: f64) -> TooltipBounds {
    let half = tooltip_width / 2.0;
    TooltipBounds {
        max_width: (player_width - half).floor(),
        min_width: half.ceil(),
        right: -half,
    }
}

/// The tooltip sub-control.
#[derive(Debug, Clone)]
pub struct TooltipBar {
    element: Element,
    label: Element,
}

impl TooltipBar {
    pub const NAME: &'static str = "TooltipProgressBar";

    pub fn new() -> Self {
        Self {
            element: Element::new("div"),
            label: Element::new("div"),
        }
    }

    /// The floating label.
    pub fn label(&self) -> &Element {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Element {
        &mut self.label
    }

    /// Rendered width of the floating label, as measured by the host.
    pub fn tooltip_width(&self) -> f64 {
        self.label.rendered_width()
    }

    pub fn set_label(&mut self, text: impl Into<String>) {
        self.label.set_text(text);
    }

    /// Mirror the seek bar's fill so the label sits at the played position.
    pub fn track(&mut self, fill: CssLength) {
        self.element.set_style(StyleProperty::Width, fill);
    }

    pub fn apply_bounds(&mut self, bounds: &TooltipBounds) {
        self.element
            .set_style(StyleProperty::MaxWidth, CssLength::Px(bounds.max_width));
        self.element
            .set_style(StyleProperty::MinWidth, CssLength::Px(bounds.min_width));
        self.element
            .set_style(StyleProperty::Right, CssLength::Px(bounds.right));
    }
}

impl Default for TooltipBar {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for TooltipBar {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn into_tooltip(self: Box<Self>) -> Option<TooltipBar> {
        Some(*self)
    }
}
