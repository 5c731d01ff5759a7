//! Mouse input: left-button down, drag and up drive a scrub.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::control::{HorizontalRange, PointerEvent, SeekBar};
use crate::host::MediaPlayer;
use crate::time_format::TimeFormatter;

/// Column where the bar starts.
pub const BAR_START: u16 = 1;

/// Columns kept free for padding and the time readout.
pub const RESERVED_COLUMNS: u16 = 14;

/// Left-button phases relevant to scrubbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Down,
    Drag,
    Up,
}

/// Classify a mouse event. Only the left button scrubs.
pub fn mouse_action(mouse: &MouseEvent) -> Option<MouseAction> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MouseAction::Down),
        MouseEventKind::Drag(MouseButton::Left) => Some(MouseAction::Drag),
        MouseEventKind::Up(MouseButton::Left) => Some(MouseAction::Up),
        _ => None,
    }
}

/// Pointer position of a mouse event in cell coordinates.
pub fn pointer_from_mouse(mouse: &MouseEvent) -> PointerEvent {
    PointerEvent::new(mouse.column as f64, mouse.row as f64)
}

/// Bar geometry for a terminal `term_cols` wide.
pub fn bar_geometry(term_cols: u16) -> HorizontalRange {
    let width = term_cols.saturating_sub(RESERVED_COLUMNS);
    HorizontalRange::new(BAR_START as f64, width as f64)
}

/// Whether `column` lies on the bar itself rather than the padding or
/// time readout around it.
pub fn is_over_bar(range: &HorizontalRange, column: u16) -> bool {
    let column = column as f64;
    column >= range.left() && column < range.left() + range.width()
}

/// Handle a mouse event.
///
/// A scrub starts only on a left-button press over the bar. Once started
/// the pointer is captured: drags and the release count wherever they
/// happen on screen.
///
/// Returns true if the event reached the seek bar.
pub fn handle_mouse_event<F, P>(
    mouse: MouseEvent,
    bar: &mut SeekBar<HorizontalRange, F>,
    player: &mut P,
    bar_row: u16,
) -> bool
where
    F: TimeFormatter,
    P: MediaPlayer + ?Sized,
{
    let Some(action) = mouse_action(&mouse) else {
        return false;
    };
    let pointer = pointer_from_mouse(&mouse);

    match action {
        MouseAction::Down => {
            if mouse.row != bar_row || !is_over_bar(bar.range(), mouse.column) {
                return false;
            }
            bar.handle_pointer_down(&pointer, player);
        }
        MouseAction::Drag | MouseAction::Up if !bar.is_scrubbing() => return false,
        MouseAction::Drag => bar.handle_pointer_move(&pointer, player),
        MouseAction::Up => bar.handle_pointer_up(&pointer, player),
    }
    true
}
