//! Terminal input for the seek bar.
//!
//! Translates crossterm mouse and keyboard events into seek bar pointer
//! and key input, returning control flow signals to the host loop.

mod keyboard;
mod mouse;

pub use keyboard::{handle_key_event, slider_key};
pub use mouse::{
    bar_geometry, handle_mouse_event, is_over_bar, mouse_action, pointer_from_mouse, MouseAction,
    BAR_START, RESERVED_COLUMNS,
};

use crossterm::event::Event;

use crate::control::{HorizontalRange, SeekBar};
use crate::host::MediaPlayer;
use crate::time_format::TimeFormatter;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the host loop
    Quit,
}

/// Handle any terminal event, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to handle
/// * `bar` - The seek bar receiving pointer and key input
/// * `player` - The host player
/// * `bar_row` - Terminal row the bar is drawn on
pub fn handle_event<F, P>(
    event: Event,
    bar: &mut SeekBar<HorizontalRange, F>,
    player: &mut P,
    bar_row: u16,
) -> InputResult
where
    F: TimeFormatter,
    P: MediaPlayer + ?Sized,
{
    match event {
        Event::Key(key) => handle_key_event(key, bar, player),
        Event::Mouse(mouse) => {
            handle_mouse_event(mouse, bar, player, bar_row);
            InputResult::Continue
        }
        _ => InputResult::Continue, // Resize and focus are handled by the host
    }
}
