//! Keyboard input: arrow keys step the seek bar, space toggles playback.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::InputResult;
use crate::control::{DraggableRange, SeekBar, SliderKey};
use crate::host::MediaPlayer;
use crate::time_format::TimeFormatter;

/// Map arrow keys onto slider keys.
pub fn slider_key(key: &KeyEvent) -> Option<SliderKey> {
    match key.code {
        KeyCode::Left => Some(SliderKey::Left),
        KeyCode::Right => Some(SliderKey::Right),
        KeyCode::Up => Some(SliderKey::Up),
        KeyCode::Down => Some(SliderKey::Down),
        _ => None,
    }
}

/// Handle a keyboard event.
pub fn handle_key_event<R, F, P>(
    key: KeyEvent,
    bar: &mut SeekBar<R, F>,
    player: &mut P,
) -> InputResult
where
    R: DraggableRange,
    F: TimeFormatter,
    P: MediaPlayer + ?Sized,
{
    if let Some(slider) = slider_key(&key) {
        bar.handle_key(slider, player);
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback ===
        KeyCode::Char(' ') => {
            // Leave the scrub in charge of playback until the pointer is released
            if !bar.is_scrubbing() {
                if player.paused() {
                    player.play();
                } else {
                    player.pause();
                }
            }
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
