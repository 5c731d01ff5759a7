//! Seek/scrub control for media players.
//!
//! A horizontal bar representing playback position: draggable with a
//! pointer, steppable with the keyboard, kept in sync with the host
//! player's clock and exposing its value to assistive technology.
//!
//! ```
//! use seekbar::{ComponentRegistry, Config, GuidedTimeFormatter, HorizontalRange};
//! use seekbar::{MediaPlayer, PointerEvent, SeekBar, SimulatedPlayer};
//!
//! let mut bar = SeekBar::new(
//!     &Config::default(),
//!     &ComponentRegistry::with_defaults(),
//!     HorizontalRange::new(0.0, 200.0),
//!     GuidedTimeFormatter,
//! )
//! .unwrap();
//! let mut player = SimulatedPlayer::new(100.0, 800.0);
//!
//! bar.handle_pointer_down(&PointerEvent::new(50.0, 0.0), &mut player);
//! assert!(player.scrubbing());
//! bar.handle_pointer_up(&PointerEvent::new(50.0, 0.0), &mut player);
//! assert_eq!(player.cached_scrub_time(), 25.0);
//! ```

pub mod config;
pub mod control;
pub mod error;
pub mod host;
pub mod input;
pub mod time_format;

pub use config::Config;
pub use control::{
    ComponentRegistry, DraggableRange, HorizontalRange, PointerEvent, ScrubState, SeekBar,
    SliderKey,
};
pub use error::{Result, SeekBarError};
pub use host::{EventHub, EventKind, MediaPlayer, SimulatedPlayer};
pub use time_format::{format_time, GuidedTimeFormatter, TimeFormatter};
