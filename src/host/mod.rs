//! Host media player side of the seek bar.
//!
//! - `media`: the `MediaPlayer` trait the seek bar reads and drives
//! - `events`: observer hub for player events (time updates, end, ready)
//! - `simulated`: an in-memory player with a playback clock

mod events;
mod media;
mod simulated;

pub use events::{EventHub, EventKind, Handler, SubscriptionToken};
pub use media::MediaPlayer;
pub use simulated::SimulatedPlayer;
