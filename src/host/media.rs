//! The host player contract.

/// Playback state and primitives the seek bar needs from its host player.
///
/// All times are in seconds. Requests are assumed to always succeed;
/// range checking of seek targets is the player's job.
pub trait MediaPlayer {
    /// Live playback position of the media element.
    fn current_time(&self) -> f64;

    /// Request a seek.
    fn set_current_time(&mut self, seconds: f64);

    /// Total media duration. May be 0 or NaN while unknown.
    fn duration(&self) -> f64;

    fn paused(&self) -> bool;

    fn pause(&mut self);

    fn play(&mut self);

    /// Shared "user is scrubbing" flag, readable by other controls.
    fn scrubbing(&self) -> bool;

    fn set_scrubbing(&mut self, scrubbing: bool);

    /// Last position requested through the player, ahead of the media
    /// element while it is still seeking.
    fn cached_scrub_time(&self) -> f64;

    /// Rendered width of the player container.
    fn width(&self) -> f64;
}
