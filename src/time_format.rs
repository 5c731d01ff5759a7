//! Time display formatting.
//!
//! Turns a position in seconds into the human-readable text used for the
//! accessible value and the tooltip label.

/// Formats a time in seconds for display.
///
/// `guide` is the duration the time belongs to; it decides which units
/// are shown so that every time on one bar has the same shape.
pub trait TimeFormatter {
    fn format(&self, seconds: f64, guide: f64) -> String;
}

/// Default formatter backed by [`format_time`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GuidedTimeFormatter;

impl TimeFormatter for GuidedTimeFormatter {
    fn format(&self, seconds: f64, guide: f64) -> String {
        format_time(seconds, guide)
    }
}

/// Format seconds as `H:MM:SS`, `MM:SS` or `M:SS`.
///
/// Hours appear when either the time or the guide reaches an hour. Minutes
/// are zero-padded when hours are shown or the guide is ten minutes or
/// longer. Negative times read as zero; a non-finite time prints each unit
/// as `-`.
pub fn format_time(seconds: f64, guide: f64) -> String {
    let seconds = if seconds < 0.0 { 0.0 } else { seconds };

    let guide_minutes = if guide.is_finite() {
        ((guide / 60.0) % 60.0).floor() as u64
    } else {
        0
    };
    let guide_hours = if guide.is_finite() {
        (guide / 3600.0).floor() as u64
    } else {
        0
    };

    if !seconds.is_finite() {
        let hours = if guide_hours > 0 { "-:" } else { "" };
        return format!("{}-:-", hours);
    }

    let secs = (seconds % 60.0).floor() as u64;
    let mins = ((seconds / 60.0) % 60.0).floor() as u64;
    let hours = (seconds / 3600.0).floor() as u64;

    let show_hours = hours > 0 || guide_hours > 0;
    let hours_part = if show_hours {
        format!("{}:", hours)
    } else {
        String::new()
    };
    let mins_part = if show_hours || guide_minutes >= 10 {
        format!("{:02}", mins)
    } else {
        mins.to_string()
    };

    format!("{}{}:{:02}", hours_part, mins_part, secs)
}
