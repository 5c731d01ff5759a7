//! Percent mapping and accessible values

use super::helpers::{at, seek_bar, RecordingPlayer};
use seekbar::control::Element;
use seekbar::{format_time, TimeFormatter};

#[test]
fn percent_is_time_over_duration() {
    let bar = seek_bar(false);
    for (current, expected) in [(0.0, 0.0), (25.0, 0.25), (50.0, 0.5), (100.0, 1.0)] {
        let player = RecordingPlayer::new(current, 100.0);
        assert_eq!(bar.get_percent(&player), expected);
    }
}

#[test]
fn percent_caps_at_one() {
    let bar = seek_bar(false);
    let player = RecordingPlayer::new(100.000001, 100.0);
    assert_eq!(bar.get_percent(&player), 1.0);
    let player = RecordingPlayer::new(250.0, 100.0);
    assert_eq!(bar.get_percent(&player), 1.0);
}

#[test]
fn aria_values_example() {
    let mut bar = seek_bar(false);
    let player = RecordingPlayer::new(25.0, 100.0);

    bar.update_progress(&player);

    assert_eq!(bar.element().attribute("aria-valuenow"), Some("25.00"));
    assert_eq!(bar.element().attribute("aria-valuetext"), Some("0:25"));
}

#[test]
fn aria_valuenow_has_two_decimals() {
    let mut bar = seek_bar(false);
    let player = RecordingPlayer::new(1.0, 3.0);

    bar.update_progress(&player);

    assert_eq!(bar.element().attribute("aria-valuenow"), Some("33.33"));
}

#[test]
fn aria_valuetext_uses_formatter_with_duration_guide() {
    let mut bar = seek_bar(false);
    let player = RecordingPlayer::new(65.0, 4000.0);

    bar.update_progress(&player);

    let expected = format_time(65.0, 4000.0);
    assert_eq!(expected, "0:01:05");
    assert_eq!(bar.element().attribute("aria-valuetext"), Some(expected.as_str()));
}

#[test]
fn scrubbing_shows_cached_time() {
    let bar = seek_bar(false);
    let mut player = RecordingPlayer::new(10.0, 100.0);
    player.scrubbing = true;
    player.scrub_time = 42.0;

    let mut el = Element::new("div");
    bar.update_aria_attributes(&mut el, &player);

    // Value text follows the pointer; the value itself follows the media
    assert_eq!(el.attribute("aria-valuetext"), Some("0:42"));
    assert_eq!(el.attribute("aria-valuenow"), Some("10.00"));
}

#[test]
fn live_time_when_not_scrubbing() {
    let bar = seek_bar(false);
    let mut player = RecordingPlayer::new(10.0, 100.0);
    player.scrub_time = 42.0;

    let mut el = Element::new("div");
    bar.update_aria_attributes(&mut el, &player);

    assert_eq!(el.attribute("aria-valuetext"), Some("0:10"));
}

#[test]
fn text_tracks_pointer_during_drag() {
    let mut bar = seek_bar(false);
    let mut player = RecordingPlayer::new(0.0, 100.0);

    bar.handle_pointer_down(&at(30.0), &mut player);
    bar.handle_pointer_move(&at(75.0), &mut player);
    bar.update_progress(&player);

    assert_eq!(bar.element().attribute("aria-valuetext"), Some("1:15"));
}

#[test]
fn custom_formatter_is_used() {
    struct Seconds;
    impl TimeFormatter for Seconds {
        fn format(&self, seconds: f64, guide: f64) -> String {
            format!("{} of {} seconds", seconds, guide)
        }
    }

    let mut bar = seekbar::SeekBar::new(
        &seekbar::Config::default(),
        &seekbar::ComponentRegistry::with_defaults(),
        seekbar::HorizontalRange::new(0.0, 100.0),
        Seconds,
    )
    .unwrap();
    let player = RecordingPlayer::new(25.0, 100.0);
    bar.update_progress(&player);

    assert_eq!(
        bar.element().attribute("aria-valuetext"),
        Some("25 of 100 seconds")
    );
}

#[test]
fn zero_duration_propagates_nan() {
    let mut bar = seek_bar(false);
    let player = RecordingPlayer::new(0.0, 0.0);

    bar.update_progress(&player);

    assert!(bar.get_percent(&player).is_nan());
    assert_eq!(bar.element().attribute("aria-valuenow"), Some("NaN"));
}

#[test]
fn zero_duration_with_progress_reads_full() {
    let bar = seek_bar(false);
    let player = RecordingPlayer::new(5.0, 0.0);
    assert_eq!(bar.get_percent(&player), 1.0);
}
