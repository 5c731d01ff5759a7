//! Event subscriptions and child components

use super::helpers::{seek_bar, RecordingPlayer};
use seekbar::control::{Component, ProgressFill, TooltipBar};
use seekbar::{ComponentRegistry, Config, EventHub, EventKind, GuidedTimeFormatter};
use seekbar::{HorizontalRange, MediaPlayer, SeekBar, SeekBarError, SimulatedPlayer};

#[test]
fn attach_subscribes_time_end_and_ready() {
    let mut bar = seek_bar(false);
    let mut hub: EventHub<SeekBar, RecordingPlayer> = EventHub::new();
    let player = RecordingPlayer::new(25.0, 100.0);

    bar.attach(&mut hub, &player);
    assert_eq!(hub.len(), 3);
    // Nothing is written until the player reports ready
    assert_eq!(bar.element().attribute("aria-valuenow"), None);

    // Attaching again does not double up
    bar.attach(&mut hub, &player);
    assert_eq!(hub.len(), 3);
}

#[test]
fn time_update_refreshes_values() {
    let mut bar = seek_bar(false);
    let mut hub: EventHub<SeekBar, RecordingPlayer> = EventHub::new();
    let mut player = RecordingPlayer::new(25.0, 100.0);
    bar.attach(&mut hub, &player);

    assert_eq!(hub.dispatch(EventKind::TimeUpdate, &mut bar, &mut player), 1);
    assert_eq!(bar.element().attribute("aria-valuenow"), Some("25.00"));

    player.current_time = 100.0;
    hub.dispatch(EventKind::Ended, &mut bar, &mut player);
    assert_eq!(bar.element().attribute("aria-valuenow"), Some("100.00"));
}

#[test]
fn ready_refreshes_once() {
    let mut bar = seek_bar(false);
    let mut hub: EventHub<SeekBar, RecordingPlayer> = EventHub::new();
    let mut player = RecordingPlayer::new(50.0, 100.0);
    bar.attach(&mut hub, &player);

    assert_eq!(hub.dispatch(EventKind::Ready, &mut bar, &mut player), 1);
    assert_eq!(bar.element().attribute("aria-valuenow"), Some("50.00"));
    assert_eq!(hub.dispatch(EventKind::Ready, &mut bar, &mut player), 0);
    assert_eq!(hub.len(), 2);
}

#[test]
fn attach_after_ready_refreshes_immediately() {
    let mut hub: EventHub<SeekBar, RecordingPlayer> = EventHub::new();
    let mut player = RecordingPlayer::new(50.0, 100.0);

    // The player became ready before this seek bar existed
    let mut early = seek_bar(false);
    hub.dispatch(EventKind::Ready, &mut early, &mut player);
    assert!(hub.is_ready());

    let mut late = seek_bar(true);
    late.attach(&mut hub, &player);
    assert_eq!(late.element().attribute("aria-valuenow"), Some("50.00"));
    assert_eq!(late.element().attribute("aria-valuetext"), Some("0:50"));
    assert_eq!(late.tooltip().unwrap().label().text(), "0:50");

    // Only time update and end of media; no ready handler left dangling
    assert_eq!(hub.len(), 2);

    player.current_time = 75.0;
    hub.dispatch(EventKind::TimeUpdate, &mut late, &mut player);
    assert_eq!(late.element().attribute("aria-valuenow"), Some("75.00"));
}

#[test]
fn detach_releases_everything() {
    let mut bar = seek_bar(false);
    let mut hub: EventHub<SeekBar, RecordingPlayer> = EventHub::new();
    let mut player = RecordingPlayer::new(25.0, 100.0);
    bar.attach(&mut hub, &player);

    bar.detach(&mut hub);
    assert!(hub.is_empty());

    assert_eq!(hub.dispatch(EventKind::TimeUpdate, &mut bar, &mut player), 0);
    assert_eq!(bar.element().attribute("aria-valuenow"), None);

    // Can attach again after teardown
    bar.attach(&mut hub, &player);
    assert_eq!(hub.len(), 3);
}

#[test]
fn simulated_playback_drives_progress() {
    let mut bar = seek_bar(false);
    let mut hub: EventHub<SeekBar, SimulatedPlayer> = EventHub::new();
    let mut player = SimulatedPlayer::new(10.0, 800.0);
    bar.attach(&mut hub, &player);

    hub.dispatch(EventKind::Ready, &mut bar, &mut player);
    player.play();

    for _ in 0..4 {
        for kind in player.tick(0.5) {
            hub.dispatch(kind, &mut bar, &mut player);
        }
    }
    assert_eq!(bar.element().attribute("aria-valuenow"), Some("20.00"));
    assert_eq!(bar.element().attribute("aria-valuetext"), Some("0:02"));
}

#[test]
fn children_come_from_registry() {
    let mut registry = ComponentRegistry::new();
    registry
        .register(ProgressFill::LOAD, |_| -> Box<dyn Component> {
            Box::new(ProgressFill::new(ProgressFill::LOAD))
        })
        .unwrap();

    let missing = SeekBar::new(
        &Config::default(),
        &registry,
        HorizontalRange::new(0.0, 100.0),
        GuidedTimeFormatter,
    );
    assert!(matches!(
        missing.err(),
        Some(SeekBarError::UnknownComponent { ref name }) if name == "PlayProgressBar"
    ));

    registry
        .register(ProgressFill::PLAY, |_| -> Box<dyn Component> {
            Box::new(ProgressFill::new(ProgressFill::PLAY))
        })
        .unwrap();
    let bar = SeekBar::new(
        &Config::default(),
        &registry,
        HorizontalRange::new(0.0, 100.0),
        GuidedTimeFormatter,
    )
    .unwrap();
    assert_eq!(bar.children().len(), 2);

    // The tooltip is a registered child too
    let inside = Config::default().with_keep_tooltips_inside(true);
    let no_tooltip = SeekBar::new(
        &inside,
        &registry,
        HorizontalRange::new(0.0, 100.0),
        GuidedTimeFormatter,
    );
    assert!(matches!(
        no_tooltip.err(),
        Some(SeekBarError::UnknownComponent { ref name }) if name == TooltipBar::NAME
    ));

    registry
        .register(TooltipBar::NAME, |_| -> Box<dyn Component> { Box::new(TooltipBar::new()) })
        .unwrap();
    let bar = SeekBar::new(
        &inside,
        &registry,
        HorizontalRange::new(0.0, 100.0),
        GuidedTimeFormatter,
    )
    .unwrap();
    assert!(bar.tooltip().is_some());
}
