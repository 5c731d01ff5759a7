//! The seek bar control.
//!
//! Maps media time onto a draggable bar, runs the scrub state machine for
//! pointer drags, steps on keyboard input and keeps the accessible value
//! (and optional tooltip) in sync with the player.

use tracing::{debug, trace};

use super::element::Element;
use super::registry::{Component, ComponentRegistry, ProgressFill};
use super::slider::{DraggableRange, HorizontalRange, PointerEvent, SliderKey};
use super::tooltip::{compute_bounds, TooltipBar};
use crate::config::Config;
use crate::error::Result;
use crate::host::{EventHub, EventKind, MediaPlayer, SubscriptionToken};
use crate::time_format::{GuidedTimeFormatter, TimeFormatter};

/// Seconds moved by one keyboard step.
pub const STEP_SECONDS: f64 = 5.0;

/// Pulled off a seek that lands exactly on the duration, so dragging to
/// the end does not end playback mid-scrub.
pub const END_EPSILON: f64 = 0.1;

/// Accessible name of the root element.
pub const ARIA_LABEL: &str = "progress bar";

/// Children built through the registry for every seek bar.
const CHILDREN: [&str; 2] = [ProgressFill::LOAD, ProgressFill::PLAY];

/// Scrub state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubState {
    #[default]
    Idle,
    /// Pointer is down on the bar.
    Scrubbing {
        /// Media was playing when the scrub began
        was_playing: bool,
    },
}

/// Seek/progress control for one player.
pub struct SeekBar<R = HorizontalRange, F = GuidedTimeFormatter> {
    element: Element,
    range: R,
    formatter: F,
    state: ScrubState,
    children: Vec<Box<dyn Component>>,
    tooltip: Option<TooltipBar>,
    subscriptions: Vec<SubscriptionToken>,
}

impl<R: DraggableRange, F: TimeFormatter> SeekBar<R, F> {
    /// Build the control and its children.
    ///
    /// The tooltip child exists iff `keepTooltipsInside` is set.
    pub fn new(
        config: &Config,
        registry: &ComponentRegistry,
        range: R,
        formatter: F,
    ) -> Result<Self> {
        let mut element = Element::new("div");
        element.set_attribute("role", "slider");
        element.set_attribute("aria-label", ARIA_LABEL);
        element.set_attribute("aria-valuemin", "0");
        element.set_attribute("aria-valuemax", "100");
        element.set_attribute("tabindex", "0");

        let children = CHILDREN
            .iter()
            .map(|name| registry.create(name, config))
            .collect::<Result<Vec<_>>>()?;

        let tooltip = if config.keep_tooltips_inside() {
            Some(registry.create_tooltip(config)?)
        } else {
            None
        };

        Ok(Self {
            element,
            range,
            formatter,
            state: ScrubState::Idle,
            children,
            tooltip,
            subscriptions: Vec::new(),
        })
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn range(&self) -> &R {
        &self.range
    }

    pub fn range_mut(&mut self) -> &mut R {
        &mut self.range
    }

    pub fn children(&self) -> &[Box<dyn Component>] {
        &self.children
    }

    pub fn tooltip(&self) -> Option<&TooltipBar> {
        self.tooltip.as_ref()
    }

    pub fn tooltip_mut(&mut self) -> Option<&mut TooltipBar> {
        self.tooltip.as_mut()
    }

    pub fn state(&self) -> ScrubState {
        self.state
    }

    pub fn is_scrubbing(&self) -> bool {
        matches!(self.state, ScrubState::Scrubbing { .. })
    }

    // === Scrubbing ===

    /// Begin a scrub: seek to the pointer, pause, and flag the player.
    ///
    /// A second pointer-down during a scrub is ignored.
    pub fn handle_pointer_down<P: MediaPlayer + ?Sized>(
        &mut self,
        event: &PointerEvent,
        player: &mut P,
    ) {
        if self.is_scrubbing() {
            return;
        }

        self.range.on_drag_start(event);
        self.seek_to_pointer(event, player);

        player.set_scrubbing(true);
        let was_playing = !player.paused();
        self.state = ScrubState::Scrubbing { was_playing };
        player.pause();

        debug!(was_playing, time = player.current_time(), "scrub started");
    }

    /// Seek to the pointer while scrubbing. Ignored when idle.
    pub fn handle_pointer_move<P: MediaPlayer + ?Sized>(
        &mut self,
        event: &PointerEvent,
        player: &mut P,
    ) {
        if self.is_scrubbing() {
            self.seek_to_pointer(event, player);
        }
    }

    /// End the scrub and resume playback if it was playing before.
    pub fn handle_pointer_up<P: MediaPlayer + ?Sized>(
        &mut self,
        event: &PointerEvent,
        player: &mut P,
    ) {
        let ScrubState::Scrubbing { was_playing } = self.state else {
            return;
        };

        self.range.on_drag_end(event);
        player.set_scrubbing(false);
        self.state = ScrubState::Idle;
        if was_playing {
            player.play();
        }

        debug!(was_playing, "scrub ended");
    }

    fn seek_to_pointer<P: MediaPlayer + ?Sized>(&self, event: &PointerEvent, player: &mut P) {
        let duration = player.duration();
        let mut new_time = self.range.distance(event) * duration;
        if new_time == duration {
            new_time -= END_EPSILON;
        }
        trace!(new_time, "scrub seek");
        player.set_current_time(new_time);
    }

    // === Mapping ===

    /// Played fraction, `current_time / duration`, capped at 1.
    ///
    /// `0 / 0` stays NaN.
    pub fn get_percent<P: MediaPlayer + ?Sized>(&self, player: &P) -> f64 {
        let percent = player.current_time() / player.duration();
        if percent >= 1.0 {
            1.0
        } else {
            percent
        }
    }

    // === Keyboard ===

    pub fn step_forward<P: MediaPlayer + ?Sized>(&mut self, player: &mut P) {
        let target = player.current_time() + STEP_SECONDS;
        player.set_current_time(target);
    }

    pub fn step_back<P: MediaPlayer + ?Sized>(&mut self, player: &mut P) {
        let target = player.current_time() - STEP_SECONDS;
        player.set_current_time(target);
    }

    /// Arrow keys: Right/Up step forward, Left/Down step back.
    pub fn handle_key<P: MediaPlayer + ?Sized>(&mut self, key: SliderKey, player: &mut P) {
        if key.is_forward() {
            self.step_forward(player);
        } else {
            self.step_back(player);
        }
    }

    // === Synchronization ===

    /// Refresh fill, accessible values and tooltip from the player.
    pub fn update_progress<P: MediaPlayer + ?Sized>(&mut self, player: &P) {
        let percent = self.get_percent(player);
        self.range.update_fill(percent);

        let (value_now, value_text) = self.aria_values(player);
        write_aria(&mut self.element, &value_now, &value_text);

        let fill = self.range.fill_width();
        if let Some(tooltip) = self.tooltip.as_mut() {
            write_aria(tooltip.element_mut(), &value_now, &value_text);
            tooltip.set_label(value_text);
            tooltip.track(fill);
            let bounds = compute_bounds(player.width(), tooltip.tooltip_width());
            tooltip.apply_bounds(&bounds);
        }
    }

    /// Write `aria-valuenow` and `aria-valuetext` onto `element`.
    pub fn update_aria_attributes<P: MediaPlayer + ?Sized>(
        &self,
        element: &mut Element,
        player: &P,
    ) {
        let (value_now, value_text) = self.aria_values(player);
        write_aria(element, &value_now, &value_text);
    }

    fn aria_values<P: MediaPlayer + ?Sized>(&self, player: &P) -> (String, String) {
        // While scrubbing the element may lag behind the pointer; show the
        // requested position instead.
        let time = if player.scrubbing() {
            player.cached_scrub_time()
        } else {
            player.current_time()
        };
        let value_now = format!("{:.2}", self.get_percent(player) * 100.0);
        let value_text = self.formatter.format(time, player.duration());
        (value_now, value_text)
    }

    // === Lifecycle ===

    /// Subscribe to player time updates, end of media and the ready signal.
    ///
    /// If the player is already ready the initial refresh runs right away
    /// instead of waiting for a `Ready` that will not come again.
    pub fn attach<P: MediaPlayer + ?Sized>(&mut self, hub: &mut EventHub<Self, P>, player: &P) {
        if !self.subscriptions.is_empty() {
            return;
        }
        for kind in [EventKind::TimeUpdate, EventKind::Ended] {
            let token = hub.subscribe(kind, Self::on_progress_event::<P>);
            self.subscriptions.push(token);
        }
        if hub.is_ready() {
            self.update_progress(player);
        } else {
            let token = hub.subscribe(EventKind::Ready, Self::on_progress_event::<P>);
            self.subscriptions.push(token);
        }
        debug!(
            count = self.subscriptions.len(),
            late = hub.is_ready(),
            "seek bar attached"
        );
    }

    /// Release every subscription made by [`attach`](Self::attach).
    pub fn detach<P: MediaPlayer + ?Sized>(&mut self, hub: &mut EventHub<Self, P>) {
        for token in self.subscriptions.drain(..) {
            hub.unsubscribe(token);
        }
        debug!("seek bar detached");
    }

    fn on_progress_event<P: MediaPlayer + ?Sized>(bar: &mut Self, player: &mut P) {
        bar.update_progress(player);
    }
}

fn write_aria(element: &mut Element, value_now: &str, value_text: &str) {
    element.set_attribute("aria-valuenow", value_now);
    element.set_attribute("aria-valuetext", value_text);
}
