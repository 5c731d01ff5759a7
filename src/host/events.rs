//! Player event subscriptions.
//!
//! Listeners subscribe a handler per event kind and get a token back;
//! releasing the token removes the handler. Handlers receive the listener
//! and the player by mutable reference at dispatch time, so nothing holds
//! a long-lived reference to either.

/// Events a player emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Playback position changed
    TimeUpdate,
    /// Playback reached the end of the media
    Ended,
    /// Player finished initialising. Delivered once; see [`EventHub::is_ready`]
    /// for listeners that arrive afterwards.
    Ready,
}

/// Handle returned by [`EventHub::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionToken {
    id: u64,
    kind: EventKind,
}

impl SubscriptionToken {
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

/// Event handler: called with the subscribed listener and the player.
pub type Handler<T, P> = fn(&mut T, &mut P);

struct Subscription<T, P: ?Sized> {
    token: SubscriptionToken,
    handler: Handler<T, P>,
}

/// Subscription table for one listener type `T` and player type `P`.
pub struct EventHub<T, P: ?Sized> {
    next_id: u64,
    ready: bool,
    subscriptions: Vec<Subscription<T, P>>,
}

impl<T, P: ?Sized> Default for EventHub<T, P> {
    fn default() -> Self {
        Self {
            next_id: 0,
            ready: false,
            subscriptions: Vec::new(),
        }
    }
}

impl<T, P: ?Sized> EventHub<T, P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `kind`.
    pub fn subscribe(&mut self, kind: EventKind, handler: Handler<T, P>) -> SubscriptionToken {
        let token = SubscriptionToken {
            id: self.next_id,
            kind,
        };
        self.next_id += 1;
        self.subscriptions.push(Subscription { token, handler });
        token
    }

    /// Release a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.token != token);
        self.subscriptions.len() != before
    }

    /// Deliver `kind` to every matching handler in subscription order.
    ///
    /// Returns the number of handlers called.
    pub fn dispatch(&mut self, kind: EventKind, target: &mut T, player: &mut P) -> usize {
        let handlers: Vec<Handler<T, P>> = self
            .subscriptions
            .iter()
            .filter(|s| s.token.kind == kind)
            .map(|s| s.handler)
            .collect();

        if kind == EventKind::Ready {
            self.ready = true;
            self.subscriptions.retain(|s| s.token.kind != EventKind::Ready);
        }

        for handler in &handlers {
            handler(target, player);
        }
        handlers.len()
    }

    /// Whether `Ready` has been dispatched.
    ///
    /// A `Ready` handler subscribed after this point is never called, so
    /// late listeners run their ready work directly instead.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }
}
