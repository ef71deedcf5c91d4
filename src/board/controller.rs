//! Top-level board state: which dates are visible, where every event lives,
//! and the drag currently in flight.
//!
//! The controller is driven by the UI once per frame:
//!
//! 1. [`BoardController::mount`] once at startup, then [`BoardController::tick`]
//!    every frame. The first tick completes priming and makes the board visible.
//! 2. Input callbacks: `begin_drag`, `drag_to`, `hover`, `drop_on`,
//!    `cancel_drag`, `swipe_start`, `swipe_end`.
//! 3. Rendering reads `drop_targets` and `events_for`.
//!
//! Edge-hold signals are produced by the session's navigator and applied here
//! to the window the controller owns, so a repeat always moves from the anchor
//! as it is at that moment.

use std::time::Duration;

use chrono::NaiveDate;

use super::clock::{Clock, MonotonicClock};
use super::drag::{select_transport, DragPayload, DragPoint, DragSession, InputCapabilities};
use super::drop_target::{DropOutcome, DropTarget};
use super::gesture::{EdgeConfig, NavSignal, SwipeDetector};
use super::view_window::{Density, ViewWindow};
use crate::models::date_key::DateKey;
use crate::models::event::{Event, EventId};
use crate::models::settings::BoardSettings;
use crate::services::event_store::EventStore;

/// Startup progression of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, nothing rendered yet
    Unmounted,
    /// Advanced once to warm the neighbouring dates; still hidden
    Priming,
    Ready,
}

pub struct BoardController<C: Clock = MonotonicClock> {
    clock: C,
    store: EventStore,
    window: ViewWindow,
    edge_config: EdgeConfig,
    swipe: SwipeDetector,
    session: Option<DragSession>,
    hovered: Option<DateKey>,
    selected: Option<EventId>,
    phase: Phase,
}

impl<C: Clock> BoardController<C> {
    pub fn new(clock: C, store: EventStore, settings: &BoardSettings, is_narrow: bool) -> Self {
        Self {
            clock,
            store,
            window: ViewWindow::new(settings.initial_date, Density::from_narrow(is_narrow)),
            edge_config: EdgeConfig::from(settings),
            swipe: SwipeDetector::new(settings.swipe_threshold_px),
            session: None,
            hovered: None,
            selected: None,
            phase: Phase::Unmounted,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// First half of priming: step forward once while hidden.
    pub fn mount(&mut self) {
        if self.phase != Phase::Unmounted {
            return;
        }
        self.window.advance();
        self.phase = Phase::Priming;
        log::debug!("Priming board from {}", self.window.anchor());
    }

    /// Per-frame update. Finishes priming and applies due edge signals.
    pub fn tick(&mut self) -> Vec<NavSignal> {
        if self.phase == Phase::Priming {
            self.window.retreat();
            self.phase = Phase::Ready;
            log::info!("Board ready at {}", self.window.anchor());
        }

        let now = self.clock.now();
        let signals = match self.session.as_mut() {
            Some(session) => session.edge_mut().poll(now),
            None => Vec::new(),
        };
        for signal in &signals {
            log::debug!("Edge hold fired {:?}", signal);
            self.apply(*signal);
        }
        signals
    }

    pub fn apply(&mut self, signal: NavSignal) {
        match signal {
            NavSignal::Advance => self.window.advance(),
            NavSignal::Retreat => self.window.retreat(),
        }
    }

    pub fn advance(&mut self) {
        self.apply(NavSignal::Advance);
    }

    pub fn retreat(&mut self) {
        self.apply(NavSignal::Retreat);
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.window.jump_to(date);
    }

    pub fn set_narrow(&mut self, is_narrow: bool) {
        self.window.set_density(Density::from_narrow(is_narrow));
    }

    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        self.window.visible_dates()
    }

    pub fn events_for(&self, key: DateKey) -> &[Event] {
        self.store.events_for(key)
    }

    /// One target per visible date; empty until priming completes.
    pub fn drop_targets(&self) -> Vec<DropTarget> {
        if !self.is_visible() {
            return Vec::new();
        }
        self.window
            .visible_dates()
            .into_iter()
            .map(|date| {
                let mut target = DropTarget::new(DateKey::from(date));
                target.on_hover_change(self.session.is_some() && self.hovered == Some(target.date_key()));
                target
            })
            .collect()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn dragged_event_id(&self) -> Option<EventId> {
        self.session.as_ref().and_then(DragSession::event_id)
    }

    /// Start carrying `payload`, normally the one handed out by
    /// [`DragSource::begin`](super::DragSource::begin).
    pub fn begin_drag(&mut self, payload: DragPayload, at: DragPoint, capabilities: InputCapabilities) {
        if !self.is_visible() {
            log::debug!("Ignoring {} drag before the board is shown", payload.kind());
            return;
        }
        if let Some(previous) = self.session.take() {
            log::warn!("Drag started while another was active; cancelling the old one");
            previous.cancel();
        }
        // A finger that picked up a card is no longer swiping
        self.swipe.cancel();

        match payload.as_event() {
            Some(event) => log::debug!("Drag start {} '{}'", event.id, event.title),
            None => log::debug!("Drag start with {} payload", payload.kind()),
        }
        let transport = select_transport(capabilities);
        self.session = Some(DragSession::begin(
            transport,
            payload,
            at,
            self.edge_config,
            self.clock.now(),
        ));
    }

    pub fn drag_to(&mut self, at: DragPoint, viewport_width: f32) {
        let now = self.clock.now();
        if let Some(session) = self.session.as_mut() {
            session.update(now, at, viewport_width);
        }
    }

    /// Which date column is under the drag, for highlighting only.
    pub fn hover(&mut self, key: Option<DateKey>) {
        self.hovered = key;
    }

    pub fn hovered(&self) -> Option<DateKey> {
        self.hovered
    }

    /// Release over the column for `key`. Ends the session whatever the outcome.
    ///
    /// In single-date mode the only column is the anchor, so the live anchor
    /// is used rather than whatever key the caller captured earlier.
    pub fn drop_on(&mut self, key: DateKey) -> Option<DropOutcome> {
        let session = self.session.take()?;
        self.hovered = None;
        let payload = session.finish()?;

        let key = match self.window.density() {
            Density::Single => DateKey::from(self.window.anchor()),
            Density::Week => key,
        };
        let outcome = DropTarget::new(key).on_drop(&mut self.store, payload);
        log::debug!("Drop on {}: {:?}", key, outcome);
        Some(outcome)
    }

    /// Release outside any column, or an aborted drag.
    pub fn cancel_drag(&mut self) {
        self.hovered = None;
        if let Some(session) = self.session.take() {
            log::debug!("Drag cancelled for {:?}", session.event_id());
            session.cancel();
        }
    }

    pub fn swipe_start(&mut self, x: f32) {
        if self.session.is_none() {
            self.swipe.touch_start(x);
        }
    }

    /// Evaluate a finished touch gesture. Swipes never navigate during a drag.
    pub fn swipe_end(&mut self, x: f32) -> Option<NavSignal> {
        if self.session.is_some() {
            self.swipe.cancel();
            return None;
        }
        let signal = self.swipe.touch_end(x)?;
        log::debug!("Swipe {:?}", signal);
        self.apply(signal);
        Some(signal)
    }

    /// How long until the next edge signal is due, for repaint scheduling.
    pub fn next_deadline_in(&self) -> Option<Duration> {
        let deadline = self.session.as_ref()?.edge().next_deadline()?;
        Some(deadline.saturating_sub(self.clock.now()))
    }

    pub fn select(&mut self, id: EventId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The event the detail viewer should show, if it still exists.
    pub fn selected(&self) -> Option<&Event> {
        let id = self.selected?;
        self.store.find(id).map(|(_, event)| event)
    }
}
