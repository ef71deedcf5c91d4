//! Turns continuous drag positions and touch swipes into discrete
//! navigation signals.
//!
//! ## Edge holding
//!
//! While an event is being dragged, feed every pointer sample to
//! [`EdgeNavigator::observe`] and call [`EdgeNavigator::poll`] once per frame.
//! Entering the strip near the left or right edge arms a hold deadline. If the
//! pointer is still in that strip when the deadline passes, one signal fires
//! and further signals follow at the repeat interval. Leaving the strip, or
//! [`EdgeNavigator::reset`], drops every pending deadline.
//!
//! ```
//! use std::time::Duration;
//! use week_board::board::gesture::{EdgeConfig, EdgeNavigator, NavSignal};
//!
//! let mut edge = EdgeNavigator::new(EdgeConfig::default());
//! let ms = Duration::from_millis;
//!
//! edge.observe(ms(0), 10.0, 1200.0);
//! assert!(edge.poll(ms(999)).is_empty());
//! assert_eq!(edge.poll(ms(1000)), vec![NavSignal::Retreat]);
//! ```
//!
//! ## Swipes
//!
//! [`SwipeDetector`] evaluates a single touch gesture once, at touch end.

use std::time::Duration;

use crate::models::settings::BoardSettings;

/// A discrete request to move the visible window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSignal {
    Advance,
    Retreat,
}

/// Where the pointer sits relative to the viewport's horizontal edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeZone {
    #[default]
    Neutral,
    Left,
    Right,
}

impl EdgeZone {
    pub fn classify(x: f32, viewport_width: f32, threshold: f32) -> Self {
        if !x.is_finite() {
            return EdgeZone::Neutral;
        }
        if x < threshold {
            EdgeZone::Left
        } else if x > viewport_width - threshold {
            EdgeZone::Right
        } else {
            EdgeZone::Neutral
        }
    }

    pub fn signal(self) -> Option<NavSignal> {
        match self {
            EdgeZone::Neutral => None,
            EdgeZone::Left => Some(NavSignal::Retreat),
            EdgeZone::Right => Some(NavSignal::Advance),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeConfig {
    pub threshold_px: f32,
    pub hold_delay: Duration,
    pub repeat_interval: Duration,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self::from(&BoardSettings::default())
    }
}

impl From<&BoardSettings> for EdgeConfig {
    fn from(settings: &BoardSettings) -> Self {
        Self {
            threshold_px: settings.edge_threshold_px,
            hold_delay: settings.hold_delay(),
            // A zero interval would fire forever in a single poll
            repeat_interval: settings.repeat_interval().max(Duration::from_millis(1)),
        }
    }
}

/// Debounced edge-hold navigation for one drag
#[derive(Debug, Clone)]
pub struct EdgeNavigator {
    config: EdgeConfig,
    zone: EdgeZone,
    next_fire: Option<Duration>,
}

impl EdgeNavigator {
    pub fn new(config: EdgeConfig) -> Self {
        Self {
            config,
            zone: EdgeZone::Neutral,
            next_fire: None,
        }
    }

    pub fn zone(&self) -> EdgeZone {
        self.zone
    }

    /// Whether a hold or repeat deadline is pending
    pub fn is_armed(&self) -> bool {
        self.next_fire.is_some()
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.next_fire
    }

    /// Record a pointer sample. Only zone transitions touch the deadlines.
    pub fn observe(&mut self, now: Duration, x: f32, viewport_width: f32) {
        let zone = EdgeZone::classify(x, viewport_width, self.config.threshold_px);
        if zone == self.zone {
            return;
        }

        log::trace!("Edge zone {:?} -> {:?} at {:?}", self.zone, zone, now);
        self.zone = zone;
        self.next_fire = match zone {
            EdgeZone::Neutral => None,
            EdgeZone::Left | EdgeZone::Right => Some(now + self.config.hold_delay),
        };
    }

    /// Signals whose deadlines have passed by `now`, oldest first.
    pub fn poll(&mut self, now: Duration) -> Vec<NavSignal> {
        let mut fired = Vec::new();
        let Some(signal) = self.zone.signal() else {
            return fired;
        };

        while let Some(deadline) = self.next_fire {
            if now < deadline {
                break;
            }
            fired.push(signal);
            self.next_fire = Some(deadline + self.config.repeat_interval);
        }
        fired
    }

    /// Drop all pending deadlines and forget the current zone.
    pub fn reset(&mut self) {
        self.zone = EdgeZone::Neutral;
        self.next_fire = None;
    }
}

/// One-shot horizontal swipe recognizer for touch input on the board surface
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    threshold_px: f32,
    start_x: Option<f32>,
}

impl SwipeDetector {
    pub fn new(threshold_px: f32) -> Self {
        Self {
            threshold_px,
            start_x: None,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Finish the gesture. A finger moving right reveals earlier dates.
    pub fn touch_end(&mut self, x: f32) -> Option<NavSignal> {
        let start = self.start_x.take()?;
        let delta = x - start;
        if !delta.is_finite() || delta.abs() <= self.threshold_px {
            return None;
        }
        if delta > 0.0 {
            Some(NavSignal::Retreat)
        } else {
            Some(NavSignal::Advance)
        }
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const WIDTH: f32 = 1200.0;

    fn ms(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    fn navigator() -> EdgeNavigator {
        EdgeNavigator::new(EdgeConfig {
            threshold_px: 50.0,
            hold_delay: ms(1000),
            repeat_interval: ms(1000),
        })
    }

    #[test_case(10.0, EdgeZone::Left ; "left strip")]
    #[test_case(49.9, EdgeZone::Left ; "just inside left")]
    #[test_case(50.0, EdgeZone::Neutral ; "left boundary")]
    #[test_case(600.0, EdgeZone::Neutral ; "middle")]
    #[test_case(1150.0, EdgeZone::Neutral ; "right boundary")]
    #[test_case(1190.0, EdgeZone::Right ; "right strip")]
    #[test_case(f32::NAN, EdgeZone::Neutral ; "nan")]
    fn test_classify(x: f32, expected: EdgeZone) {
        assert_eq!(EdgeZone::classify(x, WIDTH, 50.0), expected);
    }

    #[test]
    fn test_right_edge_advances() {
        let mut edge = navigator();
        edge.observe(ms(0), 1190.0, WIDTH);
        assert_eq!(edge.poll(ms(1000)), vec![NavSignal::Advance]);
    }

    #[test]
    fn test_stationary_samples_do_not_rearm() {
        let mut edge = navigator();
        edge.observe(ms(0), 10.0, WIDTH);
        for t in (16..1000).step_by(16) {
            edge.observe(ms(t), 10.0, WIDTH);
            assert!(edge.poll(ms(t)).is_empty());
        }
        edge.observe(ms(1000), 12.0, WIDTH);
        assert_eq!(edge.poll(ms(1000)), vec![NavSignal::Retreat]);
    }

    #[test]
    fn test_repeat_interval_after_first_signal() {
        let mut edge = navigator();
        edge.observe(ms(0), 10.0, WIDTH);
        assert_eq!(edge.poll(ms(1000)).len(), 1);
        assert!(edge.poll(ms(1999)).is_empty());
        assert_eq!(edge.poll(ms(2000)).len(), 1);
        assert_eq!(edge.next_deadline(), Some(ms(3000)));
    }

    #[test]
    fn test_late_poll_catches_up_in_order() {
        let mut edge = navigator();
        edge.observe(ms(0), 10.0, WIDTH);
        assert_eq!(edge.poll(ms(3500)), vec![NavSignal::Retreat; 3]);
    }

    #[test]
    fn test_leaving_zone_cancels() {
        let mut edge = navigator();
        edge.observe(ms(0), 10.0, WIDTH);
        edge.observe(ms(600), 400.0, WIDTH);
        assert!(!edge.is_armed());
        assert!(edge.poll(ms(5000)).is_empty());
    }

    #[test]
    fn test_reentry_rearms_from_zero() {
        let mut edge = navigator();
        edge.observe(ms(0), 10.0, WIDTH);
        edge.observe(ms(800), 400.0, WIDTH);
        edge.observe(ms(900), 10.0, WIDTH);
        assert!(edge.poll(ms(1000)).is_empty());
        assert!(edge.poll(ms(1899)).is_empty());
        assert_eq!(edge.poll(ms(1900)), vec![NavSignal::Retreat]);
    }

    #[test]
    fn test_jump_to_opposite_edge_rearms() {
        let mut edge = navigator();
        edge.observe(ms(0), 10.0, WIDTH);
        edge.observe(ms(700), 1190.0, WIDTH);
        assert!(edge.poll(ms(1000)).is_empty());
        assert_eq!(edge.poll(ms(1700)), vec![NavSignal::Advance]);
    }

    #[test]
    fn test_reset_drops_deadlines() {
        let mut edge = navigator();
        edge.observe(ms(0), 10.0, WIDTH);
        edge.reset();
        assert_eq!(edge.zone(), EdgeZone::Neutral);
        assert!(edge.poll(ms(10_000)).is_empty());
    }

    #[test_case(49.0, None ; "below threshold")]
    #[test_case(50.0, None ; "at threshold")]
    #[test_case(51.0, Some(NavSignal::Retreat) ; "finger right")]
    #[test_case(-51.0, Some(NavSignal::Advance) ; "finger left")]
    #[test_case(f32::NAN, None ; "nan end")]
    #[test_case(f32::INFINITY, None ; "infinite end")]
    fn test_swipe(delta: f32, expected: Option<NavSignal>) {
        let mut swipe = SwipeDetector::new(50.0);
        swipe.touch_start(200.0);
        assert_eq!(swipe.touch_end(200.0 + delta), expected);
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn test_swipe_end_without_start_is_ignored() {
        let mut swipe = SwipeDetector::new(50.0);
        assert_eq!(swipe.touch_end(500.0), None);
        swipe.touch_start(0.0);
        swipe.cancel();
        assert_eq!(swipe.touch_end(500.0), None);
    }
}
