//! Tick-driven entrance animation for the site view.
//!
//! The browser original staggered cards in with a scroll-linked timeline.
//! Here a [`Reveal`] advances on every event-loop tick and hands each item a
//! progress value in [0, 1]; the view decides what a given progress looks
//! like (hidden, indented, fully shown). Pure math, no dependency from the
//! form/catalog core in either direction.

use std::time::{Duration, Instant};

/// Easing curves used by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Fast start, gentle settle. The terminal cousin of `power3.out`.
    CubicOut,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] to eased progress in [0, 1].
    /// Inputs outside the range are clamped.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Staggered reveal of `items` elements over a fixed duration.
#[derive(Debug, Clone)]
pub struct Reveal {
    started: Instant,
    item_duration: Duration,
    stagger: Duration,
    easing: Easing,
    items: usize,
}

impl Reveal {
    #[must_use]
    pub fn new(items: usize, item_duration: Duration, stagger: Duration, easing: Easing) -> Self {
        Self {
            started: Instant::now(),
            item_duration,
            stagger,
            easing,
            items,
        }
    }

    /// Default entrance used when a section comes on screen.
    #[must_use]
    pub fn section(items: usize) -> Self {
        Self::new(
            items,
            Duration::from_millis(350),
            Duration::from_millis(80),
            Easing::CubicOut,
        )
    }

    /// Eased progress of item `index` at time `now`, 0.0 before its slot
    /// starts and 1.0 once it has fully settled.
    #[must_use]
    pub fn progress_at(&self, index: usize, now: Instant) -> f64 {
        let delay = self.stagger * u32::try_from(index).unwrap_or(u32::MAX);
        let start = self.started + delay;
        if now < start {
            return 0.0;
        }
        let elapsed = now - start;
        if elapsed >= self.item_duration {
            return 1.0;
        }
        let t = elapsed.as_secs_f64() / self.item_duration.as_secs_f64();
        self.easing.apply(t)
    }

    /// Eased progress of item `index` right now.
    #[must_use]
    pub fn progress(&self, index: usize) -> f64 {
        self.progress_at(index, Instant::now())
    }

    /// Whether every item has settled; once true the view can stop asking.
    #[must_use]
    pub fn finished_at(&self, now: Instant) -> bool {
        self.items == 0 || self.progress_at(self.items - 1, now) >= 1.0
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints() {
        for easing in [Easing::Linear, Easing::CubicOut] {
            assert!((easing.apply(0.0) - 0.0).abs() < f64::EPSILON);
            assert!((easing.apply(1.0) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn easing_is_monotone_and_clamped() {
        for easing in [Easing::Linear, Easing::CubicOut] {
            let mut prev = 0.0;
            for step in 0..=20 {
                let t = f64::from(step) / 20.0;
                let eased = easing.apply(t);
                assert!(eased >= prev, "{easing:?} not monotone at t={t}");
                prev = eased;
            }
            assert!((easing.apply(-1.0)).abs() < f64::EPSILON);
            assert!((easing.apply(2.0) - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn stagger_delays_later_items() {
        let reveal = Reveal::new(
            3,
            Duration::from_millis(100),
            Duration::from_millis(50),
            Easing::Linear,
        );
        let now = reveal.started + Duration::from_millis(60);
        // Item 0 is past halfway, item 1 just started, item 2 not yet.
        assert!(reveal.progress_at(0, now) > 0.5);
        assert!(reveal.progress_at(1, now) > 0.0);
        assert!(reveal.progress_at(2, now) < f64::EPSILON);
    }

    #[test]
    fn reveal_finishes() {
        let reveal = Reveal::new(
            2,
            Duration::from_millis(100),
            Duration::from_millis(50),
            Easing::CubicOut,
        );
        let now = reveal.started + Duration::from_millis(500);
        assert!(reveal.finished_at(now));
        assert!((reveal.progress_at(1, now) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_reveal_is_immediately_finished() {
        let reveal = Reveal::section(0);
        assert!(reveal.finished());
    }
}
