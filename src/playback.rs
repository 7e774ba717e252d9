//! Pacing of the event stream for the animated renderer.

use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

use crate::events::MazeEvent;

/// Queue of received events released at the animation rate.
///
/// Generators run at full speed and never sleep. Events they produce pile up here and are handed
/// to the canvas one per frame delay when animating, or all at once otherwise.
#[derive(Debug)]
pub(crate) struct Playback {
    /// Events received but not yet drawn.
    pending: VecDeque<MazeEvent>,
    /// Whether events are released one at a time.
    animate: bool,
    /// Minimum time between two released events while animating.
    frame_delay: Duration,
    /// Time the last event was released.
    last_update_time: Instant,
}

impl Playback {
    /// Creates an empty playback queue.
    pub(crate) fn new(animate: bool, frame_delay: Duration) -> Self {
        Self {
            pending: VecDeque::new(),
            animate,
            frame_delay,
            last_update_time: Instant::now(),
        }
    }

    /// Queues events coming from the worker.
    pub(crate) fn extend<I: IntoIterator<Item = MazeEvent>>(&mut self, events: I) {
        self.pending.extend(events);
    }

    /// Drops every pending event.
    pub(crate) fn clear(&mut self) {
        self.pending.clear();
        self.last_update_time = Instant::now();
    }

    /// Number of events waiting to be drawn.
    pub(crate) fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Whether events are released one at a time.
    pub(crate) const fn animate(&self) -> bool {
        self.animate
    }

    /// Switches animation on or off; pending events are kept.
    pub(crate) fn set_animate(&mut self, animate: bool) {
        self.animate = animate;
    }

    /// Delay between two released events while animating.
    pub(crate) const fn frame_delay(&self) -> Duration {
        self.frame_delay
    }

    /// Events due at `now`.
    ///
    /// With animation off everything pending is due. With animation on at most one event is due,
    /// and only once a full frame delay has passed since the previous one.
    pub(crate) fn release(&mut self, now: Instant) -> Vec<MazeEvent> {
        if !self.animate {
            self.last_update_time = now;
            return self.pending.drain(..).collect();
        }

        if now.saturating_duration_since(self.last_update_time) < self.frame_delay {
            return Vec::new();
        }

        self.last_update_time = now;
        self.pending.pop_front().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::DEFAULT_FRAME_DELAY_MS, grid::Cell};

    fn visits(count: usize) -> Vec<MazeEvent> {
        (0..count)
            .map(|col| MazeEvent::CellVisited(Cell::new(0, col)))
            .collect()
    }

    #[test]
    fn test_animation_releases_one_event_per_delay() {
        let delay = Duration::from_millis(DEFAULT_FRAME_DELAY_MS);
        let mut playback = Playback::new(true, delay);
        let start = playback.last_update_time;
        playback.extend(visits(3));

        assert!(playback.release(start).is_empty());
        assert_eq!(playback.release(start + delay), visits(1));
        assert!(playback.release(start + delay + delay / 2).is_empty());
        assert_eq!(playback.release(start + delay * 2).len(), 1);
        assert_eq!(playback.pending(), 1);
    }

    #[test]
    fn test_without_animation_everything_is_due() {
        let mut playback = Playback::new(false, Duration::from_secs(60));
        let start = playback.last_update_time;
        playback.extend(visits(5));

        assert_eq!(playback.release(start), visits(5));
        assert_eq!(playback.pending(), 0);
        assert!(!playback.animate());
    }

    #[test]
    fn test_toggling_keeps_pending_events() {
        let mut playback = Playback::new(true, Duration::from_millis(10));
        let start = playback.last_update_time;
        playback.extend(visits(4));

        playback.set_animate(false);
        assert_eq!(playback.release(start).len(), 4);

        playback.extend(visits(2));
        playback.clear();
        assert_eq!(playback.pending(), 0);
        assert_eq!(playback.frame_delay(), Duration::from_millis(10));
    }
}
