// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manual tick source and frame pump for tests and demos.
//!
//! Platform hosts drive [`ChangeTracker::flush`] from a display-link or
//! animation-frame callback; this crate provides the same glue with a tick
//! source that is advanced by hand. [`ManualTicks`] implements
//! [`TickSource`] and tracks its subscription state; [`pump_frame`] delivers
//! one tick, flushing the tracker only while subscribed — exactly the
//! contract a real host honors.
//!
//! [`ChangeTracker::flush`]: moraine_core::tracker::ChangeTracker::flush
//! [`TickSource`]: moraine_core::project::TickSource

#![no_std]

extern crate alloc;

use moraine_core::log::ChangeLog;
use moraine_core::project::{ItemStates, TickSource};
use moraine_core::tracker::ChangeTracker;

/// A [`TickSource`] advanced by hand.
///
/// Tracks whether the tracker is currently subscribed and counts delivered
/// and dropped ticks for assertions.
#[derive(Debug, Default)]
pub struct ManualTicks {
    subscribed: bool,
    delivered: u64,
    dropped: u64,
}

impl ManualTicks {
    /// Creates an unsubscribed tick source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a tracker is currently subscribed.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    /// Number of ticks that reached a subscribed tracker.
    #[must_use]
    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    /// Number of ticks emitted while no tracker was subscribed.
    #[must_use]
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl TickSource for ManualTicks {
    fn subscribe(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
    }
}

/// Delivers one frame tick.
///
/// While the tracker is subscribed this flushes `log` through `tracker` and
/// returns `true`; otherwise the tick is dropped, the log keeps
/// accumulating, and `false` is returned. A disabled tracker can still be
/// flushed directly, bypassing the tick source entirely.
pub fn pump_frame(
    ticks: &mut ManualTicks,
    tracker: &ChangeTracker,
    log: &mut ChangeLog,
    items: &impl ItemStates,
) -> bool {
    if ticks.subscribed {
        ticks.delivered += 1;
        tracker.flush(log, items);
        true
    } else {
        ticks.dropped += 1;
        false
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use moraine_core::flags::ChangeFlags;
    use moraine_core::item::ItemId;
    use moraine_core::kind::ChangeKind;
    use moraine_core::registry::{BatchListener, KindChanges};

    use super::*;

    struct AllTracked;

    impl ItemStates for AllTracked {
        fn is_guide(&self, _item: ItemId) -> bool {
            false
        }

        fn tracks_changes(&self, _item: ItemId) -> bool {
            true
        }
    }

    fn collecting(
        seen: &Rc<RefCell<Vec<Vec<ItemId>>>>,
    ) -> BatchListener {
        let seen = Rc::clone(seen);
        Rc::new(move |changes: &KindChanges| {
            seen.borrow_mut().push(changes.items.clone());
        })
    }

    #[test]
    fn subscribed_ticks_flush_the_log() {
        let mut tracker = ChangeTracker::new();
        let mut ticks = ManualTicks::new();
        let mut log = ChangeLog::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listener = collecting(&seen);
        tracker.on(ChangeKind::Geometry, &listener);
        tracker.set_enabled(true, &mut ticks);

        log.mark(ItemId(1), ChangeFlags::GEOMETRY);
        assert!(pump_frame(&mut ticks, &tracker, &mut log, &AllTracked));

        assert_eq!(*seen.borrow(), vec![vec![ItemId(1)]]);
        assert!(log.is_empty());
        assert_eq!(ticks.delivered(), 1);
    }

    #[test]
    fn disabled_tracker_drops_ticks_but_keeps_the_log() {
        let mut tracker = ChangeTracker::new();
        let mut ticks = ManualTicks::new();
        let mut log = ChangeLog::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listener = collecting(&seen);
        tracker.on(ChangeKind::Geometry, &listener);
        tracker.set_enabled(true, &mut ticks);
        tracker.set_enabled(false, &mut ticks);

        // Mutations after disable keep accumulating.
        log.mark(ItemId(1), ChangeFlags::GEOMETRY);
        assert!(!pump_frame(&mut ticks, &tracker, &mut log, &AllTracked));
        assert!(seen.borrow().is_empty());
        assert_eq!(log.len(), 1);
        assert_eq!(ticks.dropped(), 1);

        // A manual flush is independent of the subscription.
        tracker.flush(&mut log, &AllTracked);
        assert_eq!(*seen.borrow(), vec![vec![ItemId(1)]]);
        assert!(log.is_empty());
    }

    #[test]
    fn re_enabling_resumes_automatic_flushing() {
        let mut tracker = ChangeTracker::new();
        let mut ticks = ManualTicks::new();
        let mut log = ChangeLog::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listener = collecting(&seen);
        tracker.on(ChangeKind::Style, &listener);

        tracker.set_enabled(true, &mut ticks);
        tracker.set_enabled(false, &mut ticks);
        tracker.set_enabled(true, &mut ticks);

        log.mark(ItemId(2), ChangeFlags::STYLE);
        assert!(pump_frame(&mut ticks, &tracker, &mut log, &AllTracked));
        assert_eq!(*seen.borrow(), vec![vec![ItemId(2)]]);
    }

    #[test]
    fn changes_span_frames_until_flushed() {
        let mut tracker = ChangeTracker::new();
        let mut ticks = ManualTicks::new();
        let mut log = ChangeLog::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listener = collecting(&seen);
        tracker.on(ChangeKind::Content, &listener);
        tracker.set_enabled(true, &mut ticks);

        // Two mutations of one item in a frame merge into one record.
        log.mark(ItemId(3), ChangeFlags::CONTENT);
        log.mark(ItemId(3), ChangeFlags::CONTENT);
        log.mark(ItemId(4), ChangeFlags::CONTENT);
        assert!(pump_frame(&mut ticks, &tracker, &mut log, &AllTracked));

        // An empty frame dispatches nothing.
        assert!(pump_frame(&mut ticks, &tracker, &mut log, &AllTracked));

        assert_eq!(*seen.borrow(), vec![vec![ItemId(3), ItemId(4)]]);
        assert_eq!(ticks.delivered(), 2);
    }
}
