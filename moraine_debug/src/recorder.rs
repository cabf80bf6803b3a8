// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and stores every event as a
//! [`RecordedEvent`] in arrival order. Recordings are the input for
//! [`json::export`](crate::json::export) and are handy in tests for
//! asserting on flush structure without registering listeners.

use moraine_core::item::ItemId;
use moraine_core::kind::ChangeKind;
use moraine_core::trace::{
    FlushBeginEvent, FlushEndEvent, GroupDispatchEvent, ItemDispatchEvent, RecordSkippedEvent,
    TraceSink,
};

/// One recorded flush-instrumentation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// A flush began draining the log.
    FlushBegin {
        /// Number of records captured from the log.
        records: usize,
    },
    /// A record was skipped by the eligibility filter.
    RecordSkipped {
        /// The ineligible item.
        item: ItemId,
    },
    /// An item-level event was dispatched.
    ItemDispatch {
        /// The affected item.
        item: ItemId,
        /// The decoded change kind.
        kind: ChangeKind,
    },
    /// A project-level event was dispatched.
    GroupDispatch {
        /// The change kind.
        kind: ChangeKind,
        /// Number of grouped items, duplicates included.
        items: usize,
    },
    /// A flush completed.
    FlushEnd {
        /// Records processed after filtering.
        records: usize,
        /// Kinds that received a project-level dispatch.
        kinds: usize,
    },
}

/// A [`TraceSink`] that stores events in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_flush_begin(&mut self, e: &FlushBeginEvent) {
        self.events.push(RecordedEvent::FlushBegin {
            records: e.records,
        });
    }

    fn on_record_skipped(&mut self, e: &RecordSkippedEvent) {
        self.events.push(RecordedEvent::RecordSkipped { item: e.item });
    }

    fn on_item_dispatch(&mut self, e: &ItemDispatchEvent) {
        self.events.push(RecordedEvent::ItemDispatch {
            item: e.item,
            kind: e.kind,
        });
    }

    fn on_group_dispatch(&mut self, e: &GroupDispatchEvent) {
        self.events.push(RecordedEvent::GroupDispatch {
            kind: e.kind,
            items: e.items,
        });
    }

    fn on_flush_end(&mut self, e: &FlushEndEvent) {
        self.events.push(RecordedEvent::FlushEnd {
            records: e.records,
            kinds: e.kinds,
        });
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use moraine_core::flags::ChangeFlags;
    use moraine_core::log::ChangeLog;
    use moraine_core::project::ItemStates;
    use moraine_core::trace::Tracer;
    use moraine_core::tracker::ChangeTracker;

    use super::*;

    #[derive(Default)]
    struct TestItems {
        guides: BTreeSet<ItemId>,
    }

    impl ItemStates for TestItems {
        fn is_guide(&self, item: ItemId) -> bool {
            self.guides.contains(&item)
        }

        fn tracks_changes(&self, _item: ItemId) -> bool {
            true
        }
    }

    #[test]
    fn records_flush_structure_in_dispatch_order() {
        let tracker = ChangeTracker::new();
        let mut log = ChangeLog::new();
        let mut sink = RecorderSink::new();

        log.mark(
            ItemId(1),
            ChangeFlags::APPEARANCE | ChangeFlags::INSERTION,
        );
        log.mark(ItemId(2), ChangeFlags::CHILDREN);
        tracker.flush_traced(&mut log, &TestItems::default(), &mut Tracer::new(&mut sink));

        assert_eq!(
            sink.events(),
            &[
                RecordedEvent::FlushBegin { records: 2 },
                RecordedEvent::ItemDispatch {
                    item: ItemId(1),
                    kind: ChangeKind::Appearance,
                },
                RecordedEvent::ItemDispatch {
                    item: ItemId(1),
                    kind: ChangeKind::Insertion,
                },
                RecordedEvent::ItemDispatch {
                    item: ItemId(2),
                    kind: ChangeKind::Children,
                },
                RecordedEvent::GroupDispatch {
                    kind: ChangeKind::Appearance,
                    items: 1,
                },
                RecordedEvent::GroupDispatch {
                    kind: ChangeKind::Insertion,
                    items: 1,
                },
                RecordedEvent::GroupDispatch {
                    kind: ChangeKind::Children,
                    items: 1,
                },
                RecordedEvent::FlushEnd {
                    records: 2,
                    kinds: 3,
                },
            ]
        );
    }

    #[test]
    fn records_skips() {
        let tracker = ChangeTracker::new();
        let mut log = ChangeLog::new();
        let mut sink = RecorderSink::new();

        let mut items = TestItems::default();
        items.guides.insert(ItemId(9));

        log.mark(ItemId(9), ChangeFlags::GEOMETRY);
        tracker.flush_traced(&mut log, &items, &mut Tracer::new(&mut sink));

        assert_eq!(
            sink.events(),
            &[
                RecordedEvent::FlushBegin { records: 1 },
                RecordedEvent::RecordSkipped { item: ItemId(9) },
                RecordedEvent::FlushEnd {
                    records: 0,
                    kinds: 0,
                },
            ]
        );
    }

    #[test]
    fn empty_flush_records_nothing() {
        let tracker = ChangeTracker::new();
        let mut log = ChangeLog::new();
        let mut sink = RecorderSink::new();

        tracker.flush_traced(&mut log, &TestItems::default(), &mut Tracer::new(&mut sink));
        assert!(sink.events().is_empty());
    }

    #[test]
    fn clear_discards_events() {
        let tracker = ChangeTracker::new();
        let mut log = ChangeLog::new();
        let mut sink = RecorderSink::new();

        log.mark(ItemId(1), ChangeFlags::VIEW);
        tracker.flush_traced(&mut log, &TestItems::default(), &mut Tracer::new(&mut sink));
        assert!(!sink.events().is_empty());

        sink.clear();
        assert!(sink.events().is_empty());
    }
}
