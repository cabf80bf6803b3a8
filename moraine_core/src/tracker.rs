// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The change tracker: per-frame decode, grouping, and dispatch.
//!
//! [`ChangeTracker::flush`] turns one frame's raw change log into listener
//! notifications, exactly once per flush:
//!
//! 1. The log is drained up front, so records a listener buffers re-entrantly
//!    during dispatch belong to the *next* frame.
//! 2. Each record is filtered for eligibility (guide items and items opted
//!    out of tracking are skipped; both are re-checked now, not at record
//!    creation).
//! 3. Each eligible record's mask is scanned bit 0 → bit 11; per set bit the
//!    item joins that kind's group (duplicates preserved) and the item-level
//!    event fires immediately. Item events are therefore interleaved with
//!    decoding: record order first, ascending bit order within a record.
//! 4. Once the whole log is drained, one project-level event fires per kind
//!    with members, in first-encountered order, carrying the grouped items.
//!
//! Within one frame, every item-level event precedes every project-level
//! event; downstream listeners may rely on this.
//!
//! The tracker also owns the `enabled` toggle, which binds or unbinds the
//! external tick subscription. It never clears or pauses the registries, and
//! a disabled tracker still flushes when called manually.

use alloc::vec;
use alloc::vec::Vec;

use crate::item::ItemId;
use crate::kind::ChangeKind;
use crate::log::{ChangeLog, ChangeRecord};
use crate::project::{ItemStates, TickSource};
use crate::registry::{BatchListener, KindChanges, ListenerRegistry, RecordListener};
use crate::trace::{
    FlushBeginEvent, FlushEndEvent, GroupDispatchEvent, ItemDispatchEvent, RecordSkippedEvent,
    Tracer,
};

/// Aggregates one frame's buffered changes and dispatches notifications.
///
/// Owns the dual-scope [`ListenerRegistry`] and the enable/disable state.
/// One tracker serves one project for its whole lifetime; teardown is
/// [`detach`](Self::detach) (the registries simply drop with the tracker).
#[derive(Debug, Default)]
pub struct ChangeTracker {
    listeners: ListenerRegistry,
    enabled: bool,
}

impl ChangeTracker {
    /// Creates a tracker with no listeners, disabled and unwired.
    ///
    /// Call [`set_enabled`](Self::set_enabled) with the host's tick source to
    /// start automatic flushing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Lifecycle --

    /// Returns whether the tracker is wired to its tick source.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables automatic flushing.
    ///
    /// On a transition this subscribes to (or unsubscribes from) `ticks`;
    /// re-asserting the current state does nothing, so a tick source can
    /// never be double-subscribed. Disabling does not clear or pause the
    /// registries, and an in-progress flush is unaffected — only future tick
    /// deliveries stop.
    pub fn set_enabled(&mut self, enabled: bool, ticks: &mut dyn TickSource) {
        if enabled == self.enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            ticks.subscribe();
        } else {
            ticks.unsubscribe();
        }
    }

    /// Tears the tracker down by unsubscribing from the tick source.
    ///
    /// Equivalent to a permanent disable. No per-item cleanup is needed; the
    /// registries are dropped with the tracker.
    pub fn detach(&mut self, ticks: &mut dyn TickSource) {
        self.set_enabled(false, ticks);
    }

    // -- Flush --

    /// Decodes and dispatches one frame's changes, then leaves the log empty.
    ///
    /// Independent of the tick subscription: a disabled tracker flushes just
    /// as well when called directly — only *automatic* triggering is
    /// suppressed while disabled.
    pub fn flush(&self, log: &mut ChangeLog, items: &impl ItemStates) {
        self.flush_traced(log, items, &mut Tracer::none());
    }

    /// Like [`flush`](Self::flush), with instrumentation.
    pub fn flush_traced(
        &self,
        log: &mut ChangeLog,
        items: &impl ItemStates,
        tracer: &mut Tracer<'_>,
    ) {
        // Capture and clear up front. Records buffered by listeners during
        // dispatch stay in the log for the next flush.
        let records = log.take();
        if records.is_empty() {
            return;
        }
        tracer.flush_begin(&FlushBeginEvent {
            records: records.len(),
        });

        // Kind → grouped items, in first-encountered kind order. At most 12
        // entries, so a linear scan beats a map here.
        let mut grouped: Vec<(ChangeKind, KindChanges)> = Vec::new();
        let mut processed = 0;

        for record in &records {
            if items.is_guide(record.item) || !items.tracks_changes(record.item) {
                tracer.record_skipped(&RecordSkippedEvent { item: record.item });
                continue;
            }
            processed += 1;

            for kind in ChangeKind::ALL {
                if !record.flags.contains(kind.flag()) {
                    continue;
                }
                match grouped.iter_mut().find(|(k, _)| *k == kind) {
                    Some((_, changes)) => changes.items.push(record.item),
                    None => grouped.push((
                        kind,
                        KindChanges {
                            items: vec![record.item],
                        },
                    )),
                }
                tracer.item_dispatch(&ItemDispatchEvent {
                    item: record.item,
                    kind,
                });
                self.listeners.emit_item(record.item, kind, record);
            }
        }

        for (kind, changes) in &grouped {
            tracer.group_dispatch(&GroupDispatchEvent {
                kind: *kind,
                items: changes.items.len(),
            });
            self.listeners.emit(*kind, changes);
        }

        tracer.flush_end(&FlushEndEvent {
            records: processed,
            kinds: grouped.len(),
        });
    }

    // -- Listener facade --
    //
    // Thin forwards so callers interact with one type, as the registry is an
    // implementation detail of the tracker.

    /// Attaches a project-scope listener. See [`ListenerRegistry::on`].
    pub fn on(&mut self, kind: ChangeKind, listener: &BatchListener) {
        self.listeners.on(kind, listener);
    }

    /// Attaches project-scope listeners in bulk. See
    /// [`ListenerRegistry::on_many`].
    pub fn on_many(&mut self, entries: impl IntoIterator<Item = (ChangeKind, BatchListener)>) {
        self.listeners.on_many(entries);
    }

    /// Attaches an item-scope listener. See [`ListenerRegistry::on_item`].
    pub fn on_item(&mut self, item: ItemId, kind: ChangeKind, listener: &RecordListener) {
        self.listeners.on_item(item, kind, listener);
    }

    /// Attaches item-scope listeners in bulk. See
    /// [`ListenerRegistry::on_item_many`].
    pub fn on_item_many(
        &mut self,
        item: ItemId,
        entries: impl IntoIterator<Item = (ChangeKind, RecordListener)>,
    ) {
        self.listeners.on_item_many(item, entries);
    }

    /// Detaches a project-scope listener. See [`ListenerRegistry::off`].
    pub fn off(&mut self, kind: ChangeKind, listener: &BatchListener) {
        self.listeners.off(kind, listener);
    }

    /// Detaches project-scope listeners in bulk. See
    /// [`ListenerRegistry::off_many`].
    pub fn off_many(&mut self, entries: impl IntoIterator<Item = (ChangeKind, BatchListener)>) {
        self.listeners.off_many(entries);
    }

    /// Detaches an item-scope listener. See [`ListenerRegistry::off_item`].
    pub fn off_item(&mut self, item: ItemId, kind: ChangeKind, listener: &RecordListener) {
        self.listeners.off_item(item, kind, listener);
    }

    /// Detaches item-scope listeners in bulk. See
    /// [`ListenerRegistry::off_item_many`].
    pub fn off_item_many(
        &mut self,
        item: ItemId,
        entries: impl IntoIterator<Item = (ChangeKind, RecordListener)>,
    ) {
        self.listeners.off_item_many(item, entries);
    }

    /// Returns whether any project-scope listener is registered for `kind`.
    ///
    /// Mutation code can check this before doing work to build a payload.
    #[must_use]
    pub fn responds(&self, kind: ChangeKind) -> bool {
        self.listeners.responds(kind)
    }

    /// Returns whether any item-scope listener is registered for
    /// `(item, kind)`.
    #[must_use]
    pub fn item_responds(&self, item: ItemId, kind: ChangeKind) -> bool {
        self.listeners.item_responds(item, kind)
    }

    /// Emits a project-level event directly. See [`ListenerRegistry::emit`].
    pub fn emit(&self, kind: ChangeKind, changes: &KindChanges) {
        self.listeners.emit(kind, changes);
    }

    /// Emits an item-level event directly. See
    /// [`ListenerRegistry::emit_item`].
    pub fn emit_item(&self, item: ItemId, kind: ChangeKind, record: &ChangeRecord) {
        self.listeners.emit_item(item, kind, record);
    }
}
