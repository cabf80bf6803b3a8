// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dual-scope listener registry and synchronous dispatcher.
//!
//! Listeners live in two independent scopes:
//!
//! - **Project scope** — keyed by [`ChangeKind`]; listeners receive the
//!   per-frame [`KindChanges`] batch for that kind.
//! - **Item scope** — keyed by ([`ItemId`], [`ChangeKind`]); listeners
//!   receive the triggering [`ChangeRecord`].
//!
//! Listeners are `Rc` closures and identity is pointer identity
//! ([`Rc::ptr_eq`]): registering the same `Rc` twice under one key is a
//! no-op, and removal matches the same `Rc`. Within a bucket, listeners run
//! in registration order. Empty buckets (and empty item entries) are pruned
//! immediately on removal, and removing a listener that was never registered
//! does nothing.
//!
//! The registration surface is a closed set of explicit methods, two scopes
//! times single/bulk: [`on`](ListenerRegistry::on),
//! [`on_many`](ListenerRegistry::on_many),
//! [`on_item`](ListenerRegistry::on_item),
//! [`on_item_many`](ListenerRegistry::on_item_many), and the matching `off`
//! forms.

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::item::ItemId;
use crate::kind::ChangeKind;
use crate::log::ChangeRecord;

/// Payload for a project-level event: every item grouped under one kind this
/// frame, in encounter order, duplicates preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindChanges {
    /// Affected items in encounter order.
    pub items: Vec<ItemId>,
}

/// A project-scope listener. Receives the batched [`KindChanges`] for its
/// kind once per flush.
pub type BatchListener = Rc<dyn Fn(&KindChanges)>;

/// An item-scope listener. Receives the triggering [`ChangeRecord`] once per
/// matching set bit.
pub type RecordListener = Rc<dyn Fn(&ChangeRecord)>;

/// Holds both listener scopes and performs synchronous dispatch.
#[derive(Default)]
pub struct ListenerRegistry {
    project: BTreeMap<ChangeKind, Vec<BatchListener>>,
    items: BTreeMap<ItemId, BTreeMap<ChangeKind, Vec<RecordListener>>>,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("project_kinds", &self.project.len())
            .field("items", &self.items.len())
            .finish_non_exhaustive()
    }
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Registration --

    /// Attaches a project-scope listener for `kind`.
    ///
    /// Idempotent per listener identity: re-registering the same `Rc` under
    /// the same kind is a no-op.
    pub fn on(&mut self, kind: ChangeKind, listener: &BatchListener) {
        let bucket = self.project.entry(kind).or_default();
        if !bucket.iter().any(|l| Rc::ptr_eq(l, listener)) {
            bucket.push(Rc::clone(listener));
        }
    }

    /// Attaches one project-scope listener per `(kind, listener)` entry.
    pub fn on_many(&mut self, entries: impl IntoIterator<Item = (ChangeKind, BatchListener)>) {
        for (kind, listener) in entries {
            self.on(kind, &listener);
        }
    }

    /// Attaches an item-scope listener for `(item, kind)`.
    ///
    /// Idempotent per listener identity, as with [`on`](Self::on).
    pub fn on_item(&mut self, item: ItemId, kind: ChangeKind, listener: &RecordListener) {
        let bucket = self.items.entry(item).or_default().entry(kind).or_default();
        if !bucket.iter().any(|l| Rc::ptr_eq(l, listener)) {
            bucket.push(Rc::clone(listener));
        }
    }

    /// Attaches one item-scope listener per `(kind, listener)` entry, all for
    /// the same item.
    pub fn on_item_many(
        &mut self,
        item: ItemId,
        entries: impl IntoIterator<Item = (ChangeKind, RecordListener)>,
    ) {
        for (kind, listener) in entries {
            self.on_item(item, kind, &listener);
        }
    }

    // -- Removal --

    /// Detaches a project-scope listener from `kind`.
    ///
    /// Matches by identity. Removing a listener that is not registered, or
    /// from a kind with no bucket, does nothing. An emptied bucket is pruned.
    pub fn off(&mut self, kind: ChangeKind, listener: &BatchListener) {
        if let Some(bucket) = self.project.get_mut(&kind) {
            bucket.retain(|l| !Rc::ptr_eq(l, listener));
            if bucket.is_empty() {
                self.project.remove(&kind);
            }
        }
    }

    /// Detaches one project-scope listener per `(kind, listener)` entry.
    pub fn off_many(&mut self, entries: impl IntoIterator<Item = (ChangeKind, BatchListener)>) {
        for (kind, listener) in entries {
            self.off(kind, &listener);
        }
    }

    /// Detaches an item-scope listener from `(item, kind)`.
    ///
    /// An emptied bucket is pruned, and an item left with no buckets is
    /// removed from the item scope entirely.
    pub fn off_item(&mut self, item: ItemId, kind: ChangeKind, listener: &RecordListener) {
        if let Some(kinds) = self.items.get_mut(&item) {
            if let Some(bucket) = kinds.get_mut(&kind) {
                bucket.retain(|l| !Rc::ptr_eq(l, listener));
                if bucket.is_empty() {
                    kinds.remove(&kind);
                }
            }
            if kinds.is_empty() {
                self.items.remove(&item);
            }
        }
    }

    /// Detaches one item-scope listener per `(kind, listener)` entry, all for
    /// the same item.
    pub fn off_item_many(
        &mut self,
        item: ItemId,
        entries: impl IntoIterator<Item = (ChangeKind, RecordListener)>,
    ) {
        for (kind, listener) in entries {
            self.off_item(item, kind, &listener);
        }
    }

    // -- Queries --

    /// Returns whether at least one project-scope listener is registered for
    /// `kind`.
    #[must_use]
    pub fn responds(&self, kind: ChangeKind) -> bool {
        self.project.contains_key(&kind)
    }

    /// Returns whether at least one item-scope listener is registered for
    /// `(item, kind)`.
    #[must_use]
    pub fn item_responds(&self, item: ItemId, kind: ChangeKind) -> bool {
        self.items
            .get(&item)
            .is_some_and(|kinds| kinds.contains_key(&kind))
    }

    // -- Dispatch --

    /// Invokes every project-scope listener for `kind`, in registration
    /// order. No-op if none are registered.
    pub fn emit(&self, kind: ChangeKind, changes: &KindChanges) {
        if let Some(bucket) = self.project.get(&kind) {
            for listener in bucket {
                listener(changes);
            }
        }
    }

    /// Invokes every item-scope listener for `(item, kind)`, in registration
    /// order. No-op if none are registered.
    pub fn emit_item(&self, item: ItemId, kind: ChangeKind, record: &ChangeRecord) {
        if let Some(bucket) = self.items.get(&item).and_then(|kinds| kinds.get(&kind)) {
            for listener in bucket {
                listener(record);
            }
        }
    }
}
