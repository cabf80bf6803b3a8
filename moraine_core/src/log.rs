// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame raw change log.
//!
//! [`ChangeLog`] is the hand-off queue between mutation code and the
//! tracker's flush. Mutation code appends records during a frame via
//! [`mark`](ChangeLog::mark) (ORs flags into the item's existing record) or
//! [`push`](ChangeLog::push) (unconditional append; one item may then hold
//! several records). The log is owned by the external project collaborator.
//!
//! Draining is single-consumer: only
//! [`ChangeTracker::flush`](crate::tracker::ChangeTracker::flush) may clear
//! the log, which it does on every flush whether or not records were
//! present. Nothing else may clear it between accumulation and flush, or
//! changes would be double-counted or lost.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::flags::ChangeFlags;
use crate::item::ItemId;

/// One buffered change: an item and the raw flags accumulated on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChangeRecord {
    /// The mutated item.
    pub item: ItemId,
    /// Raw change bits accumulated since the record was created.
    pub flags: ChangeFlags,
}

/// Ordered per-frame buffer of [`ChangeRecord`]s with a per-item index.
///
/// The index maps each item to its most recent record so [`mark`] can merge
/// repeated mutations of one item into a single record.
///
/// [`mark`]: Self::mark
#[derive(Debug, Default)]
pub struct ChangeLog {
    records: Vec<ChangeRecord>,
    by_item: BTreeMap<ItemId, usize>,
}

impl ChangeLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ORs `flags` into the item's existing record, appending a new record
    /// if the item has none this frame.
    pub fn mark(&mut self, item: ItemId, flags: ChangeFlags) {
        if let Some(&idx) = self.by_item.get(&item) {
            self.records[idx].flags |= flags;
        } else {
            self.by_item.insert(item, self.records.len());
            self.records.push(ChangeRecord { item, flags });
        }
    }

    /// Appends a record unconditionally.
    ///
    /// Unlike [`mark`](Self::mark) this never merges, so an item touched
    /// through `push` several times holds several records and appears once
    /// per record in the flush output. The index is re-pointed at the new
    /// record.
    pub fn push(&mut self, record: ChangeRecord) {
        self.by_item.insert(record.item, self.records.len());
        self.records.push(record);
    }

    /// Returns the buffered records in accumulation order.
    #[must_use]
    pub fn records(&self) -> &[ChangeRecord] {
        &self.records
    }

    /// Returns the flags currently indexed for `item`, if any.
    #[must_use]
    pub fn flags_for(&self, item: ItemId) -> Option<ChangeFlags> {
        self.by_item.get(&item).map(|&idx| self.records[idx].flags)
    }

    /// Returns the number of buffered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the log holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drains all records, leaving both the record list and the per-item
    /// index empty.
    ///
    /// Crate-private: the tracker's flush is the log's sole consumer.
    pub(crate) fn take(&mut self) -> Vec<ChangeRecord> {
        self.by_item.clear();
        core::mem::take(&mut self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_merges_flags_per_item() {
        let mut log = ChangeLog::new();
        log.mark(ItemId(1), ChangeFlags::GEOMETRY);
        log.mark(ItemId(1), ChangeFlags::STROKE);
        log.mark(ItemId(2), ChangeFlags::STYLE);

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.flags_for(ItemId(1)),
            Some(ChangeFlags::GEOMETRY | ChangeFlags::STROKE)
        );
        assert_eq!(log.flags_for(ItemId(2)), Some(ChangeFlags::STYLE));
    }

    #[test]
    fn push_keeps_duplicates() {
        let mut log = ChangeLog::new();
        let record = ChangeRecord {
            item: ItemId(1),
            flags: ChangeFlags::APPEARANCE,
        };
        log.push(record);
        log.push(record);

        assert_eq!(log.len(), 2);
        assert_eq!(log.records(), &[record, record]);
    }

    #[test]
    fn push_repoints_index_to_latest() {
        let mut log = ChangeLog::new();
        log.push(ChangeRecord {
            item: ItemId(1),
            flags: ChangeFlags::APPEARANCE,
        });
        log.push(ChangeRecord {
            item: ItemId(1),
            flags: ChangeFlags::GEOMETRY,
        });

        // A subsequent mark lands on the most recent record.
        log.mark(ItemId(1), ChangeFlags::STROKE);
        assert_eq!(log.records()[0].flags, ChangeFlags::APPEARANCE);
        assert_eq!(
            log.records()[1].flags,
            ChangeFlags::GEOMETRY | ChangeFlags::STROKE
        );
    }

    #[test]
    fn take_empties_records_and_index() {
        let mut log = ChangeLog::new();
        log.mark(ItemId(1), ChangeFlags::VIEW);

        let drained = log.take();
        assert_eq!(drained.len(), 1);
        assert!(log.is_empty());
        assert_eq!(log.flags_for(ItemId(1)), None);

        // A fresh mark after draining starts a new record.
        log.mark(ItemId(1), ChangeFlags::PIXELS);
        assert_eq!(log.flags_for(ItemId(1)), Some(ChangeFlags::PIXELS));
    }

    #[test]
    fn take_on_empty_log_is_a_no_op() {
        let mut log = ChangeLog::new();
        assert!(log.take().is_empty());
        assert!(log.is_empty());
    }
}
