// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use moraine_core::trace::{
    FlushBeginEvent, FlushEndEvent, GroupDispatchEvent, ItemDispatchEvent, RecordSkippedEvent,
    TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the destination, consuming the sink.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_flush_begin(&mut self, e: &FlushBeginEvent) {
        let _ = writeln!(self.writer, "flush begin  records={}", e.records);
    }

    fn on_record_skipped(&mut self, e: &RecordSkippedEvent) {
        let _ = writeln!(self.writer, "skip         item={}", e.item.0);
    }

    fn on_item_dispatch(&mut self, e: &ItemDispatchEvent) {
        let _ = writeln!(
            self.writer,
            "item event   item={} kind={}",
            e.item.0,
            e.kind.as_str()
        );
    }

    fn on_group_dispatch(&mut self, e: &GroupDispatchEvent) {
        let _ = writeln!(
            self.writer,
            "group event  kind={} items={}",
            e.kind.as_str(),
            e.items
        );
    }

    fn on_flush_end(&mut self, e: &FlushEndEvent) {
        let _ = writeln!(
            self.writer,
            "flush end    records={} kinds={}",
            e.records, e.kinds
        );
    }
}

#[cfg(test)]
mod tests {
    use moraine_core::item::ItemId;
    use moraine_core::kind::ChangeKind;

    use super::*;

    #[test]
    fn one_line_per_event() {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        sink.on_flush_begin(&FlushBeginEvent { records: 2 });
        sink.on_item_dispatch(&ItemDispatchEvent {
            item: ItemId(1),
            kind: ChangeKind::Geometry,
        });
        sink.on_flush_end(&FlushEndEvent {
            records: 2,
            kinds: 1,
        });

        let out = String::from_utf8(sink.into_writer()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("flush begin"));
        assert!(lines[1].contains("kind=geometry"));
        assert!(lines[2].starts_with("flush end"));
    }
}
