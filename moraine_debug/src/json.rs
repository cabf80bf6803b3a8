// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON exporter for recorded flush events.
//!
//! [`export`] reads events from a
//! [`RecorderSink`](crate::recorder::RecorderSink) recording and writes a
//! JSON array to the given writer, one object per event.

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::RecordedEvent;

/// Exports recorded events as a JSON array.
///
/// Each event becomes an object with a `"type"` discriminant plus the
/// event's fields; item ids are numbers and kinds are their short labels.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let values: Vec<Value> = events.iter().map(to_value).collect();
    serde_json::to_writer(writer, &values).map_err(io::Error::other)
}

fn to_value(event: &RecordedEvent) -> Value {
    match *event {
        RecordedEvent::FlushBegin { records } => json!({
            "type": "flush_begin",
            "records": records,
        }),
        RecordedEvent::RecordSkipped { item } => json!({
            "type": "record_skipped",
            "item": item.0,
        }),
        RecordedEvent::ItemDispatch { item, kind } => json!({
            "type": "item_dispatch",
            "item": item.0,
            "kind": kind.as_str(),
        }),
        RecordedEvent::GroupDispatch { kind, items } => json!({
            "type": "group_dispatch",
            "kind": kind.as_str(),
            "items": items,
        }),
        RecordedEvent::FlushEnd { records, kinds } => json!({
            "type": "flush_end",
            "records": records,
            "kinds": kinds,
        }),
    }
}
