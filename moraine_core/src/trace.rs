// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the flush cycle.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! flush instrumentation calls at each stage. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

use crate::item::ItemId;
use crate::kind::ChangeKind;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a flush starts draining the raw change log.
#[derive(Clone, Copy, Debug)]
pub struct FlushBeginEvent {
    /// Number of records captured from the log.
    pub records: usize,
}

/// Emitted when a record fails the eligibility filter.
#[derive(Clone, Copy, Debug)]
pub struct RecordSkippedEvent {
    /// The ineligible item (guide or opted out of tracking).
    pub item: ItemId,
}

/// Emitted for each item-level dispatch (one per decoded set bit).
#[derive(Clone, Copy, Debug)]
pub struct ItemDispatchEvent {
    /// The affected item.
    pub item: ItemId,
    /// The decoded change kind.
    pub kind: ChangeKind,
}

/// Emitted for each project-level dispatch (one per kind with members).
#[derive(Clone, Copy, Debug)]
pub struct GroupDispatchEvent {
    /// The change kind being dispatched.
    pub kind: ChangeKind,
    /// Number of grouped items, duplicates included.
    pub items: usize,
}

/// Emitted when a flush completes and the log has been cleared.
#[derive(Clone, Copy, Debug)]
pub struct FlushEndEvent {
    /// Number of records processed (after eligibility filtering).
    pub records: usize,
    /// Number of kinds that received a project-level dispatch.
    pub kinds: usize,
}

// ---------------------------------------------------------------------------
// TraceSink
// ---------------------------------------------------------------------------

/// Receives flush instrumentation events. All methods default to no-ops.
pub trait TraceSink {
    /// A flush began draining the log.
    fn on_flush_begin(&mut self, e: &FlushBeginEvent) {
        let _ = e;
    }

    /// A record was skipped by the eligibility filter.
    fn on_record_skipped(&mut self, e: &RecordSkippedEvent) {
        let _ = e;
    }

    /// An item-level event was dispatched.
    fn on_item_dispatch(&mut self, e: &ItemDispatchEvent) {
        let _ = e;
    }

    /// A project-level event was dispatched.
    fn on_group_dispatch(&mut self, e: &GroupDispatchEvent) {
        let _ = e;
    }

    /// A flush completed.
    fn on_flush_end(&mut self, e: &FlushEndEvent) {
        let _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`FlushBeginEvent`].
    #[inline]
    pub fn flush_begin(&mut self, e: &FlushBeginEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_flush_begin(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RecordSkippedEvent`].
    #[inline]
    pub fn record_skipped(&mut self, e: &RecordSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_record_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ItemDispatchEvent`].
    #[inline]
    pub fn item_dispatch(&mut self, e: &ItemDispatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_item_dispatch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`GroupDispatchEvent`].
    #[inline]
    pub fn group_dispatch(&mut self, e: &GroupDispatchEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_group_dispatch(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FlushEndEvent`].
    #[inline]
    pub fn flush_end(&mut self, e: &FlushEndEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_flush_end(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
