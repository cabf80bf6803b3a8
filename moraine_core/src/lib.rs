// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame change aggregation and dispatch for mutable scene graphs.
//!
//! `moraine_core` buffers scene-graph mutations as flagged records during a
//! frame and, once per rendering tick, decodes them into semantic change
//! kinds and dispatches listener notifications. It is `no_std` compatible
//! (with `alloc`) and single-threaded: all dispatch runs synchronously inside
//! one flush.
//!
//! # Architecture
//!
//! The crate is organized around a frame loop that turns buffered mutations
//! into listener notifications:
//!
//! ```text
//!   Mutation code (external)
//!       │ ChangeLog::mark / push
//!       ▼
//!   ChangeLog ──► ChangeTracker::flush() ──► item events (per set bit,
//!       ▲               │                    record order, bit 0 → 11)
//!       │               ▼
//!       │          grouped kinds ──► project events (one per kind,
//!       │                            first-encountered order)
//!       └── cleared by flush (sole consumer)
//! ```
//!
//! **[`flags`]** — The 12-bit raw change mask attached to each record.
//!
//! **[`kind`]** — The semantic change taxonomy; one [`ChangeKind`] per bit,
//! decoded in ascending bit order.
//!
//! **[`log`]** — The externally-owned hand-off queue of
//! [`ChangeRecord`]s, with a per-item merge index. Only the tracker's flush
//! may clear it.
//!
//! **[`registry`]** — Dual-scope listener registry (per-item and
//! per-project) with idempotent registration and ordered synchronous
//! dispatch.
//!
//! **[`tracker`]** — The [`ChangeTracker`] that decodes one frame's log,
//! emits item-level events interleaved with decoding, then one project-level
//! event per kind, and clears the log.
//!
//! **[`project`]** — Contracts for the external collaborators: per-item
//! eligibility state ([`ItemStates`](project::ItemStates)) and the frame-tick
//! subscription seam ([`TickSource`](project::TickSource)).
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! flush instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): enables `Tracer` method bodies (one
//!   branch per call site).
//!
//! [`ChangeKind`]: kind::ChangeKind
//! [`ChangeRecord`]: log::ChangeRecord
//! [`ChangeTracker`]: tracker::ChangeTracker

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod flags;
pub mod item;
pub mod kind;
pub mod log;
pub mod project;
pub mod registry;
pub mod trace;
pub mod tracker;
