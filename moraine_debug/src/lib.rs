// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for moraine diagnostics.
//!
//! This crate provides [`TraceSink`](moraine_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`recorder::RecorderSink`] — in-memory event recording for assertions
//!   and playback.
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`json::export`] — writes recorded events as a JSON array.

pub mod json;
pub mod pretty;
pub mod recorder;
