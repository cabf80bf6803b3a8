// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contracts for the external project collaborator.
//!
//! Moraine owns change decoding, grouping, and dispatch. Everything else
//! about the scene graph stays external, and the host provides the following
//! pieces:
//!
//! - **Change log** — A [`ChangeLog`](crate::log::ChangeLog) that mutation
//!   code fills during the frame. The host owns it and passes it to
//!   [`ChangeTracker::flush`](crate::tracker::ChangeTracker::flush), which is
//!   its sole consumer.
//!
//! - **Item state** — An [`ItemStates`] implementation. Eligibility is
//!   re-checked at flush time, not when a record is created, so an item's
//!   opt-out state may change between mutation and flush and the flush-time
//!   value wins.
//!
//! - **Tick source** — A [`TickSource`] wrapping the platform's per-frame
//!   event emitter (display link, `requestAnimationFrame`, compositor frame
//!   callback). Delivering ticks to the flush is host glue: the setup and
//!   lifecycle of tick callbacks differ fundamentally across platforms, so
//!   only the subscribe/unsubscribe seam is abstracted here.
//!
//! # Frame loop pseudocode
//!
//! A typical host wires the pieces together like this:
//!
//! ```rust,ignore
//! fn on_frame() {
//!     // Mutations earlier in the frame have filled `log` via mark()/push().
//!     if ticks.is_subscribed() {
//!         tracker.flush(&mut log, &project);
//!     }
//! }
//! ```

use crate::item::ItemId;

/// Per-item state the tracker consults when filtering records at flush time.
pub trait ItemStates {
    /// Whether the item is a non-tracked helper (guide) item. Guide items
    /// never produce change events.
    fn is_guide(&self, item: ItemId) -> bool;

    /// Whether change tracking is enabled for the item. Items default to
    /// tracked; returning `false` here is the per-item opt-out.
    fn tracks_changes(&self, item: ItemId) -> bool;
}

/// The external per-frame tick emitter, reduced to its subscription seam.
///
/// [`ChangeTracker::set_enabled`](crate::tracker::ChangeTracker::set_enabled)
/// calls these on enable/disable transitions. While unsubscribed, the host
/// must not deliver ticks to the tracker's flush; manual flushes remain
/// valid either way.
pub trait TickSource {
    /// Registers the tracker's per-frame flush with the emitter.
    fn subscribe(&mut self);

    /// Removes the tracker's per-frame flush from the emitter.
    fn unsubscribe(&mut self);
}
