// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item identity.

use core::fmt;

/// An opaque reference to a scene-graph item.
///
/// Items are created and managed externally by the project collaborator. The
/// tracker never dereferences an `ItemId`; it only uses it as a stable
/// identity key for change records and the item-scope listener registry, and
/// hands it back in event payloads.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl fmt::Debug for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ItemId({})", self.0)
    }
}
