// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw change bitmask.
//!
//! Mutation code ORs these flags into a [`ChangeRecord`]'s mask as it edits
//! an item; a record accumulated over one frame may carry any combination.
//! Each bit corresponds to exactly one [`ChangeKind`], and the tracker
//! decodes set bits in ascending order (bit 0 first).
//!
//! [`ChangeKind`]: crate::kind::ChangeKind
//! [`ChangeRecord`]: crate::log::ChangeRecord

use bitflags::bitflags;

bitflags! {
    /// Bitmask of raw change categories accumulated on one record.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ChangeFlags: u32 {
        /// Visual appearance changed (bit 0).
        const APPEARANCE = 1 << 0;
        /// Child list changed (bit 1).
        const CHILDREN = 1 << 1;
        /// Item was inserted into the tree (bit 2).
        const INSERTION = 1 << 2;
        /// Geometry changed (bit 3).
        const GEOMETRY = 1 << 3;
        /// Path segments changed (bit 4).
        const SEGMENTS = 1 << 4;
        /// Stroke properties changed (bit 5).
        const STROKE = 1 << 5;
        /// Style properties changed (bit 6).
        const STYLE = 1 << 6;
        /// A generic attribute changed (bit 7).
        const ATTRIBUTE = 1 << 7;
        /// Content changed, e.g. text or image data (bit 8).
        const CONTENT = 1 << 8;
        /// Raster pixels changed (bit 9).
        const PIXELS = 1 << 9;
        /// Clipping changed (bit 10).
        const CLIPPING = 1 << 10;
        /// The view itself changed (bit 11).
        const VIEW = 1 << 11;
    }
}

impl ChangeFlags {
    /// Number of defined bit positions.
    pub const BITS_USED: u32 = 12;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_match_positions() {
        assert_eq!(ChangeFlags::APPEARANCE.bits(), 1);
        assert_eq!(ChangeFlags::CHILDREN.bits(), 1 << 1);
        assert_eq!(ChangeFlags::VIEW.bits(), 1 << 11);
    }

    #[test]
    fn all_covers_exactly_twelve_bits() {
        assert_eq!(ChangeFlags::all().bits(), (1 << ChangeFlags::BITS_USED) - 1);
    }

    #[test]
    fn union_accumulates() {
        let mut flags = ChangeFlags::empty();
        flags |= ChangeFlags::GEOMETRY;
        flags |= ChangeFlags::STROKE;
        assert!(flags.contains(ChangeFlags::GEOMETRY));
        assert!(flags.contains(ChangeFlags::STROKE));
        assert!(!flags.contains(ChangeFlags::PIXELS));
    }
}
