// Copyright 2026 the Moraine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic change taxonomy.
//!
//! Each [`ChangeKind`] is bound to exactly one bit position in
//! [`ChangeFlags`]. A record whose mask sets multiple bits belongs to
//! multiple kinds. [`ChangeKind::ALL`] fixes the decode order: ascending bit
//! position, bit 0 first.
//!
//! The mapping is a fixed enumeration rather than a dynamic table so a
//! missing arm is a compile error.

use crate::flags::ChangeFlags;

/// One of the twelve semantic change categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeKind {
    /// Visual appearance (bit 0).
    Appearance,
    /// Child list (bit 1).
    Children,
    /// Insertion into the tree (bit 2).
    Insertion,
    /// Geometry (bit 3).
    Geometry,
    /// Path segments (bit 4).
    Segments,
    /// Stroke properties (bit 5).
    Stroke,
    /// Style properties (bit 6).
    Style,
    /// Generic attribute (bit 7).
    Attribute,
    /// Content, e.g. text or image data (bit 8).
    Content,
    /// Raster pixels (bit 9).
    Pixels,
    /// Clipping (bit 10).
    Clipping,
    /// The view itself (bit 11).
    View,
}

impl ChangeKind {
    /// All kinds in ascending bit order. This is the decode order used by
    /// [`ChangeTracker::flush`](crate::tracker::ChangeTracker::flush).
    pub const ALL: [Self; 12] = [
        Self::Appearance,
        Self::Children,
        Self::Insertion,
        Self::Geometry,
        Self::Segments,
        Self::Stroke,
        Self::Style,
        Self::Attribute,
        Self::Content,
        Self::Pixels,
        Self::Clipping,
        Self::View,
    ];

    /// Returns the bit position bound to this kind.
    #[must_use]
    pub const fn bit(self) -> u32 {
        match self {
            Self::Appearance => 0,
            Self::Children => 1,
            Self::Insertion => 2,
            Self::Geometry => 3,
            Self::Segments => 4,
            Self::Stroke => 5,
            Self::Style => 6,
            Self::Attribute => 7,
            Self::Content => 8,
            Self::Pixels => 9,
            Self::Clipping => 10,
            Self::View => 11,
        }
    }

    /// Returns the single-bit [`ChangeFlags`] mask for this kind.
    #[must_use]
    pub const fn flag(self) -> ChangeFlags {
        match self {
            Self::Appearance => ChangeFlags::APPEARANCE,
            Self::Children => ChangeFlags::CHILDREN,
            Self::Insertion => ChangeFlags::INSERTION,
            Self::Geometry => ChangeFlags::GEOMETRY,
            Self::Segments => ChangeFlags::SEGMENTS,
            Self::Stroke => ChangeFlags::STROKE,
            Self::Style => ChangeFlags::STYLE,
            Self::Attribute => ChangeFlags::ATTRIBUTE,
            Self::Content => ChangeFlags::CONTENT,
            Self::Pixels => ChangeFlags::PIXELS,
            Self::Clipping => ChangeFlags::CLIPPING,
            Self::View => ChangeFlags::VIEW,
        }
    }

    /// Resolves a bit position to its kind, if the position is defined.
    #[must_use]
    pub const fn from_bit(bit: u32) -> Option<Self> {
        if bit < 12 {
            Some(Self::ALL[bit as usize])
        } else {
            None
        }
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Appearance => "appearance",
            Self::Children => "children",
            Self::Insertion => "insertion",
            Self::Geometry => "geometry",
            Self::Segments => "segments",
            Self::Stroke => "stroke",
            Self::Style => "style",
            Self::Attribute => "attribute",
            Self::Content => "content",
            Self::Pixels => "pixels",
            Self::Clipping => "clipping",
            Self::View => "view",
        }
    }
}
