/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! # Masonry layout
//!
//! Track sizing and placement for masonry containers, following the
//! [masonry layout][1] section of CSS Grid Level 3: tracks along one "grid
//! axis" are sized like ordinary grid tracks, while items are packed along
//! the perpendicular "stacking axis" against the smallest running extent.
//!
//! The algorithm is a pure function of (style, children, available size); it
//! depends on its collaborators only through narrow capability traits defined
//! here and in [`track`]: the per-child [`MasonryItemNode`], the
//! [`track::TrackSizingEngine`] shared with grid layout, and the
//! [`ResolveBoxModel`] box-model resolver.
//!
//! [1]: https://drafts.csswg.org/css-grid-3/#masonry-layout

pub mod fragment;
pub mod geom;
pub mod items;
pub mod layout;
pub mod running_positions;
pub mod sizing;
pub mod style;
pub mod track;


use app_units::Au;

pub use crate::layout::MasonryLayoutAlgorithm;
use crate::fragment::Baselines;
use crate::geom::{LogicalSides, LogicalVec2};
use crate::sizing::ContentSizes;
use crate::style::ItemStyle;

/// One dimension of an available size: either a definite length or
/// indefinite ("to be determined by content").
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SizeConstraint {
    Definite(Au),
    #[default]
    Indefinite,
}

impl SizeConstraint {
    pub fn is_definite(self) -> bool {
        matches!(self, SizeConstraint::Definite(_))
    }

    pub fn to_definite(self) -> Option<Au> {
        match self {
            SizeConstraint::Definite(size) => Some(size),
            SizeConstraint::Indefinite => None,
        }
    }
}

/// Which result slot a child layout may populate. Measurement passes must not
/// touch the state a later real layout pass depends on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CacheSlot {
    Layout,
    Measure,
}

/// The constraints a masonry item is laid out or measured under. All sizes
/// are in the container's logical coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConstraintSpace {
    pub available_size: LogicalVec2<SizeConstraint>,
    pub percentage_resolution_size: LogicalVec2<SizeConstraint>,
    /// When true, the available inline size is a forced used size rather than
    /// a limit.
    pub is_fixed_inline_size: bool,
    pub is_fixed_block_size: bool,
    pub cache_slot: CacheSlot,
}

/// A laid-out child: its border-box size (container logical coordinates) and
/// content baselines relative to its own block start.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ItemLayout {
    pub size: LogicalVec2<Au>,
    pub baselines: Baselines,
}

/// The capability every masonry child provides. Implementations own any
/// caching; when the space's [`CacheSlot`] is [`CacheSlot::Measure`], layout
/// side effects on persisted state must be suppressed so that measurement
/// never corrupts the result a subsequent [`CacheSlot::Layout`] pass reads.
pub trait MasonryItemNode {
    fn layout(&self, space: &ConstraintSpace) -> ItemLayout;

    /// The child's min-content/max-content contribution along the container's
    /// inline axis, border box and no margins.
    fn min_max_contribution(&self, space: &ConstraintSpace) -> ContentSizes;
}

/// External box-model resolution: turns an item's specified margins into used
/// margins under the given constraint space.
pub trait ResolveBoxModel {
    fn compute_margins(&self, space: &ConstraintSpace, style: &ItemStyle) -> LogicalSides<Au>;
}

/// One child of a masonry container, as handed to the algorithm.
pub struct MasonryChild<'dom> {
    pub style: ItemStyle,
    pub node: &'dom dyn MasonryItemNode,
}
