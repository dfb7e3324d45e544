/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The results of a masonry layout pass: the container fragment with its
//! placed children, baselines, and the track geometry handed to introspection
//! tooling.

use app_units::Au;

use crate::geom::{LogicalRect, LogicalSides, LogicalVec2, PhysicalRect};
use crate::style::TrackDirection;
use crate::track::Span;

/// The first and last baselines of a fragment's content.
/// <https://drafts.csswg.org/css-align-3/#baseline-export>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Baselines {
    pub first: Option<Au>,
    pub last: Option<Au>,
}

impl Baselines {
    /// Combine with the baselines of content that comes after this one: the
    /// earliest first baseline and the latest last baseline win.
    pub fn union(self, later: Baselines) -> Baselines {
        Baselines {
            first: self.first.or(later.first),
            last: later.last.or(self.last),
        }
    }
}

/// Accumulates container baselines as items are placed, in item order.
#[derive(Debug, Default)]
pub(crate) struct BaselineAccumulator {
    baselines: Baselines,
}

impl BaselineAccumulator {
    /// Fold in one placed item's baseline, already translated to the
    /// container's block axis.
    pub(crate) fn accumulate(&mut self, baseline: Option<Au>) {
        self.baselines = self.baselines.union(Baselines {
            first: baseline,
            last: baseline,
        });
    }

    pub(crate) fn finish(self) -> Baselines {
        self.baselines
    }
}

/// One placed in-flow child.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemFragment {
    /// Index of the child in the container's child list.
    pub child_index: usize,
    /// The resolved (always definite) grid-axis span.
    pub span: Span,
    /// Border-box rect of the child, relative to the container's border box.
    pub rect: LogicalRect<Au>,
    pub margin: LogicalSides<Au>,
}

impl ItemFragment {
    pub fn to_physical(&self) -> PhysicalRect<Au> {
        self.rect.to_physical()
    }
}

/// Final geometry of one grid-axis track.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrackGeometryEntry {
    pub offset: Au,
    pub size: Au,
    pub is_collapsed: bool,
}

/// The sized grid-axis tracks, transferred out of the layout pass so
/// devtools-style overlays can draw them without re-running the algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackGeometry {
    pub direction: TrackDirection,
    pub gutter: Au,
    pub tracks: Vec<TrackGeometryEntry>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StaticPositionEdge {
    Start,
    Center,
    End,
}

/// An absolutely positioned child, registered for the external abs-pos
/// machinery rather than placed by this algorithm.
#[derive(Clone, Debug, PartialEq)]
pub struct OutOfFlowCandidate {
    pub child_index: usize,
    pub static_position: LogicalVec2<Au>,
    pub inline_edge: StaticPositionEdge,
    pub block_edge: StaticPositionEdge,
}

/// The fragment produced by a full masonry layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct MasonryFragment {
    /// Content block size plus border, scrollbar, and padding.
    pub block_size: Au,
    /// The content-derived block size, before border/scrollbar/padding.
    pub intrinsic_block_size: Au,
    pub items: Vec<ItemFragment>,
    pub baselines: Baselines,
    pub track_geometry: TrackGeometry,
    pub out_of_flow_candidates: Vec<OutOfFlowCandidate>,
}

#[cfg(test)]
mod tests {
    use app_units::Au;

    use super::{BaselineAccumulator, Baselines};

    #[test]
    fn baselines_keep_first_and_last() {
        let mut accumulator = BaselineAccumulator::default();
        accumulator.accumulate(None);
        accumulator.accumulate(Some(Au::from_px(10)));
        accumulator.accumulate(None);
        accumulator.accumulate(Some(Au::from_px(40)));
        let baselines = accumulator.finish();
        assert_eq!(baselines.first, Some(Au::from_px(10)));
        assert_eq!(baselines.last, Some(Au::from_px(40)));
    }

    #[test]
    fn union_is_ordered() {
        let earlier = Baselines {
            first: Some(Au::from_px(1)),
            last: Some(Au::from_px(2)),
        };
        let later = Baselines {
            first: Some(Au::from_px(3)),
            last: None,
        };
        let union = earlier.union(later);
        assert_eq!(union.first, Some(Au::from_px(1)));
        assert_eq!(union.last, Some(Au::from_px(2)));
    }
}
