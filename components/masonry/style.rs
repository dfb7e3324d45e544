/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The narrow slice of computed style the masonry algorithm consumes. Style
//! resolution proper (cascade, named lines, the auto-repeat value syntax) is an
//! embedder concern; these types carry only what track sizing and placement
//! need, already resolved to used values where possible.

use std::ops::Range;

use app_units::Au;
use euclid::num::Zero;
use bitflags::bitflags;

use crate::SizeConstraint;
use crate::geom::{LogicalSides, LogicalVec2};

/// The axis along which masonry tracks run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TrackDirection {
    Columns,
    Rows,
}

/// A single track size in the template.
///
/// `Auto` sizes to its items' contributions; `Flex` takes a share of leftover
/// space. Anything more exotic (minmax, fit-content) is the track sizing
/// engine's business and can be modeled by an engine-side interpretation of
/// these variants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TrackSize {
    Fixed(Au),
    Auto,
    Flex(f32),
}

impl TrackSize {
    pub fn is_definite(&self) -> bool {
        matches!(self, TrackSize::Fixed(_))
    }
}

/// <https://drafts.csswg.org/css-grid-2/#auto-repeat>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepeatType {
    AutoFill,
    AutoFit,
}

/// The `repeat(auto-fill | auto-fit, …)` group of a track template.
#[derive(Clone, Debug, PartialEq)]
pub struct AutoRepeater {
    pub kind: RepeatType,
    pub tracks: Vec<TrackSize>,
}

impl AutoRepeater {
    /// Whether any track in the repetition is auto-sized, which forces the
    /// two-pass intrinsic repeat resolution.
    ///
    /// <https://www.w3.org/TR/css-grid-3/#masonry-intrinsic-repeat>
    pub fn has_auto_sized_track(&self) -> bool {
        self.tracks.iter().any(|track| !track.is_definite())
    }
}

/// A grid-axis track template: fixed tracks around an optional auto-repeat
/// group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackList {
    pub leading: Vec<TrackSize>,
    pub repeater: Option<AutoRepeater>,
    pub trailing: Vec<TrackSize>,
}

impl TrackList {
    pub fn has_auto_sized_repeater(&self) -> bool {
        self.repeater
            .as_ref()
            .is_some_and(AutoRepeater::has_auto_sized_track)
    }

    pub fn track_count_before_auto_repeat(&self) -> u32 {
        self.leading.len() as u32
    }

    /// Total number of tracks once the repeater is expanded `auto_repetitions`
    /// times.
    pub fn expanded_track_count(&self, auto_repetitions: u32) -> u32 {
        let repeated = self
            .repeater
            .as_ref()
            .map_or(0, |repeater| repeater.tracks.len() as u32 * auto_repetitions);
        self.leading.len() as u32 + repeated + self.trailing.len() as u32
    }

    /// Expand the template, yielding each track's size and whether it came
    /// from the auto-repeat group.
    pub fn expanded(&self, auto_repetitions: u32) -> impl Iterator<Item = (TrackSize, bool)> + '_ {
        let repeated = self
            .repeater
            .iter()
            .flat_map(move |repeater| {
                std::iter::repeat_n(&repeater.tracks, auto_repetitions as usize)
            })
            .flatten();
        self.leading
            .iter()
            .map(|size| (*size, false))
            .chain(repeated.map(|size| (*size, true)))
            .chain(self.trailing.iter().map(|size| (*size, false)))
    }

    /// The track index range covered by an `auto-fit` repeater, if any.
    pub fn auto_fit_track_range(&self, auto_repetitions: u32) -> Option<Range<u32>> {
        let repeater = self.repeater.as_ref()?;
        if repeater.kind != RepeatType::AutoFit {
            return None;
        }
        let start = self.track_count_before_auto_repeat();
        Some(start..start + repeater.tracks.len() as u32 * auto_repetitions)
    }
}

/// A gutter size, kept unresolved so that percentages can be resolved against
/// whichever available size applies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gap {
    #[default]
    Normal,
    Length(Au),
    Percentage(f32),
}

impl Gap {
    /// `normal` behaves as zero; percentages of an indefinite size also
    /// resolve to zero.
    pub fn resolve(self, basis: SizeConstraint) -> Au {
        match self {
            Gap::Normal => Au::zero(),
            Gap::Length(length) => length,
            Gap::Percentage(percentage) => basis
                .to_definite()
                .map_or(Au::zero(), |basis| basis.scale_by(percentage)),
        }
    }
}

/// Self-alignment of an item within its spanned tracks.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum AxisEdge {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Alignment {
    pub edge: AxisEdge,
    /// The `safe` keyword: fall back to start alignment when the item would
    /// overflow its alignment container.
    pub is_overflow_safe: bool,
}

impl Alignment {
    pub fn new(edge: AxisEdge) -> Self {
        Self {
            edge,
            is_overflow_safe: false,
        }
    }
}

/// The `item-tolerance` policy: how much slack above the true minimum running
/// position still counts as eligible during auto-placement.
///
/// Resolving `normal` takes font metrics this crate does not have access to;
/// embedders that want non-zero `normal` slack pass the resolved length
/// explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ItemTolerance {
    #[default]
    Normal,
    Length(Au),
}

impl ItemTolerance {
    pub fn resolve(self) -> Au {
        match self {
            ItemTolerance::Normal => Au::zero(),
            ItemTolerance::Length(length) => length,
        }
    }
}

/// An item's requested grid-axis placement, before line resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Placement {
    /// Auto-placed, covering the given number of tracks.
    Auto { span_size: u32 },
    /// Both lines specified, as zero-based track indices.
    Definite { start: u32, end: u32 },
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Auto { span_size: 1 }
    }
}

/// A specified margin value; used values come from the box-model resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Margin {
    Auto,
    Length(Au),
    Percentage(f32),
}

impl Default for Margin {
    fn default() -> Self {
        Margin::Length(Au::zero())
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct ItemFlags: u8 {
        /// Absolutely positioned: excluded from placement, registered as an
        /// out-of-flow candidate instead.
        const OUT_OF_FLOW = 1 << 0;
        /// Whether the item's baseline participates in the container's
        /// first/last baseline.
        const PARTICIPATES_IN_BASELINE = 1 << 1;
        /// The item's writing mode is orthogonal to the container's, which
        /// swaps which of its measurements contributes to track sizing.
        const ORTHOGONAL_FLOW = 1 << 2;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemStyle {
    pub placement: Placement,
    pub justify_self: Alignment,
    pub align_self: Alignment,
    pub margin: LogicalSides<Margin>,
    pub flags: ItemFlags,
}

impl ItemStyle {
    pub fn is_out_of_flow(&self) -> bool {
        self.flags.contains(ItemFlags::OUT_OF_FLOW)
    }

    /// Self-alignment along the given axis.
    pub fn alignment(&self, direction: TrackDirection) -> Alignment {
        match direction {
            TrackDirection::Columns => self.justify_self,
            TrackDirection::Rows => self.align_self,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContainerStyle {
    /// The direction masonry tracks are sized in; the other axis is the
    /// stacking axis.
    pub direction: TrackDirection,
    pub track_list: TrackList,
    pub column_gap: Gap,
    pub row_gap: Gap,
    pub item_tolerance: ItemTolerance,
}

impl Default for TrackDirection {
    fn default() -> Self {
        TrackDirection::Columns
    }
}

impl ContainerStyle {
    /// Resolve the gutter between tracks in the given direction.
    pub fn gutter_size(
        &self,
        direction: TrackDirection,
        available_size: LogicalVec2<SizeConstraint>,
    ) -> Au {
        match direction {
            TrackDirection::Columns => self.column_gap.resolve(available_size.inline),
            TrackDirection::Rows => self.row_gap.resolve(available_size.block),
        }
    }
}

#[cfg(test)]
mod tests {
    use app_units::Au;

    use super::{AutoRepeater, RepeatType, TrackList, TrackSize};

    fn list_with_repeater(kind: RepeatType, repeated: Vec<TrackSize>) -> TrackList {
        TrackList {
            leading: vec![TrackSize::Fixed(Au::from_px(10))],
            repeater: Some(AutoRepeater {
                kind,
                tracks: repeated,
            }),
            trailing: vec![TrackSize::Fixed(Au::from_px(20))],
        }
    }

    #[test]
    fn expansion_repeats_the_group() {
        let list = list_with_repeater(RepeatType::AutoFill, vec![TrackSize::Auto]);
        assert_eq!(list.expanded_track_count(3), 5);

        let expanded: Vec<_> = list.expanded(3).collect();
        assert_eq!(expanded.len(), 5);
        assert!(!expanded[0].1);
        assert!(expanded[1].1 && expanded[2].1 && expanded[3].1);
        assert_eq!(expanded[4].0, TrackSize::Fixed(Au::from_px(20)));
    }

    #[test]
    fn auto_fit_range_covers_only_repeated_tracks() {
        let list = list_with_repeater(
            RepeatType::AutoFit,
            vec![TrackSize::Fixed(Au::from_px(5)), TrackSize::Auto],
        );
        assert_eq!(list.auto_fit_track_range(2), Some(1..5));

        let fill = list_with_repeater(RepeatType::AutoFill, vec![TrackSize::Auto]);
        assert_eq!(fill.auto_fit_track_range(2), None);
    }

    #[test]
    fn auto_sized_repeater_detection() {
        let auto = list_with_repeater(RepeatType::AutoFill, vec![TrackSize::Auto]);
        assert!(auto.has_auto_sized_repeater());

        let fixed = list_with_repeater(RepeatType::AutoFill, vec![TrackSize::Fixed(Au::from_px(7))]);
        assert!(!fixed.has_auto_sized_repeater());
    }
}
