/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Grid-axis track bookkeeping: spans, line resolution, and the collection of
//! track ranges ("sets") that the track sizing engine assigns used sizes to.
//! The distribution algorithm itself lives behind [`TrackSizingEngine`]; this
//! module only prepares its input and interprets its output.

use std::ops::Range;

use app_units::Au;
use euclid::num::Zero;
use itertools::izip;
use log::warn;

use crate::SizeConstraint;
use crate::items::VirtualItem;
use crate::sizing::{ContributionType, SizingConstraint};
use crate::style::{ContainerStyle, ItemStyle, Placement, TrackDirection, TrackList, TrackSize};

/// A half-open interval of grid-axis track indices. Indefinite spans know how
/// many tracks they cover but not where; auto-placement resolves them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Span {
    Definite { start: u32, end: u32 },
    Indefinite { span_size: u32 },
}

impl Span {
    pub fn definite(start: u32, end: u32) -> Self {
        debug_assert!(start < end, "grid spans are non-empty");
        Span::Definite { start, end }
    }

    pub fn indefinite(span_size: u32) -> Self {
        debug_assert!(span_size > 0, "grid spans are non-empty");
        Span::Indefinite { span_size }
    }

    pub fn is_definite(&self) -> bool {
        matches!(self, Span::Definite { .. })
    }

    pub fn span_size(&self) -> u32 {
        match *self {
            Span::Definite { start, end } => end - start,
            Span::Indefinite { span_size } => span_size,
        }
    }

    /// The start line. Only valid once placement has produced a definite span.
    pub fn start(&self) -> u32 {
        match *self {
            Span::Definite { start, .. } => start,
            Span::Indefinite { .. } => unreachable!("span is still indefinite"),
        }
    }

    /// The end line. Only valid once placement has produced a definite span.
    pub fn end(&self) -> u32 {
        match *self {
            Span::Definite { end, .. } => end,
            Span::Indefinite { .. } => unreachable!("span is still indefinite"),
        }
    }

    pub fn track_range(&self) -> Range<usize> {
        self.start() as usize..self.end() as usize
    }

    pub fn intersects(&self, range: &Range<u32>) -> bool {
        self.start() < range.end && range.start < self.end()
    }
}

/// Translates items' specified placements into spans over the expanded
/// template. This implementation covers numeric and auto placements; an
/// embedder with named lines resolves those to numeric lines before handing
/// styles to the algorithm.
pub struct LineResolver<'a> {
    style: &'a ContainerStyle,
    auto_repetitions: u32,
}

impl<'a> LineResolver<'a> {
    pub fn new(style: &'a ContainerStyle, auto_repetitions: u32) -> Self {
        Self {
            style,
            auto_repetitions,
        }
    }

    pub fn auto_repetitions(&self) -> u32 {
        self.auto_repetitions
    }

    /// The number of tracks in the implicit grid. A template with no tracks
    /// behaves as a single auto track.
    pub fn track_count(&self) -> u32 {
        self.style
            .track_list
            .expanded_track_count(self.auto_repetitions)
            .max(1)
    }

    /// Translate an item's requested placement into a span over the implicit
    /// grid. Definite placements are clamped to the grid; auto placements keep
    /// only their span size, clamped by whatever consumes them (the requested
    /// size still matters for per-track contribution division).
    pub fn translate_span(&self, item_style: &ItemStyle) -> Span {
        let track_count = self.track_count();
        match item_style.placement {
            Placement::Auto { span_size } => Span::indefinite(span_size.max(1)),
            Placement::Definite { start, end } => {
                debug_assert!(start < end, "grid spans are non-empty");
                let clamped_start = start.min(track_count - 1);
                let clamped_end = end.min(track_count).max(clamped_start + 1);
                if (clamped_start, clamped_end) != (start, end) {
                    warn!("definite span [{start}, {end}) clamped to the {track_count}-track grid");
                }
                Span::definite(clamped_start, clamped_end)
            },
        }
    }
}

/// A contiguous run of template-identical tracks, sized together as one set.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackRange {
    pub start_line: u32,
    pub track_count: u32,
    pub size: TrackSize,
    /// Whether this run came from an empty `auto-fit` repetition and was
    /// collapsed to zero size.
    pub is_collapsed: bool,
    pub from_auto_repeat: bool,
}

impl TrackRange {
    pub fn line_range(&self) -> Range<u32> {
        self.start_line..self.start_line + self.track_count
    }
}

/// The used size the engine assigned to each track of the corresponding range.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TrackSet {
    pub base_size: Au,
}

/// Everything the track sizing engine needs besides the contribution callback.
pub struct TrackSizingInput<'a> {
    pub ranges: &'a [TrackRange],
    pub virtual_items: &'a [VirtualItem],
    pub sizing_constraint: SizingConstraint,
    /// The grid-axis available size, for free-space distribution.
    pub free_space: SizeConstraint,
    pub gutter: Au,
    /// During the initial auto-sized `repeat()` pass the free-space
    /// distribution steps are skipped, so base sizes reflect pure intrinsic
    /// sizing.
    pub skip_free_space_distribution: bool,
}

/// The external multi-pass track-size distribution algorithm, shared with
/// ordinary grid layout. Must assign a finite base size to every range;
/// collapsed ranges must be assigned zero.
pub trait TrackSizingEngine {
    fn compute_used_sizes(
        &self,
        input: &TrackSizingInput,
        contribution: &dyn Fn(ContributionType, &VirtualItem) -> Au,
    ) -> Vec<TrackSet>;
}

/// Build the set ranges for one sizing pass: expand the template, collapse
/// empty `auto-fit` repetitions, and split runs at the span boundaries of the
/// virtual items so that every span starts and ends on a range edge.
pub(crate) fn build_track_ranges(
    track_list: &TrackList,
    auto_repetitions: u32,
    virtual_items: &[VirtualItem],
    collapse_auto_fit: bool,
) -> Vec<TrackRange> {
    let mut tracks: Vec<(TrackSize, bool)> = track_list.expanded(auto_repetitions).collect();
    if tracks.is_empty() {
        // A template with no tracks behaves as a single auto track.
        tracks.push((TrackSize::Auto, false));
    }
    let track_count = tracks.len();

    let mut covered = vec![false; track_count];
    let mut is_boundary = vec![false; track_count];
    for item in virtual_items {
        let range = item.span.track_range();
        is_boundary[range.start] = true;
        if range.end < track_count {
            is_boundary[range.end] = true;
        }
        for track in &mut covered[range] {
            *track = true;
        }
    }

    let mut collapsed = vec![false; track_count];
    if collapse_auto_fit {
        if let Some(auto_fit) = track_list.auto_fit_track_range(auto_repetitions) {
            for index in auto_fit {
                collapsed[index as usize] = !covered[index as usize];
            }
        }
    }

    let mut ranges: Vec<TrackRange> = Vec::new();
    for (index, &(size, from_auto_repeat)) in tracks.iter().enumerate() {
        let starts_new_range = match ranges.last() {
            None => true,
            Some(range) => {
                is_boundary[index] ||
                    range.size != size ||
                    range.from_auto_repeat != from_auto_repeat ||
                    range.is_collapsed != collapsed[index]
            },
        };
        if starts_new_range {
            ranges.push(TrackRange {
                start_line: index as u32,
                track_count: 1,
                size,
                is_collapsed: collapsed[index],
                from_auto_repeat,
            });
        } else if let Some(range) = ranges.last_mut() {
            range.track_count += 1;
        }
    }
    ranges
}

/// The sized grid-axis tracks of one pass, with finalized geometry.
pub struct TrackCollection {
    direction: TrackDirection,
    gutter: Au,
    ranges: Vec<TrackRange>,
    sets: Vec<TrackSet>,
    track_sizes: Vec<Au>,
    track_offsets: Vec<Au>,
    collapsed_track_indexes: Vec<u32>,
}

impl TrackCollection {
    pub(crate) fn new(
        direction: TrackDirection,
        gutter: Au,
        ranges: Vec<TrackRange>,
        sets: Vec<TrackSet>,
    ) -> Self {
        assert_eq!(
            ranges.len(),
            sets.len(),
            "the track sizing engine must size every range"
        );

        let mut track_sizes = Vec::new();
        let mut collapsed_track_indexes = Vec::new();
        for (range, set) in izip!(&ranges, &sets) {
            for line in range.line_range() {
                track_sizes.push(if range.is_collapsed {
                    Au::zero()
                } else {
                    set.base_size
                });
                if range.is_collapsed {
                    collapsed_track_indexes.push(line);
                }
            }
        }

        Self {
            direction,
            gutter,
            ranges,
            sets,
            track_sizes,
            track_offsets: Vec::new(),
            collapsed_track_indexes,
        }
    }

    pub fn direction(&self) -> TrackDirection {
        self.direction
    }

    pub fn gutter(&self) -> Au {
        self.gutter
    }

    /// The end line of the implicit grid, i.e. the number of tracks.
    pub fn track_count(&self) -> u32 {
        self.track_sizes.len() as u32
    }

    pub fn collapsed_track_indexes(&self) -> &[u32] {
        &self.collapsed_track_indexes
    }

    /// The base size the engine assigned to the auto-sized `repeat()` track,
    /// used to resolve the real repetition count on the second pass.
    pub fn auto_sized_repeater_base_size(&self) -> Option<Au> {
        izip!(&self.ranges, &self.sets)
            .find(|(range, _)| range.from_auto_repeat && !range.size.is_definite())
            .map(|(_, set)| set.base_size)
    }

    /// Assign each track its final offset, starting from `start_offset`
    /// (border/scrollbar/padding start). Collapsed tracks occupy no size and
    /// contribute no gutter.
    pub(crate) fn finalize_set_geometry(&mut self, start_offset: Au) {
        let mut position = start_offset;
        self.track_offsets.clear();
        for (index, size) in self.track_sizes.iter().enumerate() {
            self.track_offsets.push(position);
            if !self.collapsed_track_indexes.contains(&(index as u32)) {
                position += *size + self.gutter;
            }
        }
    }

    /// The total extent of all tracks, gutters included, ignoring collapsed
    /// tracks. This is the intrinsic size of the container in the grid axis.
    pub fn set_span_size(&self) -> Au {
        let non_collapsed =
            self.track_count() as i32 - self.collapsed_track_indexes.len() as i32;
        let size_sum = self
            .track_sizes
            .iter()
            .fold(Au::zero(), |sum, size| sum + *size);
        size_sum + self.gutter * (non_collapsed - 1).max(0)
    }

    pub fn track_sizes(&self) -> &[Au] {
        &self.track_sizes
    }

    /// Per-track start offsets. Empty until geometry is finalized.
    pub fn track_offsets(&self) -> &[Au] {
        &self.track_offsets
    }

    pub fn is_collapsed(&self, track_index: u32) -> bool {
        self.collapsed_track_indexes.contains(&track_index)
    }

    /// The start offset and size of the extent covered by `span`, internal
    /// gutters included.
    pub fn span_extent(&self, span: Span) -> (Au, Au) {
        debug_assert!(
            !self.track_offsets.is_empty(),
            "track geometry queried before it was finalized"
        );
        let range = span.track_range();
        assert!(range.end <= self.track_sizes.len(), "span outside the grid");
        let start = self.track_offsets[range.start];
        let end = self.track_offsets[range.end - 1] + self.track_sizes[range.end - 1];
        (start, end - start)
    }
}

/// The two-pass auto-sized `repeat()` resolution, as an explicit state
/// machine. `InitialSizing` exists only when the template contains an
/// auto-sized repeater whose repetition count depends on its own sized track.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SizingPhase {
    InitialSizing,
    ResolvedSizing,
}

impl SizingPhase {
    pub(crate) fn for_track_list(track_list: &TrackList) -> Self {
        if track_list.has_auto_sized_repeater() {
            SizingPhase::InitialSizing
        } else {
            SizingPhase::ResolvedSizing
        }
    }

    pub(crate) fn needs_auto_track_size(self) -> bool {
        self == SizingPhase::InitialSizing
    }
}

#[cfg(test)]
mod tests {
    use app_units::Au;
    use euclid::num::Zero;

    use super::{Span, TrackCollection, TrackRange, TrackSet, build_track_ranges};
    use crate::items::VirtualItem;
    use crate::sizing::ContentSizes;
    use crate::style::{AutoRepeater, RepeatType, TrackDirection, TrackList, TrackSize};

    fn px(value: i32) -> Au {
        Au::from_px(value)
    }

    fn virtual_item(start: u32, end: u32) -> VirtualItem {
        VirtualItem {
            span: Span::definite(start, end),
            contribution_sizes: ContentSizes::zero(),
        }
    }

    fn fixed_list(sizes: &[i32]) -> TrackList {
        TrackList {
            leading: sizes.iter().map(|size| TrackSize::Fixed(px(*size))).collect(),
            repeater: None,
            trailing: Vec::new(),
        }
    }

    #[test]
    fn ranges_split_at_item_boundaries() {
        let list = fixed_list(&[100, 100, 100, 100]);
        let items = [virtual_item(1, 3)];
        let ranges = build_track_ranges(&list, 0, &items, false);
        let boundaries: Vec<_> = ranges.iter().map(|range| range.start_line).collect();
        assert_eq!(boundaries, [0, 1, 3]);
        assert_eq!(ranges.iter().map(|range| range.track_count).sum::<u32>(), 4);
    }

    #[test]
    fn empty_template_behaves_as_single_auto_track() {
        let ranges = build_track_ranges(&TrackList::default(), 0, &[], false);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].size, TrackSize::Auto);
        assert_eq!(ranges[0].track_count, 1);
    }

    #[test]
    fn auto_fit_collapses_uncovered_repetitions() {
        let list = TrackList {
            leading: Vec::new(),
            repeater: Some(AutoRepeater {
                kind: RepeatType::AutoFit,
                tracks: vec![TrackSize::Fixed(px(50))],
            }),
            trailing: Vec::new(),
        };
        let items = [virtual_item(0, 1), virtual_item(2, 3)];
        let ranges = build_track_ranges(&list, 4, &items, true);
        let collapsed: Vec<_> = ranges
            .iter()
            .flat_map(|range| range.line_range().map(|_| range.is_collapsed))
            .collect();
        assert_eq!(collapsed, [false, true, false, true]);

        // Without collapsing (the initial auto-repeat pass), nothing is
        // marked collapsed.
        let ranges = build_track_ranges(&list, 4, &items, false);
        assert!(ranges.iter().all(|range| !range.is_collapsed));
    }

    fn collection_with_sizes(sizes: &[i32], gutter: i32) -> TrackCollection {
        let ranges: Vec<_> = sizes
            .iter()
            .enumerate()
            .map(|(index, size)| TrackRange {
                start_line: index as u32,
                track_count: 1,
                size: TrackSize::Fixed(px(*size)),
                is_collapsed: false,
                from_auto_repeat: false,
            })
            .collect();
        let sets = sizes.iter().map(|size| TrackSet { base_size: px(*size) }).collect();
        let mut collection =
            TrackCollection::new(TrackDirection::Columns, px(gutter), ranges, sets);
        collection.finalize_set_geometry(Au::zero());
        collection
    }

    #[test]
    fn geometry_accumulates_gutters() {
        let collection = collection_with_sizes(&[100, 150, 50], 10);
        assert_eq!(collection.set_span_size(), px(320));
        assert_eq!(collection.span_extent(Span::definite(0, 1)), (px(0), px(100)));
        assert_eq!(collection.span_extent(Span::definite(1, 2)), (px(110), px(150)));
        assert_eq!(collection.span_extent(Span::definite(1, 3)), (px(110), px(210)));
    }

    #[test]
    fn collapsed_tracks_occupy_no_space() {
        let ranges = vec![
            TrackRange {
                start_line: 0,
                track_count: 1,
                size: TrackSize::Fixed(px(100)),
                is_collapsed: false,
                from_auto_repeat: false,
            },
            TrackRange {
                start_line: 1,
                track_count: 1,
                size: TrackSize::Fixed(px(100)),
                is_collapsed: true,
                from_auto_repeat: true,
            },
            TrackRange {
                start_line: 2,
                track_count: 1,
                size: TrackSize::Fixed(px(100)),
                is_collapsed: false,
                from_auto_repeat: true,
            },
        ];
        let sets = vec![TrackSet { base_size: px(100) }; 3];
        let mut collection =
            TrackCollection::new(TrackDirection::Columns, px(10), ranges, sets);
        collection.finalize_set_geometry(Au::zero());

        assert_eq!(collection.collapsed_track_indexes(), [1]);
        assert_eq!(collection.set_span_size(), px(210));
        assert_eq!(collection.span_extent(Span::definite(2, 3)), (px(110), px(100)));
        assert_eq!(collection.span_extent(Span::definite(1, 2)).1, Au::zero());
    }
}
