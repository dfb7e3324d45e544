/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The masonry layout algorithm: drives line resolution, virtual item
//! building, track sizing, and item placement for the two public operations —
//! full layout and intrinsic inline-size measurement.
//!
//! <https://drafts.csswg.org/css-grid-3/#masonry-layout-algorithm>

use app_units::Au;
use euclid::num::Zero;
use itertools::izip;
use log::{debug, warn};

use crate::fragment::{
    BaselineAccumulator, Baselines, ItemFragment, MasonryFragment, OutOfFlowCandidate,
    StaticPositionEdge, TrackGeometry, TrackGeometryEntry,
};
use crate::geom::{LogicalRect, LogicalSides, LogicalVec2};
use crate::items::{self, MasonryItem, VirtualItem};
use crate::running_positions::RunningPositions;
use crate::sizing::{
    ContentSizes, ContributionType, InlineContentSizesResult, SizingConstraint,
};
use crate::style::{AxisEdge, ContainerStyle, ItemFlags, TrackDirection, TrackSize};
use crate::track::{
    LineResolver, SizingPhase, Span, TrackCollection, TrackSet, TrackSizingEngine,
    TrackSizingInput, build_track_ranges,
};
use crate::{
    CacheSlot, ConstraintSpace, MasonryChild, ResolveBoxModel, SizeConstraint,
};

/// One invocation of masonry layout for a single container. The algorithm
/// holds only borrowed, immutable inputs; every pass produces fresh result
/// values.
pub struct MasonryLayoutAlgorithm<'a> {
    style: &'a ContainerStyle,
    children: &'a [MasonryChild<'a>],
    track_sizing_engine: &'a dyn TrackSizingEngine,
    box_model: &'a dyn ResolveBoxModel,
    masonry_available_size: LogicalVec2<SizeConstraint>,
    border_scrollbar_padding: LogicalSides<Au>,
}

/// What one placement pass produces. Running positions are threaded through
/// as a value so that each pass owns its own instance.
struct PlacementResult {
    running_positions: RunningPositions,
    baselines: Baselines,
    fragments: Vec<ItemFragment>,
}

impl<'a> MasonryLayoutAlgorithm<'a> {
    pub fn new(
        style: &'a ContainerStyle,
        children: &'a [MasonryChild<'a>],
        track_sizing_engine: &'a dyn TrackSizingEngine,
        box_model: &'a dyn ResolveBoxModel,
        masonry_available_size: LogicalVec2<SizeConstraint>,
        border_scrollbar_padding: LogicalSides<Au>,
    ) -> Self {
        Self {
            style,
            children,
            track_sizing_engine,
            box_model,
            masonry_available_size,
            border_scrollbar_padding,
        }
    }

    pub(crate) fn style(&self) -> &ContainerStyle {
        self.style
    }

    pub(crate) fn children(&self) -> &[MasonryChild<'a>] {
        self.children
    }

    pub(crate) fn gutter_size(&self, direction: TrackDirection) -> Au {
        self.style.gutter_size(direction, self.masonry_available_size)
    }

    fn stacking_direction(&self) -> TrackDirection {
        match self.style.direction {
            TrackDirection::Columns => TrackDirection::Rows,
            TrackDirection::Rows => TrackDirection::Columns,
        }
    }

    pub(crate) fn compute_margins(
        &self,
        space: &ConstraintSpace,
        child_index: usize,
    ) -> LogicalSides<Au> {
        self.box_model
            .compute_margins(space, &self.children[child_index].style)
    }

    /// Compute the container's min-content and max-content inline sizes by
    /// running the pipeline in measurement mode, once per constraint.
    ///
    /// When columns are the grid axis, track sizing alone determines the
    /// inline size; when rows are, items have to be placed to find how far
    /// the stacking (inline) axis extends.
    pub fn compute_min_max_sizes(&self) -> InlineContentSizesResult {
        let compute_intrinsic_inline_size = |sizing_constraint: SizingConstraint| -> Au {
            let mut masonry_items = None;
            let track_collection =
                self.compute_grid_axis_tracks(sizing_constraint, &mut masonry_items, None);

            if self.style.direction == TrackDirection::Columns {
                return track_collection.set_span_size();
            }

            let mut masonry_items = masonry_items.unwrap_or_default();
            if masonry_items.is_empty() {
                return Au::zero();
            }

            let running_positions = RunningPositions::new(
                track_collection.track_count(),
                Au::zero(),
                self.style.item_tolerance.resolve(),
                track_collection.collapsed_track_indexes().to_vec(),
            );
            let placement = self.place_masonry_items(
                &track_collection,
                &mut masonry_items,
                running_positions,
                sizing_constraint,
            );

            // The stacking-axis gap is added to the running position after
            // every placed item; the very last addition has no item after it
            // and is removed here.
            let stacking_axis_gap = self.gutter_size(TrackDirection::Columns);
            let full_span = Span::definite(0, track_collection.track_count());
            placement
                .running_positions
                .get_max_position_for_span(full_span) -
                stacking_axis_gap
        };

        let mut sizes = ContentSizes {
            min_content: compute_intrinsic_inline_size(SizingConstraint::MinContent),
            max_content: compute_intrinsic_inline_size(SizingConstraint::MaxContent),
        };
        sizes += self.border_scrollbar_padding.inline_sum();

        InlineContentSizesResult {
            sizes,
            depends_on_block_constraints: false,
        }
    }

    /// Run the full pipeline in real layout mode and produce the container's
    /// fragment.
    pub fn layout(&self) -> MasonryFragment {
        let mut masonry_items = None;
        let mut out_of_flow_children = Vec::new();
        let track_collection = self.compute_grid_axis_tracks(
            SizingConstraint::Layout,
            &mut masonry_items,
            Some(&mut out_of_flow_children),
        );
        let mut masonry_items = masonry_items.unwrap_or_default();
        debug!(
            "laying out {} masonry items over {} tracks",
            masonry_items.len(),
            track_collection.track_count()
        );

        let is_for_columns = self.style.direction == TrackDirection::Columns;
        let mut fragments = Vec::new();
        let mut baselines = Baselines::default();
        let intrinsic_block_size = if masonry_items.is_empty() {
            if is_for_columns {
                Au::zero()
            } else {
                track_collection.set_span_size()
            }
        } else {
            let running_positions = RunningPositions::new(
                track_collection.track_count(),
                Au::zero(),
                self.style.item_tolerance.resolve(),
                track_collection.collapsed_track_indexes().to_vec(),
            );
            let placement = self.place_masonry_items(
                &track_collection,
                &mut masonry_items,
                running_positions,
                SizingConstraint::Layout,
            );
            baselines = placement.baselines;

            let intrinsic_block_size = if is_for_columns {
                // Remove the trailing stacking-axis gap; no item follows it.
                let stacking_axis_gap = self.gutter_size(TrackDirection::Rows);
                let full_span = Span::definite(0, track_collection.track_count());
                placement
                    .running_positions
                    .get_max_position_for_span(full_span) -
                    stacking_axis_gap
            } else {
                track_collection.set_span_size()
            };
            fragments = placement.fragments;
            intrinsic_block_size
        };

        // Register children excluded from placement for the external abs-pos
        // machinery.
        let out_of_flow_candidates = out_of_flow_children
            .into_iter()
            .map(|child_index| OutOfFlowCandidate {
                child_index,
                static_position: self.border_scrollbar_padding.start_offset(),
                inline_edge: StaticPositionEdge::Start,
                block_edge: StaticPositionEdge::Start,
            })
            .collect();

        // Transfer the final track geometry for introspection tooling.
        let tracks = izip!(
            track_collection.track_offsets(),
            track_collection.track_sizes()
        )
        .enumerate()
        .map(|(index, (offset, size))| TrackGeometryEntry {
            offset: *offset,
            size: *size,
            is_collapsed: track_collection.is_collapsed(index as u32),
        })
        .collect();

        MasonryFragment {
            block_size: intrinsic_block_size + self.border_scrollbar_padding.block_sum(),
            intrinsic_block_size,
            items: fragments,
            baselines,
            track_geometry: TrackGeometry {
                direction: self.style.direction,
                gutter: track_collection.gutter(),
                tracks,
            },
            out_of_flow_candidates,
        }
    }

    /// Build and size the grid-axis tracks, resolving an auto-sized
    /// `repeat()` with the bounded two-pass state machine: an initial sizing
    /// round over a single repetition finds the auto track's size, and the
    /// resolved round re-runs the line resolver and track sizing with the
    /// repetition count that size implies.
    ///
    /// <https://www.w3.org/TR/css-grid-3/#masonry-intrinsic-repeat>
    fn compute_grid_axis_tracks(
        &self,
        sizing_constraint: SizingConstraint,
        masonry_items: &mut Option<Vec<MasonryItem>>,
        mut out_of_flow_children: Option<&mut Vec<usize>>,
    ) -> TrackCollection {
        let mut phase = SizingPhase::for_track_list(&self.style.track_list);
        let mut auto_repeat_track_size = None;
        let mut resolution_rounds = 0;
        loop {
            resolution_rounds += 1;
            assert!(
                resolution_rounds <= 2,
                "auto-sized repeat resolution is bounded to two rounds"
            );

            let auto_repetitions = match phase {
                SizingPhase::InitialSizing => 1,
                SizingPhase::ResolvedSizing => {
                    self.compute_automatic_repetitions(auto_repeat_track_size)
                },
            };
            let line_resolver = LineResolver::new(self.style, auto_repetitions);

            // Items are constructed once; the second round only re-evaluates
            // their spans against the corrected resolver.
            match masonry_items {
                None => {
                    *masonry_items = Some(items::construct_masonry_items(
                        self,
                        &line_resolver,
                        out_of_flow_children.as_deref_mut(),
                    ));
                },
                Some(existing) => items::adjust_item_spans(self, &line_resolver, existing),
            }
            let items = masonry_items.as_deref().unwrap_or_default();

            let track_collection =
                self.build_grid_axis_tracks(&line_resolver, items, sizing_constraint, phase);

            match phase {
                SizingPhase::InitialSizing => {
                    let base_size = track_collection
                        .auto_sized_repeater_base_size()
                        .expect("initial sizing requires an auto-sized repeat track");
                    assert!(
                        track_collection.collapsed_track_indexes().is_empty(),
                        "no track may collapse while the repeat track is being sized"
                    );
                    debug!("auto-sized repeat track sized to {base_size:?}; re-running");
                    auto_repeat_track_size = Some(base_size);
                    phase = SizingPhase::ResolvedSizing;
                },
                SizingPhase::ResolvedSizing => return track_collection,
            }
        }
    }

    /// One track sizing round: virtual items, set ranges, the external
    /// engine, and finalized geometry.
    fn build_grid_axis_tracks(
        &self,
        line_resolver: &LineResolver,
        masonry_items: &[MasonryItem],
        sizing_constraint: SizingConstraint,
        phase: SizingPhase,
    ) -> TrackCollection {
        let needs_auto_track_size = phase.needs_auto_track_size();
        let virtual_items = items::build_virtual_items(
            self,
            line_resolver,
            masonry_items,
            needs_auto_track_size,
            sizing_constraint,
        );
        let ranges = build_track_ranges(
            &self.style.track_list,
            line_resolver.auto_repetitions(),
            &virtual_items,
            !needs_auto_track_size,
        );

        let direction = self.style.direction;
        let gutter = self.gutter_size(direction);
        let sets = if ranges.iter().any(|range| !range.size.is_definite()) {
            let free_space = match direction {
                TrackDirection::Columns => self.masonry_available_size.inline,
                TrackDirection::Rows => self.masonry_available_size.block,
            };
            self.track_sizing_engine.compute_used_sizes(
                &TrackSizingInput {
                    ranges: &ranges,
                    virtual_items: &virtual_items,
                    sizing_constraint,
                    free_space,
                    gutter,
                    skip_free_space_distribution: needs_auto_track_size,
                },
                &contribution_size_for_virtual_item,
            )
        } else {
            // Every track is definite; no engine round is needed.
            ranges
                .iter()
                .map(|range| TrackSet {
                    base_size: match range.size {
                        TrackSize::Fixed(size) => size,
                        TrackSize::Auto | TrackSize::Flex(_) => unreachable!(),
                    },
                })
                .collect()
        };

        let start_offset = match direction {
            TrackDirection::Columns => self.border_scrollbar_padding.inline_start,
            TrackDirection::Rows => self.border_scrollbar_padding.block_start,
        };
        let mut track_collection = TrackCollection::new(direction, gutter, ranges, sets);
        track_collection.finalize_set_geometry(start_offset);
        track_collection
    }

    /// <https://drafts.csswg.org/css-grid-2/#auto-repeat>
    fn compute_automatic_repetitions(&self, auto_repeat_track_size: Option<Au>) -> u32 {
        let track_list = &self.style.track_list;
        let Some(repeater) = &track_list.repeater else {
            return 0;
        };

        let direction = self.style.direction;
        let gutter = self.gutter_size(direction);
        let available = match direction {
            TrackDirection::Columns => self.masonry_available_size.inline,
            TrackDirection::Rows => self.masonry_available_size.block,
        };
        // With an indefinite grid-axis size the template repeats once.
        let Some(available) = available.to_definite() else {
            return 1;
        };

        let track_size = |track: &TrackSize| match track {
            TrackSize::Fixed(size) => *size,
            TrackSize::Auto | TrackSize::Flex(_) => auto_repeat_track_size
                .expect("auto-sized repeat tracks are sized by the initial round"),
        };

        // Size of one repetition, counting one gutter per repeated track.
        let repetition_size = repeater
            .tracks
            .iter()
            .fold(Au::zero(), |sum, track| sum + track_size(track) + gutter);
        if repetition_size <= Au::zero() {
            return 1;
        }

        // The non-repeated tracks and their gutters use up space first. Only
        // definite tracks count; intrinsic tracks outside the repeat take
        // whatever is left after repetitions are chosen.
        let fixed_tracks_size = track_list
            .leading
            .iter()
            .chain(track_list.trailing.iter())
            .fold(Au::zero(), |sum, track| {
                sum + match track {
                    TrackSize::Fixed(size) => *size + gutter,
                    TrackSize::Auto | TrackSize::Flex(_) => gutter,
                }
            });

        // One gutter fewer than tracks: solve
        // fixed + n * repetition - gutter <= available.
        let remaining = available - fixed_tracks_size + gutter;
        ((remaining.0 / repetition_size.0).max(1)) as u32
    }

    /// Place every item, in item order, against the sized tracks.
    fn place_masonry_items(
        &self,
        track_collection: &TrackCollection,
        masonry_items: &mut [MasonryItem],
        mut running_positions: RunningPositions,
        sizing_constraint: SizingConstraint,
    ) -> PlacementResult {
        let is_for_layout = sizing_constraint.is_layout();
        let direction = track_collection.direction();
        let is_for_columns = direction == TrackDirection::Columns;
        let stacking_axis_gap = self.gutter_size(self.stacking_direction());
        let border_scrollbar_padding = &self.border_scrollbar_padding;

        let mut baseline_accumulator = BaselineAccumulator::default();
        let mut fragments = Vec::with_capacity(masonry_items.len());

        for masonry_item in masonry_items.iter_mut() {
            // Find the definite span the item is placed in, resolving
            // indefinite spans against the running positions and cursor.
            let (item_span, max_position) = match masonry_item.span {
                Span::Indefinite { span_size } => {
                    let track_count = running_positions.track_count();
                    if span_size > track_count {
                        warn!(
                            "auto-placed item spanning {span_size} tracks clamped to the \
                             {track_count}-track grid"
                        );
                    }
                    let (span, position) =
                        running_positions.get_first_eligible_line(span_size.min(track_count));
                    masonry_item.span = span;
                    (span, position)
                },
                span @ Span::Definite { .. } => {
                    (span, running_positions.get_max_position_for_span(span))
                },
            };
            running_positions.update_auto_placement_cursor(item_span.end());

            let child = &self.children[masonry_item.child_index];
            let (grid_axis_offset, grid_axis_size) = track_collection.span_extent(item_span);

            let space = if is_for_layout {
                self.create_constraint_space_for_layout(grid_axis_size)
            } else {
                // Measurement mode: measure the item under a fixed inline
                // size equal to its own contribution.
                let measure_space = self.create_constraint_space_for_measure(false, None, true);
                let contribution = child.node.min_max_contribution(&measure_space);
                let fixed_inline_size = sizing_constraint.pick_content_size(contribution);
                self.create_constraint_space_for_measure(false, Some(fixed_inline_size), true)
            };

            let result = child.node.layout(&space);
            let margins = self.compute_margins(&space, masonry_item.child_index);

            // Self-alignment applies in the grid axis only; the stacking axis
            // packs to start (upstream discussion may change this).
            let alignment = child.style.alignment(direction);
            let (grid_axis_item_size, grid_margin_start, grid_margin_end) = if is_for_columns {
                (result.size.inline, margins.inline_start, margins.inline_end)
            } else {
                (result.size.block, margins.block_start, margins.block_end)
            };
            let grid_alignment_offset = alignment_offset(
                grid_axis_size,
                grid_axis_item_size,
                grid_margin_start,
                grid_margin_end,
                alignment.edge,
                alignment.is_overflow_safe,
            );

            // The item starts below the maximum running position among its
            // spanned tracks; border, scrollbar, and padding only shift the
            // stacking axis, since track offsets already include them.
            let offset = if is_for_columns {
                LogicalVec2 {
                    inline: grid_axis_offset + grid_alignment_offset,
                    block: max_position +
                        border_scrollbar_padding.block_start +
                        margins.block_start,
                }
            } else {
                LogicalVec2 {
                    inline: max_position +
                        border_scrollbar_padding.inline_start +
                        margins.inline_start,
                    block: grid_axis_offset + grid_alignment_offset,
                }
            };

            // Advance the spanned tracks past the item's margin box and the
            // stacking-axis gap.
            let stacking_axis_extent = if is_for_columns {
                result.size.block + margins.block_sum()
            } else {
                result.size.inline + margins.inline_sum()
            };
            running_positions.update_running_positions_for_span(
                item_span,
                max_position + stacking_axis_gap + stacking_axis_extent,
            );

            let participates_in_baseline = child
                .style
                .flags
                .contains(ItemFlags::PARTICIPATES_IN_BASELINE);
            baseline_accumulator.accumulate(
                result
                    .baselines
                    .first
                    .filter(|_| participates_in_baseline)
                    .map(|baseline| offset.block + baseline),
            );

            fragments.push(ItemFragment {
                child_index: masonry_item.child_index,
                span: item_span,
                rect: LogicalRect {
                    start_corner: offset,
                    size: result.size,
                },
                margin: margins,
            });
        }

        PlacementResult {
            running_positions,
            baselines: baseline_accumulator.finish(),
            fragments,
        }
    }

    fn create_constraint_space(
        &self,
        containing_size: LogicalVec2<SizeConstraint>,
        fixed_available_size: LogicalVec2<Option<Au>>,
        cache_slot: CacheSlot,
        percentage_resolution_size: Option<LogicalVec2<SizeConstraint>>,
    ) -> ConstraintSpace {
        let mut available_size = containing_size;
        let mut is_fixed_inline_size = false;
        let mut is_fixed_block_size = false;
        if let Some(inline) = fixed_available_size.inline {
            available_size.inline = SizeConstraint::Definite(inline);
            is_fixed_inline_size = true;
        }
        if let Some(block) = fixed_available_size.block {
            available_size.block = SizeConstraint::Definite(block);
            is_fixed_block_size = true;
        }
        ConstraintSpace {
            available_size,
            percentage_resolution_size: percentage_resolution_size.unwrap_or(containing_size),
            is_fixed_inline_size,
            is_fixed_block_size,
            cache_slot,
        }
    }

    /// The space an item is laid out in for real: its grid-axis extent comes
    /// from the sized sets, the stacking axis is determined by its content.
    fn create_constraint_space_for_layout(&self, grid_axis_size: Au) -> ConstraintSpace {
        let mut containing_size = self.masonry_available_size;
        match self.style.direction {
            TrackDirection::Columns => {
                containing_size.inline = SizeConstraint::Definite(grid_axis_size)
            },
            TrackDirection::Rows => {
                containing_size.block = SizeConstraint::Definite(grid_axis_size)
            },
        }
        self.create_constraint_space(
            containing_size,
            LogicalVec2 {
                inline: None,
                block: None,
            },
            CacheSlot::Layout,
            None,
        )
    }

    /// The space an item is measured in. The grid axis is indefinite (its
    /// size is what measurement determines); `opt_fixed_inline_size` forces a
    /// used inline size when measuring under a known contribution.
    pub(crate) fn create_constraint_space_for_measure(
        &self,
        needs_auto_track_size: bool,
        opt_fixed_inline_size: Option<Au>,
        is_for_min_max_sizing: bool,
    ) -> ConstraintSpace {
        let mut containing_size = self.masonry_available_size;
        match self.style.direction {
            TrackDirection::Columns => containing_size.inline = SizeConstraint::Indefinite,
            TrackDirection::Rows => {
                if is_for_min_max_sizing {
                    // Let text flow to its preferred measure while the inline
                    // (stacking) extent is what is being determined.
                    containing_size.inline = SizeConstraint::Indefinite;
                }
                containing_size.block = SizeConstraint::Indefinite;
            },
        }

        // While determining the size of an auto track inside an auto
        // `repeat()`, percentages resolve against the container.
        let percentage_resolution_size =
            needs_auto_track_size.then_some(self.masonry_available_size);

        self.create_constraint_space(
            containing_size,
            LogicalVec2 {
                inline: opt_fixed_inline_size,
                block: None,
            },
            CacheSlot::Measure,
            percentage_resolution_size,
        )
    }

    /// A child's measured extent along the container's block axis, laying the
    /// child out in measurement mode. Used for contributions that cannot be
    /// answered by the inline min/max pair.
    pub(crate) fn compute_item_block_contribution(
        &self,
        child_index: usize,
        sizing_constraint: SizingConstraint,
        needs_auto_track_size: bool,
    ) -> Au {
        let child = &self.children[child_index];
        let space = self.create_constraint_space_for_measure(needs_auto_track_size, None, false);
        if space.available_size.inline.is_definite() {
            return child.node.layout(&space).size.block;
        }

        // Resolving against an indefinite inline size: measure under the
        // item's own min-content or max-content contribution instead.
        let contribution = child.node.min_max_contribution(&space);
        let fixed_inline_size = sizing_constraint.pick_content_size(contribution);
        let fallback_space = self.create_constraint_space_for_measure(
            needs_auto_track_size,
            Some(fixed_inline_size),
            false,
        );
        child.node.layout(&fallback_space).size.block
    }
}

/// The contribution callback handed to the track sizing engine: virtual items
/// only carry their min/max envelope, so every contribution type collapses to
/// one of its two components.
fn contribution_size_for_virtual_item(
    contribution_type: ContributionType,
    virtual_item: &VirtualItem,
) -> Au {
    match contribution_type {
        ContributionType::ForContentBasedMinimums |
        ContributionType::ForIntrinsicMinimums |
        ContributionType::ForIntrinsicMaximums => virtual_item.contribution_sizes.min_content,
        ContributionType::ForMaxContentMinimums |
        ContributionType::ForMaxContentMaximums => virtual_item.contribution_sizes.max_content,
        ContributionType::ForFreeSpace => {
            unreachable!("free space distribution never queries item contributions")
        },
    }
}

/// Offset of an item within its alignment container along one axis.
/// `Stretch` behaves as `Start` here; stretching itself happens through the
/// item's constraint space. With the `safe` flag, an overflowing item falls
/// back to start alignment.
fn alignment_offset(
    available_size: Au,
    item_size: Au,
    margin_start: Au,
    margin_end: Au,
    edge: AxisEdge,
    is_overflow_safe: bool,
) -> Au {
    let free_space = available_size - item_size - margin_start - margin_end;
    let edge = if is_overflow_safe && free_space < Au::zero() {
        AxisEdge::Start
    } else {
        edge
    };
    match edge {
        AxisEdge::Start | AxisEdge::Stretch => margin_start,
        AxisEdge::Center => margin_start + free_space / 2,
        AxisEdge::End => margin_start + free_space,
    }
}

#[cfg(test)]
mod tests {
    use app_units::Au;
    use euclid::num::Zero;

    use super::alignment_offset;
    use crate::style::AxisEdge;

    fn px(value: i32) -> Au {
        Au::from_px(value)
    }

    #[test]
    fn alignment_offsets() {
        // 100px of space, a 60px item, margins 5/15: 20px of free space.
        let offset = |edge, safe| alignment_offset(px(100), px(60), px(5), px(15), edge, safe);
        assert_eq!(offset(AxisEdge::Start, false), px(5));
        assert_eq!(offset(AxisEdge::Stretch, false), px(5));
        assert_eq!(offset(AxisEdge::Center, false), px(15));
        assert_eq!(offset(AxisEdge::End, false), px(25));
    }

    #[test]
    fn overflow_safe_falls_back_to_start() {
        let offset =
            |edge, safe| alignment_offset(px(50), px(60), Au::zero(), Au::zero(), edge, safe);
        assert_eq!(offset(AxisEdge::End, false), px(-10));
        assert_eq!(offset(AxisEdge::End, true), Au::zero());
        assert_eq!(offset(AxisEdge::Center, true), Au::zero());
    }
}
