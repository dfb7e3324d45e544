/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Masonry items and the virtual items synthesized from them for track
//! sizing. Virtual items bound the cost of the track sizing algorithm: one
//! contribution envelope per distinct (span, grid-axis alignment) group
//! instead of one evaluation per item.

use app_units::Au;
use euclid::num::Zero;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::layout::MasonryLayoutAlgorithm;
use crate::sizing::{ContentSizes, SizingConstraint};
use crate::style::{Alignment, ItemFlags, TrackDirection};
use crate::track::{LineResolver, Span};

/// One in-flow child of the masonry container. Items live in a single
/// contiguous sequence per invocation; groups and fragments refer to them by
/// index.
#[derive(Clone, Debug)]
pub struct MasonryItem {
    /// Index of the originating child in the container's child list.
    pub child_index: usize,
    /// The requested span, translated by the line resolver. Auto-placement
    /// replaces indefinite spans with definite ones during placement.
    pub span: Span,
}

/// Build the item sequence from the container's children. Out-of-flow
/// children never become items; when `out_of_flow_children` is supplied
/// (layout mode) their child indices are collected for candidate
/// registration.
pub(crate) fn construct_masonry_items(
    algorithm: &MasonryLayoutAlgorithm,
    resolver: &LineResolver,
    mut out_of_flow_children: Option<&mut Vec<usize>>,
) -> Vec<MasonryItem> {
    let mut items = Vec::with_capacity(algorithm.children().len());
    for (child_index, child) in algorithm.children().iter().enumerate() {
        if child.style.is_out_of_flow() {
            if let Some(out_of_flow) = out_of_flow_children.as_deref_mut() {
                out_of_flow.push(child_index);
            }
            continue;
        }
        items.push(MasonryItem {
            child_index,
            span: resolver.translate_span(&child.style),
        });
    }
    items
}

/// Re-translate every item's span against a corrected line resolver. Used by
/// the second pass of auto-sized `repeat()` resolution; the items themselves
/// are not rebuilt.
pub(crate) fn adjust_item_spans(
    algorithm: &MasonryLayoutAlgorithm,
    resolver: &LineResolver,
    items: &mut [MasonryItem],
) {
    for item in items {
        item.span = resolver.translate_span(&algorithm.children()[item.child_index].style);
    }
}

/// Items sharing a (span, grid-axis alignment) key, in first-seen order.
pub(crate) struct ItemGroup {
    pub span: Span,
    /// Indices into the item sequence.
    pub members: SmallVec<[usize; 4]>,
}

pub(crate) fn collect_item_groups(
    algorithm: &MasonryLayoutAlgorithm,
    items: &[MasonryItem],
    direction: TrackDirection,
) -> Vec<ItemGroup> {
    let mut group_by_key: FxHashMap<(Span, Alignment), usize> = FxHashMap::default();
    let mut groups: Vec<ItemGroup> = Vec::new();
    for (item_index, item) in items.iter().enumerate() {
        let alignment = algorithm.children()[item.child_index]
            .style
            .alignment(direction);
        let group_index = *group_by_key.entry((item.span, alignment)).or_insert_with(|| {
            groups.push(ItemGroup {
                span: item.span,
                members: SmallVec::new(),
            });
            groups.len() - 1
        });
        groups[group_index].members.push(item_index);
    }
    groups
}

/// The contribution envelope of one item group at one definite span. Created
/// fresh for each track sizing pass and discarded with it.
#[derive(Clone, Debug)]
pub struct VirtualItem {
    pub span: Span,
    /// Componentwise maximum of the members' contributions, margins included.
    pub contribution_sizes: ContentSizes,
}

/// Build the virtual items for one track sizing pass.
///
/// Groups with a definite span produce one virtual item. Auto-placed groups
/// produce a copy at every start line the group's items could occupy (a
/// sliding window over the implicit grid), except that within an `auto-fit`
/// repeater no copies are placed beyond the number of items actually awaiting
/// auto-placement, so that untouched repetitions can collapse.
///
/// During the initial auto-sized `repeat()` pass (`needs_auto_track_size`),
/// explicit placement is ignored altogether: every group is treated as
/// auto-placed with a single-track span, and members spanning N tracks
/// contribute one Nth of their measurement after the spanned gutters are
/// deducted.
///
/// <https://www.w3.org/TR/css-grid-3/#masonry-intrinsic-repeat>
pub(crate) fn build_virtual_items(
    algorithm: &MasonryLayoutAlgorithm,
    resolver: &LineResolver,
    items: &[MasonryItem],
    needs_auto_track_size: bool,
    sizing_constraint: SizingConstraint,
) -> Vec<VirtualItem> {
    let style = algorithm.style();
    let direction = style.direction;
    let is_for_columns = direction == TrackDirection::Columns;
    let grid_axis_gap = algorithm.gutter_size(direction);
    let max_end_line = resolver.track_count();

    let auto_fit_span = if needs_auto_track_size {
        None
    } else {
        style
            .track_list
            .auto_fit_track_range(resolver.auto_repetitions())
    };
    let unplaced_item_span_count =
        items.iter().filter(|item| !item.span.is_definite()).count() as u32;

    let mut virtual_items = Vec::new();
    for group in collect_item_groups(algorithm, items, direction) {
        let group_span_size = group.span.span_size();
        debug_assert!(group_span_size > 0);

        let mut contribution_sizes = ContentSizes::zero();
        for member in &group.members {
            let child_index = items[*member].child_index;
            let child = &algorithm.children()[child_index];
            let space =
                algorithm.create_constraint_space_for_measure(needs_auto_track_size, None, false);
            let margins = algorithm.compute_margins(&space, child_index);
            let margins_sum = if is_for_columns {
                margins.inline_sum()
            } else {
                margins.block_sum()
            };

            // A parallel item contributes its inline min/max pair when
            // columns are being sized, and its measured block size when rows
            // are; orthogonal items swap the two.
            let is_parallel = !child.style.flags.contains(ItemFlags::ORTHOGONAL_FLOW);
            let use_inline_contribution = is_for_columns == is_parallel;

            let mut contribution = if use_inline_contribution {
                let mut sizes = child.node.min_max_contribution(&space);
                sizes += margins_sum;
                sizes
            } else {
                let block_contribution = algorithm.compute_item_block_contribution(
                    child_index,
                    sizing_constraint,
                    needs_auto_track_size,
                );
                ContentSizes::from_one_size(block_contribution + margins_sum)
            };

            // While determining the auto-sized repeat track, a member that
            // spans several tracks is treated as if it spanned one: deduct
            // the spanned gutters and size per track.
            if needs_auto_track_size && group_span_size > 1 {
                let total_gap_spanned = grid_axis_gap * (group_span_size - 1) as i32;
                contribution = contribution
                    .map(|size| (size - total_gap_spanned).max(Au::zero()) / group_span_size as i32);
            }

            contribution_sizes.max_assign(contribution);
        }

        if !group.span.is_definite() || needs_auto_track_size {
            let span_size = if needs_auto_track_size {
                1
            } else {
                group_span_size.min(max_end_line)
            };

            // Slide the span over every start line, skipping positions the
            // auto-fit heuristic rules out.
            let mut start = 0;
            let mut end = span_size;
            while end < max_end_line {
                virtual_items.push(VirtualItem {
                    span: Span::definite(start, end),
                    contribution_sizes,
                });
                start += 1;
                end += 1;
                if let Some(auto_fit_span) = &auto_fit_span {
                    while Span::definite(start, end).intersects(auto_fit_span) &&
                        end > unplaced_item_span_count
                    {
                        start += 1;
                        end += 1;
                    }
                }
            }
            if end <= max_end_line {
                virtual_items.push(VirtualItem {
                    span: Span::definite(start, end),
                    contribution_sizes,
                });
            }
        } else {
            virtual_items.push(VirtualItem {
                span: group.span,
                contribution_sizes,
            });
        }
    }
    virtual_items
}
