/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Per-track stacking-axis occupancy, and the auto-placement heuristic that
//! picks a start line for items with indefinite spans.
//!
//! <https://drafts.csswg.org/css-grid-3/#masonry-layout-algorithm>

use app_units::Au;
use euclid::num::Zero;
use log::warn;

use crate::track::Span;

/// For every grid-axis track, the maximum stacking-axis extent already
/// occupied by placed items, together with the auto-placement cursor and the
/// tolerance within which a near-minimum position still counts as eligible.
///
/// Owned by a single placement pass; never shared between passes.
#[derive(Clone, Debug)]
pub struct RunningPositions {
    positions: Vec<Au>,
    auto_placement_cursor: u32,
    tolerance: Au,
    collapsed_track_indexes: Vec<u32>,
}

impl RunningPositions {
    pub fn new(
        track_count: u32,
        initial_running_position: Au,
        tolerance: Au,
        collapsed_track_indexes: Vec<u32>,
    ) -> Self {
        debug_assert!(track_count > 0, "a masonry grid has at least one track");
        Self {
            positions: vec![initial_running_position; track_count as usize],
            auto_placement_cursor: 0,
            tolerance,
            collapsed_track_indexes,
        }
    }

    pub fn track_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// The maximum running position over the span's tracks: the earliest
    /// stacking-axis offset at which an item spanning exactly those tracks can
    /// start without overlapping anything already placed.
    pub fn get_max_position_for_span(&self, span: Span) -> Au {
        self.positions[span.track_range()]
            .iter()
            .fold(Au::zero(), |max, position| max.max(*position))
    }

    /// Choose a start line for an item with an indefinite span of
    /// `span_size` tracks, returning the resolved span and its position.
    ///
    /// The minimum position is computed over every legal start line; any line
    /// within the tolerance of that minimum is eligible, and the first
    /// eligible line at or after the auto-placement cursor wins, wrapping to
    /// the lowest eligible line once the cursor has passed them all. Lines
    /// whose span would cover a collapsed `auto-fit` track are only
    /// considered when no other line exists.
    pub fn get_first_eligible_line(&self, span_size: u32) -> (Span, Au) {
        debug_assert!(
            span_size >= 1 && span_size <= self.track_count(),
            "span size must fit the grid"
        );
        let max_start_line = self.track_count() - span_size;

        let covers_collapsed = |start: u32| {
            self.collapsed_track_indexes
                .iter()
                .any(|index| (start..start + span_size).contains(index))
        };
        let mut candidates: Vec<u32> =
            (0..=max_start_line).filter(|start| !covers_collapsed(*start)).collect();
        if candidates.is_empty() {
            warn!("every candidate start line covers a collapsed track");
            candidates = (0..=max_start_line).collect();
        }

        let position_for = |start: u32| {
            self.get_max_position_for_span(Span::definite(start, start + span_size))
        };
        let min_position = candidates
            .iter()
            .map(|start| position_for(*start))
            .min()
            .expect("at least one candidate start line exists");
        let threshold = min_position + self.tolerance;

        let is_eligible = |start: &&u32| position_for(**start) <= threshold;
        let chosen = candidates
            .iter()
            .filter(|start| **start >= self.auto_placement_cursor)
            .find(is_eligible)
            .or_else(|| candidates.iter().find(is_eligible))
            .copied()
            .expect("the minimum-position line is always eligible");

        let span = Span::definite(chosen, chosen + span_size);
        (span, position_for(chosen))
    }

    /// Advance the auto-placement cursor past `end_line`. The cursor never
    /// moves backwards.
    pub fn update_auto_placement_cursor(&mut self, end_line: u32) {
        self.auto_placement_cursor = self.auto_placement_cursor.max(end_line);
    }

    /// Overwrite the running position of every track in `span` with
    /// `new_value`. The caller passes the already-maximized value
    /// (`old_max + gap + item_extent`), so positions only ever grow.
    pub fn update_running_positions_for_span(&mut self, span: Span, new_value: Au) {
        for position in &mut self.positions[span.track_range()] {
            debug_assert!(
                new_value >= *position,
                "running positions are monotonically non-decreasing"
            );
            *position = new_value;
        }
    }
}

#[cfg(test)]
mod tests {
    use app_units::Au;
    use euclid::num::Zero;

    use super::RunningPositions;
    use crate::track::Span;

    fn px(value: i32) -> Au {
        Au::from_px(value)
    }

    #[test]
    fn ties_break_to_the_lowest_line() {
        let positions = RunningPositions::new(3, Au::zero(), Au::zero(), Vec::new());
        let (span, position) = positions.get_first_eligible_line(1);
        assert_eq!(span, Span::definite(0, 1));
        assert_eq!(position, Au::zero());
    }

    #[test]
    fn cursor_prefers_later_lines_and_wraps() {
        let mut positions = RunningPositions::new(2, Au::zero(), Au::zero(), Vec::new());
        positions.update_auto_placement_cursor(1);
        // Both lines are at zero; the cursor pushes the choice to line 1.
        let (span, _) = positions.get_first_eligible_line(1);
        assert_eq!(span, Span::definite(1, 2));

        // Once the cursor has passed every start line, the lowest eligible
        // line wins again.
        positions.update_auto_placement_cursor(2);
        positions.update_running_positions_for_span(Span::definite(1, 2), px(30));
        let (span, position) = positions.get_first_eligible_line(1);
        assert_eq!(span, Span::definite(0, 1));
        assert_eq!(position, Au::zero());
    }

    #[test]
    fn tolerance_trades_packing_for_stability() {
        let mut positions = RunningPositions::new(2, Au::zero(), px(10), Vec::new());
        positions.update_running_positions_for_span(Span::definite(0, 1), px(8));
        // Line 0 is 8px above the minimum, within the 10px tolerance, so the
        // lower-index line still wins.
        let (span, position) = positions.get_first_eligible_line(1);
        assert_eq!(span, Span::definite(0, 1));
        assert_eq!(position, px(8));

        // Outside the tolerance the true minimum wins.
        positions.update_running_positions_for_span(Span::definite(0, 1), px(20));
        let (span, _) = positions.get_first_eligible_line(1);
        assert_eq!(span, Span::definite(1, 2));
    }

    #[test]
    fn spanning_items_see_the_maximum_over_their_tracks() {
        let mut positions = RunningPositions::new(3, Au::zero(), Au::zero(), Vec::new());
        positions.update_running_positions_for_span(Span::definite(0, 1), px(40));
        assert_eq!(positions.get_max_position_for_span(Span::definite(0, 2)), px(40));
        // Any two-track span overlaps track 0 or starts at line 1; the span
        // avoiding the occupied track wins.
        let (span, position) = positions.get_first_eligible_line(2);
        assert_eq!(span, Span::definite(1, 3));
        assert_eq!(position, Au::zero());
    }

    #[test]
    fn collapsed_tracks_are_avoided() {
        let positions = RunningPositions::new(3, Au::zero(), Au::zero(), vec![0]);
        let (span, _) = positions.get_first_eligible_line(1);
        assert_eq!(span, Span::definite(1, 2));
    }

    #[test]
    fn monotonic_cursor() {
        let mut positions = RunningPositions::new(4, Au::zero(), Au::zero(), Vec::new());
        positions.update_auto_placement_cursor(3);
        positions.update_auto_placement_cursor(1);
        let (span, _) = positions.get_first_eligible_line(1);
        assert_eq!(span, Span::definite(3, 4));
    }
}
