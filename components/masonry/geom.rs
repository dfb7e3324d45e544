/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Flow-relative geometry. All of the algorithm operates on logical `inline` /
//! `block` coordinates; physical conversion assumes a horizontal-tb, LTR
//! container and is only offered on the output types.

use std::fmt;

use app_units::Au;
use euclid::num::Zero;

pub type PhysicalPoint<U> = euclid::default::Point2D<U>;
pub type PhysicalSize<U> = euclid::default::Size2D<U>;
pub type PhysicalRect<U> = euclid::default::Rect<U>;

#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct LogicalVec2<T> {
    pub inline: T,
    pub block: T,
}

impl<T: fmt::Debug> fmt::Debug for LogicalVec2<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // Not using f.debug_struct on purpose here, to keep {:?} output somewhat compact.
        formatter.write_str("Vec2 { i: ")?;
        self.inline.fmt(formatter)?;
        formatter.write_str(", b: ")?;
        self.block.fmt(formatter)?;
        formatter.write_str(" }")
    }
}

impl LogicalVec2<Au> {
    pub fn zero() -> Self {
        Self {
            inline: Au::zero(),
            block: Au::zero(),
        }
    }

    pub fn to_physical_size(self) -> PhysicalSize<Au> {
        PhysicalSize::new(self.inline, self.block)
    }

    pub fn to_physical_point(self) -> PhysicalPoint<Au> {
        PhysicalPoint::new(self.inline, self.block)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogicalSides<T> {
    pub inline_start: T,
    pub inline_end: T,
    pub block_start: T,
    pub block_end: T,
}

impl LogicalSides<Au> {
    pub fn zero() -> Self {
        Self {
            inline_start: Au::zero(),
            inline_end: Au::zero(),
            block_start: Au::zero(),
            block_end: Au::zero(),
        }
    }

    pub fn inline_sum(&self) -> Au {
        self.inline_start + self.inline_end
    }

    pub fn block_sum(&self) -> Au {
        self.block_start + self.block_end
    }

    /// The offset of the content corner implied by these sides, i.e. the
    /// inline-start/block-start corner.
    pub fn start_offset(&self) -> LogicalVec2<Au> {
        LogicalVec2 {
            inline: self.inline_start,
            block: self.block_start,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogicalRect<T> {
    pub start_corner: LogicalVec2<T>,
    pub size: LogicalVec2<T>,
}

impl LogicalRect<Au> {
    pub fn max_block_position(&self) -> Au {
        self.start_corner.block + self.size.block
    }

    /// Convert to physical coordinates, assuming a horizontal-tb LTR container.
    pub fn to_physical(&self) -> PhysicalRect<Au> {
        PhysicalRect::new(
            self.start_corner.to_physical_point(),
            self.size.to_physical_size(),
        )
    }
}

#[cfg(test)]
mod tests {
    use app_units::Au;

    use super::{LogicalRect, LogicalSides, LogicalVec2};

    #[test]
    fn sides_sums() {
        let sides = LogicalSides {
            inline_start: Au::from_px(1),
            inline_end: Au::from_px(2),
            block_start: Au::from_px(4),
            block_end: Au::from_px(8),
        };
        assert_eq!(sides.inline_sum(), Au::from_px(3));
        assert_eq!(sides.block_sum(), Au::from_px(12));
        assert_eq!(sides.start_offset().inline, Au::from_px(1));
    }

    #[test]
    fn rect_to_physical_is_horizontal_tb() {
        let rect = LogicalRect {
            start_corner: LogicalVec2 {
                inline: Au::from_px(10),
                block: Au::from_px(20),
            },
            size: LogicalVec2 {
                inline: Au::from_px(30),
                block: Au::from_px(40),
            },
        };
        let physical = rect.to_physical();
        assert_eq!(physical.origin.x, Au::from_px(10));
        assert_eq!(physical.origin.y, Au::from_px(20));
        assert_eq!(physical.size.width, Au::from_px(30));
        assert_eq!(physical.size.height, Au::from_px(40));
        assert_eq!(rect.max_block_position(), Au::from_px(60));
    }
}
