/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! <https://drafts.csswg.org/css-sizing/#intrinsic-sizes>

use std::ops::AddAssign;

use app_units::Au;
use euclid::num::Zero;

/// Which of the interchangeable modes the pipeline is running in: a pure
/// intrinsic-size measurement under one of the content constraints, or a real
/// layout pass that produces fragments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizingConstraint {
    MinContent,
    MaxContent,
    Layout,
}

impl SizingConstraint {
    pub fn is_layout(self) -> bool {
        self == SizingConstraint::Layout
    }

    /// Pick the matching component of a min-content/max-content pair.
    /// [`SizingConstraint::Layout`] measures like max-content.
    pub fn pick_content_size(self, sizes: ContentSizes) -> Au {
        match self {
            SizingConstraint::MinContent => sizes.min_content,
            SizingConstraint::MaxContent | SizingConstraint::Layout => sizes.max_content,
        }
    }
}

/// A min-content/max-content pair.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ContentSizes {
    pub min_content: Au,
    pub max_content: Au,
}

impl ContentSizes {
    pub fn zero() -> Self {
        Self {
            min_content: Au::zero(),
            max_content: Au::zero(),
        }
    }

    pub fn from_one_size(size: Au) -> Self {
        Self {
            min_content: size,
            max_content: size,
        }
    }

    pub fn max_assign(&mut self, other: Self) {
        self.min_content = self.min_content.max(other.min_content);
        self.max_content = self.max_content.max(other.max_content);
    }

    pub fn map(&self, f: impl Fn(Au) -> Au) -> Self {
        Self {
            min_content: f(self.min_content),
            max_content: f(self.max_content),
        }
    }
}

impl AddAssign<Au> for ContentSizes {
    fn add_assign(&mut self, amount: Au) {
        self.min_content += amount;
        self.max_content += amount;
    }
}

/// The contribution the track sizing engine may ask a virtual item for.
/// Mirrors the steps of the track sizing algorithm that consult item
/// contributions. `ForFreeSpace` exists only for the free-space distribution
/// steps and is never answerable with an item contribution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContributionType {
    ForContentBasedMinimums,
    ForIntrinsicMinimums,
    ForIntrinsicMaximums,
    ForMaxContentMinimums,
    ForMaxContentMaximums,
    ForFreeSpace,
}

/// The result of computing the intrinsic inline sizes of a container.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InlineContentSizesResult {
    pub sizes: ContentSizes,
    pub depends_on_block_constraints: bool,
}

#[cfg(test)]
mod tests {
    use app_units::Au;

    use super::{ContentSizes, SizingConstraint};

    #[test]
    fn max_assign_is_componentwise() {
        let mut sizes = ContentSizes {
            min_content: Au::from_px(10),
            max_content: Au::from_px(20),
        };
        sizes.max_assign(ContentSizes {
            min_content: Au::from_px(5),
            max_content: Au::from_px(30),
        });
        assert_eq!(sizes.min_content, Au::from_px(10));
        assert_eq!(sizes.max_content, Au::from_px(30));
    }

    #[test]
    fn layout_measures_like_max_content() {
        let sizes = ContentSizes {
            min_content: Au::from_px(1),
            max_content: Au::from_px(2),
        };
        assert_eq!(
            SizingConstraint::Layout.pick_content_size(sizes),
            Au::from_px(2)
        );
        assert_eq!(
            SizingConstraint::MinContent.pick_content_size(sizes),
            Au::from_px(1)
        );
    }
}
