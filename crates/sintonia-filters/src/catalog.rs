//! Family → topology-list catalog.
//!
//! The selector contents are table-driven: each family has a base segment
//! and an opt-in high-order segment, concatenated in that order. Membership
//! and ordering are product decisions — the lists are what users scroll
//! through — so they are pinned exactly by tests.
//!
//! Intermediate Butterworth orders (5th-7th) are deliberately absent: only
//! the extreme 8th order is exposed, and only when the caller opts in with
//! `include_highest_order`, keeping the default lists short for dense
//! layouts. The steep Linkwitz-Riley crossover variants ride along with the
//! same opt-in.

use crate::family::FilterFamily;
use crate::topology::TopologyOption;

struct CatalogEntry {
    base: &'static [TopologyOption],
    high_order: &'static [TopologyOption],
    default: TopologyOption,
}

const HIGH_LOW_PASS: CatalogEntry = CatalogEntry {
    base: &[
        TopologyOption::LOW_PASS,
        TopologyOption::SECOND_ORDER_HIGH_PASS,
        TopologyOption::ELLIPTICAL_HIGH_PASS,
    ],
    high_order: &[],
    default: TopologyOption::LOW_PASS,
};

const HIGH_PASS: CatalogEntry = CatalogEntry {
    base: &[
        TopologyOption::SECOND_ORDER_HIGH_PASS,
        TopologyOption::ELLIPTICAL_HIGH_PASS,
        TopologyOption::BUTTERWORTH_1_HIGH_PASS,
        TopologyOption::BUTTERWORTH_2_HIGH_PASS,
        TopologyOption::BUTTERWORTH_3_HIGH_PASS,
        TopologyOption::BUTTERWORTH_4_HIGH_PASS,
    ],
    high_order: &[
        TopologyOption::BUTTERWORTH_8_HIGH_PASS,
        TopologyOption::LINKWITZ_RILEY_2_HIGH_PASS,
        TopologyOption::LINKWITZ_RILEY_4_HIGH_PASS,
    ],
    default: TopologyOption::SECOND_ORDER_HIGH_PASS,
};

const LOW_PASS: CatalogEntry = CatalogEntry {
    base: &[
        TopologyOption::LOW_PASS,
        TopologyOption::BUTTERWORTH_1_LOW_PASS,
        TopologyOption::BUTTERWORTH_2_LOW_PASS,
        TopologyOption::BUTTERWORTH_3_LOW_PASS,
        TopologyOption::BUTTERWORTH_4_LOW_PASS,
    ],
    high_order: &[
        TopologyOption::BUTTERWORTH_8_LOW_PASS,
        TopologyOption::LINKWITZ_RILEY_2_LOW_PASS,
        TopologyOption::LINKWITZ_RILEY_4_LOW_PASS,
    ],
    default: TopologyOption::LOW_PASS,
};

const fn entry(family: FilterFamily) -> &'static CatalogEntry {
    match family {
        FilterFamily::HighLowPass => &HIGH_LOW_PASS,
        FilterFamily::HighPass => &HIGH_PASS,
        FilterFamily::LowPass => &LOW_PASS,
    }
}

/// The ordered topology choices for `family`.
///
/// `include_highest_order` appends the 8th-order Butterworth variant and
/// the Linkwitz-Riley pair after the base list; it has no effect for
/// [`FilterFamily::HighLowPass`].
///
/// # Example
///
/// ```rust
/// use sintonia_filters::{FilterFamily, catalog};
///
/// assert_eq!(catalog::options_for(FilterFamily::HighPass, false).len(), 6);
/// assert_eq!(catalog::options_for(FilterFamily::HighPass, true).len(), 9);
/// assert_eq!(catalog::options_for(FilterFamily::LowPass, false).len(), 5);
/// ```
pub fn options_for(family: FilterFamily, include_highest_order: bool) -> Vec<TopologyOption> {
    let entry = entry(family);
    let high_order: &[TopologyOption] = if include_highest_order {
        entry.high_order
    } else {
        &[]
    };
    entry.base.iter().chain(high_order).copied().collect()
}

/// The preselected topology for `family`.
///
/// Always a member of [`options_for`] regardless of the high-order flag.
pub const fn default_for(family: FilterFamily) -> TopologyOption {
    entry(family).default
}
