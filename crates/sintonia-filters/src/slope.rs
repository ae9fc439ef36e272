//! Slope labels derived from filter order.

use crate::topology::TopologyOption;

/// Roll-off steepness in dB per octave for a filter of the given order.
#[inline]
pub fn slope_db_per_octave(order: u8) -> f64 {
    f64::from(order) * 6.0
}

/// Presentation label for a Butterworth filter slope of the given order,
/// e.g. `"Butterworth, 4th order"`.
///
/// # Example
///
/// ```rust
/// use sintonia_filters::butterworth_slope_label;
///
/// assert_eq!(butterworth_slope_label(4), "Butterworth, 4th order");
/// assert_eq!(butterworth_slope_label(1), "Butterworth, 1st order");
/// ```
pub fn butterworth_slope_label(order: u8) -> String {
    format!("Butterworth, {} order", ordinal(order))
}

/// Presentation label for a topology's slope, e.g. `"24 dB/octave"`.
pub fn topology_slope_label(topology: &TopologyOption) -> String {
    format!("{:.0} dB/octave", topology.slope_db_per_octave())
}

/// English ordinal for a filter order ("1st", "2nd", "3rd", "4th", ...).
fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
