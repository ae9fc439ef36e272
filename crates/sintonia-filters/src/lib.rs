//! Sintonia Filters - filter families, topologies, and slope labels
//!
//! The data side of the filter controls: which filter families exist, which
//! topology variants each family's selector offers (and in what order), and
//! how a numeric filter order turns into a slope label. Everything here is a
//! pure function of configuration — no widget state, no DSP math.
//!
//! # Core Abstractions
//!
//! - [`FilterFamily`] - high/low-pass, high-pass, low-pass selector families
//! - [`TopologyOption`] - one selectable filter design variant
//! - [`catalog`] - the family → ordered option-list table with defaults
//! - [`slope`] - filter order → "Butterworth, 4th order" label derivation
//!
//! # Example
//!
//! ```rust
//! use sintonia_filters::{FilterFamily, TopologyOption, catalog};
//!
//! let options = catalog::options_for(FilterFamily::HighPass, false);
//! assert_eq!(options.len(), 6);
//! assert_eq!(
//!     catalog::default_for(FilterFamily::HighPass),
//!     TopologyOption::SECOND_ORDER_HIGH_PASS
//! );
//! ```

pub mod catalog;
pub mod family;
pub mod slope;
pub mod topology;

pub use family::FilterFamily;
pub use slope::{butterworth_slope_label, slope_db_per_octave};
pub use topology::{PassBand, TopologyOption};
