//! Sintonia Params - value-domain primitives for audio parameter entry
//!
//! This crate provides the validation, clamping, precision, and sign logic
//! behind every numeric parameter editor in sintonia (frequency, bandwidth,
//! gain, delay). It contains no widget or rendering code — a GUI layer binds
//! these types to on-screen fields and drives them with text-commit and
//! numeric-set events.
//!
//! # Core Abstractions
//!
//! - [`NumericRange`] - closed interval with a default value and step increment
//! - [`PrecisionSpec`] - integer vs. decimal-place rounding around a cutoff
//! - [`SignSpec`] - explicit "+" decoration for negative-by-default parameters
//! - [`ParameterEditor`] - the three composed into one validated editable value
//! - [`ParseError`] - recoverable rejection of malformed text commits
//!
//! # Example
//!
//! ```rust
//! use sintonia_params::ParameterEditor;
//!
//! let mut frequency = ParameterEditor::frequency(20.0, 20000.0, 1000.0);
//! frequency.set_text("63.27").unwrap();
//! assert_eq!(frequency.value(), 63.3);
//! assert_eq!(frequency.display_text(), "63.3 Hz");
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (text formatting requires `alloc`).
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sintonia-params = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Fails soft on user input**: malformed text keeps the previous value
//! - **Clamps silently**: out-of-range values snap to the nearest bound
//! - **Composition over inheritance**: one editor type, pluggable policies

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod editor;
pub mod error;
pub mod precision;
pub mod range;
pub mod sign;

pub use editor::ParameterEditor;
pub use error::ParseError;
pub use precision::{PrecisionSpec, round_decimal};
pub use range::NumericRange;
pub use sign::SignSpec;
