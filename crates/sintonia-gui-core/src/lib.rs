//! Shared control-group state and widgets for the sintonia parameter surface.
//!
//! This crate composes the value-domain core (`sintonia-params`) and the
//! filter catalog (`sintonia-filters`) into per-stage editing units, and
//! provides the thin egui widgets that bind them to the screen. All
//! validation, clamping, and option-list logic lives in the core crates;
//! nothing here does more than route events and paint.
//!
//! # Modules
//!
//! - [`bypass`] — explicit enable/bypass and polarity state enums
//! - [`selector`] — replace-the-list, keep-the-selection choice model
//! - [`labels`] — shared control caption strings
//! - [`toggles`] — toggle caption/tooltip/style factories
//! - [`controls`] — one editing unit per filter stage (high/low pass,
//!   parametric, all-pass, master level, slope selector)
//! - [`widgets`] — numeric commit field, labeled toggle, choice box

pub mod bypass;
pub mod controls;
pub mod labels;
pub mod selector;
pub mod toggles;
pub mod widgets;

pub use bypass::{BypassState, Polarity};
pub use controls::{
    AllPassFilterControls, ButterworthSlopeSelector, HighLowPassFilterControls,
    MasterLevelControls, ParametricFilterControls,
};
pub use selector::SelectorModel;
pub use toggles::ToggleSpec;
pub use widgets::{LabeledToggle, NumericField, choice_box};
