//! Thin egui bindings for the core editing types.
//!
//! Widgets here only route events and paint; every validation decision is
//! delegated to `sintonia-params` and [`SelectorModel`](crate::SelectorModel).

mod choice_box;
mod numeric_field;
mod toggle;

pub use choice_box::choice_box;
pub use numeric_field::NumericField;
pub use toggle::LabeledToggle;
