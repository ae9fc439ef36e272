//! Butterworth slope selector.

use egui::{Response, Ui};
use sintonia_filters::butterworth_slope_label;

use crate::selector::SelectorModel;
use crate::widgets::choice_box;

/// Drop-list over Butterworth filter orders, labeled as slopes
/// ("Butterworth, 4th order").
///
/// Crossover hosts hand in whichever orders their DSP backend supports and
/// a default index into that list; replacing the list later (e.g., after a
/// backend change) preserves a still-offered selection.
pub struct ButterworthSlopeSelector {
    model: SelectorModel<u8>,
    id_salt: &'static str,
}

impl ButterworthSlopeSelector {
    /// Create a selector over `orders` with `orders[default_index]`
    /// preselected.
    ///
    /// # Panics
    ///
    /// Panics when `orders` is empty or `default_index` is out of bounds —
    /// a caller/config error, not user input.
    pub fn new(orders: &[u8], default_index: usize) -> Self {
        assert!(
            default_index < orders.len(),
            "default slope index {default_index} outside 0..{}",
            orders.len()
        );
        Self {
            model: SelectorModel::new(orders.to_vec(), &orders[default_index]),
            id_salt: "butterworth-slope",
        }
    }

    /// Override the combo-box id salt when several selectors share a panel.
    pub fn with_id_salt(mut self, id_salt: &'static str) -> Self {
        self.id_salt = id_salt;
        self
    }

    /// The offered orders, in display order.
    #[inline]
    pub fn orders(&self) -> &[u8] {
        self.model.choices()
    }

    /// The selected filter order.
    #[inline]
    pub fn selected_order(&self) -> u8 {
        *self.model.selected()
    }

    /// The selected order's presentation label.
    pub fn selected_label(&self) -> String {
        butterworth_slope_label(self.selected_order())
    }

    /// Select `order` if offered. Returns whether the selection changed.
    pub fn select_order(&mut self, order: u8) -> bool {
        self.model.select(&order)
    }

    /// Replace the offered orders and re-assert the selection.
    ///
    /// The previous selection is preserved when the new list still offers
    /// it; otherwise `orders[default_index]` is selected.
    ///
    /// # Panics
    ///
    /// Panics when `orders` is empty or `default_index` is out of bounds.
    pub fn set_orders(&mut self, orders: &[u8], default_index: usize) {
        assert!(
            default_index < orders.len(),
            "default slope index {default_index} outside 0..{}",
            orders.len()
        );
        self.model
            .replace_choices(orders.to_vec(), &orders[default_index]);
    }

    /// Render the selector.
    pub fn ui(&mut self, ui: &mut Ui) -> Response {
        choice_box(ui, self.id_salt, &mut self.model, |order| {
            butterworth_slope_label(*order)
        })
    }
}
