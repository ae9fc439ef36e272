//! High/low-pass filter stage controls.

use egui::Ui;
use sintonia_filters::{FilterFamily, TopologyOption, catalog};
use sintonia_params::ParameterEditor;

use crate::bypass::BypassState;
use crate::selector::SelectorModel;
use crate::toggles::{self, ToggleSpec};
use crate::widgets::{LabeledToggle, NumericField, choice_box};
use crate::labels;

/// One high/low-pass filter stage: topology selector, cutoff frequency
/// editor, and bypass toggle.
///
/// The cutoff editor keeps two decimal places up to 1 kHz and integers
/// above, stepping by 0.1 Hz — corner frequencies are set much more finely
/// than the stock frequency-editor defaults.
pub struct HighLowPassFilterControls {
    family: FilterFamily,
    show_high_order: bool,
    /// Topology choices for this stage's family.
    pub topology: SelectorModel<TopologyOption>,
    /// Cutoff frequency editor in Hz.
    pub cutoff_frequency: ParameterEditor,
    /// Whether this stage is processing or bypassed.
    pub bypass: BypassState,
    toggle: ToggleSpec,
    frequency_field: NumericField,
}

impl HighLowPassFilterControls {
    /// Create the controls for one stage.
    ///
    /// `show_high_order` exposes the 8th-order Butterworth and
    /// Linkwitz-Riley variants in the topology list. New stages start
    /// bypassed; enabling a filter is an explicit user action.
    pub fn new(
        family: FilterFamily,
        show_high_order: bool,
        minimum_frequency_hz: f64,
        maximum_frequency_hz: f64,
        initial_frequency_hz: f64,
    ) -> Self {
        let cutoff_frequency = ParameterEditor::frequency_with_precision(
            minimum_frequency_hz,
            maximum_frequency_hz,
            initial_frequency_hz,
            1000.0,
            2,
        )
        .with_increment(0.1);
        let frequency_field = NumericField::new(&cutoff_frequency);

        Self {
            topology: SelectorModel::new(
                catalog::options_for(family, show_high_order),
                &catalog::default_for(family),
            ),
            toggle: toggles::high_low_pass(family.label()),
            bypass: BypassState::Bypassed,
            family,
            show_high_order,
            cutoff_frequency,
            frequency_field,
        }
    }

    /// The family this stage's selector was built for.
    #[inline]
    pub const fn family(&self) -> FilterFamily {
        self.family
    }

    /// Whether high-order variants are currently offered.
    #[inline]
    pub const fn show_high_order(&self) -> bool {
        self.show_high_order
    }

    /// Rebuild the topology list for a new high-order preference.
    ///
    /// The current topology selection survives the rebuild when it is still
    /// offered; otherwise the family default is reselected.
    pub fn set_show_high_order(&mut self, show_high_order: bool) {
        if self.show_high_order == show_high_order {
            return;
        }
        self.show_high_order = show_high_order;
        self.topology.replace_choices(
            catalog::options_for(self.family, show_high_order),
            &catalog::default_for(self.family),
        );
    }

    /// Set the cutoff frequency programmatically (clamped) and refresh the
    /// bound field.
    pub fn set_cutoff_frequency_hz(&mut self, frequency_hz: f64) {
        self.cutoff_frequency.set_value(frequency_hz);
        self.frequency_field.sync(&self.cutoff_frequency);
    }

    /// Render the stage controls.
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(self.family.label());
            choice_box(
                ui,
                ("topology", self.family.label()),
                &mut self.topology,
                |option| option.label.to_string(),
            )
            .on_hover_text(labels::slope_tooltip(self.family));

            ui.label(labels::FREQUENCY);
            self.frequency_field.show(ui, &mut self.cutoff_frequency);

            let mut selected = self.bypass.as_selected();
            if ui.add(LabeledToggle::new(&mut selected, &self.toggle)).changed() {
                self.bypass = BypassState::from_selected(selected);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(show_high_order: bool) -> HighLowPassFilterControls {
        HighLowPassFilterControls::new(FilterFamily::LowPass, show_high_order, 10.0, 20000.0, 80.0)
    }

    #[test]
    fn new_stage_starts_bypassed_at_family_default() {
        let controls = stage(false);
        assert_eq!(controls.bypass, BypassState::Bypassed);
        assert_eq!(*controls.topology.selected(), TopologyOption::LOW_PASS);
        assert_eq!(controls.cutoff_frequency.value(), 80.0);
        assert_eq!(controls.cutoff_frequency.unit_label(), " Hz");
    }

    #[test]
    fn cutoff_editor_uses_fine_increment_and_khz_cutoff() {
        let controls = stage(false);
        assert_eq!(controls.cutoff_frequency.range().increment(), 0.1);
        let precision = controls.cutoff_frequency.precision().unwrap();
        assert_eq!(precision.cutoff(), 1000.0);
        assert_eq!(precision.decimal_places(), 2);
    }

    #[test]
    fn selection_survives_high_order_rebuild() {
        let mut controls = stage(false);
        controls.topology.select(&TopologyOption::BUTTERWORTH_4_LOW_PASS);
        controls.set_show_high_order(true);
        assert_eq!(
            *controls.topology.selected(),
            TopologyOption::BUTTERWORTH_4_LOW_PASS
        );
        assert_eq!(controls.topology.choices().len(), 8);
    }

    #[test]
    fn dropped_selection_falls_back_to_family_default() {
        let mut controls = stage(true);
        controls.topology.select(&TopologyOption::BUTTERWORTH_8_LOW_PASS);
        controls.set_show_high_order(false);
        assert_eq!(*controls.topology.selected(), TopologyOption::LOW_PASS);
        assert_eq!(controls.topology.choices().len(), 5);
    }

    #[test]
    fn toggle_captions_are_bare_with_named_tooltip() {
        let controls = HighLowPassFilterControls::new(
            FilterFamily::HighPass,
            false,
            10.0,
            20000.0,
            100.0,
        );
        assert_eq!(controls.toggle.on_text, "Bypassed");
        assert_eq!(controls.toggle.off_text, "Enabled");
        assert_eq!(controls.toggle.tooltip, "Bypass/Enable High Pass Filter");
    }

    #[test]
    fn programmatic_cutoff_set_clamps() {
        let mut controls = stage(false);
        controls.set_cutoff_frequency_hz(5.0);
        assert_eq!(controls.cutoff_frequency.value(), 10.0);
    }
}
