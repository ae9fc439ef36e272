//! Parametric EQ band controls.

use egui::Ui;
use sintonia_params::ParameterEditor;

use crate::bypass::BypassState;
use crate::labels;
use crate::toggles::{self, ToggleSpec};
use crate::widgets::{LabeledToggle, NumericField};

/// Center frequency lower bound.
pub const FREQUENCY_MINIMUM_HZ: f64 = 10.0;
/// Center frequency upper bound.
pub const FREQUENCY_MAXIMUM_HZ: f64 = 20_000.0;
/// Bandwidth lower bound. The bandwidth bounds may not follow common
/// conventions.
pub const BANDWIDTH_MINIMUM_OCTAVES: f64 = 0.1;
/// Bandwidth upper bound.
pub const BANDWIDTH_MAXIMUM_OCTAVES: f64 = 2.0;
/// Gain lower bound.
pub const GAIN_MINIMUM_DB: f64 = -18.0;
/// Gain upper bound.
pub const GAIN_MAXIMUM_DB: f64 = 18.0;

// ISO-style octave centers, one per band number.
const DEFAULT_FREQUENCIES_HZ: [f64; 10] = [
    32.0, 63.0, 125.0, 250.0, 500.0, 1000.0, 2000.0, 4000.0, 8000.0, 16000.0,
];

/// One parametric EQ band: bypass toggle plus center frequency, bandwidth,
/// and gain editors.
pub struct ParametricFilterControls {
    band_number: usize,
    /// Whether this band is processing or bypassed.
    pub bypass: BypassState,
    /// Center frequency editor in Hz.
    pub frequency: ParameterEditor,
    /// Bandwidth editor in octaves.
    pub bandwidth: ParameterEditor,
    /// Cut/boost editor in dB; unsigned input reads as cut.
    pub gain: ParameterEditor,
    toggle: ToggleSpec,
    frequency_field: NumericField,
    bandwidth_field: NumericField,
    gain_field: NumericField,
}

impl ParametricFilterControls {
    /// Create the controls for one band.
    ///
    /// `band_number` is 1-based and picks the band's default center
    /// frequency from the octave table.
    ///
    /// # Panics
    ///
    /// Panics when `band_number` is 0 or beyond the octave table — a
    /// caller/config error, not user input.
    pub fn new(band_number: usize) -> Self {
        assert!(
            (1..=DEFAULT_FREQUENCIES_HZ.len()).contains(&band_number),
            "band number {band_number} outside 1..={}",
            DEFAULT_FREQUENCIES_HZ.len()
        );

        let frequency = ParameterEditor::frequency_with_precision(
            FREQUENCY_MINIMUM_HZ,
            FREQUENCY_MAXIMUM_HZ,
            DEFAULT_FREQUENCIES_HZ[band_number - 1],
            1000.0,
            2,
        )
        .with_increment(0.1);
        let bandwidth = ParameterEditor::bandwidth(
            BANDWIDTH_MINIMUM_OCTAVES,
            BANDWIDTH_MAXIMUM_OCTAVES,
            1.0,
        );
        let gain = ParameterEditor::gain(GAIN_MINIMUM_DB, GAIN_MAXIMUM_DB, 0.0, true);

        Self {
            band_number,
            bypass: BypassState::Enabled,
            toggle: toggles::single_filter(band_number),
            frequency_field: NumericField::new(&frequency),
            bandwidth_field: NumericField::new(&bandwidth),
            gain_field: NumericField::new(&gain),
            frequency,
            bandwidth,
            gain,
        }
    }

    /// This band's 1-based number.
    #[inline]
    pub const fn band_number(&self) -> usize {
        self.band_number
    }

    /// Render the band controls as one row.
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let mut selected = self.bypass.as_selected();
            if ui.add(LabeledToggle::new(&mut selected, &self.toggle)).changed() {
                self.bypass = BypassState::from_selected(selected);
            }

            ui.label(labels::FREQUENCY);
            self.frequency_field.show(ui, &mut self.frequency);
            ui.label(labels::BANDWIDTH);
            self.bandwidth_field.show(ui, &mut self.bandwidth);
            ui.label(labels::GAIN);
            self.gain_field.show(ui, &mut self.gain);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_defaults_follow_the_octave_table() {
        assert_eq!(ParametricFilterControls::new(1).frequency.value(), 32.0);
        assert_eq!(ParametricFilterControls::new(2).frequency.value(), 63.0);
        assert_eq!(ParametricFilterControls::new(6).frequency.value(), 1000.0);
        assert_eq!(ParametricFilterControls::new(10).frequency.value(), 16000.0);
    }

    #[test]
    fn bands_start_enabled() {
        assert_eq!(ParametricFilterControls::new(1).bypass, BypassState::Enabled);
    }

    #[test]
    fn gain_defaults_to_cut_for_unsigned_input() {
        let mut controls = ParametricFilterControls::new(4);
        controls.gain.set_text("6").unwrap();
        assert_eq!(controls.gain.value(), -6.0);
        controls.gain.set_text("+6").unwrap();
        assert_eq!(controls.gain.display_text(), "+6 dB");
    }

    #[test]
    fn editors_carry_the_documented_ranges() {
        let controls = ParametricFilterControls::new(3);
        assert_eq!(controls.frequency.range().minimum(), 10.0);
        assert_eq!(controls.frequency.range().maximum(), 20_000.0);
        assert_eq!(controls.frequency.range().increment(), 0.1);
        assert_eq!(controls.bandwidth.range().minimum(), 0.1);
        assert_eq!(controls.bandwidth.range().maximum(), 2.0);
        assert_eq!(controls.bandwidth.value(), 1.0);
        assert_eq!(controls.gain.range().minimum(), -18.0);
        assert_eq!(controls.gain.range().maximum(), 18.0);
        assert_eq!(controls.gain.value(), 0.0);
    }

    #[test]
    fn toggle_carries_the_band_number() {
        let controls = ParametricFilterControls::new(7);
        assert_eq!(controls.toggle.on_text, "7 Bypassed");
        assert_eq!(controls.toggle.off_text, "7 Enabled");
    }

    #[test]
    #[should_panic(expected = "band number")]
    fn zero_band_number_fails_fast() {
        let _ = ParametricFilterControls::new(0);
    }
}
