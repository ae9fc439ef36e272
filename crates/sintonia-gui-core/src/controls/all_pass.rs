//! All-pass filter stage controls.

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
/// Q-factor lower bound.
pub const BANDWIDTH_MINIMUM_Q: f64 = 0.5;
/// Q-factor upper bound.
pub const BANDWIDTH_MAXIMUM_Q: f64 = 10.0;

const DEFAULT_FREQUENCIES_HZ: [f64; 4] = [32.0, 64.0, 128.0, 256.0];

/// One all-pass stage: bypass toggle plus center frequency and Q editors.
///
/// All-pass stages correct phase without touching magnitude, so there is no
/// gain editor here.
pub struct AllPassFilterControls {
    stage_number: usize,
    visible: bool,
    /// Whether this stage is processing or bypassed.
    pub bypass: BypassState,
    /// Center frequency editor in Hz.
    pub frequency: ParameterEditor,
    /// Q-factor editor.
    pub q_factor: ParameterEditor,
    toggle: ToggleSpec,
    frequency_field: NumericField,
    q_field: NumericField,
}

impl AllPassFilterControls {
    /// Create the controls for one stage.
    ///
    /// With `use_default_frequencies` the stage's initial center frequency
    /// comes from the low-frequency octave table (32/64/128/256 Hz by
    /// stage number); otherwise every stage starts at 100 Hz.
    ///
    /// # Panics
    ///
    /// Panics when `stage_number` is 0 or beyond the octave table.
    pub fn new(stage_number: usize, use_default_frequencies: bool) -> Self {
        assert!(
            (1..=DEFAULT_FREQUENCIES_HZ.len()).contains(&stage_number),
            "stage number {stage_number} outside 1..={}",
            DEFAULT_FREQUENCIES_HZ.len()
        );

        let initial_frequency_hz = if use_default_frequencies {
            DEFAULT_FREQUENCIES_HZ[stage_number - 1]
        } else {
            100.0
        };
        let frequency = ParameterEditor::frequency_with_precision(
            FREQUENCY_MINIMUM_HZ,
            FREQUENCY_MAXIMUM_HZ,
            initial_frequency_hz,
            1000.0,
            2,
        )
        .with_increment(0.1);
        let q_factor =
            ParameterEditor::bandwidth(BANDWIDTH_MINIMUM_Q, BANDWIDTH_MAXIMUM_Q, 1.0);

        Self {
            stage_number,
            visible: true,
            bypass: BypassState::Enabled,
            toggle: toggles::single_filter(stage_number),
            frequency_field: NumericField::new(&frequency),
            q_field: NumericField::new(&q_factor),
            frequency,
            q_factor,
        }
    }

    /// This stage's 1-based number.
    #[inline]
    pub const fn stage_number(&self) -> usize {
        self.stage_number
    }

    /// Show or hide the whole stage row. Hosts collapse unused stages in
    /// dense layouts.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the stage row is shown.
    #[inline]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Render the stage controls as one row (nothing when hidden).
    pub fn ui(&mut self, ui: &mut Ui) {
        if !self.visible {
            return;
        }
        ui.horizontal(|ui| {
            let mut selected = self.bypass.as_selected();
            if ui.add(LabeledToggle::new(&mut selected, &self.toggle)).changed() {
                self.bypass = BypassState::from_selected(selected);
            }

            ui.label(labels::FREQUENCY);
            self.frequency_field.show(ui, &mut self.frequency);
            ui.label(labels::Q_FACTOR);
            self.q_field.show(ui, &mut self.q_factor);
        });
    }
}
