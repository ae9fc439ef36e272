//! Master output level controls.

use egui::Ui;
use sintonia_params::ParameterEditor;

use crate::bypass::Polarity;
use crate::toggles::{self, ToggleSpec};
use crate::widgets::{LabeledToggle, NumericField};

/// Master gain lower bound: full attenuation.
pub const GAIN_MINIMUM_DB: f64 = f64::NEG_INFINITY;
/// Master gain upper bound: unity.
pub const GAIN_MAXIMUM_DB: f64 = 0.0;

/// Master level strip: polarity toggle, gain editor, mute toggle.
pub struct MasterLevelControls {
    /// Output signal polarity.
    pub polarity: Polarity,
    /// Master gain editor in dB, attenuate-only.
    pub gain: ParameterEditor,
    /// Whether the output is muted.
    pub muted: bool,
    polarity_toggle: ToggleSpec,
    mute_toggle: ToggleSpec,
    gain_field: NumericField,
}

impl MasterLevelControls {
    /// Create the master level strip.
    ///
    /// `default_to_negative_gain` applies the attenuator input convention
    /// to the gain editor: unsigned input reads as negative dB.
    pub fn new(default_to_negative_gain: bool) -> Self {
        let gain = ParameterEditor::gain(
            GAIN_MINIMUM_DB,
            GAIN_MAXIMUM_DB,
            0.0,
            default_to_negative_gain,
        );
        Self {
            polarity: Polarity::Normal,
            polarity_toggle: toggles::polarity(),
            mute_toggle: toggles::mute(),
            gain_field: NumericField::new(&gain).with_width(100.0),
            gain,
            muted: false,
        }
    }

    /// Render the strip as one row.
    pub fn ui(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let mut reversed = self.polarity.as_selected();
            if ui
                .add(LabeledToggle::new(&mut reversed, &self.polarity_toggle).min_width(120.0))
                .changed()
            {
                self.polarity = Polarity::from_selected(reversed);
            }

            self.gain_field.show(ui, &mut self.gain);

            ui.add(LabeledToggle::new(&mut self.muted, &self.mute_toggle).min_width(80.0));
        });
    }
}
