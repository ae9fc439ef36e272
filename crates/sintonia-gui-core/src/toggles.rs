//! Toggle caption/tooltip factories.
//!
//! Two-caption toggles show one text while selected and another while
//! deselected ("Muted"/"Mute", "Bypassed"/"Enabled"). These factories carry
//! the caption pairs, tooltips, and style classes of the legacy controls;
//! the selected/deselected convention itself is handled by
//! [`BypassState`](crate::BypassState) and [`Polarity`](crate::Polarity).

use crate::labels;

/// Captions, tooltip, and style class for a two-state toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleSpec {
    /// Caption while the toggle is selected.
    pub on_text: String,
    /// Caption while the toggle is deselected.
    pub off_text: String,
    /// Hover tooltip.
    pub tooltip: String,
    /// Style class hook for themed hosts.
    pub style_class: &'static str,
}

impl ToggleSpec {
    /// The caption for the given selected state.
    pub fn caption(&self, selected: bool) -> &str {
        if selected { &self.on_text } else { &self.off_text }
    }
}

/// Polarity toggle: "Reversed" while selected, "Normal" otherwise.
pub fn polarity() -> ToggleSpec {
    ToggleSpec {
        on_text: "Reversed".into(),
        off_text: "Normal".into(),
        tooltip: "Click to Toggle Polarity Status Between Normal and Reversed".into(),
        style_class: "polarity-toggle",
    }
}

/// Mute toggle: "Muted" while selected, "Mute" otherwise.
pub fn mute() -> ToggleSpec {
    ToggleSpec {
        on_text: "Muted".into(),
        off_text: "Mute".into(),
        tooltip: "Click to Toggle Mute Status Between Muted and Unmuted".into(),
        style_class: "mute-toggle",
    }
}

/// General processing bypass toggle with caller-supplied captions.
pub fn processing(
    on_text: impl Into<String>,
    off_text: impl Into<String>,
    tooltip: impl Into<String>,
) -> ToggleSpec {
    ToggleSpec {
        on_text: on_text.into(),
        off_text: off_text.into(),
        tooltip: tooltip.into(),
        style_class: "bypass-toggle",
    }
}

/// Bypass toggle for a named filter: "<name> Bypassed" / "<name> Enabled".
pub fn filter(name: &str) -> ToggleSpec {
    processing(
        format!("{name} Bypassed"),
        format!("{name} Enabled"),
        format!("Bypass/Enable {name} Filter"),
    )
}

/// Bypass toggle for a numbered filter in a dense multi-band layout.
pub fn single_filter(number: usize) -> ToggleSpec {
    processing(
        format!("{number} Bypassed"),
        format!("{number} Enabled"),
        "Bypass/Enable Filter",
    )
}

/// Bypass toggle for a high/low-pass stage: bare "Bypassed"/"Enabled"
/// captions, named tooltip.
pub fn high_low_pass(name: &str) -> ToggleSpec {
    processing("Bypassed", "Enabled", format!("Bypass/Enable {name} Filter"))
}

/// Master toggle over every filter stage at once.
pub fn all_filters() -> ToggleSpec {
    processing("<<<", ">>>", "Bypass/Enable All Filters")
}

/// Bypass toggle for the equalization section.
pub fn equalization(abbreviated: bool) -> ToggleSpec {
    filter(if abbreviated {
        labels::EQUALIZATION_ABBREVIATED
    } else {
        labels::EQUALIZATION
    })
}

/// Bypass toggle for the parametric section.
pub fn parametric() -> ToggleSpec {
    filter(labels::PARAMETRIC)
}

/// Bypass toggle for the all-pass section.
pub fn all_pass() -> ToggleSpec {
    filter("All Pass")
}
