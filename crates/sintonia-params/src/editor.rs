//! The composed parameter editor.
//!
//! [`ParameterEditor`] is the single editing unit reused by every control in
//! the GUI layer: a [`NumericRange`] plus an optional [`PrecisionSpec`] and
//! an optional [`SignSpec`], holding one validated current value. The
//! original subclass-per-editor-kind hierarchy (frequency, gain, bandwidth
//! editors each overriding one method) is flattened into factory
//! constructors on this one type.

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};

use crate::error::ParseError;
use crate::precision::PrecisionSpec;
use crate::range::NumericRange;
use crate::sign::SignSpec;

/// Default step for frequency editors (arrow keys, spinner).
pub const FREQUENCY_INCREMENT_DEFAULT_HZ: f64 = 10.0;

/// Default precision cutoff for frequency editors.
pub const PRECISION_CUTOFF_FREQUENCY_DEFAULT_HZ: f64 = 100.0;

/// Default decimal places for frequency editors below the cutoff.
pub const FREQUENCY_DECIMAL_PLACES_DEFAULT: u32 = 1;

/// Default step for gain editors.
pub const GAIN_INCREMENT_DEFAULT_DB: f64 = 0.1;

/// Default step for bandwidth/Q editors.
pub const BANDWIDTH_INCREMENT_DEFAULT: f64 = 0.01;

/// Default step for delay editors.
pub const DELAY_INCREMENT_DEFAULT_MS: f64 = 0.1;

/// A range-clamped, precision-adjusted, sign-aware editable parameter.
///
/// The editor owns the current value; the GUI layer owns the text buffer and
/// forwards commit events here. Malformed commits fail soft: the previous
/// value is retained and a [`ParseError`] is handed back for UI feedback.
/// Out-of-range values — typed, programmatic, or at construction — are
/// silently clamped to the nearest bound, spinner-style.
///
/// # Example
///
/// ```rust
/// use sintonia_params::ParameterEditor;
///
/// let mut gain = ParameterEditor::gain(-18.0, 18.0, 0.0, true);
/// gain.set_text("6").unwrap();
/// assert_eq!(gain.value(), -6.0);
/// gain.set_text("+6").unwrap();
/// assert_eq!(gain.value(), 6.0);
/// assert_eq!(gain.display_text(), "+6 dB");
/// ```
#[derive(Debug, Clone)]
pub struct ParameterEditor {
    range: NumericRange,
    precision: Option<PrecisionSpec>,
    sign: Option<SignSpec>,
    unit_label: &'static str,
    display_decimals: u32,
    value: f64,
}

impl ParameterEditor {
    /// Create an editor over `range` with no precision or sign policy.
    ///
    /// The current value starts at the range's default. Display formatting
    /// keeps up to two decimal places until overridden.
    pub fn new(range: NumericRange) -> Self {
        Self {
            range,
            precision: None,
            sign: None,
            unit_label: "",
            display_decimals: 2,
            value: range.default_value(),
        }
    }

    /// Frequency editor with the stock cutoff/precision defaults
    /// (integer display at or above 100 Hz, one decimal below, 10 Hz steps).
    pub fn frequency(minimum_hz: f64, maximum_hz: f64, initial_hz: f64) -> Self {
        Self::frequency_with_precision(
            minimum_hz,
            maximum_hz,
            initial_hz,
            PRECISION_CUTOFF_FREQUENCY_DEFAULT_HZ,
            FREQUENCY_DECIMAL_PLACES_DEFAULT,
        )
    }

    /// Frequency editor with an explicit precision cutoff and decimal count.
    pub fn frequency_with_precision(
        minimum_hz: f64,
        maximum_hz: f64,
        initial_hz: f64,
        precision_cutoff_hz: f64,
        decimal_places: u32,
    ) -> Self {
        Self::new(NumericRange::new(
            minimum_hz,
            maximum_hz,
            initial_hz,
            FREQUENCY_INCREMENT_DEFAULT_HZ,
        ))
        .with_precision(PrecisionSpec::new(precision_cutoff_hz, decimal_places))
        .with_unit(" Hz")
        .with_display_decimals(decimal_places)
    }

    /// Gain editor in dB, 0.1 dB steps, one display decimal.
    ///
    /// `default_to_negative` makes unsigned input read as attenuation and
    /// puts an explicit "+" on displayed boost values.
    pub fn gain(
        minimum_db: f64,
        maximum_db: f64,
        default_db: f64,
        default_to_negative: bool,
    ) -> Self {
        Self::new(NumericRange::new(
            minimum_db,
            maximum_db,
            default_db,
            GAIN_INCREMENT_DEFAULT_DB,
        ))
        .with_sign(SignSpec::new(default_to_negative))
        .with_unit(" dB")
        .with_display_decimals(1)
    }

    /// Bandwidth (octaves) or Q editor, 0.01 steps, two display decimals.
    pub fn bandwidth(minimum: f64, maximum: f64, initial: f64) -> Self {
        Self::new(NumericRange::new(
            minimum,
            maximum,
            initial,
            BANDWIDTH_INCREMENT_DEFAULT,
        ))
        .with_display_decimals(2)
    }

    /// Delay editor in milliseconds, 0.1 ms steps, two display decimals.
    pub fn delay(minimum_ms: f64, maximum_ms: f64, initial_ms: f64) -> Self {
        Self::new(NumericRange::new(
            minimum_ms,
            maximum_ms,
            initial_ms,
            DELAY_INCREMENT_DEFAULT_MS,
        ))
        .with_unit(" ms")
        .with_display_decimals(2)
    }

    /// Set the precision policy. Builder pattern.
    pub fn with_precision(mut self, precision: PrecisionSpec) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the sign policy. Builder pattern.
    pub fn with_sign(mut self, sign: SignSpec) -> Self {
        self.sign = Some(sign);
        self
    }

    /// Set the measurement unit appended to display text (e.g., `" Hz"`).
    pub fn with_unit(mut self, unit_label: &'static str) -> Self {
        self.unit_label = unit_label;
        self
    }

    /// Set the display decimal count used when no precision policy applies.
    pub fn with_display_decimals(mut self, decimals: u32) -> Self {
        self.display_decimals = decimals;
        self
    }

    /// Override the step increment (rebuilds the immutable range).
    pub fn with_increment(mut self, increment: f64) -> Self {
        self.range = NumericRange::new(
            self.range.minimum(),
            self.range.maximum(),
            self.range.default_value(),
            increment,
        );
        self
    }

    /// The editor's range.
    #[inline]
    pub const fn range(&self) -> &NumericRange {
        &self.range
    }

    /// The precision policy, if configured.
    #[inline]
    pub const fn precision(&self) -> Option<PrecisionSpec> {
        self.precision
    }

    /// The sign policy, if configured.
    #[inline]
    pub const fn sign(&self) -> Option<SignSpec> {
        self.sign
    }

    /// The measurement unit label (may be empty).
    #[inline]
    pub const fn unit_label(&self) -> &'static str {
        self.unit_label
    }

    /// Current committed value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Set the value programmatically, clamped to the range.
    ///
    /// Any display bound to this editor must be refreshed afterwards.
    pub fn set_value(&mut self, value: f64) {
        self.value = self.range.clamp(value);
    }

    /// Commit raw text.
    ///
    /// Trims, strips a trailing unit label, normalizes the sign (if a sign
    /// policy is configured), parses, clamps, and precision-adjusts (if a
    /// precision policy is configured). On success the committed value is
    /// stored and returned. On failure the previous value is retained and
    /// the error describes the rejected text.
    pub fn set_text(&mut self, raw: &str) -> Result<f64, ParseError> {
        let mut text = raw.trim();
        let unit = self.unit_label.trim();
        if !unit.is_empty()
            && let Some(stripped) = text.strip_suffix(unit)
        {
            text = stripped.trim_end();
        }

        let normalized = match self.sign {
            Some(sign) => sign.undecorate(text),
            None => text.to_string(),
        };

        let parsed: f64 = match normalized.parse() {
            Ok(value) => value,
            Err(_) => return Err(self.reject(text)),
        };
        if parsed.is_nan() {
            return Err(self.reject(text));
        }

        let mut committed = self.range.clamp(parsed);
        if let Some(precision) = self.precision {
            committed = self.range.clamp(precision.adjust(committed));
        }
        self.value = committed;
        Ok(committed)
    }

    /// Current value rendered for display: precision-adjusted, formatted
    /// with trailing zeros trimmed, sign-decorated, unit-suffixed.
    pub fn display_text(&self) -> String {
        let shown = self.precision.map_or(self.value, |p| p.adjust(self.value));
        // Normalize -0.0 so zero never carries a sign prefix.
        let shown = if shown == 0.0 { 0.0 } else { shown };

        let decimals = match self.precision {
            Some(p) if shown >= p.cutoff() => 0,
            Some(p) => p.decimal_places(),
            None => self.display_decimals,
        };

        let mut text = format_trimmed(shown, decimals);
        if let Some(sign) = self.sign {
            text = sign.decorate(shown, &text);
        }
        if !self.unit_label.is_empty() {
            text.push_str(self.unit_label);
        }
        text
    }

    /// Step the value up by the range increment, clamped (no wraparound).
    pub fn increment(&mut self) {
        self.set_value(self.value + self.range.increment());
    }

    /// Step the value down by the range increment, clamped (no wraparound).
    pub fn decrement(&mut self) {
        self.set_value(self.value - self.range.increment());
    }

    /// Reset to the range's default value.
    pub fn reset(&mut self) {
        self.set_value(self.range.default_value());
    }

    fn reject(&self, text: &str) -> ParseError {
        #[cfg(feature = "tracing")]
        tracing::debug!("rejected parameter commit: '{text}'");
        ParseError {
            text: text.to_string(),
        }
    }
}

/// Format with a fixed decimal count, then trim trailing zeros (and a bare
/// trailing point), matching a number formatter with a minimum of zero
/// fraction digits.
fn format_trimmed(value: f64, decimals: u32) -> String {
    let decimals = decimals as usize;
    let mut text = format!("{value:.decimals$}");
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
