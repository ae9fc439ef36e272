//! Magnitude-dependent display precision.
//!
//! Frequency editors show "32.5 Hz" but "1500 Hz": below a cutoff magnitude,
//! fractional digits materially affect filter behavior; above it they are
//! visual noise. [`PrecisionSpec`] captures that cutoff and the decimal
//! precision used below it.

/// Rounding policy that switches from decimal places to whole integers at a
/// cutoff magnitude.
///
/// Values `>= cutoff` round to the nearest integer; values `< cutoff` round
/// to `decimal_places` decimal digits. Ties round half away from zero in
/// both modes. The cutoff itself takes the integer branch.
///
/// # Example
///
/// ```rust
/// use sintonia_params::PrecisionSpec;
///
/// let spec = PrecisionSpec::new(100.0, 1);
/// assert_eq!(spec.adjust(63.27), 63.3);
/// assert_eq!(spec.adjust(1500.49), 1500.0);
/// assert_eq!(spec.adjust(100.0), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionSpec {
    cutoff: f64,
    decimal_places: u32,
}

impl PrecisionSpec {
    /// Create a new precision policy.
    pub const fn new(cutoff: f64, decimal_places: u32) -> Self {
        Self {
            cutoff,
            decimal_places,
        }
    }

    /// Threshold at or above which values round to whole integers.
    ///
    /// This is a display-precision cutoff, not a filter's audio corner
    /// frequency — the two are unrelated even when both are in Hz.
    #[inline]
    pub const fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Decimal digits kept for values below the cutoff.
    #[inline]
    pub const fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    /// Round `value` per this policy.
    #[inline]
    pub fn adjust(&self, value: f64) -> f64 {
        if value >= self.cutoff {
            libm::round(value)
        } else {
            round_decimal(value, self.decimal_places)
        }
    }
}

/// Round `value` to `decimal_places` decimal digits, ties half away from zero.
///
/// # Example
///
/// ```rust
/// use sintonia_params::round_decimal;
///
/// assert_eq!(round_decimal(0.125, 2), 0.13);
/// assert_eq!(round_decimal(-0.125, 2), -0.13);
/// assert_eq!(round_decimal(63.27, 1), 63.3);
/// ```
#[inline]
pub fn round_decimal(value: f64, decimal_places: u32) -> f64 {
    let scale = libm::pow(10.0, f64::from(decimal_places));
    libm::round(value * scale) / scale
}
