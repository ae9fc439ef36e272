//! Explicit "+" handling for negative-by-default parameters.
//!
//! Gain parameters conventionally default to attenuation: a user typing "6"
//! into an attenuator means −6 dB, and a user typing "+6" means exactly what
//! they wrote. [`SignSpec`] reconciles that habit with a numeric parser that
//! only understands an optional leading "-".

#[cfg(not(feature = "std"))]
use alloc::{
    format,
    string::{String, ToString},
};

/// Sign decoration policy for textual numeric input and output.
///
/// With `default_to_negative` set, an unsigned number is interpreted as
/// negative and any displayed positive value gets a "+" prefix so the
/// implicit-minus convention stays readable. Without it, a typed "+" is
/// tolerated but stripped before parsing.
///
/// Zero is neither decorated nor negated — it carries no sign prefix in
/// either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignSpec {
    default_to_negative: bool,
}

impl SignSpec {
    /// Create a new sign policy.
    pub const fn new(default_to_negative: bool) -> Self {
        Self {
            default_to_negative,
        }
    }

    /// Whether unsigned input is interpreted as negative.
    #[inline]
    pub const fn default_to_negative(&self) -> bool {
        self.default_to_negative
    }

    /// Attach the display "+" to `text` when `value` is positive and the
    /// policy defaults to negative. Idempotent; zero and negative values
    /// pass through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sintonia_params::SignSpec;
    ///
    /// let sign = SignSpec::new(true);
    /// assert_eq!(sign.decorate(6.0, "6"), "+6");
    /// assert_eq!(sign.decorate(6.0, "+6"), "+6");
    /// assert_eq!(sign.decorate(0.0, "0"), "0");
    /// assert_eq!(sign.decorate(-6.0, "-6"), "-6");
    /// ```
    pub fn decorate(&self, value: f64, text: &str) -> String {
        if self.default_to_negative && value > 0.0 && !text.starts_with('+') {
            format!("+{text}")
        } else {
            text.to_string()
        }
    }

    /// Normalize committed text for parsing.
    ///
    /// With `default_to_negative`: no explicit sign means negative, so "-"
    /// is prepended; an explicit "+" is honored and stripped. Without it,
    /// only a leading "+" is stripped.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sintonia_params::SignSpec;
    ///
    /// let sign = SignSpec::new(true);
    /// assert_eq!(sign.undecorate("6"), "-6");
    /// assert_eq!(sign.undecorate("+6"), "6");
    /// assert_eq!(sign.undecorate("-6"), "-6");
    /// ```
    pub fn undecorate(&self, text: &str) -> String {
        let trimmed = text.trim();
        if let Some(explicit_positive) = trimmed.strip_prefix('+') {
            return explicit_positive.to_string();
        }
        if self.default_to_negative && !trimmed.is_empty() && !trimmed.starts_with('-') {
            return format!("-{trimmed}");
        }
        trimmed.to_string()
    }
}
