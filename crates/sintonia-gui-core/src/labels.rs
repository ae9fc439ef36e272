//! Shared caption strings for signal-processing controls.

use sintonia_filters::FilterFamily;

/// Bandwidth editor caption.
pub const BANDWIDTH: &str = "Bandwidth";

/// Delay editor caption.
pub const DELAY: &str = "Delay";

/// Frequency editor caption.
pub const FREQUENCY: &str = "Frequency";

/// Gain editor caption.
pub const GAIN: &str = "Gain";

/// Mute toggle caption.
pub const MUTE: &str = "Mute";

/// Polarity toggle caption.
pub const POLARITY: &str = "Polarity";

/// Q-factor editor caption.
pub const Q_FACTOR: &str = "Q";

/// Slope selector caption.
pub const SLOPE: &str = "Slope";

/// Equalization section caption.
pub const EQUALIZATION: &str = "Equalization";

/// Abbreviated equalization caption for dense layouts.
pub const EQUALIZATION_ABBREVIATED: &str = "EQ";

/// Parametric section caption.
pub const PARAMETRIC: &str = "Parametric";

/// Tooltip for a family's topology/slope selector.
pub const fn slope_tooltip(family: FilterFamily) -> &'static str {
    match family {
        FilterFamily::HighLowPass => "High/Low Pass Filter Slope",
        FilterFamily::HighPass => "High Pass Filter Slope",
        FilterFamily::LowPass => "Low Pass Filter Slope",
    }
}
