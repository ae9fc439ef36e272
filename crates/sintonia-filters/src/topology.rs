//! Filter topology variants.
//!
//! A topology is one concrete design a selector can pick — "4th Order
//! Butterworth Low Pass", "Elliptical High Pass". The GUI layer treats these
//! as opaque identifiers; the DSP side maps them to coefficient math.

/// The band a topology filters — the direction of its roll-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassBand {
    /// Attenuates below the corner frequency.
    HighPass,
    /// Attenuates above the corner frequency.
    LowPass,
}

/// One selectable filter design variant.
///
/// The associated constants below are the full set of topologies the
/// catalog tables draw from. `id` is the stable machine-readable
/// identifier (presets, serialization); `label` is the display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopologyOption {
    /// Which band this topology filters.
    pub pass: PassBand,
    /// Stable identifier for persistence and lookups.
    pub id: &'static str,
    /// Display string for selector lists.
    pub label: &'static str,
    /// Mathematical filter order.
    pub order: u8,
    /// Whether this is the highest-order variant of its line, exposed only
    /// when the caller opts into high-order filters.
    pub highest_order: bool,
}

impl TopologyOption {
    /// Roll-off steepness in dB per octave (6 dB per order).
    #[inline]
    pub fn slope_db_per_octave(&self) -> f64 {
        f64::from(self.order) * 6.0
    }

    /// Plain low-pass.
    pub const LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "low_pass",
        label: "Low Pass",
        order: 1,
        highest_order: false,
    };

    /// 2nd-order high-pass.
    pub const SECOND_ORDER_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "second_order_high_pass",
        label: "2nd Order High Pass",
        order: 2,
        highest_order: false,
    };

    /// Elliptical high-pass.
    pub const ELLIPTICAL_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "elliptical_high_pass",
        label: "Elliptical High Pass",
        order: 2,
        highest_order: false,
    };

    /// 1st-order Butterworth high-pass.
    pub const BUTTERWORTH_1_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "butterworth_1_high_pass",
        label: "1st Order Butterworth High Pass",
        order: 1,
        highest_order: false,
    };

    /// 2nd-order Butterworth high-pass.
    pub const BUTTERWORTH_2_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "butterworth_2_high_pass",
        label: "2nd Order Butterworth High Pass",
        order: 2,
        highest_order: false,
    };

    /// 3rd-order Butterworth high-pass.
    pub const BUTTERWORTH_3_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "butterworth_3_high_pass",
        label: "3rd Order Butterworth High Pass",
        order: 3,
        highest_order: false,
    };

    /// 4th-order Butterworth high-pass.
    pub const BUTTERWORTH_4_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "butterworth_4_high_pass",
        label: "4th Order Butterworth High Pass",
        order: 4,
        highest_order: false,
    };

    /// 8th-order Butterworth high-pass, the opt-in high-order variant.
    pub const BUTTERWORTH_8_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "butterworth_8_high_pass",
        label: "8th Order Butterworth High Pass",
        order: 8,
        highest_order: true,
    };

    /// 1st-order Butterworth low-pass.
    pub const BUTTERWORTH_1_LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "butterworth_1_low_pass",
        label: "1st Order Butterworth Low Pass",
        order: 1,
        highest_order: false,
    };

    /// 2nd-order Butterworth low-pass.
    pub const BUTTERWORTH_2_LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "butterworth_2_low_pass",
        label: "2nd Order Butterworth Low Pass",
        order: 2,
        highest_order: false,
    };

    /// 3rd-order Butterworth low-pass.
    pub const BUTTERWORTH_3_LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "butterworth_3_low_pass",
        label: "3rd Order Butterworth Low Pass",
        order: 3,
        highest_order: false,
    };

    /// 4th-order Butterworth low-pass.
    pub const BUTTERWORTH_4_LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "butterworth_4_low_pass",
        label: "4th Order Butterworth Low Pass",
        order: 4,
        highest_order: false,
    };

    /// 8th-order Butterworth low-pass, the opt-in high-order variant.
    pub const BUTTERWORTH_8_LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "butterworth_8_low_pass",
        label: "8th Order Butterworth Low Pass",
        order: 8,
        highest_order: true,
    };

    /// 2nd-order Linkwitz-Riley high-pass.
    pub const LINKWITZ_RILEY_2_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "linkwitz_riley_2_high_pass",
        label: "2nd Order Linkwitz-Riley High Pass",
        order: 2,
        highest_order: false,
    };

    /// 4th-order Linkwitz-Riley high-pass.
    pub const LINKWITZ_RILEY_4_HIGH_PASS: Self = Self {
        pass: PassBand::HighPass,
        id: "linkwitz_riley_4_high_pass",
        label: "4th Order Linkwitz-Riley High Pass",
        order: 4,
        highest_order: false,
    };

    /// 2nd-order Linkwitz-Riley low-pass.
    pub const LINKWITZ_RILEY_2_LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "linkwitz_riley_2_low_pass",
        label: "2nd Order Linkwitz-Riley Low Pass",
        order: 2,
        highest_order: false,
    };

    /// 4th-order Linkwitz-Riley low-pass.
    pub const LINKWITZ_RILEY_4_LOW_PASS: Self = Self {
        pass: PassBand::LowPass,
        id: "linkwitz_riley_4_low_pass",
        label: "4th Order Linkwitz-Riley Low Pass",
        order: 4,
        highest_order: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slope_follows_order() {
        assert_eq!(TopologyOption::BUTTERWORTH_1_LOW_PASS.slope_db_per_octave(), 6.0);
        assert_eq!(TopologyOption::BUTTERWORTH_4_LOW_PASS.slope_db_per_octave(), 24.0);
        assert_eq!(TopologyOption::BUTTERWORTH_8_HIGH_PASS.slope_db_per_octave(), 48.0);
    }

    #[test]
    fn only_eighth_order_butterworths_are_flagged_highest() {
        assert!(TopologyOption::BUTTERWORTH_8_HIGH_PASS.highest_order);
        assert!(TopologyOption::BUTTERWORTH_8_LOW_PASS.highest_order);
        assert!(!TopologyOption::BUTTERWORTH_4_HIGH_PASS.highest_order);
        assert!(!TopologyOption::LINKWITZ_RILEY_4_LOW_PASS.highest_order);
    }

    #[test]
    fn ids_are_unique() {
        let all = [
            TopologyOption::LOW_PASS,
            TopologyOption::SECOND_ORDER_HIGH_PASS,
            TopologyOption::ELLIPTICAL_HIGH_PASS,
            TopologyOption::BUTTERWORTH_1_HIGH_PASS,
            TopologyOption::BUTTERWORTH_2_HIGH_PASS,
            TopologyOption::BUTTERWORTH_3_HIGH_PASS,
            TopologyOption::BUTTERWORTH_4_HIGH_PASS,
            TopologyOption::BUTTERWORTH_8_HIGH_PASS,
            TopologyOption::BUTTERWORTH_1_LOW_PASS,
            TopologyOption::BUTTERWORTH_2_LOW_PASS,
            TopologyOption::BUTTERWORTH_3_LOW_PASS,
            TopologyOption::BUTTERWORTH_4_LOW_PASS,
            TopologyOption::BUTTERWORTH_8_LOW_PASS,
            TopologyOption::LINKWITZ_RILEY_2_HIGH_PASS,
            TopologyOption::LINKWITZ_RILEY_4_HIGH_PASS,
            TopologyOption::LINKWITZ_RILEY_2_LOW_PASS,
            TopologyOption::LINKWITZ_RILEY_4_LOW_PASS,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.label, b.label);
            }
        }
    }
}
