//! Property-based tests for the sintonia-params value-domain core.
//!
//! Covers clamp totality/idempotence, precision-adjustment invariants, sign
//! decoration idempotence, and the display/commit round-trip using proptest
//! for randomized input generation.

use proptest::prelude::*;
use sintonia_params::{NumericRange, ParameterEditor, PrecisionSpec, SignSpec, round_decimal};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Clamp is the identity for any value already inside the range.
    #[test]
    fn clamp_is_identity_within_range(
        value in -10_000.0f64..10_000.0f64,
    ) {
        let range = NumericRange::new(-10_000.0, 10_000.0, 0.0, 1.0);
        prop_assert_eq!(range.clamp(value), value);
    }

    /// Clamp maps any out-of-range value to the nearest bound.
    #[test]
    fn clamp_snaps_outside_values_to_nearest_bound(
        value in -1.0e9f64..1.0e9f64,
    ) {
        let range = NumericRange::new(20.0, 20_000.0, 1000.0, 10.0);
        let clamped = range.clamp(value);
        if value < 20.0 {
            prop_assert_eq!(clamped, 20.0);
        } else if value > 20_000.0 {
            prop_assert_eq!(clamped, 20_000.0);
        } else {
            prop_assert_eq!(clamped, value);
        }
    }

    /// At or above the cutoff the adjusted value is integral; below it the
    /// adjusted value carries at most `decimal_places` fractional digits.
    #[test]
    fn precision_adjustment_respects_cutoff(
        value in 0.0f64..200_000.0f64,
        decimal_places in 0u32..4,
    ) {
        let spec = PrecisionSpec::new(100.0, decimal_places);
        let adjusted = spec.adjust(value);
        if value >= 100.0 {
            prop_assert_eq!(adjusted, adjusted.round(), "expected integer for {}", value);
        } else {
            let rescaled = round_decimal(adjusted, decimal_places);
            prop_assert!(
                (adjusted - rescaled).abs() < 1e-12,
                "more than {} decimals survived for {}: {}",
                decimal_places, value, adjusted
            );
        }
    }

    /// Precision adjustment is idempotent.
    #[test]
    fn precision_adjustment_is_idempotent(
        value in -1000.0f64..200_000.0f64,
    ) {
        let spec = PrecisionSpec::new(100.0, 1);
        let once = spec.adjust(value);
        prop_assert_eq!(spec.adjust(once), once);
    }

    /// Sign decoration is idempotent for any value/text pairing the editor
    /// can produce.
    #[test]
    fn sign_decoration_is_idempotent(
        value in -100.0f64..100.0f64,
        default_to_negative in any::<bool>(),
    ) {
        let sign = SignSpec::new(default_to_negative);
        let text = format!("{value:.1}");
        let once = sign.decorate(value, &text);
        let twice = sign.decorate(value, &once);
        prop_assert_eq!(once, twice);
    }

    /// Undecorated unsigned text always parses to a non-positive value when
    /// the policy defaults to negative.
    #[test]
    fn negative_default_never_yields_positive_from_unsigned_text(
        magnitude in 0.0f64..1000.0f64,
    ) {
        let sign = SignSpec::new(true);
        let text = format!("{magnitude:.2}");
        let parsed: f64 = sign.undecorate(&text).parse().unwrap();
        prop_assert!(parsed <= 0.0, "unsigned '{}' parsed to {}", text, parsed);
    }

    /// Committing the display text back into a frequency editor never moves
    /// the value: display → commit is the identity on committed values.
    #[test]
    fn frequency_display_commit_round_trip(
        raw in 20.0f64..20_000.0f64,
    ) {
        let mut editor = ParameterEditor::frequency(20.0, 20_000.0, 1000.0);
        editor.set_text(&format!("{raw}")).unwrap();
        let committed = editor.value();
        let display = editor.display_text();
        editor.set_text(&display).unwrap();
        prop_assert_eq!(
            editor.value(), committed,
            "display '{}' re-committed to a different value", display
        );
    }

    /// Same round-trip for sign-decorated gain editors, both polarities of
    /// the negative-default flag.
    #[test]
    fn gain_display_commit_round_trip(
        raw in -18.0f64..18.0f64,
        default_to_negative in any::<bool>(),
    ) {
        let mut editor = ParameterEditor::gain(-18.0, 18.0, 0.0, default_to_negative);
        // Commit a value the editor's own display precision can represent.
        editor.set_value(round_decimal(raw, 1));
        let committed = editor.value();
        let display = editor.display_text();
        editor.set_text(&display).unwrap();
        prop_assert_eq!(
            editor.value(), committed,
            "display '{}' re-committed to a different value", display
        );
    }

    /// Stepping up then down returns to the starting value whenever neither
    /// step hit a bound.
    #[test]
    fn stepping_is_reversible_away_from_bounds(
        start in -17.0f64..17.0f64,
    ) {
        let mut editor = ParameterEditor::gain(-18.0, 18.0, 0.0, false);
        editor.set_value(start);
        let before = editor.value();
        editor.increment();
        editor.decrement();
        prop_assert!((editor.value() - before).abs() < 1e-9);
    }

    /// Garbage text never crashes and never changes the committed value.
    #[test]
    fn malformed_text_fails_soft(
        junk in "[a-zA-Z.+-]{1,12}",
    ) {
        let mut editor = ParameterEditor::frequency(20.0, 20_000.0, 1000.0);
        editor.set_value(440.0);
        if editor.set_text(&junk).is_err() {
            prop_assert_eq!(editor.value(), 440.0);
        } else {
            // Strings like "+.5" are legitimate numbers; the value must
            // still be inside the range.
            prop_assert!(editor.range().contains(editor.value()));
        }
    }
}
