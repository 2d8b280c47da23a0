use expenditure_outlook::core::derive_bands;
use proptest::prelude::*;

proptest! {
    #[test]
    fn bands_enclose_non_negative_points(
        points in proptest::collection::vec(0.0f64..1_000_000.0, 2..64),
        start_pct in 0.0f64..0.5,
        end_pct in 0.0f64..0.5,
        z_score in 0.0f64..3.0
    ) {
        let bands = derive_bands(&points, start_pct, end_pct, z_score);
        prop_assert_eq!(bands.upper.len(), points.len());
        prop_assert_eq!(bands.lower.len(), points.len());

        for (i, value) in points.iter().enumerate() {
            prop_assert!(bands.lower[i] <= *value, "lower[{}] = {} > {}", i, bands.lower[i], value);
            prop_assert!(*value <= bands.upper[i], "upper[{}] = {} < {}", i, bands.upper[i], value);
        }
    }

    #[test]
    fn constant_uncertainty_gives_constant_relative_width(
        points in proptest::collection::vec(1.0f64..1_000_000.0, 2..64),
        pct in 0.0f64..0.5,
        z_score in 0.0f64..3.0
    ) {
        let bands = derive_bands(&points, pct, pct, z_score);
        let expected = 2.0 * pct * z_score;

        for (i, value) in points.iter().enumerate() {
            let ratio = (bands.upper[i] - bands.lower[i]) / value;
            prop_assert!((ratio - expected).abs() <= 1e-9, "ratio {} != {}", ratio, expected);
        }
    }
}
