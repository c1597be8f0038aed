use portfolio::format::{
    CurrencyCode, CurrencyFormat, NOT_AVAILABLE, TrendDirection, format_compact, format_currency,
    format_percent_change,
};
use proptest::prelude::*;

#[cfg(test)]
mod percent_change_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_sign_agrees_with_direction(value in -1.0e6f64..1.0e6) {
            let change = format_percent_change(value);

            prop_assert!(change.text.ends_with('%'));
            match change.direction {
                TrendDirection::Up => {
                    prop_assert!(value > 0.0);
                    prop_assert!(change.text.starts_with('+'));
                }
                TrendDirection::Down => {
                    prop_assert!(value < 0.0);
                    prop_assert!(change.text.starts_with('-'));
                }
                TrendDirection::Flat => {
                    prop_assert_eq!(value, 0.0);
                    prop_assert_eq!(change.text.as_str(), "0.00%");
                }
            }
        }

        #[test]
        fn test_always_two_decimals(value in -1.0e6f64..1.0e6) {
            let change = format_percent_change(value);
            let digits = change.text.trim_end_matches('%');
            let decimals = digits.split_once('.').map(|(_, d)| d.len());
            prop_assert_eq!(decimals, Some(2));
        }
    }
}

#[cfg(test)]
mod currency_properties {
    use super::*;

    proptest! {
        #[test]
        fn test_negative_values_lead_with_minus(value in -1.0e12f64..-0.01) {
            for options in [CurrencyFormat::default(), CurrencyFormat::compact(), CurrencyFormat::signed()] {
                let text = format_currency(value, CurrencyCode::Usd, options);
                prop_assert!(text.starts_with("-$"), "{} rendered as {}", value, text);
            }
        }

        #[test]
        fn test_plus_sign_only_when_requested(value in 0.01f64..1.0e12) {
            let plain = format_currency(value, CurrencyCode::Eur, CurrencyFormat::default());
            let signed = format_currency(value, CurrencyCode::Eur, CurrencyFormat::signed());
            prop_assert!(plain.starts_with('€'));
            prop_assert!(signed.starts_with("+€"));
        }

        #[test]
        fn test_compact_suffix_thresholds(value in 0.0f64..9.0e11) {
            let text = format_currency(value, CurrencyCode::Usd, CurrencyFormat::compact());
            let rounded_cents = (value * 100.0).round() / 100.0;

            if value >= 1.0e9 {
                prop_assert!(text.ends_with('B'));
            } else if value >= 1.0e6 {
                prop_assert!(text.ends_with('M') || text.ends_with('B'));
            } else if rounded_cents >= 1_000.0 {
                prop_assert!(text.ends_with('K') || text.ends_with('M'));
            } else {
                prop_assert!(text.chars().last().is_some_and(|c| c.is_ascii_digit()));
            }
        }

        #[test]
        fn test_compact_mantissa_stays_below_one_thousand(value in 0.0f64..9.0e11) {
            let text = format_compact(value);
            let mantissa: f64 = text
                .trim_end_matches(['K', 'M', 'B'])
                .parse()
                .unwrap_or(f64::MAX);
            prop_assert!(mantissa < 1_000.0, "{} rendered as {}", value, text);
        }

        #[test]
        fn test_grouped_output_round_trips_to_cents(value in -1.0e9f64..1.0e9) {
            let text = format_currency(value, CurrencyCode::Usd, CurrencyFormat::default());
            prop_assert_ne!(text.as_str(), NOT_AVAILABLE);
            let parsed: f64 = text.replace(['$', ','], "").parse().unwrap_or(f64::NAN);
            prop_assert!((parsed - value).abs() <= 0.005 + value.abs() * 1e-12);
        }
    }
}
