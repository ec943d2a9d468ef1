//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, MAX_PAGE_SIZE};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![
        Just(OutputFormat::Table),
        Just(OutputFormat::Json),
        Just(OutputFormat::Csv),
        Just(OutputFormat::Tsv),
    ]
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(1u32..=MAX_PAGE_SIZE),
        prop::option::of(1u64..=600),
        prop::option::of(format_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(
            |(reject_past_dates, default_page_size, wait, output_format, disable_autoinit)| {
                Config {
                    reject_past_dates,
                    default_page_size,
                    maximum_lock_wait_seconds: wait,
                    output_format,
                    disable_autoinit,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Higher precedence wins wherever it sets a value
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.reject_past_dates, high.reject_past_dates.or(low.reject_past_dates));
        prop_assert_eq!(merged.default_page_size, high.default_page_size.or(low.default_page_size));
        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging two valid configs stays valid
    #[test]
    fn config_merge_preserves_validity(low in config_strategy(), high in config_strategy()) {
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // YAML serialization preserves every field
    #[test]
    fn config_yaml_preserves_fields(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
