#[cfg(test)]
mod tests {
    use crate::config::{BenchConfig, DEFAULT_STEPS, TimeUnit};
    use crate::workload::Workload;
    use anyhow::Result;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_defaults_match_reference_setup() -> Result<()> {
        let config = BenchConfig::from_toml_str("")?;
        assert_eq!(config, BenchConfig::default());
        assert_eq!(config.repeats, 7);
        assert_eq!(config.steps, DEFAULT_STEPS);
        assert_eq!(config.unit, TimeUnit::Microseconds);
        assert_eq!(config.seed, None);

        let push = config.sweep_for(Workload::PushBack)?;
        assert_eq!(push.sizes().first(), Some(&100_000));
        assert_eq!(push.sizes().last(), Some(&1_000_000));
        let search = config.sweep_for(Workload::LinearSearch)?;
        assert_eq!(search.sizes().last(), Some(&10_000));
        Ok(())
    }

    #[test]
    fn test_parse_full_config() -> Result<()> {
        let config = BenchConfig::from_toml_str(
            r#"
repeats = 3
steps = 4
unit = "ns"
output_dir = "results"
seed = 99
color = false

[scales]
push-back = 10
random-insert = 5
"#,
        )?;
        assert_eq!(config.repeats, 3);
        assert_eq!(config.unit, TimeUnit::Nanoseconds);
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.seed, Some(99));
        assert!(!config.color);
        assert_eq!(config.sweep_for(Workload::PushBack)?.sizes(), &[10, 20, 30, 40]);
        assert_eq!(config.sweep_for(Workload::RandomInsert)?.sizes(), &[5, 10, 15, 20]);
        assert_eq!(config.scale_for(Workload::LinearSearch), 1_000);
        Ok(())
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(BenchConfig::from_toml_str("repeats = 0").is_err());
        assert!(BenchConfig::from_toml_str("steps = 0").is_err());
        assert!(BenchConfig::from_toml_str("[scales]\npush-back = 0").is_err());
        let err = BenchConfig::from_toml_str("[scales]\nbogus-test = 10").unwrap_err();
        assert!(format!("{err:#}").contains("bogus-test"));
        assert!(BenchConfig::from_toml_str("unit = \"fortnights\"").is_err());
        assert!(BenchConfig::from_toml_str("warmup = 3").is_err());
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "repeats = 2\nunit = \"milliseconds\"")?;
        let config = BenchConfig::load(file.path())?;
        assert_eq!(config.repeats, 2);
        assert_eq!(config.unit, TimeUnit::Milliseconds);

        let missing = BenchConfig::load(&file.path().with_extension("missing"));
        assert!(missing.is_err());
        Ok(())
    }

    #[test]
    fn test_time_unit_counts_truncate() -> Result<()> {
        let d = Duration::from_micros(1_999);
        assert_eq!(TimeUnit::Milliseconds.count(d), 1.0);
        assert_eq!(TimeUnit::Microseconds.count(d), 1_999.0);
        assert_eq!(TimeUnit::Nanoseconds.count(d), 1_999_000.0);
        assert_eq!("US".parse::<TimeUnit>()?, TimeUnit::Microseconds);
        assert!("s".parse::<TimeUnit>().is_err());
        Ok(())
    }
}
