use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

use crate::{bench::DEFAULT_REPEATS, sweep::SizeSweep, workload::Workload};

/// Sweep length used by every workload unless configured otherwise.
pub const DEFAULT_STEPS: usize = 10;

/// Unit the averaged durations are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "ns", alias = "nanoseconds")]
    Nanoseconds,
    #[default]
    #[serde(rename = "us", alias = "microseconds")]
    Microseconds,
    #[serde(rename = "ms", alias = "milliseconds")]
    Milliseconds,
}

impl TimeUnit {
    /// Whole units contained in `duration` (truncated).
    pub fn count(self, duration: Duration) -> f64 {
        let whole = match self {
            TimeUnit::Nanoseconds => duration.as_nanos(),
            TimeUnit::Microseconds => duration.as_micros(),
            TimeUnit::Milliseconds => duration.as_millis(),
        };
        whole as f64
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "ns" | "nanoseconds" => Ok(TimeUnit::Nanoseconds),
            "us" | "microseconds" => Ok(TimeUnit::Microseconds),
            "ms" | "milliseconds" => Ok(TimeUnit::Milliseconds),
            other => Err(anyhow!("unknown time unit '{other}' (expected ns, us or ms)")),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Resolved benchmark settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub repeats: u32,
    pub steps: usize,
    pub unit: TimeUnit,
    pub output_dir: PathBuf,
    pub seed: Option<u64>,
    pub color: bool,
    pub(crate) scales: BTreeMap<Workload, usize>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            repeats: DEFAULT_REPEATS,
            steps: DEFAULT_STEPS,
            unit: TimeUnit::default(),
            output_dir: PathBuf::from("."),
            seed: None,
            color: true,
            scales: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    repeats: Option<u32>,
    #[serde(default)]
    steps: Option<usize>,
    #[serde(default)]
    unit: Option<TimeUnit>,
    #[serde(default)]
    output_dir: Option<PathBuf>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    color: Option<bool>,
    #[serde(default)]
    scales: BTreeMap<String, usize>,
}

impl BenchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("read config file {}", path.display()))?;
        Self::from_toml_str(&raw).with_context(|| format!("load config file {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(raw).context("parse benchmark config")?;
        let mut config = Self::default();
        if let Some(repeats) = file.repeats {
            config.repeats = repeats;
        }
        if let Some(steps) = file.steps {
            config.steps = steps;
        }
        if let Some(unit) = file.unit {
            config.unit = unit;
        }
        if let Some(dir) = file.output_dir {
            config.output_dir = dir;
        }
        config.seed = file.seed;
        if let Some(color) = file.color {
            config.color = color;
        }
        for (key, scale) in file.scales {
            let workload = Workload::from_key(&key).ok_or_else(|| anyhow!("unknown workload '{key}' in [scales]"))?;
            config.scales.insert(workload, scale);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.repeats == 0 {
            bail!("repeats must be at least 1");
        }
        if self.steps == 0 {
            bail!("steps must be at least 1");
        }
        if let Some((workload, _)) = self.scales.iter().find(|(_, scale)| **scale == 0) {
            bail!("scale for '{}' must be positive", workload.key());
        }
        Ok(())
    }

    pub fn set_scale(&mut self, workload: Workload, scale: usize) {
        self.scales.insert(workload, scale);
    }

    pub fn scale_for(&self, workload: Workload) -> usize {
        self.scales.get(&workload).copied().unwrap_or_else(|| workload.default_scale())
    }

    pub fn sweep_for(&self, workload: Workload) -> Result<SizeSweep> {
        SizeSweep::scaled(self.scale_for(workload), self.steps)
            .with_context(|| format!("build size sweep for {}", workload.key()))
    }
}
