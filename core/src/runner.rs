//! Orchestrates workloads over the element catalog and forwards the averaged
//! series to a [`ResultSink`].

use std::collections::{LinkedList, VecDeque};
use std::path::Path;

use anyhow::{Context, Result};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    bench::{self, Series},
    config::BenchConfig,
    elem::{Element, ElementKind, TrivialHuge, TrivialLarge, TrivialMedium, TrivialMonster, TrivialSmall},
    progress::ProgressReporter,
    seq::ContainerKind,
    sink::ResultSink,
    sweep::SizeSweep,
    workload::Workload,
};

/// Selector token that runs every workload.
pub const ALL_SELECTOR: &str = "all";

/// Label of the first column of every table, holding the sweep sizes.
pub const ELEMENTS_COLUMN: &str = "elements";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    /// Recognised workloads in first-seen order, without duplicates.
    Only(Vec<Workload>),
}

impl Selection {
    /// Unknown tokens are dropped; `all` anywhere wins over everything else.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut picked = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim();
            if token == ALL_SELECTOR {
                return Selection::All;
            }
            match Workload::from_key(token) {
                Some(workload) if !picked.contains(&workload) => picked.push(workload),
                Some(_) => {}
                None => debug!(token, "ignoring unknown benchmark selector"),
            }
        }
        Selection::Only(picked)
    }

    pub fn workloads(&self) -> Vec<Workload> {
        match self {
            Selection::All => Workload::ALL.to_vec(),
            Selection::Only(workloads) => workloads.clone(),
        }
    }
}

/// Owns the shared random source and drives every (workload, element) pair.
pub struct Runner<K, P> {
    config: BenchConfig,
    rng: StdRng,
    sink: K,
    progress: P,
}

impl<K: ResultSink, P: ProgressReporter> Runner<K, P> {
    pub fn new(config: BenchConfig, sink: K, progress: P) -> Result<Self> {
        config.validate().context("invalid benchmark configuration")?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            rng,
            sink,
            progress,
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn progress(&self) -> &P {
        &self.progress
    }

    pub fn into_parts(self) -> (K, P) {
        (self.sink, self.progress)
    }

    /// Every workload in declared order, each against every element type.
    pub fn run_all(&mut self, elements: &[ElementKind]) -> Result<()> {
        self.progress.suite_started();
        for workload in Workload::ALL {
            self.run_workload(workload, elements)?;
        }
        self.progress.suite_finished();
        Ok(())
    }

    pub fn run_selected<S: AsRef<str>>(&mut self, tokens: &[S], elements: &[ElementKind]) -> Result<()> {
        match Selection::from_tokens(tokens) {
            Selection::All => self.run_all(elements),
            Selection::Only(workloads) => {
                for workload in workloads {
                    self.run_workload(workload, elements)?;
                }
                Ok(())
            }
        }
    }

    pub fn run_workload(&mut self, workload: Workload, elements: &[ElementKind]) -> Result<()> {
        let sweep = self.config.sweep_for(workload)?;
        for &element in elements {
            self.run_pair(workload, element, &sweep)?;
        }
        Ok(())
    }

    fn run_pair(&mut self, workload: Workload, element: ElementKind, sweep: &SizeSweep) -> Result<()> {
        self.progress.started(workload, element);
        let columns = match element {
            ElementKind::Small => self.measure::<TrivialSmall>(workload, sweep)?,
            ElementKind::Medium => self.measure::<TrivialMedium>(workload, sweep)?,
            ElementKind::Large => self.measure::<TrivialLarge>(workload, sweep)?,
            ElementKind::Huge => self.measure::<TrivialHuge>(workload, sweep)?,
            ElementKind::Monster => self.measure::<TrivialMonster>(workload, sweep)?,
        };
        self.report(workload, element, sweep, &columns)?;
        self.progress.finished(workload, element);
        Ok(())
    }

    fn measure<T: Element>(&mut self, workload: Workload, sweep: &SizeSweep) -> Result<Vec<(&'static str, Series)>> {
        let repeats = self.config.repeats;
        let mut columns = Vec::with_capacity(workload.combinations().len());
        for combo in workload.combinations() {
            debug!(
                workload = workload.key(),
                element = T::NAME,
                container = %combo.kind,
                strategy = %combo.strategy,
                "measuring combination"
            );
            let rng = &mut self.rng;
            let series = match combo.kind {
                ContainerKind::LinkedList => {
                    bench::run::<LinkedList<T>, T, StdRng>(sweep, workload, combo.strategy, repeats, rng)
                }
                ContainerKind::Deque => {
                    bench::run::<VecDeque<T>, T, StdRng>(sweep, workload, combo.strategy, repeats, rng)
                }
                ContainerKind::Vector => bench::run::<Vec<T>, T, StdRng>(sweep, workload, combo.strategy, repeats, rng),
            }
            .with_context(|| format!("{} / {} / {}", workload.name(), T::NAME, combo.label))?;
            columns.push((combo.label, series));
        }
        Ok(columns)
    }

    fn report(
        &mut self,
        workload: Workload,
        element: ElementKind,
        sweep: &SizeSweep,
        columns: &[(&'static str, Series)],
    ) -> Result<()> {
        let dir = Path::new(workload.output_dir());
        let file = format!("{}.csv", element.name());
        let unit = self.config.unit;

        self.sink.write(dir, &file, ELEMENTS_COLUMN, &sweep.as_values())?;
        for (label, series) in columns {
            let values: Vec<f64> = series.iter().map(|duration| unit.count(*duration)).collect();
            self.sink.write(dir, &file, label, &values)?;
        }
        Ok(())
    }
}
