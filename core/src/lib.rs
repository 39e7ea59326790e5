//! Wall-clock benchmarks for interchangeable sequence containers.
//!
//! A [`workload::Workload`] is timed against every container kind it declares,
//! for each element payload in [`elem::ElementKind`], over a
//! [`sweep::SizeSweep`]. The [`bench`] driver averages repeated trials and the
//! [`runner::Runner`] hands the resulting columns to a [`sink::ResultSink`].

pub mod bench;
pub mod config;
pub mod elem;
pub mod progress;
pub mod runner;
pub mod seq;
pub mod sink;
pub mod strategy;
pub mod sweep;
pub mod workload;

pub use bench::{DEFAULT_REPEATS, Series};
pub use config::{BenchConfig, TimeUnit};
pub use elem::{Element, ElementKind};
pub use progress::{ConsoleProgress, ProgressReporter, SilentProgress};
pub use runner::{ALL_SELECTOR, Runner, Selection};
pub use seq::{ContainerKind, Sequence};
pub use sink::{CsvSink, MemorySink, ResultSink};
pub use strategy::Strategy;
pub use sweep::SizeSweep;
pub use workload::{Combination, Workload};

#[cfg(test)]
mod bench_test;
#[cfg(test)]
mod config_test;
#[cfg(test)]
mod workload_test;
