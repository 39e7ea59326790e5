//! Repeat-and-average driver.
//!
//! For every size in a sweep the driver builds a fresh container through the
//! strategy, times one execution of the workload against it, drops it, and
//! repeats. The per-size mean is what ends up in the result tables; single
//! trial samples are never kept.

use std::time::Duration;

use anyhow::{Result, bail};
use rand::Rng;
use tracing::{debug, trace};

use crate::{elem::Element, seq::Sequence, strategy::Strategy, sweep::SizeSweep, workload::Workload};

/// Trials averaged per size unless configured otherwise.
pub const DEFAULT_REPEATS: u32 = 7;

/// Mean duration per sweep size, in sweep order.
pub type Series = Vec<Duration>;

pub fn run<S, T, R>(
    sweep: &SizeSweep,
    workload: Workload,
    strategy: Strategy,
    repeats: u32,
    rng: &mut R,
) -> Result<Series>
where
    S: Sequence<T>,
    T: Element,
    R: Rng,
{
    if repeats == 0 {
        bail!("repeat count must be at least 1");
    }

    let mut series = Series::with_capacity(sweep.len());
    for &size in sweep.iter() {
        let mut total = Duration::ZERO;
        for repeat in 0..repeats {
            let elapsed = trial::<S, T, R>(workload, strategy, size, rng);
            trace!(workload = workload.key(), %strategy, size, repeat, ?elapsed, "trial finished");
            total += elapsed;
        }
        let mean = mean_of(total, repeats);
        debug!(workload = workload.key(), %strategy, element = T::NAME, size, ?mean, "size measured");
        series.push(mean);
    }
    Ok(series)
}

/// Per-trial mean of `repeats` trials that took `total` together.
pub(crate) fn mean_of(total: Duration, repeats: u32) -> Duration {
    total / repeats
}

/// One measured execution on a container nobody else has touched.
fn trial<S, T, R>(workload: Workload, strategy: Strategy, size: usize, rng: &mut R) -> Duration
where
    S: Sequence<T>,
    T: Element,
    R: Rng,
{
    let mut container = strategy.prepare::<S, T, R>(size, rng);
    let elapsed = workload.execute::<S, T, R>(&mut container, size, rng);
    drop(container);
    elapsed
}
