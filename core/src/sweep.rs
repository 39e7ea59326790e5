use std::ops::Deref;

use anyhow::{Result, bail};

/// Ordered input sizes a workload is measured at.
///
/// Always non-empty and strictly increasing; all combinations of one workload
/// share the same sweep so the result columns line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSweep(Vec<usize>);

impl SizeSweep {
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            bail!("size sweep must contain at least one size");
        }
        if sizes[0] == 0 {
            bail!("size sweep entries must be positive");
        }
        if let Some(pair) = sizes.windows(2).find(|pair| pair[0] >= pair[1]) {
            bail!(
                "size sweep must be strictly increasing, found {} followed by {}",
                pair[0],
                pair[1]
            );
        }
        Ok(Self(sizes))
    }

    /// `[scale, 2 * scale, ..., steps * scale]`
    pub fn scaled(scale: usize, steps: usize) -> Result<Self> {
        if scale == 0 || steps == 0 {
            bail!("size sweep needs a positive scale and step count (scale={scale}, steps={steps})");
        }
        let sizes = (1..=steps)
            .map(|step| {
                step.checked_mul(scale)
                    .ok_or_else(|| anyhow::anyhow!("size sweep overflows at step {step} with scale {scale}"))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(sizes)
    }

    pub fn sizes(&self) -> &[usize] {
        &self.0
    }

    /// Sizes as column values for a result sink.
    pub fn as_values(&self) -> Vec<f64> {
        self.0.iter().map(|&size| size as f64).collect()
    }
}

impl Deref for SizeSweep {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}
