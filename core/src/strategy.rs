use std::fmt;

use rand::Rng;

use crate::{elem::Element, seq::Sequence};

/// How a fresh container is produced at the start of every trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Default-constructed, zero length.
    Empty,
    /// Zero length with storage reserved for the target size.
    Preallocated,
    /// Holds `target_size` random elements.
    FilledRandom,
}

impl Strategy {
    pub fn prepare<S, T, R>(self, target_size: usize, rng: &mut R) -> S
    where
        S: Sequence<T>,
        T: Element,
        R: Rng,
    {
        match self {
            Strategy::Empty => S::default(),
            Strategy::Preallocated => S::with_capacity(target_size),
            Strategy::FilledRandom => {
                let mut container = S::default();
                for _ in 0..target_size {
                    container.push_back(T::random(rng));
                }
                container
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Empty => "empty",
            Strategy::Preallocated => "preallocated",
            Strategy::FilledRandom => "filled-random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
