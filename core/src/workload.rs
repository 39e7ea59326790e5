//! Measurable operations and the container/strategy pairings each one is
//! reported for.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::Rng;

use crate::{elem::Element, seq::ContainerKind, seq::Sequence, strategy::Strategy};

/// One column of a workload's result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combination {
    pub kind: ContainerKind,
    pub strategy: Strategy,
    pub label: &'static str,
}

impl Combination {
    const fn new(kind: ContainerKind, strategy: Strategy, label: &'static str) -> Self {
        Self { kind, strategy, label }
    }
}

const PUSH_BACK_COMBINATIONS: &[Combination] = &[
    Combination::new(ContainerKind::LinkedList, Strategy::Empty, "std::list"),
    Combination::new(ContainerKind::Deque, Strategy::Empty, "std::deque"),
    Combination::new(ContainerKind::Vector, Strategy::Empty, "std::vector"),
    Combination::new(ContainerKind::Vector, Strategy::Preallocated, "preallocated std::vector"),
];

const LINEAR_SEARCH_COMBINATIONS: &[Combination] = &[
    Combination::new(ContainerKind::LinkedList, Strategy::FilledRandom, "std::list"),
    Combination::new(ContainerKind::Deque, Strategy::FilledRandom, "std::deque"),
    Combination::new(ContainerKind::Vector, Strategy::FilledRandom, "std::vector"),
];

const RANDOM_INSERT_COMBINATIONS: &[Combination] = &[
    Combination::new(ContainerKind::LinkedList, Strategy::FilledRandom, "std::list"),
    Combination::new(ContainerKind::Deque, Strategy::FilledRandom, "std::deque"),
    Combination::new(ContainerKind::Vector, Strategy::FilledRandom, "std::vector"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Workload {
    /// Append `size` random values at the end.
    PushBack,
    /// Run `size` full scans for a value that is never present.
    LinearSearch,
    /// Insert `size` random values at uniformly random positions.
    RandomInsert,
}

impl Workload {
    /// Declared execution order for "run all".
    pub const ALL: [Workload; 3] = [Workload::PushBack, Workload::LinearSearch, Workload::RandomInsert];

    pub fn name(self) -> &'static str {
        match self {
            Workload::PushBack => "Push Back",
            Workload::LinearSearch => "Linear Search",
            Workload::RandomInsert => "Random Insert",
        }
    }

    /// Selector token accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Workload::PushBack => "push-back",
            Workload::LinearSearch => "linear-search",
            Workload::RandomInsert => "random-insert",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Workload::PushBack => "Tests containers ability to add elements to the back.",
            Workload::LinearSearch => "Tests ability linearly search for elements in the container.",
            Workload::RandomInsert => "Tests containers ability to insert elements into a random position.",
        }
    }

    /// Directory (relative to the results root) the tables are written to.
    pub fn output_dir(self) -> &'static str {
        match self {
            Workload::PushBack => "pushback",
            Workload::LinearSearch => "linearsearch",
            Workload::RandomInsert => "randominsert",
        }
    }

    /// Sweep step used when the configuration does not override it.
    pub fn default_scale(self) -> usize {
        match self {
            Workload::PushBack => 100_000,
            Workload::LinearSearch | Workload::RandomInsert => 1_000,
        }
    }

    pub fn combinations(self) -> &'static [Combination] {
        match self {
            Workload::PushBack => PUSH_BACK_COMBINATIONS,
            Workload::LinearSearch => LINEAR_SEARCH_COMBINATIONS,
            Workload::RandomInsert => RANDOM_INSERT_COMBINATIONS,
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.key() == raw)
    }

    /// Runs the operation once against `container` and returns the time spent
    /// inside the timed region.
    pub fn execute<S, T, R>(self, container: &mut S, size: usize, rng: &mut R) -> Duration
    where
        S: Sequence<T>,
        T: Element,
        R: Rng,
    {
        match self {
            Workload::PushBack => push_back::<S, T, R>(container, size, rng),
            Workload::LinearSearch => linear_search::<S, T>(container, size),
            Workload::RandomInsert => random_insert::<S, T, R>(container, size, rng),
        }
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn push_back<S, T, R>(container: &mut S, size: usize, rng: &mut R) -> Duration
where
    S: Sequence<T>,
    T: Element,
    R: Rng,
{
    let start = Instant::now();
    for _ in 0..size {
        container.push_back(T::random(rng));
    }
    start.elapsed()
}

fn linear_search<S, T>(container: &mut S, size: usize) -> Duration
where
    S: Sequence<T>,
    T: Element,
{
    let needle = T::absent();
    let container = &*container;
    let mut hits = 0usize;
    let start = Instant::now();
    for _ in 0..size {
        if black_box(container).contains_value(black_box(&needle)) {
            hits += 1;
        }
    }
    let elapsed = start.elapsed();
    black_box(hits);
    elapsed
}

fn random_insert<S, T, R>(container: &mut S, size: usize, rng: &mut R) -> Duration
where
    S: Sequence<T>,
    T: Element,
    R: Rng,
{
    let start = Instant::now();
    for _ in 0..size {
        let value = T::random(rng);
        let index = rng.gen_range(0..=container.len());
        container.insert_at(index, value);
    }
    start.elapsed()
}
