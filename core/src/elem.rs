//! Element payloads the benchmarks are instantiated with.
//!
//! Every payload is a plain array of `u64` lanes so that the only thing that
//! varies between runs is the byte footprint being copied around. Random draws
//! fill the head lane; the all-ones head value is reserved as the "absent" key
//! used by the search workload.

use std::fmt;

use rand::Rng;

/// A value that can be stored in the containers under test.
pub trait Element: Copy + Default + Ord + fmt::Debug + 'static {
    /// Stable display name, also used as the CSV file stem.
    const NAME: &'static str;

    /// Draws a value uniformly over the payload's key space.
    fn random<R: Rng>(rng: &mut R) -> Self;

    /// A value that [`Element::random`] never produces.
    fn absent() -> Self;
}

macro_rules! trivial_payload {
    ($(#[$meta:meta])* $ty:ident, $lanes:expr, $name:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $ty([u64; $lanes]);

        impl $ty {
            pub const LANES: usize = $lanes;

            pub const fn head(&self) -> u64 {
                self.0[0]
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self([0; $lanes])
            }
        }

        impl fmt::Debug for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:#x})", stringify!($ty), self.0[0])
            }
        }

        impl Element for $ty {
            const NAME: &'static str = $name;

            fn random<R: Rng>(rng: &mut R) -> Self {
                let mut lanes = [0u64; $lanes];
                lanes[0] = rng.gen_range(0..u64::MAX);
                Self(lanes)
            }

            fn absent() -> Self {
                let mut lanes = [0u64; $lanes];
                lanes[0] = u64::MAX;
                Self(lanes)
            }
        }
    };
}

trivial_payload!(
    /// 8 byte payload.
    TrivialSmall,
    1,
    "TrivialSmallType"
);
trivial_payload!(
    /// 32 byte payload.
    TrivialMedium,
    4,
    "TrivialMediumType"
);
trivial_payload!(
    /// 64 byte payload, one cache line on most targets.
    TrivialLarge,
    8,
    "TrivialLargeType"
);
trivial_payload!(
    /// 256 byte payload.
    TrivialHuge,
    32,
    "TrivialHugeType"
);
trivial_payload!(
    /// 1 KiB payload.
    TrivialMonster,
    128,
    "TrivialMonsterType"
);

/// Runtime handle for the fixed payload catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Small,
    Medium,
    Large,
    Huge,
    Monster,
}

impl ElementKind {
    /// Catalog order, smallest payload first.
    pub const ALL: [ElementKind; 5] = [
        ElementKind::Small,
        ElementKind::Medium,
        ElementKind::Large,
        ElementKind::Huge,
        ElementKind::Monster,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Small => TrivialSmall::NAME,
            ElementKind::Medium => TrivialMedium::NAME,
            ElementKind::Large => TrivialLarge::NAME,
            ElementKind::Huge => TrivialHuge::NAME,
            ElementKind::Monster => TrivialMonster::NAME,
        }
    }

    /// Short selector used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            ElementKind::Small => "small",
            ElementKind::Medium => "medium",
            ElementKind::Large => "large",
            ElementKind::Huge => "huge",
            ElementKind::Monster => "monster",
        }
    }

    pub fn byte_size(self) -> usize {
        match self {
            ElementKind::Small => size_of::<TrivialSmall>(),
            ElementKind::Medium => size_of::<TrivialMedium>(),
            ElementKind::Large => size_of::<TrivialLarge>(),
            ElementKind::Huge => size_of::<TrivialHuge>(),
            ElementKind::Monster => size_of::<TrivialMonster>(),
        }
    }

    /// Accepts either the short key (`small`) or the display name.
    pub fn from_key(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(trimmed) || kind.name() == trimmed)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
