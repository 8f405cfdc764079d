use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub mod api;
pub mod content;
pub mod presets;
pub mod roll;
pub mod stats;

pub use presets::RollPreset;
pub use roll::{
    MAX_QUANTITY, MODIFIER_MAX, MODIFIER_MIN, RollError, RollRequest, RollResult, create_roll,
    format_roll, generate_faces, is_critical, is_critical_failure, resolve_total,
    roll_advantage_pair, validate_request,
};
pub use stats::{Statistics, compute_statistics};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdMode {
    #[default]
    Normal,
    Advantage,
    Disadvantage,
}

/// The polyhedral dice on the table. Sides, label and color are fixed per kind.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieKind {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieKind {
    pub const ALL: [DieKind; 7] = [
        DieKind::D4,
        DieKind::D6,
        DieKind::D8,
        DieKind::D10,
        DieKind::D12,
        DieKind::D20,
        DieKind::D100,
    ];

    pub fn sides(self) -> u32 {
        match self {
            DieKind::D4 => 4,
            DieKind::D6 => 6,
            DieKind::D8 => 8,
            DieKind::D10 => 10,
            DieKind::D12 => 12,
            DieKind::D20 => 20,
            DieKind::D100 => 100,
        }
    }

    /// Display label used in formatted rolls (e.g. "D20").
    pub fn label(self) -> &'static str {
        match self {
            DieKind::D4 => "D4",
            DieKind::D6 => "D6",
            DieKind::D8 => "D8",
            DieKind::D10 => "D10",
            DieKind::D12 => "D12",
            DieKind::D20 => "D20",
            DieKind::D100 => "D100",
        }
    }

    /// Hex color associated with the die kind, for presentation layers.
    pub fn color(self) -> &'static str {
        match self {
            DieKind::D4 => "#ef4444",
            DieKind::D6 => "#3b82f6",
            DieKind::D8 => "#10b981",
            DieKind::D10 => "#f59e0b",
            DieKind::D12 => "#8b5cf6",
            DieKind::D20 => "#ec4899",
            DieKind::D100 => "#6366f1",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DieKind::D4 => "Four-sided die",
            DieKind::D6 => "Six-sided die",
            DieKind::D8 => "Eight-sided die",
            DieKind::D10 => "Ten-sided die",
            DieKind::D12 => "Twelve-sided die",
            DieKind::D20 => "Twenty-sided die",
            DieKind::D100 => "Hundred-sided die",
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DieKind::D4 => "d4",
            DieKind::D6 => "d6",
            DieKind::D8 => "d8",
            DieKind::D10 => "d10",
            DieKind::D12 => "d12",
            DieKind::D20 => "d20",
            DieKind::D100 => "d100",
        };
        f.write_str(s)
    }
}

enum Source {
    Seeded(ChaCha8Rng),
    Scripted { values: Vec<u32>, next: usize },
}

/// Uniform die roller. Seeded streams are reproducible; scripted streams
/// replay a fixed list of values so tests can pin exact outcomes.
pub struct Dice {
    source: Source,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            source: Source::Seeded(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            source: Source::Seeded(ChaCha8Rng::from_entropy()),
        }
    }

    /// Fixed value stream for tests. Panics when the script runs out.
    pub fn from_scripted(values: Vec<u32>) -> Self {
        Self {
            source: Source::Scripted { values, next: 0 },
        }
    }

    /// One uniform draw in [1, sides].
    pub fn roll(&mut self, sides: u32) -> u32 {
        match &mut self.source {
            Source::Seeded(rng) => rng.gen_range(1..=sides),
            Source::Scripted { values, next } => {
                let value = values
                    .get(*next)
                    .copied()
                    .unwrap_or_else(|| panic!("scripted dice exhausted after {} draws", next));
                *next += 1;
                value
            }
        }
    }
}
