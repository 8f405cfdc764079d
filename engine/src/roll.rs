use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::{AdMode, Dice, DieKind};

pub const MAX_QUANTITY: u32 = 100;
pub const MODIFIER_MIN: i32 = -100;
pub const MODIFIER_MAX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("quantity {0} outside 1..=100")]
    QuantityOutOfRange(u32),
    #[error("modifier {0} outside -100..=100")]
    ModifierOutOfRange(i32),
    #[error("advantage and disadvantage need a single d20 (got {quantity}{die})")]
    AdvantageNotApplicable { die: DieKind, quantity: u32 },
}

/// What the caller wants rolled: die kind, how many, flat modifier, and an
/// optional advantage mode (only valid for a single d20).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RollRequest {
    pub die: DieKind,
    pub quantity: u32,
    #[serde(default)]
    pub modifier: i32,
    #[serde(default)]
    pub advantage: AdMode,
}

impl RollRequest {
    pub fn validate(&self) -> Result<(), RollError> {
        if !(1..=MAX_QUANTITY).contains(&self.quantity) {
            return Err(RollError::QuantityOutOfRange(self.quantity));
        }
        if !(MODIFIER_MIN..=MODIFIER_MAX).contains(&self.modifier) {
            return Err(RollError::ModifierOutOfRange(self.modifier));
        }
        if self.advantage != AdMode::Normal && (self.die != DieKind::D20 || self.quantity != 1) {
            return Err(RollError::AdvantageNotApplicable {
                die: self.die,
                quantity: self.quantity,
            });
        }
        Ok(())
    }
}

/// One completed roll. Immutable once created; `faces` holds the raw draws
/// (both dice when advantage/disadvantage was in play).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub die: DieKind,
    pub quantity: u32,
    pub modifier: i32,
    pub advantage: AdMode,
    pub faces: Vec<u32>,
    pub total: i32,
    pub critical: bool,
}

impl RollResult {
    /// A natural 1 on a d20 anywhere in the raw faces.
    pub fn critical_failure(&self) -> bool {
        is_critical_failure(&self.faces, self.die)
    }
}

/// Bounds predicate for the UI contract: 1..=100 dice, modifier in [-100, 100].
pub fn validate_request(quantity: u32, modifier: i32) -> bool {
    (1..=MAX_QUANTITY).contains(&quantity) && (MODIFIER_MIN..=MODIFIER_MAX).contains(&modifier)
}

/// `count` independent uniform draws in [1, sides].
pub fn generate_faces(dice: &mut Dice, sides: u32, count: u32) -> Vec<u32> {
    (0..count).map(|_| dice.roll(sides)).collect()
}

/// Both d20 draws for advantage/disadvantage resolution.
pub fn roll_advantage_pair(dice: &mut Dice) -> [u32; 2] {
    [dice.roll(20), dice.roll(20)]
}

/// Total under the given mode: sum of all faces (normal), or the kept die
/// (max under advantage, min under disadvantage), plus the modifier.
pub fn resolve_total(faces: &[u32], modifier: i32, mode: AdMode) -> i32 {
    match mode {
        AdMode::Normal => faces.iter().sum::<u32>() as i32 + modifier,
        AdMode::Advantage => {
            debug_assert_eq!(faces.len(), 2);
            faces.iter().copied().max().unwrap_or(0) as i32 + modifier
        }
        AdMode::Disadvantage => {
            debug_assert_eq!(faces.len(), 2);
            faces.iter().copied().min().unwrap_or(0) as i32 + modifier
        }
    }
}

/// Natural 20 anywhere in the raw faces. Only a d20 can crit.
pub fn is_critical(faces: &[u32], die: DieKind) -> bool {
    die == DieKind::D20 && faces.contains(&20)
}

/// Natural 1 anywhere in the raw faces. Only meaningful on a d20.
pub fn is_critical_failure(faces: &[u32], die: DieKind) -> bool {
    die == DieKind::D20 && faces.contains(&1)
}

/// Validate the request, draw the faces, and assemble an immutable result.
pub fn create_roll(dice: &mut Dice, request: RollRequest) -> Result<RollResult, RollError> {
    request.validate()?;

    let faces = if request.die == DieKind::D20 && request.advantage != AdMode::Normal {
        roll_advantage_pair(dice).to_vec()
    } else {
        generate_faces(dice, request.die.sides(), request.quantity)
    };

    let total = resolve_total(&faces, request.modifier, request.advantage);
    let critical = is_critical(&faces, request.die);

    let roll = RollResult {
        id: Uuid::new_v4(),
        timestamp: Utc::now(),
        die: request.die,
        quantity: request.quantity,
        modifier: request.modifier,
        advantage: request.advantage,
        faces,
        total,
        critical,
    };
    debug!(die = %roll.die, total = roll.total, critical = roll.critical, "roll created");
    Ok(roll)
}

/// Deterministic one-line rendering, e.g. `2D6+3: [4, 2] = 9` or
/// `1D20 with advantage: [7, 20]+2 = 22`.
pub fn format_roll(roll: &RollResult) -> String {
    let modifier = if roll.modifier > 0 {
        format!("+{}", roll.modifier)
    } else if roll.modifier < 0 {
        roll.modifier.to_string()
    } else {
        String::new()
    };
    let faces = roll
        .faces
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    match roll.advantage {
        AdMode::Normal => format!(
            "{}{}{}: [{}] = {}",
            roll.quantity,
            roll.die.label(),
            modifier,
            faces,
            roll.total
        ),
        AdMode::Advantage => format!(
            "{}{} with advantage: [{}]{} = {}",
            roll.quantity,
            roll.die.label(),
            faces,
            modifier,
            roll.total
        ),
        AdMode::Disadvantage => format!(
            "{}{} with disadvantage: [{}]{} = {}",
            roll.quantity,
            roll.die.label(),
            faces,
            modifier,
            roll.total
        ),
    }
}
