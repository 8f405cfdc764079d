use serde::{Deserialize, Serialize};

use crate::roll::RollRequest;
use crate::{AdMode, DieKind};

/// A named, ready-made roll configuration (attack, damage, initiative, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RollPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub die: DieKind,
    pub quantity: u32,
    #[serde(default)]
    pub modifier: i32,
    #[serde(default)]
    pub advantage: AdMode,
}

impl RollPreset {
    pub fn to_request(&self) -> RollRequest {
        RollRequest {
            die: self.die,
            quantity: self.quantity,
            modifier: self.modifier,
            advantage: self.advantage,
        }
    }
}
