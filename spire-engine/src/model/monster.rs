use serde::Serialize;
use serde_json::Value;

use super::{bit, bounded, encode_padded, Encode};
use crate::limits::MAX_MONSTERS;
use crate::raw;

/// One enemy combatant.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Monster {
    pub current_hp: f64,
    pub max_hp: f64,
    pub block: f64,
    pub move_base_damage: f64,
    /// `intent`, else `intent_name`. Only its presence is encoded.
    pub intent: Option<String>,
    pub buffs: usize,
    pub debuffs: usize,
    pub is_gone: bool,
    pub half_dead: bool,
    pub move_hits: f64,
}

impl Monster {
    pub fn from_json(data: &Value) -> Self {
        Self {
            current_hp: raw::num(data, "current_hp"),
            max_hp: raw::num(data, "max_hp"),
            block: raw::num(data, "block"),
            move_base_damage: raw::num(data, "move_base_damage"),
            intent: raw::label(data, &["intent", "intent_name"]),
            buffs: raw::list(data, "buffs").len(),
            debuffs: raw::list(data, "debuffs").len(),
            is_gone: raw::flag(data, "is_gone"),
            half_dead: raw::flag(data, "half_dead"),
            move_hits: raw::num(data, "move_hits"),
        }
    }
}

impl Encode for Monster {
    const WIDTH: usize = 10;

    fn encode_into(&self, out: &mut [f32]) {
        out.copy_from_slice(&[
            self.current_hp as f32,
            self.max_hp as f32,
            self.block as f32,
            self.move_base_damage as f32,
            bit(self.intent.is_some()),
            self.buffs as f32,
            self.debuffs as f32,
            bit(self.is_gone),
            bit(self.half_dead),
            self.move_hits as f32,
        ]);
    }
}

/// Active fight: the first [`MAX_MONSTERS`] monsters in snapshot order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CombatState {
    pub monsters: Vec<Monster>,
}

impl CombatState {
    pub fn from_json(data: &Value) -> Self {
        Self {
            monsters: bounded(raw::list(data, "monsters"), MAX_MONSTERS, Monster::from_json),
        }
    }
}

impl Encode for CombatState {
    const WIDTH: usize = MAX_MONSTERS * Monster::WIDTH;

    fn encode_into(&self, out: &mut [f32]) {
        encode_padded(&self.monsters, MAX_MONSTERS, out);
    }
}
