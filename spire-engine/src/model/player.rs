use serde::Serialize;
use serde_json::Value;

use super::Encode;
use crate::raw;

/// The agent's avatar.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Player {
    pub current_hp: f64,
    pub max_hp: f64,
    pub energy: f64,
    /// `block`, else `current_block`.
    pub block: f64,
    pub powers: usize,
}

impl Player {
    pub fn from_json(data: &Value) -> Self {
        Self {
            current_hp: raw::num(data, "current_hp"),
            max_hp: raw::num(data, "max_hp"),
            energy: raw::num(data, "energy"),
            block: raw::first_num(data, &["block", "current_block"]),
            powers: raw::list(data, "powers").len(),
        }
    }
}

impl Encode for Player {
    const WIDTH: usize = 5;

    fn encode_into(&self, out: &mut [f32]) {
        out.copy_from_slice(&[
            self.current_hp as f32,
            self.max_hp as f32,
            self.energy as f32,
            self.block as f32,
            self.powers as f32,
        ]);
    }
}
