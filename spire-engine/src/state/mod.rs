use serde_json::{Map as JsonMap, Value};

use crate::errors::SpireResult;
use crate::model::GameState;

pub mod update;

/// Root of one observed snapshot.
///
/// The state owns the raw JSON it was built from alongside the typed graph;
/// encoders read a few loosely typed lists (hand, deck, piles, owned relics)
/// straight from `raw`.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub raw: JsonMap<String, Value>,
    pub game_state: GameState,
    pub available_commands: Vec<String>,
    pub in_game: bool,
    pub ready_for_command: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            raw: JsonMap::new(),
            game_state: GameState::default(),
            available_commands: Vec::new(),
            in_game: false,
            ready_for_command: true,
        }
    }
}

impl State {
    /// Build a state from one snapshot. Fails only if `raw` is not an object.
    pub fn from_value(raw: Value) -> SpireResult<Self> {
        update::build(raw)
    }

    /// Parse snapshot text and build a state from it.
    pub fn from_json_str(text: &str) -> SpireResult<Self> {
        let raw: Value = serde_json::from_str(text)?;
        Self::from_value(raw)
    }

    /// Replace this state with the one described by `raw`.
    ///
    /// Nothing is merged: sections missing from `raw` fall back to their
    /// defaults. On error `self` is left untouched.
    pub fn update(&mut self, raw: Value) -> SpireResult<()> {
        *self = update::update(self, raw)?;
        Ok(())
    }

    /// The raw `game_state` object, or `null` when the snapshot had none.
    pub fn raw_game_state(&self) -> &Value {
        self.raw.get("game_state").unwrap_or(&Value::Null)
    }

    /// True when `command` is currently accepted by the game.
    pub fn can(&self, command: &str) -> bool {
        self.available_commands.iter().any(|c| c == command)
    }
}
