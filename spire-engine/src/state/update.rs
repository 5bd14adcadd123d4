//! Full-replace update rule.
//!
//! Every snapshot describes the complete game state. For each section key a
//! present value (even `{}` or `null`) builds that section from scratch and
//! an absent key resets it to its default. Nothing from the previous state
//! survives an update.

use log::{debug, trace, warn};
use serde_json::Value;

use super::State;
use crate::errors::{SpireError, SpireResult};
use crate::model::GameState;
use crate::raw;

/// Top-level section keys.
const SECTIONS: [&str; 4] = ["game_state", "available_commands", "in_game", "ready_for_command"];

/// Build the state that follows `current` once `raw` is observed.
///
/// The result does not depend on `current`; it is only consulted for
/// logging which sections were dropped.
pub fn update(current: &State, raw: Value) -> SpireResult<State> {
    if let Value::Object(obj) = &raw {
        for key in SECTIONS {
            if current.raw.contains_key(key) && !obj.contains_key(key) {
                debug!("section `{key}` absent from snapshot, resetting to default");
            }
        }
    }
    build(raw)
}

/// Build a state from one snapshot with no previous state.
pub(crate) fn build(raw: Value) -> SpireResult<State> {
    let obj = match raw {
        Value::Object(obj) => obj,
        other => {
            let err = SpireError::not_an_object(&other);
            warn!("rejected snapshot: {err}");
            return Err(err);
        }
    };

    let game_state = obj
        .get("game_state")
        .map_or_else(GameState::default, GameState::from_json);

    let available_commands: Vec<String> = obj
        .get("available_commands")
        .and_then(Value::as_array)
        .map(|cmds| {
            cmds.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let in_game = obj.get("in_game").is_some_and(raw::truthy);
    let ready_for_command = obj.get("ready_for_command").map_or(true, raw::truthy);

    trace!(
        "built state: {} monsters, {} shop cards, {} map nodes, {} commands",
        game_state.combat_state.monsters.len(),
        game_state.screen_state.cards.len(),
        game_state.map.nodes.len(),
        available_commands.len(),
    );

    Ok(State {
        raw: obj,
        game_state,
        available_commands,
        in_game,
        ready_for_command,
    })
}
