use serde::Serialize;
use serde_json::Value;

use super::{CombatState, Encode, Map, Player, ScreenState};
use crate::categories::{RoomPhase, RoomType};
use crate::raw;

/// Combat pile sizes: draw, discard, exhaust.
pub const PILE_COUNT_WIDTH: usize = 3;

/// Combat piles, in encoding order.
pub const PILES: [&str; PILE_COUNT_WIDTH] = ["draw_pile", "discard_pile", "exhaust_pile"];

/// Everything under the snapshot's `game_state` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameState {
    pub floor: Option<f64>,
    pub act: Option<f64>,
    pub room_phase: Option<String>,
    pub screen_name: Option<String>,
    pub room_type: Option<String>,
    pub gold: f64,
    pub map: Map,
    pub player: Player,
    pub combat_state: CombatState,
    pub screen_state: ScreenState,
}

/// Fresh sub-section when `key` is present (even as `{}` or `null`),
/// type default when it is absent.
fn section<T: Default>(parent: &Value, key: &str, build: fn(&Value) -> T) -> T {
    parent.get(key).map_or_else(T::default, build)
}

impl GameState {
    /// Player, gold, map summary, pile counts, monsters, screen.
    pub const WIDTH: usize = Player::WIDTH
        + 1
        + Map::WIDTH
        + PILE_COUNT_WIDTH
        + CombatState::WIDTH
        + ScreenState::WIDTH;

    pub fn from_json(data: &Value) -> Self {
        Self {
            floor: raw::opt_num(data, "floor"),
            act: raw::opt_num(data, "act"),
            room_phase: raw::string(data, "room_phase"),
            screen_name: raw::string(data, "screen_name"),
            room_type: raw::string(data, "room_type"),
            gold: raw::num(data, "gold"),
            map: section(data, "map", Map::from_json),
            player: section(data, "player", Player::from_json),
            combat_state: section(data, "combat_state", CombatState::from_json),
            screen_state: section(data, "screen_state", ScreenState::from_json),
        }
    }

    pub fn room_type(&self) -> RoomType {
        RoomType::from_opt(self.room_type.as_deref())
    }

    pub fn room_phase(&self) -> RoomPhase {
        RoomPhase::from_opt(self.room_phase.as_deref())
    }

    /// Encode the game-state block.
    ///
    /// `raw` is the same `game_state` object this value was built from; the
    /// pile counts and the owned relic list are read from it directly.
    pub fn encode_into(&self, raw: &Value, out: &mut [f32]) {
        assert_eq!(out.len(), Self::WIDTH, "game state width mismatch");
        let (player, rest) = out.split_at_mut(Player::WIDTH);
        let (gold, rest) = rest.split_at_mut(1);
        let (map, rest) = rest.split_at_mut(Map::WIDTH);
        let (piles, rest) = rest.split_at_mut(PILE_COUNT_WIDTH);
        let (combat, screen) = rest.split_at_mut(CombatState::WIDTH);

        self.player.encode_into(player);
        gold[0] = self.gold as f32;
        self.map.encode_into(map);

        let combat_raw = raw.get("combat_state").unwrap_or(&Value::Null);
        for (dst, pile) in piles.iter_mut().zip(PILES) {
            *dst = raw::count(combat_raw, pile) as f32;
        }

        self.combat_state.encode_into(combat);
        self.screen_state
            .encode_into(self.room_type(), raw::list(raw, "relics"), screen);
    }

    pub fn encode(&self, raw: &Value) -> Vec<f32> {
        let mut out = vec![0.0; Self::WIDTH];
        self.encode_into(raw, &mut out);
        out
    }
}
