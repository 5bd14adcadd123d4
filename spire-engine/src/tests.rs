#[cfg(test)]
mod unit_tests {
    use serde_json::{json, Value};

    use crate::categories::{CardType, RoomType};
    use crate::errors::SpireError;
    use crate::state::State;

    fn shop_snapshot() -> Value {
        json!({
            "in_game": true,
            "ready_for_command": true,
            "available_commands": ["choose", "leave"],
            "game_state": {
                "floor": 6, "act": 1, "room_type": "ShopRoom", "room_phase": "COMPLETE",
                "screen_name": "SHOP_SCREEN", "gold": 210,
                "player": {"current_hp": 61, "max_hp": 80},
                "screen_state": {
                    "cards": [
                        {"price": 55, "type": "ATTACK", "id": "Pommel Strike"},
                        {"price": 80, "type": "SKILL", "id": "Shrug It Off"}
                    ],
                    "relics": [{"price": 150, "id": "Orichalcum"}],
                    "purge_available": true,
                    "purge_cost": 75
                }
            }
        })
    }

    #[test]
    fn test_shop_cards_vanish_without_screen_state() {
        let mut state = State::from_value(shop_snapshot()).unwrap();
        assert_eq!(state.game_state.screen_state.cards.len(), 2);
        assert_eq!(state.game_state.room_type(), RoomType::ShopRoom);

        state
            .update(json!({
                "in_game": true,
                "game_state": {"floor": 7, "room_type": "MonsterRoom", "player": {"current_hp": 61}}
            }))
            .unwrap();
        assert!(state.game_state.screen_state.cards.is_empty());
        assert!(!state.game_state.screen_state.purge_available);
        assert_eq!(state.game_state.gold, 0.0);
        assert!(state.available_commands.is_empty());
    }

    #[test]
    fn test_present_section_is_not_merged() {
        let mut state = State::from_value(json!({
            "game_state": {"player": {"current_hp": 40, "max_hp": 80, "energy": 3}}
        }))
        .unwrap();
        state
            .update(json!({"game_state": {"player": {"current_hp": 35}}}))
            .unwrap();
        let p = &state.game_state.player;
        assert_eq!(p.current_hp, 35.0);
        assert_eq!(p.max_hp, 0.0);
        assert_eq!(p.energy, 0.0);
    }

    #[test]
    fn test_failed_update_keeps_previous_state() {
        let mut state = State::from_value(shop_snapshot()).unwrap();
        let before = state.clone();
        for bad in [json!(null), json!([1, 2]), json!("snapshot"), json!(3.5)] {
            let err = state.update(bad).unwrap_err();
            assert!(matches!(err, SpireError::InvalidInput { .. }));
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_booleans_reset_to_defaults() {
        let mut state = State::from_value(json!({"in_game": true, "ready_for_command": false})).unwrap();
        assert!(state.in_game);
        assert!(!state.ready_for_command);
        state.update(json!({})).unwrap();
        assert!(!state.in_game);
        assert!(state.ready_for_command);
    }

    #[test]
    fn test_update_swaps_raw_json() {
        let mut state = State::from_value(shop_snapshot()).unwrap();
        state.update(json!({"in_game": false})).unwrap();
        assert_eq!(state.raw.len(), 1);
        assert!(state.raw_game_state().is_null());
    }

    #[test]
    fn test_typed_shop_card_fallback() {
        let state = State::from_value(json!({
            "game_state": {"screen_state": {"cards": [{"type": "CURSE"}, {}]}}
        }))
        .unwrap();
        let cards = &state.game_state.screen_state.cards;
        assert!(cards.iter().all(|c| c.card_type == CardType::Skill));
    }

    #[test]
    fn test_malformed_fields_never_fail() {
        let state = State::from_value(json!({
            "available_commands": "play",
            "in_game": "yes",
            "game_state": {
                "floor": "six",
                "gold": null,
                "map": {"not": "a list"},
                "player": [1, 2, 3],
                "combat_state": {"monsters": [null, 5, {"current_hp": 9.7}]},
                "screen_state": {"cards": "none", "options": 4}
            }
        }))
        .unwrap();
        assert!(state.available_commands.is_empty());
        assert!(state.in_game);
        assert_eq!(state.game_state.floor, None);
        assert_eq!(state.game_state.gold, 0.0);
        assert!(state.game_state.map.nodes.is_empty());
        let monsters = &state.game_state.combat_state.monsters;
        assert_eq!(monsters.len(), 3);
        assert_eq!(monsters[2].current_hp, 9.7);
        assert!(state.game_state.screen_state.options.is_empty());
    }
}
