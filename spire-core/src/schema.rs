//! Observation layout and size oracle.
//!
//! The observation is a flat `[f32; OBS_SIZE]` made of the sections below,
//! back to back, in declaration order:
//!
//! | section          | width | contents                                           |
//! |------------------|-------|----------------------------------------------------|
//! | `RoomType`       | 4     | room type one-hot                                  |
//! | `RoomPhase`      | 6     | room phase one-hot                                 |
//! | `FloorAct`       | 2     | floor, act                                         |
//! | `PlayerHead`     | 4     | hp, max hp, energy, block                          |
//! | `Ascension`      | 1     | ascension level                                    |
//! | `PlayerPotions`  | 12    | 3 x (id, can use, can discard, requires target)    |
//! | `OwnedRelics`    | 20    | 10 x (id, counter)                                 |
//! | `PlayerPowers`   | 12    | 6 x (id, amount)                                   |
//! | `Hand`           | 130   | 10 x 13 card features                              |
//! | `Deck`           | 650   | 50 x 13 card features                              |
//! | `PileSummaries`  | 36    | draw / discard / exhaust, 12 each                  |
//! | `GameStateRest`  | 165   | game-state block after the player head             |
//!
//! Every width is composed from the entity `WIDTH` constants and the caps in
//! [`spire_engine::limits`], the same constants the encoder slices with.

use spire_engine::card::{CardView, PileSummary};
use spire_engine::categories::{RoomPhase, RoomType};
use spire_engine::limits::{
    MAX_DECK, MAX_HAND, MAX_OWNED_RELICS, MAX_PLAYER_POTIONS, MAX_PLAYER_POWERS,
};
use spire_engine::model::{GameState, PILES};

/// Features per owned potion: id present, can use, can discard, requires target.
pub const POTION_FEATURES: usize = 4;
/// Features per owned relic: id present, counter.
pub const RELIC_FEATURES: usize = 2;
/// Features per player power: id present, amount.
pub const POWER_FEATURES: usize = 2;

/// Leading scalars of the game-state block placed right after floor/act.
pub const PLAYER_HEAD: usize = 4;

/// Observation sections in encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    RoomType,
    RoomPhase,
    FloorAct,
    PlayerHead,
    Ascension,
    PlayerPotions,
    OwnedRelics,
    PlayerPowers,
    Hand,
    Deck,
    PileSummaries,
    GameStateRest,
}

impl Section {
    pub const ALL: [Section; 12] = [
        Section::RoomType,
        Section::RoomPhase,
        Section::FloorAct,
        Section::PlayerHead,
        Section::Ascension,
        Section::PlayerPotions,
        Section::OwnedRelics,
        Section::PlayerPowers,
        Section::Hand,
        Section::Deck,
        Section::PileSummaries,
        Section::GameStateRest,
    ];

    pub const fn width(self) -> usize {
        match self {
            Section::RoomType => RoomType::COUNT,
            Section::RoomPhase => RoomPhase::COUNT,
            Section::FloorAct => 2,
            Section::PlayerHead => PLAYER_HEAD,
            Section::Ascension => 1,
            Section::PlayerPotions => MAX_PLAYER_POTIONS * POTION_FEATURES,
            Section::OwnedRelics => MAX_OWNED_RELICS * RELIC_FEATURES,
            Section::PlayerPowers => MAX_PLAYER_POWERS * POWER_FEATURES,
            Section::Hand => MAX_HAND * CardView::FEATURES,
            Section::Deck => MAX_DECK * CardView::FEATURES,
            Section::PileSummaries => PILES.len() * PileSummary::WIDTH,
            Section::GameStateRest => GameState::WIDTH - PLAYER_HEAD,
        }
    }

    /// First index of this section in the observation.
    pub const fn offset(self) -> usize {
        let mut start = 0;
        let mut i = 0;
        while i < Self::ALL.len() {
            if Self::ALL[i] as usize == self as usize {
                break;
            }
            start += Self::ALL[i].width();
            i += 1;
        }
        start
    }

    /// Index range of this section in the observation.
    pub const fn range(self) -> std::ops::Range<usize> {
        let start = self.offset();
        start..start + self.width()
    }
}

const fn total_width() -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < Section::ALL.len() {
        total += Section::ALL[i].width();
        i += 1;
    }
    total
}

/// Total elements in the flat observation buffer.
pub const OBS_SIZE: usize = total_width(); // 1042

/// Length of every encoded observation, independent of any snapshot.
pub const fn size() -> usize {
    OBS_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;
    use spire_engine::model::{CombatState, Map, Player, ScreenState};
    use spire_engine::Encode;

    #[test]
    fn total_size() {
        assert_eq!(OBS_SIZE, 1042);
        assert_eq!(size(), OBS_SIZE);
    }

    #[test]
    fn sections_are_contiguous() {
        let mut expected = 0;
        for s in Section::ALL {
            assert_eq!(s.offset(), expected, "{s:?}");
            expected += s.width();
        }
        assert_eq!(expected, OBS_SIZE);
        assert_eq!(Section::GameStateRest.range().end, OBS_SIZE);
    }

    #[test]
    fn widths_match_entity_composition() {
        assert_eq!(Section::PlayerHead.width() + Section::GameStateRest.width(), GameState::WIDTH);
        assert_eq!(
            Section::GameStateRest.width(),
            Player::WIDTH - PLAYER_HEAD + 1 + Map::WIDTH + 3 + CombatState::WIDTH + ScreenState::WIDTH
        );
        assert_eq!(Section::Hand.width(), 130);
        assert_eq!(Section::Deck.width(), 650);
        assert_eq!(Section::PileSummaries.width(), 36);
    }

    #[test]
    fn known_offsets() {
        assert_eq!(Section::RoomType.offset(), 0);
        assert_eq!(Section::RoomPhase.offset(), 4);
        assert_eq!(Section::PlayerHead.offset(), 12);
        assert_eq!(Section::Hand.offset(), 61);
        assert_eq!(Section::Deck.offset(), 191);
        assert_eq!(Section::PileSummaries.offset(), 841);
        assert_eq!(Section::GameStateRest.offset(), 877);
    }
}
