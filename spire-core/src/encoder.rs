//! Flat observation encoder.
//!
//! Encodes one [`State`] into a `[f32; OBS_SIZE]` array laid out as described
//! in [`crate::schema`]. Sections are written independently, each into its
//! own slice of the buffer:
//!
//! - room type and phase one-hots, floor/act
//! - player head (hp, max hp, energy, block) and ascension
//! - owned potions, relics and powers (id presence + a value per slot)
//! - hand and deck card features, zero-padded to their caps
//! - draw/discard/exhaust pile summaries
//! - the rest of the game-state block (gold, map, monsters, screen)
//!
//! Hand, deck, piles and owned items are read from the snapshot's raw JSON,
//! the rest from the typed [`GameState`].

use serde_json::Value;
use spire_engine::card::{CardRecord, CardView, PileSummary};
use spire_engine::limits::{
    MAX_DECK, MAX_HAND, MAX_OWNED_RELICS, MAX_PLAYER_POTIONS, MAX_PLAYER_POWERS,
};
use spire_engine::model::{bit, GameState, PILES};
use spire_engine::{raw, State};

pub use crate::schema::OBS_SIZE;
use crate::schema::{Section, PLAYER_HEAD, POTION_FEATURES, POWER_FEATURES, RELIC_FEATURES};

// ---------------------------------------------------------------------------
// ObservationEncoder
// ---------------------------------------------------------------------------

/// Pre-allocated observation buffer.
///
/// Reuse across steps to avoid per-step allocation. Call [`clear`] then the
/// individual `encode_*` methods, or use [`encode`] as the one-shot entry
/// point.
///
/// [`clear`]: ObservationEncoder::clear
/// [`encode`]: ObservationEncoder::encode
#[derive(Clone)]
pub struct ObservationEncoder {
    buffer: [f32; OBS_SIZE],
}

impl ObservationEncoder {
    /// Create a new encoder with a zeroed buffer.
    pub fn new() -> Self {
        Self {
            buffer: [0.0; OBS_SIZE],
        }
    }

    /// Zero the entire buffer.
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
    }

    /// Read-only view of the flat observation buffer.
    pub fn as_slice(&self) -> &[f32; OBS_SIZE] {
        &self.buffer
    }

    /// Read-only view of one section.
    pub fn section(&self, section: Section) -> &[f32] {
        &self.buffer[section.range()]
    }

    #[inline]
    fn section_mut(&mut self, section: Section) -> &mut [f32] {
        &mut self.buffer[section.range()]
    }
}

impl Default for ObservationEncoder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Encoding: room and position
// ---------------------------------------------------------------------------

impl ObservationEncoder {
    /// Room type and room phase one-hots.
    pub fn encode_room(&mut self, gs: &GameState) {
        self.section_mut(Section::RoomType)[gs.room_type().index()] = 1.0;
        self.section_mut(Section::RoomPhase)[gs.room_phase().index()] = 1.0;
    }

    /// Floor and act; a missing value is 0.
    pub fn encode_floor_act(&mut self, gs: &GameState) {
        let out = self.section_mut(Section::FloorAct);
        out[0] = gs.floor.unwrap_or(0.0) as f32;
        out[1] = gs.act.unwrap_or(0.0) as f32;
    }
}

// ---------------------------------------------------------------------------
// Encoding: game-state block
// ---------------------------------------------------------------------------

impl ObservationEncoder {
    /// The [`GameState`] block, split around the root-level sections: its
    /// first [`PLAYER_HEAD`] scalars go to `PlayerHead`, the rest to
    /// `GameStateRest`.
    pub fn encode_game_state(&mut self, gs: &GameState, raw_gs: &Value) {
        let mut block = [0.0f32; GameState::WIDTH];
        gs.encode_into(raw_gs, &mut block);
        let (head, rest) = block.split_at(PLAYER_HEAD);
        self.section_mut(Section::PlayerHead).copy_from_slice(head);
        self.section_mut(Section::GameStateRest).copy_from_slice(rest);
    }

    pub fn encode_ascension(&mut self, raw_gs: &Value) {
        self.section_mut(Section::Ascension)[0] = raw::num(raw_gs, "ascension_level") as f32;
    }
}

// ---------------------------------------------------------------------------
// Encoding: owned potions, relics, powers
// ---------------------------------------------------------------------------

/// Write one row per entry, at most `cap` rows of `width`, zero elsewhere.
fn encode_rows<F>(entries: &[Value], width: usize, cap: usize, out: &mut [f32], row: F)
where
    F: Fn(&Value, &mut [f32]),
{
    debug_assert_eq!(out.len(), width * cap);
    for (slot, entry) in out.chunks_exact_mut(width).zip(entries) {
        row(entry, slot);
    }
}

impl ObservationEncoder {
    /// Potion belt (`game_state.potions`).
    pub fn encode_player_potions(&mut self, raw_gs: &Value) {
        let potions = raw::list(raw_gs, "potions");
        let out = self.section_mut(Section::PlayerPotions);
        encode_rows(potions, POTION_FEATURES, MAX_PLAYER_POTIONS, out, |p, slot| {
            slot.copy_from_slice(&[
                bit(raw::present(p, &["id", "name"])),
                bit(raw::flag(p, "can_use")),
                bit(raw::flag(p, "can_discard")),
                bit(raw::flag(p, "requires_target")),
            ]);
        });
    }

    /// Owned relics (`game_state.relics`).
    pub fn encode_owned_relics(&mut self, raw_gs: &Value) {
        let relics = raw::list(raw_gs, "relics");
        let out = self.section_mut(Section::OwnedRelics);
        encode_rows(relics, RELIC_FEATURES, MAX_OWNED_RELICS, out, |r, slot| {
            slot[0] = bit(raw::present(r, &["id", "name"]));
            slot[1] = raw::num(r, "counter") as f32;
        });
    }

    /// Player powers (`game_state.player.powers`).
    pub fn encode_player_powers(&mut self, raw_gs: &Value) {
        let player = raw_gs.get("player").unwrap_or(&Value::Null);
        let powers = raw::list(player, "powers");
        let out = self.section_mut(Section::PlayerPowers);
        encode_rows(powers, POWER_FEATURES, MAX_PLAYER_POWERS, out, |p, slot| {
            slot[0] = bit(raw::present(p, &["id", "name"]));
            slot[1] = raw::num(p, "amount") as f32;
        });
    }
}

// ---------------------------------------------------------------------------
// Encoding: cards
// ---------------------------------------------------------------------------

/// Card rows for a raw card list. `null` entries stay as zero rows.
fn encode_card_rows(cards: &[Value], cap: usize, out: &mut [f32]) {
    encode_rows(cards, CardView::FEATURES, cap, out, |card, slot| {
        if !card.is_null() {
            slot.copy_from_slice(&CardView::of(CardRecord::Raw(card)).features());
        }
    });
}

impl ObservationEncoder {
    /// Hand (`game_state.hand`), first [`MAX_HAND`] cards.
    pub fn encode_hand(&mut self, raw_gs: &Value) {
        encode_card_rows(raw::list(raw_gs, "hand"), MAX_HAND, self.section_mut(Section::Hand));
    }

    /// Master deck (`game_state.deck`), first [`MAX_DECK`] cards.
    pub fn encode_deck(&mut self, raw_gs: &Value) {
        encode_card_rows(raw::list(raw_gs, "deck"), MAX_DECK, self.section_mut(Section::Deck));
    }

    /// Draw, discard and exhaust pile summaries from `game_state.combat_state`.
    pub fn encode_piles(&mut self, raw_gs: &Value) {
        let combat = raw_gs.get("combat_state").unwrap_or(&Value::Null);
        let out = self.section_mut(Section::PileSummaries);
        for (slot, pile) in out.chunks_exact_mut(PileSummary::WIDTH).zip(PILES) {
            PileSummary::from_raw(raw::list(combat, pile)).encode_into(slot);
        }
    }
}

// ---------------------------------------------------------------------------
// Full encode
// ---------------------------------------------------------------------------

impl ObservationEncoder {
    /// Encode a full observation for `state`.
    ///
    /// Clears the buffer first, so repeated calls never leak data from a
    /// previous snapshot.
    pub fn encode(&mut self, state: &State) -> &[f32; OBS_SIZE] {
        let gs = &state.game_state;
        let raw_gs = state.raw_game_state();
        self.clear();
        self.encode_room(gs);
        self.encode_floor_act(gs);
        self.encode_game_state(gs, raw_gs);
        self.encode_ascension(raw_gs);
        self.encode_player_potions(raw_gs);
        self.encode_owned_relics(raw_gs);
        self.encode_player_powers(raw_gs);
        self.encode_hand(raw_gs);
        self.encode_deck(raw_gs);
        self.encode_piles(raw_gs);
        self.as_slice()
    }
}

/// One-shot encode into a fresh vector of length [`OBS_SIZE`].
pub fn encode_state(state: &State) -> Vec<f32> {
    ObservationEncoder::new().encode(state).to_vec()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
