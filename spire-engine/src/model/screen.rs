use serde::Serialize;
use serde_json::Value;

use super::{bit, bounded, encode_padded, Encode, ItemRecord, Potion, Relic, ShopCard, ITEM_WIDTH};
use crate::categories::RoomType;
use crate::limits::{MAX_SHOP_CARDS, MAX_SHOP_POTIONS, MAX_SHOP_RELICS};
use crate::raw;

/// Whatever the current screen offers: shop stock, purge service, event text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScreenState {
    pub cards: Vec<ShopCard>,
    pub potions: Vec<Potion>,
    pub relics: Vec<Relic>,
    pub purge_available: bool,
    pub purge_cost: f64,
    pub event_id: Option<String>,
    pub event_name: Option<String>,
    pub body_text: Option<String>,
    pub options: Vec<Value>,
}

impl ScreenState {
    pub const CARDS_WIDTH: usize = MAX_SHOP_CARDS * ShopCard::WIDTH;
    pub const POTIONS_WIDTH: usize = MAX_SHOP_POTIONS * ITEM_WIDTH;
    pub const RELICS_WIDTH: usize = MAX_SHOP_RELICS * ITEM_WIDTH;
    /// purge available, purge cost, event present, option count.
    pub const TAIL_WIDTH: usize = 4;

    pub const WIDTH: usize =
        Self::CARDS_WIDTH + Self::POTIONS_WIDTH + Self::RELICS_WIDTH + Self::TAIL_WIDTH;

    pub fn from_json(data: &Value) -> Self {
        Self {
            cards: bounded(raw::list(data, "cards"), MAX_SHOP_CARDS, ShopCard::from_json),
            potions: bounded(raw::list(data, "potions"), MAX_SHOP_POTIONS, Potion::from_json),
            relics: bounded(raw::list(data, "relics"), MAX_SHOP_RELICS, Relic::from_json),
            purge_available: raw::flag(data, "purge_available"),
            purge_cost: raw::num(data, "purge_cost"),
            event_id: raw::string(data, "event_id"),
            event_name: raw::string(data, "event_name"),
            body_text: raw::string(data, "body_text"),
            options: raw::list(data, "options").to_vec(),
        }
    }

    pub fn has_event(&self) -> bool {
        self.event_id.is_some() || self.event_name.is_some()
    }

    /// Encode the screen block.
    ///
    /// Shop stock is only meaningful in a [`RoomType::ShopRoom`]. In any
    /// other room the card and potion slots stay zero and the relic slots
    /// describe `owned_relics` instead, read straight from the raw list.
    pub fn encode_into(&self, room: RoomType, owned_relics: &[Value], out: &mut [f32]) {
        assert_eq!(out.len(), Self::WIDTH, "screen block width mismatch");
        let (cards, rest) = out.split_at_mut(Self::CARDS_WIDTH);
        let (potions, rest) = rest.split_at_mut(Self::POTIONS_WIDTH);
        let (relics, tail) = rest.split_at_mut(Self::RELICS_WIDTH);

        let relic_slots: Vec<ItemRecord<'_>> = if room == RoomType::ShopRoom {
            encode_padded(&self.cards, MAX_SHOP_CARDS, cards);
            encode_padded(&self.potions, MAX_SHOP_POTIONS, potions);
            self.relics.iter().map(ItemRecord::Relic).collect()
        } else {
            cards.fill(0.0);
            potions.fill(0.0);
            owned_relics.iter().map(ItemRecord::Raw).collect()
        };

        relics.fill(0.0);
        for (slot, item) in relics.chunks_exact_mut(ITEM_WIDTH).zip(relic_slots) {
            item.encode_into(slot);
        }

        tail.copy_from_slice(&[
            bit(self.purge_available),
            self.purge_cost as f32,
            bit(self.has_event()),
            self.options.len() as f32,
        ]);
    }
}
