//! Card normalization shared by every card-shaped encoding site.
//!
//! Cards reach the encoder either as typed [`ShopCard`]s or as loosely typed
//! JSON records (hand, deck, piles). Both are normalized into one
//! [`CardView`], and every fixed-width row is a projection of that view, so
//! the two representations cannot drift apart in width or in category
//! mapping.

use serde_json::Value;

use crate::categories::{CardType, Rarity};
use crate::model::{bit, ShopCard};
use crate::raw;

/// A card as it appears in the snapshot.
#[derive(Debug, Clone, Copy)]
pub enum CardRecord<'a> {
    Structured(&'a ShopCard),
    Raw(&'a Value),
}

/// Canonical card fields. Anything a representation lacks is zero/false.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CardView {
    pub price: f64,
    pub cost: f64,
    pub damage: f64,
    pub block: f64,
    pub card_type: CardType,
    pub magic: f64,
    pub upgrades: f64,
    pub has_target: bool,
    pub exhausts: bool,
    pub rarity: Option<Rarity>,
    pub ethereal: bool,
    pub is_playable: bool,
    pub has_id: bool,
    pub has_uuid: bool,
}

impl CardView {
    /// Width of a hand/deck card row.
    pub const FEATURES: usize = 13;
    /// Width of a shop card row.
    pub const SHOP_FEATURES: usize = 11;

    pub fn of(record: CardRecord<'_>) -> Self {
        match record {
            CardRecord::Structured(card) => Self {
                price: card.price,
                cost: card.cost,
                card_type: card.card_type,
                upgrades: card.upgrades,
                has_target: card.has_target,
                exhausts: card.exhausts,
                rarity: card.rarity,
                ethereal: card.ethereal,
                is_playable: card.is_playable,
                has_id: card.id.is_some(),
                has_uuid: card.uuid.is_some(),
                ..Self::default()
            },
            CardRecord::Raw(data) => Self {
                price: raw::num(data, "price"),
                cost: raw::num(data, "cost"),
                damage: raw::first_num(data, &["damage", "base_damage"]),
                block: raw::num(data, "block"),
                card_type: CardType::from_opt(data.get("type").and_then(Value::as_str)),
                magic: raw::num(data, "magic"),
                upgrades: raw::num(data, "upgrades"),
                has_target: raw::flag(data, "has_target"),
                exhausts: raw::flag(data, "exhausts"),
                rarity: data.get("rarity").and_then(Value::as_str).map(Rarity::from_name),
                ethereal: raw::flag(data, "ethereal"),
                is_playable: raw::flag(data, "is_playable"),
                has_id: raw::present(data, &["id", "name"]),
                has_uuid: raw::flag(data, "uuid"),
            },
        }
    }

    #[inline]
    fn rarity_index(&self) -> usize {
        self.rarity.unwrap_or(Rarity::FALLBACK).index()
    }

    /// Hand/deck row: cost, damage, block, type, magic, upgrades, has_target,
    /// exhausts, rarity, ethereal, playable, id present, uuid present.
    pub fn features(&self) -> [f32; Self::FEATURES] {
        [
            self.cost as f32,
            self.damage as f32,
            self.block as f32,
            self.card_type.index() as f32,
            self.magic as f32,
            self.upgrades as f32,
            bit(self.has_target),
            bit(self.exhausts),
            self.rarity_index() as f32,
            bit(self.ethereal),
            bit(self.is_playable),
            bit(self.has_id),
            bit(self.has_uuid),
        ]
    }

    /// Shop row: price, cost, type, upgrades, has_target, exhausts, rarity,
    /// ethereal, playable, id present, uuid present.
    pub fn shop_row(&self) -> [f32; Self::SHOP_FEATURES] {
        [
            self.price as f32,
            self.cost as f32,
            self.card_type.index() as f32,
            self.upgrades as f32,
            bit(self.has_target),
            bit(self.exhausts),
            self.rarity_index() as f32,
            bit(self.ethereal),
            bit(self.is_playable),
            bit(self.has_id),
            bit(self.has_uuid),
        ]
    }
}

// ---------------------------------------------------------------------------
// Pile summary
// ---------------------------------------------------------------------------

/// Aggregate view of one combat pile.
///
/// Rarity counts only consider cards that carry a rarity string; type counts
/// consider every card (missing type reads as the fallback).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PileSummary {
    pub rarity_counts: [u32; Rarity::COUNT],
    pub type_counts: [u32; CardType::COUNT],
    pub cards: u32,
    pub total_cost: f64,
    pub total_upgrades: f64,
    pub with_id: u32,
}

impl PileSummary {
    /// rarity counts, type counts, average cost, average upgrades, id count.
    pub const WIDTH: usize = Rarity::COUNT + CardType::COUNT + 3;

    pub fn from_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = CardView>,
    {
        let mut s = Self::default();
        for card in cards {
            if let Some(r) = card.rarity {
                s.rarity_counts[r.index()] += 1;
            }
            s.type_counts[card.card_type.index()] += 1;
            s.total_cost += card.cost;
            s.total_upgrades += card.upgrades;
            if card.has_id {
                s.with_id += 1;
            }
            s.cards += 1;
        }
        s
    }

    /// Summary of a raw JSON pile.
    pub fn from_raw(pile: &[Value]) -> Self {
        Self::from_cards(pile.iter().map(|c| CardView::of(CardRecord::Raw(c))))
    }

    /// Average over the pile, 0 for an empty pile.
    fn average(&self, total: f64) -> f32 {
        if self.cards == 0 {
            0.0
        } else {
            (total / f64::from(self.cards)) as f32
        }
    }

    pub fn encode_into(&self, out: &mut [f32]) {
        assert_eq!(out.len(), Self::WIDTH, "pile summary width mismatch");
        let (rarities, rest) = out.split_at_mut(Rarity::COUNT);
        let (types, tail) = rest.split_at_mut(CardType::COUNT);
        for (dst, &n) in rarities.iter_mut().zip(&self.rarity_counts) {
            *dst = n as f32;
        }
        for (dst, &n) in types.iter_mut().zip(&self.type_counts) {
            *dst = n as f32;
        }
        tail.copy_from_slice(&[
            self.average(self.total_cost),
            self.average(self.total_upgrades),
            self.with_id as f32,
        ]);
    }
}
