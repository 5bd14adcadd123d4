use serde::Serialize;
use serde_json::Value;

use super::{bit, Encode};
use crate::card::{CardRecord, CardView};
use crate::categories::{CardType, Rarity};
use crate::raw;

/// Card offered for sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShopCard {
    pub price: f64,
    pub cost: f64,
    pub card_type: CardType,
    pub upgrades: f64,
    pub has_target: bool,
    pub exhausts: bool,
    /// `id`, else `name`.
    pub id: Option<String>,
    pub uuid: Option<String>,
    pub rarity: Option<Rarity>,
    pub ethereal: bool,
    pub is_playable: bool,
}

impl ShopCard {
    pub fn from_json(data: &Value) -> Self {
        let view = CardView::of(CardRecord::Raw(data));
        Self {
            price: view.price,
            cost: view.cost,
            card_type: view.card_type,
            upgrades: view.upgrades,
            has_target: view.has_target,
            exhausts: view.exhausts,
            id: raw::label(data, &["id", "name"]),
            uuid: raw::label(data, &["uuid"]),
            rarity: view.rarity,
            ethereal: view.ethereal,
            is_playable: view.is_playable,
        }
    }
}

impl Encode for ShopCard {
    const WIDTH: usize = CardView::SHOP_FEATURES;

    fn encode_into(&self, out: &mut [f32]) {
        out.copy_from_slice(&CardView::of(CardRecord::Structured(self)).shop_row());
    }
}

/// Width shared by potion and relic slots: price, id present.
pub const ITEM_WIDTH: usize = 2;

/// Potion offered for sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Potion {
    pub price: f64,
    pub id: Option<String>,
}

impl Potion {
    pub fn from_json(data: &Value) -> Self {
        Self {
            price: raw::num(data, "price"),
            id: raw::label(data, &["id", "name"]),
        }
    }
}

impl Encode for Potion {
    const WIDTH: usize = ITEM_WIDTH;

    fn encode_into(&self, out: &mut [f32]) {
        ItemRecord::Potion(self).encode_into(out);
    }
}

/// Relic offered for sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Relic {
    pub price: f64,
    pub id: Option<String>,
}

impl Relic {
    pub fn from_json(data: &Value) -> Self {
        Self {
            price: raw::num(data, "price"),
            id: raw::label(data, &["id", "name"]),
        }
    }
}

impl Encode for Relic {
    const WIDTH: usize = ITEM_WIDTH;

    fn encode_into(&self, out: &mut [f32]) {
        ItemRecord::Relic(self).encode_into(out);
    }
}

/// A potion or relic slot, typed or straight from the raw snapshot.
#[derive(Debug, Clone, Copy)]
pub enum ItemRecord<'a> {
    Potion(&'a Potion),
    Relic(&'a Relic),
    Raw(&'a Value),
}

impl ItemRecord<'_> {
    /// Writes `[price, id present]`; every variant fills [`ITEM_WIDTH`].
    pub fn encode_into(self, out: &mut [f32]) {
        let (price, has_id) = match self {
            ItemRecord::Potion(p) => (p.price, p.id.is_some()),
            ItemRecord::Relic(r) => (r.price, r.id.is_some()),
            ItemRecord::Raw(v) => (raw::num(v, "price"), raw::present(v, &["id", "name"])),
        };
        out.copy_from_slice(&[price as f32, bit(has_id)]);
    }
}
