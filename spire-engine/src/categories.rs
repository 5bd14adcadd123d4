//! Categorical lookup tables.
//!
//! Each category has exactly one table. Lookups never fail: an unrecognized
//! name maps to the category's fallback variant, so an unseen value is
//! indistinguishable from the fallback in the encoded vector.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Card type
// ---------------------------------------------------------------------------

/// Card type. Unknown names fall back to [`CardType::Skill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CardType {
    Attack = 0,
    #[default]
    Skill = 1,
    Power = 2,
}

impl CardType {
    pub const COUNT: usize = 3;
    pub const FALLBACK: CardType = CardType::Skill;

    pub fn from_name(name: &str) -> Self {
        match name {
            "ATTACK" => CardType::Attack,
            "SKILL" => CardType::Skill,
            "POWER" => CardType::Power,
            _ => Self::FALLBACK,
        }
    }

    /// Missing type reads as the fallback as well.
    pub fn from_opt(name: Option<&str>) -> Self {
        name.map_or(Self::FALLBACK, Self::from_name)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Card rarity. Unknown names fall back to [`Rarity::Basic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Rarity {
    #[default]
    Basic = 0,
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Special = 4,
    Curse = 5,
}

impl Rarity {
    pub const COUNT: usize = 6;
    pub const FALLBACK: Rarity = Rarity::Basic;

    pub fn from_name(name: &str) -> Self {
        match name {
            "BASIC" => Rarity::Basic,
            "COMMON" => Rarity::Common,
            "UNCOMMON" => Rarity::Uncommon,
            "RARE" => Rarity::Rare,
            "SPECIAL" => Rarity::Special,
            "CURSE" => Rarity::Curse,
            _ => Self::FALLBACK,
        }
    }

    pub fn from_opt(name: Option<&str>) -> Self {
        name.map_or(Self::FALLBACK, Self::from_name)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Room type
// ---------------------------------------------------------------------------

/// Room type one-hot slots. Anything else lands on slot 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RoomType {
    #[default]
    MonsterRoom = 0,
    ShopRoom = 1,
    EventRoom = 2,
    RestRoom = 3,
}

impl RoomType {
    pub const COUNT: usize = 4;
    pub const FALLBACK: RoomType = RoomType::MonsterRoom;

    pub fn from_name(name: &str) -> Self {
        match name {
            "MonsterRoom" => RoomType::MonsterRoom,
            "ShopRoom" => RoomType::ShopRoom,
            "EventRoom" => RoomType::EventRoom,
            "RestRoom" => RoomType::RestRoom,
            _ => Self::FALLBACK,
        }
    }

    pub fn from_opt(name: Option<&str>) -> Self {
        name.map_or(Self::FALLBACK, Self::from_name)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Room phase
// ---------------------------------------------------------------------------

/// Room phase. Unknown or missing phases use the dedicated `Unknown` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum RoomPhase {
    Combat = 0,
    Complete = 1,
    Event = 2,
    Shop = 3,
    Rest = 4,
    #[default]
    Unknown = 5,
}

impl RoomPhase {
    pub const COUNT: usize = 6;
    pub const FALLBACK: RoomPhase = RoomPhase::Unknown;

    pub fn from_name(name: &str) -> Self {
        match name {
            "COMBAT" => RoomPhase::Combat,
            "COMPLETE" => RoomPhase::Complete,
            "EVENT" => RoomPhase::Event,
            "SHOP" => RoomPhase::Shop,
            "REST" => RoomPhase::Rest,
            _ => Self::FALLBACK,
        }
    }

    pub fn from_opt(name: Option<&str>) -> Self {
        name.map_or(Self::FALLBACK, Self::from_name)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// Map symbol
// ---------------------------------------------------------------------------

/// Map node symbols counted by the map summary histogram.
///
/// Symbols outside this table (boss, treasure, unknown glyphs) are not
/// counted, so there is no fallback variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MapSymbol {
    Monster = 0,
    Question = 1,
    Shop = 2,
    Elite = 3,
    Rest = 4,
}

impl MapSymbol {
    pub const COUNT: usize = 5;

    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "M" => Some(MapSymbol::Monster),
            "?" => Some(MapSymbol::Question),
            "$" => Some(MapSymbol::Shop),
            "E" => Some(MapSymbol::Elite),
            "R" => Some(MapSymbol::Rest),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}
