//! Collection caps shared by the model (truncation at construction) and the
//! encoder (zero padding at encode time).

/// Monsters kept in a combat state.
pub const MAX_MONSTERS: usize = 6;

/// Cards offered by a shop screen.
pub const MAX_SHOP_CARDS: usize = 7;
/// Potions offered by a shop screen.
pub const MAX_SHOP_POTIONS: usize = 3;
/// Relics offered by a shop screen.
pub const MAX_SHOP_RELICS: usize = 3;

/// Map nodes kept for the map summary.
pub const MAX_MAP_NODES: usize = 70;

/// Cards encoded from the raw hand list.
pub const MAX_HAND: usize = 10;
/// Cards encoded from the raw master deck list.
pub const MAX_DECK: usize = 50;

/// Potion belt slots.
pub const MAX_PLAYER_POTIONS: usize = 3;
/// Owned relics encoded (id presence + counter).
pub const MAX_OWNED_RELICS: usize = 10;
/// Player powers encoded (id presence + amount).
pub const MAX_PLAYER_POWERS: usize = 6;
