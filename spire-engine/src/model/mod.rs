//! Typed snapshot entities.
//!
//! Every entity is built by an infallible `from_json` that applies the
//! documented defaults, and encodes to exactly `WIDTH` scalars.

mod game_state;
mod map;
mod monster;
mod player;
mod screen;
mod shop;

pub use game_state::{GameState, PILES, PILE_COUNT_WIDTH};
pub use map::{Map, MapNode};
pub use monster::{CombatState, Monster};
pub use player::Player;
pub use screen::ScreenState;
pub use shop::{ItemRecord, Potion, Relic, ShopCard, ITEM_WIDTH};

use serde_json::Value;

/// Fixed-width scalar encoding.
pub trait Encode {
    /// Number of scalars written by [`Encode::encode_into`].
    const WIDTH: usize;

    /// Write exactly `WIDTH` scalars into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != WIDTH`.
    fn encode_into(&self, out: &mut [f32]);

    fn encode(&self) -> Vec<f32> {
        let mut out = vec![0.0; Self::WIDTH];
        self.encode_into(&mut out);
        out
    }
}

/// Encode up to `cap` items back to back, zero-filling unused slots.
///
/// `out` must hold `cap * T::WIDTH` scalars.
pub fn encode_padded<T: Encode>(items: &[T], cap: usize, out: &mut [f32]) {
    assert_eq!(out.len(), cap * T::WIDTH, "padded block width mismatch");
    out.fill(0.0);
    for (slot, item) in out.chunks_exact_mut(T::WIDTH).zip(items) {
        item.encode_into(slot);
    }
}

/// Build every array element with `build`, keeping at most `cap`.
pub(crate) fn bounded<T>(items: &[Value], cap: usize, build: impl Fn(&Value) -> T) -> Vec<T> {
    items.iter().take(cap).map(build).collect()
}

/// 1.0 for true, 0.0 for false.
#[inline]
pub fn bit(b: bool) -> f32 {
    if b { 1.0 } else { 0.0 }
}
