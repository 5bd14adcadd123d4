//! Typed model of the card game's JSON state feed.
//!
//! [`State`] is built from one snapshot at a time with a full-replace rule:
//! see [`update`] for the details.

pub mod card;
pub mod categories;
pub mod errors;
pub mod limits;
pub mod model;
pub mod raw;
pub mod state;
mod tests;

pub use card::{CardRecord, CardView, PileSummary};
pub use categories::{CardType, MapSymbol, Rarity, RoomPhase, RoomType};
pub use errors::{SpireError, SpireResult};
pub use model::Encode;
pub use state::{update, State};
