//! Spire observation encoder
//!
//! Turns a card game [`State`](spire_engine::State) into a flat `f32`
//! observation of fixed length [`OBS_SIZE`], independent of the snapshot's
//! contents. Includes a batch encoder for filling training buffers.

pub mod batch_encoder;
pub mod encoder;
pub mod schema;

pub use batch_encoder::BatchEncoder;
pub use encoder::{encode_state, ObservationEncoder};
pub use schema::{size, Section, OBS_SIZE};
