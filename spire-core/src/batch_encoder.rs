//! Batch observation encoder for training throughput.
//!
//! Pre-allocates a contiguous buffer for N observations and encodes
//! directly into slots, avoiding per-observation allocation.

use log::trace;
use rayon::prelude::*;
use spire_engine::State;

use crate::encoder::{ObservationEncoder, OBS_SIZE};

/// Batch encoder that manages a contiguous buffer for multiple observations.
///
/// The buffer layout is `[batch_size, OBS_SIZE]` in row-major order.
pub struct BatchEncoder {
    /// Contiguous buffer: batch_size * OBS_SIZE f32 values.
    buffer: Vec<f32>,
    batch_size: usize,
}

impl BatchEncoder {
    /// Creates a new batch encoder with the given batch size.
    #[inline]
    pub fn new(batch_size: usize) -> Self {
        Self {
            buffer: vec![0.0; batch_size * OBS_SIZE],
            batch_size,
        }
    }

    #[inline]
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Copies a pre-encoded observation into the batch at the given slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= batch_size`.
    #[inline]
    pub fn copy_from_encoder(&mut self, slot: usize, src: &ObservationEncoder) {
        self.slot_mut(slot).copy_from_slice(src.as_slice());
    }

    /// Returns a mutable slice for a specific slot.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= batch_size`.
    #[inline]
    pub fn slot_mut(&mut self, slot: usize) -> &mut [f32] {
        assert!(slot < self.batch_size, "slot {slot} >= batch_size {}", self.batch_size);
        let start = slot * OBS_SIZE;
        &mut self.buffer[start..start + OBS_SIZE]
    }

    /// Returns the observation stored in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= batch_size`.
    #[inline]
    pub fn slot(&self, slot: usize) -> &[f32] {
        assert!(slot < self.batch_size, "slot {slot} >= batch_size {}", self.batch_size);
        let start = slot * OBS_SIZE;
        &self.buffer[start..start + OBS_SIZE]
    }

    /// Encodes `states` into the leading slots in parallel.
    ///
    /// Slot `i` receives `states[i]`; slots past `states.len()` are zeroed.
    /// Each rayon worker reuses one [`ObservationEncoder`].
    ///
    /// # Panics
    ///
    /// Panics if `states.len() > batch_size`.
    pub fn encode_states(&mut self, states: &[State]) {
        assert!(
            states.len() <= self.batch_size,
            "{} states exceed batch_size {}",
            states.len(),
            self.batch_size
        );
        self.buffer[states.len() * OBS_SIZE..].fill(0.0);
        self.buffer
            .par_chunks_mut(OBS_SIZE)
            .zip(states.par_iter())
            .for_each_init(ObservationEncoder::new, |enc, (slot, state)| {
                slot.copy_from_slice(enc.encode(state));
            });
        trace!("encoded batch of {} states", states.len());
    }

    /// Returns the full batch as a contiguous slice.
    ///
    /// Layout: `[batch_size, OBS_SIZE]` row-major.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.buffer
    }

    /// Clears all slots to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
    }

    /// Returns the total number of f32 values in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the batch has zero capacity.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.batch_size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_state;
    use serde_json::json;

    fn states(n: usize) -> Vec<State> {
        (0..n)
            .map(|i| {
                State::from_value(json!({
                    "game_state": {"floor": i, "gold": i * 10, "hand": [{"cost": i}]}
                }))
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn batch_encoder_creates_correct_size() {
        let batch = BatchEncoder::new(32);
        assert_eq!(batch.len(), 32 * OBS_SIZE);
        assert_eq!(batch.batch_size(), 32);
        assert!(!batch.is_empty());
        assert!(BatchEncoder::new(0).is_empty());
    }

    #[test]
    fn batch_encoder_slot_isolation() {
        let mut batch = BatchEncoder::new(2);
        let slot0 = batch.slot_mut(0);
        slot0[0] = 1.0;
        let slot1 = batch.slot_mut(1);
        assert_eq!(slot1[0], 0.0);
    }

    #[test]
    fn batch_encoder_clear_zeros() {
        let mut batch = BatchEncoder::new(4);
        batch.slot_mut(2)[100] = 42.0;
        batch.clear();
        assert_eq!(batch.as_slice()[2 * OBS_SIZE + 100], 0.0);
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let states = states(9);
        let mut batch = BatchEncoder::new(12);
        batch.as_mut_slice().fill(7.0);
        batch.encode_states(&states);
        for (i, s) in states.iter().enumerate() {
            assert_eq!(batch.slot(i), encode_state(s).as_slice(), "slot {i}");
        }
        for i in states.len()..12 {
            assert!(batch.slot(i).iter().all(|&v| v == 0.0));
        }
    }

    #[test]
    fn copy_from_encoder_fills_slot() {
        let s = &states(2)[1];
        let mut enc = ObservationEncoder::new();
        enc.encode(s);
        let mut batch = BatchEncoder::new(3);
        batch.copy_from_encoder(2, &enc);
        assert_eq!(batch.slot(2), enc.as_slice().as_slice());
    }

    #[test]
    #[should_panic]
    fn too_many_states_panics() {
        BatchEncoder::new(1).encode_states(&states(2));
    }
}
