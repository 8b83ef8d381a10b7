//! A [`RngCore`] that replays a fixed list of values.
//!
//! Values are given as the 63-bit integers the generator is expected to observe,
//! which keeps hand-computed expectations readable: window `k` of a value is simply
//! `(value >> (6 * k)) & 0x3f`.
use std::collections::VecDeque;

use rand::RngCore;

use super::fault::Fault;

const INT63_MASK: u64 = (1 << 63) - 1;

#[derive(Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<u64>,
    draws: usize,
    fault: Fault,
}

impl ScriptedRng {
    pub fn from_int63<I: IntoIterator<Item = u64>>(values: I) -> Self {
        Self {
            values: values.into_iter().map(|v| (v & INT63_MASK) << 1).collect(),
            ..Default::default()
        }
    }

    pub fn with_fault(mut self, fault: Fault) -> Self {
        self.fault = fault;
        self
    }

    /// Number of values handed out so far
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.values
            .pop_front()
            .expect("ScriptedRng ran out of values")
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let raw = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&raw[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        if self.fault.triggers(self.draws) {
            return Err(rand::Error::new("scripted entropy failure"));
        }

        self.fill_bytes(dest);
        Ok(())
    }
}
