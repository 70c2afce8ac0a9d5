use super::activation::Activation;
use super::quantization::{QuantElement, QuantParams};
use rayon::prelude::*;

// Elements handled per rayon task in `map`; small tensors stay on one task.
const PAR_CHUNK: usize = 16 * 1024;

/// Full byte-to-byte mapping of an 8-bit quantized unary op: entry `v` holds
/// the requantized transform of the element whose raw bit pattern is `v`.
/// Immutable once built, shared across threads without locking.
#[derive(Debug, Clone)]
pub struct LookupTable {
    entries: [u8; 256],
}

impl LookupTable {
    /// Dequantize every value of the 8-bit domain, run the activation over
    /// the whole batch, requantize with round-half-to-even and saturation.
    /// Identical parameters always produce a byte-identical table.
    pub fn build<T: QuantElement>(
        input: QuantParams,
        output: QuantParams,
        activation: &Activation,
    ) -> Self {
        let mut reals = [0.0f32; 256];
        for (raw, x) in reals.iter_mut().enumerate() {
            *x = input.dequantize(T::from_raw(raw as u8).widen());
        }
        activation.apply_slice(&mut reals);

        let mut entries = [0u8; 256];
        for (slot, &y) in entries.iter_mut().zip(reals.iter()) {
            *slot = output.quantize::<T>(y).to_raw();
        }
        Self { entries }
    }

    #[inline]
    pub fn lookup(&self, raw: u8) -> u8 {
        self.entries[raw as usize]
    }

    /// The elementwise loop: `out[i] = table[input[i]]`. Chunked across the
    /// rayon pool; chunks are disjoint, so partitioning cannot change results.
    pub fn map<T: QuantElement>(&self, input: &[T], out: &mut [T]) {
        debug_assert_eq!(input.len(), out.len());
        out.par_chunks_mut(PAR_CHUNK)
            .zip(input.par_chunks(PAR_CHUNK))
            .for_each(|(out_chunk, in_chunk)| {
                for (dst, &src) in out_chunk.iter_mut().zip(in_chunk) {
                    *dst = T::from_raw(self.entries[src.to_raw() as usize]);
                }
            });
    }

    pub fn as_bytes(&self) -> &[u8; 256] {
        &self.entries
    }
}
