//! Fractional-weighted downsampling to a single bit per output frame.

use ndarray::{ArrayBase, Data, Ix1};


/// Number of output frames, `floor(input_frames * output_rate / input_rate)`.
pub fn output_frame_count(input_frames: usize, input_rate: u32, output_rate: u32) -> usize {
    (input_frames as f64 * (output_rate as f64 / input_rate as f64)) as usize
}

/// Map an averaged sample to a bit: one below the midpoint, zero otherwise.
#[inline]
pub fn threshold(average: f64) -> u8 {
    if average < 0.5 { 1 } else { 0 }
}

/// Box-filter downsampler with fractional carry-over.
///
/// Each output frame spans exactly `input_frames / output_frames` input
/// frames. A sample straddling the boundary between two output frames is
/// split: its uncovered weight is credited to the next output frame.
#[derive(Debug, Clone)]
pub struct Crusher {
    input_frames: usize,
    frames_per_output: f64,
}

impl Crusher {
    pub fn new(input_frames: usize, output_frames: usize) -> Self {
        Crusher {
            input_frames,
            frames_per_output: input_frames as f64 / output_frames as f64,
        }
    }

    pub fn frames_per_output(&self) -> f64 {
        self.frames_per_output
    }

    /// Crush `filtered` to bits. Reads from the start of `filtered` until
    /// `input_frames` samples are consumed; the last output frame may be
    /// partial. Samples past the end of `filtered` count as zero.
    pub fn crush<D>(&self, filtered: &ArrayBase<D, Ix1>) -> Vec<u8>
    where
        D: Data<Elem = i32>,
    {
        if self.input_frames == 0 || !self.frames_per_output.is_finite() {
            return Vec::new();
        }

        let mut bits = Vec::new();

        let mut consumed = 0;
        let mut index = 0;
        let mut current = 0.0;
        let mut leftover = 0.0;

        while consumed < self.input_frames {
            let mut remaining = self.frames_per_output;
            let mut total = 0.0;

            if leftover > 0.0 {
                remaining -= leftover;
                total += current * leftover;
                leftover = 0.0;
            }

            while remaining > 0.0 {
                current = filtered.get(index).copied().unwrap_or(0) as f64;
                index += 1;

                let weight = f64::min(1.0, remaining);
                total += current * weight;
                leftover = 1.0 - weight;

                consumed += 1;
                remaining -= 1.0;
            }

            bits.push(threshold(total / self.frames_per_output));
        }

        bits
    }
}
