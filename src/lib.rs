//! 1-bit bit-crusher for XO-CHIP audio.
//!
//! A mono PCM recording is low-pass filtered, downsampled to 4 kHz and
//! thresholded to one bit per frame. The result is written as an 8-bit
//! verification wave file and as packed bytes in Octo hex notation.

pub mod crush;
pub mod emit;
pub mod error;
pub mod filter;
pub mod logger;
pub mod math;
pub mod params;
pub mod pipeline;
pub mod wave;
pub mod window;

pub use error::{Error, Result};
pub use pipeline::{run, Config, Summary};
