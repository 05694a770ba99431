use crate::error::{self, Result};

use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec};
use ndarray::Array1;
use snafu::{ensure, ResultExt};


/// Integer sample widths with a native signed representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    I8,
    I16,
    I24,
    I32,
}

impl SampleWidth {
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            8  => Some(SampleWidth::I8),
            16 => Some(SampleWidth::I16),
            24 => Some(SampleWidth::I24),
            32 => Some(SampleWidth::I32),
            _  => None,
        }
    }

    pub fn bits(self) -> u16 {
        match self {
            SampleWidth::I8  => 8,
            SampleWidth::I16 => 16,
            SampleWidth::I24 => 24,
            SampleWidth::I32 => 32,
        }
    }

    pub fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    /// Cast a real value back to this width, truncating towards zero and
    /// wrapping around on overflow like a native integer cast.
    pub fn wrap(self, value: f64) -> i32 {
        let v = value as i64;

        match self {
            SampleWidth::I8  => v as i8 as i32,
            SampleWidth::I16 => v as i16 as i32,
            SampleWidth::I24 => ((v as i32) << 8) >> 8,
            SampleWidth::I32 => v as i32,
        }
    }

    // hound centers 8-bit data around zero. The raw bytes are reinterpreted
    // as two's complement instead.
    fn reinterpret(self, sample: i32) -> i32 {
        match self {
            SampleWidth::I8 => (sample + 128) as u8 as i8 as i32,
            _               => sample,
        }
    }
}


/// A mono recording held fully in memory.
#[derive(Debug, Clone)]
pub struct Recording {
    pub samples: Array1<i32>,
    pub sample_rate: u32,
    pub width: SampleWidth,
}

impl Recording {
    pub fn frame_count(&self) -> usize {
        self.samples.len()
    }
}


pub trait WavReaderExt {
    /// Validate the stream as mono integer PCM and decode all frames.
    fn collect_mono_raw(self, path: &Path) -> Result<Recording>;
}

impl<R: Read> WavReaderExt for WavReader<R> {
    fn collect_mono_raw(self, path: &Path) -> Result<Recording> {
        let spec = self.spec();
        let width = check_spec(&spec, path)?;

        let samples = self.into_samples::<i32>()
            .map(|s| s.map(|s| width.reinterpret(s)))
            .collect::<Result<Vec<_>, _>>()
            .context(error::ReadSamplesSnafu { path })?;

        Ok(Recording {
            samples: Array1::from(samples),
            sample_rate: spec.sample_rate,
            width,
        })
    }
}

fn check_spec(spec: &WavSpec, path: &Path) -> Result<SampleWidth> {
    ensure!(spec.channels == 1, error::UnsupportedFormatSnafu {
        path,
        channels: spec.channels,
    });

    ensure!(spec.sample_rate > 0, error::InvalidSampleRateSnafu {
        path,
        sample_rate: spec.sample_rate,
    });

    let format = match spec.sample_format {
        SampleFormat::Int   => "integer",
        SampleFormat::Float => "float",
    };

    match (spec.sample_format, SampleWidth::from_bits(spec.bits_per_sample)) {
        (SampleFormat::Int, Some(width)) => Ok(width),
        _ => error::UnsupportedSampleWidthSnafu { path, bits: spec.bits_per_sample, format }.fail(),
    }
}

/// Open a mono PCM wave file and load its samples.
pub fn load_mono<P: AsRef<Path>>(path: P) -> Result<Recording> {
    let path = path.as_ref();
    let reader = WavReader::open(path).context(error::OpenInputSnafu { path })?;

    reader.collect_mono_raw(path)
}
