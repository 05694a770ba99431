//! Output artifacts: the verification wave file and the packed hex dump.

use crate::error::{self, Result};

use std::io::Write;
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use snafu::ResultExt;


/// Append zero bits until the length is a multiple of eight.
pub fn pad_bits(bits: &mut Vec<u8>) {
    let rem = bits.len() % 8;
    if rem != 0 {
        bits.resize(bits.len() + 8 - rem, 0);
    }
}

/// Pack bits into bytes, most significant bit first. A trailing partial
/// group is zero-filled on the right.
pub fn pack_bits(bits: &[u8]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk.iter()
                .chain(std::iter::repeat(&0))
                .take(8)
                .fold(0u8, |byte, &bit| (byte << 1) | (bit & 1))
        })
        .collect()
}

/// Space-separated `0x..` literals, lowercase and without zero padding.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| format!("{:#x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}


/// The pair of files written for one run, `<base>.out.wav` and `<base>.out.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub wav: PathBuf,
    pub txt: PathBuf,
}

impl OutputPaths {
    pub fn from_base<P: AsRef<Path>>(base: P) -> Self {
        let base = base.as_ref().as_os_str();

        let mut wav = base.to_os_string();
        wav.push(".out.wav");

        let mut txt = base.to_os_string();
        txt.push(".out.txt");

        OutputPaths { wav: wav.into(), txt: txt.into() }
    }
}

/// Output base for a run: the file stem of `outfile` if given, otherwise of
/// `infile`, placed in `dir`.
pub fn output_base(dir: &Path, infile: &Path, outfile: Option<&Path>) -> PathBuf {
    let source = outfile.unwrap_or(infile);
    let stem = source.file_stem().unwrap_or_else(|| source.as_os_str());

    dir.join(stem)
}


/// Write one 8-bit unsigned sample per bit, 255 for one and 0 for zero.
pub fn write_wav<P: AsRef<Path>>(path: P, bits: &[u8], sample_rate: u32) -> Result<()> {
    let path = path.as_ref();

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 8,
        sample_format: SampleFormat::Int,
    };

    // hound stores 8-bit samples with a +128 offset
    let mut writer = WavWriter::create(path, spec).context(error::WriteWavSnafu { path })?;
    for &bit in bits {
        let sample: i8 = if bit != 0 { 127 } else { -128 };
        writer.write_sample(sample).context(error::WriteWavSnafu { path })?;
    }

    writer.finalize().context(error::WriteWavSnafu { path })
}

pub fn write_text<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let mut file = std::fs::File::create(path).context(error::WriteTextSnafu { path })?;
    file.write_all(format_hex(bytes).as_bytes()).context(error::WriteTextSnafu { path })
}
