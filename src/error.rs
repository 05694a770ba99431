use std::path::PathBuf;

use snafu::Snafu;


pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Unable to open file {:?}: {}", path.display().to_string(), source))]
    OpenInput {
        path: PathBuf,
        source: hound::Error,
    },

    #[snafu(display("Unable to read samples from {:?}: {}", path.display().to_string(), source))]
    ReadSamples {
        path: PathBuf,
        source: hound::Error,
    },

    #[snafu(display("Unsupported number of channels ({}) in {:?}. Must be a mono file",
                    channels, path.display().to_string()))]
    UnsupportedFormat {
        path: PathBuf,
        channels: u16,
    },

    #[snafu(display("Invalid sample rate ({} Hz) in {:?}", sample_rate, path.display().to_string()))]
    InvalidSampleRate {
        path: PathBuf,
        sample_rate: u32,
    },

    #[snafu(display("Unsupported sample format in {:?}: {} bits ({}), expected 8, 16, 24 or 32 bit integer PCM",
                    path.display().to_string(), bits, format))]
    UnsupportedSampleWidth {
        path: PathBuf,
        bits: u16,
        format: &'static str,
    },

    #[snafu(display("Unable to write wave file {:?}: {}", path.display().to_string(), source))]
    WriteWav {
        path: PathBuf,
        source: hound::Error,
    },

    #[snafu(display("Unable to write text file {:?}: {}", path.display().to_string(), source))]
    WriteText {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Unable to read parameters from {:?}: {}", path.display().to_string(), source))]
    ReadParams {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Invalid parameter file {:?}: {}", path.display().to_string(), source))]
    ParseParams {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[snafu(display("Invalid parameter '{}': {}", name, reason))]
    InvalidParams {
        name: &'static str,
        reason: String,
    },
}
