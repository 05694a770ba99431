use crate::crush::{self, Crusher};
use crate::emit::{self, OutputPaths};
use crate::error::Result;
use crate::filter::LowPass;
use crate::params::{Parameters, OUTPUT_SAMPLE_RATE};
use crate::wave;

use std::path::PathBuf;

use log::{debug, info, warn};
use rand::seq::SliceRandom;


const SASS_LINES: &[&str] = &[
    "Apologize to your audio software.",
    "I hope you realize that what you are doing is wrong.",
    "Prepare yourself for the consequences.",
    "Every bit you crush is a callous waste of sound.",
    "You are a 1-bit monster.",
    "Octo might forgive you, but I never will.",
];


/// Everything a single run needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output_base: PathBuf,
    pub quiet_sass: bool,
    pub params: Parameters,
}

impl Config {
    pub fn new<P: Into<PathBuf>, Q: Into<PathBuf>>(input: P, output_base: Q) -> Self {
        Config {
            input: input.into(),
            output_base: output_base.into(),
            quiet_sass: false,
            params: Parameters::default(),
        }
    }

    pub fn outputs(&self) -> OutputPaths {
        OutputPaths::from_base(&self.output_base)
    }
}


#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub input_frames: usize,
    pub input_rate: u32,
    pub output_frames: usize,
    pub bits: usize,
    pub bytes: usize,
    pub outputs: OutputPaths,
}


/// Crush the configured input and write both output files.
pub fn run(config: &Config) -> Result<Summary> {
    config.params.validate()?;

    let recording = wave::load_mono(&config.input)?;
    let input_frames = recording.frame_count();
    let input_rate = recording.sample_rate;
    let output_frames = crush::output_frame_count(input_frames, input_rate, OUTPUT_SAMPLE_RATE);

    info!("Loading from file {:?}", config.input.display().to_string());
    info!("{} input samples at {} KHz, {} output samples at {} KHz",
          input_frames, input_rate as f64 / 1000.0,
          output_frames, OUTPUT_SAMPLE_RATE as f64 / 1000.0);
    info!("Target output size: {} bytes.", output_frames / 8 + usize::from(output_frames % 8 != 0));

    if !config.quiet_sass {
        if let Some(line) = SASS_LINES.choose(&mut rand::thread_rng()) {
            info!("-----");
            info!("{}", line);
            info!("-----");
        }
    }

    if output_frames == 0 {
        warn!("Input is shorter than a single output frame, output will be empty");
    }

    info!("Building low-pass filter...");
    let cutoff = OUTPUT_SAMPLE_RATE as f64 / input_rate as f64;
    let lowpass = LowPass::from_params(cutoff, &config.params.filter);
    debug!("{} taps, relative cutoff {:.6}, {:?} window", lowpass.len(), cutoff, lowpass.window());

    info!("Applying low-pass filter...");
    let filtered = lowpass.apply(&recording.samples, recording.width);

    info!("Crushing signal, mercilessly...");
    let crusher = Crusher::new(input_frames, output_frames);
    debug!("{:.6} input frames per output frame", crusher.frames_per_output());

    let mut bits = if output_frames > 0 { crusher.crush(&filtered) } else { Vec::new() };
    let crushed = bits.len();
    emit::pad_bits(&mut bits);
    debug!("{} bits crushed, {} after padding", crushed, bits.len());

    let outputs = config.outputs();

    info!("Writing crushed wave to disk at {:?}...", outputs.wav.display().to_string());
    emit::write_wav(&outputs.wav, &bits, OUTPUT_SAMPLE_RATE)?;

    info!("Writing Octo-compatible text to disk at {:?}...", outputs.txt.display().to_string());
    let bytes = emit::pack_bits(&bits);
    emit::write_text(&outputs.txt, &bytes)?;

    Ok(Summary {
        input_frames,
        input_rate,
        output_frames,
        bits: crushed,
        bytes: bytes.len(),
        outputs,
    })
}
