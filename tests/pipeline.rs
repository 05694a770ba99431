use chipify::params::OUTPUT_SAMPLE_RATE;
use chipify::{Config, Error};

use std::f64::consts::PI;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tempfile::TempDir;


fn write_wav<S, P>(path: P, channels: u16, sample_rate: u32, bits: u16, samples: &[S])
where
    S: hound::Sample + Copy,
    P: AsRef<Path>,
{
    let spec = WavSpec {
        channels,
        sample_rate,
        bits_per_sample: bits,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(path, spec).unwrap();
    for s in samples {
        writer.write_sample(*s).unwrap();
    }
    writer.finalize().unwrap();
}

fn sine(len: usize, freq: f64, rate: f64, amplitude: f64) -> Vec<f64> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * freq * i as f64 / rate).sin())
        .collect()
}

fn quiet_config(dir: &TempDir, input: &Path, name: &str) -> Config {
    let mut config = Config::new(input, dir.path().join(name));
    config.quiet_sass = true;
    config
}


#[test]
fn eight_bit_sine_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("sine.wav");

    let samples: Vec<i8> = sine(8000, 440.0, 8000.0, 100.0)
        .into_iter()
        .map(|v| v as i8)
        .collect();
    write_wav(&input, 1, 8000, 8, &samples);

    let summary = chipify::run(&quiet_config(&dir, &input, "sine")).unwrap();

    assert_eq!(summary.input_frames, 8000);
    assert_eq!(summary.input_rate, 8000);
    assert_eq!(summary.output_frames, 4000);
    assert_eq!(summary.bits, 4000);
    assert_eq!(summary.bytes, 500);

    let text = std::fs::read_to_string(&summary.outputs.txt).unwrap();
    let tokens: Vec<&str> = text.split(' ').collect();
    assert_eq!(tokens.len(), 500);
    for token in tokens {
        assert!(token.starts_with("0x"), "bad token {:?}", token);
        let value = u8::from_str_radix(&token[2..], 16).unwrap();
        assert_eq!(format!("{:#x}", value), token);
    }

    let reader = WavReader::open(&summary.outputs.wav).unwrap();
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().bits_per_sample, 8);
    assert_eq!(reader.spec().sample_rate, OUTPUT_SAMPLE_RATE);
    assert_eq!(reader.duration(), 4000);
}

#[test]
fn output_wave_mirrors_text_bits() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tone.wav");

    let samples: Vec<i16> = sine(4410, 220.0, 44100.0, 20000.0)
        .into_iter()
        .map(|v| v as i16)
        .collect();
    write_wav(&input, 1, 44100, 16, &samples);

    let summary = chipify::run(&quiet_config(&dir, &input, "tone")).unwrap();
    assert_eq!(summary.output_frames, 400);

    // on disk the samples are unsigned: 0 and 255
    let raw = std::fs::read(&summary.outputs.wav).unwrap();
    let mut reader = WavReader::open(&summary.outputs.wav).unwrap();
    let frames = reader.duration() as usize;
    let data = &raw[raw.len() - frames..];
    assert!(data.iter().all(|&b| b == 0 || b == 255));

    // decoded wave bits, packed MSB first, give the text bytes
    let bits: Vec<u8> = reader.samples::<i8>()
        .map(|s| if s.unwrap() > 0 { 1 } else { 0 })
        .collect();
    assert_eq!(bits.len() % 8, 0);
    assert_eq!(bits.len() / 8, summary.bytes);

    let text = std::fs::read_to_string(&summary.outputs.txt).unwrap();
    let expected = chipify::emit::format_hex(&chipify::emit::pack_bits(&bits));
    assert_eq!(text, expected);
}

#[test]
fn runs_are_deterministic() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("noise.wav");

    let samples: Vec<i16> = (0..11025i32)
        .map(|i| ((i * 7919) % 20011 - 10005) as i16)
        .collect();
    write_wav(&input, 1, 11025, 16, &samples);

    let first = chipify::run(&quiet_config(&dir, &input, "first")).unwrap();
    let second = chipify::run(&quiet_config(&dir, &input, "second")).unwrap();

    assert_eq!(std::fs::read(&first.outputs.wav).unwrap(), std::fs::read(&second.outputs.wav).unwrap());
    assert_eq!(std::fs::read(&first.outputs.txt).unwrap(), std::fs::read(&second.outputs.txt).unwrap());
}

#[test]
fn stereo_input_is_rejected_without_outputs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("stereo.wav");
    write_wav(&input, 2, 8000, 16, &[0i16; 200]);

    let config = quiet_config(&dir, &input, "stereo");
    let err = chipify::run(&config).unwrap_err();

    assert!(matches!(err, Error::UnsupportedFormat { channels: 2, .. }));
    assert!(!config.outputs().wav.exists());
    assert!(!config.outputs().txt.exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.wav");

    let err = chipify::run(&quiet_config(&dir, &input, "missing")).unwrap_err();
    assert!(matches!(err, Error::OpenInput { .. }));
    assert!(err.to_string().contains("missing.wav"));
}

#[test]
fn twenty_four_bit_input() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("deep.wav");

    let samples: Vec<i32> = sine(16000, 300.0, 16000.0, 4_000_000.0)
        .into_iter()
        .map(|v| v as i32)
        .collect();
    write_wav(&input, 1, 16000, 24, &samples);

    let summary = chipify::run(&quiet_config(&dir, &input, "deep")).unwrap();
    assert_eq!(summary.output_frames, 4000);
    assert_eq!(summary.bits, 4000);
    assert_eq!(summary.bytes, 500);
}

#[test]
fn short_sequence_is_padded() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("blip.wav");

    // 30 frames at 40 kHz -> 3 output frames, padded to one byte
    write_wav(&input, 1, 40000, 16, &[0i16; 30]);

    let summary = chipify::run(&quiet_config(&dir, &input, "blip")).unwrap();
    assert_eq!(summary.output_frames, 3);
    assert_eq!(summary.bits, 3);
    assert_eq!(summary.bytes, 1);

    // silence averages below the midpoint: three ones, five padding zeros
    let text = std::fs::read_to_string(&summary.outputs.txt).unwrap();
    assert_eq!(text, "0xe0");

    let reader = WavReader::open(&summary.outputs.wav).unwrap();
    assert_eq!(reader.duration(), 8);
}

#[test]
fn input_shorter_than_one_frame() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("tiny.wav");
    write_wav(&input, 1, 44100, 16, &[0i16; 5]);

    let summary = chipify::run(&quiet_config(&dir, &input, "tiny")).unwrap();
    assert_eq!(summary.output_frames, 0);
    assert_eq!(summary.bytes, 0);
    assert_eq!(std::fs::read_to_string(&summary.outputs.txt).unwrap(), "");
}

#[test]
fn params_change_the_filter() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("params.wav");
    let params = dir.path().join("params.yaml");

    let samples: Vec<i16> = (0..11025i32)
        .map(|i| ((i * 7919) % 20011 - 10005) as i16)
        .collect();
    write_wav(&input, 1, 11025, 16, &samples);
    std::fs::write(&params, "filter:\n  transition-band: 0.2\n  window:\n    type: hann\n").unwrap();

    let default = chipify::run(&quiet_config(&dir, &input, "default")).unwrap();

    let mut config = quiet_config(&dir, &input, "tuned");
    config.params = chipify::params::Parameters::load(&params).unwrap();
    assert_eq!(config.params.filter.transition_band, 0.2);

    let tuned = chipify::run(&config).unwrap();

    // same framing, different filtering
    assert_eq!(tuned.output_frames, default.output_frames);
    assert_eq!(tuned.bytes, default.bytes);
    assert_ne!(
        std::fs::read(&tuned.outputs.txt).unwrap(),
        std::fs::read(&default.outputs.txt).unwrap(),
    );
}

#[test]
fn zero_sample_rate_is_rejected_without_outputs() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("broken.wav");
    write_wav(&input, 1, 8000, 16, &[100i16; 10]);

    // clear the sample rate and byte rate fields of the header
    let mut data = std::fs::read(&input).unwrap();
    for b in &mut data[24..32] {
        *b = 0;
    }
    std::fs::write(&input, data).unwrap();

    let config = quiet_config(&dir, &input, "broken");
    let err = chipify::run(&config).unwrap_err();

    assert!(matches!(err, Error::InvalidSampleRate { sample_rate: 0, .. }));
    assert!(!config.outputs().wav.exists());
    assert!(!config.outputs().txt.exists());
}
