use crate::error::{self, Result};
use crate::window::{self, WindowFunction};

use std::path::Path;

use num::{traits::FloatConst, Float};
use serde::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};


/// Sample rate of the crushed output, fixed by the XO-CHIP audio buffer.
pub const OUTPUT_SAMPLE_RATE: u32 = 4000;


#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Parameters {
    #[serde(default)]
    pub filter: FilterParameters,
}

impl Parameters {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = std::fs::File::open(path).context(error::ReadParamsSnafu { path })?;
        let params: Parameters = serde_yaml::from_reader(file)
            .context(error::ParseParamsSnafu { path })?;

        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        let tb = self.filter.transition_band;

        ensure!(tb.is_finite() && tb > 0.0, error::InvalidParamsSnafu {
            name: "filter.transition-band",
            reason: format!("must be a positive number, got {}", tb),
        });

        Ok(())
    }
}


#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct FilterParameters {
    /// Width of the transition band, relative to the input sample rate.
    #[serde(default = "param_defaults::transition_band")]
    pub transition_band: f64,

    #[serde(default)]
    pub window: WindowType,
}

impl Default for FilterParameters {
    fn default() -> Self {
        FilterParameters {
            transition_band: param_defaults::transition_band(),
            window: WindowType::default(),
        }
    }
}


#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", tag = "type")]
pub enum WindowType {
    Rectangular,
    Hann,
    Hamming,
    Blackman,
    BlackmanExact,
    Nuttall,
    BlackmanHarris,
}

impl Default for WindowType {
    fn default() -> Self {
        WindowType::Blackman
    }
}

impl WindowType {
    pub fn create<'a, T>(self, len: usize) -> Box<dyn WindowFunction<T> + 'a>
    where
        T: Float + FloatConst + 'a,
    {
        match self {
            WindowType::Rectangular    => Box::new(window::rectangular(len)),
            WindowType::Hann           => Box::new(window::hann(len)),
            WindowType::Hamming        => Box::new(window::hamming(len)),
            WindowType::Blackman       => Box::new(window::blackman(len)),
            WindowType::BlackmanExact  => Box::new(window::blackman_exact(len)),
            WindowType::Nuttall        => Box::new(window::nuttall(len)),
            WindowType::BlackmanHarris => Box::new(window::blackman_harris(len)),
        }
    }
}


mod param_defaults {
    pub fn transition_band() -> f64 {
        0.05
    }
}
