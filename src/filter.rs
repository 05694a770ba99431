//! Windowed-sinc low-pass design and convolution.

use crate::math::sinc;
use crate::params::{FilterParameters, WindowType};
use crate::wave::SampleWidth;
use crate::window::WindowFunction;

use ndarray::{Array1, ArrayBase, Data, Ix1};


/// Number of filter taps for the given transition band: `ceil(4 / tb)`,
/// bumped to the next odd value.
pub fn kernel_len(transition_band: f64) -> usize {
    let n = (4.0 / transition_band).ceil() as usize;
    n.max(1) | 1
}

/// Low-pass FIR kernel.
///
/// The ideal response `sinc(2 fc (n - (N - 1) / 2))` is tapered by `window`
/// and then scaled by the sum of the *unwindowed* response, so the DC gain is
/// `sum(h w) / sum(h)` rather than exactly one.
#[derive(Debug, Clone)]
pub struct LowPass {
    cutoff: f64,
    window: WindowType,
    coefs: Array1<f64>,
}

impl LowPass {
    pub fn design(cutoff: f64, transition_band: f64, window: WindowType) -> Self {
        let len = kernel_len(transition_band);
        let center = (len - 1) as f64 / 2.0;

        let h: Array1<f64> = (0..len)
            .map(|i| sinc(2.0 * cutoff * (i as f64 - center)))
            .collect();

        let w = window.create::<f64>(len).to_array();
        let coefs = (&h * &w) / h.sum();

        LowPass { cutoff, window, coefs }
    }

    pub fn from_params(cutoff: f64, params: &FilterParameters) -> Self {
        LowPass::design(cutoff, params.transition_band, params.window)
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    pub fn window(&self) -> WindowType {
        self.window
    }

    pub fn coefs(&self) -> &Array1<f64> {
        &self.coefs
    }

    pub fn len(&self) -> usize {
        self.coefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefs.is_empty()
    }

    /// Full discrete convolution of `input` with the kernel. The output has
    /// `input.len() + self.len() - 1` samples, each cast back to `width`.
    pub fn apply<D>(&self, input: &ArrayBase<D, Ix1>, width: SampleWidth) -> Array1<i32>
    where
        D: Data<Elem = i32>,
    {
        convolve(input, &self.coefs)
            .iter()
            .map(|&v| width.wrap(v))
            .collect()
    }
}

pub fn convolve<D1, D2>(a: &ArrayBase<D1, Ix1>, v: &ArrayBase<D2, Ix1>) -> Array1<f64>
where
    D1: Data<Elem = i32>,
    D2: Data<Elem = f64>,
{
    if a.is_empty() || v.is_empty() {
        return Array1::zeros(0);
    }

    let (n, m) = (a.len(), v.len());
    let mut out = Array1::zeros(n + m - 1);

    for (k, y) in out.iter_mut().enumerate() {
        let lo = k.saturating_sub(n - 1);
        let hi = k.min(m - 1);

        *y = (lo..=hi).map(|j| v[j] * a[k - j] as f64).sum();
    }

    out
}
