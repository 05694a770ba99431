use ndarray::Array1;
use num::{traits::FloatConst, Float};


/// Symmetric window function evaluated over `0..len`.
#[allow(clippy::len_without_is_empty)]
pub trait WindowFunction<T> {
    fn len(&self) -> usize;
    fn coef(&self, index: usize) -> T;

    fn iter(&self) -> WindowIter<'_, Self, T>
    where
        Self: Sized,
    {
        WindowIter {
            function: self,
            index: 0,
            _p: std::marker::PhantomData,
        }
    }

    fn to_array(&self) -> Array1<T>
    where
        Self: Sized,
    {
        Array1::from_iter(self.iter())
    }
}

impl<T, W> WindowFunction<T> for Box<W>
where
    W: WindowFunction<T> + ?Sized,
{
    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn coef(&self, index: usize) -> T {
        self.as_ref().coef(index)
    }
}

pub struct WindowIter<'a, W, T> {
    function: &'a W,
    index: usize,
    _p: std::marker::PhantomData<*const T>,
}

impl<'a, W, T> Iterator for WindowIter<'a, W, T>
where
    W: WindowFunction<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.index < self.function.len() {
            let value = self.function.coef(self.index);
            self.index += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.function.len() - self.index;
        (len, Some(len))
    }
}

impl<'a, W, T> ExactSizeIterator for WindowIter<'a, W, T>
where
    W: WindowFunction<T>,
{}


// `cos(k 2 pi i / (len - 1))`, the terms of the cosine sum windows. A
// single-point window has no phase, callers evaluate it to one.
fn cosine_term<T: Float + FloatConst>(len: usize, index: usize, k: T) -> Option<T> {
    if len <= 1 {
        return None;
    }

    let n = T::from(len - 1)?;
    let i = T::from(index)?;
    let two = T::one() + T::one();

    Some((k * two * T::PI() * i / n).cos())
}


#[derive(Debug, Clone)]
pub struct Rectangular<T> {
    len: usize,
    _p: std::marker::PhantomData<*const T>,
}

impl<T> Rectangular<T> {
    pub fn new(len: usize) -> Self {
        Rectangular { len, _p: std::marker::PhantomData }
    }
}

impl<T: Float> WindowFunction<T> for Rectangular<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn coef(&self, _index: usize) -> T {
        T::one()
    }
}


/// Two-term cosine window `a0 - a1 cos(x)`.
#[derive(Debug, Clone)]
pub struct GenericHann<T> {
    len: usize,
    a0: T,
    a1: T,
}

impl<T> GenericHann<T> {
    pub fn new(len: usize, a0: T, a1: T) -> Self {
        GenericHann { len, a0, a1 }
    }
}

impl<T: Float + FloatConst> WindowFunction<T> for GenericHann<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn coef(&self, index: usize) -> T {
        match cosine_term(self.len, index, T::one()) {
            Some(c1) => self.a0 - self.a1 * c1,
            None     => T::one(),
        }
    }
}


/// Three-term cosine window `a0 - a1 cos(x) + a2 cos(2x)`.
#[derive(Debug, Clone)]
pub struct Blackman<T> {
    len: usize,
    a0: T,
    a1: T,
    a2: T,
}

impl<T> Blackman<T> {
    pub fn new(len: usize, a0: T, a1: T, a2: T) -> Self {
        Blackman { len, a0, a1, a2 }
    }
}

impl<T: Float + FloatConst> WindowFunction<T> for Blackman<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn coef(&self, index: usize) -> T {
        let two = T::one() + T::one();
        let terms = cosine_term(self.len, index, T::one())
            .zip(cosine_term(self.len, index, two));

        match terms {
            Some((c1, c2)) => self.a0 - self.a1 * c1 + self.a2 * c2,
            None           => T::one(),
        }
    }
}


/// Four-term cosine window `a0 - a1 cos(x) + a2 cos(2x) - a3 cos(3x)`.
#[derive(Debug, Clone)]
pub struct Nuttall<T> {
    len: usize,
    a0: T,
    a1: T,
    a2: T,
    a3: T,
}

impl<T> Nuttall<T> {
    pub fn new(len: usize, a0: T, a1: T, a2: T, a3: T) -> Self {
        Nuttall { len, a0, a1, a2, a3 }
    }
}

impl<T: Float + FloatConst> WindowFunction<T> for Nuttall<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn coef(&self, index: usize) -> T {
        let two = T::one() + T::one();
        let three = two + T::one();

        if self.len <= 1 {
            return T::one();
        }

        let c = |k| cosine_term(self.len, index, k).unwrap_or_else(T::one);
        self.a0 - self.a1 * c(T::one()) + self.a2 * c(two) - self.a3 * c(three)
    }
}


fn constant<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

pub fn rectangular<T: Float>(len: usize) -> Rectangular<T> {
    Rectangular::new(len)
}

pub fn hann<T: Float>(len: usize) -> GenericHann<T> {
    GenericHann::new(len, constant(0.5), constant(0.5))
}

pub fn hamming<T: Float>(len: usize) -> GenericHann<T> {
    let a0 = constant::<T>(25.0 / 46.0);
    GenericHann::new(len, a0, T::one() - a0)
}

/// The classic Blackman window, `0.42 - 0.5 cos(x) + 0.08 cos(2x)`.
pub fn blackman<T: Float>(len: usize) -> Blackman<T> {
    Blackman::new(len, constant(0.42), constant(0.50), constant(0.08))
}

pub fn blackman_exact<T: Float>(len: usize) -> Blackman<T> {
    Blackman::new(len, constant(7938.0 / 18608.0), constant(9240.0 / 18608.0), constant(1430.0 / 18608.0))
}

pub fn nuttall<T: Float>(len: usize) -> Nuttall<T> {
    Nuttall::new(len, constant(0.355_768), constant(0.487_396), constant(0.144_232), constant(0.012_604))
}

pub fn blackman_harris<T: Float>(len: usize) -> Nuttall<T> {
    Nuttall::new(len, constant(0.35875), constant(0.48829), constant(0.14128), constant(0.01168))
}
