use num::{traits::FloatConst, Float};


/// Normalized sinc, `sin(pi x) / (pi x)` with `sinc(0) = 1`.
pub fn sinc<T: Float + FloatConst>(x: T) -> T {
    if x.is_zero() {
        T::one()
    } else {
        let y = T::PI() * x;
        y.sin() / y
    }
}
