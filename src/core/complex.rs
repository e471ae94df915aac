//! Complex number values for fields

use serde::{Deserialize, Serialize};
use std::fmt;

/// A complex number with real and imaginary parts of type `T`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

/// Complex number made of two `f32` parts
pub type Complex64 = Complex<f32>;

/// Complex number made of two `f64` parts
pub type Complex128 = Complex<f64>;

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

// Renders as `(re+imi)`, e.g. `(1+2i)` or `(1.5-0.5i)`
impl<T: fmt::Display> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let im = self.im.to_string();
        if im.starts_with('-') || im.starts_with('+') {
            write!(f, "({}{}i)", self.re, im)
        } else {
            write!(f, "({}+{}i)", self.re, im)
        }
    }
}
