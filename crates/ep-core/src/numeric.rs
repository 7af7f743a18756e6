use crate::EpError;

/// Scalar for coordinates, magnitudes, angles and progress.
pub type Real = f64;

/// Absolute floor plus a relative band for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Absolute-only tolerance, handy for geometry checks in screen units.
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, EpError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EpError::NonFinite { what, value: v })
    }
}

/// Finite and strictly greater than zero.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, EpError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(EpError::NonPositive { what, value: v })
    }
}
