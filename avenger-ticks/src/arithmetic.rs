//! Numeric helpers behind the tick solvers.
//!
//! `interpolate_number` and the `uninterpolate_*` pair are not used by the
//! solvers. They are public for axis code that maps tick values to positions
//! along the axis and back.

/// Maximum number of values produced by [`range_step`].
///
/// A step that has collapsed to (nearly) zero through floating point
/// cancellation would otherwise never reach `end`. Sequences that hit the cap
/// are truncated.
pub const MAX_RANGE_STEP_ITEMS: usize = 100_000;

/// Number of digits before the decimal point of `value`.
///
/// Values with a magnitude below one return zero or a negative count that
/// reflects the leading zeros after the decimal point, so `0.05` yields `-1`.
/// Zero yields `1`.
pub fn digit_count(value: f64) -> i32 {
    if value == 0.0 {
        return 1;
    }
    value.abs().log10().floor() as i32 + 1
}

/// Lazy arithmetic sequence `start, start + step, start + 2 * step, ...`
/// that stops before reaching `end`, or after [`MAX_RANGE_STEP_ITEMS`] values.
#[derive(Clone, Debug)]
pub struct RangeStep {
    start: f64,
    end: f64,
    step: f64,
    index: usize,
}

impl RangeStep {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            start,
            end,
            step,
            index: 0,
        }
    }
}

impl Iterator for RangeStep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= MAX_RANGE_STEP_ITEMS {
            if self.index == MAX_RANGE_STEP_ITEMS {
                tracing::debug!(
                    start = self.start,
                    end = self.end,
                    step = self.step,
                    "range_step truncated at {MAX_RANGE_STEP_ITEMS} values"
                );
                // Only report once
                self.index += 1;
            }
            return None;
        }

        // Multiply rather than accumulate so error does not grow with the index
        let value = self.start + self.index as f64 * self.step;
        if !(value < self.end) {
            return None;
        }
        self.index += 1;
        Some(value)
    }
}

/// Collect the values of a [`RangeStep`] sequence.
pub fn range_step(start: f64, end: f64, step: f64) -> Vec<f64> {
    RangeStep::new(start, end, step).collect()
}

/// Linear interpolation from `a` to `b` at parameter `t`.
pub fn interpolate_number(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

/// Inverse of [`interpolate_number`]. A zero-width interval maps everything to 0.
pub fn uninterpolate_number(a: f64, b: f64, x: f64) -> f64 {
    let diff = b - a;
    if diff == 0.0 {
        return 0.0;
    }
    (x - a) / diff
}

/// Like [`uninterpolate_number`], clamped to `[0, 1]`.
pub fn uninterpolate_truncation(a: f64, b: f64, x: f64) -> f64 {
    uninterpolate_number(a, b, x).clamp(0.0, 1.0)
}

/// Round `value` to `decimals` places after the decimal point.
///
/// Negative `decimals` round to tens, hundreds, etc. The value is returned
/// unchanged when scaling would overflow.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scaled = scale_pow10(value, decimals);
    if !scaled.is_finite() {
        return value;
    }
    scale_pow10(scaled.round(), -decimals)
}

/// Smallest number of decimal places that represents `value` exactly, or
/// `None` when it takes more than 15.
pub fn decimal_places(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    (0..=15).find(|&decimals| round_to_decimals(value, decimals) == value)
}

/// `value * 10^exp`, dividing by the exact power of ten for negative exponents
/// so that e.g. `scale_pow10(3.0, -1)` is the double closest to `0.3`.
pub(crate) fn scale_pow10(value: f64, exp: i32) -> f64 {
    if exp >= 0 {
        value * 10f64.powi(exp)
    } else {
        value / 10f64.powi(-exp)
    }
}

/// `ceil` that ignores rounding noise in the last few bits, so a quotient
/// computed as `4.000000000000001` counts as exactly four.
///
/// Anything within 1e-9 above an integer counts as that integer, so callers
/// that need a real upper bound must check the result themselves.
pub(crate) fn stable_ceil(value: f64) -> f64 {
    round_to_decimals(value, 9).ceil()
}
