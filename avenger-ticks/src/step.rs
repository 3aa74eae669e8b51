use crate::arithmetic::{digit_count, round_to_decimals, scale_pow10, stable_ceil};

/// Maximum number of correction rounds in [`calculate_step`] before giving up
/// and returning [`StepSpec::ZERO`].
pub const MAX_STEP_ITERATIONS: u32 = 64;

/// Step size together with the aligned tick range it produces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSpec {
    pub step: f64,
    pub tick_min: f64,
    pub tick_max: f64,
}

impl StepSpec {
    /// No usable step could be computed
    pub const ZERO: StepSpec = StepSpec {
        step: 0.0,
        tick_min: 0.0,
        tick_max: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.step == 0.0
    }
}

/// Round a raw tick spacing up to a human-friendly step.
///
/// `rough_step` is normalized by its order of magnitude into `[0.1, 1)` and
/// rounded up to the next multiple of 0.1 (single digit magnitudes) or 0.05
/// (everything else). Each unit of `correction_factor` moves the result one
/// such notch coarser. Returns 0 when `rough_step` is not a positive finite
/// number.
pub fn format_step(rough_step: f64, allow_decimals: bool, correction_factor: u32) -> f64 {
    if !(rough_step > 0.0) || !rough_step.is_finite() {
        return 0.0;
    }

    let digits = digit_count(rough_step);

    // Notch size as mantissa * 10^exp, i.e. 0.1 or 0.05 times 10^digits
    let (mantissa, exp) = if digits == 1 {
        (1.0, digits - 1)
    } else {
        (5.0, digits - 2)
    };

    let notches =
        stable_ceil(scale_pow10(rough_step, -exp) / mantissa) + f64::from(correction_factor);
    let step = scale_pow10(notches * mantissa, exp);

    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    if allow_decimals {
        step
    } else {
        step.ceil()
    }
}

/// Decimal places needed to print multiples of `step` without rounding noise.
/// Steps from [`format_step`] have at most three significant digits.
pub(crate) fn step_decimals(step: f64) -> i32 {
    (3 - digit_count(step)).max(0)
}

/// Search for a step whose aligned tick range over `[min, max]` holds exactly
/// `tick_count` ticks.
///
/// `min` must not exceed `max`. The ticks are anchored at zero when the
/// interval contains it, otherwise at the midpoint rounded down to a multiple
/// of the step. A step that needs too many ticks is coarsened and retried;
/// one that needs too few is padded with extra ticks above the anchor (or
/// below it, for intervals that end at or below zero). The resulting range
/// always covers `[min, max]` and may extend past it.
///
/// An interval that strictly contains zero needs at least three ticks, so a
/// `tick_count` of 2 yields [`StepSpec::ZERO`] for it.
pub fn calculate_step(min: f64, max: f64, tick_count: usize, allow_decimals: bool) -> StepSpec {
    let tick_count = tick_count.max(2) as f64;
    let rough_step = (max - min) / (tick_count - 1.0);
    if !rough_step.is_finite() {
        return StepSpec::ZERO;
    }

    for correction_factor in 0..MAX_STEP_ITERATIONS {
        let step = format_step(rough_step, allow_decimals, correction_factor);
        if step <= 0.0 {
            return StepSpec::ZERO;
        }
        let decimals = step_decimals(step);

        let middle = if min <= 0.0 && max >= 0.0 {
            0.0
        } else {
            let middle = min / 2.0 + max / 2.0;
            round_to_decimals(middle - ((middle % step) + step) % step, decimals)
        };

        let mut below_count = stable_ceil((middle - min) / step).max(0.0);
        let mut up_count = stable_ceil((max - middle) / step).max(0.0);

        // stable_ceil forgives up to 1e-9 of a step, so check the snapped ends
        if round_to_decimals(middle - below_count * step, decimals) > min {
            below_count += 1.0;
        }
        if round_to_decimals(middle + up_count * step, decimals) < max {
            up_count += 1.0;
        }
        let scale_count = below_count + up_count + 1.0;

        if scale_count > tick_count {
            continue;
        }

        if scale_count < tick_count {
            if max > 0.0 {
                up_count += tick_count - scale_count;
            } else {
                below_count += tick_count - scale_count;
            }
        }

        return StepSpec {
            step,
            tick_min: round_to_decimals(middle - below_count * step, decimals),
            tick_max: round_to_decimals(middle + up_count * step, decimals),
        };
    }

    tracing::warn!(
        min,
        max,
        tick_count,
        "no step converged after {MAX_STEP_ITERATIONS} correction rounds"
    );
    StepSpec::ZERO
}
