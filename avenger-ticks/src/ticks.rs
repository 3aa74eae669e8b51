use crate::arithmetic::{decimal_places, digit_count, range_step, round_to_decimals, scale_pow10};
use crate::domain::NumberDomain;
use crate::step::{calculate_step, format_step, step_decimals};

/// Tick count used when none is configured
pub const DEFAULT_TICK_COUNT: usize = 6;

/// Fraction of a step added past `tick_max` so the last tick survives the
/// exclusive bound of [`range_step`] despite rounding.
pub const NICE_TICK_EPSILON: f64 = 0.1;

/// Ticks for a domain whose bounds are equal.
///
/// Produces `tick_count` consecutive multiples of a step with `value` (or a
/// round number close to it) at index `(tick_count - 1) / 2`. The step is 1,
/// except for fractional values below one in magnitude where it follows the
/// value's order of magnitude. Zero starts the sequence at zero.
pub fn tick_of_single_value(value: f64, tick_count: usize, allow_decimals: bool) -> Vec<f64> {
    if tick_count <= 1 {
        return vec![value];
    }

    let mut step = 1.0;
    let mut middle = value;
    let is_integer = value.fract() == 0.0;

    if !is_integer && allow_decimals {
        let abs_value = value.abs();
        if abs_value < 1.0 {
            step = scale_pow10(1.0, digit_count(value) - 1);
            middle = round_to_decimals(value / step, 9).floor() * step;
        } else if abs_value > 1.0 {
            middle = value.floor();
        }
    } else if value == 0.0 {
        middle = ((tick_count - 1) / 2) as f64;
    } else if !allow_decimals {
        middle = value.floor();
    }

    let middle_index = ((tick_count - 1) / 2) as f64;
    let decimals = step_decimals(step);
    (0..tick_count)
        .map(|i| round_to_decimals(middle + (i as f64 - middle_index) * step, decimals))
        .collect()
}

/// Nice ticks for `domain`.
///
/// The ticks are multiples of a round step, include zero whenever the domain
/// spans it, and number `tick_count` in the common case. They may extend past
/// the domain bounds. A domain that spans zero gets at least three ticks. A
/// domain with an infinite bound yields the finite bound followed (or
/// preceded) by copies of the infinite one.
#[tracing::instrument(level = "trace", skip(domain))]
pub fn nice_tick_values(
    domain: impl Into<NumberDomain>,
    tick_count: usize,
    allow_decimals: bool,
) -> Vec<f64> {
    let domain = domain.into();
    let count = tick_count.max(2);
    let (min, max) = domain.normalized();

    if min == f64::NEG_INFINITY || max == f64::INFINITY {
        let values = if max == f64::INFINITY {
            std::iter::once(min)
                .chain(std::iter::repeat(f64::INFINITY).take(count - 1))
                .collect()
        } else {
            std::iter::repeat(f64::NEG_INFINITY)
                .take(count - 1)
                .chain(std::iter::once(max))
                .collect()
        };
        return domain.orient(values);
    }

    if min == max {
        return tick_of_single_value(min, tick_count, allow_decimals);
    }

    let spans_zero = min < 0.0 && max > 0.0;
    let mut spec = calculate_step(min, max, count, allow_decimals);
    if spec.is_zero() && spans_zero && count < 3 {
        // Zero takes a tick of its own between the two bounds
        spec = calculate_step(min, max, 3, allow_decimals);
    }
    if spec.is_zero() {
        let values = if spans_zero {
            vec![min, 0.0, max]
        } else {
            vec![min, max]
        };
        return domain.orient(values);
    }

    let decimals = step_decimals(spec.step);
    let values = range_step(
        spec.tick_min,
        spec.tick_max + NICE_TICK_EPSILON * spec.step,
        spec.step,
    )
    .into_iter()
    .map(|v| round_to_decimals(v, decimals))
    .collect();

    domain.orient(values)
}

/// Ticks that stay within `domain`.
///
/// Starts at the lower bound and steps by a nice increment, always ending
/// with the upper bound itself, so the spacing before the last tick may be
/// irregular. Fewer than `tick_count` ticks are returned when the step
/// overshoots. A domain with an infinite bound yields just its two bounds.
#[tracing::instrument(level = "trace", skip(domain))]
pub fn tick_values_fixed_domain(
    domain: impl Into<NumberDomain>,
    tick_count: usize,
    allow_decimals: bool,
) -> Vec<f64> {
    let domain = domain.into();
    let (min, max) = domain.normalized();

    if domain.is_infinite() {
        return vec![domain.min, domain.max];
    }

    if min == max {
        return vec![min];
    }

    let count = tick_count.max(2);
    let step = format_step((max - min) / (count - 1) as f64, allow_decimals, 0);

    let mut values = if step > 0.0 {
        let mut values: Vec<f64> = range_step(0.0, max - min, step)
            .into_iter()
            .map(|offset| offset_from(min, offset, step))
            .filter(|v| *v < max)
            .collect();
        values.push(max);
        values
    } else {
        vec![min, max]
    };

    if !allow_decimals {
        values.iter_mut().for_each(|v| *v = v.round());
    }

    domain.orient(values)
}

/// Up to `tick_count` ticks from the lower bound of `domain` by a nice step,
/// discarding any that fall outside it.
#[tracing::instrument(level = "trace", skip(domain))]
pub fn tick_values(
    domain: impl Into<NumberDomain>,
    tick_count: usize,
    allow_decimals: bool,
) -> Vec<f64> {
    let domain = domain.into();
    let (min, max) = domain.normalized();

    if domain.is_infinite() {
        return vec![domain.min, domain.max];
    }

    if min == max {
        return tick_of_single_value(min, tick_count, allow_decimals);
    }

    let count = tick_count.max(2);
    let step = format_step((max - min) / (count - 1) as f64, allow_decimals, 0);
    if step <= 0.0 {
        return domain.orient(vec![min, max]);
    }

    let values = (0..count)
        .map(|i| offset_from(min, i as f64 * step, step))
        .filter(|v| *v >= min && *v <= max)
        .collect();

    domain.orient(values)
}

/// `start + offset` with the rounding noise of a multiple of `step` removed.
///
/// The sum is rounded to the decimals of `start` and `step` when `start` has
/// a short decimal form, so it never moves below `start`.
fn offset_from(start: f64, offset: f64, step: f64) -> f64 {
    let decimals = step_decimals(step);
    let value = start + round_to_decimals(offset, decimals);
    match decimal_places(start) {
        Some(places) => round_to_decimals(value, places.max(decimals)),
        None => value,
    }
}
