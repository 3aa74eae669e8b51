//! Nice tick values for numeric axes.
//!
//! [`nice_tick_values`] picks round ticks that may overshoot the domain,
//! [`tick_values_fixed_domain`] keeps them inside it. [`TickConfig`] bundles
//! the options and validates input for callers that prefer a `Result`.

pub mod arithmetic;
pub mod config;
pub mod domain;
pub mod error;
pub mod step;
pub mod ticks;

pub use config::{TickConfig, TickStrategy};
pub use domain::NumberDomain;
pub use error::TickError;
pub use ticks::{nice_tick_values, tick_of_single_value, tick_values, tick_values_fixed_domain};
