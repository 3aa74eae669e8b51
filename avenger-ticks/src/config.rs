use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};

use crate::{
    domain::NumberDomain,
    error::TickError,
    ticks::{nice_tick_values, tick_values, tick_values_fixed_domain, DEFAULT_TICK_COUNT},
};

/// How ticks relate to the domain bounds
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TickStrategy {
    /// Round ticks that may extend past the domain, see [`nice_tick_values`]
    #[default]
    Nice,
    /// Ticks clamped to the domain and ending at its maximum, see [`tick_values_fixed_domain`]
    FixedDomain,
    /// Ticks from the domain minimum that stay inside it, see [`tick_values`]
    Interval,
}

impl TickStrategy {
    pub fn parse(name: &str) -> Result<Self, TickError> {
        Self::from_str(name).map_err(|_| TickError::UnknownStrategy {
            name: name.to_string(),
            expected: Self::VARIANTS.join(", "),
        })
    }
}

/// Tick generation options for an axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickConfig {
    pub tick_count: usize,
    pub allow_decimals: bool,
    pub strategy: TickStrategy,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            allow_decimals: true,
            strategy: TickStrategy::default(),
        }
    }
}

impl TickConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    pub fn with_allow_decimals(mut self, allow_decimals: bool) -> Self {
        self.allow_decimals = allow_decimals;
        self
    }

    pub fn with_strategy(mut self, strategy: TickStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<(), TickError> {
        if self.tick_count == 0 {
            return Err(TickError::InvalidTickCount(self.tick_count));
        }
        Ok(())
    }

    /// Compute ticks for `domain` after checking the configuration and the bounds
    pub fn ticks(&self, domain: impl Into<NumberDomain>) -> Result<Vec<f64>, TickError> {
        let domain = domain.into();
        self.validate()?;
        domain.validate()?;

        let ticks = match self.strategy {
            TickStrategy::Nice => nice_tick_values(domain, self.tick_count, self.allow_decimals),
            TickStrategy::FixedDomain => {
                tick_values_fixed_domain(domain, self.tick_count, self.allow_decimals)
            }
            TickStrategy::Interval => tick_values(domain, self.tick_count, self.allow_decimals),
        };
        Ok(ticks)
    }
}
