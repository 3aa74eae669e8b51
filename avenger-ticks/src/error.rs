#[derive(Debug, PartialEq, thiserror::Error)]
pub enum TickError {
    #[error("Domain bounds must not be NaN: ({min}, {max})")]
    NanDomain { min: f64, max: f64 },

    #[error("Tick count must be at least 1, got {0}")]
    InvalidTickCount(usize),

    #[error("Unknown tick strategy '{name}', expected one of: {expected}")]
    UnknownStrategy { name: String, expected: String },
}
