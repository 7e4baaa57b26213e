//! Arena errors

use thiserror::Error;

/// Configuration and encoding errors. Simulation outcomes (denied fire,
/// missed pickups, clamped health) are state, not errors.
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("tick length must be positive")]
    InvalidTickLength,

    #[error("item cap must be at least 1")]
    ZeroItemCap,

    #[error("invalid world size {width}x{height}")]
    InvalidWorldSize { width: f64, height: f64 },

    #[error("platform {index} has non-positive size")]
    InvalidPlatform { index: usize },

    #[error("spawn point for slot {slot} lies outside the world")]
    SpawnOutOfBounds { slot: usize },

    #[error("chance `{name}` is {value}, expected 0..=100")]
    ChanceOutOfRange { name: &'static str, value: u32 },

    #[error("item distance divisor must be positive")]
    ZeroDistanceDivisor,

    #[error("ai jitter interval must be positive, got {0}")]
    InvalidJitterInterval(i32),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
