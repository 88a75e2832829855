use crate::errors::ConfigError;

/********** Numbers **********/

/// Fixed-point scalar for 18 decimal numbers
pub const SCALAR_18: u128 = 1_000_000_000_000_000_000;

/// Health factor below which a position can be liquidated, expressed in 18 decimals
pub const HEALTH_FACTOR_LIQUIDATION_THRESHOLD: u128 = SCALAR_18;

/// Health factor below which a position can be fully liquidated, expressed in 18 decimals
pub const MINIMUM_HEALTH_FACTOR_LIQUIDATION_THRESHOLD: u128 = 950_000_000_000_000_000;

/// Maximum number of reserves a pool can list. Bounded by the two bits each reserve
/// takes in a user's configuration word.
pub const MAX_RESERVES_COUNT: u32 = 128;

/********** Interest Rate Modes **********/

/// The interest rate a debt position accrues at
///
/// The stable mode (1) has been retired. Its value stays unassigned so stored modes
/// keep their meaning.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum InterestRateMode {
    None = 0,
    Variable = 2,
}

impl From<InterestRateMode> for u32 {
    fn from(mode: InterestRateMode) -> Self {
        mode as u32
    }
}

impl TryFrom<u32> for InterestRateMode {
    type Error = ConfigError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InterestRateMode::None),
            2 => Ok(InterestRateMode::Variable),
            _ => Err(ConfigError::InvalidInterestRateMode),
        }
    }
}
