#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod bits;
mod constants;
mod errors;
mod host;
mod reserve_config;
mod testutils;
mod user_config;

pub use bits::bitwise_negation;
pub use constants::{
    InterestRateMode, HEALTH_FACTOR_LIQUIDATION_THRESHOLD, MAX_RESERVES_COUNT,
    MINIMUM_HEALTH_FACTOR_LIQUIDATION_THRESHOLD, SCALAR_18,
};
pub use errors::ConfigError;
pub use reserve_config::{
    ReserveConfigurationMap, DEBT_CEILING_DECIMALS, MAX_VALID_BORROW_CAP, MAX_VALID_DEBT_CEILING,
    MAX_VALID_DECIMALS, MAX_VALID_EMODE_CATEGORY, MAX_VALID_LIQUIDATION_BONUS,
    MAX_VALID_LIQUIDATION_GRACE_PERIOD, MAX_VALID_LIQUIDATION_PROTOCOL_FEE,
    MAX_VALID_LIQUIDATION_THRESHOLD, MAX_VALID_LTV, MAX_VALID_RESERVE_FACTOR,
    MAX_VALID_SUPPLY_CAP, MIN_RESERVE_ASSET_DECIMALS,
};
pub use user_config::{
    IsolationModeState, ReserveConfigSource, UserConfigurationMap, BORROWING_MASK,
    COLLATERAL_MASK,
};

pub use alloy_primitives::U256;
