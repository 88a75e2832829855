#![cfg(test)]

use alloy_primitives::U256;
use rand::{thread_rng, RngCore};

use crate::{
    errors::ConfigError,
    reserve_config::{
        ReserveConfigurationMap, MAX_VALID_BORROW_CAP, MAX_VALID_DEBT_CEILING,
        MAX_VALID_DECIMALS, MAX_VALID_EMODE_CATEGORY, MAX_VALID_LIQUIDATION_BONUS,
        MAX_VALID_LIQUIDATION_PROTOCOL_FEE, MAX_VALID_LIQUIDATION_THRESHOLD, MAX_VALID_LTV,
        MAX_VALID_RESERVE_FACTOR, MAX_VALID_SUPPLY_CAP,
    },
};

/// A numeric field of the reserve configuration, widened to u64
pub struct ReserveField {
    pub name: &'static str,
    pub max: u64,
    pub error: ConfigError,
    pub get: fn(&ReserveConfigurationMap) -> u64,
    pub set: fn(&mut ReserveConfigurationMap, u64) -> Result<(), ConfigError>,
}

/// A boolean field of the reserve configuration
pub struct ReserveFlag {
    pub name: &'static str,
    pub get: fn(&ReserveConfigurationMap) -> bool,
    pub set: fn(&mut ReserveConfigurationMap, bool),
}

// values above u32::MAX are mapped to u32::MAX so the setter still rejects them
fn narrow(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

pub fn reserve_fields() -> [ReserveField; 10] {
    [
        ReserveField {
            name: "ltv",
            max: MAX_VALID_LTV as u64,
            error: ConfigError::InvalidLtv,
            get: |c| c.get_ltv() as u64,
            set: |c, v| c.set_ltv(narrow(v)),
        },
        ReserveField {
            name: "liquidation_threshold",
            max: MAX_VALID_LIQUIDATION_THRESHOLD as u64,
            error: ConfigError::InvalidLiquidationThreshold,
            get: |c| c.get_liquidation_threshold() as u64,
            set: |c, v| c.set_liquidation_threshold(narrow(v)),
        },
        ReserveField {
            name: "liquidation_bonus",
            max: MAX_VALID_LIQUIDATION_BONUS as u64,
            error: ConfigError::InvalidLiquidationBonus,
            get: |c| c.get_liquidation_bonus() as u64,
            set: |c, v| c.set_liquidation_bonus(narrow(v)),
        },
        ReserveField {
            name: "decimals",
            max: MAX_VALID_DECIMALS as u64,
            error: ConfigError::InvalidDecimals,
            get: |c| c.get_decimals() as u64,
            set: |c, v| c.set_decimals(narrow(v)),
        },
        ReserveField {
            name: "reserve_factor",
            max: MAX_VALID_RESERVE_FACTOR as u64,
            error: ConfigError::InvalidReserveFactor,
            get: |c| c.get_reserve_factor() as u64,
            set: |c, v| c.set_reserve_factor(narrow(v)),
        },
        ReserveField {
            name: "borrow_cap",
            max: MAX_VALID_BORROW_CAP,
            error: ConfigError::InvalidBorrowCap,
            get: |c| c.get_borrow_cap(),
            set: |c, v| c.set_borrow_cap(v),
        },
        ReserveField {
            name: "supply_cap",
            max: MAX_VALID_SUPPLY_CAP,
            error: ConfigError::InvalidSupplyCap,
            get: |c| c.get_supply_cap(),
            set: |c, v| c.set_supply_cap(v),
        },
        ReserveField {
            name: "liquidation_protocol_fee",
            max: MAX_VALID_LIQUIDATION_PROTOCOL_FEE as u64,
            error: ConfigError::InvalidLiquidationProtocolFee,
            get: |c| c.get_liquidation_protocol_fee() as u64,
            set: |c, v| c.set_liquidation_protocol_fee(narrow(v)),
        },
        ReserveField {
            name: "emode_category",
            max: MAX_VALID_EMODE_CATEGORY as u64,
            error: ConfigError::InvalidEmodeCategory,
            get: |c| c.get_emode_category() as u64,
            set: |c, v| c.set_emode_category(narrow(v)),
        },
        ReserveField {
            name: "debt_ceiling",
            max: MAX_VALID_DEBT_CEILING,
            error: ConfigError::InvalidDebtCeiling,
            get: |c| c.get_debt_ceiling(),
            set: |c, v| c.set_debt_ceiling(v),
        },
    ]
}

pub fn reserve_flags() -> [ReserveFlag; 7] {
    [
        ReserveFlag {
            name: "active",
            get: |c| c.get_active(),
            set: |c, v| c.set_active(v),
        },
        ReserveFlag {
            name: "frozen",
            get: |c| c.get_frozen(),
            set: |c, v| c.set_frozen(v),
        },
        ReserveFlag {
            name: "borrowing_enabled",
            get: |c| c.get_borrowing_enabled(),
            set: |c, v| c.set_borrowing_enabled(v),
        },
        ReserveFlag {
            name: "paused",
            get: |c| c.get_paused(),
            set: |c, v| c.set_paused(v),
        },
        ReserveFlag {
            name: "borrowable_in_isolation",
            get: |c| c.get_borrowable_in_isolation(),
            set: |c, v| c.set_borrowable_in_isolation(v),
        },
        ReserveFlag {
            name: "siloed_borrowing",
            get: |c| c.get_siloed_borrowing(),
            set: |c, v| c.set_siloed_borrowing(v),
        },
        ReserveFlag {
            name: "flash_loan_enabled",
            get: |c| c.get_flash_loan_enabled(),
            set: |c, v| c.set_flash_loan_enabled(v),
        },
    ]
}

/// A word with every bit drawn at random
pub fn random_word() -> U256 {
    U256::from_limbs([
        thread_rng().next_u64(),
        thread_rng().next_u64(),
        thread_rng().next_u64(),
        thread_rng().next_u64(),
    ])
}

/// A listed, borrowable reserve with typical risk parameters
pub fn default_reserve_configuration() -> ReserveConfigurationMap {
    let mut config = ReserveConfigurationMap::init();
    config.set_ltv(7500).unwrap();
    config.set_liquidation_threshold(8000).unwrap();
    config.set_liquidation_bonus(10500).unwrap();
    config.set_decimals(7).unwrap();
    config.set_reserve_factor(1000).unwrap();
    config.set_active(true);
    config.set_borrowing_enabled(true);
    config
}
