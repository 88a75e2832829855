use pool_config::{ConfigError, ReserveConfigurationMap, U256};
use rand::{thread_rng, RngCore};

/// List a reserve the way a pool configurator does, one setter per parameter
pub fn list_reserve(
    ltv: u32,
    liquidation_threshold: u32,
    liquidation_bonus: u32,
    decimals: u32,
) -> Result<ReserveConfigurationMap, ConfigError> {
    let mut config = ReserveConfigurationMap::init();
    config.set_decimals(decimals)?;
    config.set_ltv(ltv)?;
    config.set_liquidation_threshold(liquidation_threshold)?;
    config.set_liquidation_bonus(liquidation_bonus)?;
    config.set_active(true);
    config.set_borrowing_enabled(true);
    config.set_flash_loan_enabled(true);
    Ok(config)
}

pub fn random_word() -> U256 {
    U256::from_limbs([
        thread_rng().next_u64(),
        thread_rng().next_u64(),
        thread_rng().next_u64(),
        thread_rng().next_u64(),
    ])
}
