use alloy_primitives::U256;

use crate::{
    bits::{bitwise_negation, clear_mask},
    constants::MAX_RESERVES_COUNT,
    errors::ConfigError,
};

/********** Layout **********/

// Each mask clears its own field and keeps every other bit of the word.
const LTV_MASK: U256 = clear_mask(LTV_START_BIT_POSITION, 16);
const LIQUIDATION_THRESHOLD_MASK: U256 = clear_mask(LIQUIDATION_THRESHOLD_START_BIT_POSITION, 16);
const LIQUIDATION_BONUS_MASK: U256 = clear_mask(LIQUIDATION_BONUS_START_BIT_POSITION, 16);
const DECIMALS_MASK: U256 = clear_mask(RESERVE_DECIMALS_START_BIT_POSITION, 8);
const ACTIVE_MASK: U256 = clear_mask(IS_ACTIVE_START_BIT_POSITION, 1);
const FROZEN_MASK: U256 = clear_mask(IS_FROZEN_START_BIT_POSITION, 1);
const BORROWING_MASK: U256 = clear_mask(BORROWING_ENABLED_START_BIT_POSITION, 1);
const PAUSED_MASK: U256 = clear_mask(IS_PAUSED_START_BIT_POSITION, 1);
const BORROWABLE_IN_ISOLATION_MASK: U256 =
    clear_mask(BORROWABLE_IN_ISOLATION_START_BIT_POSITION, 1);
const SILOED_BORROWING_MASK: U256 = clear_mask(SILOED_BORROWING_START_BIT_POSITION, 1);
const FLASHLOAN_ENABLED_MASK: U256 = clear_mask(FLASHLOAN_ENABLED_START_BIT_POSITION, 1);
const RESERVE_FACTOR_MASK: U256 = clear_mask(RESERVE_FACTOR_START_BIT_POSITION, 16);
const BORROW_CAP_MASK: U256 = clear_mask(BORROW_CAP_START_BIT_POSITION, 36);
const SUPPLY_CAP_MASK: U256 = clear_mask(SUPPLY_CAP_START_BIT_POSITION, 36);
const LIQUIDATION_PROTOCOL_FEE_MASK: U256 =
    clear_mask(LIQUIDATION_PROTOCOL_FEE_START_BIT_POSITION, 16);
const EMODE_CATEGORY_MASK: U256 = clear_mask(EMODE_CATEGORY_START_BIT_POSITION, 8);
const DEBT_CEILING_MASK: U256 = clear_mask(DEBT_CEILING_START_BIT_POSITION, 40);

const LTV_START_BIT_POSITION: usize = 0;
const LIQUIDATION_THRESHOLD_START_BIT_POSITION: usize = 16;
const LIQUIDATION_BONUS_START_BIT_POSITION: usize = 32;
const RESERVE_DECIMALS_START_BIT_POSITION: usize = 48;
const IS_ACTIVE_START_BIT_POSITION: usize = 56;
const IS_FROZEN_START_BIT_POSITION: usize = 57;
const BORROWING_ENABLED_START_BIT_POSITION: usize = 58;
// bit 59 held the retired stable rate flag
const IS_PAUSED_START_BIT_POSITION: usize = 60;
const BORROWABLE_IN_ISOLATION_START_BIT_POSITION: usize = 61;
const SILOED_BORROWING_START_BIT_POSITION: usize = 62;
const FLASHLOAN_ENABLED_START_BIT_POSITION: usize = 63;
const RESERVE_FACTOR_START_BIT_POSITION: usize = 64;
const BORROW_CAP_START_BIT_POSITION: usize = 80;
const SUPPLY_CAP_START_BIT_POSITION: usize = 116;
const LIQUIDATION_PROTOCOL_FEE_START_BIT_POSITION: usize = 152;
const EMODE_CATEGORY_START_BIT_POSITION: usize = 168;
// bits 176-211 are reserved
const DEBT_CEILING_START_BIT_POSITION: usize = 212;
// bits 252-255 are reserved

/********** Limits **********/

pub const MAX_VALID_LTV: u32 = 65535;
pub const MAX_VALID_LIQUIDATION_THRESHOLD: u32 = 65535;
pub const MAX_VALID_LIQUIDATION_BONUS: u32 = 65535;
pub const MAX_VALID_DECIMALS: u32 = 255;
pub const MAX_VALID_RESERVE_FACTOR: u32 = 65535;
pub const MAX_VALID_BORROW_CAP: u64 = 68719476735;
pub const MAX_VALID_SUPPLY_CAP: u64 = 68719476735;
pub const MAX_VALID_LIQUIDATION_PROTOCOL_FEE: u32 = 65535;
pub const MAX_VALID_EMODE_CATEGORY: u32 = 255;
pub const MAX_VALID_DEBT_CEILING: u64 = 1099511627775;

/// Smallest number of decimals a listed asset may have
pub const MIN_RESERVE_ASSET_DECIMALS: u32 = 6;

/// Longest liquidation grace period, in seconds (4 hours)
pub const MAX_VALID_LIQUIDATION_GRACE_PERIOD: u64 = 4 * 3600;

/// The debt ceiling is stored with 2 decimals, e.g. 20 => 0.20
pub const DEBT_CEILING_DECIMALS: u32 = 2;

/// A reserve's risk and operational parameters packed into a single 256-bit word
///
/// Bit layout, LSB first:
///
/// * `0-15` - LTV
/// * `16-31` - liquidation threshold
/// * `32-47` - liquidation bonus
/// * `48-55` - decimals
/// * `56` - reserve is active
/// * `57` - reserve is frozen
/// * `58` - borrowing is enabled
/// * `59` - unused (retired stable rate borrowing)
/// * `60` - reserve is paused
/// * `61` - borrowable in isolation
/// * `62` - siloed borrowing
/// * `63` - flash loans are enabled
/// * `64-79` - reserve factor
/// * `80-115` - borrow cap in whole tokens, 0 => no cap
/// * `116-151` - supply cap in whole tokens, 0 => no cap
/// * `152-167` - liquidation protocol fee
/// * `168-175` - e-mode category
/// * `176-211` - reserved
/// * `212-251` - debt ceiling for isolation mode, with `DEBT_CEILING_DECIMALS` decimals
/// * `252-255` - reserved
///
/// Setters only touch their own bits. Reserved bits are never written and survive every
/// update untouched.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ReserveConfigurationMap {
    data: U256,
}

impl ReserveConfigurationMap {
    /// Create an empty configuration with every field zeroed
    pub fn init() -> Self {
        ReserveConfigurationMap { data: U256::ZERO }
    }

    /// Wrap a packed word read from storage
    pub fn from_word(data: U256) -> Self {
        ReserveConfigurationMap { data }
    }

    /// The packed word
    pub fn word(&self) -> U256 {
        self.data
    }

    #[inline]
    fn read_field(&self, mask: U256, start: usize) -> u64 {
        ((self.data & bitwise_negation(mask)) >> start).saturating_to::<u64>()
    }

    #[inline]
    fn read_flag(&self, mask: U256) -> bool {
        !(self.data & bitwise_negation(mask)).is_zero()
    }

    fn write_field(
        &mut self,
        mask: U256,
        start: usize,
        value: u64,
        max: u64,
        error: ConfigError,
    ) -> Result<(), ConfigError> {
        if value > max {
            #[cfg(feature = "logging")]
            log::debug!("rejected {:?}: {} exceeds {}", error, value, max);
            return Err(error);
        }
        self.data = (self.data & mask) | (U256::from(value) << start);
        Ok(())
    }

    #[inline]
    fn write_flag(&mut self, mask: U256, start: usize, value: bool) {
        self.data = (self.data & mask) | (U256::from(value as u64) << start);
    }

    /********** Risk Parameters **********/

    /// Set the loan to value of the reserve
    ///
    /// ### Errors
    /// `InvalidLtv` if `ltv` is greater than `MAX_VALID_LTV`
    pub fn set_ltv(&mut self, ltv: u32) -> Result<(), ConfigError> {
        self.write_field(
            LTV_MASK,
            LTV_START_BIT_POSITION,
            ltv as u64,
            MAX_VALID_LTV as u64,
            ConfigError::InvalidLtv,
        )
    }

    /// Get the loan to value of the reserve
    pub fn get_ltv(&self) -> u32 {
        self.read_field(LTV_MASK, LTV_START_BIT_POSITION) as u32
    }

    /// Set the liquidation threshold of the reserve
    ///
    /// ### Errors
    /// `InvalidLiquidationThreshold` if `threshold` is greater than `MAX_VALID_LIQUIDATION_THRESHOLD`
    pub fn set_liquidation_threshold(&mut self, threshold: u32) -> Result<(), ConfigError> {
        self.write_field(
            LIQUIDATION_THRESHOLD_MASK,
            LIQUIDATION_THRESHOLD_START_BIT_POSITION,
            threshold as u64,
            MAX_VALID_LIQUIDATION_THRESHOLD as u64,
            ConfigError::InvalidLiquidationThreshold,
        )
    }

    /// Get the liquidation threshold of the reserve
    pub fn get_liquidation_threshold(&self) -> u32 {
        self.read_field(
            LIQUIDATION_THRESHOLD_MASK,
            LIQUIDATION_THRESHOLD_START_BIT_POSITION,
        ) as u32
    }

    /// Set the liquidation bonus of the reserve
    ///
    /// ### Errors
    /// `InvalidLiquidationBonus` if `bonus` is greater than `MAX_VALID_LIQUIDATION_BONUS`
    pub fn set_liquidation_bonus(&mut self, bonus: u32) -> Result<(), ConfigError> {
        self.write_field(
            LIQUIDATION_BONUS_MASK,
            LIQUIDATION_BONUS_START_BIT_POSITION,
            bonus as u64,
            MAX_VALID_LIQUIDATION_BONUS as u64,
            ConfigError::InvalidLiquidationBonus,
        )
    }

    /// Get the liquidation bonus of the reserve
    pub fn get_liquidation_bonus(&self) -> u32 {
        self.read_field(LIQUIDATION_BONUS_MASK, LIQUIDATION_BONUS_START_BIT_POSITION) as u32
    }

    /// Set the decimals of the underlying asset of the reserve
    ///
    /// ### Errors
    /// `InvalidDecimals` if `decimals` is greater than `MAX_VALID_DECIMALS`
    pub fn set_decimals(&mut self, decimals: u32) -> Result<(), ConfigError> {
        self.write_field(
            DECIMALS_MASK,
            RESERVE_DECIMALS_START_BIT_POSITION,
            decimals as u64,
            MAX_VALID_DECIMALS as u64,
            ConfigError::InvalidDecimals,
        )
    }

    /// Get the decimals of the underlying asset of the reserve
    pub fn get_decimals(&self) -> u32 {
        self.read_field(DECIMALS_MASK, RESERVE_DECIMALS_START_BIT_POSITION) as u32
    }

    /// Set the reserve factor of the reserve
    ///
    /// ### Errors
    /// `InvalidReserveFactor` if `reserve_factor` is greater than `MAX_VALID_RESERVE_FACTOR`
    pub fn set_reserve_factor(&mut self, reserve_factor: u32) -> Result<(), ConfigError> {
        self.write_field(
            RESERVE_FACTOR_MASK,
            RESERVE_FACTOR_START_BIT_POSITION,
            reserve_factor as u64,
            MAX_VALID_RESERVE_FACTOR as u64,
            ConfigError::InvalidReserveFactor,
        )
    }

    /// Get the reserve factor of the reserve
    pub fn get_reserve_factor(&self) -> u32 {
        self.read_field(RESERVE_FACTOR_MASK, RESERVE_FACTOR_START_BIT_POSITION) as u32
    }

    /// Set the liquidation protocol fee of the reserve
    ///
    /// ### Errors
    /// `InvalidLiquidationProtocolFee` if `fee` is greater than `MAX_VALID_LIQUIDATION_PROTOCOL_FEE`
    pub fn set_liquidation_protocol_fee(&mut self, fee: u32) -> Result<(), ConfigError> {
        self.write_field(
            LIQUIDATION_PROTOCOL_FEE_MASK,
            LIQUIDATION_PROTOCOL_FEE_START_BIT_POSITION,
            fee as u64,
            MAX_VALID_LIQUIDATION_PROTOCOL_FEE as u64,
            ConfigError::InvalidLiquidationProtocolFee,
        )
    }

    /// Get the liquidation protocol fee of the reserve
    pub fn get_liquidation_protocol_fee(&self) -> u32 {
        self.read_field(
            LIQUIDATION_PROTOCOL_FEE_MASK,
            LIQUIDATION_PROTOCOL_FEE_START_BIT_POSITION,
        ) as u32
    }

    /// Set the e-mode category of the reserve. 0 means the reserve is in no category.
    ///
    /// ### Errors
    /// `InvalidEmodeCategory` if `category` is greater than `MAX_VALID_EMODE_CATEGORY`
    pub fn set_emode_category(&mut self, category: u32) -> Result<(), ConfigError> {
        self.write_field(
            EMODE_CATEGORY_MASK,
            EMODE_CATEGORY_START_BIT_POSITION,
            category as u64,
            MAX_VALID_EMODE_CATEGORY as u64,
            ConfigError::InvalidEmodeCategory,
        )
    }

    /// Get the e-mode category of the reserve
    pub fn get_emode_category(&self) -> u32 {
        self.read_field(EMODE_CATEGORY_MASK, EMODE_CATEGORY_START_BIT_POSITION) as u32
    }

    /********** Caps **********/

    /// Set the borrow cap of the reserve, in whole tokens
    ///
    /// ### Errors
    /// `InvalidBorrowCap` if `borrow_cap` is greater than `MAX_VALID_BORROW_CAP`
    pub fn set_borrow_cap(&mut self, borrow_cap: u64) -> Result<(), ConfigError> {
        self.write_field(
            BORROW_CAP_MASK,
            BORROW_CAP_START_BIT_POSITION,
            borrow_cap,
            MAX_VALID_BORROW_CAP,
            ConfigError::InvalidBorrowCap,
        )
    }

    /// Get the borrow cap of the reserve, in whole tokens
    pub fn get_borrow_cap(&self) -> u64 {
        self.read_field(BORROW_CAP_MASK, BORROW_CAP_START_BIT_POSITION)
    }

    /// Set the supply cap of the reserve, in whole tokens
    ///
    /// ### Errors
    /// `InvalidSupplyCap` if `supply_cap` is greater than `MAX_VALID_SUPPLY_CAP`
    pub fn set_supply_cap(&mut self, supply_cap: u64) -> Result<(), ConfigError> {
        self.write_field(
            SUPPLY_CAP_MASK,
            SUPPLY_CAP_START_BIT_POSITION,
            supply_cap,
            MAX_VALID_SUPPLY_CAP,
            ConfigError::InvalidSupplyCap,
        )
    }

    /// Get the supply cap of the reserve, in whole tokens
    pub fn get_supply_cap(&self) -> u64 {
        self.read_field(SUPPLY_CAP_MASK, SUPPLY_CAP_START_BIT_POSITION)
    }

    /// Set the debt ceiling of the reserve for isolation mode, expressed in `DEBT_CEILING_DECIMALS`
    ///
    /// ### Errors
    /// `InvalidDebtCeiling` if `ceiling` is greater than `MAX_VALID_DEBT_CEILING`
    pub fn set_debt_ceiling(&mut self, ceiling: u64) -> Result<(), ConfigError> {
        self.write_field(
            DEBT_CEILING_MASK,
            DEBT_CEILING_START_BIT_POSITION,
            ceiling,
            MAX_VALID_DEBT_CEILING,
            ConfigError::InvalidDebtCeiling,
        )
    }

    /// Get the debt ceiling of the reserve, expressed in `DEBT_CEILING_DECIMALS`
    pub fn get_debt_ceiling(&self) -> u64 {
        self.read_field(DEBT_CEILING_MASK, DEBT_CEILING_START_BIT_POSITION)
    }

    /********** Flags **********/

    pub fn set_active(&mut self, active: bool) {
        self.write_flag(ACTIVE_MASK, IS_ACTIVE_START_BIT_POSITION, active);
    }

    pub fn get_active(&self) -> bool {
        self.read_flag(ACTIVE_MASK)
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.write_flag(FROZEN_MASK, IS_FROZEN_START_BIT_POSITION, frozen);
    }

    pub fn get_frozen(&self) -> bool {
        self.read_flag(FROZEN_MASK)
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.write_flag(PAUSED_MASK, IS_PAUSED_START_BIT_POSITION, paused);
    }

    pub fn get_paused(&self) -> bool {
        self.read_flag(PAUSED_MASK)
    }

    pub fn set_borrowing_enabled(&mut self, enabled: bool) {
        self.write_flag(BORROWING_MASK, BORROWING_ENABLED_START_BIT_POSITION, enabled);
    }

    pub fn get_borrowing_enabled(&self) -> bool {
        self.read_flag(BORROWING_MASK)
    }

    /// Set if the reserve can be borrowed by users in isolation mode
    pub fn set_borrowable_in_isolation(&mut self, borrowable: bool) {
        self.write_flag(
            BORROWABLE_IN_ISOLATION_MASK,
            BORROWABLE_IN_ISOLATION_START_BIT_POSITION,
            borrowable,
        );
    }

    pub fn get_borrowable_in_isolation(&self) -> bool {
        self.read_flag(BORROWABLE_IN_ISOLATION_MASK)
    }

    /// Set if a user borrowing the reserve is blocked from borrowing any other reserve
    pub fn set_siloed_borrowing(&mut self, siloed: bool) {
        self.write_flag(
            SILOED_BORROWING_MASK,
            SILOED_BORROWING_START_BIT_POSITION,
            siloed,
        );
    }

    pub fn get_siloed_borrowing(&self) -> bool {
        self.read_flag(SILOED_BORROWING_MASK)
    }

    pub fn set_flash_loan_enabled(&mut self, enabled: bool) {
        self.write_flag(
            FLASHLOAN_ENABLED_MASK,
            FLASHLOAN_ENABLED_START_BIT_POSITION,
            enabled,
        );
    }

    pub fn get_flash_loan_enabled(&self) -> bool {
        self.read_flag(FLASHLOAN_ENABLED_MASK)
    }

    /********** Bundles **********/

    /// Get the status flags of the reserve
    ///
    /// ### Returns
    /// A tuple of (active, frozen, borrowing_enabled, paused)
    pub fn get_flags(&self) -> (bool, bool, bool, bool) {
        (
            self.get_active(),
            self.get_frozen(),
            self.get_borrowing_enabled(),
            self.get_paused(),
        )
    }

    /// Get the risk parameters of the reserve
    ///
    /// ### Returns
    /// A tuple of (ltv, liquidation_threshold, liquidation_bonus, decimals, reserve_factor, emode_category)
    pub fn get_params(&self) -> (u32, u32, u32, u32, u32, u32) {
        (
            self.get_ltv(),
            self.get_liquidation_threshold(),
            self.get_liquidation_bonus(),
            self.get_decimals(),
            self.get_reserve_factor(),
            self.get_emode_category(),
        )
    }

    /// Get the caps of the reserve, in whole tokens
    ///
    /// ### Returns
    /// A tuple of (borrow_cap, supply_cap)
    pub fn get_caps(&self) -> (u64, u64) {
        (self.get_borrow_cap(), self.get_supply_cap())
    }

    /********** Limits **********/

    pub fn get_max_valid_ltv() -> u32 {
        MAX_VALID_LTV
    }

    pub fn get_max_valid_liquidation_threshold() -> u32 {
        MAX_VALID_LIQUIDATION_THRESHOLD
    }

    pub fn get_max_valid_liquidation_bonus() -> u32 {
        MAX_VALID_LIQUIDATION_BONUS
    }

    pub fn get_max_valid_decimals() -> u32 {
        MAX_VALID_DECIMALS
    }

    pub fn get_max_valid_reserve_factor() -> u32 {
        MAX_VALID_RESERVE_FACTOR
    }

    pub fn get_max_valid_borrow_cap() -> u64 {
        MAX_VALID_BORROW_CAP
    }

    pub fn get_max_valid_supply_cap() -> u64 {
        MAX_VALID_SUPPLY_CAP
    }

    pub fn get_max_valid_liquidation_protocol_fee() -> u32 {
        MAX_VALID_LIQUIDATION_PROTOCOL_FEE
    }

    pub fn get_max_valid_emode_category() -> u32 {
        MAX_VALID_EMODE_CATEGORY
    }

    pub fn get_max_valid_debt_ceiling() -> u64 {
        MAX_VALID_DEBT_CEILING
    }

    pub fn get_min_reserve_asset_decimals() -> u32 {
        MIN_RESERVE_ASSET_DECIMALS
    }

    pub fn get_max_valid_liquidation_grace_period() -> u64 {
        MAX_VALID_LIQUIDATION_GRACE_PERIOD
    }

    pub fn get_debt_ceiling_decimals() -> u32 {
        DEBT_CEILING_DECIMALS
    }

    pub fn get_max_reserves_count() -> u32 {
        MAX_RESERVES_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::{random_word, reserve_fields, reserve_flags};
    use rand::{thread_rng, RngCore};

    #[test]
    fn test_init_is_empty() {
        let config = ReserveConfigurationMap::init();
        assert_eq!(config.word(), U256::ZERO);
        assert_eq!(config, ReserveConfigurationMap::default());
        assert_eq!(config.get_params(), (0, 0, 0, 0, 0, 0));
        assert_eq!(config.get_flags(), (false, false, false, false));
        assert_eq!(config.get_caps(), (0, 0));
        assert_eq!(config.get_debt_ceiling(), 0);
    }

    #[test]
    fn test_set_ltv() {
        let mut config = ReserveConfigurationMap::init();
        config.set_ltv(8000).unwrap();

        assert_eq!(config.get_ltv(), 8000);
        assert_eq!(config.get_liquidation_threshold(), 0);
        assert_eq!(config.word(), U256::from(8000));
    }

    #[test]
    fn test_set_debt_ceiling() {
        let mut config = ReserveConfigurationMap::init();
        config.set_debt_ceiling(20).unwrap();

        assert_eq!(config.get_debt_ceiling(), 20);
        assert_eq!(ReserveConfigurationMap::get_debt_ceiling_decimals(), 2);
        assert_eq!(config.word(), U256::from(20) << 212usize);
    }

    #[test]
    fn test_layout_positions() {
        let mut config = ReserveConfigurationMap::init();
        config.set_ltv(1).unwrap();
        config.set_liquidation_threshold(1).unwrap();
        config.set_liquidation_bonus(1).unwrap();
        config.set_decimals(1).unwrap();
        config.set_active(true);
        config.set_frozen(true);
        config.set_borrowing_enabled(true);
        config.set_paused(true);
        config.set_borrowable_in_isolation(true);
        config.set_siloed_borrowing(true);
        config.set_flash_loan_enabled(true);
        config.set_reserve_factor(1).unwrap();
        config.set_borrow_cap(1).unwrap();
        config.set_supply_cap(1).unwrap();
        config.set_liquidation_protocol_fee(1).unwrap();
        config.set_emode_category(1).unwrap();
        config.set_debt_ceiling(1).unwrap();

        let mut expected = U256::ZERO;
        for bit in [
            0usize, 16, 32, 48, 56, 57, 58, 60, 61, 62, 63, 64, 80, 116, 152, 168, 212,
        ] {
            expected |= U256::from(1) << bit;
        }
        assert_eq!(config.word(), expected);
    }

    #[test]
    fn test_max_values_fill_field_widths() {
        let mut config = ReserveConfigurationMap::init();
        config.set_ltv(MAX_VALID_LTV).unwrap();
        assert_eq!(config.word(), U256::from(0xFFFFu64));

        let mut config = ReserveConfigurationMap::init();
        config.set_borrow_cap(MAX_VALID_BORROW_CAP).unwrap();
        assert_eq!(config.word(), U256::from(0xF_FFFF_FFFFu64) << 80usize);

        let mut config = ReserveConfigurationMap::init();
        config.set_supply_cap(MAX_VALID_SUPPLY_CAP).unwrap();
        assert_eq!(config.word(), U256::from(0xF_FFFF_FFFFu64) << 116usize);

        let mut config = ReserveConfigurationMap::init();
        config.set_debt_ceiling(MAX_VALID_DEBT_CEILING).unwrap();
        assert_eq!(config.word(), U256::from(0xFF_FFFF_FFFFu64) << 212usize);
    }

    #[test]
    fn test_round_trip_bounds() {
        for field in reserve_fields() {
            for value in [0, 1, field.max / 2, field.max - 1, field.max] {
                let mut config = ReserveConfigurationMap::init();
                (field.set)(&mut config, value).unwrap();
                assert_eq!((field.get)(&config), value, "{}", field.name);
            }
        }
    }

    #[test]
    fn test_round_trip_random() {
        for field in reserve_fields() {
            let mut config = ReserveConfigurationMap::from_word(random_word());
            let value = thread_rng().next_u64() % (field.max + 1);
            (field.set)(&mut config, value).unwrap();
            assert_eq!((field.get)(&config), value, "{}", field.name);
        }
    }

    #[test]
    fn test_out_of_range_leaves_word_unchanged() {
        for field in reserve_fields() {
            let mut config = ReserveConfigurationMap::from_word(random_word());
            let before = config;

            let result = (field.set)(&mut config, field.max + 1);
            assert_eq!(result, Err(field.error), "{}", field.name);
            assert_eq!(config, before, "{}", field.name);
        }
    }

    #[test]
    fn test_setters_do_not_interfere() {
        let fields = reserve_fields();
        let flags = reserve_flags();
        for field in fields.iter() {
            // start from every field at its max and every flag set
            let mut config = ReserveConfigurationMap::init();
            for other in fields.iter() {
                (other.set)(&mut config, other.max).unwrap();
            }
            for flag in flags.iter() {
                (flag.set)(&mut config, true);
            }

            (field.set)(&mut config, 0).unwrap();

            assert_eq!((field.get)(&config), 0);
            for other in fields.iter().filter(|other| other.name != field.name) {
                assert_eq!((other.get)(&config), other.max, "{} changed {}", field.name, other.name);
            }
            for flag in flags.iter() {
                assert!((flag.get)(&config), "{} changed {}", field.name, flag.name);
            }
        }
    }

    #[test]
    fn test_flags_do_not_interfere() {
        let fields = reserve_fields();
        let flags = reserve_flags();
        for flag in flags.iter() {
            let mut config = ReserveConfigurationMap::init();
            for field in fields.iter() {
                (field.set)(&mut config, field.max).unwrap();
            }

            (flag.set)(&mut config, true);
            assert!((flag.get)(&config), "{}", flag.name);
            for other in flags.iter().filter(|other| other.name != flag.name) {
                assert!(!(other.get)(&config), "{} changed {}", flag.name, other.name);
            }
            for field in fields.iter() {
                assert_eq!((field.get)(&config), field.max, "{} changed {}", flag.name, field.name);
            }

            (flag.set)(&mut config, false);
            assert!(!(flag.get)(&config), "{}", flag.name);
        }
    }

    #[test]
    fn test_reserved_bits_survive_updates() {
        let mut reserved = U256::from(1) << 59usize;
        for bit in (176usize..212).chain(252..256) {
            reserved |= U256::from(1) << bit;
        }

        let mut config = ReserveConfigurationMap::from_word(reserved);
        for field in reserve_fields() {
            (field.set)(&mut config, field.max).unwrap();
            (field.set)(&mut config, 0).unwrap();
        }
        for flag in reserve_flags() {
            (flag.set)(&mut config, true);
            (flag.set)(&mut config, false);
        }

        assert_eq!(config.word(), reserved);
    }

    #[test]
    fn test_get_flags() {
        let mut config = ReserveConfigurationMap::init();
        config.set_active(true);
        config.set_paused(true);
        assert_eq!(config.get_flags(), (true, false, false, true));

        config.set_frozen(true);
        config.set_borrowing_enabled(true);
        config.set_paused(false);
        assert_eq!(config.get_flags(), (true, true, true, false));

        // flags outside the bundle do not leak into it
        let mut config = ReserveConfigurationMap::init();
        config.set_borrowable_in_isolation(true);
        config.set_siloed_borrowing(true);
        config.set_flash_loan_enabled(true);
        assert_eq!(config.get_flags(), (false, false, false, false));
    }

    #[test]
    fn test_get_flags_matches_getters_random() {
        let config = ReserveConfigurationMap::from_word(random_word());
        assert_eq!(
            config.get_flags(),
            (
                config.get_active(),
                config.get_frozen(),
                config.get_borrowing_enabled(),
                config.get_paused()
            )
        );
    }

    #[test]
    fn test_get_params_and_caps() {
        let mut config = ReserveConfigurationMap::init();
        config.set_ltv(7500).unwrap();
        config.set_liquidation_threshold(8000).unwrap();
        config.set_liquidation_bonus(10500).unwrap();
        config.set_decimals(18).unwrap();
        config.set_reserve_factor(1000).unwrap();
        config.set_emode_category(3).unwrap();
        config.set_borrow_cap(1_000_000).unwrap();
        config.set_supply_cap(2_000_000).unwrap();

        assert_eq!(config.get_params(), (7500, 8000, 10500, 18, 1000, 3));
        assert_eq!(config.get_caps(), (1_000_000, 2_000_000));
    }

    #[test]
    fn test_overwrite_field() {
        let mut config = ReserveConfigurationMap::init();
        config.set_supply_cap(MAX_VALID_SUPPLY_CAP).unwrap();
        config.set_supply_cap(5).unwrap();
        assert_eq!(config.get_supply_cap(), 5);
        assert_eq!(config.word(), U256::from(5) << 116usize);
    }

    #[test]
    fn test_limits() {
        assert_eq!(ReserveConfigurationMap::get_max_valid_ltv(), 65535);
        assert_eq!(ReserveConfigurationMap::get_max_valid_liquidation_threshold(), 65535);
        assert_eq!(ReserveConfigurationMap::get_max_valid_liquidation_bonus(), 65535);
        assert_eq!(ReserveConfigurationMap::get_max_valid_decimals(), 255);
        assert_eq!(ReserveConfigurationMap::get_max_valid_reserve_factor(), 65535);
        assert_eq!(ReserveConfigurationMap::get_max_valid_borrow_cap(), (1 << 36) - 1);
        assert_eq!(ReserveConfigurationMap::get_max_valid_supply_cap(), (1 << 36) - 1);
        assert_eq!(ReserveConfigurationMap::get_max_valid_liquidation_protocol_fee(), 65535);
        assert_eq!(ReserveConfigurationMap::get_max_valid_emode_category(), 255);
        assert_eq!(ReserveConfigurationMap::get_max_valid_debt_ceiling(), (1 << 40) - 1);
        assert_eq!(ReserveConfigurationMap::get_min_reserve_asset_decimals(), 6);
        assert_eq!(ReserveConfigurationMap::get_max_valid_liquidation_grace_period(), 14400);
        assert_eq!(ReserveConfigurationMap::get_debt_ceiling_decimals(), 2);
        assert_eq!(ReserveConfigurationMap::get_max_reserves_count(), 128);
    }
}
