use alloy_primitives::U256;

use crate::{
    bits::{bitwise_negation, is_single_bit},
    constants::MAX_RESERVES_COUNT,
    errors::ConfigError,
    reserve_config::ReserveConfigurationMap,
};

/// Selects the borrowing bit of every reserve
pub const BORROWING_MASK: U256 = U256::from_limbs([0x5555_5555_5555_5555; 4]);

/// Selects the collateral bit of every reserve
pub const COLLATERAL_MASK: U256 = U256::from_limbs([0xAAAA_AAAA_AAAA_AAAA; 4]);

/// Packs a `U256` to represent which reserves a user borrows and uses as collateral
///
/// Each reserve takes two bits, from LSB to MSB ->
///
/// `2 * index` -> 0 / 1 = not borrowing / borrowing\
/// `2 * index + 1` -> 0 / 1 = not collateral / collateral
///
/// Supports a maximum of `MAX_RESERVES_COUNT` indexable reserves.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct UserConfigurationMap {
    data: U256,
}

/// The isolated collateral of a user
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct IsolationModeState {
    pub reserve_index: u32,
    pub debt_ceiling: u64,
}

/// Resolves a reserve index to the configuration of that reserve
pub trait ReserveConfigSource {
    /// Fetch the configuration of the reserve at `reserve_index`, if it is listed
    fn reserve_configuration(&self, reserve_index: u32) -> Option<ReserveConfigurationMap>;
}

impl ReserveConfigSource for [ReserveConfigurationMap] {
    fn reserve_configuration(&self, reserve_index: u32) -> Option<ReserveConfigurationMap> {
        self.get(reserve_index as usize).copied()
    }
}

fn require_valid_index(reserve_index: u32) -> Result<(), ConfigError> {
    if reserve_index >= MAX_RESERVES_COUNT {
        #[cfg(feature = "logging")]
        log::debug!(
            "reserve index {} exceeds max reserves {}",
            reserve_index,
            MAX_RESERVES_COUNT
        );
        return Err(ConfigError::InvalidReserveIndex);
    }
    Ok(())
}

impl UserConfigurationMap {
    /// Create an empty configuration, not borrowing or supplying any reserve
    pub fn init() -> Self {
        UserConfigurationMap { data: U256::ZERO }
    }

    /// Wrap a packed word read from storage
    pub fn from_word(data: U256) -> Self {
        UserConfigurationMap { data }
    }

    /// The packed word
    pub fn word(&self) -> U256 {
        self.data
    }

    /// Set if the user is borrowing the reserve at `reserve_index`
    ///
    /// ### Arguments
    /// * `reserve_index` - The index of the reserve
    /// * `borrowing` - If the user is borrowing the reserve
    ///
    /// ### Errors
    /// `InvalidReserveIndex` if `reserve_index` is not below `MAX_RESERVES_COUNT`
    pub fn set_borrowing(&mut self, reserve_index: u32, borrowing: bool) -> Result<(), ConfigError> {
        require_valid_index(reserve_index)?;
        let bit = U256::from(1) << ((reserve_index as usize) << 1);
        if borrowing {
            self.data |= bit;
        } else {
            self.data &= bitwise_negation(bit);
        }
        Ok(())
    }

    /// Set if the user is using the reserve at `reserve_index` as collateral
    ///
    /// ### Arguments
    /// * `reserve_index` - The index of the reserve
    /// * `using_as_collateral` - If the user is using the reserve as collateral
    ///
    /// ### Errors
    /// `InvalidReserveIndex` if `reserve_index` is not below `MAX_RESERVES_COUNT`
    pub fn set_using_as_collateral(
        &mut self,
        reserve_index: u32,
        using_as_collateral: bool,
    ) -> Result<(), ConfigError> {
        require_valid_index(reserve_index)?;
        let bit = U256::from(1) << (((reserve_index as usize) << 1) + 1);
        if using_as_collateral {
            self.data |= bit;
        } else {
            self.data &= bitwise_negation(bit);
        }
        Ok(())
    }

    /// Checks if the user is borrowing or using as collateral the reserve at `reserve_index`
    ///
    /// ### Errors
    /// `InvalidReserveIndex` if `reserve_index` is not below `MAX_RESERVES_COUNT`
    pub fn is_using_as_collateral_or_borrowing(
        &self,
        reserve_index: u32,
    ) -> Result<bool, ConfigError> {
        require_valid_index(reserve_index)?;
        let slot = self.data >> ((reserve_index as usize) << 1);
        Ok(!(slot & U256::from(0b11)).is_zero())
    }

    /// Checks if the user is borrowing the reserve at `reserve_index`
    ///
    /// ### Errors
    /// `InvalidReserveIndex` if `reserve_index` is not below `MAX_RESERVES_COUNT`
    pub fn is_borrowing(&self, reserve_index: u32) -> Result<bool, ConfigError> {
        require_valid_index(reserve_index)?;
        let slot = self.data >> ((reserve_index as usize) << 1);
        Ok(!(slot & U256::from(0b01)).is_zero())
    }

    /// Checks if the user is using the reserve at `reserve_index` as collateral
    ///
    /// ### Errors
    /// `InvalidReserveIndex` if `reserve_index` is not below `MAX_RESERVES_COUNT`
    pub fn is_using_as_collateral(&self, reserve_index: u32) -> Result<bool, ConfigError> {
        require_valid_index(reserve_index)?;
        let slot = self.data >> (((reserve_index as usize) << 1) + 1);
        Ok(!(slot & U256::from(0b01)).is_zero())
    }

    /// Checks if the user is using exactly one reserve as collateral
    pub fn is_using_as_collateral_one(&self) -> bool {
        is_single_bit(self.data & COLLATERAL_MASK)
    }

    /// Checks if the user is using any reserve as collateral
    pub fn is_using_as_collateral_any(&self) -> bool {
        !(self.data & COLLATERAL_MASK).is_zero()
    }

    /// Checks if the user is borrowing exactly one reserve
    pub fn is_borrowing_one(&self) -> bool {
        is_single_bit(self.data & BORROWING_MASK)
    }

    /// Checks if the user is borrowing any reserve
    pub fn is_borrowing_any(&self) -> bool {
        !(self.data & BORROWING_MASK).is_zero()
    }

    /// Checks if the user is neither borrowing nor using any reserve as collateral
    pub fn is_empty(&self) -> bool {
        self.data.is_zero()
    }

    /// Fetch the index of the lowest reserve with a bit set in both the configuration
    /// and `mask`. Returns 0 if no bit is set.
    ///
    /// ### Arguments
    /// * `mask` - The bits to consider, usually `BORROWING_MASK` or `COLLATERAL_MASK`
    pub fn get_first_asset_id_by_mask(&self, mask: U256) -> u32 {
        let bitmap_used = self.data & mask;
        let mut first_asset_used =
            bitmap_used & bitwise_negation(bitmap_used.wrapping_sub(U256::from(1)));
        let mut id = 0;
        loop {
            first_asset_used >>= 2usize;
            if first_asset_used.is_zero() {
                break;
            }
            id += 1;
        }
        id
    }

    /// Fetch the isolated collateral of the user. A user is in isolation mode when they use
    /// exactly one reserve as collateral and that reserve has a debt ceiling.
    ///
    /// ### Arguments
    /// * `reserves` - The configurations of the listed reserves
    ///
    /// ### Errors
    /// `ReserveNotListed` if the collateral reserve is missing from `reserves`
    pub fn get_isolation_mode_state<S: ReserveConfigSource + ?Sized>(
        &self,
        reserves: &S,
    ) -> Result<Option<IsolationModeState>, ConfigError> {
        if !self.is_using_as_collateral_one() {
            return Ok(None);
        }
        let reserve_index = self.get_first_asset_id_by_mask(COLLATERAL_MASK);
        let config = reserves
            .reserve_configuration(reserve_index)
            .ok_or(ConfigError::ReserveNotListed)?;
        let debt_ceiling = config.get_debt_ceiling();
        if debt_ceiling == 0 {
            return Ok(None);
        }
        Ok(Some(IsolationModeState {
            reserve_index,
            debt_ceiling,
        }))
    }

    /// Fetch the siloed reserve the user is borrowing. A user is siloed when they borrow
    /// exactly one reserve and that reserve has siloed borrowing enabled.
    ///
    /// ### Arguments
    /// * `reserves` - The configurations of the listed reserves
    ///
    /// ### Errors
    /// `ReserveNotListed` if the borrowed reserve is missing from `reserves`
    pub fn get_siloed_borrowing_state<S: ReserveConfigSource + ?Sized>(
        &self,
        reserves: &S,
    ) -> Result<Option<u32>, ConfigError> {
        if !self.is_borrowing_one() {
            return Ok(None);
        }
        let reserve_index = self.get_first_asset_id_by_mask(BORROWING_MASK);
        let config = reserves
            .reserve_configuration(reserve_index)
            .ok_or(ConfigError::ReserveNotListed)?;
        if config.get_siloed_borrowing() {
            Ok(Some(reserve_index))
        } else {
            Ok(None)
        }
    }
}
