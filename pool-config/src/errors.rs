use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the packed configuration words. Codes start at 1300 so they never collide
/// with pool errors when a contract forwards them.
pub enum ConfigError {
    // Reserve Field Errors (1300-1309)
    InvalidLtv = 1300,
    InvalidLiquidationThreshold = 1301,
    InvalidLiquidationBonus = 1302,
    InvalidDecimals = 1303,
    InvalidReserveFactor = 1304,
    InvalidBorrowCap = 1305,
    InvalidSupplyCap = 1306,
    InvalidDebtCeiling = 1307,
    InvalidLiquidationProtocolFee = 1308,
    InvalidEmodeCategory = 1309,

    // User Config Errors
    InvalidReserveIndex = 1310,
    ReserveNotListed = 1311,

    // Misc
    InvalidInterestRateMode = 1312,
}
