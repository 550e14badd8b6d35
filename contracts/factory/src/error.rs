// Factory error module for the Delfy auction suite

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FactoryError {
    // Initialization errors (1000-1099)
    AlreadyInitialized = 1000,
    NotInitialized = 1001,

    // Auction creation errors (1100-1199)
    AuctionExists = 1100,
    InvalidRate = 1101,
    InvalidSalesPeriod = 1102,
    InvalidDevFee = 1103,
    LockPeriodTooShort = 1104,
    LockerNotSet = 1105,
}
