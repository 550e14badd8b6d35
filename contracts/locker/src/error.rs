// Locker error module for the Delfy auction suite

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LockerError {
    // Initialization errors (100-199)
    AlreadyInitialized = 100,

    // State errors (200-299)
    LockActive = 200,
    LockExists = 201,

    // Authorization errors (300-399)
    NotFactory = 301,

    // Validation errors (400-499)
    InvalidAmount = 400,
    InsufficientBalance = 401,

    // Lookup errors (500-599)
    LockNotFound = 500,
}
