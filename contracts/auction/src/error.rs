// Auction error module for the Delfy auction suite

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuctionError {
    // Initialization errors (100-199)
    AlreadyInitialized = 100,

    // State errors (200-299)
    AuctionClosed = 200,
    AuctionOpen = 201,
    AlreadyLaunched = 202,
    NotLaunched = 203,
    InvalidState = 204,
    AlreadyComplete = 205,
    ReleaseStopped = 206,
    ReleaseNotStopped = 207,
    TooEarly = 208,
    DeadlineExpired = 209,

    // Authorization errors (300-399)
    NotInvestor = 301,
    NotRealInvestor = 302,

    // Validation errors (400-499)
    OutOfRange = 400,
    CapExceeded = 401,
    NotWhitelisted = 402,
    DonationTooLow = 403,
    InsufficientStake = 404,
    InvalidAmount = 405,
    InvalidRange = 406,
    InsufficientInventory = 407,

    // Case errors (500-599)
    UnknownCase = 500,
    AlreadyVoted = 501,
    CaseAlreadyPassed = 502,
    WindowClosed = 503,
}
