use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidParameters = 4,
    /// The price feed could not be read or has no price yet
    OracleUnavailable = 5,
    /// The latest price is older than the configured maximum age
    StalePrice = 6,
    /// The feed reported a zero or negative price
    InvalidPrice = 7,
    Overflow = 8,
}
