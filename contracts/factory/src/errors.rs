use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    FactoryPaused = 4,
    IncorrectDeployFee = 5,
    InvalidParameters = 6,
    InsufficientBalance = 7,
    Overflow = 8,
    InstanceNotFound = 9,
}
