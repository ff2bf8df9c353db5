use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidParameters = 4,
    /// Payment differs from the current bid cost
    IncorrectPaymentFee = 5,
    /// The bid fee could not be quoted
    OracleUnavailable = 6,
    CommitPhaseClosed = 7,
    AlreadyCommitted = 8,
    NotRevealPhase = 9,
    NoCommitment = 10,
    /// Revealed value does not hash to the stored commitment
    InvalidReveal = 11,
    AlreadyRevealed = 12,
    AuctionNotYetClosed = 13,
    InvalidWinner = 14,
    WinnerAlreadySet = 15,
    NothingToWithdraw = 16,
    Overflow = 17,
}
