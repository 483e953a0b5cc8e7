//! Error definitions for the token distributor
use odra::prelude::*;

/// Custom errors for the distributor contract.
///
/// Codes 1-19 are configuration errors and only come out of initialization.
/// Codes 20-29 are lifecycle misuse. Codes 30-39 are operational failures of
/// a distribution round; the round commits nothing and may be retried.
#[odra::odra_error]
pub enum DistributorError {
    /// No recipients were supplied
    EmptyRecipientList = 1,

    /// More recipients than a single round may pay out
    TooManyRecipients = 2,

    /// The same account appears twice in the recipient list
    DuplicateRecipient = 3,

    /// A single share is above 10000 basis points
    ShareOutOfRange = 4,

    /// Recipient shares plus the reward share are not exactly 10000
    SharesDoNotSumTo100Percent = 5,

    /// Distribution amount is zero
    ZeroDistributionAmount = 6,

    /// Distribution amount cannot be scaled by 10000 without overflow
    DistributionAmountTooLarge = 7,

    /// Group share is not divisible by the number of recipients
    UnevenEqualSplit = 8,

    /// Token address is not a contract
    InvalidToken = 9,

    /// A payee is the distributor itself or the token contract
    InvalidAccount = 10,

    /// Distributor has not been initialized
    NotInitialized = 20,

    /// Distributor has already been initialized
    AlreadyInitialized = 21,

    /// Caller is not the account that deployed the distributor
    Unauthorized = 22,

    /// Token holdings are below the distribution amount
    InsufficientBalance = 30,

    /// Token refused one of the transfers
    TransferFailed = 31,

    /// Holdings did not drop by exactly the distribution amount
    BalanceMismatch = 32,

    /// Overflow error
    ArithmeticOverflow = 33,
}
