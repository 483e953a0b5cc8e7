//! Error definitions for the CEP-18 token
use odra::prelude::*;

/// Custom errors for the stable token contract
#[odra::odra_error]
pub enum TokenError {
    /// Insufficient allowance for transfer
    InsufficientAllowance = 100,

    /// Insufficient balance for operation
    InsufficientBalance = 101,

    /// Caller is not the token admin
    Unauthorized = 102,
}
